/* ********************************************************************** **
** This file is part of fixmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                     **
**                                                                        **
**     http://www.apache.org/licenses/LICENSE-2.0                         **
**     http://opensource.org/licenses/MIT                                 **
** ********************************************************************** */

use thiserror::Error;

/// Failures reported by matrix operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// An index (or the far corner of a block) fell outside the matrix.
    ///
    /// For checks that only involve a row (or only a column), the other
    /// coordinate is reported as zero.
    #[error("index ({row}, {col}) is out of range for a {rows}x{cols} matrix")]
    OutOfRange { row: usize, col: usize, rows: usize, cols: usize },

    /// Inversion was attempted on a matrix whose determinant is zero
    /// (or within the requested tolerance of zero).
    #[error("matrix is singular (determinant: {det:e})")]
    SingularMatrix { det: f64 },

    #[error("expected {expected} elements for bulk load, but the sequence ended after {found}")]
    TooFewElements { expected: usize, found: usize },

    #[error("expected exactly {expected} elements, got {found}")]
    LengthMismatch { expected: usize, found: usize },
}

/// Check a single `(row, col)` pair.
#[inline(always)]
pub(crate) fn check_index(
    (row, col): (usize, usize),
    (rows, cols): (usize, usize),
) -> Result<(), MatrixError> {
    match row < rows && col < cols {
        true => Ok(()),
        false => Err(MatrixError::OutOfRange { row, col, rows, cols }),
    }
}

/// Check that a `height x width` block starting at `(row, col)` fits.
///
/// On failure, the reported index is the block's last row and column.
#[inline]
pub(crate) fn check_block(
    (row, col): (usize, usize),
    (height, width): (usize, usize),
    (rows, cols): (usize, usize),
) -> Result<(), MatrixError> {
    // an empty block fits anywhere, so long as its origin does not overflow
    let end_row = row.checked_add(height);
    let end_col = col.checked_add(width);
    match (end_row, end_col) {
        (Some(end_row), Some(end_col)) if end_row <= rows && end_col <= cols => Ok(()),
        _ => Err(MatrixError::OutOfRange {
            row: row.saturating_add(height.saturating_sub(1)),
            col: col.saturating_add(width.saturating_sub(1)),
            rows, cols,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_checks() {
        assert!(check_index((1, 1), (3, 2)).is_ok());
        assert_eq!(
            check_index((3, 2), (3, 2)),
            Err(MatrixError::OutOfRange { row: 3, col: 2, rows: 3, cols: 2 }),
        );
        assert!(check_index((0, 2), (3, 2)).is_err());
    }

    #[test]
    fn block_checks() {
        assert!(check_block((1, 1), (1, 2), (2, 3)).is_ok());
        assert!(check_block((0, 0), (2, 3), (2, 3)).is_ok());
        assert_eq!(
            check_block((1, 2), (1, 2), (2, 3)),
            Err(MatrixError::OutOfRange { row: 1, col: 3, rows: 2, cols: 3 }),
        );
        assert!(check_block((usize::MAX, 0), (2, 1), (2, 3)).is_err());
    }

    #[test]
    fn messages() {
        let e = MatrixError::OutOfRange { row: 3, col: 2, rows: 3, cols: 2 };
        assert_eq!(e.to_string(), "index (3, 2) is out of range for a 3x2 matrix");
        let e = MatrixError::TooFewElements { expected: 6, found: 4 };
        assert!(e.to_string().contains("after 4"));
    }
}
