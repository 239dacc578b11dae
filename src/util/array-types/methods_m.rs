/* ********************************************************************** **
** This file is part of fixmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                     **
**                                                                        **
**     http://www.apache.org/licenses/LICENSE-2.0                         **
**     http://opensource.org/licenses/MIT                                 **
** ********************************************************************** */

//! Algebraic and structural operations on `Matrix`.
//!
//! This library uses a row-major, column-vector formalism: `m * v` treats
//! `v` as a column, and rows are the contiguous unit of storage.

use crate::error::{MatrixError, check_block};
use crate::ops::matmul;
use crate::traits::Semiring;
use crate::types::*;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Construct an identity matrix (using type inference).
///
/// This is also available as `Matrix::eye()` and `Matrix::IDENTITY`.
#[inline(always)]
pub fn eye<const N: usize, X: Semiring>() -> Matrix<N, N, X>
{ Matrix::IDENTITY }

/// Construct a zero matrix (using type inference).
///
/// This is also available as `Matrix::zero()` and `Matrix::ZERO`.
#[inline(always)]
pub fn zero<const R: usize, const C: usize, X: Semiring>() -> Matrix<R, C, X>
{ Matrix::ZERO }

/// Matrix transpose.
#[inline(always)]
pub fn transpose<const R: usize, const C: usize, X: Copy>(m: &Matrix<R, C, X>) -> Matrix<C, R, X>
{ m.t() }

/// Block-diagonal composition of two matrices, with the output shape
/// decided by type inference.
///
/// See [`Matrix::direct_sum`].
#[inline]
pub fn direct_sum<
    const M: usize, const N: usize,
    const P: usize, const Q: usize,
    const R: usize, const C: usize,
    X: Semiring,
>(upper_left: &Matrix<M, N, X>, lower_right: &Matrix<P, Q, X>) -> Matrix<R, C, X> {
    let mut out = Matrix::ZERO;
    out.direct_sum(upper_left, lower_right);
    out
}

impl<const N: usize, X: Semiring> Matrix<N, N, X> {
    /// Construct the identity matrix.
    #[inline(always)]
    pub fn eye() -> Self
    { Self::IDENTITY }
}

impl<const R: usize, const C: usize, X: Semiring> Matrix<R, C, X> {
    /// Construct the zero matrix.
    #[inline(always)]
    pub fn zero() -> Self
    { Self::ZERO }
}

impl<const R: usize, const C: usize, X: Copy> Matrix<R, C, X> {
    /// Matrix transpose.
    #[inline]
    pub fn t(&self) -> Matrix<C, R, X>
    { Matrix::from_fn(|r, c| self.0[c][r]) }
}

// ---------------------------------------------------------------------------
// Equality.

impl<const R: usize, const C: usize, X: Semiring> Matrix<R, C, X> {
    /// True when every pair of elements differs by at most `tolerance`.
    ///
    /// Use this rather than `==` wherever rounding error is expected;
    /// `==` is exact and fails on the slightest perturbation.
    pub fn equals(&self, other: &Self, tolerance: X) -> bool {
        self.iter_row_major().zip(other.iter_row_major())
            .all(|(&a, &b)| a.abs_diff(b) <= tolerance)
    }

    /// The largest elementwise absolute difference.
    pub fn max_abs_diff(&self, other: &Self) -> X {
        self.iter_row_major().zip(other.iter_row_major())
            .map(|(&a, &b)| a.abs_diff(b))
            .fold(X::ZERO, |acc, d| match d > acc {
                true => d,
                false => acc,
            })
    }
}

// ---------------------------------------------------------------------------
// Multiplication into an existing matrix.

impl<const R: usize, const C: usize, X: Semiring> Matrix<R, C, X> {
    /// Overwrite `self` with `a * b`.
    #[inline]
    pub fn multiply<const K: usize>(&mut self, a: &Matrix<R, K, X>, b: &Matrix<K, C, X>)
    { *self = matmul(&a.0, &b.0); }
}

impl<X: Semiring> Matrix<4, 4, X> {
    /// Multiply a 3-vector, promoted to homogeneous coordinates `(x, y, z, 1)`.
    ///
    /// The full homogeneous result is returned.  Nothing is divided by `w`
    /// and nothing is truncated; use [`Vector::dehomogenize`] for that.
    #[inline]
    pub fn mul_homogeneous(&self, v: &Vector<3, X>) -> Vector<4, X>
    { self * v.homogeneous() }
}

// ---------------------------------------------------------------------------
// Rows, columns and blocks.
//
// Each of these validates its indices up front, so a failed call
// never leaves a partial write behind.

// Row and column indices report the other coordinate as 0.
fn check_row<const R: usize, const C: usize>(index: usize) -> Result<(), MatrixError> {
    match index < R {
        true => Ok(()),
        false => Err(MatrixError::OutOfRange { row: index, col: 0, rows: R, cols: C }),
    }
}

fn check_column<const R: usize, const C: usize>(index: usize) -> Result<(), MatrixError> {
    match index < C {
        true => Ok(()),
        false => Err(MatrixError::OutOfRange { row: 0, col: index, rows: R, cols: C }),
    }
}

impl<const R: usize, const C: usize, X: Copy> Matrix<R, C, X> {
    /// Copy row `index` into `out`.
    pub fn get_row(&self, index: usize, out: &mut Matrix<1, C, X>) -> Result<(), MatrixError> {
        *out = self.row(index)?;
        Ok(())
    }

    /// Overwrite row `index` with `row`.
    pub fn set_row(&mut self, index: usize, row: &Matrix<1, C, X>) -> Result<(), MatrixError> {
        check_row::<R, C>(index)?;
        self.set_sub_matrix(row, index, 0)
    }

    /// Copy column `index` into `out`.
    pub fn get_column(&self, index: usize, out: &mut Matrix<R, 1, X>) -> Result<(), MatrixError> {
        *out = self.column(index)?;
        Ok(())
    }

    /// Overwrite column `index` with `column`.
    pub fn set_column(&mut self, index: usize, column: &Matrix<R, 1, X>) -> Result<(), MatrixError> {
        check_column::<R, C>(index)?;
        self.set_sub_matrix(column, 0, index)
    }

    /// Row `index` as a `1 x C` matrix.
    pub fn row(&self, index: usize) -> Result<Matrix<1, C, X>, MatrixError> {
        check_row::<R, C>(index)?;
        Ok(Matrix([self.0[index]]))
    }

    /// Column `index` as an `R x 1` matrix.
    pub fn column(&self, index: usize) -> Result<Matrix<R, 1, X>, MatrixError> {
        check_column::<R, C>(index)?;
        Ok(Matrix::from_fn(|r, _| self.0[r][index]))
    }

    /// Copy the `P x Q` block whose top-left corner is at
    /// `(row_offset, col_offset)` into `out`.
    pub fn get_sub_matrix<const P: usize, const Q: usize>(
        &self,
        out: &mut Matrix<P, Q, X>,
        row_offset: usize,
        col_offset: usize,
    ) -> Result<(), MatrixError> {
        check_block((row_offset, col_offset), (P, Q), (R, C))?;
        for (r, out_row) in out.0.iter_mut().enumerate() {
            let src = &self.0[row_offset + r][col_offset..col_offset + Q];
            out_row.copy_from_slice(src);
        }
        Ok(())
    }

    /// Overwrite the block whose top-left corner is at
    /// `(row_offset, col_offset)` with the contents of `block`.
    pub fn set_sub_matrix<const P: usize, const Q: usize>(
        &mut self,
        block: &Matrix<P, Q, X>,
        row_offset: usize,
        col_offset: usize,
    ) -> Result<(), MatrixError> {
        check_block((row_offset, col_offset), (P, Q), (R, C))?;
        for (r, block_row) in block.0.iter().enumerate() {
            let dest = &mut self.0[row_offset + r][col_offset..col_offset + Q];
            dest.copy_from_slice(block_row);
        }
        Ok(())
    }
}

impl<const R: usize, const C: usize, X: Semiring> Matrix<R, C, X> {
    /// Overwrite `self` with the direct sum (block-diagonal composition)
    /// of `upper_left` and `lower_right`.
    ///
    /// Everything outside the two diagonal blocks becomes zero.
    /// The shapes must satisfy `M + P == R` and `N + Q == C`; this is
    /// checked at compile time.
    pub fn direct_sum<const M: usize, const N: usize, const P: usize, const Q: usize>(
        &mut self,
        upper_left: &Matrix<M, N, X>,
        lower_right: &Matrix<P, Q, X>,
    ) {
        const {
            assert!(M + P == R, "direct_sum: row counts do not add up");
            assert!(N + Q == C, "direct_sum: column counts do not add up");
        }
        *self = Self::ZERO;
        for r in 0..M {
            self.0[r][..N].copy_from_slice(&upper_left.0[r]);
        }
        for r in 0..P {
            self.0[M + r][N..].copy_from_slice(&lower_right.0[r]);
        }
    }
}

// ---------------------------------------------------------------------------
