/* ********************************************************************** **
** This file is part of fixmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                     **
**                                                                        **
**     http://www.apache.org/licenses/LICENSE-2.0                         **
**     http://opensource.org/licenses/MIT                                 **
** ********************************************************************** */

//! Element access and bulk loading.
//!
//! There are three ways to get at an element:
//!
//! * `at`/`at_mut` and indexing (`m[r][c]`, `m[(r, c)]`) always check bounds
//!   and panic on a bad index.  They never wrap or clamp.
//! * `try_at`/`try_at_mut` report a bad index as [`MatrixError::OutOfRange`].
//! * `at_unchecked`/`at_unchecked_mut` skip the check.  Out-of-range indices
//!   are undefined behavior, unless the crate is built with the
//!   `safe-accessors` feature, in which case they panic like `at`.

use std::ops::{Index, IndexMut};

use crate::error::{MatrixError, check_index};
use crate::types::*;

impl<const R: usize, const C: usize, X> Matrix<R, C, X> {
    /// Construct from a 2D array of rows.
    #[inline(always)]
    pub fn from_array(rows: [[X; C]; R]) -> Self
    { Matrix(rows) }

    /// Construct a matrix from a function on indices `(row, col)`.
    #[inline]
    pub fn from_fn<F>(mut f: F) -> Self
    where F: FnMut(usize, usize) -> X,
    { Matrix(std::array::from_fn(|r| std::array::from_fn(|c| f(r, c)))) }

    /// Cast into a plain `[[X; C]; R]`.
    #[inline(always)]
    pub fn into_array(self) -> [[X; C]; R]
    { self.0 }

    /// Borrow as a plain `&[[X; C]; R]`.
    #[inline(always)]
    pub fn as_array(&self) -> &[[X; C]; R]
    { &self.0 }

    /// Borrow as a plain `&mut [[X; C]; R]`.
    #[inline(always)]
    pub fn as_array_mut(&mut self) -> &mut [[X; C]; R]
    { &mut self.0 }

    /// Map each scalar element of a matrix.
    #[inline]
    pub fn map<B, F>(self, mut f: F) -> Matrix<R, C, B>
    where F: FnMut(X) -> B,
    { Matrix(self.0.map(|row| row.map(&mut f))) }

    /// Iterate over the rows.
    #[inline(always)]
    pub fn rows(&self) -> Iter<'_, [X; C]>
    { self.0.iter() }

    /// Iterate over all elements in row-major order.
    #[inline]
    pub fn iter_row_major(&self) -> impl Iterator<Item=&X> + '_
    { self.0.iter().flat_map(|row| row.iter()) }

    /// Borrow an element.
    ///
    /// # Panics
    ///
    /// Panics if `row >= R` or `col >= C`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> &X {
        match self.try_at(row, col) {
            Ok(x) => x,
            Err(e) => panic!("{}", e),
        }
    }

    /// Mutably borrow an element.
    ///
    /// # Panics
    ///
    /// Panics if `row >= R` or `col >= C`.
    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut X {
        match self.try_at_mut(row, col) {
            Ok(x) => x,
            Err(e) => panic!("{}", e),
        }
    }

    /// Borrow an element, reporting out-of-range indices as an error.
    #[inline]
    pub fn try_at(&self, row: usize, col: usize) -> Result<&X, MatrixError> {
        check_index((row, col), (R, C))?;
        Ok(&self.0[row][col])
    }

    /// Mutably borrow an element, reporting out-of-range indices as an error.
    #[inline]
    pub fn try_at_mut(&mut self, row: usize, col: usize) -> Result<&mut X, MatrixError> {
        check_index((row, col), (R, C))?;
        Ok(&mut self.0[row][col])
    }

    /// Borrow an element without checking bounds.
    ///
    /// # Safety
    ///
    /// `row < R` and `col < C` must hold.  Violating this is undefined
    /// behavior in default builds.  With the `safe-accessors` feature the
    /// indices are checked and a violation panics instead.
    #[inline(always)]
    pub unsafe fn at_unchecked(&self, row: usize, col: usize) -> &X {
        if cfg!(feature = "safe-accessors") {
            return self.at(row, col);
        }
        debug_assert!(row < R && col < C, "index ({}, {}) out of range", row, col);
        self.0.get_unchecked(row).get_unchecked(col)
    }

    /// Mutably borrow an element without checking bounds.
    ///
    /// # Safety
    ///
    /// Same contract as [`Matrix::at_unchecked`].
    #[inline(always)]
    pub unsafe fn at_unchecked_mut(&mut self, row: usize, col: usize) -> &mut X {
        if cfg!(feature = "safe-accessors") {
            return self.at_mut(row, col);
        }
        debug_assert!(row < R && col < C, "index ({}, {}) out of range", row, col);
        self.0.get_unchecked_mut(row).get_unchecked_mut(col)
    }
}

// ---------------------------------------------------------------------------
// Bulk loading.

impl<const R: usize, const C: usize, X: Copy> Matrix<R, C, X> {
    /// Load exactly `R * C` scalars from a sequence.
    ///
    /// With `row_major`, element `i` goes to `(i / C, i % C)`; otherwise the
    /// matrix is filled column by column and element `i` goes to
    /// `(i % R, i / R)`.  The latter is the same as a row-major load of the
    /// transpose, followed by a transpose.
    ///
    /// If the sequence is too short, the matrix is left untouched.
    /// Anything past the first `R * C` elements is not consumed.
    pub fn set_from_iter<I>(&mut self, iter: I, row_major: bool) -> Result<(), MatrixError>
    where I: IntoIterator<Item=X>,
    {
        let mut staged = self.0;
        let mut iter = iter.into_iter();
        for i in 0..R * C {
            let x = iter.next().ok_or(MatrixError::TooFewElements { expected: R * C, found: i })?;
            match row_major {
                true => staged[i / C][i % C] = x,
                false => staged[i % R][i / R] = x,
            }
        }
        if log_enabled!(log::Level::Trace) {
            let (extra, _) = iter.size_hint();
            if extra > 0 {
                trace!("bulk load into {}x{} matrix left {} element(s) unread", R, C, extra);
            }
        }
        self.0 = staged;
        Ok(())
    }

    /// Assign from a linear row-major array of exactly `R * C` scalars.
    pub fn set_row_major(&mut self, data: &[X]) -> Result<(), MatrixError> {
        if data.len() != R * C {
            return Err(MatrixError::LengthMismatch { expected: R * C, found: data.len() });
        }
        self.set_from_iter(data.iter().copied(), true)
    }

    /// Construct from a linear row-major array of exactly `R * C` scalars.
    pub fn from_row_major(data: &[X]) -> Result<Self, MatrixError>
    where X: Default,
    {
        let mut out = Matrix([[X::default(); C]; R]);
        out.set_row_major(data)?;
        Ok(out)
    }
}

impl<const R: usize, const C: usize, X> From<[[X; C]; R]> for Matrix<R, C, X> {
    #[inline(always)]
    fn from(rows: [[X; C]; R]) -> Self
    { Matrix(rows) }
}

// ---------------------------------------------------------------------------
// Indexing.
//
// `m[r]` is a borrow of the row inside the backing array, so `m[r][c]`
// reads and writes exactly the element that `m.at(r, c)` does.

impl<const R: usize, const C: usize, X> Index<usize> for Matrix<R, C, X> {
    type Output = [X; C];

    #[inline(always)]
    fn index(&self, row: usize) -> &Self::Output
    { &self.0[row] }
}

impl<const R: usize, const C: usize, X> IndexMut<usize> for Matrix<R, C, X> {
    #[inline(always)]
    fn index_mut(&mut self, row: usize) -> &mut Self::Output
    { &mut self.0[row] }
}

impl<const R: usize, const C: usize, X> Index<(usize, usize)> for Matrix<R, C, X> {
    type Output = X;

    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output
    { self.at(row, col) }
}

impl<const R: usize, const C: usize, X> IndexMut<(usize, usize)> for Matrix<R, C, X> {
    #[inline(always)]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output
    { self.at_mut(row, col) }
}

// ---------------------------------------------------------------------------
