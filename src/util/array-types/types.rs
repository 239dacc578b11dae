/* ********************************************************************** **
** This file is part of fixmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                     **
**                                                                        **
**     http://www.apache.org/licenses/LICENSE-2.0                         **
**     http://opensource.org/licenses/MIT                                 **
** ********************************************************************** */

use std::ops::{Deref, DerefMut};
use std::fmt;

use crate::traits::Semiring;

// ---------------------------------------------------------------------------

/// A dense matrix with `R` rows and `C` columns, stored row-major.
///
/// Element `(r, c)` lives at linear offset `r * C + c` of the backing
/// storage, which is simply a `[[X; C]; R]`.  Matrices of different
/// shapes are different types, so shape mismatches in arithmetic are
/// compile errors.
///
/// `Matrix` is a plain value type. Every operation that produces a matrix
/// produces an independent copy; the only aliasing views are the row
/// borrows handed out by indexing (`m[r]`), which point straight into
/// the backing storage.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Matrix<const R: usize, const C: usize, X = f64>(pub [[X; C]; R]);

/// A fixed-size vector with `N` elements.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vector<const N: usize, X = f64>(pub [X; N]);

/// A square dense 2x2 matrix.
pub type M22<X=f64> = Matrix<2, 2, X>;
/// A square dense 3x3 matrix.
pub type M33<X=f64> = Matrix<3, 3, X>;
/// A square dense 4x4 matrix.
pub type M44<X=f64> = Matrix<4, 4, X>;

/// A 2-dimensional vector.
pub type V2<X=f64> = Vector<2, X>;
/// A 3-dimensional vector.
pub type V3<X=f64> = Vector<3, X>;
/// A 4-dimensional vector.
pub type V4<X=f64> = Vector<4, X>;

// ---------------------------------------------------------------------------
// Well-known constants.

impl<const R: usize, const C: usize, X: Semiring> Matrix<R, C, X> {
    /// The matrix of all zeros.
    pub const ZERO: Self = Matrix([[X::ZERO; C]; R]);

    /// Number of rows.
    pub const ROWS: usize = R;
    /// Number of columns.
    pub const COLS: usize = C;
}

impl<const N: usize, X: Semiring> Matrix<N, N, X> {
    /// The identity matrix.
    pub const IDENTITY: Self = {
        let mut rows = [[X::ZERO; N]; N];
        let mut i = 0;
        while i < N {
            rows[i][i] = X::ONE;
            i += 1;
        }
        Matrix(rows)
    };
}

impl<const N: usize, X: Semiring> Vector<N, X> {
    /// The zero vector.
    pub const ZERO: Self = Vector([X::ZERO; N]);
}

impl<const R: usize, const C: usize, X: Semiring> Default for Matrix<R, C, X> {
    #[inline(always)]
    fn default() -> Self { Self::ZERO }
}

impl<const N: usize, X: Semiring> Default for Vector<N, X> {
    #[inline(always)]
    fn default() -> Self { Self::ZERO }
}

// ---------------------------------------------------------------------------
// Both types behave generally like their backing array type.
// (for a matrix, that's an array of rows)

pub type Iter<'a, X> = std::slice::Iter<'a, X>;
pub type IterMut<'a, X> = std::slice::IterMut<'a, X>;

impl<const R: usize, const C: usize, X> Deref for Matrix<R, C, X> {
    type Target = [[X; C]; R];

    #[inline(always)]
    fn deref(&self) -> &Self::Target
    { &self.0 }
}

impl<const R: usize, const C: usize, X> DerefMut for Matrix<R, C, X> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target
    { &mut self.0 }
}

impl<const N: usize, X> Deref for Vector<N, X> {
    type Target = [X; N];

    #[inline(always)]
    fn deref(&self) -> &Self::Target
    { &self.0 }
}

impl<const N: usize, X> DerefMut for Vector<N, X> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target
    { &mut self.0 }
}

// Fix a paper cut not solved by Deref, which is that many methods
// take `I: IntoIterator`.
impl<'a, const R: usize, const C: usize, X> IntoIterator for &'a Matrix<R, C, X> {
    type Item = &'a [X; C];
    type IntoIter = Iter<'a, [X; C]>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter() }
}

impl<'a, const R: usize, const C: usize, X> IntoIterator for &'a mut Matrix<R, C, X> {
    type Item = &'a mut [X; C];
    type IntoIter = IterMut<'a, [X; C]>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter_mut() }
}

impl<'a, const N: usize, X> IntoIterator for &'a Vector<N, X> {
    type Item = &'a X;
    type IntoIter = Iter<'a, X>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter() }
}

impl<'a, const N: usize, X> IntoIterator for &'a mut Vector<N, X> {
    type Item = &'a mut X;
    type IntoIter = IterMut<'a, X>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter_mut() }
}

// forward the debug impl without a surrounding "Matrix(...)", so that
// debug output of a matrix reads as a nested list.
impl<const R: usize, const C: usize, X: fmt::Debug> fmt::Debug for Matrix<R, C, X> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.0, f) }
}

impl<const N: usize, X: fmt::Debug> fmt::Debug for Vector<N, X> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.0, f) }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        let eye: Matrix<5, 5> = Matrix::IDENTITY;
        let zero: Matrix<5, 2> = Matrix::ZERO;
        for r in 0..5 {
            for c in 0..5 {
                assert_eq!(eye.0[r][c], if r == c { 1.0 } else { 0.0 });
            }
            assert_eq!(zero.0[r], [0.0, 0.0]);
        }
        assert_eq!(M33::<i32>::IDENTITY.0, [[1, 0, 0], [0, 1, 0], [0, 0, 1]]);
        assert_eq!(Matrix::<2, 3, u8>::ROWS, 2);
        assert_eq!(Matrix::<2, 3, u8>::COLS, 3);
        assert_eq!(V3::<f64>::default(), Vector([0.0; 3]));
    }

    #[test]
    fn debug_is_a_nested_list() {
        let m = Matrix([[1, 2], [3, 4]]);
        assert_eq!(format!("{:?}", m), "[[1, 2], [3, 4]]");
        assert_eq!(format!("{:?}", Vector([1, 2])), "[1, 2]");
    }

    #[test]
    fn copies_are_independent() {
        let original = Matrix([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let mut copy = original;
        assert_eq!(copy, original);
        copy.0[0][0] = 10.0;
        assert_ne!(copy, original);
        assert_eq!(original.0[0][0], 1.0);
    }
}
