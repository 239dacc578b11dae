/* ********************************************************************** **
** This file is part of fixmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                     **
**                                                                        **
**     http://www.apache.org/licenses/LICENSE-2.0                         **
**     http://opensource.org/licenses/MIT                                 **
** ********************************************************************** */

//! Determinants and closed-form inverses of small square matrices.
//!
//! Each size has its own formula.  The adjugate is always divided
//! elementwise by the determinant, rather than scaled by `1/det`,
//! so that each output element is a single correctly rounded quotient.

use crate::error::MatrixError;
use crate::traits::{Semiring, Ring, Field};
use crate::types::*;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Matrix inverse, with the default (exact zero) singularity test.
#[inline(always)]
pub fn inv<M: Inverse>(m: &M) -> Result<M, MatrixError>
{ m.inverse() }

/// Matrix determinant.
#[inline(always)]
pub fn det<M: Det>(m: &M) -> M::Scalar
{ m.det() }

/// Determinant of a 2x2, 3x3 or 4x4 matrix.
pub trait Det {
    type Scalar;

    fn det(&self) -> Self::Scalar;
}

/// Closed-form inverse of a 2x2, 3x3 or 4x4 matrix.
///
/// Singular input is always reported as [`MatrixError::SingularMatrix`];
/// no result is ever produced from a zero determinant.
pub trait Inverse: Sized {
    type Scalar: Field;

    /// Invert, treating the matrix as singular when `|det| <= eps`.
    fn inverse_with_tolerance(&self, eps: Self::Scalar) -> Result<Self, MatrixError>;

    /// Invert, treating the matrix as singular only when `det == 0`.
    #[inline]
    fn inverse(&self) -> Result<Self, MatrixError>
    { self.inverse_with_tolerance(<Self::Scalar as Semiring>::ZERO) }

    /// Write the inverse into `out`.  `out` is left untouched on failure.
    #[inline]
    fn inverse_into(&self, out: &mut Self) -> Result<(), MatrixError> {
        *out = self.inverse()?;
        Ok(())
    }
}

// -------------------------- END PUBLIC API ---------------------------------

#[inline]
fn check_singular<X: Field>(dim: usize, det: X, eps: X) -> Result<(), MatrixError> {
    // written so that a NaN determinant also counts as singular
    if !(det.abs() > eps) {
        debug!("rejecting singular {}x{} matrix (det = {:e}, eps = {:e})", dim, dim, det.to_f64(), eps.to_f64());
        return Err(MatrixError::SingularMatrix { det: det.to_f64() });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// 2x2

impl<X: Ring> Det for Matrix<2, 2, X> {
    type Scalar = X;

    #[inline]
    fn det(&self) -> X {
        let [[a, b], [c, d]] = self.0;
        a * d - b * c
    }
}

impl<X: Field> Inverse for Matrix<2, 2, X> {
    type Scalar = X;

    fn inverse_with_tolerance(&self, eps: X) -> Result<Self, MatrixError> {
        let [[a, b], [c, d]] = self.0;
        let det = self.det();
        check_singular(2, det, eps)?;
        Ok(Matrix([
            [ d / det, -b / det],
            [-c / det,  a / det],
        ]))
    }
}

// ---------------------------------------------------------------------------
// 3x3

/// The cofactor matrix of a 3x3 matrix.
///
/// Cyclic index arithmetic builds the alternating signs into the
/// choice of minor, so no explicit `(-1)^(r+c)` is needed.
#[inline]
fn cofactors_3<X: Ring>(m: &Matrix<3, 3, X>) -> Matrix<3, 3, X> {
    Matrix::from_fn(|r, c| {
        let m = &m.0;
        X::ZERO
        + m[(r+1) % 3][(c+1) % 3] * m[(r+2) % 3][(c+2) % 3]
        - m[(r+1) % 3][(c+2) % 3] * m[(r+2) % 3][(c+1) % 3]
    })
}

impl<X: Ring> Det for Matrix<3, 3, X> {
    type Scalar = X;

    fn det(&self) -> X {
        let [
            [a0, a1, a2],
            [b0, b1, b2],
            [c0, c1, c2],
        ] = self.0;

        X::ZERO
        + a0 * b1 * c2
        + a1 * b2 * c0
        + a2 * b0 * c1
        - a0 * b2 * c1
        - a1 * b0 * c2
        - a2 * b1 * c0
    }
}

impl<X: Field> Inverse for Matrix<3, 3, X> {
    type Scalar = X;

    fn inverse_with_tolerance(&self, eps: X) -> Result<Self, MatrixError> {
        let cofactors = cofactors_3(self);
        // expansion along the first row
        let det = (0..3).map(|i| self.0[0][i] * cofactors.0[0][i]).sum::<X>();
        check_singular(3, det, eps)?;
        // adjugate is the transpose of the cofactors
        Ok(Matrix::from_fn(|r, c| cofactors.0[c][r] / det))
    }
}

// ---------------------------------------------------------------------------
// 4x4
//
// Laplace expansion by complementary minors: the six 2x2 minors taken from
// the top two rows (`s`) pair up with the six from the bottom two rows (`c`)
// to give the determinant, and the same twelve numbers give every cofactor.

struct PairedMinors<X> {
    s: [X; 6],
    c: [X; 6],
}

#[inline]
fn paired_minors<X: Ring>(m: &Matrix<4, 4, X>) -> PairedMinors<X> {
    let [
        [a00, a01, a02, a03],
        [a10, a11, a12, a13],
        [a20, a21, a22, a23],
        [a30, a31, a32, a33],
    ] = m.0;

    let s = [
        a00 * a11 - a10 * a01,
        a00 * a12 - a10 * a02,
        a00 * a13 - a10 * a03,
        a01 * a12 - a11 * a02,
        a01 * a13 - a11 * a03,
        a02 * a13 - a12 * a03,
    ];
    let c = [
        a20 * a31 - a30 * a21,
        a20 * a32 - a30 * a22,
        a20 * a33 - a30 * a23,
        a21 * a32 - a31 * a22,
        a21 * a33 - a31 * a23,
        a22 * a33 - a32 * a23,
    ];
    PairedMinors { s, c }
}

impl<X: Ring> PairedMinors<X> {
    #[inline]
    fn det(&self) -> X {
        let PairedMinors { s, c } = self;
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }
}

impl<X: Ring> Det for Matrix<4, 4, X> {
    type Scalar = X;

    #[inline]
    fn det(&self) -> X
    { paired_minors(self).det() }
}

impl<X: Field> Inverse for Matrix<4, 4, X> {
    type Scalar = X;

    fn inverse_with_tolerance(&self, eps: X) -> Result<Self, MatrixError> {
        let minors = paired_minors(self);
        let det = minors.det();
        check_singular(4, det, eps)?;

        let PairedMinors { s, c } = minors;
        let [
            [a00, a01, a02, a03],
            [a10, a11, a12, a13],
            [a20, a21, a22, a23],
            [a30, a31, a32, a33],
        ] = self.0;

        let adjugate = [
            [
                 a11 * c[5] - a12 * c[4] + a13 * c[3],
                -a01 * c[5] + a02 * c[4] - a03 * c[3],
                 a31 * s[5] - a32 * s[4] + a33 * s[3],
                -a21 * s[5] + a22 * s[4] - a23 * s[3],
            ], [
                -a10 * c[5] + a12 * c[2] - a13 * c[1],
                 a00 * c[5] - a02 * c[2] + a03 * c[1],
                -a30 * s[5] + a32 * s[2] - a33 * s[1],
                 a20 * s[5] - a22 * s[2] + a23 * s[1],
            ], [
                 a10 * c[4] - a11 * c[2] + a13 * c[0],
                -a00 * c[4] + a01 * c[2] - a03 * c[0],
                 a30 * s[4] - a31 * s[2] + a33 * s[0],
                -a20 * s[4] + a21 * s[2] - a23 * s[0],
            ], [
                -a10 * c[3] + a11 * c[1] - a12 * c[0],
                 a00 * c[3] - a01 * c[1] + a02 * c[0],
                -a30 * s[3] + a31 * s[1] - a32 * s[0],
                 a20 * s[3] - a21 * s[1] + a22 * s[0],
            ],
        ];
        Ok(Matrix(adjugate.map(|row| row.map(|x| x / det))))
    }
}

// ---------------------------------------------------------------------------
