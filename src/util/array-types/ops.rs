/* ********************************************************************** **
** This file is part of fixmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                     **
**                                                                        **
**     http://www.apache.org/licenses/LICENSE-2.0                         **
**     http://opensource.org/licenses/MIT                                 **
** ********************************************************************** */

use std::ops::{Add, Sub, AddAssign, SubAssign, Neg};
use std::ops::{Mul, Div, MulAssign, DivAssign};
use std::fmt;

use num_traits::{Zero, One};

use crate::traits::{Semiring, Ring, Field};
use crate::types::*;

// ---------------------------------------------------------------------------
// matrix-matrix elementwise ops

// NOTE: Operator impls are deliberately between same-typed operands,
//       rather than e.g. Matrix<R, C, T> and Matrix<R, C, U> where T: Add<U>.
gen_each!{
    @{by_ref}
    @{by_ref_b}
    impl_m_add_sub!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // matrix + matrix
        impl<$($lt_a)* $($lt_b)* const R: usize, const C: usize, X: Semiring>
            Add<$($ref_b)* Matrix<R, C, X>> for $($ref_a)* Matrix<R, C, X>
        {
            type Output = Matrix<R, C, X>;

            #[inline]
            fn add(self, other: $($ref_b)* Matrix<R, C, X>) -> Self::Output
            { Matrix::from_fn(|r, c| self.0[r][c] + other.0[r][c]) }
        }

        // matrix - matrix
        impl<$($lt_a)* $($lt_b)* const R: usize, const C: usize, X: Ring>
            Sub<$($ref_b)* Matrix<R, C, X>> for $($ref_a)* Matrix<R, C, X>
        {
            type Output = Matrix<R, C, X>;

            #[inline]
            fn sub(self, other: $($ref_b)* Matrix<R, C, X>) -> Self::Output
            { Matrix::from_fn(|r, c| self.0[r][c] - other.0[r][c]) }
        }

        // matrix * matrix
        impl<$($lt_a)* $($lt_b)* const R: usize, const K: usize, const C: usize, X: Semiring>
            Mul<$($ref_b)* Matrix<K, C, X>> for $($ref_a)* Matrix<R, K, X>
        {
            type Output = Matrix<R, C, X>;

            #[inline]
            fn mul(self, other: $($ref_b)* Matrix<K, C, X>) -> Self::Output
            { matmul(&self.0, &other.0) }
        }

        // matrix * column vector
        impl<$($lt_a)* $($lt_b)* const R: usize, const C: usize, X: Semiring>
            Mul<$($ref_b)* Vector<C, X>> for $($ref_a)* Matrix<R, C, X>
        {
            type Output = Vector<R, X>;

            #[inline]
            fn mul(self, other: $($ref_b)* Vector<C, X>) -> Self::Output {
                let matrix = &self.0;
                let vector = &other.0;
                Vector::from_fn(|r| (0..C).map(|i| matrix[r][i] * vector[i]).sum())
            }
        }
    }
}

/// `out(i, j) = Σ_k a(i, k) b(k, j)`, accumulated into a fresh array.
#[inline]
pub(crate) fn matmul<const R: usize, const K: usize, const C: usize, X: Semiring>(
    a: &[[X; K]; R],
    b: &[[X; C]; K],
) -> Matrix<R, C, X> {
    Matrix::from_fn(|r, c| (0..K).map(|k| a[r][k] * b[k][c]).sum())
}

// ---------------------------------------------------------------------------
// unary ops

gen_each!{
    @{by_ref}
    impl_m_unops!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // -matrix
        impl<$($lt_a)* const R: usize, const C: usize, X: Ring> Neg for $($ref_a)* Matrix<R, C, X> {
            type Output = Matrix<R, C, X>;

            #[inline]
            fn neg(self) -> Self::Output
            { Matrix::from_fn(|r, c| -self.0[r][c]) }
        }
    }
}

// ---------------------------------------------------------------------------
// matrix-scalar ops

// scalar * matrix
gen_each!{
    // NOTE: the orphan rules prevent us from impl-ing these ops "for X" so
    //       we must generate a separate impl for each Semiring type rather than
    //       being generic over X: Semiring
    @{semiring}
    @{by_ref}
    impl_scalar_m_ops!(
        {$X:ty}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        impl<$($lt_a)* const R: usize, const C: usize> Mul<$($ref_a)* Matrix<R, C, $X>> for $X {
            type Output = Matrix<R, C, $X>;

            #[inline(always)]
            fn mul(self, matrix: $($ref_a)* Matrix<R, C, $X>) -> Self::Output
            { matrix * self }
        }
    }
}

// matrix `op` scalar
gen_each!{
    @{by_ref}
    impl_m_scalar_ops!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // matrix * scalar
        impl<$($lt_a)* const R: usize, const C: usize, X: Semiring> Mul<X> for $($ref_a)* Matrix<R, C, X> {
            type Output = Matrix<R, C, X>;

            #[inline]
            fn mul(self, scalar: X) -> Self::Output
            { Matrix::from_fn(|r, c| self.0[r][c] * scalar) }
        }

        // matrix / scalar
        impl<$($lt_a)* const R: usize, const C: usize, X: Field> Div<X> for $($ref_a)* Matrix<R, C, X> {
            type Output = Matrix<R, C, X>;

            #[inline]
            fn div(self, scalar: X) -> Self::Output
            { Matrix::from_fn(|r, c| self.0[r][c] / scalar) }
        }
    }
}

// ---------------------------------------------------------------------------
// assign ops (general)
//
// These all evaluate the binary op into a temporary before assigning,
// so `m *= &m2` never reads partially-updated elements of `m`.

// matrix += matrix;
impl<const R: usize, const C: usize, X, B> AddAssign<B> for Matrix<R, C, X>
where for<'a> &'a Self: Add<B, Output=Self>,
{
    #[inline(always)]
    fn add_assign(&mut self, rhs: B)
    { *self = &*self + rhs; }
}

// matrix -= matrix;
impl<const R: usize, const C: usize, X, B> SubAssign<B> for Matrix<R, C, X>
where for<'a> &'a Self: Sub<B, Output=Self>,
{
    #[inline(always)]
    fn sub_assign(&mut self, rhs: B)
    { *self = &*self - rhs; }
}

// matrix *= scalar;
// matrix *= matrix;   (square only, since the output must have our shape)
impl<const R: usize, const C: usize, X, B> MulAssign<B> for Matrix<R, C, X>
where for<'a> &'a Self: Mul<B, Output=Self>,
{
    #[inline(always)]
    fn mul_assign(&mut self, rhs: B)
    { *self = &*self * rhs; }
}

// matrix /= scalar;
impl<const R: usize, const C: usize, X, B> DivAssign<B> for Matrix<R, C, X>
where for<'a> &'a Self: Div<B, Output=Self>,
{
    #[inline(always)]
    fn div_assign(&mut self, rhs: B)
    { *self = &*self / rhs; }
}

// ---------------------------------------------------------------------------
// num_traits

impl<const R: usize, const C: usize, X: Semiring> Zero for Matrix<R, C, X> {
    #[inline(always)]
    fn zero() -> Self { Self::ZERO }

    #[inline]
    fn is_zero(&self) -> bool
    { self.iter_row_major().all(|&x| x == X::ZERO) }
}

impl<const N: usize, X: Semiring> One for Matrix<N, N, X> {
    #[inline(always)]
    fn one() -> Self { Self::IDENTITY }

    #[inline]
    fn is_one(&self) -> bool
    { *self == Self::IDENTITY }
}

// ---------------------------------------------------------------------------

// fmt traits apply the format to each element for convenience.
//
// A matrix is rendered one row per line, so that `{:.4}` produces
// something like
//
//     [1.0000, 0.3333]
//     [0.0000, 1.0000]
gen_each!{
    [ {Display} {LowerExp} {UpperExp} ]
    impl_fmt!( {$Format:ident} ) => {
        impl<const R: usize, const C: usize, X: fmt::$Format> fmt::$Format for Matrix<R, C, X> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                for row in &self.0 {
                    write_list(f, row, fmt::$Format::fmt)?;
                    writeln!(f)?;
                }
                Ok(())
            }
        }

        impl<const N: usize, X: fmt::$Format> fmt::$Format for Vector<N, X> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
            { write_list(f, &self.0, fmt::$Format::fmt) }
        }
    }
}

fn write_list<X>(
    f: &mut fmt::Formatter<'_>,
    items: &[X],
    mut fmt_item: impl FnMut(&X, &mut fmt::Formatter<'_>) -> fmt::Result,
) -> fmt::Result {
    write!(f, "[")?;
    for (i, x) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        fmt_item(x, f)?;
    }
    write!(f, "]")
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub() {
        let m0 = Matrix([[1.0, 2.0], [3.0, 4.0]]);
        let m1 = Matrix([[2.0, 3.0], [4.0, 5.0]]);
        let sum = Matrix([[3.0, 5.0], [7.0, 9.0]]);

        assert_eq!(sum, m0 + m1);
        assert_eq!(sum, &m0 + &m1);
        let mut acc = m0;
        acc += m1;
        assert_eq!(sum, acc);

        assert_eq!(m0, sum - m1);
        assert_eq!(m0, &sum - m1);
        let mut acc = sum;
        acc -= &m1;
        assert_eq!(m0, acc);

        assert_eq!(-m0, Matrix([[-1.0, -2.0], [-3.0, -4.0]]));
    }

    #[test]
    fn mat_mat() {
        let eye2 = M22::<i32>::IDENTITY;
        let eye3 = M33::<i32>::IDENTITY;

        let a = Matrix([
            [ 1, 0, 2],
            [-1, 3, 1],
        ]);
        let b = Matrix([
            [3, 1],
            [2, 1],
            [1, 0],
        ]);

        assert_eq!(a, &eye2 * &a);
        assert_eq!(a, &a * &eye3);
        assert_eq!(Matrix([[5, 1], [4, 2]]), a * b);
        assert_eq!(Matrix([[2, 3, 7], [1, 3, 5], [1, 0, 2]]), &b * a);
    }

    #[test]
    fn mul_assign_does_not_alias() {
        let mut m = Matrix([[1.0, 0.0], [2.0, -1.0]]);
        let rhs = Matrix([[3.0, 1.0], [2.0, 1.0]]);
        let expected = &m * &rhs;
        m *= rhs;
        assert_eq!(m, Matrix([[3.0, 1.0], [4.0, 1.0]]));
        assert_eq!(m, expected);

        // squaring in place must use the old value on both sides
        let mut m = Matrix([[1, 1], [0, 1]]);
        let copy = m;
        m *= &copy;
        assert_eq!(m, Matrix([[1, 2], [0, 1]]));
    }

    #[test]
    fn scalar_ops() {
        let m = Matrix([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m * 2.0, Matrix([[2.0, 4.0], [6.0, 8.0]]));
        assert_eq!(2.0 * m, m * 2.0);
        assert_eq!(2.0 * &m, &m * 2.0);
        assert_eq!(m / 2.0, Matrix([[0.5, 1.0], [1.5, 2.0]]));

        let mut acc = m;
        acc *= 3.0;
        acc /= 3.0;
        assert_eq!(acc, m);

        assert_eq!(3u8 * Matrix([[1u8, 2]]), Matrix([[3, 6]]));
    }

    #[test]
    fn mat_vec() {
        let m = Matrix([
            [1, 2, 3],
            [4, 5, 6],
        ]);
        assert_eq!(Vector([1, 7]), &m * Vector([4, -3, 1]));
        assert_eq!(Vector([1, 7]), m * &Vector([4, -3, 1]));

        // try with the other dimension longer so that we make sure the sums
        // are over the right indices
        let m = m.t();
        assert_eq!(Vector([-8, -7, -6]), &m * Vector([4, -3]));
    }

    #[test]
    fn transform_times_vector() {
        let transform = Matrix([
            [0.6555, 0.2769, 0.6948, 0.4387],
            [0.1712, 0.0462, 0.3171, 0.3816],
            [0.7060, 0.0971, 0.9502, 0.7655],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let v = Vector([0.1869, 0.4898, 0.4456, 1.0]);
        let expected = Vector([
            1.0064414500000000707302660885034,
            0.57752579999999997806270357614267,
            1.3684200999999998060729922144674,
            1.0,
        ]);
        assert!((transform * v).equals(&expected, 1e-14));
    }

    #[test]
    fn zero_one() {
        assert!(Matrix::<2, 3, f64>::zero().is_zero());
        assert!(!Matrix([[0, 1]]).is_zero());
        assert!(M33::<f64>::one().is_one());
        assert!(!Matrix([[2, 0], [0, 1]]).is_one());
        assert!(!Matrix([[1, -1], [0, 1]]).is_one());
    }

    #[test]
    fn display() {
        let m = Matrix([[1.0, 2.5], [-3.0, 4.0]]);
        assert_eq!(format!("{}", m), "[1, 2.5]\n[-3, 4]\n");
        assert_eq!(format!("{:.2}", m), "[1.00, 2.50]\n[-3.00, 4.00]\n");
        assert_eq!(format!("{:e}", Vector([100.0, 0.5])), "[1e2, 5e-1]");
    }
}
