/* ********************************************************************** **
** This file is part of fixmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                     **
**                                                                        **
**     http://www.apache.org/licenses/LICENSE-2.0                         **
**     http://opensource.org/licenses/MIT                                 **
** ********************************************************************** */

//! The small part of vector functionality that the matrix kernel needs:
//! construction, indexing (through `Deref`), equality and tolerance
//! equality, and elementwise sums/differences for diagnostics.

use std::ops::{Add, Sub};

use crate::traits::{Semiring, Ring, Field};
use crate::types::*;

impl<const N: usize, X> Vector<N, X> {
    /// Construct a fixed-size vector from a function on indices.
    #[inline]
    pub fn from_fn<F>(f: F) -> Self
    where F: FnMut(usize) -> X,
    { Vector(std::array::from_fn(f)) }

    /// Cast into a plain `[X; N]`.
    #[inline(always)]
    pub fn into_array(self) -> [X; N]
    { self.0 }

    /// Map each element.
    #[inline]
    pub fn map<B, F>(self, f: F) -> Vector<N, B>
    where F: FnMut(X) -> B,
    { Vector(self.0.map(f)) }
}

impl<const N: usize, X: Semiring> Vector<N, X> {
    /// True when every pair of elements differs by at most `tolerance`.
    pub fn equals(&self, other: &Self, tolerance: X) -> bool {
        self.iter().zip(other.iter())
            .all(|(&a, &b)| a.abs_diff(b) <= tolerance)
    }

    /// Get the inner product of two vectors.
    #[inline]
    pub fn dot(&self, other: &Self) -> X
    { self.iter().zip(other.iter()).map(|(&a, &b)| a * b).sum() }
}

impl<X: Field> Vector<4, X> {
    /// Divide a homogeneous 4-vector through by `w`, giving a 3-vector.
    ///
    /// No check is made for `w == 0`; points at infinity come out as
    /// infinities or NaNs, as the floating point rules dictate.
    #[inline]
    pub fn dehomogenize(&self) -> Vector<3, X> {
        let [x, y, z, w] = self.0;
        Vector([x / w, y / w, z / w])
    }
}

impl<X: Semiring> Vector<3, X> {
    /// Extend with a fourth component of `1`.
    #[inline]
    pub fn homogeneous(&self) -> Vector<4, X> {
        let [x, y, z] = self.0;
        Vector([x, y, z, X::ONE])
    }
}

impl<const N: usize, X> From<[X; N]> for Vector<N, X> {
    #[inline(always)]
    fn from(arr: [X; N]) -> Self
    { Vector(arr) }
}

gen_each!{
    @{by_ref}
    @{by_ref_b}
    impl_v_add_sub!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // vector + vector
        impl<$($lt_a)* $($lt_b)* const N: usize, X: Semiring>
            Add<$($ref_b)* Vector<N, X>> for $($ref_a)* Vector<N, X>
        {
            type Output = Vector<N, X>;

            #[inline]
            fn add(self, other: $($ref_b)* Vector<N, X>) -> Self::Output
            { Vector::from_fn(|k| self.0[k] + other.0[k]) }
        }

        // vector - vector
        impl<$($lt_a)* $($lt_b)* const N: usize, X: Ring>
            Sub<$($ref_b)* Vector<N, X>> for $($ref_a)* Vector<N, X>
        {
            type Output = Vector<N, X>;

            #[inline]
            fn sub(self, other: $($ref_b)* Vector<N, X>) -> Self::Output
            { Vector::from_fn(|k| self.0[k] - other.0[k]) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_equality() {
        let a = Vector([1.0, 2.0, 3.0]);
        let mut b = a;
        b[1] += 5e-8;
        assert_ne!(a, b);
        assert!(a.equals(&b, 1e-7));
        assert!(!a.equals(&b, 1e-9));
        assert!(a.equals(&a, 0.0));
    }

    #[test]
    fn homogeneous_round_trip() {
        let v = Vector([2.0, 4.0, 6.0]);
        assert_eq!(v.homogeneous(), Vector([2.0, 4.0, 6.0, 1.0]));
        assert_eq!(Vector([2.0, 4.0, 6.0, 2.0]).dehomogenize(), Vector([1.0, 2.0, 3.0]));
    }

    #[test]
    fn arithmetic() {
        let a = Vector([1, 2, 3]);
        let b = Vector([3, 2, 1]);
        assert_eq!(a + b, Vector([4, 4, 4]));
        assert_eq!(&a - &b, Vector([-2, 0, 2]));
        assert_eq!(a.dot(&b), 10);
    }
}
