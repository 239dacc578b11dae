/* ********************************************************************** **
** This file is part of fixmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                     **
**                                                                        **
**     http://www.apache.org/licenses/LICENSE-2.0                         **
**     http://opensource.org/licenses/MIT                                 **
** ********************************************************************** */


//! Approximate equality assertions for floating point data.
//!
//! ```
//! #[macro_use] extern crate fixmat_assert_close;
//! # fn main() {
//! assert_close!(abs=1e-12, [0.1 + 0.2, 1.0], [0.3, 1.0]);
//! # }
//! ```

use thiserror::Error;

/// Relative tolerance used when only `abs` is supplied.
pub const DEFAULT_NONZERO_TOL: f64 = 1e-9;

/// Panic unless two values are close.
///
/// Tolerances are given as leading `abs=` and `rel=` arguments, in any
/// order; see [`is_close`] for how they combine.  Anything after the two
/// values is a format string for the panic message.
#[macro_export]
macro_rules! assert_close {
    ($($t:tt)*) => {
        $crate::__assert_close!{[0.0] [$crate::DEFAULT_NONZERO_TOL] $($t)*}
    };
}

/// [`assert_close!`] in debug builds only.
#[macro_export]
macro_rules! debug_assert_close {
    ($($t:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::assert_close!{$($t)*}
        }
    };
}

// Munches the tolerance arguments into the two leading slots, `[abs] [rel]`.
// The `@check` arm comes first so the munching arms never see it.
#[doc(hidden)]
#[macro_export]
macro_rules! __assert_close {
    (@check [$abs:expr] [$rel:expr] [$a:expr, $b:expr] [$($fmt:tt)+]) => {
        match (&$a, &$b) {
            (left, right) => {
                let tol = $crate::Tolerances { abs: $abs, rel: $rel };
                if let Err(e) = $crate::CheckClose::check_close(left, right, tol) {
                    $crate::__failed(format_args!($($fmt)+), tol, left, right, &e);
                }
            }
        }
    };
    ([$_abs:expr] $rel:tt abs=$tol:expr, $($rest:tt)*) => {
        $crate::__assert_close!{[$tol] $rel $($rest)*}
    };
    ($abs:tt [$_rel:expr] rel=$tol:expr, $($rest:tt)*) => {
        $crate::__assert_close!{$abs [$tol] $($rest)*}
    };
    ($abs:tt $rel:tt $a:expr, $b:expr $(,)?) => {
        $crate::__assert_close!{@check $abs $rel [$a, $b] ["not nearly equal!"]}
    };
    ($abs:tt $rel:tt $a:expr, $b:expr, $($fmt:tt)+) => {
        $crate::__assert_close!{@check $abs $rel [$a, $b] [$($fmt)+]}
    };
}

#[doc(hidden)]
#[cold]
#[inline(never)]
pub fn __failed<A, B, E>(
    msg: std::fmt::Arguments<'_>,
    tol: Tolerances,
    left: &A,
    right: &B,
    err: &E,
) -> !
where
    A: std::fmt::Debug + ?Sized,
    B: std::fmt::Debug + ?Sized,
    E: std::fmt::Display,
{
    panic!(
        "{} (tolerances: rel={}, abs={})\n left: {:?}\nright: {:?}\n{}",
        msg, tol.rel, tol.abs, left, right, err,
    )
}

/// The closeness test behind [`assert_close!`].
///
/// Same semantics as Python's `math.isclose`: the values are close when
/// they differ by less than `abs`, or by less than `rel` times the larger
/// magnitude.  Equal infinities are close.  NaN is close to nothing.
#[inline]
pub fn is_close(a: f64, b: f64, Tolerances { abs, rel }: Tolerances) -> bool {
    assert!(rel >= 0.0);
    assert!(abs >= 0.0);

    // catch infinities of same sign
    if a == b { return true; }

    // catch infinities of opposite sign, avoiding infinite relative tolerance
    if a.is_infinite() || b.is_infinite() { return false; }

    // case for general values and NaN.
    (a - b).abs() < abs.max(rel * a.abs()).max(rel * b.abs())
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances<T = f64> {
    pub abs: T,
    pub rel: T
}

/// The first pair of elements found to be too far apart.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("failed at:\n  left: {:?}\n right: {:?}\n   tol: {:?}", .values.0, .values.1, .tol)]
pub struct CheckCloseError<T: std::fmt::Debug = f64> {
    pub values: (T, T),
    pub tol: Tolerances<T>,
}

pub trait CheckClose<Rhs: ?Sized = Self> {
    type Scalar: std::fmt::Debug;

    /// Test that all values of self and other are close.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>;
}

impl CheckClose for f64 {
    type Scalar = f64;

    #[inline]
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    {
        match is_close(*self, *other, tol) {
            true => Ok(()),
            false => Err(CheckCloseError { values: (*self, *other), tol }),
        }
    }
}

impl CheckClose for f32 {
    type Scalar = f32;

    #[inline]
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    {
        match is_close(*self as f64, *other as f64, tol) {
            true => Ok(()),
            false => Err(CheckCloseError {
                values: (*self, *other),
                tol: Tolerances { abs: tol.abs as f32, rel: tol.rel as f32 },
            }),
        }
    }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    { CheckClose::check_close(*self, *other, tol) }
}

impl<T: CheckClose> CheckClose for [T] {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    {
        assert_eq!(self.len(), other.len());
        self.iter().zip(other)
            .map(|(a, b)| a.check_close(b, tol))
            .collect()
    }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose, const N: usize> CheckClose for [T; N] {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    { self[..].check_close(&other[..], tol) }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn macro_output_can_compile() {
        assert_close!(1.0, 1.0);
        assert_close!(abs=1e-8, 1.0, 1.0);
        assert_close!(rel=1e-8, abs=1e-8, 1.0, 1.0);
        assert_close!(1.0, 1.0,);
        assert_close!(abs=1e-8, 1.0, 1.0,);
        assert_close!(rel=1e-8, abs=1e-8, 1.0, 1.0,);
        assert_close!(abs=1e-8, [[1.0, 2.0], [3.0, 4.0]], [[1.0, 2.0], [3.0, 4.0]]);
        assert_close!(abs=1e-6, 0.1f32 + 0.2, 0.3f32);
        assert_close!(abs=1e-8, rel=0.0, 1.0, 1.0 + 1e-9, "x = {}", 1);
    }

    #[test]
    fn bad_parse_regression() {
        #[derive(Debug)] struct S;
        impl S { fn x(self) -> S { self } }
        impl CheckClose for S {
            type Scalar = f64;
            fn check_close(&self, _: &S, _: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>> { Ok(()) }
        }
        assert_close!(
            abs=1e-10,
            S.x().x().x(),
            S.x().x().x(),
        );
        debug_assert_close!(
            abs=1e-10,
            S.x().x().x(),
            S.x().x().x(),
        );
        assert_close!(
            abs=1e-10,
            S.x().x().x(),
            S.x().x().x(),
            "{}", "hello",
        );
    }

    #[test]
    fn reports_first_failure() {
        let tol = Tolerances { abs: 1e-3, rel: 0.0 };
        let err = [1.0, 2.0, 3.0].check_close(&[1.0, 2.5, 4.0], tol).unwrap_err();
        assert_eq!(err.values, (2.0, 2.5));
        assert!(err.to_string().contains("left: 2.0"));
    }

    #[test]
    fn special_values() {
        let tol = Tolerances { abs: 1e-3, rel: 1e-3 };
        assert!(is_close(f64::INFINITY, f64::INFINITY, tol));
        assert!(!is_close(f64::INFINITY, f64::NEG_INFINITY, tol));
        assert!(!is_close(f64::NAN, f64::NAN, tol));
        assert!(is_close(1000.0, 1000.5, tol));
        assert!(!is_close(1.0, 1.5, tol));
    }

    #[test]
    #[should_panic]
    fn not_close() {
        assert_close!(abs=0.0, rel=0.0, 1.0, 1.1);
    }

    #[test]
    #[should_panic(expected = "x = 7 (tolerances: rel=0, abs=0)")]
    fn not_close_with_message() {
        assert_close!(abs=0.0, rel=0.0, 1.0, 2.0, "x = {}", 7);
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic)]
    fn debug_not_close() {
        debug_assert_close!(abs=0.0, rel=0.0, 1.0, 1.1);
    }
}
