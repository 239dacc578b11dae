/* ********************************************************************** **
** This file is part of fixmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                     **
**                                                                        **
**     http://www.apache.org/licenses/LICENSE-2.0                         **
**     http://opensource.org/licenses/MIT                                 **
** ********************************************************************** */

// Scalar traits exposed in public interfaces,
// implemented on finite sets of types rather than more general
//  generic bounds in order to reduce coupling with client crates.

pub use self::semiring::Semiring;
mod semiring {
    use std::fmt;
    use std::iter::Sum;
    use std::ops::{Add, Mul, AddAssign, MulAssign};

    /// Trait for scalars with addition and multiplication.
    ///
    /// You get primitive floats and integers; that's all this API is
    /// willing to commit to at the moment.  The trait is sealed to
    /// avoid accidental commitments.
    pub trait Semiring
        : Sealed
        + Sized + Copy + Default
        + PartialEq + PartialOrd
        + fmt::Debug + fmt::Display
        + Add<Output=Self> + Mul<Output=Self>
        + AddAssign + MulAssign
        + Sum
    {
        /// Additive identity.
        const ZERO: Self;
        /// Multiplicative identity.
        const ONE: Self;

        /// `|self - other|`, computed without underflowing unsigned types.
        ///
        /// For integers this saturates at `MAX`.
        fn abs_diff(self, other: Self) -> Self;

        /// Lossy conversion used for diagnostics.
        fn to_f64(self) -> f64;
    }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

pub use self::ring::Ring;
mod ring {
    use std::ops::{Sub, Neg, SubAssign};
    use super::Semiring;

    /// Trait for scalars with addition, multiplication, and subtraction.
    ///
    /// It doesn't include unsigned integers because a ring must be
    /// closed under negation.
    pub trait Ring
        : Semiring + Sealed
        + Sub<Output=Self> + SubAssign
        + Neg<Output=Self>
    { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

pub use self::field::Field;
mod field {
    use std::ops::{Div, DivAssign};
    use super::Ring;

    /// Trait for scalars with addition, multiplication, subtraction, and division.
    ///
    /// Currently just the primitive real floating point types.
    pub trait Field
        : Ring + Sealed
        + Div<Output=Self> + DivAssign
    {
        /// Machine epsilon.
        const EPSILON: Self;

        fn abs(self) -> Self;
    }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

pub use self::float::Float;
mod float {
    use super::Field;

    /// Field scalars with the transcendental functions needed for
    /// building transforms.
    pub trait Float: Field + Sealed {
        fn sqrt(self) -> Self;
        fn sin(self) -> Self;
        fn cos(self) -> Self;
    }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

// Generate the (mostly trivial) impls.
macro_rules! impl_semiring {
    ($T:ty, $sub:expr) => {
        impl Semiring for $T {
            const ZERO: $T = 0 as $T;
            const ONE: $T = 1 as $T;

            #[inline(always)]
            fn abs_diff(self, other: $T) -> $T {
                match self > other {
                    true => ($sub)(self, other),
                    false => ($sub)(other, self),
                }
            }

            #[inline(always)]
            fn to_f64(self) -> f64 { self as f64 }
        }
        impl semiring::Sealed for $T { }
    };
}

gen_each!{
    @{field}
    for_each!({$T:ty}) => {
        impl_semiring!{$T, <$T as std::ops::Sub>::sub}
    };
}

// distances too large for a signed type stick at MAX
gen_each!{
    @{integer}
    for_each!({$T:ty}) => {
        impl_semiring!{$T, <$T>::saturating_sub}
    };
}

gen_each!{
    @{ring}
    for_each!({$T:ty}) => {
        impl Ring for $T { }
        impl ring::Sealed for $T { }
    };
}

gen_each!{
    @{field}
    for_each!({$T:ty}) => {
        impl Field for $T {
            const EPSILON: $T = <$T>::EPSILON;

            #[inline(always)] fn abs(self) -> $T { self.abs() }
        }
        impl field::Sealed for $T { }
    };
}

gen_each!{
    @{float}
    for_each!({$T:ty}) => {
        impl Float for $T {
            #[inline(always)] fn sqrt(self) -> $T { self.sqrt() }
            #[inline(always)] fn sin(self) -> $T { self.sin() }
            #[inline(always)] fn cos(self) -> $T { self.cos() }
        }
        impl float::Sealed for $T { }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abs_diff_does_not_underflow() {
        assert_eq!(Semiring::abs_diff(3u8, 5), 2);
        assert_eq!(Semiring::abs_diff(5u8, 3), 2);
        assert_eq!(Semiring::abs_diff(-2i32, 3), 5);
        assert_eq!(Semiring::abs_diff(0.25f64, 1.0), 0.75);
    }

    #[test]
    fn abs_diff_saturates_for_distant_signed_values() {
        assert_eq!(Semiring::abs_diff(i8::MIN, i8::MAX), i8::MAX);
        assert_eq!(Semiring::abs_diff(i8::MAX, i8::MIN), i8::MAX);
        assert_eq!(Semiring::abs_diff(i64::MIN, 1), i64::MAX);
        assert_eq!(Semiring::abs_diff(u8::MAX, 0), u8::MAX);
    }

    #[test]
    fn identities() {
        assert_eq!(<f64 as Semiring>::ZERO, 0.0);
        assert_eq!(<f32 as Semiring>::ONE, 1.0);
        assert_eq!(<usize as Semiring>::ONE, 1);
    }
}
