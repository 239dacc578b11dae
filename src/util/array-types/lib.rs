/* ********************************************************************** **
** This file is part of fixmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                     **
**                                                                        **
**     http://www.apache.org/licenses/LICENSE-2.0                         **
**     http://opensource.org/licenses/MIT                                 **
** ********************************************************************** */


//! Fixed-size matrices and vectors with compile-time dimensions.
//!
//! `Matrix<R, C, X>` is a row-major `[[X; C]; R]`; `Vector<N, X>` is an
//! `[X; N]`.  Dimensions are const generics, so mismatched shapes in
//! products, sub-matrix copies and direct sums are rejected at build time.
//! Runtime failures (bad indices, singular matrices, short inputs) come
//! back as [`MatrixError`].

#[macro_use]
extern crate log;
#[cfg(test)]
#[macro_use]
extern crate fixmat_assert_close;

#[macro_use] mod macros;
mod traits;
mod types;
mod error;
mod access;
mod ops;
mod close;
mod transform;

// Expose neatly-named modules, but let the .rs files have names that are close alphabetically.
#[doc(hidden)] pub mod methods_v;
#[doc(hidden)] pub mod methods_m;
pub use self::methods_v as vee;
pub use self::methods_m as mat;

pub mod inverse;

pub mod prelude {
    pub use crate::inverse::Det;
    pub use crate::inverse::Inverse;
}

pub use crate::types::*;
pub use crate::error::MatrixError;
pub use crate::traits::{Semiring, Ring, Field, Float};
pub use crate::inverse::{Det, Inverse, inv, det};
pub use crate::methods_m::{eye, zero, transpose, direct_sum};
