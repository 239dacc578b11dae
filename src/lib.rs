/* ********************************************************************** **
** This file is part of fixmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                     **
**                                                                        **
**     http://www.apache.org/licenses/LICENSE-2.0                         **
**     http://opensource.org/licenses/MIT                                 **
** ********************************************************************** */

//! Fixed-size matrices with compile-time dimensions.
//!
//! This crate re-exports the kernel from `fixmat-array-types`; the
//! self-check harness lives in `fixmat-selftest`.

pub use fixmat_array_types::*;

pub mod selftest {
    pub use fixmat_selftest::*;
}
