/* ********************************************************************** **
** This file is part of fixmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                     **
**                                                                        **
**     http://www.apache.org/licenses/LICENSE-2.0                         **
**     http://opensource.org/licenses/MIT                                 **
** ********************************************************************** */

//! A named-check harness that exercises the fixmat kernel end to end.
//!
//! The `fixmat-selftest` binary runs every check in [`checks::ALL`],
//! logging each as passed or failed, and exits nonzero on any failure.

#[macro_use]
extern crate log;

pub type FailResult<T> = Result<T, failure::Error>;

pub mod config;
pub mod logging;
pub mod harness;
pub mod checks;
pub mod entry_points;

pub use crate::config::{Settings, Tolerances};
pub use crate::harness::{Check, Outcome, Summary, run_checks};
