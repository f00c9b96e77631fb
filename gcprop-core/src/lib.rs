#![warn(clippy::all)]
//! Core types of the `gcprop` project.
//!
//! - [si]: physical quantities with compile-time checked units and
//!   conversion from and to named units.
//! - [parameter]: group records, group tables and chemical records.
//! - [composition]: elemental composition from sum formulas.
//! - [GcError]: the error type shared by all crates of the project.

pub mod composition;
mod errors;
pub mod parameter;
pub mod si;

pub use composition::Composition;
pub use errors::{finite, GcError, GcResult};
