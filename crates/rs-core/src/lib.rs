//! # rs-core
//!
//! Core types shared by the rsupport crates: the error taxonomy and the
//! tagged [`Scalar`] value held by column slots.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod nan;
pub mod scalar;

pub use error::{Error, Result};
pub use scalar::{Scalar, ScalarType};
