//! Shared pieces of the image pipeline.
//!
//! Every operation in the crate reports failures through [`ConversionError`].

pub mod error;

pub use error::{ConversionError, Result};
