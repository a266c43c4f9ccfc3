//! Format conversion
//!
//! Turns a validated [`ConversionRequest`] into a file next to the input,
//! flattening alpha and palette images before they are written as JPEG.

mod converter;
mod request;


pub use converter::Converter;
pub use request::{ConversionRequest, output_path_for};
