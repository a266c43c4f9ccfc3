//! Image codec capability
//!
//! The pipeline never touches pixels itself. It drives a codec through the
//! [`ImageCodec`] and [`ImageHandle`] traits, which keeps the decision logic
//! testable against a fake codec. [`ImageRsCodec`] is the production backend.

mod capability;
mod image_rs_codec;
pub mod types;

pub use capability::{ImageCodec, ImageHandle};
pub use image_rs_codec::{ImageRsCodec, ImageRsHandle};
pub use types::{CodecError, CodecMetadata, CodecResult, ColorMode};
