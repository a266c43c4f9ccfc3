//! Image processing pipeline module
//!
//! Format normalization, conversion, inspection and environment diagnostics,
//! all written against the [`ImageCodec`] capability so the decision logic
//! stays independent of the pixel library.

pub mod codec;
pub mod common;
pub mod conversions;
pub mod diagnostics;
pub mod format;
pub mod inspect;

#[cfg(test)]
pub(crate) mod testing;

pub use common::{ConversionError, Result};

pub use codec::{CodecError, CodecMetadata, ColorMode, ImageCodec, ImageHandle, ImageRsCodec};

pub use format::{SUPPORTED_FORMATS, SupportedFormat, normalize, supported_list};

pub use conversions::{ConversionRequest, Converter, output_path_for};

pub use inspect::{ImageMetadata, Inspector};

pub use diagnostics::{Diagnostics, DiagnosticsReporter};
