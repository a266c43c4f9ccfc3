//! Types shared by codec implementations

use std::fmt;
use std::path::Path;

use thiserror::Error;

use crate::image_pipeline::common::error::ConversionError;

/// Failures reported by a codec, before the pipeline attaches path context.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The codec could not recognise the data as an image it can decode.
    #[error("unidentified image data")]
    Unidentified,

    #[error("{0}")]
    Read(String),

    #[error("{0}")]
    Write(String),
}

impl CodecError {
    /// Failure while opening or decoding the image at `path`.
    pub fn into_open_error(self, path: &Path) -> ConversionError {
        match self {
            Self::Unidentified => ConversionError::NotImage(path.to_path_buf()),
            Self::Read(reason) | Self::Write(reason) => ConversionError::ReadFailed {
                path: path.to_path_buf(),
                reason,
            },
        }
    }

    /// Failure while producing the output at `path`.
    pub fn into_save_error(self, path: &Path) -> ConversionError {
        ConversionError::ConvertFailed {
            path: path.to_path_buf(),
            reason: self.to_string(),
        }
    }
}

pub type CodecResult<T> = std::result::Result<T, CodecError>;

/// Per-pixel channel layout, named the way image tools usually print it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorMode {
    /// 8-bit grayscale
    L,
    /// 8-bit grayscale with alpha
    La,
    Rgb,
    Rgba,
    /// Palette indexed
    P,
    /// 16-bit grayscale
    I16,
    Other(String),
}

impl ColorMode {
    /// Modes that carry alpha or a palette and cannot be written as baseline JPEG.
    pub fn needs_rgb_for_jpeg(&self) -> bool {
        matches!(self, Self::Rgba | Self::La | Self::P)
    }

    pub fn name(&self) -> &str {
        match self {
            Self::L => "L",
            Self::La => "LA",
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
            Self::P => "P",
            Self::I16 => "I;16",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a codec reports about an opened image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecMetadata {
    /// Detected container format, if the codec knows it.
    pub format: Option<String>,
    pub width: u32,
    pub height: u32,
    pub color_mode: ColorMode,
}
