use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Input file not found: {}", .0.display())]
    InputMissing(PathBuf),

    #[error("Could not identify the input file as an image: {}", .0.display())]
    NotImage(PathBuf),

    #[error("Failed to read image {}: {reason}", .path.display())]
    ReadFailed { path: PathBuf, reason: String },

    #[error("'{0}' is a reserved keyword. Use --{0} instead.")]
    ReservedKeyword(String),

    #[error("input file and target format are required.")]
    MissingArgs,

    #[error("Unsupported target format '{format}'. Supported formats: {supported}.")]
    UnsupportedFormat { format: String, supported: String },

    #[error("Failed to convert image to {}: {reason}", .path.display())]
    ConvertFailed { path: PathBuf, reason: String },

    #[error("{0}")]
    BadArguments(String),
}

impl ConversionError {
    /// Stable two-digit code printed in front of the error line.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InputMissing(_) => "06",
            Self::NotImage(_) => "07",
            Self::ReadFailed { .. } => "08",
            Self::ReservedKeyword(_) => "09",
            Self::MissingArgs => "10",
            Self::UnsupportedFormat { .. } => "11",
            Self::ConvertFailed { .. } => "12",
            Self::BadArguments(_) => "13",
        }
    }

    /// Malformed invocations exit with 2, everything else with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::BadArguments(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;
