use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::image_pipeline::ConversionError;

/// Raw command-line fields, before any mode is decided.
///
/// The built-in help and version flags are disabled so that `--help` and
/// `--version` resolve through the same precedence rules as every other mode.
/// Unambiguous prefixes of long flags are accepted (`--doc`, `--vers`).
#[derive(Parser, Debug, Default, Clone, PartialEq, Eq)]
#[command(
    name = "conv",
    disable_help_flag = true,
    disable_version_flag = true,
    infer_long_args = true
)]
pub struct CliArgs {
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,

    /// Print supported formats
    #[arg(long, action = ArgAction::SetTrue)]
    pub formats: bool,

    /// Print image information
    #[arg(long, value_name = "FILE")]
    pub info: Option<PathBuf>,

    /// Print tool version
    #[arg(long, action = ArgAction::SetTrue)]
    pub version: bool,

    /// Check environment and AVIF support
    #[arg(long, action = ArgAction::SetTrue)]
    pub doctor: bool,

    #[arg(value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    #[arg(value_name = "FORMAT")]
    pub target_format: Option<String>,

    /// Path to the input image file
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input_file_opt: Option<PathBuf>,

    /// Target format: png, webp, jpeg, avif
    #[arg(short = 'f', long = "format", value_name = "FORMAT")]
    pub target_format_opt: Option<String>,
}

/// Keeps only clap's one-line summary, e.g. `unexpected argument '--bogus' found`.
impl From<clap::Error> for ConversionError {
    fn from(err: clap::Error) -> Self {
        let rendered = err.to_string();
        let first = rendered.lines().next().unwrap_or_default();
        let message = first.strip_prefix("error: ").unwrap_or(first).trim();
        Self::BadArguments(message.to_string())
    }
}
