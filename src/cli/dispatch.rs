use std::io::{self, Write};
use std::path::PathBuf;

use tracing::{debug, instrument};

use crate::cli::report::{Reporter, SuccessCode};
use crate::cli::resolver::OperatingMode;
use crate::image_pipeline::{
    Converter, Diagnostics, DiagnosticsReporter, ImageCodec, ImageMetadata, Inspector, Result,
    supported_list,
};

/// User-facing release line; the crate version adds a patch component.
pub const VERSION: &str = "0.3";

pub const HELP_TEXT: &str = "\
Conv-rt help:

Converting a file to another format:
  conv [FILE] [FORMAT]
  conv -i [FILE] -f [FORMAT]

Showing information about a file:
  conv [FILE]
  conv -i [FILE]
  conv --info [FILE]

Misc:
  conv --doctor
  conv --formats
  conv --version
";

/// What a successful run has to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Help,
    Formats,
    Version,
    Doctor(Diagnostics),
    Info(ImageMetadata),
    Converted(PathBuf),
}

#[instrument(skip(codec))]
pub fn perform<C: ImageCodec>(mode: OperatingMode, codec: &C) -> Result<Outcome> {
    match mode {
        OperatingMode::Help => Ok(Outcome::Help),
        OperatingMode::ListFormats => Ok(Outcome::Formats),
        OperatingMode::ShowVersion => Ok(Outcome::Version),
        OperatingMode::Doctor => Ok(Outcome::Doctor(
            DiagnosticsReporter::with_codec(codec).diagnose(),
        )),
        OperatingMode::ShowInfo(path) => Inspector::with_codec(codec).inspect(&path).map(Outcome::Info),
        OperatingMode::Convert {
            input,
            target_format,
        } => Converter::with_codec(codec)
            .convert(&input, &target_format)
            .map(Outcome::Converted),
    }
}

pub fn render<O: Write, E: Write>(outcome: &Outcome, reporter: &mut Reporter<O, E>) -> io::Result<()> {
    match outcome {
        Outcome::Help => reporter.plain(HELP_TEXT),
        Outcome::Formats => reporter.success(
            SuccessCode::FormatsListed,
            &format!("Supported formats: {}", supported_list()),
        ),
        Outcome::Version => {
            reporter.success(SuccessCode::VersionShown, &format!("Version: {VERSION}"))
        }
        Outcome::Doctor(report) => {
            reporter.success(SuccessCode::DoctorShown, "Environment diagnostics:")?;
            reporter.detail(&format!("Rust: {}", report.runtime_version))?;
            reporter.detail(&format!("image: {}", report.codec_library_version))?;
            let avif = if report.avif_supported { "yes" } else { "no" };
            reporter.detail(&format!("AVIF support: {avif}"))
        }
        Outcome::Info(meta) => {
            reporter.success(SuccessCode::ImageInfoShown, "Image information:")?;
            reporter.detail(&format!("Format: {}", meta.format))?;
            reporter.detail(&format!("Dimensions: {}x{}", meta.width, meta.height))?;
            reporter.detail(&format!("Mode: {}", meta.color_mode))?;
            reporter.detail(&format!("File size: {} bytes", meta.size_bytes))
        }
        Outcome::Converted(path) => reporter.success(
            SuccessCode::ImageConverted,
            &format!("Saved converted file to {}", path.display()),
        ),
    }
}

/// Runs a resolved invocation to completion and returns the process exit status.
pub fn execute<C: ImageCodec, O: Write, E: Write>(
    mode: Result<OperatingMode>,
    codec: &C,
    reporter: &mut Reporter<O, E>,
) -> io::Result<u8> {
    match mode.and_then(|mode| perform(mode, codec)) {
        Ok(outcome) => {
            render(&outcome, reporter)?;
            Ok(0)
        }
        Err(err) => {
            debug!(code = err.code(), "Invocation failed: {err:?}");
            reporter.error(&err)?;
            Ok(err.exit_code())
        }
    }
}
