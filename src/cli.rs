//! Command-line interface for conv
//!
//! Parsing is done once by clap into [`CliArgs`], [`resolve`] turns those
//! fields into a single [`OperatingMode`], and [`execute`] runs it and prints
//! exactly one coded outcome.

mod args;
mod dispatch;
mod report;
mod resolver;

use std::ffi::OsString;
use std::io::{self, Write};

use clap::Parser;
use tracing::debug;

use crate::image_pipeline::{ConversionError, ImageCodec};

pub use args::CliArgs;
pub use dispatch::{HELP_TEXT, Outcome, VERSION, execute, perform, render};
pub use report::{Reporter, SuccessCode};
pub use resolver::{OperatingMode, RESERVED_KEYWORDS, resolve};

/// Parses `argv` (program name first), runs the resolved mode against `codec`
/// and returns the exit status: 0 on success, 1 for operational failures and
/// 2 for malformed invocations.
pub fn run<I, T, C, O, E>(argv: I, codec: &C, reporter: &mut Reporter<O, E>) -> io::Result<u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    C: ImageCodec,
    O: Write,
    E: Write,
{
    let mode = match CliArgs::try_parse_from(argv) {
        Ok(args) => {
            debug!(?args, "Parsed arguments");
            resolve(args)
        }
        Err(err) => Err(ConversionError::from(err)),
    };

    let status = execute(mode, codec, reporter)?;
    reporter.flush()?;
    Ok(status)
}
