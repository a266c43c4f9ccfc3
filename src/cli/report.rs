//! Coded terminal output
//!
//! Every outcome line starts with a stable two-digit code so scripts can
//! parse results: `[05] Saved converted file to photo.webp` on stdout,
//! `[11] Error: Unsupported target format 'bmp'. ...` on stderr.

use std::io::{self, Stderr, Stdout, Write};

use crate::image_pipeline::ConversionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessCode {
    FormatsListed,
    VersionShown,
    DoctorShown,
    ImageInfoShown,
    ImageConverted,
}

impl SuccessCode {
    pub fn code(self) -> &'static str {
        match self {
            Self::FormatsListed => "01",
            Self::VersionShown => "02",
            Self::DoctorShown => "03",
            Self::ImageInfoShown => "04",
            Self::ImageConverted => "05",
        }
    }
}

pub struct Reporter<O: Write, E: Write> {
    out: O,
    err: E,
}

impl Reporter<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn success(&mut self, code: SuccessCode, message: &str) -> io::Result<()> {
        writeln!(self.out, "[{}] {}", code.code(), message)
    }

    /// Uncoded follow-up line of a multi-line success report.
    pub fn detail(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")
    }

    pub fn plain(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    pub fn error(&mut self, error: &ConversionError) -> io::Result<()> {
        writeln!(self.err, "[{}] Error: {}", error.code(), error)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}
