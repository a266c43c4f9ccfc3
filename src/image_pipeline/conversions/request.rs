use std::path::{Path, PathBuf};

use crate::image_pipeline::format::SupportedFormat;

/// A conversion whose input exists and whose target format is supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub input_path: PathBuf,
    pub target_format: SupportedFormat,
}

impl ConversionRequest {
    pub fn output_path(&self) -> PathBuf {
        output_path_for(&self.input_path, self.target_format)
    }
}

/// Same directory and stem as `input`, with the extension swapped for the target format.
pub fn output_path_for(input: &Path, format: SupportedFormat) -> PathBuf {
    input.with_extension(format.extension())
}
