use std::path::Path;

use tracing::{debug, instrument};

use crate::image_pipeline::{
    codec::{ImageCodec, ImageHandle, ImageRsCodec},
    common::error::{ConversionError, Result},
};

/// Basic facts about an image file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMetadata {
    /// Lowercase format name, `unknown` when the codec cannot tell.
    pub format: String,
    pub width: u32,
    pub height: u32,
    pub color_mode: String,
    pub size_bytes: u64,
}

pub struct Inspector<C: ImageCodec> {
    codec: C,
}

impl Inspector<ImageRsCodec> {
    pub fn new() -> Self {
        Self {
            codec: ImageRsCodec,
        }
    }
}

impl Default for Inspector<ImageRsCodec> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ImageCodec> Inspector<C> {
    pub fn with_codec(codec: C) -> Self {
        Self { codec }
    }

    #[instrument(skip(self, input_path), fields(input = %input_path.display()))]
    pub fn inspect(&self, input_path: &Path) -> Result<ImageMetadata> {
        if !input_path.exists() {
            return Err(ConversionError::InputMissing(input_path.to_path_buf()));
        }

        let handle = self
            .codec
            .open(input_path)
            .map_err(|e| e.into_open_error(input_path))?;
        let meta = handle.metadata();

        let size_bytes = std::fs::metadata(input_path)
            .map_err(|e| ConversionError::ReadFailed {
                path: input_path.to_path_buf(),
                reason: e.to_string(),
            })?
            .len();

        debug!(width = meta.width, height = meta.height, "Read image metadata");

        Ok(ImageMetadata {
            format: meta
                .format
                .map(|f| f.to_lowercase())
                .unwrap_or_else(|| "unknown".to_string()),
            width: meta.width,
            height: meta.height,
            color_mode: meta.color_mode.to_string(),
            size_bytes,
        })
    }
}
