use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::image_pipeline::{
    codec::{ColorMode, ImageCodec, ImageHandle, ImageRsCodec},
    common::error::{ConversionError, Result},
    conversions::request::ConversionRequest,
    format::{self, SupportedFormat},
};

pub struct Converter<C: ImageCodec> {
    codec: C,
}

impl Converter<ImageRsCodec> {
    pub fn new() -> Self {
        Self {
            codec: ImageRsCodec,
        }
    }
}

impl Default for Converter<ImageRsCodec> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ImageCodec> Converter<C> {
    pub fn with_codec(codec: C) -> Self {
        Self { codec }
    }

    /// Checks the input and target format, then converts. Returns the written path.
    #[instrument(skip(self, input_path), fields(input = %input_path.display()))]
    pub fn convert(&self, input_path: &Path, target_format: &str) -> Result<PathBuf> {
        let request = self.prepare(input_path, target_format)?;
        self.convert_request(&request)
    }

    /// Validation half of [`Converter::convert`]: existence first, then format.
    pub fn prepare(&self, input_path: &Path, target_format: &str) -> Result<ConversionRequest> {
        if !input_path.exists() {
            return Err(ConversionError::InputMissing(input_path.to_path_buf()));
        }

        let normalized = format::normalize(target_format);
        let target_format = SupportedFormat::from_normalized(&normalized).ok_or_else(|| {
            ConversionError::UnsupportedFormat {
                format: normalized.clone(),
                supported: format::supported_list(),
            }
        })?;

        Ok(ConversionRequest {
            input_path: input_path.to_path_buf(),
            target_format,
        })
    }

    #[instrument(skip(self, request), fields(format = %request.target_format))]
    pub fn convert_request(&self, request: &ConversionRequest) -> Result<PathBuf> {
        let input_path = request.input_path.as_path();
        let output_path = request.output_path();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        // The handle lives until the end of this function, whichever way it exits.
        let mut handle = {
            let _span = tracing::info_span!("open_input").entered();
            self.codec
                .open(input_path)
                .map_err(|e| e.into_open_error(input_path))?
        };

        let mode = handle.color_mode();
        if request.target_format == SupportedFormat::Jpeg && mode.needs_rgb_for_jpeg() {
            let _span = tracing::info_span!("flatten_for_jpeg", from = %mode).entered();
            handle
                .convert_mode(ColorMode::Rgb)
                .map_err(|e| e.into_save_error(&output_path))?;
        } else {
            debug!("Keeping color mode {}", mode);
        }

        {
            let _span = tracing::info_span!("encode_output").entered();
            handle
                .save(&output_path, request.target_format)
                .map_err(|e| e.into_save_error(&output_path))?;
        }

        info!(output = %output_path.display(), "Conversion complete");
        Ok(output_path)
    }
}
