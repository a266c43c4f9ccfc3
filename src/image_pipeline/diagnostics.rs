//! Environment diagnostics for `conv --doctor`.

use tracing::{debug, instrument};

use crate::image_pipeline::codec::{ImageCodec, ImageRsCodec};

/// rustc version the binary was built with.
const RUSTC_VERSION: &str = env!("CONV_RUSTC_VERSION");

const AVIF: &str = "avif";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    pub runtime_version: String,
    pub codec_library_version: String,
    pub avif_supported: bool,
}

pub struct DiagnosticsReporter<C: ImageCodec> {
    codec: C,
}

impl DiagnosticsReporter<ImageRsCodec> {
    pub fn new() -> Self {
        Self {
            codec: ImageRsCodec,
        }
    }
}

impl Default for DiagnosticsReporter<ImageRsCodec> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ImageCodec> DiagnosticsReporter<C> {
    pub fn with_codec(codec: C) -> Self {
        Self { codec }
    }

    #[instrument(skip(self))]
    pub fn diagnose(&self) -> Diagnostics {
        Diagnostics {
            runtime_version: RUSTC_VERSION.to_string(),
            codec_library_version: self.codec.library_version(),
            avif_supported: self.avif_supported(),
        }
    }

    fn avif_supported(&self) -> bool {
        if let Some(supported) = self.codec.supports(AVIF) {
            return supported;
        }

        debug!("Codec has no AVIF query, checking registered extensions");
        self.codec
            .registered_extensions()
            .iter()
            .any(|ext| ext.trim_start_matches('.').eq_ignore_ascii_case(AVIF))
    }
}
