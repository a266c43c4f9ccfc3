use std::path::Path;

use crate::image_pipeline::codec::types::{CodecMetadata, CodecResult, ColorMode};
use crate::image_pipeline::format::SupportedFormat;

/// A decoded image owned by a single operation. Dropping it releases the image.
pub trait ImageHandle {
    fn metadata(&self) -> CodecMetadata;

    fn color_mode(&self) -> ColorMode {
        self.metadata().color_mode
    }

    fn convert_mode(&mut self, mode: ColorMode) -> CodecResult<()>;

    fn save(&self, path: &Path, format: SupportedFormat) -> CodecResult<()>;
}

pub trait ImageCodec {
    type Handle: ImageHandle;

    fn open(&self, path: &Path) -> CodecResult<Self::Handle>;

    /// Explicit support query for an optional format, `None` if the codec cannot answer.
    fn supports(&self, format: &str) -> Option<bool>;

    /// File extensions the codec has registered, without the leading dot.
    fn registered_extensions(&self) -> Vec<String>;

    fn library_version(&self) -> String;
}

impl<C: ImageCodec + ?Sized> ImageCodec for &C {
    type Handle = C::Handle;

    fn open(&self, path: &Path) -> CodecResult<Self::Handle> {
        (**self).open(path)
    }

    fn supports(&self, format: &str) -> Option<bool> {
        (**self).supports(format)
    }

    fn registered_extensions(&self) -> Vec<String> {
        (**self).registered_extensions()
    }

    fn library_version(&self) -> String {
        (**self).library_version()
    }
}
