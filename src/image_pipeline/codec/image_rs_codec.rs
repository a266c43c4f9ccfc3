//! Codec backed by the `image` crate.
//!
//! Decoding sniffs the file contents rather than trusting the extension, so a
//! text file named `photo.png` is reported as unidentified instead of as a
//! broken PNG. Encoding goes to memory first and then replaces the destination
//! in one rename, which means a failed save never leaves a partial file behind.

use std::fs::File;
use std::io::{BufReader, Cursor, Write};
use std::path::Path;

use image::{ColorType, DynamicImage, ImageFormat, ImageReader};
use tracing::debug;

use crate::image_pipeline::codec::capability::{ImageCodec, ImageHandle};
use crate::image_pipeline::codec::types::{CodecError, CodecMetadata, CodecResult, ColorMode};
use crate::image_pipeline::format::SupportedFormat;

/// Version of the `image` crate this binary was built against.
const IMAGE_CRATE_VERSION: &str = env!("CONV_IMAGE_VERSION");

#[derive(Debug, Clone, Copy, Default)]
pub struct ImageRsCodec;

#[derive(Debug)]
pub struct ImageRsHandle {
    image: DynamicImage,
    format: Option<ImageFormat>,
}

impl ImageCodec for ImageRsCodec {
    type Handle = ImageRsHandle;

    fn open(&self, path: &Path) -> CodecResult<ImageRsHandle> {
        let file = File::open(path).map_err(|e| CodecError::Read(e.to_string()))?;
        let reader = ImageReader::new(BufReader::new(file))
            .with_guessed_format()
            .map_err(|e| CodecError::Read(e.to_string()))?;

        let Some(format) = reader.format() else {
            debug!("No known signature in {}", path.display());
            return Err(CodecError::Unidentified);
        };

        // Identified but not decodable here (AVIF is encode-only in this build).
        if !format.reading_enabled() {
            return Err(CodecError::Read(format!(
                "no {format:?} decoder is available in this build"
            )));
        }

        let image = reader
            .decode()
            .map_err(|e| CodecError::Read(e.to_string()))?;
        debug!(
            "Decoded {:?} image: {}x{} {:?}",
            format,
            image.width(),
            image.height(),
            image.color()
        );

        Ok(ImageRsHandle {
            image,
            format: Some(format),
        })
    }

    fn supports(&self, format: &str) -> Option<bool> {
        ImageFormat::from_extension(format).map(|f| f.writing_enabled())
    }

    fn registered_extensions(&self) -> Vec<String> {
        ImageFormat::all()
            .filter(|f| f.reading_enabled() || f.writing_enabled())
            .flat_map(|f| f.extensions_str().iter().map(|ext| ext.to_string()))
            .collect()
    }

    fn library_version(&self) -> String {
        IMAGE_CRATE_VERSION.to_string()
    }
}

impl ImageHandle for ImageRsHandle {
    fn metadata(&self) -> CodecMetadata {
        CodecMetadata {
            // Variant names (Png, Jpeg, WebP) are the usual format names up to case.
            format: self.format.map(|f| format!("{f:?}")),
            width: self.image.width(),
            height: self.image.height(),
            color_mode: color_mode(self.image.color()),
        }
    }

    fn convert_mode(&mut self, mode: ColorMode) -> CodecResult<()> {
        let converted = match mode {
            ColorMode::L => DynamicImage::ImageLuma8(self.image.to_luma8()),
            ColorMode::La => DynamicImage::ImageLumaA8(self.image.to_luma_alpha8()),
            ColorMode::Rgb => DynamicImage::ImageRgb8(self.image.to_rgb8()),
            ColorMode::Rgba => DynamicImage::ImageRgba8(self.image.to_rgba8()),
            ColorMode::I16 => DynamicImage::ImageLuma16(self.image.to_luma16()),
            other => {
                return Err(CodecError::Write(format!("cannot convert to mode {other}")));
            }
        };
        debug!("Converted {:?} -> {:?}", self.image.color(), converted.color());
        self.image = converted;
        Ok(())
    }

    fn save(&self, path: &Path, format: SupportedFormat) -> CodecResult<()> {
        let mut buffer = Cursor::new(Vec::new());
        self.image
            .write_to(&mut buffer, image_format(format))
            .map_err(|e| CodecError::Write(e.to_string()))?;
        debug!("Encoded {} bytes of {}", buffer.get_ref().len(), format);

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut builder = tempfile::Builder::new();
        builder.prefix(".conv-").suffix(".tmp");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o644));
        }

        let mut staged = builder
            .tempfile_in(dir)
            .map_err(|e| CodecError::Write(e.to_string()))?;
        staged
            .write_all(buffer.get_ref())
            .map_err(|e| CodecError::Write(e.to_string()))?;
        staged
            .persist(path)
            .map_err(|e| CodecError::Write(e.error.to_string()))?;

        Ok(())
    }
}

fn image_format(format: SupportedFormat) -> ImageFormat {
    match format {
        SupportedFormat::Avif => ImageFormat::Avif,
        SupportedFormat::Jpeg => ImageFormat::Jpeg,
        SupportedFormat::Png => ImageFormat::Png,
        SupportedFormat::Webp => ImageFormat::WebP,
    }
}

fn color_mode(color: ColorType) -> ColorMode {
    match color {
        ColorType::L8 => ColorMode::L,
        ColorType::La8 => ColorMode::La,
        ColorType::Rgb8 => ColorMode::Rgb,
        ColorType::Rgba8 => ColorMode::Rgba,
        ColorType::L16 => ColorMode::I16,
        ColorType::La16 => ColorMode::Other("LA;16".to_string()),
        ColorType::Rgb16 => ColorMode::Other("RGB;16".to_string()),
        ColorType::Rgba16 => ColorMode::Other("RGBA;16".to_string()),
        ColorType::Rgb32F => ColorMode::Other("RGBF".to_string()),
        ColorType::Rgba32F => ColorMode::Other("RGBAF".to_string()),
        other => ColorMode::Other(format!("{other:?}")),
    }
}
