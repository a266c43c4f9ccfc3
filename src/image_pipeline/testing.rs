//! In-memory codec used by unit tests across the crate.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::image_pipeline::codec::{
    CodecError, CodecMetadata, CodecResult, ColorMode, ImageCodec, ImageHandle,
};
use crate::image_pipeline::format::SupportedFormat;

#[derive(Debug, Clone, Copy)]
pub enum OpenFailure {
    Unidentified,
    Read,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedImage {
    pub path: PathBuf,
    pub format: SupportedFormat,
    pub mode: ColorMode,
}

#[derive(Clone)]
pub struct FakeCodec {
    pub mode: ColorMode,
    pub format: Option<String>,
    pub open_failure: Option<OpenFailure>,
    pub convert_mode_fails: bool,
    pub save_fails: bool,
    pub avif: Option<bool>,
    pub extensions: Vec<String>,
    pub saved: Arc<Mutex<Vec<SavedImage>>>,
    pub opened: Arc<AtomicUsize>,
    pub released: Arc<AtomicUsize>,
}

impl FakeCodec {
    pub fn new(mode: ColorMode) -> Self {
        Self {
            mode,
            format: Some("PNG".to_string()),
            open_failure: None,
            convert_mode_fails: false,
            save_fails: false,
            avif: Some(true),
            extensions: vec!["png".into(), "jpg".into(), "jpeg".into(), "webp".into()],
            saved: Arc::new(Mutex::new(Vec::new())),
            opened: Arc::new(AtomicUsize::new(0)),
            released: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn saved(&self) -> Vec<SavedImage> {
        self.saved.lock().unwrap().clone()
    }

    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

pub struct FakeHandle {
    mode: ColorMode,
    format: Option<String>,
    convert_mode_fails: bool,
    save_fails: bool,
    saved: Arc<Mutex<Vec<SavedImage>>>,
    released: Arc<AtomicUsize>,
}

impl Drop for FakeHandle {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

impl ImageHandle for FakeHandle {
    fn metadata(&self) -> CodecMetadata {
        CodecMetadata {
            format: self.format.clone(),
            width: 64,
            height: 48,
            color_mode: self.mode.clone(),
        }
    }

    fn convert_mode(&mut self, mode: ColorMode) -> CodecResult<()> {
        if self.convert_mode_fails {
            return Err(CodecError::Write(format!("mock cannot convert to {mode}")));
        }
        self.mode = mode;
        Ok(())
    }

    fn save(&self, path: &Path, format: SupportedFormat) -> CodecResult<()> {
        if self.save_fails {
            return Err(CodecError::Write("mock encode error".to_string()));
        }
        self.saved.lock().unwrap().push(SavedImage {
            path: path.to_path_buf(),
            format,
            mode: self.mode.clone(),
        });
        Ok(())
    }
}

impl ImageCodec for FakeCodec {
    type Handle = FakeHandle;

    fn open(&self, _path: &Path) -> CodecResult<FakeHandle> {
        match self.open_failure {
            Some(OpenFailure::Unidentified) => return Err(CodecError::Unidentified),
            Some(OpenFailure::Read) => {
                return Err(CodecError::Read("mock decode error".to_string()));
            }
            None => {}
        }
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(FakeHandle {
            mode: self.mode.clone(),
            format: self.format.clone(),
            convert_mode_fails: self.convert_mode_fails,
            save_fails: self.save_fails,
            saved: self.saved.clone(),
            released: self.released.clone(),
        })
    }

    fn supports(&self, _format: &str) -> Option<bool> {
        self.avif
    }

    fn registered_extensions(&self) -> Vec<String> {
        self.extensions.clone()
    }

    fn library_version(&self) -> String {
        "fake-1.0".to_string()
    }
}
