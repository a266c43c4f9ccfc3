//! Image metadata inspection

mod inspector;

pub use inspector::{ImageMetadata, Inspector};
