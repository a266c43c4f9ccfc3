//! Target format names
//!
//! Users may spell a format as `JPG`, `.png` or `webp`; everything is folded
//! into a canonical lowercase identifier before it is checked against
//! [`SUPPORTED_FORMATS`].

use std::fmt;

/// Formats `conv` is able to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SupportedFormat {
    Avif,
    Jpeg,
    Png,
    Webp,
}

/// Every supported format, sorted by name.
pub const SUPPORTED_FORMATS: [SupportedFormat; 4] = [
    SupportedFormat::Avif,
    SupportedFormat::Jpeg,
    SupportedFormat::Png,
    SupportedFormat::Webp,
];

impl SupportedFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Avif => "avif",
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Webp => "webp",
        }
    }

    /// Looks up an already normalized identifier. `jpg` is not accepted here.
    pub fn from_normalized(name: &str) -> Option<Self> {
        SUPPORTED_FORMATS.into_iter().find(|f| f.as_str() == name)
    }

    /// Extension used for the converted file.
    pub fn extension(self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for SupportedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonicalizes a user supplied format token.
///
/// Lowercases, drops leading dots and maps `jpg` to `jpeg`. Never fails;
/// the caller decides whether the result is supported.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let trimmed = lowered.trim_start_matches('.');
    match trimmed {
        "jpg" => "jpeg".to_string(),
        other => other.to_string(),
    }
}

/// `avif, jpeg, png, webp`
pub fn supported_list() -> String {
    SUPPORTED_FORMATS
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
