//! Photo references supplied to the collage

use crate::io::configuration::{BLOB_SCHEME, PROXY_PREFIX, TRANSCODE_EXTENSION};

/// Resolvable photo source with a human-readable label
///
/// Identity is the `source` string; two references with the same source are
/// the same photo.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PhotoRef {
    /// Opaque URI understood by the fetcher
    pub source: String,
    /// Accessible text for the tile
    pub label: String,
}

impl PhotoRef {
    /// Create a photo reference
    pub fn new(source: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            label: label.into(),
        }
    }

    /// Whether the source must be transcoded before it can be displayed
    pub fn needs_transcode(&self) -> bool {
        needs_transcode(&self.source)
    }
}

/// Low-level element used to display a source
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderElement {
    /// Plain image element, for blob handles and proxy endpoints
    Native,
    /// Size-optimized image element for ordinary URLs
    Optimized,
}

impl RenderElement {
    /// Pick the element for a displayable source
    pub fn for_source(source: &str) -> Self {
        if source.starts_with(BLOB_SCHEME) || source.starts_with(PROXY_PREFIX) {
            Self::Native
        } else {
            Self::Optimized
        }
    }
}

/// Whether `source` ends in the legacy extension, ignoring case
pub fn needs_transcode(source: &str) -> bool {
    source.to_ascii_lowercase().ends_with(TRANSCODE_EXTENSION)
}
