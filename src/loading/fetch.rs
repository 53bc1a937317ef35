//! Retrieval of raw photo bytes by source URI

use crate::io::configuration::{BLOB_SCHEME, CATALOG_URI_PREFIX};
use crate::io::error::{CollageError, Result, fetch_error};
use std::path::{Path, PathBuf};

/// Fetches the raw bytes behind a photo source
pub trait Fetch {
    /// Read every byte of `uri`
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be resolved or read
    fn fetch(&self, uri: &str) -> Result<Vec<u8>>;
}

/// Resolves catalog URIs against a local photo directory
///
/// `/photos/<name>` maps to `<root>/<name>`; other relative paths are taken
/// relative to the root. Remote URLs and `blob:` URIs are not fetchable.
#[derive(Clone, Debug)]
pub struct FileFetcher {
    root: PathBuf,
}

impl FileFetcher {
    /// Fetcher reading below `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory sources are resolved against
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Local path for `uri`
    ///
    /// # Errors
    ///
    /// Returns an error for remote URLs, `blob:` URIs and paths escaping the root
    pub fn resolve(&self, uri: &str) -> Result<PathBuf> {
        if uri.starts_with(BLOB_SCHEME) || uri.contains("://") {
            return Err(fetch_error(uri, &"not a local source"));
        }
        let relative = uri
            .strip_prefix(CATALOG_URI_PREFIX)
            .unwrap_or_else(|| uri.trim_start_matches('/'));
        if relative.is_empty() || relative.split('/').any(|part| part == "..") {
            return Err(fetch_error(uri, &"path outside the photo directory"));
        }
        Ok(self.root.join(relative))
    }
}

impl Fetch for FileFetcher {
    fn fetch(&self, uri: &str) -> Result<Vec<u8>> {
        let path = self.resolve(uri)?;
        std::fs::read(&path).map_err(|e| CollageError::FileSystem {
            path,
            operation: "read photo",
            source: e,
        })
    }
}
