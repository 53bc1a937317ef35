//! Local photo directory listing

use crate::io::configuration::{CATALOG_URI_PREFIX, PHOTO_EXTENSIONS};
use crate::io::error::{CollageError, Result};
use crate::photo::PhotoRef;
use rand::seq::SliceRandom;
use rand::{SeedableRng, rngs::StdRng};
use std::path::Path;
use tracing::warn;

/// Whether a file name carries a supported photo extension (any case)
pub fn is_photo_file(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            PHOTO_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Photos found directly inside `dir`, sorted by file name
///
/// A missing or unreadable directory yields an empty list; unreadable
/// entries are skipped.
pub fn list_photos(dir: &Path) -> Vec<PhotoRef> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) => {
            warn!(dir = %dir.display(), %error, "photo directory unreadable");
            return Vec::new();
        }
    };

    let mut names: Vec<String> = entries
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| is_photo_file(name))
        .collect();
    names.sort();

    names
        .into_iter()
        .map(|name| PhotoRef::new(format!("{CATALOG_URI_PREFIX}{name}"), name))
        .collect()
}

/// Photos inside `dir`, failing when there are none
///
/// # Errors
///
/// Returns an error if `dir` is not a directory or holds no supported photos
pub fn load_catalog(dir: &Path) -> Result<Vec<PhotoRef>> {
    if !dir.is_dir() {
        return Err(CollageError::FileSystem {
            path: dir.to_path_buf(),
            operation: "open photo directory",
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
        });
    }
    let photos = list_photos(dir);
    if photos.is_empty() {
        return Err(CollageError::EmptyCatalog {
            path: dir.to_path_buf(),
        });
    }
    Ok(photos)
}

/// Shuffle the photo order once, reproducibly for a given seed
pub fn shuffle_photos(photos: &mut [PhotoRef], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    photos.shuffle(&mut rng);
}
