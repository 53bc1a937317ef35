//! Error types for catalog, transcoding and export operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all collage operations
#[derive(Debug)]
pub enum CollageError {
    /// Failed to decode an image from disk or memory
    ImageLoad {
        /// Source the image was read from
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to save a rendered collage to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// Photo bytes could not be fetched for a source URI
    Fetch {
        /// Photo source that was requested
        uri: String,
        /// Description of why the fetch failed
        reason: String,
    },

    /// Legacy-format photo could not be converted to a renderable one
    Transcode {
        /// Photo source being converted
        uri: String,
        /// Description of the conversion failure
        reason: String,
    },

    /// Runtime setting validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Photo directory contained nothing the collage can display
    EmptyCatalog {
        /// Directory that was scanned
        path: PathBuf,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for CollageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::Fetch { uri, reason } => {
                write!(f, "Failed to fetch '{uri}': {reason}")
            }
            Self::Transcode { uri, reason } => {
                write!(f, "Failed to transcode '{uri}': {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyCatalog { path } => {
                write!(f, "No displayable photos found in '{}'", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for CollageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for collage results
pub type Result<T> = std::result::Result<T, CollageError>;

impl From<image::ImageError> for CollageError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<memory>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for CollageError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CollageError {
    CollageError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a transcode error for the given photo source
pub fn transcode_error(uri: &str, reason: &impl ToString) -> CollageError {
    CollageError::Transcode {
        uri: uri.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a fetch error for the given photo source
pub fn fetch_error(uri: &str, reason: &impl ToString) -> CollageError {
    CollageError::Fetch {
        uri: uri.to_string(),
        reason: reason.to_string(),
    }
}
