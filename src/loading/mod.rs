//! Photo loading, transcoding and temporary resource handles

/// Per-tile load state machine
pub mod adapter;
/// Raw byte retrieval
pub mod fetch;
/// Registry of transcoded resources
pub mod handle;
/// Format conversion
pub mod transcode;

pub use adapter::{ImageLoadAdapter, LoadEvent, LoadState, TranscodeRequest};
pub use fetch::{Fetch, FileFetcher};
pub use handle::{BlobHandle, BlobRegistry};
pub use transcode::{JpegTranscoder, Transcode, TranscodePipeline};
