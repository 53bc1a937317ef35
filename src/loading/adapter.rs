//! Per-tile image loading with transcode fallback
//!
//! Ordinary sources are displayable immediately. Legacy-format sources go
//! through a fetch-and-transcode request first; while that request is out the
//! tile is hidden, and if it fails the tile stays hidden for good. Every
//! source change cancels the previous request and releases the previous
//! transcoded resource, so a late result can never overwrite a newer source.

use crate::io::error::CollageError;
use crate::loading::handle::{BlobHandle, BlobRegistry};
use crate::photo::{RenderElement, needs_transcode};
use crate::schedule::cancel::CancelToken;
use tracing::{debug, warn};

/// What the tile can currently show
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    /// No source assigned
    Idle,
    /// Waiting for a transcode result; render an invisible placeholder
    Loading,
    /// Displayable
    Ready {
        /// URI to render
        display: String,
        /// Element to render it with
        element: RenderElement,
    },
    /// Transcoding failed; the tile is not rendered
    Failed,
}

/// Result of handing a transcode outcome to the adapter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadEvent {
    /// The transcoded image is now displayed
    Ready,
    /// The transcode failed and the tile is hidden for good
    Failed,
    /// The request was cancelled before it resolved; nothing changed
    Superseded,
}

/// Outstanding fetch-and-transcode job for one source
#[derive(Clone, Debug)]
pub struct TranscodeRequest {
    source: String,
    token: CancelToken,
}

impl TranscodeRequest {
    /// Source to fetch and transcode
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the adapter no longer wants this result
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// Loading state machine for one tile
#[derive(Debug)]
pub struct ImageLoadAdapter {
    source: Option<String>,
    state: LoadState,
    token: Option<CancelToken>,
    handle: Option<BlobHandle>,
}

impl Default for ImageLoadAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageLoadAdapter {
    /// Adapter with no source
    pub const fn new() -> Self {
        Self {
            source: None,
            state: LoadState::Idle,
            token: None,
            handle: None,
        }
    }

    /// Point the adapter at `source`
    ///
    /// Returns a request when the source must be transcoded before display.
    /// Setting the current source again does nothing, and a failed adapter
    /// ignores new sources.
    pub fn set_source(&mut self, source: &str) -> Option<TranscodeRequest> {
        if self.state == LoadState::Failed || self.source.as_deref() == Some(source) {
            return None;
        }
        self.release();
        self.source = Some(source.to_string());

        if !needs_transcode(source) {
            self.state = LoadState::Ready {
                display: source.to_string(),
                element: RenderElement::for_source(source),
            };
            return None;
        }

        let token = CancelToken::new();
        self.token = Some(token.clone());
        self.state = LoadState::Loading;
        debug!(source, "transcode requested");
        Some(TranscodeRequest {
            source: source.to_string(),
            token,
        })
    }

    /// Apply the outcome of `request`
    ///
    /// Stale requests are discarded without touching state. Successful bytes
    /// are registered in `registry` and shown through the returned handle.
    pub fn complete(
        &mut self,
        request: &TranscodeRequest,
        outcome: Result<Vec<u8>, CollageError>,
        registry: &BlobRegistry,
    ) -> LoadEvent {
        if request.is_cancelled() {
            debug!(source = %request.source, "discarding superseded transcode");
            return LoadEvent::Superseded;
        }
        self.token = None;

        match outcome {
            Ok(bytes) => {
                let handle = registry.register(bytes);
                self.state = LoadState::Ready {
                    display: handle.url().to_string(),
                    element: RenderElement::Native,
                };
                self.handle = Some(handle);
                LoadEvent::Ready
            }
            Err(error) => {
                warn!(source = %request.source, %error, "transcode failed, hiding tile");
                self.state = LoadState::Failed;
                LoadEvent::Failed
            }
        }
    }

    /// Cancel any outstanding request and release any transcoded resource
    pub fn unmount(&mut self) {
        self.release();
        self.source = None;
        if self.state != LoadState::Failed {
            self.state = LoadState::Idle;
        }
    }

    fn release(&mut self) {
        if let Some(token) = self.token.take() {
            token.cancel();
        }
        self.handle = None;
    }

    /// Current state
    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    /// Source currently assigned
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// URI to render, once displayable
    pub fn display(&self) -> Option<&str> {
        match &self.state {
            LoadState::Ready { display, .. } => Some(display),
            _ => None,
        }
    }

    /// Whether a transcode is outstanding
    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// Whether the tile is permanently hidden
    pub fn is_failed(&self) -> bool {
        self.state == LoadState::Failed
    }
}

impl Drop for ImageLoadAdapter {
    fn drop(&mut self) {
        self.release();
    }
}
