//! Modal viewer for a selected photo

use crate::engine::view::{Key, Selection};
use crate::photo::{PhotoRef, RenderElement};
use tracing::debug;

/// Part of the open lightbox that received a click
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxTarget {
    /// Darkened area around the photo
    Backdrop,
    /// Explicit close control
    CloseButton,
    /// The photo or its caption
    Content,
}

/// Photo currently shown in the lightbox
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightboxContent {
    /// Selected photo
    pub photo: PhotoRef,
    /// URI to render
    pub display: String,
    /// Element to render it with
    pub element: RenderElement,
}

impl LightboxContent {
    /// Caption under the photo, omitted for empty labels
    pub fn caption(&self) -> Option<&str> {
        (!self.photo.label.is_empty()).then_some(self.photo.label.as_str())
    }
}

/// Open/closed state of the viewer
#[derive(Clone, Debug, Default)]
pub struct Lightbox {
    content: Option<LightboxContent>,
}

impl Lightbox {
    /// Closed lightbox
    pub const fn new() -> Self {
        Self { content: None }
    }

    /// Show the photo of a selection, replacing anything already open
    pub fn open(&mut self, selection: &Selection) {
        debug!(slot = selection.slot, source = %selection.photo.source, "lightbox opened");
        self.content = Some(LightboxContent {
            photo: selection.photo.clone(),
            display: selection.display.clone(),
            element: RenderElement::for_source(&selection.display),
        });
    }

    /// Close the viewer
    pub fn close(&mut self) {
        self.content = None;
    }

    /// React to a key; returns whether the lightbox closed
    pub fn handle_key(&mut self, key: Key) -> bool {
        if key == Key::Escape && self.is_open() {
            self.close();
            return true;
        }
        false
    }

    /// React to a click; returns whether the lightbox closed
    pub fn click(&mut self, target: LightboxTarget) -> bool {
        match target {
            LightboxTarget::Backdrop | LightboxTarget::CloseButton if self.is_open() => {
                self.close();
                true
            }
            _ => false,
        }
    }

    /// Whether a photo is shown
    pub const fn is_open(&self) -> bool {
        self.content.is_some()
    }

    /// Photo shown, if any
    pub const fn content(&self) -> Option<&LightboxContent> {
        self.content.as_ref()
    }
}
