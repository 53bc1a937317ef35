//! The mounted collage and what it exposes to a host

/// Engine owning every piece of collage state
pub mod collage;
/// Photo viewer opened by tile selection
pub mod lightbox;
/// Render-ready tile descriptions
pub mod view;

pub use collage::{CollageEngine, PendingLoad};
pub use lightbox::{Lightbox, LightboxContent, LightboxTarget};
pub use view::{Activation, Key, Selection, TileView};
