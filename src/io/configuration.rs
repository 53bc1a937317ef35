//! Engine constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};

// Slot budget
/// Maximum number of tiles rendered at once
pub const MAX_SLOTS: usize = 50;

// Layout grid
/// Columns of the virtual layout grid
pub const GRID_COLUMNS: usize = 6;
/// Horizontal span of the grid in percent of the container
pub const GRID_WIDTH_PERCENT: f64 = 92.0;
/// Vertical span of the grid in percent of the container
pub const GRID_HEIGHT_PERCENT: f64 = 88.0;
/// Share of a cell a tile may be jittered by
pub const CELL_JITTER: f64 = 0.6;
/// Margin added to every tile position in percent
pub const GRID_MARGIN_PERCENT: f64 = 3.0;
/// Rightmost allowed tile position in percent
pub const MAX_LEFT_PERCENT: f64 = 88.0;
/// Lowest allowed tile position in percent
pub const MAX_TOP_PERCENT: f64 = 85.0;
/// Seed stride between consecutive slots
pub const SLOT_SEED_STRIDE: f64 = 7.0;
/// Fixed seed for the layout generator
pub const LAYOUT_BASE_SEED: f64 = 0.42;

// Tile appearance
/// Smallest tile edge in pixels
pub const MIN_TILE_SIZE_PX: f64 = 120.0;
/// Range added on top of the smallest tile edge
pub const TILE_SIZE_RANGE_PX: f64 = 100.0;
/// Largest tilt of a tile in degrees (both directions)
pub const MAX_ROTATION_DEG: f64 = 12.0;
/// Upper bound of the ambient float animation delay in seconds
pub const MAX_ANIMATION_DELAY_SEC: f64 = 5.0;
/// Shortest ambient float animation cycle in seconds
pub const MIN_ANIMATION_DURATION_SEC: f64 = 8.0;
/// Range added on top of the shortest animation cycle
pub const ANIMATION_DURATION_RANGE_SEC: f64 = 6.0;

// Pointer repulsion
/// Distance in pixels inside which tiles flee the pointer
pub const REPEL_RADIUS: f64 = 200.0;
/// Displacement in pixels of a tile right next to the pointer
pub const REPEL_STRENGTH: f64 = 30.0;
/// Minimum time between two offset commits (~30 Hz)
pub const FRAME_COMMIT_INTERVAL_MS: f64 = 32.0;
/// Offset change below which a commit is skipped
pub const OFFSET_EPSILON_PX: f64 = 0.5;

// Rotation
/// Period of the slot rotation timer
pub const ROTATION_INTERVAL_MS: f64 = 2500.0;

// Loading
/// Extension of sources that need client-side transcoding
pub const TRANSCODE_EXTENSION: &str = ".heic";
/// JPEG quality used for transcoded photos
pub const TRANSCODE_QUALITY: u8 = 90;
/// URI scheme of registry-issued transcoded resources
pub const BLOB_SCHEME: &str = "blob:";
/// Prefix of proxy endpoints that already return renderable images
pub const PROXY_PREFIX: &str = "/api/";
/// URI prefix of photos served from the local catalog
pub const CATALOG_URI_PREFIX: &str = "/photos/";
/// File extensions accepted by the local catalog
pub const PHOTO_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "heic"];

// Simulation and export
/// Fixed seed for reproducible shuffles and rotations
pub const DEFAULT_SEED: u64 = 42;
/// Default viewport width in pixels
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;
/// Default viewport height in pixels
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 800;
/// Default simulated duration in seconds
pub const DEFAULT_SIMULATION_SECONDS: f64 = 10.0;
/// Simulated frames per second
pub const SIMULATION_FPS: f64 = 60.0;
/// Period of the default pointer orbit in milliseconds
pub const POINTER_ORBIT_PERIOD_MS: f64 = 6000.0;
/// Background fill of rendered snapshots
pub const BACKGROUND_RGBA: [u8; 4] = [255, 228, 230, 255];
/// Ring drawn around every tile
pub const TILE_BORDER_RGBA: [u8; 4] = [255, 255, 255, 200];
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 400;
/// Output file name suffix for snapshots
pub const OUTPUT_SUFFIX: &str = "_collage";

/// Runtime parameters of a collage engine
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollageSettings {
    /// Upper bound on rendered slots
    pub max_slots: usize,
    /// Repulsion radius in pixels
    pub repel_radius: f64,
    /// Repulsion strength in pixels
    pub repel_strength: f64,
    /// Minimum time between offset commits
    pub commit_interval_ms: f64,
    /// Offset change below which commits are skipped
    pub offset_epsilon_px: f64,
    /// Rotation timer period
    pub rotation_interval_ms: f64,
    /// Seed for the rotation manager; `None` draws one from the OS
    pub rotation_seed: Option<u64>,
}

impl Default for CollageSettings {
    fn default() -> Self {
        Self {
            max_slots: MAX_SLOTS,
            repel_radius: REPEL_RADIUS,
            repel_strength: REPEL_STRENGTH,
            commit_interval_ms: FRAME_COMMIT_INTERVAL_MS,
            offset_epsilon_px: OFFSET_EPSILON_PX,
            rotation_interval_ms: ROTATION_INTERVAL_MS,
            rotation_seed: None,
        }
    }
}

impl CollageSettings {
    /// Reject settings the engine cannot run with
    ///
    /// # Errors
    ///
    /// Returns an error if the slot count is outside `1..=MAX_SLOTS` or a
    /// distance/interval is not a positive finite number
    pub fn validate(&self) -> Result<()> {
        if self.max_slots == 0 {
            return Err(invalid_parameter(
                "max_slots",
                &self.max_slots,
                &"at least one slot is required",
            ));
        }
        if self.max_slots > MAX_SLOTS {
            return Err(invalid_parameter(
                "max_slots",
                &self.max_slots,
                &format!("at most {MAX_SLOTS} slots can be shown"),
            ));
        }
        let positive = [
            ("repel_radius", self.repel_radius),
            ("rotation_interval_ms", self.rotation_interval_ms),
        ];
        for (parameter, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"must be a positive finite number",
                ));
            }
        }
        let non_negative = [
            ("repel_strength", self.repel_strength),
            ("commit_interval_ms", self.commit_interval_ms),
            ("offset_epsilon_px", self.offset_epsilon_px),
        ];
        for (parameter, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"must be a non-negative finite number",
                ));
            }
        }
        Ok(())
    }

    /// Same settings with a fixed rotation seed
    #[must_use]
    pub const fn with_rotation_seed(mut self, seed: u64) -> Self {
        self.rotation_seed = Some(seed);
        self
    }
}
