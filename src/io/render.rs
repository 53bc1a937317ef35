//! Rasterizing collage views into PNG snapshots and GIF animations

use crate::engine::view::TileView;
use crate::geometry::{Point, Rect};
use crate::io::configuration::{BACKGROUND_RGBA, BLOB_SCHEME, TILE_BORDER_RGBA};
use crate::io::error::{CollageError, Result, fetch_error};
use crate::loading::fetch::Fetch;
use crate::loading::handle::BlobRegistry;
use image::imageops::FilterType;
use image::{Frame, Rgba, RgbaImage};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Width of the ring drawn around each tile, in pixels
const BORDER_PX: f64 = 3.0;

/// Draws tile views onto a fixed-size canvas
///
/// Decoded thumbnails are cached per display URI and size, so re-rendering
/// an unchanged collage only pays for compositing.
pub struct SnapshotRenderer {
    width: u32,
    height: u32,
    thumbnails: HashMap<(String, u32), RgbaImage>,
}

impl SnapshotRenderer {
    /// Renderer for a `width` × `height` viewport
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            thumbnails: HashMap::new(),
        }
    }

    /// The viewport as a container rectangle
    pub fn container(&self) -> Rect {
        Rect::from_size(f64::from(self.width), f64::from(self.height))
    }

    /// Composite every visible tile over the background
    ///
    /// Tiles whose image cannot be read or decoded are left out.
    pub fn render<F: Fetch>(
        &mut self,
        tiles: &[TileView],
        fetcher: &F,
        registry: &BlobRegistry,
    ) -> RgbaImage {
        let mut canvas = RgbaImage::from_pixel(self.width, self.height, Rgba(BACKGROUND_RGBA));
        let container = self.container();

        for tile in tiles {
            let Some(display) = tile.display.as_deref() else {
                continue;
            };
            let size = tile.layout.size_px.round().max(1.0) as u32;
            let key = (display.to_string(), size);
            if !self.thumbnails.contains_key(&key) {
                match load_thumbnail(display, size, fetcher, registry) {
                    Ok(thumbnail) => {
                        self.thumbnails.insert(key.clone(), thumbnail);
                    }
                    Err(error) => {
                        debug!(slot = tile.slot, %error, "tile left out of snapshot");
                        continue;
                    }
                }
            }
            if let Some(thumbnail) = self.thumbnails.get(&key) {
                draw_rotated(
                    &mut canvas,
                    thumbnail,
                    tile.center(container),
                    tile.layout.rotation_deg,
                );
            }
        }

        canvas
    }
}

fn load_thumbnail<F: Fetch>(
    display: &str,
    size: u32,
    fetcher: &F,
    registry: &BlobRegistry,
) -> Result<RgbaImage> {
    let bytes = if display.starts_with(BLOB_SCHEME) {
        registry
            .resolve(display)
            .map(|bytes| bytes.to_vec())
            .ok_or_else(|| fetch_error(display, &"resource was released"))?
    } else {
        fetcher.fetch(display)?
    };
    let decoded = image::load_from_memory(&bytes).map_err(|e| CollageError::ImageLoad {
        path: display.into(),
        source: e,
    })?;
    Ok(decoded
        .resize_to_fill(size, size, FilterType::Triangle)
        .to_rgba8())
}

/// Paint `tile` centered at `center`, turned by `rotation_deg`, with a ring
fn draw_rotated(canvas: &mut RgbaImage, tile: &RgbaImage, center: Point, rotation_deg: f64) {
    let half_w = f64::from(tile.width()) / 2.0;
    let half_h = f64::from(tile.height()) / 2.0;
    let reach = half_w.hypot(half_h).ceil();
    let (sin, cos) = rotation_deg.to_radians().sin_cos();

    let min_x = (center.x - reach).floor().max(0.0) as u32;
    let min_y = (center.y - reach).floor().max(0.0) as u32;
    let max_x = (center.x + reach).ceil().min(f64::from(canvas.width())) as u32;
    let max_y = (center.y + reach).ceil().min(f64::from(canvas.height())) as u32;

    for y in min_y..max_y {
        for x in min_x..max_x {
            let px = f64::from(x) + 0.5 - center.x;
            let py = f64::from(y) + 0.5 - center.y;
            // Undo the tile rotation to find the source pixel
            let local_x = px.mul_add(cos, py * sin);
            let local_y = (-px).mul_add(sin, py * cos);
            if local_x.abs() > half_w || local_y.abs() > half_h {
                continue;
            }

            let near_edge = half_w - local_x.abs() < BORDER_PX || half_h - local_y.abs() < BORDER_PX;
            let color = if near_edge {
                Rgba(TILE_BORDER_RGBA)
            } else {
                let sx = (local_x + half_w) as u32;
                let sy = (local_y + half_h) as u32;
                match tile.get_pixel_checked(sx, sy) {
                    Some(pixel) => *pixel,
                    None => continue,
                }
            };
            if let Some(target) = canvas.get_pixel_mut_checked(x, y) {
                blend(target, color);
            }
        }
    }
}

/// Source-over compositing of `color` onto `target`
fn blend(target: &mut Rgba<u8>, color: Rgba<u8>) {
    let alpha = f64::from(color.0[3]) / 255.0;
    for channel in 0..3 {
        if let (Some(dst), Some(&src)) = (target.0.get_mut(channel), color.0.get(channel)) {
            *dst = f64::from(src)
                .mul_add(alpha, f64::from(*dst) * (1.0 - alpha))
                .round() as u8;
        }
    }
    if let Some(dst_alpha) = target.0.get_mut(3) {
        *dst_alpha = (*dst_alpha).max(color.0[3]);
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| CollageError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }
    Ok(())
}

/// Save a rendered snapshot as PNG
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image cannot be saved
pub fn export_png(image: &RgbaImage, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    image.save(path).map_err(|e| CollageError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Collects snapshots, one per collage change, for GIF export
pub struct AnimationCapture {
    frames: Vec<RgbaImage>,
    delay_ms: u32,
}

impl AnimationCapture {
    /// Empty capture whose frames will each show for `delay_ms`
    pub const fn new(delay_ms: u32) -> Self {
        Self {
            frames: Vec::new(),
            delay_ms,
        }
    }

    /// Append a snapshot
    pub fn push(&mut self, frame: RgbaImage) {
        self.frames.push(frame);
    }

    /// Number of captured snapshots
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether nothing was captured
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Encode the captured snapshots as a looping GIF
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No snapshots were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, path: &Path) -> Result<()> {
        if self.frames.is_empty() {
            return Err(CollageError::InvalidParameter {
                parameter: "frames",
                value: "0".to_string(),
                reason: "no snapshots captured for animation".to_string(),
            });
        }
        ensure_parent(path)?;

        let file = std::fs::File::create(path).map_err(|e| CollageError::FileSystem {
            path: path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let frames = self.frames.iter().map(|image| {
            Frame::from_parts(
                image.clone(),
                0,
                0,
                image::Delay::from_numer_denom_ms(self.delay_ms, 1),
            )
        });

        let export_error = |e| CollageError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        };
        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .set_repeat(image::codecs::gif::Repeat::Infinite)
            .map_err(export_error)?;
        encoder.encode_frames(frames).map_err(export_error)
    }
}
