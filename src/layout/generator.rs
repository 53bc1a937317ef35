//! Grid-plus-jitter placement of collage slots
//!
//! Slots are laid out on a virtual grid so coverage stays even, then each slot
//! is nudged, sized and tilted by seeded sine hashes so the result looks
//! scattered. The output depends only on the slot count and the seed.

use crate::io::configuration::{
    ANIMATION_DURATION_RANGE_SEC, CELL_JITTER, GRID_COLUMNS, GRID_HEIGHT_PERCENT,
    GRID_MARGIN_PERCENT, GRID_WIDTH_PERCENT, LAYOUT_BASE_SEED, MAX_ANIMATION_DELAY_SEC,
    MAX_LEFT_PERCENT, MAX_ROTATION_DEG, MAX_TOP_PERCENT, MIN_ANIMATION_DURATION_SEC,
    MIN_TILE_SIZE_PX, SLOT_SEED_STRIDE, TILE_SIZE_RANGE_PX,
};
use crate::math::hash::{hash_string, seeded_random};
use crate::photo::PhotoRef;

/// Placement and ambient animation of one slot
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotLayout {
    /// Left edge in percent of the container width
    pub left_percent: f64,
    /// Top edge in percent of the container height
    pub top_percent: f64,
    /// Edge length of the square tile in pixels
    pub size_px: f64,
    /// Tilt in degrees
    pub rotation_deg: f64,
    /// Start offset of the float animation
    pub animation_delay_sec: f64,
    /// Length of one float animation cycle
    pub animation_duration_sec: f64,
}

/// Hash channels consumed per slot
#[derive(Clone, Copy)]
enum Channel {
    Left = 1,
    Top = 2,
    Size = 3,
    Rotation = 4,
    Delay = 5,
    Duration = 6,
}

/// Layouts for `slot_count` slots using the fixed built-in seed
pub fn generate(slot_count: usize) -> Vec<SlotLayout> {
    generate_with_seed(slot_count, LAYOUT_BASE_SEED)
}

/// Layouts for `slot_count` slots from an explicit base seed
pub fn generate_with_seed(slot_count: usize, base_seed: f64) -> Vec<SlotLayout> {
    let rows = slot_count.div_ceil(GRID_COLUMNS).max(1);
    let cell_width = GRID_WIDTH_PERCENT / GRID_COLUMNS as f64;
    let cell_height = GRID_HEIGHT_PERCENT / rows as f64;

    (0..slot_count)
        .map(|index| {
            let slot_seed = (index as f64).mul_add(SLOT_SEED_STRIDE, base_seed);
            let r = |channel: Channel| seeded_random(slot_seed, channel as i32 as f64);
            let column = (index % GRID_COLUMNS) as f64;
            let row = (index / GRID_COLUMNS) as f64;

            let left = column.mul_add(
                cell_width,
                r(Channel::Left).mul_add(cell_width * CELL_JITTER, GRID_MARGIN_PERCENT),
            );
            let top = row.mul_add(
                cell_height,
                r(Channel::Top).mul_add(cell_height * CELL_JITTER, GRID_MARGIN_PERCENT),
            );

            SlotLayout {
                left_percent: num_traits::clamp(left, 0.0, MAX_LEFT_PERCENT),
                top_percent: num_traits::clamp(top, 0.0, MAX_TOP_PERCENT),
                size_px: r(Channel::Size).mul_add(TILE_SIZE_RANGE_PX, MIN_TILE_SIZE_PX),
                rotation_deg: r(Channel::Rotation)
                    .mul_add(2.0 * MAX_ROTATION_DEG, -MAX_ROTATION_DEG),
                animation_delay_sec: r(Channel::Delay) * MAX_ANIMATION_DELAY_SEC,
                animation_duration_sec: r(Channel::Duration)
                    .mul_add(ANIMATION_DURATION_RANGE_SEC, MIN_ANIMATION_DURATION_SEC),
            }
        })
        .collect()
}

/// Derive a layout seed from the photo sources, joined with commas
///
/// Lets a host tie the arrangement to a particular photo set instead of the
/// built-in constant.
pub fn seed_from_sources(photos: &[PhotoRef]) -> f64 {
    let joined = photos
        .iter()
        .map(|photo| photo.source.as_str())
        .collect::<Vec<_>>()
        .join(",");
    hash_string(&joined)
}
