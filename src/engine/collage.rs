//! The collage engine: layouts, slots, repulsion, rotation and loading
//!
//! All state lives in one [`CollageEngine`] value. A host drives it with
//! three kinds of input (pointer moves, display frames and wall-clock time)
//! and reads back a list of [`TileView`]s to draw. Transcode work is handed
//! out as [`PendingLoad`]s that the host may run however it likes and report
//! back, in any order.

use crate::engine::lightbox::Lightbox;
use crate::engine::view::{Activation, Selection, TileView};
use crate::geometry::{Point, Rect};
use crate::interaction::pointer::PointerTracker;
use crate::interaction::repulsion::{OffsetField, RepulsionField};
use crate::interaction::throttle::CommitThrottle;
use crate::io::configuration::CollageSettings;
use crate::io::error::{CollageError, Result};
use crate::layout::{SlotLayout, generate};
use crate::loading::adapter::{ImageLoadAdapter, LoadEvent, TranscodeRequest};
use crate::loading::fetch::Fetch;
use crate::loading::handle::BlobRegistry;
use crate::loading::transcode::{Transcode, TranscodePipeline};
use crate::photo::{PhotoRef, RenderElement};
use crate::rotation::manager::{Rotation, RotationManager, Slot};
use crate::rotation::mask::SlotMask;
use crate::schedule::frame::FrameLoop;
use crate::schedule::interval::IntervalTimer;
use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};

/// Transcode request issued for a slot
#[derive(Clone, Debug)]
pub struct PendingLoad {
    /// Slot waiting for the result
    pub slot: usize,
    /// Request to run
    pub request: TranscodeRequest,
}

/// One mounted photo collage
#[derive(Debug)]
pub struct CollageEngine {
    layouts: Vec<SlotLayout>,
    rotation: RotationManager,
    adapters: Vec<ImageLoadAdapter>,
    failed: SlotMask,
    pending: Vec<PendingLoad>,
    pointer: PointerTracker,
    field: RepulsionField,
    throttle: CommitThrottle,
    frame_loop: FrameLoop,
    timer: IntervalTimer,
    registry: BlobRegistry,
    lightbox: Lightbox,
}

impl CollageEngine {
    /// Mount a collage for `photos` at time `now_ms`
    ///
    /// Renders `min(max_slots, photos.len())` slots filled from the front of
    /// the list. The frame loop starts when there is at least one slot; the
    /// rotation timer starts only when there are more photos than slots.
    ///
    /// # Errors
    ///
    /// Returns an error if `settings` fail validation
    pub fn mount(
        photos: Vec<PhotoRef>,
        settings: CollageSettings,
        registry: BlobRegistry,
        now_ms: f64,
    ) -> Result<Self> {
        settings.validate()?;

        let slot_count = settings.max_slots.min(photos.len());
        let layouts = generate(slot_count);
        let rng = settings
            .rotation_seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let rotation = RotationManager::new(photos, slot_count, rng);

        let frame_loop = if slot_count > 0 {
            FrameLoop::start().0
        } else {
            FrameLoop::idle()
        };
        let timer = if rotation.rotates() {
            IntervalTimer::start(settings.rotation_interval_ms, now_ms).0
        } else {
            IntervalTimer::idle()
        };

        let mut engine = Self {
            layouts,
            rotation,
            adapters: (0..slot_count).map(|_| ImageLoadAdapter::new()).collect(),
            failed: SlotMask::new(slot_count),
            pending: Vec::new(),
            pointer: PointerTracker::new(),
            field: RepulsionField::new(settings.repel_radius, settings.repel_strength),
            throttle: CommitThrottle::new(
                slot_count,
                settings.commit_interval_ms,
                settings.offset_epsilon_px,
            ),
            frame_loop,
            timer,
            registry,
            lightbox: Lightbox::new(),
        };

        for slot in 0..slot_count {
            engine.assign_source(slot);
        }

        info!(
            photos = engine.rotation.photos().len(),
            slots = slot_count,
            rotating = engine.timer.is_active(),
            pending_loads = engine.pending.len(),
            "mounted collage"
        );
        Ok(engine)
    }

    fn assign_source(&mut self, slot: usize) {
        let Some(source) = self
            .rotation
            .slot(slot)
            .map(|s| s.current_photo.source.clone())
        else {
            return;
        };
        if let Some(adapter) = self.adapters.get_mut(slot) {
            if let Some(request) = adapter.set_source(&source) {
                self.pending.retain(|load| load.slot != slot);
                self.pending.push(PendingLoad { slot, request });
            }
        }
    }

    /// Record a raw pointer move
    pub const fn pointer_moved(&mut self, position: Point) {
        self.pointer.moved(position);
    }

    /// Run the frame callback for `timestamp_ms`
    ///
    /// Recomputes every slot's offset from the current pointer position and
    /// returns the new offsets when the throttle lets them through.
    pub fn frame(&mut self, timestamp_ms: f64, container: Rect) -> Option<&OffsetField> {
        let field = self.field;
        let layouts = &self.layouts;
        let pointer = self.pointer.position();
        let computed = self
            .frame_loop
            .run(timestamp_ms, |_| field.compute(container, layouts, pointer))?;
        self.throttle.offer(timestamp_ms, computed)
    }

    /// Advance wall-clock time to `now_ms`, running a due rotation tick
    ///
    /// At most one slot is replaced per call, however long the host stalled.
    /// Returns `None` when no tick was due or there was nothing to rotate.
    pub fn advance(&mut self, now_ms: f64) -> Option<Rotation> {
        if !self.timer.poll(now_ms) {
            return None;
        }
        let targets = SlotMask::all(self.layouts.len()).difference(&self.failed);
        let rotation = self.rotation.tick(&targets)?;
        self.assign_source(rotation.slot);
        Some(rotation)
    }

    /// Hand out every transcode request issued since the last call
    pub fn take_pending_loads(&mut self) -> Vec<PendingLoad> {
        std::mem::take(&mut self.pending)
    }

    /// Apply the outcome of a transcode request
    ///
    /// A failed transcode hides the slot permanently and removes it from
    /// rotation and hit-testing.
    pub fn complete_load(
        &mut self,
        load: &PendingLoad,
        outcome: std::result::Result<Vec<u8>, CollageError>,
    ) -> LoadEvent {
        let Some(adapter) = self.adapters.get_mut(load.slot) else {
            return LoadEvent::Superseded;
        };
        let event = adapter.complete(&load.request, outcome, &self.registry);
        if event == LoadEvent::Failed {
            self.mark_failed(load.slot);
        }
        event
    }

    /// Run every pending load to completion with `pipeline`
    ///
    /// Returns the number of loads processed, including superseded ones.
    pub fn process_loads<F: Fetch, T: Transcode>(
        &mut self,
        pipeline: &TranscodePipeline<F, T>,
    ) -> usize {
        let loads = self.take_pending_loads();
        for load in &loads {
            let outcome = pipeline.run(&load.request);
            self.complete_load(load, outcome);
        }
        loads.len()
    }

    fn mark_failed(&mut self, slot: usize) {
        self.failed.insert(slot);
        if let Some(photo) = self.rotation.slot(slot).map(|s| s.current_photo.clone()) {
            self.rotation.exclude(&photo.source);
            debug!(slot, source = %photo.source, "slot hidden after failed load");
        }
    }

    /// Tiles to draw, in slot order; failed slots are omitted
    pub fn view(&self) -> Vec<TileView> {
        let offsets = self.throttle.committed();
        self.rotation
            .slots()
            .iter()
            .zip(&self.layouts)
            .zip(&self.adapters)
            .filter(|((slot, _), _)| !self.failed.contains(slot.index))
            .map(|((slot, layout), adapter)| {
                let display = adapter.display().map(str::to_string);
                TileView {
                    slot: slot.index,
                    rotation_key: slot.rotation_key,
                    photo: slot.current_photo.clone(),
                    element: display.as_deref().map(RenderElement::for_source),
                    display,
                    layout: *layout,
                    offset: offsets.get(slot.index),
                }
            })
            .collect()
    }

    /// Topmost interactive tile whose displaced box contains `point`
    pub fn hit_test(&self, point: Point, container: Rect) -> Option<usize> {
        self.view()
            .iter()
            .rev()
            .find(|tile| tile.is_interactive() && tile.bounds(container).contains(point))
            .map(|tile| tile.slot)
    }

    /// Handle a gesture on a tile, opening the lightbox on selection
    pub fn activate(&mut self, slot: usize, activation: Activation) -> Option<Selection> {
        if !activation.selects() || self.failed.contains(slot) {
            return None;
        }
        let adapter = self.adapters.get(slot)?;
        let display = adapter.display()?.to_string();
        let photo = self.rotation.slot(slot)?.current_photo.clone();
        let selection = Selection {
            slot,
            photo,
            display,
        };
        self.lightbox.open(&selection);
        Some(selection)
    }

    /// Tear down: stop the frame loop and timer, cancel loads, release resources
    pub fn unmount(&mut self) {
        self.frame_loop.cancel();
        self.timer.cancel();
        for adapter in &mut self.adapters {
            adapter.unmount();
        }
        self.pending.clear();
        self.lightbox.close();
        info!(
            frames = self.frame_loop.frames_run(),
            commits = self.throttle.commits(),
            "unmounted collage"
        );
    }

    /// Number of slots rendered
    pub fn slot_count(&self) -> usize {
        self.layouts.len()
    }

    /// Fixed layouts, one per slot
    pub fn layouts(&self) -> &[SlotLayout] {
        &self.layouts
    }

    /// Current slot assignments
    pub fn slots(&self) -> &[Slot] {
        self.rotation.slots()
    }

    /// Rotation state, including the pool
    pub const fn rotation(&self) -> &RotationManager {
        &self.rotation
    }

    /// Whether the rotation timer is running
    pub fn rotation_active(&self) -> bool {
        self.timer.is_active()
    }

    /// Whether the frame loop is still scheduled
    pub fn frame_active(&self) -> bool {
        self.frame_loop.is_scheduled()
    }

    /// Offsets currently committed for display
    pub const fn offsets(&self) -> &OffsetField {
        self.throttle.committed()
    }

    /// Commit statistics of the repulsion updater
    pub const fn throttle(&self) -> &CommitThrottle {
        &self.throttle
    }

    /// Whether a slot is waiting for a transcode
    pub fn is_loading(&self, slot: usize) -> bool {
        self.adapters.get(slot).is_some_and(ImageLoadAdapter::is_loading)
    }

    /// Whether a slot was hidden after a failed load
    pub fn is_failed(&self, slot: usize) -> bool {
        self.failed.contains(slot)
    }

    /// Load adapter of a slot
    pub fn adapter(&self, slot: usize) -> Option<&ImageLoadAdapter> {
        self.adapters.get(slot)
    }

    /// Registry holding transcoded resources
    pub const fn registry(&self) -> &BlobRegistry {
        &self.registry
    }

    /// The photo viewer
    pub const fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// The photo viewer, for key and click handling
    pub const fn lightbox_mut(&mut self) -> &mut Lightbox {
        &mut self.lightbox
    }
}
