//! Command-line interface simulating a collage over a local photo directory

use crate::engine::collage::CollageEngine;
use crate::geometry::Point;
use crate::io::catalog::{load_catalog, shuffle_photos};
use crate::io::configuration::{
    CollageSettings, DEFAULT_SEED, DEFAULT_SIMULATION_SECONDS, DEFAULT_VIEWPORT_HEIGHT,
    DEFAULT_VIEWPORT_WIDTH, GIF_FRAME_DELAY_MS, MAX_SLOTS, OUTPUT_SUFFIX,
    POINTER_ORBIT_PERIOD_MS, SIMULATION_FPS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::SimulationProgress;
use crate::io::render::{AnimationCapture, SnapshotRenderer, export_png};
use crate::loading::fetch::FileFetcher;
use crate::loading::handle::BlobRegistry;
use crate::loading::transcode::{JpegTranscoder, TranscodePipeline};
use clap::Parser;
use std::f64::consts::TAU;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

#[derive(Parser)]
#[command(name = "photodrift")]
#[command(
    author,
    version,
    about = "Simulate a floating photo collage and export snapshots"
)]
/// Command-line arguments for the collage simulator
pub struct Cli {
    /// Directory holding the photos
    #[arg(value_name = "PHOTOS")]
    pub target: PathBuf,

    /// Seed for the photo shuffle and slot rotation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Simulated duration in seconds
    #[arg(short = 't', long, default_value_t = DEFAULT_SIMULATION_SECONDS)]
    pub seconds: f64,

    /// Viewport width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_VIEWPORT_WIDTH)]
    pub width: u32,

    /// Viewport height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_VIEWPORT_HEIGHT)]
    pub height: u32,

    /// Maximum number of tiles on screen
    #[arg(short, long, default_value_t = MAX_SLOTS)]
    pub max_slots: usize,

    /// Fixed pointer position as `X,Y`; the pointer orbits the center otherwise
    #[arg(short, long, value_parser = parse_point)]
    pub pointer: Option<Point>,

    /// Snapshot path (defaults to `<PHOTOS>_collage.png` next to the directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also export an animated GIF with one frame per rotation
    #[arg(short, long)]
    pub visualize: bool,

    /// Keep the directory order instead of shuffling
    #[arg(long)]
    pub no_shuffle: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Where the final snapshot is written
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| derived_path(&self.target, "png"))
    }

    /// Where the rotation animation is written
    pub fn visualization_path(&self) -> PathBuf {
        derived_path(&self.output_path(), "gif")
    }
}

/// Parse `X,Y` into a point
///
/// # Errors
///
/// Returns a message if the value is not two comma-separated numbers
pub fn parse_point(value: &str) -> std::result::Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{value}'"))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad X: {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad Y: {e}"))?;
    Ok(Point::new(x, y))
}

fn derived_path(base: &Path, extension: &str) -> PathBuf {
    let stem = base.file_stem().unwrap_or_default().to_string_lossy();
    let name = if stem.ends_with(OUTPUT_SUFFIX) {
        format!("{stem}.{extension}")
    } else {
        format!("{stem}{OUTPUT_SUFFIX}.{extension}")
    };
    base.parent()
        .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
}

/// Pointer position on a circle around the viewport center at `time_ms`
pub fn orbit_position(width: u32, height: u32, time_ms: f64) -> Point {
    let cx = f64::from(width) / 2.0;
    let cy = f64::from(height) / 2.0;
    let radius = cx.min(cy) / 1.5;
    let angle = TAU * time_ms / POINTER_ORBIT_PERIOD_MS;
    Point::new(radius.mul_add(angle.cos(), cx), radius.mul_add(angle.sin(), cy))
}

/// Runs one simulation as described by the CLI arguments
pub struct CollageRunner {
    cli: Cli,
}

/// Summary of a finished simulation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Photos found in the directory
    pub photos: usize,
    /// Slots rendered
    pub slots: usize,
    /// Rotations that happened
    pub rotations: usize,
    /// Slots hidden after failed transcodes
    pub failed_slots: usize,
    /// Snapshot path
    pub output: PathBuf,
    /// Animation path, when one was written
    pub animation: Option<PathBuf>,
}

impl CollageRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Simulate the collage and export the requested images
    ///
    /// # Errors
    ///
    /// Returns an error if the photo directory is unusable, the settings are
    /// invalid, or an export fails
    pub fn run(&self) -> Result<RunSummary> {
        let start_time = Instant::now();
        if !self.cli.seconds.is_finite() || self.cli.seconds < 0.0 {
            return Err(invalid_parameter(
                "seconds",
                &self.cli.seconds,
                &"must be a non-negative number",
            ));
        }
        if self.cli.width == 0 || self.cli.height == 0 {
            return Err(invalid_parameter(
                "viewport",
                &format!("{}x{}", self.cli.width, self.cli.height),
                &"both dimensions must be positive",
            ));
        }

        let mut photos = load_catalog(&self.cli.target)?;
        if !self.cli.no_shuffle {
            shuffle_photos(&mut photos, self.cli.seed);
        }
        let photo_count = photos.len();

        let settings = CollageSettings {
            max_slots: self.cli.max_slots,
            ..CollageSettings::default()
        }
        .with_rotation_seed(self.cli.seed);

        let registry = BlobRegistry::new();
        let pipeline =
            TranscodePipeline::new(FileFetcher::new(&self.cli.target), JpegTranscoder::default());
        let mut engine = CollageEngine::mount(photos, settings, registry.clone(), 0.0)?;
        engine.process_loads(&pipeline);

        let mut renderer = SnapshotRenderer::new(self.cli.width, self.cli.height);
        let container = renderer.container();
        let mut animation = self.cli.visualize.then(|| AnimationCapture::new(GIF_FRAME_DELAY_MS));
        if let Some(capture) = animation.as_mut() {
            capture.push(renderer.render(&engine.view(), pipeline.fetcher(), &registry));
        }

        let frames = (self.cli.seconds * SIMULATION_FPS).round() as u64;
        let mut progress = self.cli.should_show_progress().then(|| {
            SimulationProgress::new(
                &self.cli.target.file_name().unwrap_or_default().to_string_lossy(),
                frames,
            )
        });

        let mut rotations = 0;
        for frame in 1..=frames {
            let now_ms = frame as f64 * 1000.0 / SIMULATION_FPS;
            let pointer = self
                .cli
                .pointer
                .unwrap_or_else(|| orbit_position(self.cli.width, self.cli.height, now_ms));
            engine.pointer_moved(pointer);
            engine.frame(now_ms, container);

            let rotated = usize::from(engine.advance(now_ms).is_some());
            if rotated > 0 {
                engine.process_loads(&pipeline);
                if let Some(capture) = animation.as_mut() {
                    capture.push(renderer.render(&engine.view(), pipeline.fetcher(), &registry));
                }
            }
            rotations += rotated;

            if let Some(pm) = progress.as_mut() {
                pm.frame(frame, rotated);
            }
        }
        if let Some(pm) = progress.as_ref() {
            pm.finish();
        }

        let output = self.cli.output_path();
        let snapshot = renderer.render(&engine.view(), pipeline.fetcher(), &registry);
        export_png(&snapshot, &output)?;

        let animation_path = match animation {
            Some(capture) => {
                let path = self.cli.visualization_path();
                capture.export_gif(&path)?;
                Some(path)
            }
            None => None,
        };

        let failed_slots = (0..engine.slot_count())
            .filter(|&slot| engine.is_failed(slot))
            .count();
        let slots = engine.slot_count();
        engine.unmount();

        info!(
            photos = photo_count,
            slots,
            rotations,
            failed_slots,
            output = %output.display(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "collage simulation finished"
        );

        Ok(RunSummary {
            photos: photo_count,
            slots,
            rotations,
            failed_slots,
            output,
            animation: animation_path,
        })
    }
}
