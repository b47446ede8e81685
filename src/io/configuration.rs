//! Placement constants and runtime configuration defaults
//!
//! The camouflage weights below set game balance. Changing any of them
//! changes which regions objects gravitate towards, so they are fixed
//! values rather than tunables.

use std::num::NonZeroU32;

// Background sampling
/// Longest side of the downsampled analysis raster, in pixels
pub const ANALYSIS_SAMPLE_CAP: u32 = 200;
/// Distance between sampled grid points, also used as the border skip
pub const ANALYSIS_GRID_STEP: usize = 10;

// Camouflage scoring
/// Brightness strictly above this counts as mid-range
pub const BRIGHTNESS_WINDOW_LOW: f64 = 30.0;
/// Brightness strictly below this counts as mid-range
pub const BRIGHTNESS_WINDOW_HIGH: f64 = 220.0;
/// Brightness term inside the mid-range window
pub const BRIGHTNESS_IN_WINDOW_WEIGHT: f64 = 1.0;
/// Brightness term for very dark or very light samples
pub const BRIGHTNESS_OUT_OF_WINDOW_WEIGHT: f64 = 0.3;
/// Channel spread strictly above this counts as textured
pub const TEXTURE_THRESHOLD: f64 = 10.0;
/// Texture term for textured samples
pub const TEXTURED_WEIGHT: f64 = 1.0;
/// Texture term for flat samples
pub const FLAT_WEIGHT: f64 = 0.5;
/// Saturation strictly below this counts as muted
pub const SATURATION_THRESHOLD: f64 = 100.0;
/// Saturation term for muted samples
pub const MUTED_WEIGHT: f64 = 1.2;
/// Saturation term for vivid samples
pub const VIVID_WEIGHT: f64 = 0.8;

// Placement
/// Safe band margin in percentage points on every edge
pub const PLACEMENT_MARGIN_PERCENT: f64 = 5.0;
/// Minimum centre-to-centre distance between objects, in percentage points
pub const MIN_SEPARATION_PERCENT: f64 = 6.0;
/// Hard cap on rejection-sampling attempts per level
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;
/// Share of the best-scoring candidates eligible for placement
pub const CANDIDATE_TOP_FRACTION: f64 = 0.7;
/// Maximum jitter applied to a candidate on each axis
pub const CANDIDATE_JITTER_PERCENT: f64 = 2.0;
/// Largest random reduction from the tier's base opacity
pub const OPACITY_REDUCTION_MAX: f64 = 0.1;
/// Opacity never drops below this
pub const MIN_VISIBLE_OPACITY: f64 = 0.15;
/// Exclusive upper bound of the random suffix in object ids
pub const OBJECT_ID_NONCE_BOUND: NonZeroU32 = match NonZeroU32::new(10_000) {
    Some(bound) => bound,
    None => NonZeroU32::MIN,
};

// Hints
/// Hints granted per level before premium hints are consumed
pub const FREE_HINTS_PER_LEVEL: u32 = 2;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Default values for configurable parameters
/// First level generated when none is given
pub const DEFAULT_START_LEVEL: u32 = 1;
/// Number of consecutive levels generated per background
pub const DEFAULT_LEVEL_COUNT: u32 = 1;

// Output settings
/// Suffix inserted before the level number in output filenames
pub const OUTPUT_LEVEL_INFIX: &str = "_level";
/// Suffix for preview images
pub const PREVIEW_SUFFIX: &str = "_preview";
/// Background extensions picked up from a directory target
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];
/// Preview marker radius as a share of the shorter image side, per unit of object scale
pub const PREVIEW_MARKER_RADIUS_FACTOR: f64 = 0.08;
/// Ring thickness of preview markers in pixels
pub const PREVIEW_MARKER_THICKNESS: f64 = 2.0;
