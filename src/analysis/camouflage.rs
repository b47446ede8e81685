//! Camouflage scoring of background locations
//!
//! A coarse grid over a downsampled copy of the background is scored by how
//! well an overlaid object would blend in: mid-range brightness, visible
//! texture and muted colour all make objects harder to spot.

use crate::analysis::sampling::{BackgroundImage, SampledImage, pixel_to_percent};
use crate::io::configuration::{
    ANALYSIS_GRID_STEP, ANALYSIS_SAMPLE_CAP, BRIGHTNESS_IN_WINDOW_WEIGHT,
    BRIGHTNESS_OUT_OF_WINDOW_WEIGHT, BRIGHTNESS_WINDOW_HIGH, BRIGHTNESS_WINDOW_LOW, FLAT_WEIGHT,
    MUTED_WEIGHT, PLACEMENT_MARGIN_PERCENT, SATURATION_THRESHOLD, TEXTURE_THRESHOLD,
    TEXTURED_WEIGHT, VIVID_WEIGHT,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::objects::check_margin;
use crate::spatial::{CandidateSpot, PercentPoint};
use tokio::runtime::Handle;
use tracing::{debug, warn};

/// Colour statistics of a single sampled pixel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelStats {
    /// Mean of the three channels
    pub brightness: f64,
    /// Largest channel minus smallest channel
    pub saturation: f64,
    /// Root of the summed squared channel deviations from brightness, over three
    pub spread: f64,
}

impl PixelStats {
    /// Compute statistics for one RGB sample
    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        let channels = rgb.map(f64::from);
        let brightness = channels.iter().sum::<f64>() / 3.0;
        let max = channels.iter().copied().fold(f64::MIN, f64::max);
        let min = channels.iter().copied().fold(f64::MAX, f64::min);
        let squared_deviation: f64 = channels
            .iter()
            .map(|&channel| (channel - brightness).powi(2))
            .sum();

        Self {
            brightness,
            saturation: max - min,
            spread: squared_deviation.sqrt() / 3.0,
        }
    }

    /// Product of the brightness, texture and saturation terms
    pub fn blend_score(&self) -> f64 {
        let brightness_term =
            if self.brightness > BRIGHTNESS_WINDOW_LOW && self.brightness < BRIGHTNESS_WINDOW_HIGH {
                BRIGHTNESS_IN_WINDOW_WEIGHT
            } else {
                BRIGHTNESS_OUT_OF_WINDOW_WEIGHT
            };
        let texture_term = if self.spread > TEXTURE_THRESHOLD {
            TEXTURED_WEIGHT
        } else {
            FLAT_WEIGHT
        };
        let saturation_term = if self.saturation < SATURATION_THRESHOLD {
            MUTED_WEIGHT
        } else {
            VIVID_WEIGHT
        };
        brightness_term * texture_term * saturation_term
    }
}

/// Scores background grids and ranks the resulting candidate spots
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CamouflageAnalyzer {
    /// Longest side of the analysis raster
    pub sample_cap: u32,
    /// Grid spacing in sampled pixels, also the skipped border
    pub grid_step: usize,
    /// Candidates outside `[margin, 100 - margin]` are dropped
    pub margin_percent: f64,
}

impl Default for CamouflageAnalyzer {
    fn default() -> Self {
        Self {
            sample_cap: ANALYSIS_SAMPLE_CAP,
            grid_step: ANALYSIS_GRID_STEP,
            margin_percent: PLACEMENT_MARGIN_PERCENT,
        }
    }
}

impl CamouflageAnalyzer {
    /// Reject settings that cannot produce a ranking
    ///
    /// # Errors
    ///
    /// Returns an error if the sample cap or grid step is zero, or the margin
    /// leaves no safe band
    pub fn validate(&self) -> Result<()> {
        if self.sample_cap == 0 {
            return Err(invalid_parameter(
                "sample_cap",
                &self.sample_cap,
                &"analysis raster needs at least one pixel",
            ));
        }
        if self.grid_step == 0 {
            return Err(invalid_parameter(
                "grid_step",
                &self.grid_step,
                &"grid spacing must be positive",
            ));
        }
        check_margin("margin_percent", self.margin_percent)
    }

    /// Analyze a background off the async executor
    ///
    /// Inside a Tokio runtime the work runs on the blocking pool; under any
    /// other executor it runs inline. Decoding failures are logged and
    /// produce an empty ranking, which the planner treats as "no analysis
    /// available".
    pub async fn analyze(&self, image: &BackgroundImage) -> Vec<CandidateSpot> {
        let outcome = match Handle::try_current() {
            Ok(handle) => {
                let analyzer = *self;
                let image = image.clone();
                match handle
                    .spawn_blocking(move || analyzer.analyze_blocking(&image))
                    .await
                {
                    Ok(outcome) => outcome,
                    Err(error) => {
                        warn!(%error, "background analysis task did not complete");
                        return Vec::new();
                    }
                }
            }
            Err(_no_runtime) => self.analyze_blocking(image),
        };

        outcome.unwrap_or_else(|error| {
            warn!(%error, "background could not be decoded, analysis unavailable");
            Vec::new()
        })
    }

    /// Decode, sample and score a background on the current thread
    ///
    /// # Errors
    ///
    /// Returns an error if the background cannot be decoded
    pub fn analyze_blocking(&self, image: &BackgroundImage) -> Result<Vec<CandidateSpot>> {
        let sample = image.sample(self.sample_cap)?;
        Ok(self.rank(&sample))
    }

    /// Score the grid over an already sampled image, best candidates first
    ///
    /// Equal scores keep row-major scan order.
    pub fn rank(&self, sample: &SampledImage) -> Vec<CandidateSpot> {
        let step = self.grid_step.max(1);
        let (width, height) = (sample.width(), sample.height());
        let mut candidates = Vec::new();

        for y in (step..height.saturating_sub(step)).step_by(step) {
            for x in (step..width.saturating_sub(step)).step_by(step) {
                let Some(rgb) = sample.rgb_at(x, y) else {
                    continue;
                };
                let position = PercentPoint::new(
                    pixel_to_percent(x, width, sample.source_width()),
                    pixel_to_percent(y, height, sample.source_height()),
                );
                if !position.within_band(self.margin_percent) {
                    continue;
                }
                candidates.push(CandidateSpot {
                    x_percent: position.x,
                    y_percent: position.y,
                    blend_score: PixelStats::from_rgb(rgb).blend_score(),
                });
            }
        }

        candidates.sort_by(|a, b| b.blend_score.total_cmp(&a.blend_score));
        debug!(
            candidates = candidates.len(),
            width, height, "ranked camouflage candidates"
        );
        candidates
    }
}
