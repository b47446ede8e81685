//! Seeded rejection-sampling placement of hidden objects
//!
//! The planner resolves the tier's parameters, composes a seed, ranks the
//! background's camouflage candidates and then draws positions until it has
//! placed the requested number of objects or spent its attempt budget.
//! Running out of attempts ships a level with fewer objects; constraints are
//! never relaxed to make up the difference.

use crate::algorithm::difficulty::{DifficultyBundle, Tier, resolve};
use crate::algorithm::level::{Level, LevelHeader};
use crate::analysis::{BackgroundImage, CamouflageAnalyzer};
use crate::io::configuration::{
    CANDIDATE_JITTER_PERCENT, CANDIDATE_TOP_FRACTION, MAX_PLACEMENT_ATTEMPTS,
    MIN_SEPARATION_PERCENT, MIN_VISIBLE_OPACITY, OBJECT_ID_NONCE_BOUND, OPACITY_REDUCTION_MAX,
    PLACEMENT_MARGIN_PERCENT,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::themes::{VariantCatalog, theme_for_level};
use crate::math::SequenceGenerator;
use crate::math::seed::{compose_seed, current_timestamp_ms};
use crate::spatial::objects::{check_margin, is_clear_of};
use crate::spatial::{CandidateSpot, PercentPoint, PlacedObject};
use std::num::NonZeroU32;
use tracing::{debug, trace};

/// Everything needed to generate one level
#[derive(Debug, Clone)]
pub struct LevelRequest {
    /// Player-visible level index, starting at 1
    pub level: u32,
    /// Difficulty tier
    pub tier: Tier,
    /// Background produced by the theme/background collaborator
    pub background: BackgroundImage,
    /// Scene description of the background
    pub theme: String,
    /// Wall-clock milliseconds folded into the seed and object ids
    pub timestamp_ms: u64,
}

impl LevelRequest {
    /// Request stamped with the current time and the built-in theme for `level`
    pub fn new(level: u32, tier: Tier, background: BackgroundImage) -> Self {
        Self {
            level,
            tier,
            background,
            theme: theme_for_level(level).to_string(),
            timestamp_ms: current_timestamp_ms(),
        }
    }

    /// Replace the theme label
    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Pin the clock reading, making the layout reproducible
    #[must_use]
    pub const fn with_timestamp(mut self, timestamp_ms: u64) -> Self {
        self.timestamp_ms = timestamp_ms;
        self
    }

    /// Seed this request resolves to
    pub const fn seed(&self) -> u32 {
        compose_seed(self.level, self.tier.seed_multiplier(), self.timestamp_ms)
    }
}

/// Geometric and visual limits of the placement loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementConfig {
    /// Safe band margin on every edge, in percent
    pub margin: f64,
    /// Minimum distance between object centres, in percent
    pub min_separation: f64,
    /// Attempt cap guaranteeing termination
    pub max_attempts: u32,
    /// Share of the ranked candidates eligible for placement
    pub top_fraction: f64,
    /// Per-axis jitter applied to a chosen candidate
    pub jitter: f64,
    /// Largest random reduction from the base opacity
    pub opacity_reduction: f64,
    /// Opacity floor
    pub min_opacity: f64,
}

impl PlacementConfig {
    /// Reject limits the placement loop cannot honour
    ///
    /// # Errors
    ///
    /// Returns an error if the margin leaves no safe band, or any distance,
    /// fraction or opacity lies outside its domain
    pub fn validate(&self) -> Result<()> {
        check_margin("margin", self.margin)?;
        let non_negative = [
            ("min_separation", self.min_separation),
            ("jitter", self.jitter),
            ("opacity_reduction", self.opacity_reduction),
        ];
        for (parameter, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"must be finite and non-negative",
                ));
            }
        }
        if !(self.top_fraction > 0.0 && self.top_fraction <= 1.0) {
            return Err(invalid_parameter(
                "top_fraction",
                &self.top_fraction,
                &"must lie within (0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&self.min_opacity) {
            return Err(invalid_parameter(
                "min_opacity",
                &self.min_opacity,
                &"must lie within [0, 1]",
            ));
        }
        Ok(())
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            margin: PLACEMENT_MARGIN_PERCENT,
            min_separation: MIN_SEPARATION_PERCENT,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
            top_fraction: CANDIDATE_TOP_FRACTION,
            jitter: CANDIDATE_JITTER_PERCENT,
            opacity_reduction: OPACITY_REDUCTION_MAX,
            min_opacity: MIN_VISIBLE_OPACITY,
        }
    }
}

/// Objects accepted by one placement run and the attempts it spent
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Accepted objects in acceptance order
    pub objects: Vec<PlacedObject>,
    /// Attempts consumed, at most the configured cap
    pub attempts: u32,
}

/// Generates levels from requests
///
/// Holds no per-level state, so one planner can serve concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct PlacementPlanner {
    catalog: VariantCatalog,
    analyzer: CamouflageAnalyzer,
    config: PlacementConfig,
}

impl PlacementPlanner {
    /// Planner drawing object sprites from `catalog`
    pub fn new(catalog: VariantCatalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// Replace the placement limits
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`PlacementConfig::validate`]
    pub fn with_config(mut self, config: PlacementConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Replace the background analyzer
    ///
    /// # Errors
    ///
    /// Returns an error if `analyzer` fails [`CamouflageAnalyzer::validate`]
    pub fn with_analyzer(mut self, analyzer: CamouflageAnalyzer) -> Result<Self> {
        analyzer.validate()?;
        self.analyzer = analyzer;
        Ok(self)
    }

    /// Placement limits in use
    pub const fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Generate a complete level
    ///
    /// An undecodable background falls back to uniform placement.
    pub async fn generate(&self, request: LevelRequest) -> Level {
        let bundle = resolve(request.level, request.tier);
        let seed = request.seed();
        debug!(
            level = request.level,
            tier = %request.tier,
            seed,
            object_count = bundle.object_count,
            opacity_base = bundle.opacity_base,
            "resolved level parameters"
        );

        let mut generator = SequenceGenerator::new(seed);
        let candidates = self.analyzer.analyze(&request.background).await;
        if candidates.is_empty() {
            debug!(
                level = request.level,
                "no camouflage candidates, placing uniformly"
            );
        }

        let placement = self.place(&bundle, &candidates, &mut generator, request.timestamp_ms);
        if placement.objects.len() < bundle.object_count as usize {
            debug!(
                placed = placement.objects.len(),
                requested = bundle.object_count,
                attempts = placement.attempts,
                "attempt cap reached before target count"
            );
        }

        Level::new(
            LevelHeader {
                level: request.level,
                tier: request.tier,
                theme: request.theme,
                seed,
                requested_count: bundle.object_count,
                attempts: placement.attempts,
                time_limit_seconds: bundle.time_limit_seconds,
                camouflage_guided: !candidates.is_empty(),
            },
            placement.objects,
        )
    }

    /// Run the rejection-sampling loop against ranked `candidates`
    ///
    /// With no candidates every position is drawn uniformly inside the safe band.
    pub fn place(
        &self,
        bundle: &DifficultyBundle,
        candidates: &[CandidateSpot],
        generator: &mut SequenceGenerator,
        timestamp_ms: u64,
    ) -> Placement {
        let target = bundle.object_count as usize;
        let pool = self.candidate_pool(candidates);
        let variant_bound = self.catalog.bound();
        let mut objects: Vec<PlacedObject> = Vec::with_capacity(target);
        let mut attempts = 0;

        while objects.len() < target && attempts < self.config.max_attempts {
            attempts += 1;
            let scale = generator.next_float(bundle.scale_range.min, bundle.scale_range.max);
            let position = self.draw_position(pool, generator);

            if !is_clear_of(position, &objects, self.config.min_separation) {
                continue;
            }

            let nonce = generator.next_int(OBJECT_ID_NONCE_BOUND);
            let rotation_degrees = generator.next_float(0.0, 360.0);
            let opacity = (bundle.opacity_base
                - generator.next_float(0.0, self.config.opacity_reduction))
            .max(self.config.min_opacity);
            let hue_shift_degrees = generator.next_float(0.0, 360.0);
            let variant_index = generator.next_int(variant_bound) as usize;

            let object = PlacedObject {
                id: format!("obj-{}-{timestamp_ms}-{nonce}", objects.len()),
                x_percent: position.x,
                y_percent: position.y,
                rotation_degrees,
                scale,
                opacity,
                hue_shift_degrees,
                variant_index,
                variant: self
                    .catalog
                    .get(variant_index)
                    .unwrap_or_default()
                    .to_string(),
                found: false,
            };
            trace!(id = %object.id, x = position.x, y = position.y, attempts, "object placed");
            objects.push(object);
        }

        Placement { objects, attempts }
    }

    /// Best-scoring share of the candidates, never empty when candidates exist
    fn candidate_pool<'a>(&self, candidates: &'a [CandidateSpot]) -> &'a [CandidateSpot] {
        let keep = ((candidates.len() as f64) * self.config.top_fraction).floor() as usize;
        candidates
            .get(..keep.clamp(1, candidates.len().max(1)))
            .unwrap_or(candidates)
    }

    fn draw_position(
        &self,
        pool: &[CandidateSpot],
        generator: &mut SequenceGenerator,
    ) -> PercentPoint {
        let margin = self.config.margin;
        let chosen = u32::try_from(pool.len())
            .ok()
            .and_then(NonZeroU32::new)
            .and_then(|bound| pool.get(generator.next_int(bound) as usize));

        match chosen {
            Some(spot) => {
                let jitter = self.config.jitter;
                let x = spot.x_percent + generator.next_float(-jitter, jitter);
                let y = spot.y_percent + generator.next_float(-jitter, jitter);
                PercentPoint::new(x, y).clamped_to_band(margin)
            }
            None => {
                let span = 100.0 - margin - margin;
                let x = margin + generator.next_float(0.0, span);
                let y = margin + generator.next_float(0.0, span);
                PercentPoint::new(x, y)
            }
        }
    }
}
