//! Difficulty tiers and the per-level parameter bundle they resolve to
//!
//! Every five levels the game advances one progression step. Each tier
//! turns the step into more objects, lower opacity, smaller sprites and a
//! shorter clock, all saturating at tier-specific limits.

use crate::io::error::{PlacementError, invalid_parameter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Levels per progression step
pub const LEVELS_PER_STEP: u32 = 5;

/// Named difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Few, clearly visible objects and no clock
    Easy,
    /// More and fainter objects with a time limit
    Medium,
    /// Dense, faint, small objects with a time limit
    Hard,
}

impl Tier {
    /// All tiers, easiest first
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Multiplier folded into the level seed
    pub const fn seed_multiplier(self) -> u32 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    /// Lowercase name used on the command line and in layouts
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    const fn rules(self) -> &'static TierRules {
        match self {
            Self::Easy => &EASY_RULES,
            Self::Medium => &MEDIUM_RULES,
            Self::Hard => &HARD_RULES,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tier {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| invalid_parameter("difficulty", &s, &"expected easy, medium or hard"))
    }
}

impl TryFrom<u32> for Tier {
    type Error = PlacementError;

    fn try_from(multiplier: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.seed_multiplier() == multiplier)
            .ok_or_else(|| invalid_parameter("difficulty", &multiplier, &"expected 1, 2 or 3"))
    }
}

/// Inclusive range objects are scaled within
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleRange {
    /// Smallest scale
    pub min: f64,
    /// Largest scale
    pub max: f64,
}

/// Parameters resolved for one level of one tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyBundle {
    /// Number of objects the planner tries to place
    pub object_count: u32,
    /// Opacity before per-object reduction
    pub opacity_base: f64,
    /// Range object scales are drawn from
    pub scale_range: ScaleRange,
    /// Countdown length, absent for untimed tiers
    pub time_limit_seconds: Option<u32>,
}

/// A value that shrinks linearly per progression step down to a floor
#[derive(Debug, Clone, Copy)]
struct Decay {
    start: f64,
    per_step: f64,
    floor: f64,
}

impl Decay {
    fn at(&self, step: u32) -> f64 {
        (-self.per_step)
            .mul_add(f64::from(step), self.start)
            .max(self.floor)
    }
}

#[derive(Debug, Clone, Copy)]
struct ClockDecay {
    start: u32,
    per_step: u32,
    floor: u32,
}

impl ClockDecay {
    const fn at(&self, step: u32) -> u32 {
        let reduced = self.start.saturating_sub(self.per_step.saturating_mul(step));
        if reduced > self.floor {
            reduced
        } else {
            self.floor
        }
    }
}

#[derive(Debug)]
struct TierRules {
    base_count: u32,
    count_ceiling: u32,
    opacity: Decay,
    min_scale: Decay,
    max_scale: Decay,
    clock: Option<ClockDecay>,
}

const EASY_RULES: TierRules = TierRules {
    base_count: 15,
    count_ceiling: 25,
    opacity: Decay {
        start: 0.6,
        per_step: 0.01,
        floor: 0.4,
    },
    min_scale: Decay {
        start: 0.3,
        per_step: 0.0,
        floor: 0.3,
    },
    max_scale: Decay {
        start: 0.5,
        per_step: 0.0,
        floor: 0.5,
    },
    clock: None,
};

const MEDIUM_RULES: TierRules = TierRules {
    base_count: 25,
    count_ceiling: 35,
    opacity: Decay {
        start: 0.4,
        per_step: 0.01,
        floor: 0.25,
    },
    min_scale: Decay {
        start: 0.25,
        per_step: 0.005,
        floor: 0.15,
    },
    max_scale: Decay {
        start: 0.4,
        per_step: 0.005,
        floor: 0.3,
    },
    clock: Some(ClockDecay {
        start: 150,
        per_step: 2,
        floor: 120,
    }),
};

const HARD_RULES: TierRules = TierRules {
    base_count: 40,
    count_ceiling: 50,
    opacity: Decay {
        start: 0.3,
        per_step: 0.01,
        floor: 0.15,
    },
    min_scale: Decay {
        start: 0.2,
        per_step: 0.004,
        floor: 0.12,
    },
    max_scale: Decay {
        start: 0.35,
        per_step: 0.005,
        floor: 0.25,
    },
    clock: Some(ClockDecay {
        start: 180,
        per_step: 2,
        floor: 150,
    }),
};

/// Coarse difficulty ratchet: `floor((level - 1) / 5)`, level 0 counts as level 1
pub const fn progression_step(level: u32) -> u32 {
    level.saturating_sub(1) / LEVELS_PER_STEP
}

/// Resolve the parameter bundle for a level of a tier
pub fn resolve(level: u32, tier: Tier) -> DifficultyBundle {
    let step = progression_step(level);
    let rules = tier.rules();

    let object_count = rules
        .base_count
        .saturating_add(step / 2)
        .min(rules.count_ceiling);

    DifficultyBundle {
        object_count,
        opacity_base: rules.opacity.at(step),
        scale_range: ScaleRange {
            min: rules.min_scale.at(step),
            max: rules.max_scale.at(step),
        },
        time_limit_seconds: rules.clock.map(|clock| clock.at(step)),
    }
}
