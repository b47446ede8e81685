//! Seed composition from level, tier and a coarse clock reading

use std::time::{SystemTime, UNIX_EPOCH};

/// Weight of the level index in the composed seed
pub const LEVEL_SEED_STRIDE: u32 = 10_000;
/// Weight of the tier multiplier in the composed seed
pub const TIER_SEED_STRIDE: u32 = 1_000;
/// Wall-clock milliseconds are folded into this many buckets
pub const TIME_COMPONENT_MODULUS: u64 = 100_000;

/// Reduce a millisecond timestamp to the part that enters the seed
pub const fn coarse_time_component(timestamp_ms: u64) -> u32 {
    (timestamp_ms % TIME_COMPONENT_MODULUS) as u32
}

/// Combine the three seed inputs with wrapping 32-bit arithmetic
///
/// Identical inputs always give the same seed. Replays later in time move
/// the time component and so the whole layout.
pub const fn compose_seed(level: u32, tier_multiplier: u32, timestamp_ms: u64) -> u32 {
    level
        .wrapping_mul(LEVEL_SEED_STRIDE)
        .wrapping_add(tier_multiplier.wrapping_mul(TIER_SEED_STRIDE))
        .wrapping_add(coarse_time_component(timestamp_ms))
}

/// Milliseconds since the Unix epoch, or 0 if the clock is before it
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as u64)
}
