//! Linear congruential sequence generator behind reproducible level geometry
//!
//! The recurrence is fixed so that a seed reproduces the same layout on any
//! platform. It is not a statistical-quality generator and is never shared
//! between level generations.

use std::num::NonZeroU32;

/// Multiplier of the recurrence
pub const LCG_MULTIPLIER: u64 = 9_301;
/// Increment of the recurrence
pub const LCG_INCREMENT: u64 = 49_297;
/// Modulus of the recurrence, also the denominator of unit draws
pub const LCG_MODULUS: u64 = 233_280;

/// Deterministic stream of pseudo-random values built from a 32-bit seed
///
/// `state = (state * 9301 + 49297) mod 233280`, and every unit draw is
/// `state / 233280`. Each instance owns its state; cloning forks the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceGenerator {
    state: u64,
}

impl SequenceGenerator {
    /// Create a generator whose first draw advances from `seed`
    pub const fn new(seed: u32) -> Self {
        Self { state: seed as u64 }
    }

    /// Current raw state of the recurrence
    pub const fn state(&self) -> u64 {
        self.state
    }

    /// Advance once and return a value in `[0, 1)`
    pub fn next_unit(&mut self) -> f64 {
        // seed < 2^32 and state < 233280 afterwards, so the product fits in u64
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.state as f64 / LCG_MODULUS as f64
    }

    /// Integer in `[0, bound)`
    pub fn next_int(&mut self, bound: NonZeroU32) -> u32 {
        let bound = bound.get();
        ((self.next_unit() * f64::from(bound)).floor() as u32).min(bound - 1)
    }

    /// Float in `[min, max)`
    pub fn next_float(&mut self, min: f64, max: f64) -> f64 {
        self.next_unit().mul_add(max - min, min)
    }
}

impl Iterator for SequenceGenerator {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_unit())
    }
}
