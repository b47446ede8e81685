//! Deterministic number generation for level layouts

/// Seed composition from level, tier and clock
pub mod seed;
/// Linear congruential sequence generator
pub mod sequence;

pub use sequence::SequenceGenerator;
