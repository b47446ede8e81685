/// Difficulty tiers and parameter resolution
pub mod difficulty;
/// Generated level state and hint budget
pub mod level;
/// Seeded rejection-sampling placement
pub mod placement;
