//! Seeded, camouflage-aware object placement for hidden-object game levels
//!
//! A background image is sampled on a coarse grid and each point is scored by
//! how well an overlaid object would blend in. Objects are then placed by
//! bounded rejection sampling driven by a reproducible sequence generator, so
//! a level's layout is fully determined by its level index, tier and clock
//! reading.

#![forbid(unsafe_code)]

/// Difficulty resolution, placement planning and level state
pub mod algorithm;
/// Background sampling and camouflage scoring
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Deterministic sequence generation and seed composition
pub mod math;
/// Percentage-space points and object records
pub mod spatial;

pub use algorithm::difficulty::{DifficultyBundle, Tier};
pub use algorithm::level::{Level, ObjectUpdate};
pub use algorithm::placement::{LevelRequest, PlacementPlanner};
pub use analysis::BackgroundImage;
pub use io::error::{PlacementError, Result};
