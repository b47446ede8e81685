//! Spatial data structures in percentage space
//!
//! Every coordinate handed between components is a percentage of the
//! background's dimensions, so layouts survive any display resolution.

/// Points, candidates and placed objects
pub mod objects;

pub use objects::{CandidateSpot, PercentPoint, PlacedObject};
