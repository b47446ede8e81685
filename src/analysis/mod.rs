//! Background analysis for camouflage-aware placement

/// Camouflage scoring and candidate ranking
pub mod camouflage;
/// Background decoding and downsampling
pub mod sampling;

pub use camouflage::CamouflageAnalyzer;
pub use sampling::BackgroundImage;
