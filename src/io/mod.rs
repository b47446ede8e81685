//! Command line, configuration, errors and output formats

/// Command-line parsing and batch generation
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// Background loading and preview rendering
pub mod image;
/// JSON layout export
pub mod layout;
/// Batch progress display
pub mod progress;
/// Built-in themes and object variant catalog
pub mod themes;
