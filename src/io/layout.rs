//! JSON export of generated level layouts

use crate::algorithm::level::Level;
use crate::io::error::{Result, WithPath};
use std::path::Path;

/// Serialize a level, header fields first, then its objects
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn layout_json(level: &Level) -> Result<String> {
    Ok(serde_json::to_string_pretty(level)?)
}

/// Write a level's layout to `output_path`, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written
pub fn export_layout(level: &Level, output_path: &Path) -> Result<()> {
    let json = layout_json(level)?;
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }
    std::fs::write(output_path, json).with_path(output_path, "write layout")
}
