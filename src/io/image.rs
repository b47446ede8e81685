//! Preview rendering of a generated level over its background

use crate::algorithm::level::Level;
use crate::io::configuration::{PREVIEW_MARKER_RADIUS_FACTOR, PREVIEW_MARKER_THICKNESS};
use crate::io::error::{PlacementError, Result, WithPath};
use image::{Rgb, RgbImage};
use std::path::Path;

const HIDDEN_MARKER: Rgb<u8> = Rgb([255, 48, 48]);
const FOUND_MARKER: Rgb<u8> = Rgb([48, 220, 96]);

/// Load a background from disk as RGB
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded
pub fn load_background(path: &Path) -> Result<RgbImage> {
    image::open(path)
        .map(|decoded| decoded.to_rgb8())
        .map_err(|source| PlacementError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })
}

/// Draw a ring at every object position on a copy of the background
///
/// Ring radius follows the object's scale; hidden objects are red, found ones green.
pub fn render_preview(background: &RgbImage, level: &Level) -> RgbImage {
    let mut canvas = background.clone();
    let (width, height) = canvas.dimensions();
    let shorter = f64::from(width.min(height));

    for object in level.objects() {
        let cx = object.x_percent / 100.0 * f64::from(width);
        let cy = object.y_percent / 100.0 * f64::from(height);
        let radius = (object.scale * shorter * PREVIEW_MARKER_RADIUS_FACTOR)
            .max(PREVIEW_MARKER_THICKNESS + 1.0);
        let color = if object.found {
            FOUND_MARKER
        } else {
            HIDDEN_MARKER
        };
        draw_ring(&mut canvas, cx, cy, radius, color);
    }

    canvas
}

fn draw_ring(canvas: &mut RgbImage, cx: f64, cy: f64, radius: f64, color: Rgb<u8>) {
    let inner = radius - PREVIEW_MARKER_THICKNESS;
    let x_start = (cx - radius).floor().max(0.0) as u32;
    let y_start = (cy - radius).floor().max(0.0) as u32;
    let x_end = (cx + radius).ceil().max(0.0) as u32;
    let y_end = (cy + radius).ceil().max(0.0) as u32;

    for y in y_start..=y_end {
        for x in x_start..=x_end {
            let distance = (f64::from(x) - cx).hypot(f64::from(y) - cy);
            if distance < inner || distance > radius {
                continue;
            }
            if let Some(pixel) = canvas.get_pixel_mut_checked(x, y) {
                *pixel = color;
            }
        }
    }
}

/// Render a preview and save it, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to `output_path`
pub fn export_preview(background: &RgbImage, level: &Level, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    render_preview(background, level)
        .save(output_path)
        .map_err(|source| PlacementError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })
}
