//! Background decoding, downsampling and sample-to-percent conversion

use crate::io::error::{PlacementError, Result};
use image::RgbImage;
use image::imageops::{self, FilterType};
use ndarray::Array3;
use std::path::PathBuf;
use std::sync::Arc;

/// A background handed to the engine by the theme/background collaborator
#[derive(Debug, Clone)]
pub enum BackgroundImage {
    /// Image file on disk
    File(PathBuf),
    /// Encoded image bytes (PNG, JPEG, ...)
    Encoded(Arc<[u8]>),
    /// Already decoded RGB raster
    Raster(Arc<RgbImage>),
}

impl BackgroundImage {
    /// Decode the background and sample it at no more than `cap` pixels on its longer side
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::ImageLoad`] if the file cannot be read or the
    /// bytes are not a decodable image
    pub fn sample(&self, cap: u32) -> Result<SampledImage> {
        match self {
            Self::File(path) => {
                let decoded = image::open(path).map_err(|source| PlacementError::ImageLoad {
                    path: path.clone(),
                    source,
                })?;
                Ok(SampledImage::from_rgb(&decoded.to_rgb8(), cap))
            }
            Self::Encoded(bytes) => {
                let decoded = image::load_from_memory(bytes)?;
                Ok(SampledImage::from_rgb(&decoded.to_rgb8(), cap))
            }
            Self::Raster(raster) => Ok(SampledImage::from_rgb(raster, cap)),
        }
    }
}

/// Dimensions after fitting the longer side within `cap`, preserving aspect ratio
///
/// Images already within the cap keep their size. Neither side drops below one pixel.
pub fn downsampled_dimensions(width: u32, height: u32, cap: u32) -> (u32, u32) {
    let longer = width.max(height);
    if longer <= cap || longer == 0 {
        return (width, height);
    }
    let ratio = f64::from(cap) / f64::from(longer);
    let fit = |extent: u32| ((f64::from(extent) * ratio).round() as u32).clamp(1, cap);
    (fit(width), fit(height))
}

/// Convert a sampled pixel coordinate to a percentage of the original image extent
///
/// The sample is first mapped to the source pixel it covers, the floor of
/// `sample * source / sample_extent`, and that pixel is expressed as a share of
/// the source extent. Percentages therefore always land on a real source
/// pixel even when downsampling rounded the sample size. Returns 0 for empty
/// extents.
pub fn pixel_to_percent(sample_coord: usize, sample_extent: usize, source_extent: u32) -> f64 {
    if sample_extent == 0 || source_extent == 0 {
        return 0.0;
    }
    let source = f64::from(source_extent);
    let source_pixel = (sample_coord as f64 * source / sample_extent as f64).floor();
    source_pixel / source * 100.0
}

/// Low-resolution RGB copy of a background used only for scoring
#[derive(Debug, Clone)]
pub struct SampledImage {
    /// Channel values indexed by `(row, column, channel)`
    pixels: Array3<u8>,
    source_width: u32,
    source_height: u32,
}

impl SampledImage {
    /// Downsample an RGB raster so its longer side fits within `cap`
    pub fn from_rgb(raster: &RgbImage, cap: u32) -> Self {
        let (source_width, source_height) = raster.dimensions();
        let (width, height) = downsampled_dimensions(source_width, source_height, cap);

        let resized;
        let sampled = if (width, height) == (source_width, source_height) {
            raster
        } else {
            resized = imageops::resize(raster, width, height, FilterType::Triangle);
            &resized
        };

        let pixels = Array3::from_shape_fn(
            (height as usize, width as usize, 3),
            |(row, col, channel)| {
                sampled
                    .get_pixel_checked(col as u32, row as u32)
                    .and_then(|pixel| pixel.0.get(channel).copied())
                    .unwrap_or(0)
            },
        );

        Self {
            pixels,
            source_width,
            source_height,
        }
    }

    /// Width of the sampled raster
    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    /// Height of the sampled raster
    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }

    /// Width of the image the sample was taken from
    pub const fn source_width(&self) -> u32 {
        self.source_width
    }

    /// Height of the image the sample was taken from
    pub const fn source_height(&self) -> u32 {
        self.source_height
    }

    /// RGB channels at a sampled coordinate
    pub fn rgb_at(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        Some([
            *self.pixels.get((y, x, 0))?,
            *self.pixels.get((y, x, 1))?,
            *self.pixels.get((y, x, 2))?,
        ])
    }
}
