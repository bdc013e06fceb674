//! Metadata-free image copies
//!
//! Rebuilds an image from its raw pixel buffer alone and saves the copy,
//! so nothing from the original container's metadata survives. The raw
//! tag table is never consulted here.

use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, ImageBuffer};
use log::info;

use crate::exif::errors::{ExifError, ExifResult};
use crate::utils::file_utils;

/// Produces metadata-free copies of images
pub struct ExifStripper;

impl ExifStripper {
    /// Writes a metadata-free copy of an image, returning the new path
    ///
    /// The copy keeps the original color mode and dimensions and lands at
    /// `<stem>_noEXIF.<ext>` next to the original.
    ///
    /// # Arguments
    /// * `image_path` - Path of the image to copy
    ///
    /// # Returns
    /// Path of the written copy, or an error
    pub fn strip(image_path: &Path) -> ExifResult<PathBuf> {
        if !image_path.is_file() {
            return Err(ExifError::FileNotFound(image_path.display().to_string()));
        }

        let image = image::open(image_path)?;
        let stripped = copy_pixels(&image)?;

        let output_path = file_utils::stripped_output_path(image_path);
        stripped.save(&output_path)?;

        info!(
            "Wrote stripped copy of {} to {}",
            image_path.display(),
            output_path.display()
        );
        Ok(output_path)
    }
}

/// Rebuilds an image from its raw pixel buffer, keeping mode and dimensions
fn copy_pixels(image: &DynamicImage) -> ExifResult<DynamicImage> {
    let (width, height) = image.dimensions();

    let rebuilt = match image {
        DynamicImage::ImageLuma8(buffer) => {
            ImageBuffer::from_raw(width, height, buffer.as_raw().clone())
                .map(DynamicImage::ImageLuma8)
        }
        DynamicImage::ImageLumaA8(buffer) => {
            ImageBuffer::from_raw(width, height, buffer.as_raw().clone())
                .map(DynamicImage::ImageLumaA8)
        }
        DynamicImage::ImageRgb8(buffer) => {
            ImageBuffer::from_raw(width, height, buffer.as_raw().clone())
                .map(DynamicImage::ImageRgb8)
        }
        DynamicImage::ImageRgba8(buffer) => {
            ImageBuffer::from_raw(width, height, buffer.as_raw().clone())
                .map(DynamicImage::ImageRgba8)
        }
        DynamicImage::ImageLuma16(buffer) => {
            ImageBuffer::from_raw(width, height, buffer.as_raw().clone())
                .map(DynamicImage::ImageLuma16)
        }
        DynamicImage::ImageLumaA16(buffer) => {
            ImageBuffer::from_raw(width, height, buffer.as_raw().clone())
                .map(DynamicImage::ImageLumaA16)
        }
        DynamicImage::ImageRgb16(buffer) => {
            ImageBuffer::from_raw(width, height, buffer.as_raw().clone())
                .map(DynamicImage::ImageRgb16)
        }
        DynamicImage::ImageRgba16(buffer) => {
            ImageBuffer::from_raw(width, height, buffer.as_raw().clone())
                .map(DynamicImage::ImageRgba16)
        }
        DynamicImage::ImageRgb32F(buffer) => {
            ImageBuffer::from_raw(width, height, buffer.as_raw().clone())
                .map(DynamicImage::ImageRgb32F)
        }
        DynamicImage::ImageRgba32F(buffer) => {
            ImageBuffer::from_raw(width, height, buffer.as_raw().clone())
                .map(DynamicImage::ImageRgba32F)
        }
        _ => None,
    };

    rebuilt.ok_or_else(|| ExifError::UnsupportedPixelLayout(format!("{:?}", image.color())))
}
