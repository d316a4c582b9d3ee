//! Image I/O and synthetic symbol helpers shared by the CLI, tests, and benches.

/// Synthetic symbol rendering
pub mod render;

use crate::models::BitMatrix;
use crate::utils::mono::{to_mono, GrayScaleMethod, MonoThreshold};
use image::{Rgb, RgbImage};
use std::path::Path;

/// Load an image as RGB bytes along with its dimensions.
pub fn load_rgb<P: AsRef<Path>>(path: P) -> Result<(Vec<u8>, usize, usize), image::ImageError> {
    let rgb = image::open(path)?.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok((rgb.into_raw(), width as usize, height as usize))
}

/// Load an image and reduce it to pure black and white.
pub fn load_mono<P: AsRef<Path>>(
    path: P,
    method: GrayScaleMethod,
    threshold: MonoThreshold,
) -> Result<BitMatrix, image::ImageError> {
    let (rgb, width, height) = load_rgb(path)?;
    Ok(to_mono(&rgb, width, height, method, threshold))
}

/// Black-on-white RGB rendering of a matrix
pub fn matrix_to_image(matrix: &BitMatrix) -> RgbImage {
    RgbImage::from_fn(matrix.width() as u32, matrix.height() as u32, |x, y| {
        if matrix.get(x as usize, y as usize) {
            Rgb([0, 0, 0])
        } else {
            Rgb([255, 255, 255])
        }
    })
}

/// Save a matrix; the format follows the file extension.
pub fn save_matrix<P: AsRef<Path>>(matrix: &BitMatrix, path: P) -> Result<(), image::ImageError> {
    matrix_to_image(matrix).save(path)
}
