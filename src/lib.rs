//! barcode25 - 2-of-5 barcode reading from raster images
//!
//! Decodes Industrial 2 of 5 and Interleaved 2 of 5 symbols by scanning a
//! single pixel row, calibrating wide/narrow widths from the symbol itself,
//! and mapping positional weights to digits.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Process-wide defaults from environment variables
pub mod config;
/// Core data structures (BitMatrix, FormatSpec, Symbology, PixelSampler)
pub mod models;
/// Scan engine, width classification, and the two symbology decoders
pub mod scanner;
/// Image loading and synthetic symbol rendering
pub mod tools;
/// Image preprocessing (grayscale and monochrome conversion)
pub mod utils;

mod debug;

pub use models::{BitMatrix, DigitCount, FormatSpec, PixelSampler, Symbology};
pub use scanner::{ScanEngine, ScanState, WidthClassifier};
pub use utils::mono::{GrayScaleMethod, MonoThreshold};

/// Decode an Industrial 2 of 5 symbol of `digits` digits
///
/// # Arguments
/// * `sampler` - Any raster exposing the black-pixel predicate
/// * `digits` - Digit count; values below 1 are treated as 1
///
/// # Returns
/// The digit string, or `None` if no well-formed symbol was found
pub fn decode_industrial<S: PixelSampler + ?Sized>(sampler: &S, digits: i32) -> Option<String> {
    decode(Symbology::Industrial, sampler, digits)
}

/// Decode an Interleaved 2 of 5 symbol of `digits` digit pairs
///
/// A successful result has `2 * digits` characters.
pub fn decode_interleaved<S: PixelSampler + ?Sized>(sampler: &S, digits: i32) -> Option<String> {
    decode(Symbology::Interleaved, sampler, digits)
}

/// Decode with an explicit symbology
pub fn decode<S: PixelSampler + ?Sized>(
    symbology: Symbology,
    sampler: &S,
    digits: i32,
) -> Option<String> {
    ScanEngine::new(symbology)
        .with_digit_count(digits)
        .decode(sampler)
}

/// Decode from raw RGB bytes (3 bytes per pixel)
///
/// The buffer is reduced to monochrome with the NTSC weights and the default
/// threshold first, so photographed symbols need not be pure black.
pub fn decode_rgb(
    image: &[u8],
    width: usize,
    height: usize,
    symbology: Symbology,
    digits: i32,
) -> Option<String> {
    let mono = utils::mono::to_mono(
        image,
        width,
        height,
        GrayScaleMethod::Ntsc,
        MonoThreshold::default(),
    );
    decode(symbology, &mono, digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::render::{render, RenderOptions};

    #[test]
    fn test_decode_empty() {
        let image = vec![255u8; 300]; // 10x10 white RGB
        assert_eq!(decode_rgb(&image, 10, 10, Symbology::Industrial, 1), None);
        assert_eq!(decode_rgb(&[], 0, 0, Symbology::Interleaved, 1), None);
    }

    #[test]
    fn test_decode_rgb_gray_bars() {
        // dark gray bars only decode after the monochrome pass
        let matrix = render(Symbology::Industrial, "42", &RenderOptions::default()).unwrap();
        let rgb: Vec<u8> = (0..matrix.height())
            .flat_map(|y| (0..matrix.width()).map(move |x| (x, y)))
            .flat_map(|(x, y)| {
                let level = if matrix.get(x, y) { 40 } else { 230 };
                [level, level, level]
            })
            .collect();
        let img = image::RgbImage::from_raw(matrix.width() as u32, matrix.height() as u32, rgb.clone())
            .unwrap();
        assert_eq!(decode_industrial(&img, 2), None);
        assert_eq!(
            decode_rgb(&rgb, matrix.width(), matrix.height(), Symbology::Industrial, 2).as_deref(),
            Some("42")
        );
    }

    #[test]
    fn test_convenience_wrappers() {
        let opts = RenderOptions::default();
        let industrial = render(Symbology::Industrial, "907", &opts).unwrap();
        assert_eq!(decode_industrial(&industrial, 3).as_deref(), Some("907"));

        let interleaved = render(Symbology::Interleaved, "5081", &opts).unwrap();
        assert_eq!(decode_interleaved(&interleaved, 2).as_deref(), Some("5081"));
        assert_eq!(decode_industrial(&interleaved, 2), None);
    }
}
