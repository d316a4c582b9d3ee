//! Grayscale and monochrome conversion of RGB buffers
//!
//! The scan engine only treats exactly-zero pixels as black, so scanned or
//! photographed symbols go through `to_mono` first.

use crate::models::BitMatrix;
use rayon::prelude::*;
use std::fmt;
use std::str::FromStr;

/// NTSC luma weights scaled by 1024 (0.298912, 0.586611, 0.114478)
const NTSC_R: u32 = 306;
const NTSC_G: u32 = 600;
const NTSC_B: u32 = 117;

/// How RGB collapses to a single gray level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrayScaleMethod {
    /// Plain mean of the three channels
    Basic,
    /// Midpoint of the brightest and darkest channel
    MiddleValue,
    /// NTSC weighted mean
    #[default]
    Ntsc,
}

impl GrayScaleMethod {
    /// Gray level of one RGB pixel
    #[inline]
    pub fn gray(self, r: u8, g: u8, b: u8) -> u8 {
        let (r, g, b) = (r as u32, g as u32, b as u32);
        match self {
            GrayScaleMethod::Basic => ((r + g + b) / 3) as u8,
            GrayScaleMethod::MiddleValue => ((r.max(g).max(b) + r.min(g).min(b)) / 2) as u8,
            GrayScaleMethod::Ntsc => ((r * NTSC_R + g * NTSC_G + b * NTSC_B) >> 10).min(255) as u8,
        }
    }
}

impl fmt::Display for GrayScaleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrayScaleMethod::Basic => write!(f, "basic"),
            GrayScaleMethod::MiddleValue => write!(f, "middle"),
            GrayScaleMethod::Ntsc => write!(f, "ntsc"),
        }
    }
}

impl FromStr for GrayScaleMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" | "mean" => Ok(GrayScaleMethod::Basic),
            "middle" | "middle-value" | "midpoint" => Ok(GrayScaleMethod::MiddleValue),
            "ntsc" => Ok(GrayScaleMethod::Ntsc),
            other => Err(format!("unknown grayscale method '{other}'")),
        }
    }
}

/// Gray level at or above which a pixel becomes white
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonoThreshold(pub u8);

impl MonoThreshold {
    /// Only very dark pixels become black
    pub const VERY_LOW: MonoThreshold = MonoThreshold(42);
    /// Dark pixels become black
    pub const LOW: MonoThreshold = MonoThreshold(84);
    /// Default cut near mid-gray
    pub const MEDIUM: MonoThreshold = MonoThreshold(126);
    /// Mid and dark pixels become black
    pub const HIGH: MonoThreshold = MonoThreshold(170);
    /// Everything but near-white becomes black
    pub const VERY_HIGH: MonoThreshold = MonoThreshold(212);

    /// Raw gray level
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for MonoThreshold {
    fn default() -> Self {
        MonoThreshold(crate::config::mono_threshold())
    }
}

/// Convert packed RGB bytes to gray levels, rows in parallel
pub fn to_gray(rgb: &[u8], width: usize, height: usize, method: GrayScaleMethod) -> Vec<u8> {
    let mut gray = vec![0u8; width * height];
    if width == 0 {
        return gray;
    }

    gray.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        let row_start = y * width * 3;
        for (x, out) in row.iter_mut().enumerate() {
            let idx = row_start + x * 3;
            *out = method.gray(rgb[idx], rgb[idx + 1], rgb[idx + 2]);
        }
    });

    gray
}

/// Convert packed RGB bytes to a black/white matrix (true = black)
pub fn to_mono(
    rgb: &[u8],
    width: usize,
    height: usize,
    method: GrayScaleMethod,
    threshold: MonoThreshold,
) -> BitMatrix {
    let gray = to_gray(rgb, width, height, method);
    BitMatrix::from_fn(width, height, |x, y| gray[y * width + x] < threshold.value())
}
