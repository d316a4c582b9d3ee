//! Image preprocessing ahead of scanning
//!
//! - Grayscale conversion (mean, midpoint, NTSC weights)
//! - Monochrome thresholding into a `BitMatrix`

/// Grayscale and threshold conversion
pub mod mono;
