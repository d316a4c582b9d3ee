/// Bar layouts and weight tables
pub mod format;
/// Packed bit grid for monochrome rasters
pub mod matrix;
/// Read-only pixel access
pub mod sampler;
/// Symbology and digit-count selection
pub mod symbology;

pub use format::FormatSpec;
pub use matrix::BitMatrix;
pub use sampler::PixelSampler;
pub use symbology::{DigitCount, Symbology};
