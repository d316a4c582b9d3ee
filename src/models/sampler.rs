//! Pixel access boundary between image buffers and the scan engine.

use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};

/// Read-only view of a raster that can answer "is this pixel black?"
///
/// The scan engine never loads or converts images itself; it only walks
/// coordinates through this trait. Implementations must be cheap and free of
/// side effects, since a single decode touches every pixel of a row at least
/// twice.
pub trait PixelSampler {
    /// Raster width in pixels
    fn width(&self) -> usize;

    /// Raster height in pixels
    fn height(&self) -> usize;

    /// True iff the pixel at (x, y) is pure black.
    ///
    /// Callers only pass in-bounds coordinates.
    fn is_black(&self, x: usize, y: usize) -> bool;
}

impl<T: PixelSampler + ?Sized> PixelSampler for &T {
    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn is_black(&self, x: usize, y: usize) -> bool {
        (**self).is_black(x, y)
    }
}

impl PixelSampler for RgbImage {
    fn width(&self) -> usize {
        self.dimensions().0 as usize
    }

    fn height(&self) -> usize {
        self.dimensions().1 as usize
    }

    fn is_black(&self, x: usize, y: usize) -> bool {
        let [r, g, b] = self.get_pixel(x as u32, y as u32).0;
        r as u32 + g as u32 + b as u32 == 0
    }
}

/// Alpha is ignored: a transparent black pixel is still black.
impl PixelSampler for RgbaImage {
    fn width(&self) -> usize {
        self.dimensions().0 as usize
    }

    fn height(&self) -> usize {
        self.dimensions().1 as usize
    }

    fn is_black(&self, x: usize, y: usize) -> bool {
        let [r, g, b, _] = self.get_pixel(x as u32, y as u32).0;
        r as u32 + g as u32 + b as u32 == 0
    }
}

impl PixelSampler for GrayImage {
    fn width(&self) -> usize {
        self.dimensions().0 as usize
    }

    fn height(&self) -> usize {
        self.dimensions().1 as usize
    }

    fn is_black(&self, x: usize, y: usize) -> bool {
        self.get_pixel(x as u32, y as u32).0[0] == 0
    }
}

/// Goes through `GenericImageView::get_pixel`, which converts per pixel.
/// Convert to `RgbImage` up front when decoding many rows.
impl PixelSampler for DynamicImage {
    fn width(&self) -> usize {
        image::GenericImageView::width(self) as usize
    }

    fn height(&self) -> usize {
        image::GenericImageView::height(self) as usize
    }

    fn is_black(&self, x: usize, y: usize) -> bool {
        let [r, g, b, _] = image::GenericImageView::get_pixel(self, x as u32, y as u32).0;
        r as u32 + g as u32 + b as u32 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb, Rgba};

    #[test]
    fn test_rgb_only_pure_black_counts() {
        let mut img = RgbImage::from_pixel(3, 1, Rgb([255, 255, 255]));
        img.put_pixel(0, 0, Rgb([0, 0, 0]));
        img.put_pixel(1, 0, Rgb([0, 0, 1]));

        assert!(img.is_black(0, 0));
        assert!(!img.is_black(1, 0)); // near-black is still "not black"
        assert!(!img.is_black(2, 0));
        assert_eq!(PixelSampler::width(&img), 3);
        assert_eq!(PixelSampler::height(&img), 1);
    }

    #[test]
    fn test_rgba_ignores_alpha() {
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([255, 255, 255, 255]));
        img.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
        assert!(img.is_black(0, 0));
        assert!(!img.is_black(1, 0));
    }

    #[test]
    fn test_gray_and_dynamic() {
        let mut gray = GrayImage::from_pixel(2, 2, Luma([200]));
        gray.put_pixel(1, 1, Luma([0]));
        assert!(gray.is_black(1, 1));
        assert!(!gray.is_black(0, 1));

        let dynamic = DynamicImage::ImageLuma8(gray);
        assert!(dynamic.is_black(1, 1));
        assert!(!dynamic.is_black(0, 0));
        assert_eq!(PixelSampler::width(&dynamic), 2);
    }

    #[test]
    fn test_reference_forwarding() {
        let img = GrayImage::from_pixel(4, 1, Luma([0]));
        let by_ref: &GrayImage = &img;
        assert!(PixelSampler::is_black(&by_ref, 3, 0));
        assert_eq!(PixelSampler::width(&by_ref), 4);
    }
}
