use super::PixelSampler;

/// Compact bit matrix, one bit per cell
///
/// Used both as a monochrome raster (true = black) and as the scratch grid the
/// decoders fill with wide/narrow classifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create a new bit matrix with all cells cleared
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = (width * height).div_ceil(8);
        Self {
            width,
            height,
            data: vec![0; bytes_needed],
        }
    }

    /// Build a matrix by evaluating `f` for every cell
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut matrix = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                if f(x, y) {
                    matrix.set(x, y, true);
                }
            }
        }
        matrix
    }

    /// Get matrix width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get matrix height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get bit at (x, y); out-of-range reads are false
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y * self.width + x;
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Set bit at (x, y); out-of-range writes are ignored
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y * self.width + x;
        let byte_index = index / 8;
        let bit_index = index % 8;
        if value {
            self.data[byte_index] |= 1 << bit_index;
        } else {
            self.data[byte_index] &= !(1 << bit_index);
        }
    }

    /// Set every cell of row `y` in `x_start..x_end`
    pub fn fill_row_span(&mut self, y: usize, x_start: usize, x_end: usize, value: bool) {
        for x in x_start..x_end.min(self.width) {
            self.set(x, y, value);
        }
    }

    /// Number of set cells in row `y`
    pub fn count_row(&self, y: usize) -> usize {
        (0..self.width).filter(|&x| self.get(x, y)).count()
    }
}

impl Default for BitMatrix {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl PixelSampler for BitMatrix {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn is_black(&self, x: usize, y: usize) -> bool {
        self.get(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_matrix() {
        let mut matrix = BitMatrix::new(8, 8);
        assert_eq!(matrix.width(), 8);
        assert_eq!(matrix.height(), 8);

        matrix.set(3, 4, true);
        assert!(matrix.get(3, 4));
        assert!(!matrix.get(3, 3));

        matrix.set(3, 4, false);
        assert!(!matrix.get(3, 4));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut matrix = BitMatrix::new(8, 8);
        matrix.set(10, 10, true); // Should not panic
        assert!(!matrix.get(10, 10));
    }

    #[test]
    fn test_row_span_and_count() {
        let mut matrix = BitMatrix::new(10, 2);
        matrix.fill_row_span(1, 2, 6, true);
        matrix.fill_row_span(1, 8, 40, true); // clipped at width
        assert_eq!(matrix.count_row(0), 0);
        assert_eq!(matrix.count_row(1), 6);
        assert!(matrix.is_black(5, 1));
        assert!(!matrix.is_black(6, 1));
    }

    #[test]
    fn test_from_fn() {
        let matrix = BitMatrix::from_fn(4, 3, |x, y| x == y);
        assert!(matrix.get(0, 0));
        assert!(matrix.get(2, 2));
        assert!(!matrix.get(3, 2));
    }
}
