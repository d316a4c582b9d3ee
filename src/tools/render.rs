//! Draws synthetic 2-of-5 symbols for tests, benches, and the CLI.

use crate::models::{BitMatrix, Symbology};

/// Wide slots for each digit; two of five, weights 1 2 4 7 0
const DIGIT_SLOTS: [[bool; 5]; 10] = [
    [false, false, true, true, false], // 0 = 4 + 7
    [true, false, false, false, true],
    [false, true, false, false, true],
    [true, true, false, false, false],
    [false, false, true, false, true],
    [true, false, true, false, false],
    [false, true, true, false, false],
    [false, false, false, true, true],
    [true, false, false, true, false],
    [false, true, false, true, false],
];

/// Module widths and margins for rendered symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Narrow element width in pixels
    pub narrow: usize,
    /// Wide element width in pixels
    pub wide: usize,
    /// White margin on each side
    pub quiet_zone: usize,
    /// Rows drawn
    pub height: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            narrow: 2,
            wide: 5,
            quiet_zone: 10,
            height: 8,
        }
    }
}

/// Wide/narrow slot flags for one decimal digit
pub fn digit_slots(digit: u8) -> Option<[bool; 5]> {
    DIGIT_SLOTS.get(digit as usize).copied()
}

/// Sequence of bar and space widths, drawn identically on every row
#[derive(Debug, Clone, Default)]
pub struct RowBuilder {
    runs: Vec<(bool, usize)>,
}

impl RowBuilder {
    /// Empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a bar
    pub fn bar(mut self, width: usize) -> Self {
        self.runs.push((true, width));
        self
    }

    /// Append a space
    pub fn space(mut self, width: usize) -> Self {
        self.runs.push((false, width));
        self
    }

    /// Append the element widths with alternating colors, starting with a bar
    pub fn alternating(mut self, widths: &[usize]) -> Self {
        for (i, &width) in widths.iter().enumerate() {
            self.runs.push((i % 2 == 0, width));
        }
        self
    }

    /// Remove the last element
    pub fn pop(mut self) -> Self {
        self.runs.pop();
        self
    }

    /// Rasterize with `quiet_zone` white pixels on each side
    pub fn build(&self, quiet_zone: usize, height: usize) -> BitMatrix {
        let content: usize = self.runs.iter().map(|&(_, w)| w).sum();
        let mut matrix = BitMatrix::new(content + 2 * quiet_zone, height);
        for y in 0..height {
            let mut x = quiet_zone;
            for &(is_bar, width) in &self.runs {
                if is_bar {
                    matrix.fill_row_span(y, x, x + width, true);
                }
                x += width;
            }
        }
        matrix
    }
}

fn parse_digits(value: &str) -> Option<Vec<u8>> {
    if value.is_empty() {
        return None;
    }
    value
        .chars()
        .map(|c| c.to_digit(10).map(|d| d as u8))
        .collect()
}

/// Industrial row: start, value, and stop bars separated by narrow spaces
pub fn industrial_row(value: &str, opts: &RenderOptions) -> Option<RowBuilder> {
    let digits = parse_digits(value)?;
    let (n, w) = (opts.narrow, opts.wide);
    let width = |wide: bool| if wide { w } else { n };

    let mut row = RowBuilder::new().bar(w).space(n).bar(w).space(n).bar(n).space(n);
    for digit in digits {
        for wide in digit_slots(digit)? {
            row = row.bar(width(wide)).space(n);
        }
    }
    Some(row.bar(w).space(n).bar(n).space(n).bar(w))
}

/// Interleaved row: digits pair up, the first on bars and the second on spaces
pub fn interleaved_row(value: &str, opts: &RenderOptions) -> Option<RowBuilder> {
    let digits = parse_digits(value)?;
    if digits.len() % 2 != 0 {
        return None;
    }
    let (n, w) = (opts.narrow, opts.wide);
    let width = |wide: bool| if wide { w } else { n };

    let mut row = RowBuilder::new().bar(n).space(n).bar(n).space(n);
    for pair in digits.chunks(2) {
        let bars = digit_slots(pair[0])?;
        let spaces = digit_slots(pair[1])?;
        for (bar, space) in bars.into_iter().zip(spaces) {
            row = row.bar(width(bar)).space(width(space));
        }
    }
    Some(row.bar(w).space(n).bar(n))
}

/// Render `value` as a complete symbol; `None` for input the symbology
/// cannot carry
pub fn render(symbology: Symbology, value: &str, opts: &RenderOptions) -> Option<BitMatrix> {
    let row = match symbology {
        Symbology::Industrial => industrial_row(value, opts)?,
        Symbology::Interleaved => interleaved_row(value, opts)?,
    };
    Some(row.build(opts.quiet_zone, opts.height))
}
