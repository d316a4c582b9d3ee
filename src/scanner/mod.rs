//! Single-row bar/space scanning for the 2-of-5 family
//!
//! A decode walks one raster row through four stages:
//! - seek: first black pixel of the image fixes the row and the cursor
//! - start guard: calibrates wide/narrow references and validates the guard
//! - value: classifies every element and maps weights to digits
//! - stop guard: validates the trailing guard
//!
//! Any stage failing aborts the decode; no partial value is ever returned.

/// Wide/narrow width classification and calibration
pub mod classifier;
/// Positional-weight digit decoding
pub mod digits;
/// Industrial 2 of 5 stage readers
pub mod industrial;
/// Interleaved 2 of 5 stage readers and pre-scan calibration
pub mod interleaved;
/// Run-length extraction along a row
pub mod runs;

pub use classifier::{Width, WidthClassifier};
pub use digits::{decode_digit, BarWeightMatrix};

use crate::models::{DigitCount, PixelSampler, Symbology};
use rayon::prelude::*;
use std::fmt;

/// Mutable cursor and calibration for one decode call
///
/// Created at the start of `ScanEngine::decode` and dropped at its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanState {
    /// Cursor column
    pub x: usize,
    /// Scanned row, fixed by the first black pixel
    pub y: usize,
    /// Black run references, set by the start stage
    pub black: Option<WidthClassifier>,
    /// White run references, Interleaved only
    pub white: Option<WidthClassifier>,
}

impl ScanState {
    /// Fresh state with the cursor at `(x, y)` and no calibration
    pub fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            black: None,
            white: None,
        }
    }
}

/// Pipeline stage, reported in debug output when a decode fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Looking for the first black pixel
    SeekStart,
    /// Start guard
    ReadStart,
    /// Value groups
    ReadValue,
    /// Stop guard
    ReadStop,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::SeekStart => "seek-start",
            Stage::ReadStart => "read-start",
            Stage::ReadValue => "read-value",
            Stage::ReadStop => "read-stop",
        };
        f.write_str(name)
    }
}

/// Decoder for one symbology and digit count
///
/// Holds no per-decode state, so one engine can decode many images, including
/// from several threads at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanEngine {
    symbology: Symbology,
    digits: DigitCount,
}

impl ScanEngine {
    /// Engine with the process default digit count (see `config`)
    pub fn new(symbology: Symbology) -> Self {
        Self {
            symbology,
            digits: DigitCount::new(crate::config::default_digit_count()),
        }
    }

    /// Builder form of `set_digit_count`
    pub fn with_digit_count(mut self, digits: i32) -> Self {
        self.set_digit_count(digits);
        self
    }

    /// Set the number of value groups; anything below 1 becomes 1
    pub fn set_digit_count(&mut self, digits: i32) {
        self.digits = DigitCount::new(digits);
    }

    /// Value groups read per decode
    pub fn digit_count(&self) -> DigitCount {
        self.digits
    }

    /// Symbology this engine decodes
    pub fn symbology(&self) -> Symbology {
        self.symbology
    }

    /// Decode the symbol on the row of the first black pixel.
    ///
    /// Returns exactly `symbology.output_len(digit_count)` digits, or `None`
    /// when the row is missing, truncated, or malformed.
    pub fn decode<S: PixelSampler + ?Sized>(&self, sampler: &S) -> Option<String> {
        let Some((x, y)) = runs::find_first_bar(sampler) else {
            self.report(Stage::SeekStart, None);
            return None;
        };
        let mut state = ScanState::new(x, y);

        let started = self.read_start(sampler, &mut state);
        self.checkpoint(Stage::ReadStart, &state, started)?;

        let value = self.read_value(sampler, &mut state);
        let value = self.checkpoint(Stage::ReadValue, &state, value)?;

        let stopped = self.read_stop(sampler, &mut state);
        self.checkpoint(Stage::ReadStop, &state, stopped)?;

        debug_assert_eq!(value.len(), self.symbology.output_len(self.digits));
        if cfg!(debug_assertions) && crate::debug::debug_enabled() {
            eprintln!(
                "DEBUG: {} decoded '{}' on row {}",
                self.symbology, value, state.y
            );
        }
        Some(value)
    }

    /// Decode independent images in parallel, results in input order
    pub fn decode_batch<S: PixelSampler + Sync>(&self, samplers: &[S]) -> Vec<Option<String>> {
        samplers.par_iter().map(|sampler| self.decode(sampler)).collect()
    }

    fn read_start<S: PixelSampler + ?Sized>(&self, sampler: &S, state: &mut ScanState) -> Option<()> {
        let format = self.symbology.format();
        match self.symbology {
            Symbology::Industrial => industrial::read_start(sampler, format, state),
            Symbology::Interleaved => interleaved::read_start(sampler, format, self.digits, state),
        }
    }

    fn read_value<S: PixelSampler + ?Sized>(
        &self,
        sampler: &S,
        state: &mut ScanState,
    ) -> Option<String> {
        let format = self.symbology.format();
        match self.symbology {
            Symbology::Industrial => industrial::read_value(sampler, format, self.digits, state),
            Symbology::Interleaved => interleaved::read_value(sampler, format, self.digits, state),
        }
    }

    fn read_stop<S: PixelSampler + ?Sized>(&self, sampler: &S, state: &mut ScanState) -> Option<()> {
        let format = self.symbology.format();
        match self.symbology {
            Symbology::Industrial => industrial::read_stop(sampler, format, state),
            Symbology::Interleaved => interleaved::read_stop(sampler, format, state),
        }
    }

    fn checkpoint<T>(&self, stage: Stage, state: &ScanState, result: Option<T>) -> Option<T> {
        if result.is_none() {
            self.report(stage, Some(state));
        }
        result
    }

    fn report(&self, stage: Stage, state: Option<&ScanState>) {
        if !(cfg!(debug_assertions) && crate::debug::debug_enabled()) {
            return;
        }
        match state {
            Some(state) => eprintln!(
                "DEBUG: {} failed at {} (x={}, y={}, black={:?}, white={:?})",
                self.symbology, stage, state.x, state.y, state.black, state.white
            ),
            None => eprintln!("DEBUG: {} failed at {}: no black pixel", self.symbology, stage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BitMatrix;

    /// Industrial "7" (N N N W W) between guards, 2px spaces, 5px quiet zones
    fn industrial_7() -> BitMatrix {
        let widths = [5, 5, 2, 2, 2, 2, 5, 5, 5, 2, 5];
        let total: usize = widths.iter().map(|w| w + 2).sum::<usize>() + 10;
        let mut m = BitMatrix::new(total, 3);
        let mut x = 5;
        for w in widths {
            m.fill_row_span(1, x, x + w, true);
            x += w + 2;
        }
        m
    }

    #[test]
    fn test_blank_image_fails_seek() {
        let engine = ScanEngine::new(Symbology::Industrial);
        assert_eq!(engine.decode(&BitMatrix::new(20, 20)), None);
        assert_eq!(engine.decode(&BitMatrix::new(0, 0)), None);
    }

    #[test]
    fn test_decodes_on_first_black_row() {
        let engine = ScanEngine::new(Symbology::Industrial).with_digit_count(1);
        assert_eq!(engine.decode(&industrial_7()).as_deref(), Some("7"));
    }

    #[test]
    fn test_digit_count_coerced() {
        let mut engine = ScanEngine::new(Symbology::Industrial);
        engine.set_digit_count(0);
        assert_eq!(engine.digit_count().get(), 1);
        engine.set_digit_count(-3);
        assert_eq!(engine.digit_count().get(), 1);
        // a coerced count of 1 still decodes a one-digit symbol
        assert_eq!(engine.decode(&industrial_7()).as_deref(), Some("7"));
    }

    #[test]
    fn test_too_many_digits_requested() {
        let engine = ScanEngine::new(Symbology::Industrial).with_digit_count(2);
        // value stage swallows the stop guard and runs off the row
        assert_eq!(engine.decode(&industrial_7()), None);
    }

    #[test]
    fn test_batch_preserves_order() {
        let engine = ScanEngine::new(Symbology::Industrial).with_digit_count(1);
        let images = vec![industrial_7(), BitMatrix::new(10, 10), industrial_7()];
        assert_eq!(
            engine.decode_batch(&images),
            vec![Some("7".to_string()), None, Some("7".to_string())]
        );
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(Stage::ReadValue.to_string(), "read-value");
        assert_eq!(Stage::SeekStart.to_string(), "seek-start");
    }
}
