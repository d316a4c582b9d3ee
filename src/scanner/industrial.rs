//! Industrial 2 of 5: every element is a bar, spaces only separate them.
//!
//! The start guard doubles as calibration: its widest bar fixes the wide
//! reference and its thinnest the narrow one for the rest of the symbol.

use crate::models::{DigitCount, FormatSpec, PixelSampler};

use super::classifier::{RunCalibrator, Width};
use super::digits::BarWeightMatrix;
use super::runs::read_bars;
use super::ScanState;

const START_PATTERN: [Width; 3] = [Width::Wide, Width::Wide, Width::Narrow];
const STOP_PATTERN: [Width; 3] = [Width::Wide, Width::Narrow, Width::Wide];

pub(super) fn read_start<S: PixelSampler + ?Sized>(
    sampler: &S,
    format: &FormatSpec,
    state: &mut ScanState,
) -> Option<()> {
    let bars = read_bars(sampler, state, format.start_bar_count)?;

    let mut calibrator = RunCalibrator::new();
    for &bar in &bars {
        calibrator.observe(bar);
    }
    let black = calibrator.finish()?;
    state.black = Some(black);

    black.matches(&bars, &START_PATTERN).then_some(())
}

pub(super) fn read_value<S: PixelSampler + ?Sized>(
    sampler: &S,
    format: &FormatSpec,
    digits: DigitCount,
    state: &mut ScanState,
) -> Option<String> {
    let black = state.black?;
    let bars = read_bars(sampler, state, format.value_bars(digits.get())?)?;

    let matrix = BarWeightMatrix::from_flags(
        format.value_bar_count,
        bars.iter().map(|&bar| black.is_wide(bar)),
    );
    matrix.decode(format)
}

pub(super) fn read_stop<S: PixelSampler + ?Sized>(
    sampler: &S,
    format: &FormatSpec,
    state: &mut ScanState,
) -> Option<()> {
    let black = state.black?;
    let bars = read_bars(sampler, state, format.stop_bar_count)?;
    black.matches(&bars, &STOP_PATTERN).then_some(())
}
