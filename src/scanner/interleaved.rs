//! Interleaved 2 of 5: bars encode one digit, the spaces between them the next.
//!
//! Both bar and space widths carry data, so the whole symbol is pre-scanned
//! once to calibrate separate black and white references before any guard is
//! validated.

use crate::models::{DigitCount, FormatSpec, PixelSampler};

use super::classifier::{Width, WidthClassifier};
use super::digits::BarWeightMatrix;
use super::runs::{read_bars, read_runs, skip_to_bar, RowRuns};
use super::ScanState;

const START_PATTERN: [Width; 2] = [Width::Narrow, Width::Narrow];
const STOP_PATTERN: [Width; 2] = [Width::Wide, Width::Narrow];

/// Black and white references measured over the whole symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calibration {
    /// References for bars
    pub black: WidthClassifier,
    /// References for spaces inside the value groups
    pub white: WidthClassifier,
}

/// Walk the row from the cursor without moving it and calibrate.
///
/// Every bar is measured, spaces only inside the value groups. The walk
/// stops once `start + stop + value * digits` elements were counted; a row
/// that ends first fails.
pub fn pre_scan<S: PixelSampler + ?Sized>(
    sampler: &S,
    format: &FormatSpec,
    digits: DigitCount,
    state: &ScanState,
) -> Option<Calibration> {
    let groups = digits.get();
    let max_bar_num = format
        .value_slots(groups)?
        .checked_add(format.start_bar_count + format.stop_bar_count)?;
    let value_bars_end = format.value_bars(groups)?.checked_add(format.start_bar_count)?;

    // no row holds more runs than pixels
    let capacity = max_bar_num.min(sampler.width());
    let mut black_runs = Vec::with_capacity(capacity);
    let mut white_runs = Vec::with_capacity(capacity);
    let mut bars_seen = 0;
    let mut counted = 0;

    for run in RowRuns::new(sampler, state.x, state.y) {
        if run.is_bar {
            black_runs.push(run.len);
            bars_seen += 1;
            counted += 1;
        } else if bars_seen > format.start_bar_count && bars_seen <= value_bars_end {
            white_runs.push(run.len);
            counted += 1;
        }

        if counted == max_bar_num {
            break;
        }
    }

    if counted < max_bar_num {
        return None;
    }

    Some(Calibration {
        black: WidthClassifier::from_runs(&black_runs)?,
        white: WidthClassifier::from_runs(&white_runs)?,
    })
}

pub(super) fn read_start<S: PixelSampler + ?Sized>(
    sampler: &S,
    format: &FormatSpec,
    digits: DigitCount,
    state: &mut ScanState,
) -> Option<()> {
    let calibration = pre_scan(sampler, format, digits, state)?;
    state.black = Some(calibration.black);
    state.white = Some(calibration.white);

    let bars = read_bars(sampler, state, format.start_bar_count)?;
    calibration.black.matches(&bars, &START_PATTERN).then_some(())
}

pub(super) fn read_value<S: PixelSampler + ?Sized>(
    sampler: &S,
    format: &FormatSpec,
    digits: DigitCount,
    state: &mut ScanState,
) -> Option<String> {
    let black = state.black?;
    let white = state.white?;

    if !skip_to_bar(sampler, state) {
        return None;
    }

    let runs = read_runs(sampler, state, format.value_slots(digits.get())?)?;
    let matrix = BarWeightMatrix::from_flags(
        format.value_bar_count,
        runs.iter().map(|run| {
            if run.is_bar {
                black.is_wide(run.len)
            } else {
                white.is_wide(run.len)
            }
        }),
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
