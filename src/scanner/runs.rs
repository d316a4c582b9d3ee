//! Run-length extraction along a single raster row.

use crate::models::PixelSampler;

use super::ScanState;

/// A closed run of same-colored pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// First pixel of the run
    pub start: usize,
    /// Length in pixels, always > 0
    pub len: usize,
    /// Black run (bar) or not (space)
    pub is_bar: bool,
}

impl Run {
    /// First pixel after the run; the pixel that closed it
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Iterator over the closed runs of row `y`, starting at column `x`.
///
/// A run is only yielded once a pixel of the other color closes it, so a run
/// touching the right edge of the image is never reported.
pub struct RowRuns<'a, S: PixelSampler + ?Sized> {
    sampler: &'a S,
    y: usize,
    x: usize,
    width: usize,
}

impl<'a, S: PixelSampler + ?Sized> RowRuns<'a, S> {
    /// Runs of row `y` from column `x` onwards
    pub fn new(sampler: &'a S, x: usize, y: usize) -> Self {
        Self {
            sampler,
            y,
            x,
            width: sampler.width(),
        }
    }
}

impl<S: PixelSampler + ?Sized> Iterator for RowRuns<'_, S> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        if self.x >= self.width {
            return None;
        }

        let start = self.x;
        let is_bar = self.sampler.is_black(start, self.y);
        while self.x < self.width && self.sampler.is_black(self.x, self.y) == is_bar {
            self.x += 1;
        }

        if self.x >= self.width {
            return None;
        }

        Some(Run {
            start,
            len: self.x - start,
            is_bar,
        })
    }
}

/// Read the next `count` bar lengths from the cursor, ignoring spaces.
///
/// On success the cursor sits on the pixel that closed the last bar. Running
/// off the row first is a failure and leaves the cursor at the row end.
pub fn read_bars<S: PixelSampler + ?Sized>(
    sampler: &S,
    state: &mut ScanState,
    count: usize,
) -> Option<Vec<usize>> {
    let mut bars = Vec::with_capacity(count.min(sampler.width()));
    let mut end = state.x;

    for run in RowRuns::new(sampler, state.x, state.y).filter(|run| run.is_bar) {
        bars.push(run.len);
        end = run.end();
        if bars.len() == count {
            break;
        }
    }

    if bars.len() < count {
        state.x = sampler.width();
        return None;
    }

    state.x = end;
    Some(bars)
}

/// Read the next `count` alternating runs, bars and spaces alike.
///
/// The cursor must sit on the first pixel of the first run. On success it
/// sits on the first pixel after the last run.
pub fn read_runs<S: PixelSampler + ?Sized>(
    sampler: &S,
    state: &mut ScanState,
    count: usize,
) -> Option<Vec<Run>> {
    let runs: Vec<Run> = RowRuns::new(sampler, state.x, state.y).take(count).collect();

    if runs.len() < count {
        state.x = sampler.width();
        return None;
    }

    state.x = runs.last().map_or(state.x, Run::end);
    Some(runs)
}

/// Advance the cursor to the next black pixel on its row
pub fn skip_to_bar<S: PixelSampler + ?Sized>(sampler: &S, state: &mut ScanState) -> bool {
    let width = sampler.width();
    while state.x < width && !sampler.is_black(state.x, state.y) {
        state.x += 1;
    }
    state.x < width
}

/// Raster-scan row by row for the first black pixel
pub fn find_first_bar<S: PixelSampler + ?Sized>(sampler: &S) -> Option<(usize, usize)> {
    (0..sampler.height())
        .find_map(|y| (0..sampler.width()).find(|&x| sampler.is_black(x, y)).map(|x| (x, y)))
}
