//! Wide/narrow classification against calibrated reference widths.

/// Expected class of one guard element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// Closer to the wide reference
    Wide,
    /// Closer to the narrow reference
    Narrow,
}

/// Classifies measured run lengths against a calibrated wide/narrow pair.
///
/// A value only exists after calibration, so nothing can be classified
/// against uncalibrated references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthClassifier {
    wide: usize,
    narrow: usize,
}

impl WidthClassifier {
    /// Build from explicit references; `wide` must not be below `narrow`
    pub fn new(wide: usize, narrow: usize) -> Self {
        debug_assert!(wide >= narrow, "wide reference {wide} below narrow {narrow}");
        Self { wide, narrow }
    }

    /// Calibrate from a set of runs: widest run is wide, thinnest is narrow
    pub fn from_runs(runs: &[usize]) -> Option<Self> {
        let wide = runs.iter().copied().max()?;
        let narrow = runs.iter().copied().min()?;
        Some(Self { wide, narrow })
    }

    /// Wide reference length
    pub fn wide(&self) -> usize {
        self.wide
    }

    /// Narrow reference length
    pub fn narrow(&self) -> usize {
        self.narrow
    }

    /// Strictly closer to the wide reference.
    ///
    /// A run exactly halfway between the references is neither wide nor
    /// narrow; decoders treat it as "not wide".
    pub fn is_wide(&self, measured: usize) -> bool {
        measured.abs_diff(self.wide) < measured.abs_diff(self.narrow)
    }

    /// Strictly closer to the narrow reference
    pub fn is_narrow(&self, measured: usize) -> bool {
        measured.abs_diff(self.wide) > measured.abs_diff(self.narrow)
    }

    /// Check a guard pattern element by element; lengths must agree
    pub fn matches(&self, runs: &[usize], pattern: &[Width]) -> bool {
        runs.len() == pattern.len()
            && runs.iter().zip(pattern).all(|(&run, width)| match width {
                Width::Wide => self.is_wide(run),
                Width::Narrow => self.is_narrow(run),
            })
    }
}

/// Running min/max over bars seen so far, for inline calibration
#[derive(Debug, Clone, Copy, Default)]
pub struct RunCalibrator {
    bounds: Option<(usize, usize)>,
}

impl RunCalibrator {
    /// Calibrator with no runs observed
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one run length into the running bounds
    pub fn observe(&mut self, run: usize) {
        self.bounds = Some(match self.bounds {
            Some((narrow, wide)) => (narrow.min(run), wide.max(run)),
            None => (run, run),
        });
    }

    /// Freeze the bounds; `None` until at least one run was observed
    pub fn finish(&self) -> Option<WidthClassifier> {
        self.bounds
            .map(|(narrow, wide)| WidthClassifier::new(wide, narrow))
    }
}
