//! Fixed bar layouts for the two 2-of-5 symbologies.

/// Immutable description of a symbology's bar counts and positional weights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    /// Bars in the start guard
    pub start_bar_count: usize,
    /// Slots consumed per encoded digit group
    pub value_bar_count: usize,
    /// Bars in the stop guard
    pub stop_bar_count: usize,
    /// Weight added to a digit when the slot at the same index is wide
    pub bar_weights: &'static [u32],
    /// Slots alternate bar/space and carry two digits per group
    pub interleaved: bool,
}

impl FormatSpec {
    /// Industrial 2 of 5: five bars per digit, spaces carry nothing
    pub const INDUSTRIAL: FormatSpec = FormatSpec::new(3, 5, 3, &[1, 2, 4, 7, 0], false);

    /// Interleaved 2 of 5: bars encode one digit, the spaces between them the next
    pub const INTERLEAVED: FormatSpec =
        FormatSpec::new(2, 10, 2, &[1, 1, 2, 2, 4, 4, 7, 7, 0, 0], true);

    /// Build a layout, panicking on an inconsistent table.
    ///
    /// Every digit must see exactly one zero-weight slot: for interleaved
    /// layouts that holds separately for the even and the odd slots.
    pub const fn new(
        start_bar_count: usize,
        value_bar_count: usize,
        stop_bar_count: usize,
        bar_weights: &'static [u32],
        interleaved: bool,
    ) -> Self {
        assert!(start_bar_count > 0 && stop_bar_count > 0, "guards need at least one bar");
        assert!(
            bar_weights.len() == value_bar_count,
            "one weight per value slot"
        );

        let stride = if interleaved { 2 } else { 1 };
        assert!(value_bar_count % stride == 0, "interleaved groups pair bars with spaces");

        let mut offset = 0;
        while offset < stride {
            let mut zeros = 0;
            let mut i = offset;
            while i < value_bar_count {
                if bar_weights[i] == 0 {
                    zeros += 1;
                }
                i += stride;
            }
            assert!(zeros == 1, "each digit needs exactly one zero-weight slot");
            offset += 1;
        }

        Self {
            start_bar_count,
            value_bar_count,
            stop_bar_count,
            bar_weights,
            interleaved,
        }
    }

    /// Digits produced by one value group
    pub const fn digits_per_group(&self) -> usize {
        if self.interleaved { 2 } else { 1 }
    }

    /// Slots read for each digit inside a group
    pub const fn slots_per_digit(&self) -> usize {
        self.value_bar_count / self.digits_per_group()
    }

    /// Bars (black runs) inside `groups` value groups, `None` on overflow
    pub const fn value_bars(&self, groups: usize) -> Option<usize> {
        self.slots_per_digit().checked_mul(groups)
    }

    /// Bars and spaces inside `groups` value groups, `None` on overflow
    pub const fn value_slots(&self, groups: usize) -> Option<usize> {
        self.value_bar_count.checked_mul(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_layouts() {
        let industrial = FormatSpec::INDUSTRIAL;
        assert_eq!(industrial.digits_per_group(), 1);
        assert_eq!(industrial.slots_per_digit(), 5);
        assert_eq!(industrial.value_bars(3), Some(15));

        let interleaved = FormatSpec::INTERLEAVED;
        assert_eq!(interleaved.digits_per_group(), 2);
        assert_eq!(interleaved.slots_per_digit(), 5);
        assert_eq!(interleaved.value_bars(2), Some(10));
        assert_eq!(interleaved.value_slots(2), Some(20));
        assert_eq!(interleaved.value_slots(usize::MAX), None);
    }

    #[test]
    #[should_panic(expected = "one weight per value slot")]
    fn test_weight_count_mismatch_panics() {
        FormatSpec::new(3, 5, 3, &[1, 2, 4, 0], false);
    }

    #[test]
    #[should_panic(expected = "exactly one zero-weight slot")]
    fn test_missing_parity_slot_panics() {
        FormatSpec::new(3, 5, 3, &[1, 2, 4, 7, 9], false);
    }

    #[test]
    #[should_panic(expected = "exactly one zero-weight slot")]
    fn test_interleaved_parity_per_stream() {
        // both zeros land on even slots
        FormatSpec::new(2, 10, 2, &[1, 1, 2, 2, 4, 4, 0, 7, 0, 7], true);
    }
}
