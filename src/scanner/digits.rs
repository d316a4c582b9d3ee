//! Positional-weight digit decoding shared by both symbologies.

use crate::models::{BitMatrix, FormatSpec};

/// Wide slots allowed in one digit
const MAX_WIDE_SLOTS: usize = 2;

/// Per-decode grid of wide/narrow classifications, one row per value group
#[derive(Debug, Clone)]
pub struct BarWeightMatrix {
    bits: BitMatrix,
}

impl BarWeightMatrix {
    /// All-narrow grid of `groups` rows by `slots` columns
    pub fn new(groups: usize, slots: usize) -> Self {
        Self {
            bits: BitMatrix::new(slots, groups),
        }
    }

    /// Fill from a flat, group-major sequence of wide flags
    pub fn from_flags(slots: usize, flags: impl IntoIterator<Item = bool>) -> Self {
        let flags: Vec<bool> = flags.into_iter().collect();
        let mut matrix = Self::new(flags.len() / slots.max(1), slots);
        for (i, wide) in flags.into_iter().enumerate() {
            matrix.set(i / slots, i % slots, wide);
        }
        matrix
    }

    /// Number of value groups
    pub fn groups(&self) -> usize {
        self.bits.height()
    }

    /// Slots per group
    pub fn slots(&self) -> usize {
        self.bits.width()
    }

    /// Whether `slot` of `group` was classified wide
    pub fn is_wide(&self, group: usize, slot: usize) -> bool {
        self.bits.get(slot, group)
    }

    /// Record one classification
    pub fn set(&mut self, group: usize, slot: usize, wide: bool) {
        self.bits.set(slot, group, wide);
    }

    /// Decode every group into digits.
    ///
    /// Interleaved layouts yield the even-slot digit before the odd-slot digit
    /// of each group. Any invalid digit fails the whole value.
    pub fn decode(&self, format: &FormatSpec) -> Option<String> {
        let stride = format.digits_per_group();
        let mut value = String::with_capacity(self.groups() * stride);

        for group in 0..self.groups() {
            for offset in 0..stride {
                let slots = (offset..self.slots())
                    .step_by(stride)
                    .map(|slot| (self.is_wide(group, slot), format.bar_weights[slot]));
                value.push(decode_digit(slots)?);
            }
        }

        Some(value)
    }
}

/// Sum the weights of wide slots into one decimal digit.
///
/// More than two wide slots is ambiguous and rejected. A sum above 9 decodes
/// as '0': the 2-of-5 encoding of zero is 4 + 7.
pub fn decode_digit(slots: impl IntoIterator<Item = (bool, u32)>) -> Option<char> {
    let mut sum = 0u32;
    let mut wide_count = 0usize;

    for (wide, weight) in slots {
        if wide {
            sum += weight;
            wide_count += 1;
        }
    }

    if wide_count > MAX_WIDE_SLOTS {
        return None;
    }
    if sum > 9 {
        sum = 0;
    }

    char::from_digit(sum, 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn industrial(flags: [bool; 5]) -> Option<char> {
        decode_digit(flags.into_iter().zip(FormatSpec::INDUSTRIAL.bar_weights.iter().copied()))
    }

    #[test]
    fn test_standard_digits() {
        const T: bool = true;
        const F: bool = false;
        assert_eq!(industrial([T, F, F, F, T]), Some('1'));
        assert_eq!(industrial([F, T, F, F, T]), Some('2'));
        assert_eq!(industrial([T, T, F, F, F]), Some('3'));
        assert_eq!(industrial([F, F, T, F, T]), Some('4'));
        assert_eq!(industrial([T, F, T, F, F]), Some('5'));
        assert_eq!(industrial([F, T, T, F, F]), Some('6'));
        assert_eq!(industrial([F, F, F, T, T]), Some('7'));
        assert_eq!(industrial([T, F, F, T, F]), Some('8'));
        assert_eq!(industrial([F, T, F, T, F]), Some('9'));
    }

    #[test]
    fn test_overweight_clamps_to_zero() {
        // 4 + 7 = 11, the encoding of zero
        assert_eq!(industrial([false, false, true, true, false]), Some('0'));
        // 2 + 7 + 1 would be 10 but three wide slots fail first
        assert_eq!(industrial([true, true, false, true, false]), None);
        assert_eq!(decode_digit([(true, 6), (true, 4)]), Some('0'));
    }

    #[test]
    fn test_three_wide_slots_fail() {
        // slots 1, 2 and 4 wide
        assert_eq!(industrial([false, true, true, false, true]), None);
    }

    #[test]
    fn test_matrix_interleaved_order() {
        // group: bars encode 3 (slots 0,1 -> flags 0,2), spaces encode 7 (slots 3,4 -> flags 7,9)
        let flags = [true, false, true, false, false, false, false, true, false, true];
        let matrix = BarWeightMatrix::from_flags(10, flags);
        assert_eq!(matrix.groups(), 1);
        assert_eq!(matrix.decode(&FormatSpec::INTERLEAVED), Some("37".to_string()));
    }

    #[test]
    fn test_matrix_fails_on_any_bad_digit() {
        let mut matrix = BarWeightMatrix::new(2, 5);
        matrix.set(0, 0, true);
        matrix.set(0, 4, true); // '1'
        for slot in [0, 1, 2] {
            matrix.set(1, slot, true);
        }
        assert!(matrix.is_wide(1, 2));
        assert_eq!(matrix.decode(&FormatSpec::INDUSTRIAL), None);
    }
}
