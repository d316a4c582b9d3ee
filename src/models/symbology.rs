use super::FormatSpec;
use std::fmt;
use std::str::FromStr;

/// The closed set of supported 2-of-5 variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbology {
    /// Industrial (non-interleaved) 2 of 5, bars only
    Industrial,
    /// Interleaved 2 of 5 (ITF), bars and spaces
    Interleaved,
}

impl Symbology {
    /// Bar layout for this symbology
    pub fn format(&self) -> &'static FormatSpec {
        match self {
            Symbology::Industrial => &FormatSpec::INDUSTRIAL,
            Symbology::Interleaved => &FormatSpec::INTERLEAVED,
        }
    }

    /// Length of a successful decode for `digits` configured value groups
    pub fn output_len(&self, digits: DigitCount) -> usize {
        digits.get() * self.format().digits_per_group()
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbology::Industrial => write!(f, "industrial"),
            Symbology::Interleaved => write!(f, "interleaved"),
        }
    }
}

/// Unknown symbology name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSymbologyError(String);

impl fmt::Display for ParseSymbologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown symbology '{}' (expected industrial or interleaved)",
            self.0
        )
    }
}

impl std::error::Error for ParseSymbologyError {}

impl FromStr for Symbology {
    type Err = ParseSymbologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "industrial" | "industrial2of5" | "2of5" | "s25" => Ok(Symbology::Industrial),
            "interleaved" | "interleaved2of5" | "itf" | "i25" | "i2of5" => {
                Ok(Symbology::Interleaved)
            }
            _ => Err(ParseSymbologyError(s.to_string())),
        }
    }
}

/// Number of value groups to read, never less than one
///
/// For Industrial this is the number of digits; for Interleaved each group
/// yields a pair of digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DigitCount(usize);

impl DigitCount {
    /// Clamp a caller-supplied count to at least 1
    pub fn new(value: i32) -> Self {
        Self(value.max(1) as usize)
    }

    /// The clamped count
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for DigitCount {
    fn default() -> Self {
        Self(1)
    }
}

impl From<i32> for DigitCount {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}
