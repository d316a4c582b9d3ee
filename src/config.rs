//! Process-wide defaults read once from the environment.

use std::sync::OnceLock;

fn parse_env_i32(name: &str, default: i32) -> i32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<i32>().ok())
        .unwrap_or(default)
}

fn parse_env_u8(name: &str, default: u8) -> u8 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .unwrap_or(default)
}

static DEFAULT_DIGITS: OnceLock<i32> = OnceLock::new();

/// Digit count used when a caller does not configure one (`B25_DEFAULT_DIGITS`)
pub fn default_digit_count() -> i32 {
    *DEFAULT_DIGITS.get_or_init(|| parse_env_i32("B25_DEFAULT_DIGITS", 1).max(1))
}

static MONO_THRESHOLD: OnceLock<u8> = OnceLock::new();

/// Gray level at or above which a pixel turns white (`B25_MONO_THRESHOLD`)
pub fn mono_threshold() -> u8 {
    *MONO_THRESHOLD.get_or_init(|| parse_env_u8("B25_MONO_THRESHOLD", 126))
}
