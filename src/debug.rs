use std::sync::OnceLock;

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Diagnostics are printed when `B25_DEBUG` is set (debug builds only)
pub(crate) fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| std::env::var("B25_DEBUG").is_ok())
}
