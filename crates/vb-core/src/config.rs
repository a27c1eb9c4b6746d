//! Environment Configuration
//!
//! The console reads the process environment exactly once, when it is
//! constructed. Nothing in here is consulted per call.
//!
//! ## Usage
//!
//! ```rust
//! use vb_core::config::console_enabled_from_env;
//!
//! let enabled = console_enabled_from_env();
//! ```

use tracing::{debug, warn};

/// Environment variable that opens the console gate
pub const ENABLE_ENV_VAR: &str = "ENABLE_CONSOLE";

/// Environment variable overriding the detected terminal width
pub const COLUMNS_ENV_VAR: &str = "COLUMNS";

/// Width used when no terminal is attached
pub const FALLBACK_COLUMNS: usize = 80;

/// Whether `ENABLE_CONSOLE` is set to `1`, `yes` or `true` (any case).
pub fn console_enabled_from_env() -> bool {
    let enabled = get_config_bool(ENABLE_ENV_VAR, false);
    debug!("{}={} at startup", ENABLE_ENV_VAR, enabled);
    enabled
}

/// Get a boolean configuration value.
///
/// Only `1`, `yes` and `true` count as true; any other value is false.
pub fn get_config_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| parse_flag(&v))
        .unwrap_or(default)
}

fn parse_flag(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "1" | "yes" | "true")
}

/// Current terminal width in columns.
///
/// `COLUMNS` wins when it holds a positive integer, then the size reported
/// by the attached terminal, then [`FALLBACK_COLUMNS`].
pub fn terminal_columns() -> usize {
    if let Ok(raw) = std::env::var(COLUMNS_ENV_VAR) {
        match raw.trim().parse::<usize>() {
            Ok(columns) if columns > 0 => return columns,
            _ => warn!("Ignoring {}={:?}", COLUMNS_ENV_VAR, raw),
        }
    }

    match crossterm::terminal::size() {
        Ok((columns, _)) if columns > 0 => columns as usize,
        _ => FALLBACK_COLUMNS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("yes"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag("Yes"));
        assert!(!parse_flag("on"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
    }

    #[test]
    #[serial]
    fn test_console_enabled_from_env() {
        std::env::set_var(ENABLE_ENV_VAR, "True");
        assert!(console_enabled_from_env());

        std::env::set_var(ENABLE_ENV_VAR, "nope");
        assert!(!console_enabled_from_env());

        std::env::remove_var(ENABLE_ENV_VAR);
        assert!(!console_enabled_from_env());
    }

    #[test]
    #[serial]
    fn test_terminal_columns_from_env() {
        std::env::set_var(COLUMNS_ENV_VAR, "132");
        assert_eq!(terminal_columns(), 132);

        std::env::set_var(COLUMNS_ENV_VAR, "wide");
        assert!(terminal_columns() > 0);

        std::env::remove_var(COLUMNS_ENV_VAR);
    }
}
