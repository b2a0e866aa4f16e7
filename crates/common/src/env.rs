//! Environment helpers
//!
//! Small typed readers used for config fallbacks when no config file is present.

use std::str::FromStr;

/// Read a string variable, falling back to `default` when unset.
pub fn var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read and parse a variable; unset or unparsable values yield `None`.
pub fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse::<T>().ok())
}

/// Whether a flag variable is set to a truthy value (`1`, `true`, `yes`, `on`).
pub fn flag(key: &str) -> bool {
    matches!(
        std::env::var(key).map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Ok("1" | "true" | "yes" | "on")
    )
}
