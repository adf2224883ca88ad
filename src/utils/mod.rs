//! Utility functions for packinstr

use std::env;

/// Check if a value is truthy
/// Accepts: "1", "true", "on", "yes", "t" (case insensitive)
pub fn is_truthy(val: &str) -> bool {
    matches!(
        val.to_lowercase().as_str(),
        "1" | "true" | "on" | "yes" | "t"
    )
}

/// Check if an environment variable is set to a truthy value
pub fn is_env_true(key: &str) -> bool {
    env::var(key).map(|val| is_truthy(&val)).unwrap_or(false)
}
