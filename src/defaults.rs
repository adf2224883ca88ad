// src/defaults.rs
// Centralized default values and their environment overrides

use crate::utils::is_env_true;
use std::env;

// =================================
// Environment variables
// =================================
pub const ENV_LOG_LEVEL: &str = "PACKINSTR_LOG_LEVEL";
pub const ENV_LOG_PATH: &str = "PACKINSTR_LOG_PATH";
pub const ENV_FORMAT: &str = "PACKINSTR_FORMAT";
pub const ENV_PRETTY: &str = "PACKINSTR_PRETTY";

// =================================
// Logging defaults
// =================================
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// =================================
// Output defaults
// =================================
pub const DEFAULT_OUTPUT_FORMAT: &str = "xml";
pub const DEFAULT_PRETTY: bool = false;

/// Output format for a rendered packing instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Server XML protocol text
    #[default]
    Xml,
    /// Structural JSON dump of the tag tree
    Json,
}

impl OutputFormat {
    /// Parse output format from string (case insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "xml" => Some(Self::Xml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Xml => "xml",
            OutputFormat::Json => "json",
        }
    }
}

/// Get the output format from environment or default
pub fn get_output_format() -> OutputFormat {
    if let Ok(val) = env::var(ENV_FORMAT) {
        if let Some(format) = OutputFormat::parse(&val) {
            return format;
        }
        log::warn!("⚠️ Ignoring unknown {ENV_FORMAT} value: {val}");
    }

    OutputFormat::parse(DEFAULT_OUTPUT_FORMAT).unwrap_or_default()
}

/// Whether JSON output should be pretty-printed
pub fn get_pretty() -> bool {
    if env::var_os(ENV_PRETTY).is_some() {
        return is_env_true(ENV_PRETTY);
    }
    DEFAULT_PRETTY
}

/// Log level from environment or default
pub fn get_log_level() -> String {
    env::var(ENV_LOG_LEVEL).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
}
