//! JSON structured logging for packinstr binaries

use crate::defaults::{ENV_LOG_PATH, get_log_level};
use chrono::{Local, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record};
use serde_json::json;
use std::env;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

/// JSON logger writing one object per record to a file or stderr
#[derive(Debug)]
pub struct JsonLogger {
    level: Level,
    target_file: Mutex<Option<File>>,
}

/// Split a level spec like "json:debug" into (use_json, level)
fn parse_level_spec(spec: &str) -> (bool, &str) {
    if let Some(stripped) = spec.strip_prefix("json:") {
        (true, stripped)
    } else if spec == "json" {
        (true, "info")
    } else {
        (false, spec)
    }
}

fn level_filter(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Warn,
    }
}

impl JsonLogger {
    /// Create a new JSON logger; records go to stderr if the file cannot be opened
    pub fn new(level: Level, log_path: Option<&Path>) -> Self {
        let target_file =
            log_path.and_then(|path| OpenOptions::new().create(true).append(true).open(path).ok());

        JsonLogger {
            level,
            target_file: Mutex::new(target_file),
        }
    }

    /// Initialize logging from a level spec.
    ///
    /// Plain levels use `env_logger` with a human format. A `json:` prefix
    /// installs the JSON logger instead. Returns the effective level.
    pub fn init_with_level(level_spec: &str) -> String {
        let (use_json, actual_level) = parse_level_spec(level_spec);
        let filter = level_filter(actual_level);

        if !use_json {
            let result = env_logger::Builder::new()
                .filter_level(filter)
                .format(|buf, record| {
                    writeln!(
                        buf,
                        "[{} {} {}] {}",
                        Local::now().format("%Y-%m-%dT%H:%M:%S%z"),
                        record.level(),
                        record.target(),
                        record.args()
                    )
                })
                .try_init();
            if let Err(e) = result {
                eprintln!("Failed to initialize logger: {e}");
            }
            return actual_level.to_string();
        }

        // "off" installs no logger
        let Some(level) = filter.to_level() else {
            log::set_max_level(LevelFilter::Off);
            return actual_level.to_string();
        };

        let log_path = env::var(ENV_LOG_PATH).ok();
        let logger = Box::new(JsonLogger::new(level, log_path.as_deref().map(Path::new)));

        if let Err(e) = log::set_boxed_logger(logger) {
            eprintln!("Failed to initialize JSON logger: {e}");
            return actual_level.to_string();
        }

        log::set_max_level(filter);
        actual_level.to_string()
    }

    /// Initialize logging from `PACKINSTR_LOG_LEVEL` or the default level
    pub fn init() -> String {
        Self::init_with_level(&get_log_level())
    }

    /// Encode a record as a single JSON line
    fn format_record(record: &Record<'_>) -> String {
        let entry = json!({
            "@timestamp": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
            "@level": record.level().to_string().to_lowercase(),
            "@message": record.args().to_string(),
            "@module": record.target(),
            "@pid": std::process::id(),
            "@file": record.file().unwrap_or("unknown"),
            "@line": record.line().unwrap_or(0),
        });
        format!("{entry}\n")
    }
}

impl Log for JsonLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = Self::format_record(record);

        if let Ok(mut file_guard) = self.target_file.lock() {
            if let Some(file) = file_guard.as_mut() {
                let _ = file.write_all(line.as_bytes());
                let _ = file.flush();
                return;
            }
        }

        let mut stderr = io::stderr().lock();
        let _ = stderr.write_all(line.as_bytes());
        let _ = stderr.flush();
    }

    fn flush(&self) {
        if let Ok(mut file_guard) = self.target_file.lock() {
            if let Some(file) = file_guard.as_mut() {
                let _ = file.flush();
            }
        }
        let _ = io::stderr().flush();
    }
}

/// Helper to check if JSON logging is enabled
pub fn is_json_logging(level_spec: &str) -> bool {
    parse_level_spec(level_spec).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_level_spec() {
        assert_eq!(parse_level_spec("json:debug"), (true, "debug"));
        assert_eq!(parse_level_spec("json"), (true, "info"));
        assert_eq!(parse_level_spec("trace"), (false, "trace"));
        assert!(is_json_logging("json:warn"));
        assert!(!is_json_logging("warn"));
    }

    #[test]
    fn test_level_filter_falls_back_to_warn() {
        assert_eq!(level_filter("debug"), LevelFilter::Debug);
        assert_eq!(level_filter("off"), LevelFilter::Off);
        assert_eq!(level_filter("loud"), LevelFilter::Warn);
    }

    #[test]
    fn test_level_filter_ignores_case() {
        assert_eq!(level_filter("DEBUG"), LevelFilter::Debug);
        assert_eq!(level_filter("Trace"), LevelFilter::Trace);
        assert_eq!(level_filter("OFF"), LevelFilter::Off);
        assert_eq!(parse_level_spec("json:ERROR"), (true, "ERROR"));
        assert_eq!(level_filter(parse_level_spec("json:ERROR").1), LevelFilter::Error);
    }

    #[test]
    fn test_writes_json_lines_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("packinstr.log");
        let logger = JsonLogger::new(Level::Debug, Some(path.as_path()));

        logger.log(
            &Record::builder()
                .args(format_args!("packed {}", "CollInpNew_PI"))
                .level(Level::Debug)
                .target("packinstr::protocol")
                .file(Some("coll_inp.rs"))
                .line(Some(42))
                .build(),
        );
        // Filtered out: above the logger's level
        logger.log(
            &Record::builder()
                .args(format_args!("too chatty"))
                .level(Level::Trace)
                .build(),
        );
        logger.flush();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 1);

        let entry: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(entry["@level"], "debug");
        assert_eq!(entry["@message"], "packed CollInpNew_PI");
        assert_eq!(entry["@module"], "packinstr::protocol");
        assert_eq!(entry["@file"], "coll_inp.rs");
        assert_eq!(entry["@line"], 42);
    }
}
