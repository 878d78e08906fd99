use crate::error::GameError;
use chrono::Local;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::OnceLock;

/// Log topics that can be selected with `--debug-filter`.
pub const TOPICS: [&str; 5] = ["game", "gun", "input", "physics", "target"];

// Custom logger structure
#[derive(Debug)]
struct GunneryLogger {
    level: LevelFilter,
    debug_filters: Option<HashSet<String>>,
}

impl GunneryLogger {
    fn format_record(&self, record: &Record) -> String {
        let level_color = match record.level() {
            log::Level::Error => "\x1B[31m", // Red
            log::Level::Warn => "\x1B[33m",  // Yellow
            log::Level::Info => "\x1B[32m",  // Green
            log::Level::Debug => "\x1B[36m", // Cyan
            log::Level::Trace => "\x1B[35m", // Magenta
        };
        let reset = "\x1B[0m";
        let timestamp = Local::now().format("%H:%M:%S%.3f");

        let mut output = format!(
            "{timestamp} {level_color}{level:5}{reset} {target}: {message}",
            level = record.level(),
            target = record.target(),
            message = record.args()
        );

        // Add module path if available and different from target
        if let Some(module_path) = record.module_path() {
            if module_path != record.target() {
                output.push_str(&format!(" [{}]", module_path));
            }
        }
        output
    }
}

impl log::Log for GunneryLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > self.level {
            return false;
        }
        // Debug and trace output is limited to the selected topics
        if let Some(filters) = &self.debug_filters {
            if metadata.level() >= log::Level::Debug {
                return filters.contains(metadata.target())
                    || filters.iter().any(|f| metadata.target().starts_with(f.as_str()));
            }
        }
        true
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut stdout = io::stdout().lock();
            // Nothing sensible to do if stdout is gone
            let _ = writeln!(stdout, "{}", self.format_record(record));
            let _ = stdout.flush();
        }
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

static LOGGER: OnceLock<GunneryLogger> = OnceLock::new();

fn parse_debug_filter(filter: &str) -> HashSet<String> {
    filter
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parses a `--log-level` value.
pub fn parse_log_level(value: &str) -> Result<LevelFilter, GameError> {
    match value.to_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        _ => Err(GameError::InvalidLogLevel(value.to_string())),
    }
}

// Initialize the logger with optional debug filters
pub fn init_logger(level: LevelFilter, debug_filter: Option<String>) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| GunneryLogger {
        level,
        debug_filters: debug_filter.as_deref().map(parse_debug_filter),
    });
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

// Helper macros for specific debug topics
#[macro_export]
macro_rules! debug_game {
    ($($arg:tt)*) => {
        log::debug!(target: "game", "{}", format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_gun {
    ($($arg:tt)*) => {
        log::debug!(target: "gun", "{}", format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_input {
    ($($arg:tt)*) => {
        log::trace!(target: "input", "{}", format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_physics {
    ($($arg:tt)*) => {
        log::trace!(target: "physics", "{}", format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_target {
    ($($arg:tt)*) => {
        log::debug!(target: "target", "{}", format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, MetadataBuilder};

    fn logger(level: LevelFilter, filter: Option<&str>) -> GunneryLogger {
        GunneryLogger {
            level,
            debug_filters: filter.map(parse_debug_filter),
        }
    }

    fn metadata(level: Level, target: &str) -> Metadata<'_> {
        MetadataBuilder::new().level(level).target(target).build()
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("info").unwrap(), LevelFilter::Info);
        assert_eq!(parse_log_level("TRACE").unwrap(), LevelFilter::Trace);
        assert_eq!(parse_log_level("Off").unwrap(), LevelFilter::Off);
        assert!(matches!(
            parse_log_level("loud"),
            Err(GameError::InvalidLogLevel(ref value)) if value == "loud"
        ));
    }

    #[test]
    fn test_parse_debug_filter() {
        let filters = parse_debug_filter("gun, physics,,target ");
        assert_eq!(filters.len(), 3);
        assert!(filters.contains("gun"));
        assert!(filters.contains("physics"));
        assert!(filters.contains("target"));
    }

    #[test]
    fn test_level_threshold() {
        let logger = logger(LevelFilter::Info, None);
        assert!(logger.enabled(&metadata(Level::Error, "game")));
        assert!(logger.enabled(&metadata(Level::Info, "game")));
        assert!(!logger.enabled(&metadata(Level::Debug, "game")));
    }

    #[test]
    fn test_topic_filter_applies_to_debug_only() {
        let logger = logger(LevelFilter::Trace, Some("gun,physics"));
        assert!(logger.enabled(&metadata(Level::Debug, "gun")));
        assert!(logger.enabled(&metadata(Level::Trace, "physics")));
        assert!(!logger.enabled(&metadata(Level::Debug, "target")));
        assert!(!logger.enabled(&metadata(Level::Trace, "input")));
        // Info and above always pass
        assert!(logger.enabled(&metadata(Level::Info, "target")));
        assert!(logger.enabled(&metadata(Level::Warn, "gunnery::render")));
    }

    #[test]
    fn test_format_includes_target_and_message() {
        let logger = logger(LevelFilter::Info, None);
        let line = logger.format_record(
            &Record::builder()
                .level(Level::Info)
                .target("game")
                .module_path(Some("gunnery::game"))
                .args(format_args!("Target destroyed after {} shots", 3))
                .build(),
        );
        assert!(line.contains("game: Target destroyed after 3 shots"));
        assert!(line.ends_with(" [gunnery::game]"));
    }
}
