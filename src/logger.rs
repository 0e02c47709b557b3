//! Structured logging for the activity pipeline
//!
//! Provides a small leveled logger with per-module tags and colored console
//! output. The library stays quiet by default (minimum level Info, and the
//! pipeline only emits Debug-level diagnostics); raise the level with
//! `set_min_level(LogLevel::Debug)` when chasing a classification issue.
//!
//! ```rust
//! use orbit_activity::logger::{self, LogTag, LogLevel};
//!
//! logger::set_min_level(LogLevel::Debug);
//! logger::debug(LogTag::Rent, "create-account rent map: {...}");
//! ```

use chrono::Local;
use colored::*;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

/// Tag column width for aligned output
const TAG_WIDTH: usize = 10;

// ============================================================================
// LEVELS & TAGS
// ============================================================================

/// Log level, ordered by severity (Error < Warning < Info < Debug < Verbose)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
    Verbose = 4,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Verbose => "VERBOSE",
        }
    }
}

/// Source module tag for each log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTag {
    Summary,
    Rent,
    Filtering,
    Accounts,
    Assets,
}

impl LogTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogTag::Summary => "SUMMARY",
            LogTag::Rent => "RENT",
            LogTag::Filtering => "FILTER",
            LogTag::Accounts => "ACCOUNTS",
            LogTag::Assets => "ASSETS",
        }
    }

    fn colored(&self) -> ColoredString {
        let padded = format!("{:<width$}", self.as_str(), width = TAG_WIDTH);
        match self {
            LogTag::Summary => padded.bright_white().bold(),
            LogTag::Rent => padded.bright_magenta().bold(),
            LogTag::Filtering => padded.bright_yellow().bold(),
            LogTag::Accounts => padded.bright_cyan().bold(),
            LogTag::Assets => padded.bright_green().bold(),
        }
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

struct LoggerConfig {
    min_level: LogLevel,
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> = Lazy::new(|| {
    RwLock::new(LoggerConfig {
        min_level: LogLevel::Info,
    })
});

/// Set the minimum level that gets printed (errors always print)
pub fn set_min_level(level: LogLevel) {
    LOGGER_CONFIG.write().min_level = level;
}

pub fn min_level() -> LogLevel {
    LOGGER_CONFIG.read().min_level
}

fn should_log(level: LogLevel) -> bool {
    // Errors always log
    if level == LogLevel::Error {
        return true;
    }
    level <= min_level()
}

// ============================================================================
// LEVEL FUNCTIONS
// ============================================================================

pub fn error(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Error, message);
}

pub fn warning(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Warning, message);
}

pub fn info(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Info, message);
}

pub fn debug(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Debug, message);
}

pub fn verbose(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Verbose, message);
}

fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    if !should_log(level) {
        return;
    }

    let time = Local::now().format("%H:%M:%S").to_string();
    let level_str = if level == LogLevel::Error {
        level.as_str().bright_red().bold()
    } else {
        level.as_str().white().bold()
    };

    println!(
        "{} [{}] [{}] {}",
        time.dimmed(),
        tag.colored(),
        level_str,
        message
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Error < LogLevel::Warning);
        assert!(LogLevel::Info < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Verbose);
    }

    #[test]
    fn test_errors_always_pass_filter() {
        assert!(should_log(LogLevel::Error));
    }

    #[test]
    fn test_tag_names() {
        assert_eq!(LogTag::Filtering.as_str(), "FILTER");
        assert_eq!(LogTag::Rent.as_str(), "RENT");
    }
}
