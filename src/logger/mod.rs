//! Structured console logging for coinscreener
//!
//! This module provides a small, tag-aware logging API with:
//! - Standard log levels (Error/Warning/Info/Debug/Verbose)
//! - Per-tag debug control via `--debug <tag,...>`
//! - Colored console output with word wrapping
//!
//! ## Usage
//!
//! ```rust
//! use coinscreener::logger::{self, LogTag};
//!
//! logger::error(LogTag::Api, "Connection failed");
//! logger::warning(LogTag::Highlights, "Trending query failed");
//! logger::info(LogTag::System, "Dashboard snapshot ready");
//! logger::debug(LogTag::Cache, "Cache HIT for key: trending_coins"); // Only with --debug cache
//! logger::verbose(LogTag::Api, "Raw payload: ..."); // Only with --verbose
//! ```
//!
//! ## Initialization
//!
//! Call once at startup with the flags parsed by the binary:
//! ```rust
//! use coinscreener::logger::{self, LoggerConfig};
//!
//! logger::init(LoggerConfig::from_flags(&["api".to_string()], false, false));
//! ```
//!
//! Without initialization the default configuration applies (info and above,
//! no debug tags).

mod config;
mod core;
mod format;
mod levels;
mod tags;

pub use config::{get_logger_config, set_logger_config, LogOutput, LoggerConfig};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger system with an explicit configuration
pub fn init(config: LoggerConfig) {
    set_logger_config(config);
}

/// Log at ERROR level (always shown, critical issues)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (important issues)
///
/// Warnings are shown by default (also with --quiet).
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (standard operations)
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level (detailed diagnostics)
///
/// Debug logs are ONLY shown when the tag was enabled with `--debug <tag>`.
///
/// # Example
/// ```rust
/// use coinscreener::logger::{self, LogTag};
///
/// // Only shown with --debug api
/// logger::debug(LogTag::Api, "API Request: GET https://api.coingecko.com/api/v3/search/trending");
/// ```
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level (very detailed tracing)
///
/// Verbose logs are ONLY shown when --verbose is provided.
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}
