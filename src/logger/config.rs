/// Logger configuration shared by all logging calls
use super::levels::LogLevel;
use super::tags::LogTag;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashSet;

/// Stream log lines are written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogOutput {
    #[default]
    Stdout,
    /// Keeps stdout free for command output
    Stderr,
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Minimum level shown (messages above it are dropped)
    pub min_level: LogLevel,
    /// Tags with debug output enabled
    pub debug_tags: HashSet<String>,
    /// Tags with verbose output enabled
    pub verbose_tags: HashSet<String>,
    /// When non-empty, only these tags are shown below error level
    pub enabled_tags: HashSet<String>,
    pub output: LogOutput,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            verbose_tags: HashSet::new(),
            enabled_tags: HashSet::new(),
            output: LogOutput::default(),
        }
    }
}

impl LoggerConfig {
    /// Build from the binary's `--debug`, `--verbose` and `--quiet` flags
    ///
    /// Debug tags are matched against `LogTag::to_debug_key`; `all` enables
    /// every tag. Unknown tags are ignored.
    pub fn from_flags(debug: &[String], verbose: bool, quiet: bool) -> Self {
        let mut config = Self::default();

        for raw in debug {
            if raw.trim().eq_ignore_ascii_case("all") {
                config
                    .debug_tags
                    .extend(LogTag::ALL.iter().map(|tag| tag.to_debug_key()));
            } else if let Some(tag) = LogTag::from_debug_key(raw) {
                config.debug_tags.insert(tag.to_debug_key());
            }
        }

        if !config.debug_tags.is_empty() {
            config.min_level = LogLevel::Debug;
        }
        if verbose {
            config.min_level = LogLevel::Verbose;
        }
        if quiet {
            config.min_level = LogLevel::Warning;
        }

        config
    }

    pub fn with_output(mut self, output: LogOutput) -> Self {
        self.output = output;
        self
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

pub fn get_logger_config() -> LoggerConfig {
    LOGGER_CONFIG.read().clone()
}

pub fn set_logger_config(config: LoggerConfig) {
    *LOGGER_CONFIG.write() = config;
}

pub(crate) fn is_debug_enabled_for_tag(config: &LoggerConfig, tag: &LogTag) -> bool {
    config.debug_tags.contains(&tag.to_debug_key())
}

pub(crate) fn is_verbose_enabled_for_tag(config: &LoggerConfig, tag: &LogTag) -> bool {
    config.verbose_tags.contains(&tag.to_debug_key())
}
