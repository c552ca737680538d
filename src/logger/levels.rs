/// Severity of a log line, most severe first
///
/// The derived ordering follows declaration order, so a configured threshold
/// admits every level that sorts at or before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    /// Gated per tag by `--debug <tag>`
    Debug,
    /// Gated by `--verbose`
    Verbose,
}

impl LogLevel {
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Verbose => "VERBOSE",
        }
    }

    /// Whether this level passes a `threshold` minimum
    pub fn within(self, threshold: LogLevel) -> bool {
        self <= threshold
    }
}
