/// Log tags identify the subsystem that emitted a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogTag {
    Api,
    Cache,
    Gateway,
    Highlights,
    Config,
    System,
}

impl LogTag {
    pub const ALL: [LogTag; 6] = [
        LogTag::Api,
        LogTag::Cache,
        LogTag::Gateway,
        LogTag::Highlights,
        LogTag::Config,
        LogTag::System,
    ];

    /// Key used by `--debug <tag>` flags
    pub fn to_debug_key(&self) -> String {
        self.to_plain_string().to_lowercase()
    }

    /// Uncolored label used in log lines
    pub fn to_plain_string(&self) -> String {
        match self {
            LogTag::Api => "API",
            LogTag::Cache => "CACHE",
            LogTag::Gateway => "GATEWAY",
            LogTag::Highlights => "HIGHLIGHT",
            LogTag::Config => "CONFIG",
            LogTag::System => "SYSTEM",
        }
        .to_string()
    }

    pub fn from_debug_key(key: &str) -> Option<LogTag> {
        let key = key.trim().to_lowercase();
        LogTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.to_debug_key() == key || (key == "highlights" && *tag == LogTag::Highlights))
    }
}
