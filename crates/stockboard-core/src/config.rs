//! Client Configuration
//!
//! Resolved from, in order: a browser storage override, a value baked in at
//! compile time, and the built-in default.

use log::LevelFilter;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";
pub const DEFAULT_NOTICE_TTL_MS: u32 = 5_000;

/// Storage key overriding the API base URL
pub const API_BASE_KEY: &str = "stockboard.api_base";
/// Storage key overriding the log level
pub const LOG_LEVEL_KEY: &str = "stockboard.log_level";
/// Storage key overriding how long error notices stay up, in milliseconds
pub const NOTICE_TTL_KEY: &str = "stockboard.notice_ttl_ms";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the REST API, without trailing slash
    pub api_base: String,
    pub log_level: LevelFilter,
    /// How long an error notice stays up
    pub notice_ttl_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            log_level: LevelFilter::Info,
            notice_ttl_ms: DEFAULT_NOTICE_TTL_MS,
        }
    }
}

/// One layer of configuration values; unset or blank fields fall through
#[derive(Debug, Clone, Default)]
pub struct ConfigSource {
    pub api_base: Option<String>,
    pub log_level: Option<String>,
    pub notice_ttl_ms: Option<String>,
}

impl ClientConfig {
    /// Merge `sources`, highest priority first, over the defaults.
    pub fn resolve(sources: &[ConfigSource]) -> Self {
        let mut config = Self::default();

        if let Some(base) = sources
            .iter()
            .filter_map(|s| s.api_base.as_deref())
            .map(normalize_base)
            .find(|b| !b.is_empty())
        {
            config.api_base = base;
        }

        if let Some(level) = sources
            .iter()
            .filter_map(|s| s.log_level.as_deref())
            .find_map(|l| l.trim().parse::<LevelFilter>().ok())
        {
            config.log_level = level;
        }

        if let Some(ttl) = sources
            .iter()
            .filter_map(|s| s.notice_ttl_ms.as_deref())
            .filter_map(|t| t.trim().parse::<u32>().ok())
            .find(|t| *t > 0)
        {
            config.notice_ttl_ms = ttl;
        }

        config
    }

    /// Absolute URL for `path` (`"products"`, `"products/3"`, `""`)
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
