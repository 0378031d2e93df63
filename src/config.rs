//! Configuration Sources
//!
//! Gathers the browser storage overrides and the compile-time values, and
//! lets the core crate resolve them.

use gloo::storage::{LocalStorage, Storage};
use stockboard_core::config::{API_BASE_KEY, LOG_LEVEL_KEY, NOTICE_TTL_KEY};
use stockboard_core::{ClientConfig, ConfigSource};

pub fn load() -> ClientConfig {
    let stored = ConfigSource {
        api_base: stored(API_BASE_KEY),
        log_level: stored(LOG_LEVEL_KEY),
        notice_ttl_ms: stored(NOTICE_TTL_KEY),
    };
    let compiled = ConfigSource {
        api_base: option_env!("STOCKBOARD_API_BASE").map(str::to_string),
        log_level: option_env!("STOCKBOARD_LOG").map(str::to_string),
        notice_ttl_ms: option_env!("STOCKBOARD_NOTICE_TTL_MS").map(str::to_string),
    };
    ClientConfig::resolve(&[stored, compiled])
}

/// Raw string value; set from devtools with `localStorage.setItem(key, value)`
fn stored(key: &str) -> Option<String> {
    LocalStorage::raw().get_item(key).ok().flatten()
}
