//! Client configuration.
//!
//! The browser bundle has no process environment, so values are captured
//! from the build environment (`option_env!`) when the WASM crate compiles.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

pub const API_BASE_URL_VAR: &str = "FINTRACK_API_BASE_URL";
pub const LOG_LEVEL_VAR: &str = "FINTRACK_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST API root, without trailing slash.
    pub api_base_url: String,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), log_level: DEFAULT_LOG_LEVEL }
    }
}

impl ClientConfig {
    /// Build config from a key lookup.
    ///
    /// Optional:
    /// - `FINTRACK_API_BASE_URL`: default `http://localhost:8000/api`
    /// - `FINTRACK_LOG_LEVEL`: `error`..`trace`, default `info`
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup(API_BASE_URL_VAR)
            .map(|v| v.trim().trim_end_matches('/').to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());
        let log_level = parse_log_level(lookup(LOG_LEVEL_VAR).as_deref());
        Self { api_base_url, log_level }
    }

    /// Config baked in at compile time.
    pub fn from_build_env() -> Self {
        Self::from_vars(|key| match key {
            API_BASE_URL_VAR => option_env!("FINTRACK_API_BASE_URL").map(str::to_owned),
            LOG_LEVEL_VAR => option_env!("FINTRACK_LOG_LEVEL").map(str::to_owned),
            _ => None,
        })
    }
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(DEFAULT_LOG_LEVEL)
}
