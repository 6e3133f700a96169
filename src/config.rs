//! Client configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

const APP_DIR: &str = "deskchat";
const SESSION_FILE_NAME: &str = "session.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base origin of the support backend, without a trailing slash.
    pub base_url: String,
    /// Path of the persisted session transcript.
    pub session_file: PathBuf,
    pub timeouts: Timeouts,
}

impl ClientConfig {
    /// Build client config from environment variables.
    ///
    /// Optional:
    /// - `SUPPORT_BASE_URL`: default `http://127.0.0.1:8000`
    /// - `SUPPORT_SESSION_FILE`: default `<cache dir>/deskchat/session.json`
    /// - `SUPPORT_REQUEST_TIMEOUT_SECS`: default 30
    /// - `SUPPORT_CONNECT_TIMEOUT_SECS`: default 10
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: normalize_base_url(std::env::var("SUPPORT_BASE_URL").ok().as_deref()),
            session_file: std::env::var("SUPPORT_SESSION_FILE")
                .map_or_else(|_| default_session_file(), PathBuf::from),
            timeouts: Timeouts {
                request_secs: env_parse_u64("SUPPORT_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
                connect_secs: env_parse_u64("SUPPORT_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
            },
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            session_file: default_session_file(),
            timeouts: Timeouts {
                request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            },
        }
    }
}

/// Default session file location, scoped to the current user.
#[must_use]
pub fn default_session_file() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
        .join(SESSION_FILE_NAME)
}

fn normalize_base_url(raw: Option<&str>) -> String {
    raw.unwrap_or(DEFAULT_BASE_URL).trim_end_matches('/').to_owned()
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
