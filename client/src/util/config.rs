//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! A WASM bundle has no process environment, so deploy-specific values are
//! baked in by `trunk build` from environment variables and fall back to the
//! local development backend.
//!
//! Optional:
//! - `SEQUOH_API_BASE_URL`: default `http://127.0.0.1:8000/api/auth`
//! - `SEQUOH_PDF_TIMEOUT_SECS`: default 120

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api/auth";
pub const DEFAULT_PDF_TIMEOUT_SECS: u64 = 120;
pub const STATS_REFRESH_SECS: u64 = 60;
pub const TOAST_TTL_MS: u32 = 4_000;
pub const PAGE_SIZE: usize = 10;
pub const MAX_UPLOAD_BYTES: u64 = 100 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Auth API root, without a trailing slash.
    pub api_base_url: String,
    pub pdf_timeout: Duration,
}

impl ClientConfig {
    /// Build config from the values captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_parts(option_env!("SEQUOH_API_BASE_URL"), option_env!("SEQUOH_PDF_TIMEOUT_SECS"))
    }

    fn from_parts(base_url: Option<&str>, pdf_timeout: Option<&str>) -> Self {
        let api_base_url = base_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let pdf_timeout = Duration::from_secs(parse_u64(pdf_timeout, DEFAULT_PDF_TIMEOUT_SECS));
        Self { api_base_url, pdf_timeout }
    }

    /// Server origin, i.e. the base URL with the `/api/auth` suffix removed.
    pub fn origin(&self) -> &str {
        self.api_base_url.strip_suffix("/api/auth").unwrap_or(&self.api_base_url)
    }
}

fn parse_u64(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).filter(|v| *v > 0).unwrap_or(default)
}

/// Process-wide configuration.
pub fn config() -> &'static ClientConfig {
    static CONFIG: std::sync::OnceLock<ClientConfig> = std::sync::OnceLock::new();
    CONFIG.get_or_init(ClientConfig::from_build_env)
}
