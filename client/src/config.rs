//! Build-time configuration for the browser bundle.
//!
//! The WASM bundle has no process environment at runtime, so the API origin
//! and request timeout are baked in at compile time from:
//! - `LUASPETS_API_URL`: REST API base URL, default `http://localhost:4000/api`
//! - `LUASPETS_API_TIMEOUT_MS`: per-request timeout, default 10000

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000/api";
pub const DEFAULT_API_TIMEOUT_MS: u64 = 10_000;

/// Settings for the outbound REST request layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash; endpoint paths are appended as-is.
    pub base_url: String,
    /// Upper bound on any single request, including logout.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Resolve the config from compile-time environment variables.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("LUASPETS_API_URL"), option_env!("LUASPETS_API_TIMEOUT_MS"))
    }

    fn resolve(base_url: Option<&str>, timeout_ms: Option<&str>) -> Self {
        Self { base_url: resolve_base_url(base_url), timeout: resolve_timeout(timeout_ms) }
    }

    /// Absolute URL for an endpoint path such as `/auth/login`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

fn resolve_base_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_owned()
}

fn resolve_timeout(raw: Option<&str>) -> Duration {
    let ms = raw
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_API_TIMEOUT_MS);
    Duration::from_millis(ms)
}
