use std::path::PathBuf;

use crate::client::retry::RetryConfig;

#[derive(Clone, Debug)]
pub struct Config {
    /// Catalog API root, e.g. `https://api.dhruva.ai4bharat.org`.
    pub api_base: String,
    pub timeout_secs: u64,
    pub retry: RetryConfig,
    /// When set, models are read from `<dir>/<model_id>.json` instead of the API.
    pub fixture_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: "https://api.dhruva.ai4bharat.org".to_string(),
            timeout_secs: 30,
            retry: RetryConfig::default(),
            fixture_dir: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            api_base: std::env::var("BENCHVIEW_API_BASE").unwrap_or(d.api_base),
            timeout_secs: std::env::var("BENCHVIEW_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(d.timeout_secs),
            retry: RetryConfig {
                max_retries: std::env::var("BENCHVIEW_MAX_RETRIES").ok().and_then(|v| v.parse().ok()).unwrap_or(d.retry.max_retries),
                base_delay_ms: std::env::var("BENCHVIEW_RETRY_BASE_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(d.retry.base_delay_ms),
                ..d.retry
            },
            fixture_dir: std::env::var("BENCHVIEW_FIXTURE_DIR").ok().filter(|v| !v.is_empty()).map(PathBuf::from),
        }
    }
}
