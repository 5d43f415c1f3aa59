use ghfetch_core::{GhfetchError, GhfetchResult};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Overrides the GitHub API base URL (GitHub Enterprise, test servers)
pub const API_URL_ENV: &str = "GHFETCH_API_URL";

/// Request timeout in whole seconds; unset means no timeout
pub const TIMEOUT_ENV: &str = "GHFETCH_TIMEOUT_SECS";

/// Runtime configuration
///
/// Nothing is persisted. Values come from defaults, then the environment,
/// then command-line flags applied by the caller.
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub API base URL, without a trailing slash
    pub api_url: String,

    /// Sent as `User-Agent`, which the GitHub API requires
    pub user_agent: String,

    /// Applied to the HTTP client when set
    pub timeout: Option<Duration>,

    /// Directory downloads are written to
    pub output_dir: PathBuf,

    /// Whether to draw a progress bar while downloading
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: default_user_agent(),
            timeout: None,
            output_dir: PathBuf::from("."),
            show_progress: true,
        }
    }
}

fn default_user_agent() -> String {
    format!("ghfetch/{}", env!("CARGO_PKG_VERSION"))
}

impl Config {
    /// Defaults overlaid with `GHFETCH_*` environment variables
    pub fn from_env() -> GhfetchResult<Self> {
        let mut config = Self::default();

        if let Ok(api_url) = env::var(API_URL_ENV) {
            config = config.with_api_url(&api_url)?;
        }

        if let Ok(timeout) = env::var(TIMEOUT_ENV) {
            config.timeout = Some(parse_timeout(&timeout)?);
        }

        Ok(config)
    }

    pub fn with_api_url(mut self, api_url: &str) -> GhfetchResult<Self> {
        let api_url = api_url.trim().trim_end_matches('/');
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(GhfetchError::Config(format!(
                "{} must be an http(s) URL, got '{}'",
                API_URL_ENV, api_url
            )));
        }
        self.api_url = api_url.to_string();
        Ok(self)
    }
}

/// Parse a timeout given in whole seconds
pub fn parse_timeout(value: &str) -> GhfetchResult<Duration> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(GhfetchError::Config(format!(
            "timeout must be a positive number of seconds, got '{}'",
            value
        ))),
    }
}
