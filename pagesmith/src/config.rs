//! Engine configuration.
//!
//! ```rust
//! use std::time::Duration;
//!
//! use pagesmith::EngineConfig;
//!
//! let config = EngineConfig::new("https://pdf.example.com")
//!     .with_timeout(Duration::from_secs(30));
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.download_base(), "https://pdf.example.com");
//! ```

use std::time::Duration;

use presult::{DEFAULT_PREVIEW_MAX_CHARS, DEFAULT_PREVIEW_MAX_LINES, PreviewLimits};

use crate::EngineError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

pub const BASE_URL_VAR: &str = "PAGESMITH_BASE_URL";
pub const DOWNLOAD_BASE_URL_VAR: &str = "PAGESMITH_DOWNLOAD_BASE_URL";
pub const TIMEOUT_SECS_VAR: &str = "PAGESMITH_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub base_url: String,
    pub download_base_url: Option<String>,
    pub timeout: Duration,
    pub preview_max_lines: usize,
    pub preview_max_chars: usize,
}

impl EngineConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            download_base_url: None,
            timeout: DEFAULT_TIMEOUT,
            preview_max_lines: DEFAULT_PREVIEW_MAX_LINES,
            preview_max_chars: DEFAULT_PREVIEW_MAX_CHARS,
        }
    }

    pub fn with_download_base_url(mut self, url: impl Into<String>) -> Self {
        self.download_base_url = Some(url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_preview_limits(mut self, max_lines: usize, max_chars: usize) -> Self {
        self.preview_max_lines = max_lines;
        self.preview_max_chars = max_chars;
        self
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, EngineError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EngineError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| EngineError::config(format!("{BASE_URL_VAR} is not set")))?;

        let mut config = Self::new(base_url);

        if let Some(download) = lookup(DOWNLOAD_BASE_URL_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
        {
            config = config.with_download_base_url(download);
        }

        if let Some(raw) = lookup(TIMEOUT_SECS_VAR) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                EngineError::config(format!("{TIMEOUT_SECS_VAR} must be a whole number of seconds"))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        check_http_url("base_url", &self.base_url)?;
        if let Some(download) = &self.download_base_url {
            check_http_url("download_base_url", download)?;
        }

        if self.timeout.is_zero() {
            return Err(EngineError::config("timeout must be greater than zero"));
        }

        if self.preview_max_lines == 0 || self.preview_max_chars == 0 {
            return Err(EngineError::config("preview limits must be greater than zero"));
        }

        Ok(())
    }

    /// Origin used to absolutize relative download URLs.
    pub fn download_base(&self) -> &str {
        self.download_base_url.as_deref().unwrap_or(&self.base_url)
    }

    pub fn preview_limits(&self) -> PreviewLimits {
        PreviewLimits {
            max_lines: self.preview_max_lines,
            max_chars: self.preview_max_chars,
        }
    }
}

fn check_http_url(name: &str, url: &str) -> Result<(), EngineError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(EngineError::config(format!("{name} must not be empty")));
    }

    let has_host = ["http://", "https://"].iter().any(|scheme| {
        url.strip_prefix(scheme)
            .is_some_and(|rest| !rest.trim_start_matches('/').is_empty())
    });
    if !has_host {
        return Err(EngineError::config(format!(
            "{name} must be an http(s) URL, got '{url}'"
        )));
    }

    Ok(())
}
