use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Where the page's server lives and how long to wait for it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// `None` waits for the server indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Reads `PDF_QA_BASE_URL` and `PDF_QA_TIMEOUT_SECS`, loading a `.env`
    /// file first when one is present.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_vars(
            env::var("PDF_QA_BASE_URL").ok(),
            env::var("PDF_QA_TIMEOUT_SECS").ok(),
        )
    }

    fn from_vars(base_url: Option<String>, timeout_secs: Option<String>) -> Result<Self> {
        let default = Self::default();

        let base_url = match base_url {
            Some(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => default.base_url,
        };

        let request_timeout = match timeout_secs {
            Some(raw) if !raw.trim().is_empty() => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("PDF_QA_TIMEOUT_SECS is not a number: {}", raw))?;
                Some(Duration::from_secs(secs))
            }
            _ => default.request_timeout,
        };

        Ok(Self {
            base_url,
            request_timeout,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Absolute URL for an endpoint path such as `/upload`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
