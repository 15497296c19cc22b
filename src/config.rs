//! Construction-time options for [`OrchestratorClient`](crate::OrchestratorClient).

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::http::RetryPolicy;

/// Per-attempt deadline applied when `timeout_millis` is not set.
pub const DEFAULT_TIMEOUT_MS: u64 = 90_000;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_millis: Option<u64>,
    /// Zero or negative disables retry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<i64>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn timeout_millis(mut self, timeout_millis: u64) -> Self {
        self.timeout_millis = Some(timeout_millis);
        self
    }

    pub fn max_retries(mut self, max_retries: i64) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Deadline for a single attempt. Retries each get the full timeout again.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_millis.unwrap_or(DEFAULT_TIMEOUT_MS))
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        match self.max_retries {
            Some(n) if n > 0 => RetryPolicy::new(u32::try_from(n).unwrap_or(u32::MAX)),
            _ => RetryPolicy::disabled(),
        }
    }

    /// Checks the options and parses the base URL.
    pub fn validate(&self) -> Result<Url> {
        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            return Err(Error::Config("baseUrl is required".to_string()));
        }

        let url = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid baseUrl {:?}: {}", base_url, e)))?;
        if url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "baseUrl {:?} cannot carry a path",
                base_url
            )));
        }

        Ok(url)
    }
}
