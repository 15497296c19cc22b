//! JSON-over-HTTP transport bound to one base URL, with retry.

use log::debug;
use reqwest::{Client, Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::retry::RetryPolicy;
use crate::error::{Error, Result};

/// One configured connection profile: the reqwest client, base URL and retry policy.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    retry: RetryPolicy,
}

impl HttpClient {
    /// `base_url` must be hierarchical (http/https), otherwise
    /// [`endpoint`](Self::endpoint) cannot append path segments.
    pub fn new(client: Client, base_url: Url, retry: RetryPolicy) -> Self {
        Self {
            client,
            base_url,
            retry,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Appends `segments` to the base URL, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Performs a GET request and deserializes the JSON response.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        debug!("GET {}...", url);

        self.retry
            .run(&format!("GET {}", url.path()), Error::is_retryable, move || {
                self.send_once::<(), T>(Method::GET, url, None)
            })
            .await
    }

    /// Performs a POST request with a JSON body and deserializes the JSON response.
    #[tracing::instrument(skip(self, body))]
    pub async fn post_json<B, T>(&self, url: &Url, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("POST {}...", url);

        self.retry
            .run(&format!("POST {}", url.path()), Error::is_retryable, move || {
                self.send_once::<B, T>(Method::POST, url, Some(body))
            })
            .await
    }

    /// Single attempt without retry.
    async fn send_once<B, T>(&self, method: Method, url: &Url, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.client.request(method, url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(Error::Status { status, body });
        }

        Ok(response.json::<T>().await?)
    }
}
