use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use std::time::Duration;

use crate::api::{AgentsResponse, CallResponse, HealthStatus};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RetryPolicy};
use crate::message::{MessageInput, normalize};

const USER_AGENT: &str = concat!("orchestrator-client/", env!("ORCHESTRATOR_CLIENT_VERSION"));

/// The four remote operations, as seen by host code.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Orchestrator: Send + Sync {
    async fn dispatch(&self, input: MessageInput) -> Result<String>;
    async fn dispatch_to(&self, agent_name: &str, input: MessageInput) -> Result<String>;
    async fn list_agents(&self) -> Result<Vec<String>>;
    async fn check_health(&self) -> Result<HealthStatus>;
}

/// Typed client for the orchestrator REST API.
///
/// The configured timeout bounds each attempt separately. With retries
/// enabled a call can take up to `timeout * (max_retries + 1)` plus the
/// backoff delays; callers needing a hard deadline must impose it themselves.
#[derive(Clone, Debug)]
pub struct OrchestratorClient {
    http: HttpClient,
    timeout: Duration,
}

impl OrchestratorClient {
    #[tracing::instrument(skip(config))]
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = config.validate()?;
        let timeout = config.timeout();
        let retry = config.retry_policy();

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;

        debug!(
            "Orchestrator client for {} (timeout {}ms, {} retries)",
            base_url,
            timeout.as_millis(),
            retry.max_retries()
        );

        Ok(Self {
            http: HttpClient::new(client, base_url, retry),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url().as_str()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.http.retry_policy()
    }

    /// Sends messages to the default agent and returns its reply text.
    #[tracing::instrument(skip(self, input))]
    pub async fn dispatch(&self, input: impl Into<MessageInput>) -> Result<String> {
        Ok(self.dispatch_response(None, input).await?.content)
    }

    /// Sends messages to the named agent and returns its reply text.
    #[tracing::instrument(skip(self, input))]
    pub async fn dispatch_to(
        &self,
        agent_name: &str,
        input: impl Into<MessageInput>,
    ) -> Result<String> {
        Ok(self
            .dispatch_response(Some(agent_name), input)
            .await?
            .content)
    }

    /// Like [`dispatch`](Self::dispatch) / [`dispatch_to`](Self::dispatch_to)
    /// but returns the whole response, including sender and metadata.
    #[tracing::instrument(skip(self, input))]
    pub async fn dispatch_response(
        &self,
        agent_name: Option<&str>,
        input: impl Into<MessageInput>,
    ) -> Result<CallResponse> {
        let url = match agent_name {
            None => self.http.endpoint(&["dispatch"]),
            Some("") => return Err(Error::MissingArgument("agentName")),
            Some(name) => self.http.endpoint(&["dispatch", name]),
        };
        let request = normalize(input)?;

        debug!("Dispatching {} message(s) to {}", request.messages().len(), url);
        self.http.post_json(&url, &request).await
    }

    /// Names of the agents the orchestrator can route to, in server order.
    #[tracing::instrument(skip(self))]
    pub async fn list_agents(&self) -> Result<Vec<String>> {
        let url = self.http.endpoint(&["agents"]);
        let response: AgentsResponse = self.http.get_json(&url).await?;
        Ok(response.available_agents)
    }

    #[tracing::instrument(skip(self))]
    pub async fn check_health(&self) -> Result<HealthStatus> {
        let url = self.http.endpoint(&["health"]);
        self.http.get_json(&url).await
    }
}

#[async_trait]
impl Orchestrator for OrchestratorClient {
    async fn dispatch(&self, input: MessageInput) -> Result<String> {
        OrchestratorClient::dispatch(self, input).await
    }

    async fn dispatch_to(&self, agent_name: &str, input: MessageInput) -> Result<String> {
        OrchestratorClient::dispatch_to(self, agent_name, input).await
    }

    async fn list_agents(&self) -> Result<Vec<String>> {
        OrchestratorClient::list_agents(self).await
    }

    async fn check_health(&self) -> Result<HealthStatus> {
        OrchestratorClient::check_health(self).await
    }
}
