use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct AgentIdentity {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<u64>,
}

/// Body returned by `POST /dispatch` and `POST /dispatch/{agent}`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CallResponse {
    pub sender: AgentIdentity,
    #[serde(default)]
    pub timestamp: String,
    /// Kind tag of the reply, kept as sent (`"text"` for plain replies).
    #[serde(rename = "type", default)]
    pub kind: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ResponseMetadata>,
}

/// Body returned by `GET /agents`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgentsResponse {
    pub available_agents: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Health {
    Healthy,
    Unhealthy,
}

/// Status of one backing service as reported by `/health`.
///
/// Service-specific fields (name lists and the like) are kept in `extra`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct ServiceStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Per-service entries of the health report. Services other than the four
/// known ones are kept in `extra`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct HealthServices {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<ServiceStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agents: Option<ServiceStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub providers: Option<ServiceStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<ServiceStatus>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body returned by `GET /health`. Unrecognized fields are kept in `extra`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct HealthStatus {
    pub status: Health,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<HealthServices>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == Health::Healthy
    }
}
