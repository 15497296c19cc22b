//! Wire types returned by the orchestrator service.

mod types;

pub use types::{
    AgentIdentity, AgentsResponse, CallResponse, Health, HealthServices, HealthStatus,
    ResponseMetadata, ServiceStatus,
};
