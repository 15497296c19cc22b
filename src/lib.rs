//! Typed client for a remote agent-orchestration REST API.
//!
//! ```no_run
//! use orchestrator_client::{ClientConfig, Message, OrchestratorClient};
//!
//! # async fn run() -> orchestrator_client::Result<()> {
//! let client = OrchestratorClient::new(ClientConfig::new("http://localhost:3000").max_retries(2))?;
//! let reply = client
//!     .dispatch_to("planner", Message::text("user-1", "Draft a release plan"))
//!     .await?;
//! println!("{}", reply);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod http;
pub mod message;

pub use client::{Orchestrator, OrchestratorClient};
pub use config::ClientConfig;
pub use error::{Error, Result, ValidationError};
pub use message::{Message, MessageInput};
