//! Handlers behind the `orchestrator` binary's subcommands.

mod agents;
mod dispatch;
mod health;

pub use agents::agents;
pub use dispatch::{SenderArgs, dispatch};
pub use health::health;
