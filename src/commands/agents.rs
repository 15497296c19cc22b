use anyhow::{Context, Result};
use std::io::Write;

use crate::client::Orchestrator;

/// Print the available agents, one per line.
#[tracing::instrument(skip(orchestrator, out))]
pub async fn agents<O, W>(orchestrator: &O, out: &mut W) -> Result<()>
where
    O: Orchestrator + ?Sized,
    W: Write,
{
    let agents = orchestrator
        .list_agents()
        .await
        .context("Failed to list agents")?;

    if agents.is_empty() {
        writeln!(out, "No agents available.")?;
        return Ok(());
    }

    for agent in agents {
        writeln!(out, "{}", agent)?;
    }

    Ok(())
}
