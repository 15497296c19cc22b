use anyhow::{Context, Result};
use std::io::Write;

use crate::client::Orchestrator;

/// Print the health report as JSON; fails when the service reports itself unhealthy.
#[tracing::instrument(skip(orchestrator, out))]
pub async fn health<O, W>(orchestrator: &O, out: &mut W) -> Result<()>
where
    O: Orchestrator + ?Sized,
    W: Write,
{
    let status = orchestrator
        .check_health()
        .await
        .context("Health check failed")?;

    writeln!(out, "{}", serde_json::to_string_pretty(&status)?)?;

    if !status.is_healthy() {
        anyhow::bail!("Orchestrator reports unhealthy status");
    }
    Ok(())
}
