use anyhow::{Context, Result};
use log::debug;
use std::io::Write;

use crate::{
    client::Orchestrator,
    message::{Message, MessageInput},
};

/// Who the dispatched messages are attributed to.
#[derive(Debug, Clone, PartialEq)]
pub struct SenderArgs {
    pub id: String,
    pub name: Option<String>,
}

/// Send each entry of `contents` as one text message and print the reply.
#[tracing::instrument(skip(orchestrator, out, contents))]
pub async fn dispatch<O, W>(
    orchestrator: &O,
    out: &mut W,
    agent: Option<&str>,
    sender: &SenderArgs,
    contents: &[String],
) -> Result<()>
where
    O: Orchestrator + ?Sized,
    W: Write,
{
    let messages: Vec<Message> = contents
        .iter()
        .map(|content| {
            let message = Message::text(sender.id.as_str(), content.as_str());
            match &sender.name {
                Some(name) => message.with_sender_name(name.as_str()),
                None => message,
            }
        })
        .collect();
    let input = MessageInput::from(messages);

    let reply = match agent {
        Some(agent) => {
            debug!("Dispatching to agent {:?}", agent);
            orchestrator
                .dispatch_to(agent, input)
                .await
                .with_context(|| format!("Dispatch to agent {:?} failed", agent))?
        }
        None => orchestrator
            .dispatch(input)
            .await
            .context("Dispatch to default agent failed")?,
    };

    writeln!(out, "{}", reply)?;
    Ok(())
}
