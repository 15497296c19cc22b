use log::debug;

use super::{CallRequest, Message, MessageInput};
use crate::error::{Error, Result, ValidationError};

/// Shapes caller input into a [`CallRequest`], rejecting the first invalid message.
///
/// Checks run in a fixed order per message: sender and content, then the
/// sender id, then the kind tag. Empty strings count as missing.
pub fn normalize(input: impl Into<MessageInput>) -> Result<CallRequest> {
    let messages = match input.into() {
        MessageInput::Single(message) => vec![message],
        MessageInput::Many(messages) if messages.is_empty() => return Err(Error::EmptyInput),
        MessageInput::Many(messages) => messages,
    };

    for (index, message) in messages.iter().enumerate() {
        if let Err(reason) = validate(message) {
            debug!("Rejecting message {}: {}", index, reason);
            return Err(Error::Validation { index, reason });
        }
    }

    Ok(CallRequest { messages })
}

fn validate(message: &Message) -> std::result::Result<(), ValidationError> {
    let sender = match (&message.sender, present(&message.content)) {
        (Some(sender), true) => sender,
        _ => return Err(ValidationError::MissingSenderOrContent),
    };

    if !present(&sender.id) {
        return Err(ValidationError::MissingSenderId);
    }

    if message.kind.is_none() {
        return Err(ValidationError::MissingKind);
    }

    Ok(())
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}
