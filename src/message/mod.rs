//! Outbound message shapes and request normalization.

mod normalize;

use serde::{Deserialize, Serialize};

pub use normalize::normalize;

/// Kind tag carried by every message.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Text,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct Sender {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A single message submitted to a dispatch call.
///
/// Fields are optional so that messages built from untyped JSON can be
/// rejected with a precise reason by [`normalize`] instead of failing
/// deserialization.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<Sender>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<MessageKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Message {
    /// Builds a complete text message.
    pub fn text(sender_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            sender: Some(Sender {
                id: Some(sender_id.into()),
                name: None,
            }),
            kind: Some(MessageKind::Text),
            content: Some(content.into()),
            timestamp: None,
        }
    }

    pub fn with_sender_name(mut self, name: impl Into<String>) -> Self {
        self.sender.get_or_insert_with(Sender::default).name = Some(name.into());
        self
    }

    /// Attaches an ISO-8601 timestamp.
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }
}

/// Either one message or an ordered sequence of them.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageInput {
    Single(Message),
    Many(Vec<Message>),
}

impl From<Message> for MessageInput {
    fn from(message: Message) -> Self {
        MessageInput::Single(message)
    }
}

impl From<Vec<Message>> for MessageInput {
    fn from(messages: Vec<Message>) -> Self {
        MessageInput::Many(messages)
    }
}

impl From<&[Message]> for MessageInput {
    fn from(messages: &[Message]) -> Self {
        MessageInput::Many(messages.to_vec())
    }
}

/// Canonical body of a dispatch request.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CallRequest {
    messages: Vec<Message>,
}

impl CallRequest {
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}
