//! Message records as supplied by the messaging client.
//!
//! Records are read-only to the view. Every field except the id and sender
//! address is optional; absent values render as empty output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Delivery or decoding failure attached to a message by the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageError {
    pub message: String,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_address: String,
    #[serde(default)]
    pub sent: Option<DateTime<Utc>>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub error: Option<MessageError>,
}

impl Message {
    pub fn new(id: impl Into<String>, sender_address: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sender_address: sender_address.into(),
            sent: None,
            content: None,
            error: None,
        }
    }

    pub fn with_sent(mut self, sent: DateTime<Utc>) -> Self {
        self.sent = Some(sent);
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(MessageError { message: message.into() });
        self
    }

    /// Content with absence collapsed to the empty string.
    pub fn content_or_empty(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}
