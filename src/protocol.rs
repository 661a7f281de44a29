//! Protocol module
//!
//! This module defines the JSON boundary between the chat state and the
//! outside world:
//! - Incoming actions (`{type, payload}`) decoded into reducer events
//! - Outgoing client requests (`{op, ...}`) sent to the chat server
//! - Validation of outgoing text

use crate::chat::{content::Contents, event::Event, message::ReadFlags};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Action type for an incoming message broadcast
pub const RECV_TEXT: &str = "RECV_TEXT";

/// Action type for a click on a mention
pub const CLICK_MENTION: &str = "CLICK_MENTION";

/// Default limit on outgoing message length, in characters
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 4000;

#[derive(Debug, Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecvTextPayload {
    id: String,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    contents: Option<Contents>,
    #[serde(default, alias = "unReadUsers")]
    unread_users: Option<ReadFlags>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClickMentionPayload {
    message_id: String,
}

/// Decode a `{type, payload}` action into a reducer event
///
/// Unrecognized action types decode to [`Event::Unknown`]. A known type with
/// a payload that does not match its shape is an error.
pub fn decode_action(data: &str) -> Result<Event> {
    let raw: RawAction = serde_json::from_str(data)
        .map_err(|e| Error::Protocol(format!("Invalid action: {}", e)))?;

    match raw.kind.as_str() {
        RECV_TEXT => {
            let payload: RecvTextPayload = serde_json::from_value(raw.payload)
                .map_err(|e| Error::Protocol(format!("Invalid {} payload: {}", RECV_TEXT, e)))?;
            Ok(Event::TextReceived {
                id: payload.id,
                username: payload.username,
                contents: payload.contents,
                unread_users: payload.unread_users,
            })
        }
        CLICK_MENTION => {
            let payload: ClickMentionPayload = serde_json::from_value(raw.payload).map_err(|e| {
                Error::Protocol(format!("Invalid {} payload: {}", CLICK_MENTION, e))
            })?;
            Ok(Event::MentionClicked {
                message_id: payload.message_id,
            })
        }
        other => {
            tracing::trace!("Ignoring action type {}", other);
            Ok(Event::Unknown)
        }
    }
}

/// Request sent from the client to the chat server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum ClientRequest {
    /// Post a new message
    Create {
        /// Sender's user id
        #[serde(rename = "from")]
        sender_id: String,
        /// Message text
        #[serde(rename = "value")]
        text: String,
    },
    /// Mark a message as read by the sender of this request
    Read {
        /// Message ID
        target: String,
    },
}

impl ClientRequest {
    /// Create a read request for a message
    pub fn read(target: impl Into<String>) -> Self {
        Self::Read {
            target: target.into(),
        }
    }

    /// Encode the request to a JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::JsonSerialization)
    }

    /// Decode a request from a JSON string
    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data).map_err(Error::JsonSerialization)
    }
}

/// Build a request posting `text` as `sender_id`
///
/// Text is trimmed. Empty senders, empty text and text longer than
/// `max_length` characters are rejected.
pub fn send_text(sender_id: &str, text: &str, max_length: usize) -> Result<ClientRequest> {
    if sender_id.is_empty() {
        return Err(Error::NotSignedIn);
    }

    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyMessage);
    }

    let len = text.chars().count();
    if len > max_length {
        return Err(Error::MessageTooLong {
            len,
            max: max_length,
        });
    }

    Ok(ClientRequest::Create {
        sender_id: sender_id.to_string(),
        text: text.to_string(),
    })
}
