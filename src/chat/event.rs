//! Events fed into the chat reducer

use crate::chat::{content::Contents, message::ReadFlags};

/// Something that happened to the chat
///
/// Decoded from `{type, payload}` actions by [`crate::protocol::decode_action`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A message broadcast from the server, either new or a read-receipt update
    TextReceived {
        /// Message ID
        id: String,
        /// Author's user id
        username: Option<String>,
        /// Message payload
        contents: Option<Contents>,
        /// Read flags snapshot
        unread_users: Option<ReadFlags>,
    },
    /// The viewer clicked a mention pointing at a message
    MentionClicked {
        /// Message to scroll to
        message_id: String,
    },
    /// Any action type the reducer does not handle
    Unknown,
}

impl Event {
    /// Build a complete `TextReceived` event
    pub fn text_received(
        id: impl Into<String>,
        username: impl Into<String>,
        contents: impl Into<Contents>,
        unread_users: ReadFlags,
    ) -> Self {
        Self::TextReceived {
            id: id.into(),
            username: Some(username.into()),
            contents: Some(contents.into()),
            unread_users: Some(unread_users),
        }
    }

    /// Build a read-receipt update carrying only the id and new flags
    pub fn receipt(id: impl Into<String>, unread_users: ReadFlags) -> Self {
        Self::TextReceived {
            id: id.into(),
            username: None,
            contents: None,
            unread_users: Some(unread_users),
        }
    }

    /// Build a `MentionClicked` event
    pub fn mention_clicked(message_id: impl Into<String>) -> Self {
        Self::MentionClicked {
            message_id: message_id.into(),
        }
    }

    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TextReceived { .. } => "text_received",
            Self::MentionClicked { .. } => "mention_clicked",
            Self::Unknown => "unknown",
        }
    }
}
