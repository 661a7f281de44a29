//! Message structure and read-flag bookkeeping

use crate::chat::content::Contents;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-recipient read flags: user id -> has read
pub type ReadFlags = BTreeMap<String, bool>;

/// A chat message as held in client state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Message ID, stable across updates
    pub message_id: String,
    /// Author's user id
    #[serde(rename = "id")]
    pub sender_id: String,
    /// Message payload
    pub contents: Contents,
    /// Read flags keyed by recipient; key set is fixed at creation
    pub unread_users: ReadFlags,
}

impl Message {
    /// Create a new message
    pub fn new(
        message_id: String,
        sender_id: String,
        contents: Contents,
        unread_users: ReadFlags,
    ) -> Self {
        Self {
            message_id,
            sender_id,
            contents,
            unread_users,
        }
    }

    /// Number of recipients that have not read this message
    ///
    /// Counts every recipient, not only the viewer.
    pub fn unread_count(&self) -> usize {
        self.unread_users.values().filter(|read| !**read).count()
    }

    /// Whether `user` is a recipient who has not read the message yet
    ///
    /// Users absent from the flag set are never "unread".
    pub fn is_unread_by(&self, user: &str) -> bool {
        self.unread_users.get(user) == Some(&false)
    }

    /// Check if every recipient has read the message
    pub fn is_read_by_all(&self) -> bool {
        self.unread_count() == 0
    }

    /// Copy of this message with flags taken from `update`
    ///
    /// Only keys already present are updated; unknown keys in `update` are
    /// dropped and keys missing from it keep their value.
    pub fn with_read_flags(&self, update: &ReadFlags) -> Self {
        let unread_users = self
            .unread_users
            .iter()
            .map(|(user, read)| {
                let read = update.get(user).copied().unwrap_or(*read);
                (user.clone(), read)
            })
            .collect();

        Self {
            unread_users,
            ..self.clone()
        }
    }
}
