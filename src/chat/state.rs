//! Chat state snapshot

use crate::chat::message::Message;
use std::sync::Arc;

/// Client-side chat state
///
/// Cloning is cheap: messages are shared between snapshots and a snapshot's
/// list is only ever changed by replacing whole elements, so edits to one
/// snapshot never show through another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatState {
    /// Messages in arrival order
    pub messages: Vec<Arc<Message>>,
    /// Message the view should scroll to next
    pub scroll_target: Option<String>,
}

impl ChatState {
    /// Create an empty chat state
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of the message with `message_id`
    pub fn position(&self, message_id: &str) -> Option<usize> {
        self.messages.iter().position(|m| m.message_id == message_id)
    }

    /// Look up a message by id
    pub fn get(&self, message_id: &str) -> Option<&Message> {
        self.messages
            .iter()
            .find(|m| m.message_id == message_id)
            .map(Arc::as_ref)
    }

    /// Check if a message with `message_id` is present
    pub fn contains(&self, message_id: &str) -> bool {
        self.position(message_id).is_some()
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if there are no messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
