//! Read tracking for the current viewer
//!
//! Watches chat state after each change and asks the server to mark messages
//! read once the viewer has seen them. Each message is requested once; the
//! server's receipt broadcast then flips the flag through the reducer.

use crate::chat::state::ChatState;
use crate::protocol::ClientRequest;
use std::collections::HashSet;

/// Observer emitting read requests for messages the viewer has not read
#[derive(Debug, Clone)]
pub struct ReadTracker {
    /// Viewer's user id
    viewer: String,
    /// Messages with a read request in flight
    requested: HashSet<String>,
}

impl ReadTracker {
    /// Create a tracker for `viewer`
    pub fn new(viewer: impl Into<String>) -> Self {
        Self {
            viewer: viewer.into(),
            requested: HashSet::new(),
        }
    }

    /// Viewer this tracker acts for
    pub fn viewer(&self) -> &str {
        &self.viewer
    }

    /// Number of read requests awaiting confirmation
    pub fn pending(&self) -> usize {
        self.requested.len()
    }

    /// Inspect `state` and return read requests not yet issued
    pub fn observe(&mut self, state: &ChatState) -> Vec<ClientRequest> {
        let mut requests = Vec::new();

        for message in &state.messages {
            if message.is_unread_by(&self.viewer) {
                if self.requested.insert(message.message_id.clone()) {
                    tracing::debug!(
                        "Requesting read of {} for {}",
                        message.message_id,
                        self.viewer
                    );
                    requests.push(ClientRequest::read(message.message_id.as_str()));
                }
            } else {
                // Confirmed (or viewer not a recipient)
                self.requested.remove(&message.message_id);
            }
        }

        requests
    }
}
