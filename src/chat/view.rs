//! Stateless projections of chat state for rendering

use crate::chat::state::ChatState;

/// Which side of the conversation a bubble belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Sent by the viewer
    Mine,
    /// Sent by someone else
    Other,
}

/// One message bubble as the view layer needs it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    /// Message ID
    pub message_id: String,
    /// Author's user id
    pub sender_id: String,
    /// Side of the conversation
    pub side: Side,
    /// Display text with mentions as `@name`
    pub text: String,
    /// Mentioned users in order of appearance
    pub mentions: Vec<String>,
    /// Recipients that have not read the message (all of them, not only the viewer)
    pub unread_count: usize,
    /// Whether the viewer still has to read it
    pub unread_by_viewer: bool,
    /// Whether the view should scroll to this bubble
    pub is_scroll_target: bool,
}

impl MessageView {
    /// Unread badge text; empty once everyone has read the message
    pub fn badge(&self) -> String {
        if self.unread_count == 0 {
            String::new()
        } else {
            self.unread_count.to_string()
        }
    }
}

/// Project every message into a view row, in arrival order
pub fn message_views(state: &ChatState, viewer: &str) -> Vec<MessageView> {
    state
        .messages
        .iter()
        .map(|message| MessageView {
            message_id: message.message_id.clone(),
            sender_id: message.sender_id.clone(),
            side: if message.sender_id == viewer {
                Side::Mine
            } else {
                Side::Other
            },
            text: message.contents.to_text(),
            mentions: message
                .contents
                .mentions()
                .into_iter()
                .map(str::to_string)
                .collect(),
            unread_count: message.unread_count(),
            unread_by_viewer: message.is_unread_by(viewer),
            is_scroll_target: state.scroll_target.as_deref() == Some(message.message_id.as_str()),
        })
        .collect()
}

/// Number of messages `viewer` has not read
pub fn unread_total(state: &ChatState, viewer: &str) -> usize {
    state
        .messages
        .iter()
        .filter(|m| m.is_unread_by(viewer))
        .count()
}
