//! Chat state reducer
//!
//! `reduce` is the only place chat state changes. It is total: every event,
//! including ones it does not understand, yields a state.

use crate::chat::{
    content::Contents,
    event::Event,
    message::{Message, ReadFlags},
    state::ChatState,
};
use std::sync::Arc;

/// Apply one event to the chat state
///
/// - A `TextReceived` for a new id appends the message and targets it for
///   scrolling.
/// - A `TextReceived` for a known id replaces that message's read flags and
///   clears the scroll target. Without flags the message is left as is.
/// - `MentionClicked` targets the given message.
/// - Anything else returns the state unchanged.
pub fn reduce(state: ChatState, event: &Event) -> ChatState {
    match event {
        Event::TextReceived {
            id,
            username,
            contents,
            unread_users,
        } => match state.position(id) {
            Some(index) => update_read_flags(state, index, unread_users.as_ref()),
            None => append_message(
                state,
                id,
                username.as_deref(),
                contents.as_ref(),
                unread_users.as_ref(),
            ),
        },
        Event::MentionClicked { message_id } => ChatState {
            scroll_target: Some(message_id.clone()),
            ..state
        },
        Event::Unknown => state,
    }
}

fn append_message(
    mut state: ChatState,
    id: &str,
    username: Option<&str>,
    contents: Option<&Contents>,
    unread_users: Option<&ReadFlags>,
) -> ChatState {
    let message = Message::new(
        id.to_string(),
        username.unwrap_or_default().to_string(),
        contents.cloned().unwrap_or_default(),
        unread_users.cloned().unwrap_or_default(),
    );
    state.messages.push(Arc::new(message));
    state.scroll_target = Some(id.to_string());
    state
}

fn update_read_flags(
    mut state: ChatState,
    index: usize,
    unread_users: Option<&ReadFlags>,
) -> ChatState {
    // Missing flags would otherwise read as "everyone has read it"
    if let Some(update) = unread_users {
        let updated = state.messages[index].with_read_flags(update);
        if updated != *state.messages[index] {
            state.messages[index] = Arc::new(updated);
        }
    }
    state.scroll_target = None;
    state
}
