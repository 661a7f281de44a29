// ReadTracker Tests - Testing read requests for the current viewer

use crate::chat::{ChatState, Event, ReadFlags, ReadTracker, reduce};
use crate::protocol::ClientRequest;

fn flags(entries: &[(&str, bool)]) -> ReadFlags {
    entries
        .iter()
        .map(|(user, read)| (user.to_string(), *read))
        .collect()
}

#[test]
fn test_requests_unread_messages_once() {
    let mut tracker = ReadTracker::new("bob");
    let state = reduce(
        ChatState::new(),
        &Event::text_received("m1", "alice", "hi", flags(&[("bob", false)])),
    );

    assert_eq!(tracker.observe(&state), vec![ClientRequest::read("m1")]);
    assert_eq!(tracker.pending(), 1);

    // Re-observing the same state (another render) must not repeat it
    assert!(tracker.observe(&state).is_empty());
}

#[test]
fn test_confirmation_clears_pending() {
    let mut tracker = ReadTracker::new("bob");
    let state = reduce(
        ChatState::new(),
        &Event::text_received("m1", "alice", "hi", flags(&[("bob", false)])),
    );
    tracker.observe(&state);

    let state = reduce(state, &Event::receipt("m1", flags(&[("bob", true)])));

    assert!(tracker.observe(&state).is_empty());
    assert_eq!(tracker.pending(), 0);
}

#[test]
fn test_ignores_read_and_foreign_messages() {
    let mut tracker = ReadTracker::new("bob");
    let mut state = ChatState::new();
    state = reduce(
        state,
        &Event::text_received("read", "alice", "x", flags(&[("bob", true)])),
    );
    state = reduce(
        state,
        &Event::text_received("other", "alice", "x", flags(&[("carol", false)])),
    );
    state = reduce(
        state,
        &Event::text_received("mine", "bob", "x", flags(&[("alice", false)])),
    );

    assert!(tracker.observe(&state).is_empty());
}

#[test]
fn test_requests_in_arrival_order() {
    let mut tracker = ReadTracker::new("bob");
    let mut state = ChatState::new();
    for id in ["m2", "m1", "m3"] {
        state = reduce(
            state,
            &Event::text_received(id, "alice", "x", flags(&[("bob", false)])),
        );
    }

    assert_eq!(
        tracker.observe(&state),
        vec![
            ClientRequest::read("m2"),
            ClientRequest::read("m1"),
            ClientRequest::read("m3"),
        ]
    );
    assert_eq!(tracker.viewer(), "bob");
}
