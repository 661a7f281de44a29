// View Tests - Testing message bubble projections

use crate::chat::{
    ChatState, Contents, Event, ReadFlags, Segment, Side, message_views, reduce, unread_total,
};

fn flags(entries: &[(&str, bool)]) -> ReadFlags {
    entries
        .iter()
        .map(|(user, read)| (user.to_string(), *read))
        .collect()
}

fn sample_state() -> ChatState {
    let mut state = ChatState::new();
    state = reduce(
        state,
        &Event::text_received("m1", "alice", "hello", flags(&[("bob", false), ("carol", false)])),
    );
    state = reduce(
        state,
        &Event::text_received(
            "m2",
            "bob",
            Contents::from(vec![Segment::text("hi "), Segment::mention("alice")]),
            flags(&[("alice", true), ("carol", false)]),
        ),
    );
    state
}

#[test]
fn test_views_follow_message_order() {
    let views = message_views(&sample_state(), "bob");

    assert_eq!(views.len(), 2);
    assert_eq!(views[0].message_id, "m1");
    assert_eq!(views[1].message_id, "m2");
}

#[test]
fn test_side_depends_on_viewer() {
    let views = message_views(&sample_state(), "bob");
    assert_eq!(views[0].side, Side::Other);
    assert_eq!(views[1].side, Side::Mine);

    let views = message_views(&sample_state(), "alice");
    assert_eq!(views[0].side, Side::Mine);
    assert_eq!(views[1].side, Side::Other);
}

#[test]
fn test_unread_count_and_badge() {
    let views = message_views(&sample_state(), "bob");

    assert_eq!(views[0].unread_count, 2);
    assert_eq!(views[0].badge(), "2");
    assert!(views[0].unread_by_viewer);

    assert_eq!(views[1].unread_count, 1);
    assert!(!views[1].unread_by_viewer);
}

#[test]
fn test_badge_empty_when_all_read() {
    let state = reduce(
        sample_state(),
        &Event::receipt("m1", flags(&[("bob", true), ("carol", true)])),
    );
    let views = message_views(&state, "bob");

    assert_eq!(views[0].unread_count, 0);
    assert_eq!(views[0].badge(), "");
}

#[test]
fn test_text_and_mentions() {
    let views = message_views(&sample_state(), "bob");

    assert_eq!(views[0].text, "hello");
    assert!(views[0].mentions.is_empty());
    assert_eq!(views[1].text, "hi @alice");
    assert_eq!(views[1].mentions, vec!["alice".to_string()]);
}

#[test]
fn test_scroll_target_marked() {
    let state = sample_state();
    let views = message_views(&state, "bob");
    assert!(!views[0].is_scroll_target);
    assert!(views[1].is_scroll_target);

    let state = reduce(state, &Event::mention_clicked("m1"));
    let views = message_views(&state, "bob");
    assert!(views[0].is_scroll_target);
    assert!(!views[1].is_scroll_target);
}

#[test]
fn test_unread_total_for_viewer() {
    let state = sample_state();

    assert_eq!(unread_total(&state, "bob"), 1);
    assert_eq!(unread_total(&state, "carol"), 2);
    assert_eq!(unread_total(&state, "alice"), 0);
}
