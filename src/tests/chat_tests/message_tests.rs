// Message Tests - Testing Message, Contents and unread counting

use crate::chat::{Contents, Message, ReadFlags, Segment};

fn message(flags: &[(&str, bool)]) -> Message {
    Message::new(
        "m1".to_string(),
        "alice".to_string(),
        Contents::from("hi"),
        flags
            .iter()
            .map(|(user, read)| (user.to_string(), *read))
            .collect(),
    )
}

#[test]
fn test_unread_count_counts_all_recipients() {
    let msg = message(&[("a", false), ("b", true), ("c", false)]);

    // Every unread recipient counts, not only the viewer
    assert_eq!(msg.unread_count(), 2);
    assert!(!msg.is_read_by_all());
}

#[test]
fn test_read_by_all() {
    assert!(message(&[("a", true), ("b", true)]).is_read_by_all());
    assert!(message(&[]).is_read_by_all());
}

#[test]
fn test_is_unread_by() {
    let msg = message(&[("bob", false), ("carol", true)]);

    assert!(msg.is_unread_by("bob"));
    assert!(!msg.is_unread_by("carol"));
    assert!(!msg.is_unread_by("alice"), "Non-recipients are never unread");
}

#[test]
fn test_message_wire_format() {
    let msg = message(&[("bob", false)]);

    let json = serde_json::to_value(&msg).expect("Failed to serialize message");

    assert_eq!(json["messageId"], "m1");
    assert_eq!(json["id"], "alice");
    assert_eq!(json["contents"], "hi");
    assert_eq!(json["unreadUsers"]["bob"], false);
}

#[test]
fn test_segmented_contents() {
    let contents = Contents::from(vec![
        Segment::text("hey "),
        Segment::mention("bob"),
        Segment::text(", look"),
    ]);

    assert_eq!(contents.to_text(), "hey @bob, look");
    assert_eq!(contents.mentions(), vec!["bob"]);
    assert!(contents.mentions_user("bob"));
    assert!(!contents.mentions_user("alice"));
    assert!(!contents.is_empty());
}

#[test]
fn test_contents_decode_both_shapes() {
    let plain: Contents = serde_json::from_str(r#""hello""#).expect("Failed to decode plain");
    assert_eq!(plain, Contents::Plain("hello".to_string()));

    let segments: Contents =
        serde_json::from_str(r#"[{"isUser":false,"text":"hi "},{"isUser":true,"text":"carol"}]"#)
            .expect("Failed to decode segments");
    assert_eq!(segments.to_text(), "hi @carol");
    assert_eq!(segments.mentions(), vec!["carol"]);
}

#[test]
fn test_empty_contents() {
    assert!(Contents::default().is_empty());
    assert!(Contents::Segments(vec![]).is_empty());
    assert!(Contents::from(vec![Segment::text("")]).is_empty());
}

#[test]
fn test_with_read_flags_is_a_copy() {
    let original = message(&[("bob", false)]);
    let mut update = ReadFlags::new();
    update.insert("bob".to_string(), true);

    let updated = original.with_read_flags(&update);

    assert!(updated.unread_users["bob"]);
    assert!(!original.unread_users["bob"]);
    assert_eq!(updated.message_id, original.message_id);
}
