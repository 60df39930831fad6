use lunachat::domain::Conversation;

#[test]
fn given_short_opening_message_when_titling_then_title_is_full_content() {
    let conversation = Conversation::titled_from("Hello");
    assert_eq!(conversation.title.as_deref(), Some("Hello"));
}

#[test]
fn given_long_opening_message_when_titling_then_title_is_first_fifty_chars() {
    let content = "a".repeat(80);
    let conversation = Conversation::titled_from(&content);
    assert_eq!(conversation.title.as_deref(), Some("a".repeat(50).as_str()));
}

#[test]
fn given_multibyte_opening_message_when_titling_then_truncation_counts_chars() {
    let content = "ü".repeat(60);
    let conversation = Conversation::titled_from(&content);
    let title = conversation.title.unwrap();
    assert_eq!(title.chars().count(), 50);
    assert_eq!(title, "ü".repeat(50));
}

#[test]
fn given_new_conversation_then_created_and_updated_timestamps_match() {
    let conversation = Conversation::new(None);
    assert_eq!(conversation.created_at, conversation.updated_at);
    assert!(conversation.title.is_none());
}
