use std::str::FromStr;

use lunachat::domain::MessageRole;

#[test]
fn given_known_role_strings_when_parsing_then_round_trips() {
    for role in [
        MessageRole::System,
        MessageRole::User,
        MessageRole::Assistant,
    ] {
        let parsed = MessageRole::from_str(role.as_str()).unwrap();
        assert_eq!(parsed, role);
    }
}

#[test]
fn given_unknown_role_string_when_parsing_then_returns_error() {
    assert!(MessageRole::from_str("moderator").is_err());
}

#[test]
fn given_wire_role_when_deserializing_then_matches_enum() {
    let role: MessageRole = serde_json::from_str(r#""user""#).unwrap();
    assert_eq!(role, MessageRole::User);

    let role: MessageRole = serde_json::from_str(r#""assistant""#).unwrap();
    assert_eq!(role, MessageRole::Assistant);
}
