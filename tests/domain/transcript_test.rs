use lunachat::domain::{MessageRole, Transcript, TranscriptTurn};

#[test]
fn given_empty_transcript_then_first_and_last_are_none() {
    let transcript = Transcript::default();
    assert!(transcript.is_empty());
    assert!(transcript.first().is_none());
    assert!(transcript.last().is_none());
}

#[test]
fn given_turns_when_pushed_then_order_is_preserved() {
    let mut transcript = Transcript::default();
    transcript.push(TranscriptTurn::new(MessageRole::User, "Hello"));
    transcript.push(TranscriptTurn::new(MessageRole::Assistant, "Hi there"));

    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript.first().unwrap().content, "Hello");
    assert_eq!(transcript.last().unwrap().role, MessageRole::Assistant);
}

#[test]
fn given_wire_payload_when_deserializing_then_yields_turns() {
    let transcript: Transcript = serde_json::from_str(
        r#"[{"role": "user", "content": "Hello"}, {"role": "assistant", "content": "Hi"}]"#,
    )
    .unwrap();

    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript.first().unwrap().role, MessageRole::User);
}
