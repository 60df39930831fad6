use lunachat::client::ChatSession;
use lunachat::domain::{ConversationId, MessageRole};

#[test]
fn given_empty_input_when_submitting_then_nothing_is_sent() {
    let mut session = ChatSession::new();
    assert!(session.submit().is_none());
    assert!(!session.is_in_flight());
}

#[test]
fn given_typed_input_when_submitting_then_payload_carries_full_transcript() {
    let mut session = ChatSession::new();
    session.set_input("Hello");

    let request = session.submit().expect("submit should produce a request");

    assert_eq!(request.transcript.len(), 1);
    assert_eq!(request.transcript.first().unwrap().role, MessageRole::User);
    assert_eq!(request.transcript.first().unwrap().content, "Hello");
    assert!(request.conversation_id.is_none());
    assert!(session.is_in_flight());
    assert!(session.input().is_empty());
}

#[test]
fn given_request_in_flight_when_submitting_again_then_nothing_is_sent() {
    let mut session = ChatSession::new();
    session.set_input("Hello");
    session.submit().unwrap();

    session.set_input("again");
    assert!(session.submit().is_none());
}

#[test]
fn given_first_response_when_capturing_conversation_id_then_it_sticks() {
    let mut session = ChatSession::new();
    let first = ConversationId::new();
    let second = ConversationId::new();

    session.capture_conversation_id(first);
    session.capture_conversation_id(second);

    assert_eq!(session.conversation_id(), Some(first));
}

#[test]
fn given_streamed_fragments_when_applied_then_they_accumulate_on_one_assistant_turn() {
    let mut session = ChatSession::new();
    session.set_input("Hello");
    session.submit().unwrap();

    session.apply_fragment("Hi ");
    session.apply_fragment("there");
    session.finish_reply();

    let transcript = session.transcript();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript.last().unwrap().role, MessageRole::Assistant);
    assert_eq!(transcript.last().unwrap().content, "Hi there");
    assert!(!session.is_in_flight());
}

#[test]
fn given_ongoing_session_when_starting_new_chat_then_local_state_is_cleared() {
    let mut session = ChatSession::new();
    session.set_input("Hello");
    session.submit().unwrap();
    session.apply_fragment("Hi there");
    session.finish_reply();
    session.capture_conversation_id(ConversationId::new());

    session.new_chat();

    assert!(session.transcript().is_empty());
    assert!(session.conversation_id().is_none());
    assert!(session.input().is_empty());
    assert!(!session.is_in_flight());
}

#[test]
fn given_second_turn_when_submitting_then_stored_conversation_id_is_sent() {
    let mut session = ChatSession::new();
    session.set_input("Hello");
    session.submit().unwrap();
    session.apply_fragment("Hi there");
    session.finish_reply();

    let id = ConversationId::new();
    session.capture_conversation_id(id);

    session.set_input("Tell me more");
    let request = session.submit().unwrap();

    assert_eq!(request.conversation_id, Some(id));
    assert_eq!(request.transcript.len(), 3);
}
