use lunachat::application::ports::{ConversationRepository, RepositoryError};
use lunachat::domain::{Conversation, Message};

#[tokio::test]
async fn given_created_conversations_when_listing_then_most_recent_first() {
    let repository = lunachat::infrastructure::persistence::InMemoryConversationRepository::new();

    let older = Conversation::titled_from("older chat");
    repository.create_conversation(&older).await.unwrap();

    tokio::time::sleep(tokio::time::Duration::from_millis(5)).await;

    let newer = Conversation::titled_from("newer chat");
    repository.create_conversation(&newer).await.unwrap();

    let recent = repository.list_recent_conversations(10).await.unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].id, newer.id);
    assert_eq!(recent[1].id, older.id);
}

#[tokio::test]
async fn given_duplicate_conversation_id_when_creating_then_constraint_violation() {
    let repository = lunachat::infrastructure::persistence::InMemoryConversationRepository::new();

    let conversation = Conversation::titled_from("once");
    repository.create_conversation(&conversation).await.unwrap();

    let result = repository.create_conversation(&conversation).await;
    assert!(matches!(
        result,
        Err(RepositoryError::ConstraintViolation(_))
    ));
}

#[tokio::test]
async fn given_appended_message_when_listing_then_parent_conversation_moves_to_front() {
    let repository = lunachat::infrastructure::persistence::InMemoryConversationRepository::new();

    let first = Conversation::titled_from("first");
    repository.create_conversation(&first).await.unwrap();

    tokio::time::sleep(tokio::time::Duration::from_millis(5)).await;

    let second = Conversation::titled_from("second");
    repository.create_conversation(&second).await.unwrap();

    tokio::time::sleep(tokio::time::Duration::from_millis(5)).await;

    let message = Message::user(first.id, "bump".to_string());
    repository.append_message(&message).await.unwrap();

    let recent = repository.list_recent_conversations(10).await.unwrap();
    assert_eq!(recent[0].id, first.id);

    let messages = repository.messages_for(first.id);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, "bump");
}

#[tokio::test]
async fn given_limit_when_listing_then_result_is_truncated() {
    let repository = lunachat::infrastructure::persistence::InMemoryConversationRepository::new();

    for i in 0..5 {
        let conversation = Conversation::new(Some(format!("chat {}", i)));
        repository.create_conversation(&conversation).await.unwrap();
    }

    let recent = repository.list_recent_conversations(3).await.unwrap();
    assert_eq!(recent.len(), 3);
}
