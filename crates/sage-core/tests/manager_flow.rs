use sage_core::conversation::{
    ArtifactKind, ConversationManager, Message, MessageRole, ReconcileOutcome, StudyArtifact,
};

fn study_guide() -> StudyArtifact {
    StudyArtifact {
        kind: ArtifactKind::StudyGuide,
        title: "Photosynthesis Study Guide".to_string(),
        content: "1. Light reactions\n2. Calvin cycle".to_string(),
    }
}

#[test]
fn test_full_study_session_flow() {
    let mut manager = ConversationManager::new();

    // Start a fresh conversation: one seed greeting, active
    let first = manager.create(None);
    assert_eq!(manager.active_conversation_id(), Some(first.as_str()));
    assert_eq!(manager.active_messages().len(), 1);

    // User asks for material, placeholder goes up while the response runs
    manager.add_message(Message::user("Explain photosynthesis"));
    manager.add_message(Message::pending());
    assert_eq!(manager.active_messages().len(), 3);
    assert!(manager.active_messages()[2].is_generating());

    // The response arrives and replaces the placeholder in place
    manager.add_message(Message::generated("Here's your study guide.", study_guide()));
    assert_eq!(manager.active_messages().len(), 3);
    assert!(!manager.active_messages()[2].is_generating());
    assert!(manager.active_messages()[2].artifact().is_some());

    // Switching to a new conversation leaves the first one intact
    let second = manager.create(None);
    assert_eq!(manager.active_conversation_id(), Some(second.as_str()));
    assert_eq!(manager.active_messages().len(), 1);
    let stored_first = manager
        .conversations()
        .iter()
        .find(|c| c.id == first)
        .expect("First conversation should still be listed");
    assert_eq!(stored_first.messages.len(), 3);

    // Switching back restores the full resolved transcript
    assert!(manager.load(&first));
    assert_eq!(manager.active_messages().len(), 3);
    assert!(!manager.active_messages()[2].is_generating());

    // Deleting the active conversation installs a fresh replacement
    manager.delete(&first);
    let replacement = manager
        .active_conversation_id()
        .expect("A replacement should be active after deleting the active conversation")
        .to_string();
    assert_ne!(replacement, first);
    assert_ne!(replacement, second);
    assert_eq!(manager.active_messages().len(), 1);

    // The untouched conversation survived the delete
    assert!(manager.conversations().iter().any(|c| c.id == second));
    assert_eq!(manager.conversations().len(), 2);
}

#[test]
fn test_conversations_never_share_message_state() {
    let mut manager = ConversationManager::new();
    let first = manager.create(Some("First"));
    manager.add_message(Message::user("only in first"));
    let second = manager.create(Some("Second"));

    // Snapshot taken before further mutation
    let snapshot = manager
        .conversations()
        .iter()
        .find(|c| c.id == first)
        .expect("First conversation should exist")
        .clone();

    // Mutate both conversations afterwards
    manager.add_message(Message::user("only in second"));
    manager.load(&first);
    manager.add_message(Message::user("later addition"));

    // The snapshot still shows the old state
    assert_eq!(snapshot.messages.len(), 2);

    // Each conversation only contains its own turns
    let first_entry = manager
        .conversations()
        .iter()
        .find(|c| c.id == first)
        .expect("First conversation should exist");
    let second_entry = manager
        .conversations()
        .iter()
        .find(|c| c.id == second)
        .expect("Second conversation should exist");
    assert_eq!(first_entry.messages.len(), 3);
    assert_eq!(second_entry.messages.len(), 2);
    assert!(first_entry.messages.iter().all(|m| m.content != "only in second"));
    assert!(second_entry.messages.iter().all(|m| m.content != "only in first"));
}

#[test]
fn test_rapid_turns_keep_views_consistent() {
    let mut manager = ConversationManager::new();
    let id = manager.create(None);

    // A quick burst of turns, placeholder resolved mid-burst
    manager.add_message(Message::user("Quiz me on fractions"));
    manager.add_message(Message::pending());
    manager.add_message(Message::assistant("Q1: what is 1/2 + 1/4?"));
    manager.add_message(Message::user("3/4"));
    manager.add_message(Message::pending());
    manager.add_message(Message::assistant("Correct!"));

    let expected = [
        (MessageRole::Assistant, false),
        (MessageRole::User, false),
        (MessageRole::Assistant, false),
        (MessageRole::User, false),
        (MessageRole::Assistant, false),
    ];
    assert_eq!(manager.active_messages().len(), expected.len());
    for (message, (role, generating)) in manager.active_messages().iter().zip(expected.iter()) {
        assert_eq!(&message.role, role);
        assert_eq!(message.is_generating(), *generating);
    }

    // Registry entry and working buffer agree exactly
    let entry = manager
        .conversations()
        .iter()
        .find(|c| c.id == id)
        .expect("Conversation should exist");
    assert_eq!(entry.messages, manager.active_messages());
}

#[test]
fn test_sample_startup_flow() {
    let mut manager = ConversationManager::with_samples();

    // Samples fill the sidebar but nothing is active yet
    assert_eq!(manager.conversations().len(), 4);
    assert_eq!(manager.active_conversation_id(), None);
    assert!(manager.active_messages().is_empty());
    assert!(!manager.add_message(Message::user("dropped")));

    // Picking a sample activates it
    assert!(manager.load("sample-photosynthesis"));
    assert_eq!(
        manager.active_conversation_id(),
        Some("sample-photosynthesis")
    );
    assert_eq!(manager.active_messages().len(), 3);

    // Starting fresh pushes the new conversation to the front
    let fresh = manager.create(None);
    assert_eq!(manager.conversations().len(), 5);
    assert_eq!(manager.conversations()[0].id, fresh);
}

#[test]
fn test_pinned_response_errors_after_delete() {
    let mut manager = ConversationManager::new();
    let doomed = manager.create(Some("Doomed"));
    manager.add_message(Message::user("Summarize chapter 3"));
    manager.add_message(Message::pending());

    // The conversation disappears while the response is still pending
    manager.delete(&doomed);
    let before: Vec<String> = manager.conversations().iter().map(|c| c.id.clone()).collect();

    let result = manager.add_message_to(&doomed, Message::assistant("Chapter 3 covers..."));

    let error = result.expect_err("Delivering to a deleted conversation should fail");
    assert!(error.is_not_found());

    // Nothing changed anywhere
    let after: Vec<String> = manager.conversations().iter().map(|c| c.id.clone()).collect();
    assert_eq!(before, after);
    assert_eq!(manager.active_messages().len(), 1);
}

#[test]
fn test_pinned_response_survives_conversation_switch() {
    let mut manager = ConversationManager::new();
    let origin = manager.create(Some("Origin"));
    manager.add_message(Message::user("Make me flashcards"));
    manager.add_message(Message::pending());

    // User wanders off to another conversation
    manager.create(Some("Elsewhere"));
    manager.add_message(Message::user("unrelated chatter"));

    let outcome = manager
        .add_message_to(&origin, Message::assistant("Flashcards ready."))
        .expect("Origin conversation should still exist");
    assert_eq!(outcome, ReconcileOutcome::Replaced { index: 2 });

    // The active conversation never saw the response
    assert!(
        manager
            .active_messages()
            .iter()
            .all(|m| m.content != "Flashcards ready.")
    );

    // The origin conversation resolved its placeholder
    let origin_entry = manager
        .conversations()
        .iter()
        .find(|c| c.id == origin)
        .expect("Origin conversation should exist");
    assert!(origin_entry.messages.iter().all(|m| !m.is_generating()));
}

#[tokio::test]
async fn test_watch_subscribers_follow_the_active_view() {
    let mut manager = ConversationManager::new();
    let mut rx = manager.subscribe();
    assert!(rx.borrow().conversation_id.is_none());

    let id = manager.create(None);
    rx.changed().await.expect("Sender should be alive");
    {
        let view = rx.borrow_and_update();
        assert_eq!(view.conversation_id.as_deref(), Some(id.as_str()));
        assert_eq!(view.messages.len(), 1);
    }

    manager.add_message(Message::user("hello"));
    manager.add_message(Message::pending());
    rx.changed().await.expect("Sender should be alive");
    {
        let view = rx.borrow_and_update();
        assert_eq!(view.messages.len(), 3);
        assert!(view.messages[2].is_generating());
    }

    // Deleting the active conversation publishes the replacement's view
    manager.delete(&id);
    rx.changed().await.expect("Sender should be alive");
    let view = rx.borrow_and_update();
    assert_ne!(view.conversation_id.as_deref(), Some(id.as_str()));
    assert_eq!(view.messages.len(), 1);
}
