//! Conversation domain model.
//!
//! This module contains the core Conversation entity: a titled, ordered
//! log of chat turns, plus the lightweight summary used for sidebar
//! listings.

use super::message::Message;
use serde::{Deserialize, Serialize};

/// A named conversation in the registry.
///
/// A conversation owns its message log outright. Mutations go through the
/// manager, which installs a fresh `Vec` each time instead of sharing one
/// across conversations, so cloned snapshots never alias live state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique conversation identifier (UUID format).
    pub id: String,
    /// Human-readable conversation title.
    pub title: String,
    /// Timestamp when the conversation was created (ISO 8601 format).
    pub created_at: String,
    /// Timestamp of the last message append (ISO 8601 format).
    pub last_active_at: String,
    /// Ordered message log; insertion order is conversation order.
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Creates a conversation with a fresh UUID, the given title, and the
    /// given seed messages.
    pub fn new(title: impl Into<String>, messages: Vec<Message>) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            created_at: now.clone(),
            last_active_at: now,
            messages,
        }
    }

    /// Bumps the last-activity timestamp to now.
    pub fn touch(&mut self) {
        self.last_active_at = chrono::Utc::now().to_rfc3339();
    }
}

/// Lightweight conversation listing entry for sidebar display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSummary {
    /// Unique conversation identifier (UUID format).
    pub id: String,
    /// Human-readable conversation title.
    pub title: String,
    /// Timestamp of the last message append (ISO 8601 format).
    pub last_active_at: String,
    /// Number of messages in the log, placeholder included.
    pub message_count: usize,
}

impl From<&Conversation> for ConversationSummary {
    fn from(conversation: &Conversation) -> Self {
        Self {
            id: conversation.id.clone(),
            title: conversation.title.clone(),
            last_active_at: conversation.last_active_at.clone(),
            message_count: conversation.messages.len(),
        }
    }
}
