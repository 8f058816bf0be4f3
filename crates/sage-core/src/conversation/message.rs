//! Chat message types.
//!
//! This module contains the types for a single chat turn: who sent it,
//! the bubble text, and the payload distinguishing a plain turn from an
//! in-flight generation placeholder or an attached study artifact.

use serde::{Deserialize, Serialize};

/// Represents the role of a message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageRole {
    /// Message from the user.
    User,
    /// Message from the AI assistant.
    Assistant,
}

/// The kind of study material carried by a generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    /// Structured study guide (outline with key points).
    StudyGuide,
    /// Front/back flashcard deck.
    Flashcards,
    /// Practice quiz with questions and answers.
    Quiz,
    /// Audio recap transcript.
    Audio,
}

/// Generated study material attached to a resolved assistant message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyArtifact {
    /// What kind of material this is.
    pub kind: ArtifactKind,
    /// Display title for the artifact panel.
    pub title: String,
    /// The generated material itself.
    pub content: String,
}

/// What a message carries beyond its bubble text.
///
/// Modeled as a tagged variant so impossible combinations (a placeholder
/// carrying an artifact, a plain text turn marked as generating) cannot
/// be represented at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessagePayload {
    /// Plain conversational turn.
    Text,
    /// Transient assistant placeholder shown while a response is produced.
    Generating,
    /// Resolved assistant turn with generated study material attached.
    Artifact(StudyArtifact),
}

impl Default for MessagePayload {
    fn default() -> Self {
        MessagePayload::Text
    }
}

/// A single message in a conversation history.
///
/// Each message has a role (user or assistant), content, a creation
/// timestamp, and a payload. Messages are only ever created through the
/// constructors below, which is what keeps empty content confined to the
/// generation placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender.
    pub role: MessageRole,
    /// The chat-bubble text. Empty only for a generation placeholder.
    pub content: String,
    /// Timestamp when the message was created (ISO 8601 format).
    pub timestamp: String,
    /// What the message carries beyond its text.
    #[serde(default)]
    pub payload: MessagePayload,
}

impl Message {
    /// Creates a user message with the given text.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            payload: MessagePayload::Text,
        }
    }

    /// Creates a resolved assistant message with the given text.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            payload: MessagePayload::Text,
        }
    }

    /// Creates the transient "AI is thinking" placeholder.
    ///
    /// The UI renders it as a typing indicator until the real response
    /// replaces it in place.
    pub fn pending() -> Self {
        Self {
            role: MessageRole::Assistant,
            content: String::new(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            payload: MessagePayload::Generating,
        }
    }

    /// Creates a resolved assistant message carrying generated study
    /// material.
    pub fn generated(content: impl Into<String>, artifact: StudyArtifact) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            payload: MessagePayload::Artifact(artifact),
        }
    }

    /// Returns true if this message is an in-flight generation placeholder.
    pub fn is_generating(&self) -> bool {
        matches!(self.payload, MessagePayload::Generating)
    }

    /// Returns the attached study artifact, if any.
    pub fn artifact(&self) -> Option<&StudyArtifact> {
        match &self.payload {
            MessagePayload::Artifact(artifact) => Some(artifact),
            _ => None,
        }
    }
}
