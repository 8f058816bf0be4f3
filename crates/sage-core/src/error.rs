//! Error types for the SAGE conversation core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the conversation core.
///
/// Registry operations that tolerate unknown ids (delete, rename) stay
/// no-ops. `SageError` is reserved for paths where a stale id is a real
/// failure the caller must see, such as a targeted message apply.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum SageError {
    /// Conversation id did not resolve to a registry entry
    #[error("Conversation not found: '{id}'")]
    ConversationNotFound { id: String },
}

impl SageError {
    /// Creates a ConversationNotFound error
    pub fn conversation_not_found(id: impl Into<String>) -> Self {
        Self::ConversationNotFound { id: id.into() }
    }

    /// Check if this is a ConversationNotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ConversationNotFound { .. })
    }
}

/// A type alias for `Result<T, SageError>`.
pub type Result<T> = std::result::Result<T, SageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_includes_id() {
        let error = SageError::conversation_not_found("abc-123");

        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "Conversation not found: 'abc-123'");
    }
}
