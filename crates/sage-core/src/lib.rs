//! SAGE core — conversation and message state for a study-assistant chat.
//!
//! This crate owns the in-memory chat state behind a study-assistant UI:
//! the conversation registry, the active conversation's working buffer,
//! and the reconciliation step that replaces the "AI is thinking"
//! placeholder with the real response in place. Rendering, routing, and
//! inference live in outer layers; this crate is pure state.
//!
//! The entry point is [`conversation::ConversationManager`]:
//!
//! ```
//! use sage_core::conversation::{ConversationManager, Message};
//!
//! let mut manager = ConversationManager::new();
//! let id = manager.create(Some("Biology"));
//! assert_eq!(manager.active_conversation_id(), Some(id.as_str()));
//! ```

pub mod config;
pub mod conversation;
pub mod error;

// Re-export common error type
pub use error::SageError;
