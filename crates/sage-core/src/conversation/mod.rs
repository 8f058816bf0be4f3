//! Conversation domain module.
//!
//! This module contains the message and conversation domain models, the
//! placeholder reconciliation primitive, and the manager that keeps the
//! registry and the active view consistent.
//!
//! # Module Structure
//!
//! - `message`: Chat message types (`Message`, `MessageRole`, `MessagePayload`)
//! - `model`: Conversation domain model (`Conversation`, `ConversationSummary`)
//! - `reconcile`: Placeholder reconciliation (`apply_message`)
//! - `manager`: Conversation lifecycle management (`ConversationManager`)
//! - `samples`: Built-in sample conversations
//!
//! # Usage
//!
//! ```
//! use sage_core::conversation::{ConversationManager, Message};
//!
//! let mut manager = ConversationManager::new();
//! manager.create(None);
//! manager.add_message(Message::user("Explain photosynthesis"));
//! manager.add_message(Message::pending());
//! manager.add_message(Message::assistant("It converts light into chemical energy."));
//!
//! // The response replaced the placeholder instead of appending
//! assert_eq!(manager.active_messages().len(), 3);
//! ```

mod manager;
mod message;
mod model;
mod reconcile;
mod samples;

// Re-export public API
pub use manager::{ActiveView, ConversationManager};
pub use message::{ArtifactKind, Message, MessagePayload, MessageRole, StudyArtifact};
pub use model::{Conversation, ConversationSummary};
pub use reconcile::{ReconcileOutcome, apply_message};
pub use samples::sample_conversations;
