//! Conversation lifecycle management.
//!
//! `ConversationManager` owns the two parallel views the chat UI reads:
//! the ordered conversation registry backing the sidebar, and the active
//! conversation's working message buffer backing the transcript pane.
//! Every operation keeps the two consistent and publishes the resulting
//! active view to watch subscribers.

use super::message::Message;
use super::model::{Conversation, ConversationSummary};
use super::reconcile::{ReconcileOutcome, apply_message};
use super::samples::sample_conversations;
use crate::config::ChatConfig;
use crate::error::{Result, SageError};
use serde::Serialize;
use tokio::sync::watch;

/// Snapshot of the active conversation, published to subscribers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveView {
    /// Id of the active conversation, if any.
    pub conversation_id: Option<String>,
    /// Messages of the active conversation, in order.
    pub messages: Vec<Message>,
}

impl ActiveView {
    fn empty() -> Self {
        Self {
            conversation_id: None,
            messages: Vec::new(),
        }
    }
}

/// Manages the conversation registry and the active conversation.
///
/// `ConversationManager` is responsible for:
/// - Creating new conversations, seeded with the assistant greeting
/// - Loading a conversation into the active working buffer
/// - Applying incoming messages through placeholder reconciliation
/// - Deleting and renaming conversations
/// - Publishing the active view to watch subscribers
///
/// All operations are synchronous. The manager is single-owner in-memory
/// state; callers serialize access through `&mut self`, so no locking is
/// involved.
pub struct ConversationManager {
    /// Conversation registry, most recently created or active first.
    conversations: Vec<Conversation>,
    /// Id of the active conversation; always resolves to a registry entry.
    active_id: Option<String>,
    /// Working copy of the active conversation's messages.
    active_buffer: Vec<Message>,
    /// Chat-facing strings (seed greeting, default title).
    config: ChatConfig,
    /// Publishes the active view after every change.
    view_tx: watch::Sender<ActiveView>,
}

impl ConversationManager {
    /// Creates an empty manager with no active conversation.
    pub fn new() -> Self {
        Self::with_config(ChatConfig::default())
    }

    /// Creates an empty manager with the given chat configuration.
    pub fn with_config(config: ChatConfig) -> Self {
        let (view_tx, _) = watch::channel(ActiveView::empty());
        Self {
            conversations: Vec::new(),
            active_id: None,
            active_buffer: Vec::new(),
            config,
            view_tx,
        }
    }

    /// Creates a manager preloaded with the built-in sample conversations.
    ///
    /// No conversation is active until the caller picks one with
    /// [`load`](Self::load) or starts fresh with [`create`](Self::create);
    /// startup with nothing active is a legal state.
    pub fn with_samples() -> Self {
        let mut manager = Self::new();
        manager.conversations = sample_conversations();
        manager
    }

    /// Creates a new conversation, makes it active, and returns its id.
    ///
    /// The conversation starts with a single assistant greeting so the UI
    /// never renders an empty transcript, and is inserted at the front of
    /// the registry (the sidebar lists most recently created or active
    /// first).
    ///
    /// # Arguments
    ///
    /// * `title` - Title for the new conversation; `None` falls back to
    ///   the configured default title
    pub fn create(&mut self, title: Option<&str>) -> String {
        let title = title.unwrap_or(&self.config.default_title);
        let seed = vec![Message::assistant(self.config.greeting.clone())];
        let conversation = Conversation::new(title, seed);
        let id = conversation.id.clone();

        tracing::debug!(
            "[ConversationManager] Created conversation '{}' ({})",
            title,
            id
        );

        self.active_buffer = conversation.messages.clone();
        self.active_id = Some(id.clone());
        self.conversations.insert(0, conversation);
        self.publish_view();

        id
    }

    /// Loads a conversation into the active working buffer.
    ///
    /// On a hit the conversation becomes active and its messages are
    /// copied into the buffer. On a miss nothing changes and `false` is
    /// returned; callers typically fall back to [`create`](Self::create).
    /// Loading the already-active conversation is a harmless refresh, so
    /// the operation is idempotent.
    pub fn load(&mut self, id: &str) -> bool {
        let position = match self.position(id) {
            Some(position) => position,
            None => {
                tracing::debug!(
                    "[ConversationManager] load() missed unknown conversation '{}'",
                    id
                );
                return false;
            }
        };

        self.active_buffer = self.conversations[position].messages.clone();
        self.active_id = Some(self.conversations[position].id.clone());
        self.publish_view();
        true
    }

    /// Applies an incoming message to the active conversation.
    ///
    /// The message goes through placeholder reconciliation: a resolved
    /// assistant response lands in the pending placeholder's slot when one
    /// exists, anything else is appended. The updated log is installed in
    /// both the working buffer and the registry entry, the conversation's
    /// recency is bumped (moving it to the front of the sidebar order),
    /// and the new view is published.
    ///
    /// Returns `false` without changing anything when no conversation is
    /// active. The target is whatever conversation is active when this
    /// runs; callers holding a response for a specific conversation should
    /// use [`add_message_to`](Self::add_message_to) instead.
    pub fn add_message(&mut self, message: Message) -> bool {
        let active_id = match &self.active_id {
            Some(id) => id.clone(),
            None => {
                tracing::debug!(
                    "[ConversationManager] add_message() dropped, no active conversation"
                );
                return false;
            }
        };

        let (updated, outcome) = apply_message(&self.active_buffer, message);
        tracing::debug!(
            "[ConversationManager] Applied message to '{}': {:?}",
            active_id,
            outcome
        );

        self.active_buffer = updated;
        // active_id always resolves to a registry entry
        if let Some(position) = self.position(&active_id) {
            self.conversations[position].messages = self.active_buffer.clone();
            self.conversations[position].touch();
            self.move_to_front(position);
        }
        self.publish_view();
        true
    }

    /// Applies an incoming message to a specific conversation.
    ///
    /// Schedule-time callers capture the conversation id and pin the
    /// response to it, so a reply that finishes after the user switched
    /// conversations still lands where the request was made. When the
    /// target is active, the working buffer and published view are
    /// refreshed too.
    ///
    /// # Arguments
    ///
    /// * `id` - Id of the conversation the message belongs to
    /// * `message` - The incoming message
    ///
    /// # Errors
    ///
    /// Returns [`SageError::ConversationNotFound`] when the id no longer
    /// resolves, for example because the conversation was deleted while
    /// the response was pending. Nothing is changed in that case.
    pub fn add_message_to(&mut self, id: &str, message: Message) -> Result<ReconcileOutcome> {
        let position = match self.position(id) {
            Some(position) => position,
            None => {
                tracing::warn!(
                    "[ConversationManager] add_message_to() target '{}' no longer exists",
                    id
                );
                return Err(SageError::conversation_not_found(id));
            }
        };

        let (updated, outcome) = apply_message(&self.conversations[position].messages, message);
        self.conversations[position].messages = updated;
        self.conversations[position].touch();
        self.move_to_front(position);

        if self.active_id.as_deref() == Some(id) {
            self.active_buffer = self.conversations[0].messages.clone();
            self.publish_view();
        }

        Ok(outcome)
    }

    /// Deletes a conversation from the registry.
    ///
    /// Unknown ids are a no-op. Deleting the active conversation
    /// immediately creates a replacement so the UI always has an active
    /// conversation to render after a delete.
    pub fn delete(&mut self, id: &str) {
        let position = match self.position(id) {
            Some(position) => position,
            None => {
                tracing::debug!(
                    "[ConversationManager] delete() skipped unknown conversation '{}'",
                    id
                );
                return;
            }
        };

        let removed = self.conversations.remove(position);
        tracing::debug!(
            "[ConversationManager] Deleted conversation '{}' ({})",
            removed.title,
            removed.id
        );

        if self.active_id.as_deref() == Some(id) {
            self.active_id = None;
            self.active_buffer.clear();
            self.create(None);
        }
    }

    /// Renames a conversation.
    ///
    /// Title-only: messages, sidebar order, recency, and the active
    /// pointer are untouched. Unknown ids are a no-op.
    pub fn rename(&mut self, id: &str, title: &str) {
        match self.position(id) {
            Some(position) => {
                self.conversations[position].title = title.to_string();
            }
            None => {
                tracing::debug!(
                    "[ConversationManager] rename() skipped unknown conversation '{}'",
                    id
                );
            }
        }
    }

    /// Returns the conversation registry, most recently created or active
    /// first.
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    /// Returns sidebar listing entries in registry order.
    pub fn summaries(&self) -> Vec<ConversationSummary> {
        self.conversations.iter().map(ConversationSummary::from).collect()
    }

    /// Returns the active conversation's messages; empty when none is
    /// active.
    pub fn active_messages(&self) -> &[Message] {
        &self.active_buffer
    }

    /// Returns the ID of the currently active conversation.
    pub fn active_conversation_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// Returns the active conversation's registry entry.
    pub fn active_conversation(&self) -> Option<&Conversation> {
        let id = self.active_id.as_deref()?;
        self.conversations.iter().find(|conversation| conversation.id == id)
    }

    /// Subscribes to active-view snapshots.
    ///
    /// The receiver always holds the latest view; `create`, `load`,
    /// message applies to the active conversation, and `delete` of the
    /// active conversation each publish one.
    pub fn subscribe(&self) -> watch::Receiver<ActiveView> {
        self.view_tx.subscribe()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.conversations.iter().position(|conversation| conversation.id == id)
    }

    fn move_to_front(&mut self, position: usize) {
        if position > 0 {
            let conversation = self.conversations.remove(position);
            self.conversations.insert(0, conversation);
        }
    }

    fn publish_view(&self) {
        let view = ActiveView {
            conversation_id: self.active_id.clone(),
            messages: self.active_buffer.clone(),
        };
        let _ = self.view_tx.send_replace(view);
    }
}

impl Default for ConversationManager {
    fn default() -> Self {
        Self::new()
    }
}
