//! Placeholder reconciliation for message histories.
//!
//! The chat flow inserts a transient assistant placeholder ("AI is
//! thinking") as soon as a response is scheduled. When the real response
//! arrives it must land in the placeholder's slot, not at the end of the
//! log. `apply_message` is the single primitive deciding between that
//! in-place replacement and a plain append.

use super::message::{Message, MessageRole};

/// How [`apply_message`] integrated an incoming message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The message was appended at `index` (the end of the log).
    Appended { index: usize },
    /// The message replaced the generation placeholder at `index`.
    Replaced { index: usize },
}

/// Applies an incoming message to a message history.
///
/// A resolved assistant message (assistant role, not generating) replaces
/// the first assistant placeholder in the history, preserving order and
/// length. Everything else is appended at the end: user messages,
/// placeholders themselves, and resolved assistant messages when no
/// placeholder exists.
///
/// The input slice is never mutated; the returned `Vec` is a fresh
/// sequence. If more than one placeholder is present (an upstream
/// scheduling bug), only the first is replaced and a warning is traced.
pub fn apply_message(history: &[Message], incoming: Message) -> (Vec<Message>, ReconcileOutcome) {
    let resolves_placeholder =
        incoming.role == MessageRole::Assistant && !incoming.is_generating();

    if resolves_placeholder {
        let mut placeholders = history
            .iter()
            .enumerate()
            .filter(|(_, message)| message.role == MessageRole::Assistant && message.is_generating());

        if let Some((index, _)) = placeholders.next() {
            if placeholders.next().is_some() {
                tracing::warn!(
                    "[apply_message] Multiple generation placeholders in history, replacing the first at index {}",
                    index
                );
            }

            let mut updated = history.to_vec();
            updated[index] = incoming;
            return (updated, ReconcileOutcome::Replaced { index });
        }
    }

    let mut updated = history.to_vec();
    let index = updated.len();
    updated.push(incoming);
    (updated, ReconcileOutcome::Appended { index })
}
