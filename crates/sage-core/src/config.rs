use serde::{Deserialize, Serialize};

/// Chat-facing strings for the conversation core.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Seed assistant greeting inserted into every new conversation.
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Title given to conversations created without an explicit one.
    #[serde(default = "default_title")]
    pub default_title: String,
}

fn default_greeting() -> String {
    "Hello! I'm your AI study assistant. How can I help you today?".to_string()
}

fn default_title() -> String {
    "New Conversation".to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            default_title: default_title(),
        }
    }
}
