use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ChatConfig;

pub const DEFAULT_GREETING: &str = "Hello! I'm your AI study assistant. How can I help you today?";

pub const DEFAULT_RESPONSES: [&str; 5] = [
    "That's a great question! Let me help you with that.",
    "I understand what you're asking. Here's what I think...",
    "Based on your question, I'd suggest...",
    "That's an interesting point. Consider this perspective...",
    "I'm here to help! Let me break that down for you.",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub origin: Origin,
    pub text: String,
}

impl ChatMessage {
    pub fn row_class(&self) -> &'static str {
        match self.origin {
            Origin::User => "chat-message mb-4 text-right",
            Origin::Assistant => "chat-message mb-4 text-left",
        }
    }

    pub fn bubble_class(&self) -> &'static str {
        match self.origin {
            Origin::User => {
                "inline-block max-w-xs lg:max-w-md px-4 py-2 rounded-lg bg-primary text-white"
            }
            Origin::Assistant => {
                "inline-block max-w-xs lg:max-w-md px-4 py-2 rounded-lg bg-white text-gray-800 shadow"
            }
        }
    }
}

/// Append-only message log with a canned responder. Replies carry no
/// conversation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLog {
    responses: Vec<String>,
    messages: Vec<ChatMessage>,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new(&ChatConfig::default())
    }
}

impl ChatLog {
    /// Starts the log with the greeting already in place.
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            responses: config.responses.clone(),
            messages: vec![ChatMessage {
                origin: Origin::Assistant,
                text: config.greeting.clone(),
            }],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn responses(&self) -> &[String] {
        &self.responses
    }

    /// Appends the trimmed user message. Returns `false` for blank input, in
    /// which case no reply should be scheduled.
    pub fn submit(&mut self, raw: &str) -> bool {
        let text = raw.trim();
        if text.is_empty() {
            return false;
        }
        debug!(chars = text.chars().count(), "user message appended");
        self.messages.push(ChatMessage {
            origin: Origin::User,
            text: text.to_string(),
        });
        true
    }

    /// Appends one canned assistant reply picked uniformly at random.
    pub fn reply<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&ChatMessage> {
        let text = self.responses.choose(rng)?.clone();
        debug!("assistant reply appended");
        self.messages.push(ChatMessage {
            origin: Origin::Assistant,
            text,
        });
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn log_opens_with_greeting() {
        let log = ChatLog::default();
        assert_eq!(log.messages().len(), 1);
        assert_eq!(log.messages()[0].origin, Origin::Assistant);
        assert_eq!(log.messages()[0].text, DEFAULT_GREETING);
    }

    #[test]
    fn submit_appends_user_message_immediately() {
        let mut log = ChatLog::default();
        assert!(log.submit("  what is entropy? "));
        let last = log.messages().last().expect("message");
        assert_eq!(last.origin, Origin::User);
        assert_eq!(last.text, "what is entropy?");
        assert_eq!(last.row_class(), "chat-message mb-4 text-right");
        assert!(last.bubble_class().contains("bg-primary"));
    }

    #[test]
    fn blank_submission_is_ignored() {
        let mut log = ChatLog::default();
        assert!(!log.submit("   "));
        assert_eq!(log.messages().len(), 1);
    }

    #[test]
    fn reply_comes_from_fixed_set() {
        let mut log = ChatLog::default();
        let mut rng = StdRng::seed_from_u64(99);
        log.submit("hi");

        let reply = log.reply(&mut rng).expect("reply").clone();
        assert_eq!(reply.origin, Origin::Assistant);
        assert!(DEFAULT_RESPONSES.contains(&reply.text.as_str()));
        assert_eq!(reply.row_class(), "chat-message mb-4 text-left");
        assert_eq!(log.messages().len(), 3);
    }
}
