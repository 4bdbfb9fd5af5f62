//! Message types for support conversations.
//!
//! A conversation is an ordered list of messages. Messages are immutable
//! once created; the assistant greeting and the error apology use fixed,
//! user-facing wording.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The greeting shown at the start of every conversation.
pub const GREETING: &str =
    "Hello! I'm your AI customer support assistant. How can I help you today?";

/// Fixed apology shown in place of a reply when a request fails.
/// The underlying error is logged, never surfaced here.
pub const APOLOGY: &str = "I apologize, but I'm having trouble processing your request \
     right now. Please try again or contact our support team directly.";

/// Role of a message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The end user.
    User,
    /// The support assistant (including synthetic error entries).
    Assistant,
}

/// A single message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message author.
    pub role: Role,
    /// Message text.
    pub content: String,
    /// Creation timestamp (server-provided for replies, local otherwise).
    pub timestamp: DateTime<Utc>,
    /// Server-signaled escalation to a human agent. Display-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escalation_needed: Option<bool>,
    /// Marks a synthetic error entry.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub error: bool,
}

impl Message {
    /// Create a user message stamped with the local clock.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
            escalation_needed: None,
            error: false,
        }
    }

    /// Create an assistant message with a server-provided timestamp.
    pub fn assistant(
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
        escalation_needed: Option<bool>,
    ) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp,
            escalation_needed,
            error: false,
        }
    }

    /// Create the canonical conversation greeting.
    pub fn greeting() -> Self {
        Self {
            role: Role::Assistant,
            content: GREETING.into(),
            timestamp: Utc::now(),
            escalation_needed: None,
            error: false,
        }
    }

    /// Create the synthetic error entry appended when a send fails.
    pub fn apology() -> Self {
        Self {
            role: Role::Assistant,
            content: APOLOGY.into(),
            timestamp: Utc::now(),
            escalation_needed: None,
            error: true,
        }
    }

    /// Whether this message carries an escalation badge.
    pub fn is_escalated(&self) -> bool {
        self.escalation_needed == Some(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let msg = Message::user("track my order");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "track my order");
        assert!(!msg.error);
        assert!(msg.escalation_needed.is_none());
    }

    #[test]
    fn test_greeting_is_assistant() {
        let msg = Message::greeting();
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.content, GREETING);
        assert!(!msg.error);
    }

    #[test]
    fn test_apology_is_flagged() {
        let msg = Message::apology();
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.content, APOLOGY);
        assert!(msg.error);
    }

    #[test]
    fn test_escalation_badge() {
        let escalated = Message::assistant("handing you over", Utc::now(), Some(true));
        assert!(escalated.is_escalated());

        let normal = Message::assistant("here you go", Utc::now(), None);
        assert!(!normal.is_escalated());
    }

    #[test]
    fn test_serialization_roles() {
        let json = serde_json::to_string(&Message::user("hi")).unwrap();
        assert!(json.contains("\"role\":\"user\""));
        // Flags absent from the wire form when unset
        assert!(!json.contains("escalation_needed"));
        assert!(!json.contains("error"));
    }
}
