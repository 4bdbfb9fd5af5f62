//! The ordered transcript of a conversation.
//!
//! A transcript always starts with the assistant greeting and is only ever
//! appended to, or replaced wholesale on reset. There is no API to remove
//! or reorder entries.

use crate::message::Message;

/// Append-only message sequence for one session.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Create a transcript containing the greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![Message::greeting()],
        }
    }

    /// Append a message.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Replace the whole transcript with a fresh greeting.
    pub fn reset(&mut self) {
        self.messages = vec![Message::greeting()];
    }

    /// Number of messages, always at least one.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// A transcript is never empty; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent message.
    pub fn last(&self) -> &Message {
        // Invariant: the greeting is always present.
        self.messages.last().unwrap_or_else(|| unreachable!())
    }

    /// Iterate over messages in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// All messages in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
