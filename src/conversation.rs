// src/conversation.rs

use crate::constants::GREETING;
use crate::models::Message;

/// Append-only list of chat messages, seeded with the bot greeting.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::with_greeting(GREETING)
    }

    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::bot(greeting)],
        }
    }

    /// Appends a message and returns its index.
    pub fn push(&mut self, message: Message) -> usize {
        self.messages.push(message);
        self.messages.len() - 1
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sender;

    #[test]
    fn test_new_conversation_is_seeded() {
        let conversation = Conversation::new();
        assert_eq!(conversation.len(), 1);
        assert_eq!(conversation.messages()[0].text(), GREETING);
        assert_eq!(conversation.messages()[0].sender(), Sender::Bot);
    }

    #[test]
    fn test_push_keeps_existing_entries() {
        let mut conversation = Conversation::new();
        let before = conversation.messages().to_vec();

        let idx = conversation.push(Message::user("Oslo"));
        assert_eq!(idx, 1);
        assert_eq!(&conversation.messages()[..1], before.as_slice());
        assert_eq!(conversation.last(), Some(&Message::user("Oslo")));
    }
}
