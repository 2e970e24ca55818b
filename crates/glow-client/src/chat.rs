// File: crates/glow-client/src/chat.rs
// Summary: Chat transcript state for the assistant screen.

use crate::api::ChatBackend;
use crate::models::{Message, Sender};

pub const FALLBACK_REPLY: &str = "I'm sorry, I'm having trouble responding right now. Please try again later.";

pub const GREETING: &str = "Hello! How can I help with your skincare today?";

/// Owns the transcript; the backend is borrowed per call.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    messages: Vec<Message>,
    next_id: u64,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session that opens with the assistant's greeting.
    pub fn with_greeting() -> Self {
        let mut s = Self::new();
        s.append(Sender::Ai, GREETING.to_string());
        s
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Appends the user's message, asks `backend` once and appends the reply.
    ///
    /// Blank input is ignored and returns `None`. A failed request is logged
    /// and replaced by [`FALLBACK_REPLY`].
    pub fn send<B: ChatBackend + ?Sized>(&mut self, backend: &B, text: &str) -> Option<&Message> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.append(Sender::User, text.to_string());
        let reply = match backend.chat(text) {
            Ok(m) => m.content,
            Err(e) => {
                log::warn!("chat request failed: {e}");
                FALLBACK_REPLY.to_string()
            }
        };
        self.append(Sender::Ai, reply);
        self.messages.last()
    }

    fn append(&mut self, sender: Sender, content: String) {
        self.next_id += 1;
        self.messages.push(Message::new(self.next_id.to_string(), sender, content));
    }
}
