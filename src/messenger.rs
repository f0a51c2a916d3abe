//! Outbound messaging seam. The chat transport lives outside the crate;
//! the host only ever needs to deliver text somewhere.

use crate::common::ChatId;

pub trait Messenger {
    /// Deliver `text` to a group chat or, with a player id, to that
    /// player's private chat.
    fn send(&mut self, chat: ChatId, text: &str) -> anyhow::Result<()>;
}

/// Captures outgoing messages for assertions in tests.
#[derive(Debug, Default)]
pub struct RecordingMessenger {
    sent: Vec<(ChatId, String)>,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> &[(ChatId, String)] {
        &self.sent
    }

    /// Messages delivered to one chat, in order.
    pub fn texts_for(&self, chat: ChatId) -> Vec<&str> {
        self.sent
            .iter()
            .filter(|(c, _)| *c == chat)
            .map(|(_, t)| t.as_str())
            .collect()
    }

    pub fn last_for(&self, chat: ChatId) -> Option<&str> {
        self.texts_for(chat).last().copied()
    }
}

impl Messenger for RecordingMessenger {
    fn send(&mut self, chat: ChatId, text: &str) -> anyhow::Result<()> {
        self.sent.push((chat, text.to_string()));
        Ok(())
    }
}
