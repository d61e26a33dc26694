use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// A single transcript entry. Never mutated once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub sender: Sender,
    pub body: String,
    pub sent_at: DateTime<Local>,
}

impl Message {
    pub fn user(body: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            body: body.into(),
            sent_at: Local::now(),
        }
    }

    pub fn assistant(body: impl Into<String>) -> Self {
        Self {
            sender: Sender::Assistant,
            body: body.into(),
            sent_at: Local::now(),
        }
    }
}
