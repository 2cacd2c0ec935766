//! Status line side channel.
//!
//! The core only ever posts short transient messages; whoever owns the screen
//! decides where and how long they are shown.

/// Receiver for user-facing feedback (collision messages, mode changes).
pub trait Feedback {
    fn post(&mut self, message: &str);
}

/// Holds the most recent message. Each post replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    message: String,
    posted: u64,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current message, empty before the first post
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Number of messages posted so far
    pub fn posted(&self) -> u64 {
        self.posted
    }

    pub fn clear(&mut self) {
        self.message.clear();
    }
}

impl Feedback for StatusLine {
    fn post(&mut self, message: &str) {
        self.message.clear();
        self.message.push_str(message);
        self.posted += 1;
    }
}

/// Collects every message; used where the full sequence matters.
impl Feedback for Vec<String> {
    fn post(&mut self, message: &str) {
        self.push(message.to_string());
    }
}
