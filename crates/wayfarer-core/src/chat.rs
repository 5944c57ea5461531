//! Simulated travel assistant chat.
//!
//! [`ChatSession`] keeps a transcript of the exchange. Replies are canned and
//! arrive after a configurable delay; the session never reads or mutates
//! plans.

use std::time::Duration;

use jiff::Timestamp;
use log::debug;
use serde::{Deserialize, Serialize};

/// Delay before the assistant answers, unless configured otherwise.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(800);

const REPLIES: &[&str] = &[
    "That sounds like a great trip. Book popular sights a few days ahead to skip the queues.",
    "Leave some slack in the schedule; travel days usually take longer than planned.",
    "Local markets are a good place to try regional food on a modest budget.",
    "Check the weather for your dates and pack one layer more than you think you need.",
    "For a group, splitting the budget per day makes it easier to keep track of spending.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub sent_at: Timestamp,
}

impl ChatMessage {
    fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            sent_at: Timestamp::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatConfig {
    /// Simulated time the assistant takes to answer
    pub latency: Duration,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
        }
    }
}

/// A conversation with the simulated assistant.
#[derive(Debug, Clone)]
pub struct ChatSession {
    config: ChatConfig,
    transcript: Vec<ChatMessage>,
    replies_sent: usize,
}

impl ChatSession {
    pub fn new(config: ChatConfig) -> Self {
        Self {
            config,
            transcript: Vec::new(),
            replies_sent: 0,
        }
    }

    /// Send a message and wait for the assistant's answer.
    ///
    /// Input is trimmed; blank input is ignored and returns `None`. Otherwise
    /// the user message is recorded immediately and the reply after the
    /// configured latency. Dropping the future while it waits leaves only the
    /// user message in the transcript.
    pub async fn send(&mut self, text: &str) -> Option<&ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.transcript.push(ChatMessage::new(ChatRole::User, text));
        debug!("Chat message queued, replying in {:?}", self.config.latency);
        tokio::time::sleep(self.config.latency).await;

        let reply = REPLIES[self.replies_sent % REPLIES.len()];
        self.replies_sent += 1;
        self.transcript.push(ChatMessage::new(ChatRole::Assistant, reply));
        self.transcript.last()
    }

    /// Every message so far, oldest first.
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Forget the whole conversation.
    pub fn clear(&mut self) {
        self.transcript.clear();
        self.replies_sent = 0;
    }

    pub fn config(&self) -> ChatConfig {
        self.config
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(ChatConfig::default())
    }
}
