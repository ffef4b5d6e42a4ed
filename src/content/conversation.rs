//! AI conversation panel
//!
//! A scripted chat: the tutor greets, and answers every user message with
//! the same encouragement after a short delay. Speaking controls only flip
//! flags; nothing is recorded.

use chrono::{DateTime, Utc};
use serde::Serialize;

pub const TUTOR_GREETING: &str =
    "Hello Nicko. I'm your english tutor, are you ready to speak with me?";
pub const TUTOR_REPLY: &str = "That's great! Keep practicing your English skills.";

/// Delay before the tutor reply is appended
pub const TUTOR_REPLY_DELAY_MS: u32 = 1_000;

/// How long the "listen again" indicator stays on
pub const LISTEN_AGAIN_MS: u32 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Bot,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub id: u64,
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationAction {
    InputChanged(String),
    /// Send the current input
    Send,
    TutorReplied,
    ToggleRecording,
    ListenStarted,
    ListenFinished,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub recording: bool,
    pub listening: bool,
    /// Tutor replies owed for messages already sent
    pub pending_replies: usize,
    #[serde(skip)]
    next_id: u64,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    /// A conversation holding only the tutor's greeting
    pub fn new() -> Self {
        let mut conversation = Self {
            messages: Vec::new(),
            input: String::new(),
            recording: false,
            listening: false,
            pending_replies: 0,
            next_id: 1,
        };
        conversation.push(Speaker::Bot, TUTOR_GREETING.to_string());
        conversation
    }

    pub fn reduce(mut self, action: ConversationAction) -> Self {
        match action {
            ConversationAction::InputChanged(input) => self.input = input,
            ConversationAction::Send => {
                // Blank input is ignored and left in the box
                if !self.input.trim().is_empty() {
                    let text = std::mem::take(&mut self.input);
                    self.push(Speaker::User, text);
                    self.pending_replies += 1;
                }
            }
            ConversationAction::TutorReplied => {
                if self.pending_replies > 0 {
                    self.pending_replies -= 1;
                    self.push(Speaker::Bot, TUTOR_REPLY.to_string());
                }
            }
            ConversationAction::ToggleRecording => self.recording = !self.recording,
            ConversationAction::ListenStarted => self.listening = true,
            ConversationAction::ListenFinished => self.listening = false,
        }
        self
    }

    /// Send `text` and deliver the tutor reply at once (no UI delay)
    pub fn exchange(self, text: impl Into<String>) -> Self {
        self.reduce(ConversationAction::InputChanged(text.into()))
            .reduce(ConversationAction::Send)
            .reduce(ConversationAction::TutorReplied)
    }

    fn push(&mut self, speaker: Speaker, text: String) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            speaker,
            text,
            timestamp: Utc::now(),
        });
        self.next_id += 1;
    }
}
