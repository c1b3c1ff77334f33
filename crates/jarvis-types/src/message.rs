//! Conversation messages exchanged between the user and the agent.
//!
//! Messages live only in client memory for the length of a session. The
//! server receives them as `history` on every request and ignores them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;

use crate::emotion::Emotion;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    /// The companion. Browser clients send this as `"jarvis"`.
    #[serde(alias = "jarvis")]
    Agent,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Agent => write!(f, "agent"),
        }
    }
}

/// A single turn in a conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    /// Set on agent messages only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<Emotion>,
}

impl Message {
    /// A message typed by the user, stamped now.
    pub fn from_user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            timestamp: Utc::now(),
            emotion: None,
        }
    }

    /// A reply from the agent, stamped now.
    pub fn from_agent(text: impl Into<String>, emotion: Emotion) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Agent,
            timestamp: Utc::now(),
            emotion: Some(emotion),
        }
    }
}

/// Ordered conversation history; insertion order is chronological order.
pub type ConversationHistory = Vec<Message>;
