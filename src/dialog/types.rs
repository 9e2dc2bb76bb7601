//! Dialog and message types

use serde::{Deserialize, Serialize};

use crate::template::ClientRecord;

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Client,
    Operator,
    /// Suggestions from the assistant
    Ai,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::Client => "client",
            Sender::Operator => "operator",
            Sender::Ai => "ai",
        }
    }
}

/// A message in a dialog's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    /// Display time, `HH:MM`
    pub time: String,
}

impl Message {
    pub fn new(id: u64, sender: Sender, text: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            id,
            sender,
            text: text.into(),
            time: time.into(),
        }
    }
}

/// A conversation thread between a client and an operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialog {
    pub id: u64,
    /// Name shown in the dialog list
    pub name: String,
    /// Avatar image path
    pub avatar: String,
    pub client: ClientRecord,
    /// Messages, oldest first
    pub messages: Vec<Message>,
}

impl Dialog {
    /// Most recent message, used as the list preview
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}
