//! Read-only message fixtures.

use serde::{Deserialize, Serialize};

use super::Walker;

/// One conversation row in the inbox.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: u64,
    pub walker_id: u64,
    pub last_message: String,
    #[serde(default)]
    pub unread: bool,
}

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Walker,
    User,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

/// A conversation together with the walker it is with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InboxEntry {
    pub conversation: Conversation,
    pub walker: Walker,
}
