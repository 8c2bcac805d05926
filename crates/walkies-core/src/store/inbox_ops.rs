//! Read-only inbox access for the AppStore.

use super::AppStore;
use crate::models::{ChatMessage, InboxEntry};

impl AppStore {
    /// Conversations paired with their walker.
    ///
    /// A conversation whose walker is not in the catalog is left out.
    pub fn conversations(&self) -> Vec<InboxEntry> {
        self.conversations
            .iter()
            .filter_map(|conversation| {
                self.walker(conversation.walker_id).map(|walker| InboxEntry {
                    conversation: conversation.clone(),
                    walker,
                })
            })
            .collect()
    }

    /// Messages exchanged with a walker; empty when there are none.
    pub fn chat_thread(&self, walker_id: u64) -> Vec<ChatMessage> {
        self.chats.get(&walker_id).cloned().unwrap_or_default()
    }

    /// Number of conversations with unread messages.
    pub fn unread_count(&self) -> usize {
        self.conversations().iter().filter(|entry| entry.conversation.unread).count()
    }
}
