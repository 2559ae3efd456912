use serde::{Deserialize, Serialize};

use super::{ChatMessage, JournalEntry, Mood};

/// Complete contents of the three record collections; the persisted layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub moods: Vec<Mood>,
    pub journal_entries: Vec<JournalEntry>,
    pub chat_messages: Vec<ChatMessage>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.moods.is_empty() && self.journal_entries.is_empty() && self.chat_messages.is_empty()
    }
}
