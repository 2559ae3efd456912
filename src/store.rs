//! Record store: owns moods, journal entries and chat messages, and writes the
//! full snapshot through to persistence after every mutation.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use uuid::Uuid;

use crate::config::Config;
use crate::dto::JournalEntryUpdate;
use crate::error::AppResult;
use crate::models::{ChatMessage, JournalEntry, Mood, Snapshot};
use crate::services::calendar;
use crate::storage::{FileStorage, KeyedSnapshotStore, SnapshotPersistence};

pub type Clock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;

pub struct RecordStore {
    snapshot: Snapshot,
    persistence: Box<dyn SnapshotPersistence>,
    clock: Clock,
}

impl RecordStore {
    /// Hydrates from persistence; absent or corrupt data starts empty.
    pub fn open(persistence: impl SnapshotPersistence + 'static) -> Self {
        let snapshot = persistence.load();
        Self {
            snapshot,
            persistence: Box::new(persistence),
            clock: Arc::new(|| Local::now().naive_local()),
        }
    }

    /// File-backed store under the configured data dir and key.
    pub fn from_config(config: &Config) -> Self {
        tracing::info!(
            data_dir = %config.data_dir.display(),
            key = %config.storage_key,
            "Opening record store"
        );
        Self::open(KeyedSnapshotStore::new(
            FileStorage::new(&config.data_dir),
            config.storage_key.clone(),
        ))
    }

    pub fn with_clock(mut self, clock: impl Fn() -> NaiveDateTime + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn now(&self) -> NaiveDateTime {
        (self.clock)()
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn moods(&self) -> &[Mood] {
        &self.snapshot.moods
    }

    pub fn journal_entries(&self) -> &[JournalEntry] {
        &self.snapshot.journal_entries
    }

    pub fn chat_messages(&self) -> &[ChatMessage] {
        &self.snapshot.chat_messages
    }

    // ── Moods ────────────────────────────────────────────────────────────

    pub fn add_mood(&mut self, mood: Mood) -> AppResult<()> {
        tracing::debug!(mood_id = %mood.id, label = %mood.label, value = mood.value, "Mood added");
        self.snapshot.moods.push(mood);
        self.persist()
    }

    pub fn mood(&self, id: Uuid) -> Option<&Mood> {
        self.snapshot.moods.iter().find(|m| m.id == id)
    }

    /// Dominant mood for the store clock's current date.
    pub fn todays_mood(&self) -> Option<&Mood> {
        calendar::dominant_mood(&self.snapshot.moods, self.now().date())
    }

    /// Resolves the entry's weak mood reference; dangling ids yield `None`.
    pub fn mood_for_entry(&self, entry: &JournalEntry) -> Option<&Mood> {
        entry.mood_id.and_then(|id| self.mood(id))
    }

    // ── Journal ──────────────────────────────────────────────────────────

    pub fn add_journal_entry(&mut self, entry: JournalEntry) -> AppResult<()> {
        tracing::debug!(entry_id = %entry.id, "Journal entry added");
        self.snapshot.journal_entries.push(entry);
        self.persist()
    }

    /// Returns whether an entry matched. A missing id is a no-op. A blank
    /// title or content is rejected before anything changes.
    pub fn update_journal_entry(
        &mut self,
        id: Uuid,
        update: JournalEntryUpdate,
    ) -> AppResult<bool> {
        let update = update.validated()?;
        let now = self.now();
        let matched = match self.snapshot.journal_entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                update.apply_to(entry, now);
                tracing::debug!(entry_id = %id, "Journal entry updated");
                true
            }
            None => {
                tracing::debug!(entry_id = %id, "Journal entry update skipped, id not found");
                false
            }
        };
        self.persist()?;
        Ok(matched)
    }

    /// Returns whether an entry was removed. A missing id is a no-op.
    pub fn delete_journal_entry(&mut self, id: Uuid) -> AppResult<bool> {
        let before = self.snapshot.journal_entries.len();
        self.snapshot.journal_entries.retain(|e| e.id != id);
        let removed = self.snapshot.journal_entries.len() != before;
        tracing::debug!(entry_id = %id, removed, "Journal entry delete");
        self.persist()?;
        Ok(removed)
    }

    pub fn journal_entry(&self, id: Uuid) -> Option<&JournalEntry> {
        self.snapshot.journal_entries.iter().find(|e| e.id == id)
    }

    /// Entries ordered by `created_at`, newest first.
    pub fn journal_entries_newest_first(&self) -> Vec<&JournalEntry> {
        let mut entries: Vec<&JournalEntry> = self.snapshot.journal_entries.iter().collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries
    }

    // ── Chat ─────────────────────────────────────────────────────────────

    pub fn add_chat_message(&mut self, message: ChatMessage) -> AppResult<()> {
        tracing::debug!(message_id = %message.id, sender = ?message.sender, "Chat message added");
        self.snapshot.chat_messages.push(message);
        self.persist()
    }

    pub fn clear_chat_messages(&mut self) -> AppResult<()> {
        let cleared = self.snapshot.chat_messages.len();
        self.snapshot.chat_messages.clear();
        tracing::debug!(cleared, "Chat history cleared");
        self.persist()
    }

    fn persist(&self) -> AppResult<()> {
        self.persistence.save(&self.snapshot).map_err(|e| {
            tracing::error!(error = %e, "Failed to persist snapshot");
            e
        })
    }
}
