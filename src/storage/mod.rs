//! Durable key-value persistence for the record snapshot.
//!
//! The store persists one JSON document under one fixed key. Every save fully
//! replaces the previous value. A missing or unparsable value loads as the
//! empty snapshot; that reset is logged, never raised.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::AppResult;
use crate::models::Snapshot;

/// Raw key-value backend.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
}

/// Persistence port the record store is constructed with.
pub trait SnapshotPersistence: Send + Sync {
    /// Never fails: absent or corrupt data yields `Snapshot::default()`.
    fn load(&self) -> Snapshot;
    fn save(&self, snapshot: &Snapshot) -> AppResult<()>;
}

/// Serializes snapshots as JSON under a single key of a `KeyValueStorage`.
#[derive(Debug, Clone)]
pub struct KeyedSnapshotStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> KeyedSnapshotStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: KeyValueStorage> SnapshotPersistence for KeyedSnapshotStore<S> {
    fn load(&self) -> Snapshot {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key = %self.key, "No persisted snapshot, starting empty");
                return Snapshot::default();
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Snapshot unreadable, starting empty");
                return Snapshot::default();
            }
        };

        match serde_json::from_str::<Snapshot>(&raw) {
            Ok(snapshot) => {
                tracing::debug!(
                    key = %self.key,
                    moods = snapshot.moods.len(),
                    journal_entries = snapshot.journal_entries.len(),
                    chat_messages = snapshot.chat_messages.len(),
                    "Snapshot restored"
                );
                snapshot
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Snapshot corrupt, resetting to empty");
                Snapshot::default()
            }
        }
    }

    fn save(&self, snapshot: &Snapshot) -> AppResult<()> {
        let raw = serde_json::to_string(snapshot)?;
        self.storage.set(&self.key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChatMessage, Mood, MoodLabel};

    fn sample() -> Snapshot {
        Snapshot {
            moods: vec![Mood::new(MoodLabel::Happy, 7, Some("sunny".into()))],
            journal_entries: vec![],
            chat_messages: vec![ChatMessage::user("hello")],
        }
    }

    #[test]
    fn test_round_trip_is_identical() {
        let persistence = KeyedSnapshotStore::new(MemoryStorage::new(), "k");
        let snapshot = sample();
        persistence.save(&snapshot).unwrap();
        assert_eq!(persistence.load(), snapshot);
    }

    #[test]
    fn test_absent_key_loads_empty() {
        let persistence = KeyedSnapshotStore::new(MemoryStorage::new(), "k");
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn test_corrupt_value_loads_empty() {
        let storage = MemoryStorage::new();
        storage.set("k", "{not json").unwrap();
        let persistence = KeyedSnapshotStore::new(storage, "k");
        assert_eq!(persistence.load(), Snapshot::default());
    }

    #[test]
    fn test_wrong_shape_loads_empty() {
        let storage = MemoryStorage::new();
        storage.set("k", r#"{"moods": [{"id": 1}]}"#).unwrap();
        let persistence = KeyedSnapshotStore::new(storage, "k");
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn test_browser_written_snapshot_loads() {
        let mood_id = uuid::Uuid::new_v4();
        let raw = format!(
            r##"{{
                "moods": [{{
                    "id": "{mood_id}",
                    "value": 7,
                    "label": "Happy",
                    "color": "#FFCD56",
                    "timestamp": "2024-04-12T10:00:00.000Z"
                }}],
                "journalEntries": [{{
                    "id": "{entry_id}",
                    "title": "Walk",
                    "content": "Park loop",
                    "createdAt": "2024-04-12T11:00:00.000Z",
                    "updatedAt": "2024-04-12T11:05:00.000Z",
                    "moodId": "",
                    "tags": ["outside"]
                }}],
                "chatMessages": [{{
                    "id": "{message_id}",
                    "content": "hi",
                    "sender": "user",
                    "timestamp": "2024-04-12T12:00:00.000Z"
                }}]
            }}"##,
            entry_id = uuid::Uuid::new_v4(),
            message_id = uuid::Uuid::new_v4(),
        );
        let storage = MemoryStorage::new();
        storage.set("k", &raw).unwrap();

        let snapshot = KeyedSnapshotStore::new(storage, "k").load();

        assert_eq!(snapshot.moods.len(), 1);
        assert_eq!(snapshot.moods[0].id, mood_id);
        assert_eq!(
            Some(snapshot.moods[0].timestamp),
            crate::models::lenient::parse_local_timestamp("2024-04-12T10:00:00.000Z")
        );
        assert_eq!(snapshot.journal_entries.len(), 1);
        assert_eq!(snapshot.journal_entries[0].mood_id, None);
        assert_eq!(snapshot.chat_messages.len(), 1);
    }

    #[test]
    fn test_non_uuid_mood_reference_reads_as_none() {
        let raw = format!(
            r#"{{"moods": [], "chatMessages": [], "journalEntries": [{{
                "id": "{}", "title": "t", "content": "c",
                "createdAt": "2024-04-12T11:00:00", "updatedAt": "2024-04-12T11:00:00",
                "moodId": "mood-42"
            }}]}}"#,
            uuid::Uuid::new_v4()
        );
        let storage = MemoryStorage::new();
        storage.set("k", &raw).unwrap();

        let snapshot = KeyedSnapshotStore::new(storage, "k").load();

        assert_eq!(snapshot.journal_entries.len(), 1);
        assert!(snapshot.journal_entries[0].mood_id.is_none());
        assert!(snapshot.journal_entries[0].tags.is_empty());
    }

    #[test]
    fn test_save_replaces_previous_value() {
        let storage = MemoryStorage::new();
        let persistence = KeyedSnapshotStore::new(storage.clone(), "k");
        persistence.save(&sample()).unwrap();
        persistence.save(&Snapshot::default()).unwrap();
        assert!(persistence.load().is_empty());
        assert_eq!(storage.len(), 1);
    }
}
