pub mod chat_message;
pub mod journal_entry;
pub mod lenient;
pub mod mood;
pub mod recommendation;
pub mod snapshot;

pub use chat_message::{ChatMessage, Sender};
pub use journal_entry::JournalEntry;
pub use mood::{Mood, MoodLabel, MoodOption, MOOD_OPTIONS};
pub use recommendation::{Difficulty, Recommendation, RecommendationType};
pub use snapshot::Snapshot;
