//! # Input shapes
//!
//! Values the rendering layer builds from user input before handing them to
//! the record store. The store itself accepts typed records as-is; validation
//! happens here, expressed via `validator` derive macros.

use chrono::NaiveDateTime;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::journal_entry::dedupe_tags;
use crate::models::{JournalEntry, Mood, MoodLabel};

// ============================================================================
// Mood
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewMood {
    pub label: MoodLabel,

    #[validate(range(min = 1, max = 10, message = "Mood value must be 1-10"))]
    pub value: u8,

    #[validate(length(max = 5000, message = "Note must be under 5000 characters"))]
    pub note: Option<String>,
}

impl NewMood {
    pub fn new(label: MoodLabel, value: u8) -> Self {
        Self {
            label,
            value,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Validates and stamps a fresh id, the given timestamp and label color.
    pub fn into_mood(self, now: NaiveDateTime) -> AppResult<Mood> {
        self.validate()?;
        let note = self.note.filter(|n| !n.trim().is_empty());
        Ok(Mood::recorded_at(self.label, self.value, now, note))
    }
}

// ============================================================================
// Journal
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewJournalEntry {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    pub mood_id: Option<Uuid>,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl NewJournalEntry {
    /// Title and content must contain something other than whitespace
    pub fn validate_not_blank(&self) -> Result<(), String> {
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            return Err("Title and content are required".into());
        }
        Ok(())
    }

    pub fn into_entry(self, now: NaiveDateTime) -> AppResult<JournalEntry> {
        self.validate()?;
        self.validate_not_blank().map_err(AppError::Validation)?;

        Ok(JournalEntry {
            id: Uuid::new_v4(),
            title: self.title,
            content: self.content,
            created_at: now,
            updated_at: now,
            mood_id: self.mood_id,
            tags: dedupe_tags(self.tags),
        })
    }
}

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntryUpdate {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: Option<String>,

    pub mood_id: Option<Uuid>,

    pub tags: Option<Vec<String>>,
}

impl JournalEntryUpdate {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Rejects a title or content that is given but blank, as on create.
    pub fn validated(self) -> AppResult<Self> {
        self.validate()?;
        let blank = |field: &Option<String>| field.as_deref().is_some_and(|v| v.trim().is_empty());
        if blank(&self.title) || blank(&self.content) {
            return Err(AppError::Validation("Title and content are required".into()));
        }
        Ok(self)
    }

    /// Merges the given fields and refreshes `updated_at`.
    pub fn apply_to(self, entry: &mut JournalEntry, now: NaiveDateTime) {
        if let Some(title) = self.title {
            entry.title = title;
        }
        if let Some(content) = self.content {
            entry.content = content;
        }
        if let Some(mood_id) = self.mood_id {
            entry.mood_id = Some(mood_id);
        }
        if let Some(tags) = self.tags {
            entry.tags = dedupe_tags(tags);
        }
        entry.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 2)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_mood_value_out_of_range_rejected() {
        assert!(matches!(
            NewMood::new(MoodLabel::Happy, 0).into_mood(at(9)),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            NewMood::new(MoodLabel::Happy, 11).into_mood(at(9)),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_mood_in_range_accepted() {
        let mood = NewMood::new(MoodLabel::Angry, 10)
            .with_note("traffic")
            .into_mood(at(9))
            .unwrap();
        assert_eq!(mood.value, 10);
        assert_eq!(mood.timestamp, at(9));
        assert_eq!(mood.color, "#FF6384");
        assert_eq!(mood.note.as_deref(), Some("traffic"));
    }

    #[test]
    fn test_blank_note_dropped() {
        let mood = NewMood::new(MoodLabel::Neutral, 5)
            .with_note("   ")
            .into_mood(at(9))
            .unwrap();
        assert!(mood.note.is_none());
    }

    #[test]
    fn test_blank_journal_entry_rejected() {
        let req = NewJournalEntry {
            title: "   ".into(),
            content: "something".into(),
            ..Default::default()
        };
        assert!(matches!(req.into_entry(at(9)), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_new_journal_entry_dedupes_tags() {
        let req = NewJournalEntry {
            title: "Day".into(),
            content: "Long walk".into(),
            mood_id: None,
            tags: vec!["walk".into(), "walk".into(), " outside ".into()],
        };
        let entry = req.into_entry(at(9)).unwrap();
        assert_eq!(entry.tags, vec!["walk", "outside"]);
        assert_eq!(entry.created_at, entry.updated_at);
    }

    #[test]
    fn test_blank_update_rejected() {
        let update = JournalEntryUpdate {
            title: Some("   ".into()),
            content: Some(String::new()),
            ..Default::default()
        };
        assert!(matches!(update.validated(), Err(AppError::Validation(_))));
        assert!(matches!(
            JournalEntryUpdate::title("x".repeat(201)).validated(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_update_with_absent_fields_is_valid() {
        let update = JournalEntryUpdate {
            tags: Some(vec!["calm".into()]),
            ..Default::default()
        };
        assert!(update.validated().is_ok());
        assert!(JournalEntryUpdate::title("Renamed").validated().is_ok());
    }

    #[test]
    fn test_update_touches_only_given_fields() {
        let mut entry = NewJournalEntry {
            title: "Old".into(),
            content: "Body".into(),
            mood_id: Some(Uuid::new_v4()),
            tags: vec!["t".into()],
        }
        .into_entry(at(9))
        .unwrap();
        let before = entry.clone();

        JournalEntryUpdate::title("New").apply_to(&mut entry, at(11));

        assert_eq!(entry.title, "New");
        assert_eq!(entry.updated_at, at(11));
        assert_eq!(entry.content, before.content);
        assert_eq!(entry.mood_id, before.mood_id);
        assert_eq!(entry.tags, before.tags);
        assert_eq!(entry.created_at, before.created_at);
        assert_eq!(entry.id, before.id);
    }
}
