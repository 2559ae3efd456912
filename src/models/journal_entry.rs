use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::lenient;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(deserialize_with = "lenient::local_timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(deserialize_with = "lenient::local_timestamp")]
    pub updated_at: NaiveDateTime,
    /// Weak reference; may point at a mood that does not exist.
    #[serde(default, deserialize_with = "lenient::weak_uuid")]
    pub mood_id: Option<Uuid>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl JournalEntry {
    /// Adds a trimmed tag unless it is blank or already present (case-sensitive).
    pub fn add_tag(&mut self, tag: &str) -> bool {
        push_unique_tag(&mut self.tags, tag)
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }
}

pub(crate) fn push_unique_tag(tags: &mut Vec<String>, tag: &str) -> bool {
    let tag = tag.trim();
    if tag.is_empty() || tags.iter().any(|t| t == tag) {
        return false;
    }
    tags.push(tag.to_string());
    true
}

/// Normalizes a tag list: trimmed, blanks dropped, first occurrence kept.
pub(crate) fn dedupe_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = Vec::new();
    for tag in tags {
        push_unique_tag(&mut out, tag.as_ref());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry() -> JournalEntry {
        let ts = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        JournalEntry {
            id: Uuid::new_v4(),
            title: "Morning".into(),
            content: "Slept well".into(),
            created_at: ts,
            updated_at: ts,
            mood_id: None,
            tags: vec![],
        }
    }

    #[test]
    fn test_add_tag_suppresses_duplicates() {
        let mut e = entry();
        assert!(e.add_tag("work"));
        assert!(!e.add_tag(" work "));
        assert!(e.add_tag("Work"));
        assert!(!e.add_tag("   "));
        assert_eq!(e.tags, vec!["work", "Work"]);
    }

    #[test]
    fn test_remove_tag() {
        let mut e = entry();
        e.add_tag("a");
        e.add_tag("b");
        e.remove_tag("a");
        e.remove_tag("missing");
        assert_eq!(e.tags, vec!["b"]);
    }

    #[test]
    fn test_dedupe_tags_keeps_first_occurrence() {
        let tags = dedupe_tags(["x", "y", "x", " y", ""]);
        assert_eq!(tags, vec!["x", "y"]);
    }

    #[test]
    fn test_camel_case_json() {
        let json = serde_json::to_value(entry()).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("moodId").is_some());
    }
}
