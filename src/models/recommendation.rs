use serde::Serialize;

use super::mood::MoodLabel;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    Activity,
    Reflection,
    Mindfulness,
    Yoga,
    Quote,
    Music,
    Movie,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Static catalog entry. Built at compile time, never mutated.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub for_moods: &'static [MoodLabel],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
}

impl Recommendation {
    /// Entry with no type-specific attributes.
    pub const fn basic(
        id: &'static str,
        title: &'static str,
        description: &'static str,
        kind: RecommendationType,
        for_moods: &'static [MoodLabel],
    ) -> Self {
        Self {
            id,
            title,
            description,
            kind,
            for_moods,
            image_url: None,
            category: None,
            duration: None,
            difficulty: None,
            artist: None,
            genre: None,
            year: None,
        }
    }

    pub fn is_for(&self, label: MoodLabel) -> bool {
        self.for_moods.contains(&label)
    }
}
