use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::lenient;

/// Fallback display attributes for a label lookup miss.
pub const DEFAULT_MOOD_COLOR: &str = "#A8A9AD";
pub const DEFAULT_MOOD_EMOJI: &str = "😐";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MoodLabel {
    Joyful,
    Happy,
    Content,
    Neutral,
    Tired,
    Sad,
    Anxious,
    Angry,
}

impl MoodLabel {
    /// Canonical order. Every tie-break over labels uses this order.
    pub const ALL: [MoodLabel; 8] = [
        MoodLabel::Joyful,
        MoodLabel::Happy,
        MoodLabel::Content,
        MoodLabel::Neutral,
        MoodLabel::Tired,
        MoodLabel::Sad,
        MoodLabel::Anxious,
        MoodLabel::Angry,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MoodLabel::Joyful => "Joyful",
            MoodLabel::Happy => "Happy",
            MoodLabel::Content => "Content",
            MoodLabel::Neutral => "Neutral",
            MoodLabel::Tired => "Tired",
            MoodLabel::Sad => "Sad",
            MoodLabel::Anxious => "Anxious",
            MoodLabel::Angry => "Angry",
        }
    }

    pub fn option(self) -> &'static MoodOption {
        &MOOD_OPTIONS[self.index()]
    }

    pub fn color(self) -> &'static str {
        self.option().color
    }

    pub fn emoji(self) -> &'static str {
        self.option().emoji
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMoodLabel(pub String);

impl fmt::Display for UnknownMoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mood label: {}", self.0)
    }
}

impl std::error::Error for UnknownMoodLabel {}

impl FromStr for MoodLabel {
    type Err = UnknownMoodLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoodLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| UnknownMoodLabel(s.to_string()))
    }
}

/// Display attributes for one label.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MoodOption {
    pub label: MoodLabel,
    pub color: &'static str,
    pub emoji: &'static str,
}

/// Label → display attributes, in canonical label order.
pub const MOOD_OPTIONS: [MoodOption; 8] = [
    MoodOption {
        label: MoodLabel::Joyful,
        color: "#FF9BD2",
        emoji: "😁",
    },
    MoodOption {
        label: MoodLabel::Happy,
        color: "#FFCD56",
        emoji: "😊",
    },
    MoodOption {
        label: MoodLabel::Content,
        color: "#4BC0C0",
        emoji: "🙂",
    },
    MoodOption {
        label: MoodLabel::Neutral,
        color: "#A8A9AD",
        emoji: "😐",
    },
    MoodOption {
        label: MoodLabel::Tired,
        color: "#B5A6E0",
        emoji: "😴",
    },
    MoodOption {
        label: MoodLabel::Sad,
        color: "#7AACE3",
        emoji: "😔",
    },
    MoodOption {
        label: MoodLabel::Anxious,
        color: "#CE93D8",
        emoji: "😰",
    },
    MoodOption {
        label: MoodLabel::Angry,
        color: "#FF6384",
        emoji: "😠",
    },
];

/// Color for a label name as it arrives from the rendering layer.
pub fn mood_color(label: &str) -> &'static str {
    label
        .parse::<MoodLabel>()
        .map(MoodLabel::color)
        .unwrap_or(DEFAULT_MOOD_COLOR)
}

/// Emoji for a label name as it arrives from the rendering layer.
pub fn mood_emoji(label: &str) -> &'static str {
    label
        .parse::<MoodLabel>()
        .map(MoodLabel::emoji)
        .unwrap_or(DEFAULT_MOOD_EMOJI)
}

/// Human text for an intensity value.
pub fn value_text(value: u8) -> &'static str {
    match value {
        0..=2 => "Very Low",
        3..=4 => "Low",
        5..=6 => "Moderate",
        7..=8 => "High",
        _ => "Very High",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mood {
    pub id: Uuid,
    /// Intensity, 1-10
    pub value: u8,
    pub label: MoodLabel,
    pub color: String,
    /// Local wall-clock time; all date and hour bucketing reads it as-is.
    #[serde(deserialize_with = "lenient::local_timestamp")]
    pub timestamp: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Mood {
    pub fn new(label: MoodLabel, value: u8, note: Option<String>) -> Self {
        Self::recorded_at(label, value, Local::now().naive_local(), note)
    }

    pub fn recorded_at(
        label: MoodLabel,
        value: u8,
        timestamp: NaiveDateTime,
        note: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            value,
            label,
            color: label.color().to_string(),
            timestamp,
            note,
        }
    }

    pub fn local_date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn local_hour(&self) -> u32 {
        self.timestamp.hour()
    }
}
