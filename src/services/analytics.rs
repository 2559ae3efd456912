//! Derived mood statistics. Every function reads a slice of moods and returns
//! a fresh value; nothing here mutates or caches.

use serde::Serialize;

use crate::models::{Mood, MoodLabel, Recommendation};
use crate::services::catalog::Catalog;

/// Rounds to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn mean(values: impl Iterator<Item = u8>) -> Option<f64> {
    let (sum, count) = values.fold((0u64, 0u64), |(s, c), v| (s + v as u64, c + 1));
    if count == 0 {
        None
    } else {
        Some(sum as f64 / count as f64)
    }
}

// ── Label frequency ──────────────────────────────────────────────────────────

/// Count per label, for all eight labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoodHistogram {
    counts: [usize; 8],
}

impl MoodHistogram {
    pub fn get(&self, label: MoodLabel) -> usize {
        self.counts[label.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(label, count)` in canonical label order.
    pub fn iter(&self) -> impl Iterator<Item = (MoodLabel, usize)> + '_ {
        MoodLabel::ALL.into_iter().map(move |label| (label, self.get(label)))
    }

    /// Highest count; ties go to the label earliest in canonical order.
    pub fn most_frequent(&self) -> Option<MoodLabel> {
        let mut best: Option<(MoodLabel, usize)> = None;
        for (label, count) in self.iter() {
            if count == 0 {
                continue;
            }
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((label, count)),
            }
        }
        best.map(|(label, _)| label)
    }
}

pub fn mood_histogram(moods: &[Mood]) -> MoodHistogram {
    let mut histogram = MoodHistogram::default();
    for mood in moods {
        histogram.counts[mood.label.index()] += 1;
    }
    histogram
}

pub fn most_frequent_label(moods: &[Mood]) -> Option<MoodLabel> {
    mood_histogram(moods).most_frequent()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelShare {
    pub label: MoodLabel,
    pub count: usize,
    /// Whole percent of all moods, rounded
    pub percentage: u32,
}

/// One share per label in canonical order; all zero when there are no moods.
pub fn mood_distribution(moods: &[Mood]) -> Vec<LabelShare> {
    let histogram = mood_histogram(moods);
    let total = histogram.total();
    histogram
        .iter()
        .map(|(label, count)| LabelShare {
            label,
            count,
            percentage: if total > 0 {
                (count as f64 / total as f64 * 100.0).round() as u32
            } else {
                0
            },
        })
        .collect()
}

// ── Intensity ────────────────────────────────────────────────────────────────

/// Mean value rounded to one decimal; `None` with no moods.
pub fn average_intensity(moods: &[Mood]) -> Option<f64> {
    mean(moods.iter().map(|m| m.value)).map(round1)
}

// ── Time of day ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Priority order used to break ranking ties.
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    /// morning [5,12), afternoon [12,17), evening [17,21), night otherwise
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    pub fn of(mood: &Mood) -> Self {
        Self::from_hour(mood.local_hour())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BucketAverage {
    pub bucket: TimeOfDay,
    pub count: usize,
    /// Rounded to one decimal; `None` means no data.
    pub average: Option<f64>,
}

/// One entry per bucket, in priority order.
pub fn time_of_day_averages(moods: &[Mood]) -> [BucketAverage; 4] {
    TimeOfDay::ALL.map(|bucket| {
        let values: Vec<u8> = moods
            .iter()
            .filter(|m| TimeOfDay::of(m) == bucket)
            .map(|m| m.value)
            .collect();
        BucketAverage {
            bucket,
            count: values.len(),
            average: mean(values.into_iter()).map(round1),
        }
    })
}

/// Bucket with the highest (rounded) average among buckets with data; ties go
/// to the earlier bucket in morning > afternoon > evening > night.
pub fn best_time_of_day(moods: &[Mood]) -> Option<TimeOfDay> {
    let mut best: Option<(TimeOfDay, f64)> = None;
    for entry in time_of_day_averages(moods) {
        let Some(average) = entry.average else {
            continue;
        };
        match best {
            Some((_, best_avg)) if average <= best_avg => {}
            _ => best = Some((entry.bucket, average)),
        }
    }
    best.map(|(bucket, _)| bucket)
}

// ── Recommendations ──────────────────────────────────────────────────────────

/// Catalog entries for the most frequent label; empty with no moods.
pub fn personalized_recommendations<'a>(
    moods: &[Mood],
    catalog: &Catalog<'a>,
) -> Vec<&'a Recommendation> {
    match most_frequent_label(moods) {
        Some(label) => catalog.for_mood(label),
        None => Vec::new(),
    }
}

// ── Summary ──────────────────────────────────────────────────────────────────

/// Everything the insights view shows, derived in one pass over the moods.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub total_moods: usize,
    pub most_frequent: Option<MoodLabel>,
    pub average_intensity: Option<f64>,
    pub best_time_of_day: Option<TimeOfDay>,
    pub distribution: Vec<LabelShare>,
    pub time_of_day: [BucketAverage; 4],
    pub recommendations: Vec<&'static Recommendation>,
}

pub fn insights(moods: &[Mood]) -> Insights {
    Insights {
        total_moods: moods.len(),
        most_frequent: most_frequent_label(moods),
        average_intensity: average_intensity(moods),
        best_time_of_day: best_time_of_day(moods),
        distribution: mood_distribution(moods),
        time_of_day: time_of_day_averages(moods),
        recommendations: personalized_recommendations(moods, &Catalog::builtin()),
    }
}
