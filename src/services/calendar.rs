use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::models::Mood;

fn newest_first(moods: &mut [&Mood]) {
    // stable: equal timestamps keep insertion order
    moods.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

/// Moods keyed by local calendar date, each day ordered most recent first.
pub fn group_by_date(moods: &[Mood]) -> BTreeMap<NaiveDate, Vec<&Mood>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<&Mood>> = BTreeMap::new();
    for mood in moods {
        grouped.entry(mood.local_date()).or_default().push(mood);
    }
    for day in grouped.values_mut() {
        newest_first(day);
    }
    grouped
}

#[derive(Debug, Clone, Serialize)]
pub struct DayMoods<'a> {
    pub date: NaiveDate,
    pub moods: Vec<&'a Mood>,
}

impl<'a> DayMoods<'a> {
    pub fn dominant(&self) -> Option<&'a Mood> {
        self.moods.first().copied()
    }
}

/// History list: most recent date first.
pub fn history(moods: &[Mood]) -> Vec<DayMoods<'_>> {
    group_by_date(moods)
        .into_iter()
        .rev()
        .map(|(date, moods)| DayMoods { date, moods })
        .collect()
}

/// Moods on `date`, most recent first.
pub fn moods_on(moods: &[Mood], date: NaiveDate) -> Vec<&Mood> {
    let mut day: Vec<&Mood> = moods.iter().filter(|m| m.local_date() == date).collect();
    newest_first(&mut day);
    day
}

/// The most recent mood recorded on `date`.
pub fn dominant_mood(moods: &[Mood], date: NaiveDate) -> Option<&Mood> {
    // max_by_key keeps the last maximum; reversed, that is the first recorded,
    // matching `moods_on` for equal timestamps
    moods
        .iter()
        .rev()
        .filter(|m| m.local_date() == date)
        .max_by_key(|m| m.timestamp)
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarDay<'a> {
    pub date: NaiveDate,
    pub dominant: Option<&'a Mood>,
}

/// Every date of the month containing `any_day`, with its dominant mood.
pub fn month_calendar(moods: &[Mood], any_day: NaiveDate) -> Vec<CalendarDay<'_>> {
    let grouped = group_by_date(moods);
    let mut days = Vec::with_capacity(31);
    let mut date = any_day - Duration::days(any_day.day0() as i64);
    while date.month() == any_day.month() {
        days.push(CalendarDay {
            date,
            dominant: grouped.get(&date).and_then(|d| d.first().copied()),
        });
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }
    days
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    /// Unrounded mean value; `None` when the day has no moods.
    pub average: Option<f64>,
    /// Color of the day's most recent mood.
    pub color: Option<String>,
}

/// The `days` dates ending at `end` (oldest first), for the intensity chart.
pub fn daily_series(moods: &[Mood], end: NaiveDate, days: u32) -> Vec<DailyPoint> {
    let grouped = group_by_date(moods);
    (0..days)
        .rev()
        .map(|offset| {
            let date = end - Duration::days(offset as i64);
            match grouped.get(&date) {
                Some(day) if !day.is_empty() => {
                    let sum: u32 = day.iter().map(|m| m.value as u32).sum();
                    DailyPoint {
                        date,
                        average: Some(sum as f64 / day.len() as f64),
                        color: day.first().map(|m| m.color.clone()),
                    }
                }
                _ => DailyPoint {
                    date,
                    average: None,
                    color: None,
                },
            }
        })
        .collect()
}
