//! Monthly mood calendar.

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use crate::core::{date_label, parse_label};
use crate::journal::JournalEntry;

/// Count of entries carrying one mood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodCount {
    pub mood: String,
    pub count: usize,
}

/// A month of moods, navigable month by month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodCalendar {
    first: NaiveDate,
}

impl MoodCalendar {
    /// Calendar for `month` (1-12) of `year`. `None` for an invalid month.
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    /// Calendar for the month containing `date`.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    #[must_use]
    pub fn previous(self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map_or(self, |first| Self { first })
    }

    #[must_use]
    pub fn next(self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map_or(self, |first| Self { first })
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.first.year()
    }

    #[must_use]
    pub fn month(self) -> u32 {
        self.first.month()
    }

    /// Heading such as `October 2026`.
    #[must_use]
    pub fn title(self) -> String {
        self.first.format("%B %Y").to_string()
    }

    /// Days in the month.
    #[must_use]
    pub fn day_count(self) -> u32 {
        self.next()
            .first
            .signed_duration_since(self.first)
            .num_days()
            .try_into()
            .unwrap_or(31)
    }

    /// Grid cells for a Sunday-first calendar: one `None` per weekday before
    /// the 1st, then every day of the month.
    #[must_use]
    pub fn days(self) -> Vec<Option<NaiveDate>> {
        let offset = self.first.weekday().num_days_from_sunday() as usize;
        let mut cells = vec![None; offset];
        cells.extend(self.first.iter_days().take(self.day_count() as usize).map(Some));
        cells
    }

    /// Whether `date` falls inside this month.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Mood counts for mood-bearing entries dated inside this month, in the
    /// order each mood was first seen.
    #[must_use]
    pub fn month_stats(self, entries: &[JournalEntry]) -> Vec<MoodCount> {
        let mut counts: Vec<MoodCount> = Vec::new();

        for entry in entries {
            let Some(date) = parse_label(&entry.date) else {
                continue;
            };
            if !self.contains(date) {
                continue;
            }
            let Some(mood) = entry.display_mood() else {
                continue;
            };

            match counts.iter_mut().find(|c| c.mood == mood) {
                Some(existing) => existing.count += 1,
                None => counts.push(MoodCount {
                    mood: mood.to_string(),
                    count: 1,
                }),
            }
        }

        counts
    }
}

/// Mood of the first entry labelled `date` that has one.
#[must_use]
pub fn mood_for_date(entries: &[JournalEntry], date: NaiveDate) -> Option<&str> {
    let label = date_label(date);
    entries
        .iter()
        .filter(|e| e.date == label)
        .find_map(JournalEntry::display_mood)
}

/// The most frequent mood; ties go to the one seen first.
#[must_use]
pub fn top_mood(stats: &[MoodCount]) -> Option<&MoodCount> {
    stats.iter().fold(None, |best: Option<&MoodCount>, candidate| match best {
        Some(b) if b.count >= candidate.count => Some(b),
        _ => Some(candidate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: NaiveDate, mood: Option<&str>, ai_mood: Option<&str>) -> JournalEntry {
        let mut e = JournalEntry::new(date.to_string(), date_label(date), "text", 0);
        e.mood = mood.map(str::to_string);
        e.ai_mood = ai_mood.map(str::to_string);
        e
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn test_grid_offset() {
        // 1 October 2026 is a Thursday.
        let oct = MoodCalendar::new(2026, 10).unwrap();
        let cells = oct.days();
        assert_eq!(cells.iter().take_while(|c| c.is_none()).count(), 4);
        assert_eq!(cells.len(), 4 + 31);

        // 1 July 2026 is a Wednesday.
        let july = MoodCalendar::new(2026, 7).unwrap();
        assert_eq!(july.days().iter().take_while(|c| c.is_none()).count(), 3);
    }

    #[test]
    fn test_february_length() {
        assert_eq!(MoodCalendar::new(2028, 2).unwrap().day_count(), 29);
        assert_eq!(MoodCalendar::new(2026, 2).unwrap().day_count(), 28);
    }

    #[test]
    fn test_navigation_wraps_years() {
        let jan = MoodCalendar::new(2027, 1).unwrap();
        assert_eq!(jan.previous(), MoodCalendar::new(2026, 12).unwrap());
        assert_eq!(jan.previous().next(), jan);
        assert_eq!(jan.title(), "January 2027");
        assert!(MoodCalendar::new(2026, 13).is_none());
    }

    #[test]
    fn test_mood_for_date_prefers_ai() {
        let entries = vec![
            entry(day(3), None, None),
            entry(day(3), Some("sad"), Some("grateful")),
            entry(day(4), Some("tired"), None),
        ];
        assert_eq!(mood_for_date(&entries, day(3)), Some("grateful"));
        assert_eq!(mood_for_date(&entries, day(4)), Some("tired"));
        assert_eq!(mood_for_date(&entries, day(5)), None);
    }

    #[test]
    fn test_month_stats_first_seen_order() {
        let entries = vec![
            entry(day(1), Some("sad"), None),
            entry(day(2), Some("happy"), None),
            entry(day(3), Some("happy"), None),
            entry(day(4), None, None),
            entry(NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(), Some("happy"), None),
        ];
        let stats = MoodCalendar::new(2026, 10).unwrap().month_stats(&entries);
        assert_eq!(
            stats,
            vec![
                MoodCount { mood: "sad".into(), count: 1 },
                MoodCount { mood: "happy".into(), count: 2 },
            ]
        );
        assert_eq!(top_mood(&stats).unwrap().mood, "happy");
    }

    #[test]
    fn test_top_mood_tie_goes_first() {
        let stats = vec![
            MoodCount { mood: "tired".into(), count: 2 },
            MoodCount { mood: "calm".into(), count: 2 },
        ];
        assert_eq!(top_mood(&stats).unwrap().mood, "tired");
        assert!(top_mood(&[]).is_none());
    }
}
