use chrono::Weekday;
use regex::Regex;
use std::sync::LazyLock;
use strum::{Display, EnumString, VariantArray};

static RE_DAY_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b").unwrap()
});

/// English weekday names recognised in day headings
#[derive(EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(ascii_case_insensitive)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// Find the first weekday name in a heading label.
    ///
    /// Matching is case-insensitive and word-bounded, so "🍕 MONDAY" matches
    /// but "Mondays" does not.
    pub fn find_in(label: &str) -> Option<Self> {
        let found = RE_DAY_NAME.find(label)?;
        found.as_str().parse().ok()
    }

    /// ISO 8601 day number, 1 = Monday through 7 = Sunday
    pub fn iso_number(&self) -> u32 {
        Weekday::from(*self).number_from_monday()
    }
}

impl From<DayOfWeek> for Weekday {
    fn from(day: DayOfWeek) -> Self {
        match day {
            DayOfWeek::Monday => Weekday::Mon,
            DayOfWeek::Tuesday => Weekday::Tue,
            DayOfWeek::Wednesday => Weekday::Wed,
            DayOfWeek::Thursday => Weekday::Thu,
            DayOfWeek::Friday => Weekday::Fri,
            DayOfWeek::Saturday => Weekday::Sat,
            DayOfWeek::Sunday => Weekday::Sun,
        }
    }
}
