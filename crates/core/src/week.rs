use chrono::{NaiveDate, Weekday};
use strum::VariantArray;

use crate::{DayOfWeek, PlanError};

/// ISO year/week pair used to annotate meal cards with calendar dates.
///
/// Dates are only resolved when both halves are present. A partial pair is
/// kept as-is and simply resolves nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekContext {
    pub iso_year: Option<i32>,
    pub iso_week: Option<u32>,
}

impl WeekContext {
    /// Build a context, rejecting complete pairs that name a week the ISO
    /// calendar does not have (week 53 of a 52-week year, week 0, ...).
    pub fn new(iso_year: Option<i32>, iso_week: Option<u32>) -> Result<Self, PlanError> {
        if let (Some(year), Some(week)) = (iso_year, iso_week) {
            if NaiveDate::from_isoywd_opt(year, week, Weekday::Mon).is_none() {
                return Err(PlanError::InvalidIsoWeek { year, week });
            }
        }

        Ok(Self { iso_year, iso_week })
    }

    pub fn is_complete(&self) -> bool {
        self.iso_year.is_some() && self.iso_week.is_some()
    }

    /// Calendar date of `day` within this ISO week
    pub fn resolve(&self, day: DayOfWeek) -> Option<NaiveDate> {
        let year = self.iso_year?;
        let week = self.iso_week?;

        NaiveDate::from_isoywd_opt(year, week, day.into())
    }

    /// All seven dates of the week, Monday first
    pub fn dates(&self) -> Option<Vec<(DayOfWeek, NaiveDate)>> {
        DayOfWeek::VARIANTS
            .iter()
            .map(|day| self.resolve(*day).map(|date| (*day, date)))
            .collect()
    }
}
