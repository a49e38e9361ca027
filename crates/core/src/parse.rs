use chrono::NaiveDate;

use crate::markup::{parse_blocks, Block};
use crate::{DayOfWeek, WeekContext};

const TITLE_MARKER: &str = "# ";
const DAY_HEADING_MARKER: &str = "## ";
const RULE: &str = "---";
const DAY_TITLE_DELIMITERS: [&str; 4] = [" – ", " - ", " — ", " -- "];

/// One day heading and the lines under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealEntry {
    pub day_name: String,
    pub title: String,
    pub description: Vec<Block>,
    pub weekday: Option<DayOfWeek>,
    pub date: Option<NaiveDate>,
}

impl MealEntry {
    fn from_section(heading: &str, lines: &[&str], week_dates: &[(DayOfWeek, NaiveDate)]) -> Self {
        let (day_name, title) = split_day_and_title(heading);
        let weekday = if day_name.is_empty() {
            DayOfWeek::find_in(&title)
        } else {
            DayOfWeek::find_in(&day_name)
        };
        let date = weekday.and_then(|day| {
            week_dates
                .iter()
                .find(|(candidate, _)| *candidate == day)
                .map(|(_, date)| *date)
        });

        tracing::debug!(
            day = %day_name,
            title = %title,
            weekday = ?weekday,
            date = ?date,
            "Parsed meal entry"
        );

        Self {
            day_name,
            title,
            description: parse_blocks(lines),
            weekday,
            date,
        }
    }
}

/// A parsed weekly plan: optional page title, intro text and day entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealPlan {
    pub title: Option<String>,
    pub intro: Vec<Block>,
    pub entries: Vec<MealEntry>,
}

impl MealPlan {
    /// Parse a Markdown meal plan.
    ///
    /// `# ` sets the page title (first one wins), every `## ` heading opens a
    /// new entry and `---` rules are dropped. Lines before the first day
    /// heading become the intro. Nothing here fails: unrecognised headings
    /// just produce entries without a weekday or date.
    pub fn parse(markdown: &str, week: &WeekContext) -> Self {
        let mut title = None;
        let mut intro = Vec::new();
        let mut sections: Vec<(&str, Vec<&str>)> = Vec::new();

        for line in markdown.lines() {
            let stripped = line.trim();

            if let Some(heading) = stripped.strip_prefix(TITLE_MARKER) {
                if title.is_none() {
                    title = Some(heading.trim().to_owned());
                }
                continue;
            }

            if let Some(heading) = stripped.strip_prefix(DAY_HEADING_MARKER) {
                sections.push((heading.trim(), Vec::new()));
                continue;
            }

            if stripped == RULE {
                continue;
            }

            match sections.last_mut() {
                Some((_, lines)) => lines.push(line),
                None => intro.push(line),
            }
        }

        let week_dates = week.dates().unwrap_or_default();
        let entries = sections
            .iter()
            .map(|(heading, lines)| MealEntry::from_section(heading, lines, &week_dates))
            .collect();

        Self {
            title,
            intro: parse_blocks(&intro),
            entries,
        }
    }

    /// Number of entries carrying a resolved date
    pub fn dated_entries(&self) -> usize {
        self.entries.iter().filter(|e| e.date.is_some()).count()
    }
}

/// Split "🍕 Monday – Pizza Night" into ("🍕 Monday", "Pizza Night").
///
/// Without a delimiter the heading is a bare day label only when its letters
/// spell nothing but a weekday ("🍕 Monday", "FRIDAY!"); anything else, such
/// as "Monday: Pizza Night", stays the title.
fn split_day_and_title(heading: &str) -> (String, String) {
    for delimiter in DAY_TITLE_DELIMITERS {
        if let Some((day, meal)) = heading.split_once(delimiter) {
            return (day.trim().to_owned(), meal.trim().to_owned());
        }
    }

    let heading = heading.trim().to_owned();
    if is_bare_day_label(&heading) {
        (heading, String::new())
    } else {
        (String::new(), heading)
    }
}

fn is_bare_day_label(heading: &str) -> bool {
    let letters: String = heading.chars().filter(|c| c.is_alphanumeric()).collect();

    letters.parse::<DayOfWeek>().is_ok()
}
