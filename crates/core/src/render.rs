use askama::Template;
use chrono::NaiveDate;
use std::fmt::Write;

use crate::{Block, MealPlan, PlanError};

pub const DEFAULT_TITLE: &str = "Weekly Meal Plan";
pub const DEFAULT_DATE_FORMAT: &str = "%b %-d, %Y";

/// Presentation settings that do not come from the Markdown itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Page title used when the plan has no `# ` heading
    pub default_title: String,
    /// strftime pattern for date badges
    pub date_format: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            default_title: DEFAULT_TITLE.to_owned(),
            date_format: DEFAULT_DATE_FORMAT.to_owned(),
        }
    }
}

struct MealCard<'a> {
    day_name: &'a str,
    date: Option<String>,
    title: &'a str,
    body: &'a [Block],
}

#[derive(Template)]
#[template(path = "meal-plan.html")]
struct MealPlanTemplate<'a> {
    title: &'a str,
    intro: &'a [Block],
    cards: Vec<MealCard<'a>>,
}

/// Render a parsed plan into a self-contained HTML page
pub fn render_html(plan: &MealPlan, options: &RenderOptions) -> Result<String, PlanError> {
    let cards = plan
        .entries
        .iter()
        .map(|entry| {
            let date = entry
                .date
                .map(|date| format_date(date, &options.date_format))
                .transpose()?;

            Ok(MealCard {
                day_name: &entry.day_name,
                date,
                title: &entry.title,
                body: &entry.description,
            })
        })
        .collect::<Result<Vec<_>, PlanError>>()?;

    let template = MealPlanTemplate {
        title: plan.title.as_deref().unwrap_or(&options.default_title),
        intro: &plan.intro,
        cards,
    };

    Ok(template.render()?)
}

/// Format a date badge, e.g. "Feb 25, 2026" for the default pattern.
///
/// Writing into a `String` surfaces bad patterns as an error instead of the
/// panic `to_string()` would raise.
pub fn format_date(date: NaiveDate, pattern: &str) -> Result<String, PlanError> {
    let mut formatted = String::new();
    write!(formatted, "{}", date.format(pattern))
        .map_err(|_| PlanError::InvalidDateFormat(pattern.to_owned()))?;

    Ok(formatted)
}
