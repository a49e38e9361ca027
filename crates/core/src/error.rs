use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Invalid ISO week/year combination: week {week} does not exist in {year}")]
    InvalidIsoWeek { year: i32, week: u32 },

    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("Template error: {0}")]
    TemplateError(#[from] askama::Error),
}
