use clap::Parser;
use std::{fs, path::PathBuf};
use weekplan_core::{MealPlan, WeekContext, render_html};

use crate::{config::Config, error::AppError};

/// weekplan - printable weekly meal plans
#[derive(Parser, Debug)]
#[command(name = "weekplan")]
#[command(about = "Convert a weekly meal plan Markdown file into a styled HTML page", long_about = None)]
pub struct Cli {
    /// Path to the source Markdown file
    pub markdown: PathBuf,

    /// Path to the HTML file to create (defaults to the Markdown file name with .html)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Calendar year for ISO week calculations (e.g. 2026); needs --iso-week
    #[arg(long)]
    pub year: Option<i32>,

    /// ISO week number (1-53); with --year, meal dates are shown
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=53))]
    pub iso_week: Option<u32>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<String>,
}

impl Cli {
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.markdown.with_extension("html"))
    }

    /// Week used for date badges.
    ///
    /// A lone `--year` or `--iso-week` disables dates for the whole run
    /// instead of failing; a complete pair naming a missing week is an error.
    pub fn week_context(&self) -> Result<WeekContext, AppError> {
        let week = WeekContext::new(self.year, self.iso_week)?;

        match (self.year, self.iso_week) {
            (Some(year), None) => {
                tracing::warn!(year, "--year given without --iso-week, meal dates disabled");
            }
            (None, Some(iso_week)) => {
                tracing::warn!(iso_week, "--iso-week given without --year, meal dates disabled");
            }
            _ => {}
        }

        Ok(week)
    }
}

/// Read the Markdown plan, render it and write the HTML page.
///
/// Returns the path that was written. Missing parent directories are
/// created and an existing file is overwritten.
#[tracing::instrument(skip(cli, config), fields(input = %cli.markdown.display()))]
pub fn convert(cli: &Cli, config: &Config) -> Result<PathBuf, AppError> {
    let week = cli.week_context()?;

    let markdown = fs::read_to_string(&cli.markdown).map_err(|source| AppError::ReadInput {
        path: cli.markdown.clone(),
        source,
    })?;

    let plan = MealPlan::parse(&markdown, &week);
    tracing::info!(
        entries = plan.entries.len(),
        dated = plan.dated_entries(),
        "Parsed meal plan"
    );

    let html = render_html(&plan, &config.page.render_options())?;

    let output = cli.output_path();
    let write_error = |source| AppError::WriteOutput {
        path: output.clone(),
        source,
    };

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(&output, html).map_err(write_error)?;

    tracing::info!(output = %output.display(), "Meal plan written");

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("weekplan").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_default_output_replaces_extension() {
        let cli = parse(&["plans/week.md"]);

        assert_eq!(cli.output_path(), PathBuf::from("plans/week.html"));
    }

    #[test]
    fn test_explicit_output() {
        let cli = parse(&["week.md", "-o", "out/print.html"]);

        assert_eq!(cli.output_path(), PathBuf::from("out/print.html"));
    }

    #[test]
    fn test_week_flags() {
        let cli = parse(&["week.md", "--year", "2026", "--iso-week", "9"]);

        assert_eq!(cli.year, Some(2026));
        assert_eq!(cli.iso_week, Some(9));
        assert!(cli.week_context().unwrap().is_complete());
    }

    #[test]
    fn test_iso_week_out_of_range_rejected() {
        let args = ["weekplan", "week.md", "--iso-week", "54"];

        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_partial_week_disables_dates() {
        let cli = parse(&["week.md", "--year", "2026"]);

        assert!(!cli.week_context().unwrap().is_complete());
    }

    #[test]
    fn test_missing_week_is_error() {
        let cli = parse(&["week.md", "--year", "2025", "--iso-week", "53"]);

        assert!(matches!(
            cli.week_context(),
            Err(AppError::PlanError(weekplan_core::PlanError::InvalidIsoWeek { .. }))
        ));
    }

    #[test]
    fn test_markdown_is_required() {
        assert!(Cli::try_parse_from(["weekplan"]).is_err());
    }
}
