pub mod error;
pub mod markup;
pub mod parse;
pub mod render;
pub mod week;
pub mod weekday;

pub use error::PlanError;
pub use markup::{Block, Span};
pub use parse::{MealEntry, MealPlan};
pub use render::{render_html, RenderOptions};
pub use week::WeekContext;
pub use weekday::DayOfWeek;
