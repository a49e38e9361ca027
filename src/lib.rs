pub mod cli;
pub mod config;
pub mod error;
pub mod observability;

pub use cli::{Cli, convert};
pub use config::Config;
pub use error::AppError;
