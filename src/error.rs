use std::{io, path::PathBuf};
use thiserror::Error;
use weekplan_core::PlanError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error(transparent)]
    PlanError(#[from] PlanError),
}
