use std::path::PathBuf;
use thiserror::Error;

use super::IoError;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: PathBuf,
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status}")]
    Failed { program: PathBuf, status: String },
}

impl ProcessError {
    pub fn spawn(program: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            source,
        }
    }

    pub fn failed(program: impl Into<PathBuf>, status: impl Into<String>) -> Self {
        Self::Failed {
            program: program.into(),
            status: status.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("task path has not been set")]
    PathNotSet,

    #[error(transparent)]
    Io(#[from] IoError),

    /// At least one item in a batch failed. Per-item detail is logged, not carried.
    #[error("task failed")]
    Failure,
}
