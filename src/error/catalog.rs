use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read packages file '{path}': {message}")]
    Read { path: PathBuf, message: String },

    #[error("failed to parse packages file: {message}")]
    Parse { message: String },

    #[error("invalid package name '{name}' (expected vendor/project)")]
    InvalidName { name: String },

    #[error("unknown top-level package: {name}")]
    UnknownPackage { name: String },
}

impl CatalogError {
    pub fn read(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Read {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }

    pub fn unknown_package(name: impl Into<String>) -> Self {
        Self::UnknownPackage { name: name.into() }
    }
}
