mod catalog;
mod io;
mod manifest;
mod task;

pub use catalog::CatalogError;
pub use io::IoError;
pub use manifest::ManifestError;
pub use task::{ProcessError, TaskError};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Task(#[from] TaskError),
}

pub type Result<T> = std::result::Result<T, Error>;
