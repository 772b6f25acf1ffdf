pub mod config;
pub mod normalize;

pub use normalize::ComposerNormalizeTask;

use crate::error::TaskError;

/// A unit of work run against a path in the fixture.
pub trait Task {
    fn status_message(&self) -> &str;

    fn execute(&mut self) -> Result<(), TaskError>;
}
