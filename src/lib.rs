//! Fixture Catalog
//!
//! Discovers the Drupal submodules physically bundled inside the top-level
//! packages of an assembled test fixture, and normalizes the fixture's
//! `composer.json` files.
pub mod cli;
pub mod discovery;
pub mod error;
pub mod fixture;
pub mod fs;
pub mod logging;
pub mod manifest;
pub mod process;
pub mod task;

pub use discovery::{SubmoduleManager, Submodules};
pub use error::{Error, Result};
pub use fixture::{Fixture, Package, PackageCatalog};
pub use fs::{Filesystem, MemoryFilesystem, OsFilesystem};
pub use process::{ProcessRunner, SystemProcessRunner};
