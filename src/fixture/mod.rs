//! The assembled fixture and the packages installed in it.

pub mod catalog;
pub mod package;
pub mod paths;

use std::path::{Path, PathBuf};

pub use catalog::PackageCatalog;
pub use package::{Package, PackageData};

/// Root of an assembled fixture. Read-only context for discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    root: PathBuf,
}

impl Fixture {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of `sub` inside the fixture; an empty `sub` is the root.
    pub fn path(&self, sub: impl AsRef<Path>) -> PathBuf {
        let sub = sub.as_ref();
        if sub.as_os_str().is_empty() {
            self.root.clone()
        } else {
            self.root.join(sub)
        }
    }
}
