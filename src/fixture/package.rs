use std::path::{Path, PathBuf};

use serde::Serialize;

use super::paths::{install_path_absolute, install_path_relative};
use super::Fixture;

/// Version recorded for packages installed from a local directory rather than
/// a resolved registry release.
pub const LOCAL_INSTALL_VERSION: &str = "@dev";

/// Input for [`Package::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageData {
    pub name: String,
    pub install_path: String,
    pub url: String,
    pub version: String,
}

/// A package installed in a fixture, declared or discovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Package {
    name: String,
    install_path: String,
    install_path_absolute: PathBuf,
    url: String,
    version: String,
}

impl Package {
    pub fn new(fixture: &Fixture, data: PackageData) -> Self {
        let install_path_absolute = install_path_absolute(fixture.root(), &data.install_path);
        Self {
            name: data.name,
            install_path: data.install_path,
            install_path_absolute,
            url: data.url,
            version: data.version,
        }
    }

    /// Record for a submodule whose manifest lives in `dir`.
    pub fn submodule(fixture: &Fixture, name: &str, dir: &Path) -> Self {
        let url = dir.to_string_lossy().into_owned();
        Self::new(
            fixture,
            PackageData {
                name: name.to_string(),
                install_path: install_path_relative(fixture.root(), dir),
                url,
                version: LOCAL_INSTALL_VERSION.to_string(),
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn install_path(&self) -> &str {
        &self.install_path
    }

    pub fn install_path_absolute(&self) -> &Path {
        &self.install_path_absolute
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}
