use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{Fixture, Package, PackageData};
use crate::error::CatalogError;
use crate::fs::Filesystem;
use crate::manifest::PackageName;

const DEFAULT_TYPE: &str = "drupal-module";
const DEFAULT_VERSION: &str = "*";

/// One entry of a packages YAML file, keyed by package name.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PackageEntry {
    #[serde(rename = "type", default = "default_type")]
    package_type: String,
    #[serde(default)]
    install_path: Option<String>,
    #[serde(default)]
    url: String,
    #[serde(default = "default_version")]
    version: String,
}

fn default_type() -> String {
    DEFAULT_TYPE.to_string()
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

impl Default for PackageEntry {
    fn default() -> Self {
        Self {
            package_type: default_type(),
            install_path: None,
            url: String::new(),
            version: default_version(),
        }
    }
}

/// Fixture-relative install path Composer's installers use for a package type.
pub fn default_install_path(package_type: &str, name: &PackageName) -> String {
    let project = name.project();
    match package_type {
        "drupal-module" => format!("docroot/modules/contrib/{project}"),
        "drupal-theme" => format!("docroot/themes/contrib/{project}"),
        "drupal-profile" => format!("docroot/profiles/contrib/{project}"),
        "drupal-drush" => format!("drush/Commands/{project}"),
        _ => format!("vendor/{}/{project}", name.vendor()),
    }
}

/// The explicitly declared top-level packages of a fixture.
#[derive(Debug, Clone, Default)]
pub struct PackageCatalog {
    packages: BTreeMap<String, Package>,
}

impl PackageCatalog {
    pub fn new(packages: impl IntoIterator<Item = Package>) -> Self {
        Self {
            packages: packages
                .into_iter()
                .map(|p| (p.name().to_string(), p))
                .collect(),
        }
    }

    pub fn from_yaml_str(fixture: &Fixture, yaml: &str) -> Result<Self, CatalogError> {
        let entries: BTreeMap<String, Option<PackageEntry>> =
            serde_yaml::from_str(yaml).map_err(|e| CatalogError::parse(e.to_string()))?;

        let mut packages = Vec::with_capacity(entries.len());
        for (name, entry) in entries {
            let parsed = PackageName::parse(&name).ok_or_else(|| CatalogError::invalid_name(&name))?;
            let entry = entry.unwrap_or_default();
            let install_path = entry
                .install_path
                .unwrap_or_else(|| default_install_path(&entry.package_type, &parsed));
            packages.push(Package::new(
                fixture,
                PackageData {
                    name,
                    install_path,
                    url: entry.url,
                    version: entry.version,
                },
            ));
        }

        Ok(Self::new(packages))
    }

    pub fn load<F: Filesystem + ?Sized>(
        fs: &F,
        fixture: &Fixture,
        path: &Path,
    ) -> Result<Self, CatalogError> {
        let contents = fs
            .read_to_string(path)
            .map_err(|e| CatalogError::read(path, e.to_string()))?;
        Self::from_yaml_str(fixture, &contents)
    }

    pub fn get(&self, name: &str) -> Option<&Package> {
        self.packages.get(name)
    }

    pub fn require(&self, name: &str) -> Result<&Package, CatalogError> {
        self.get(name)
            .ok_or_else(|| CatalogError::unknown_package(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Package> {
        self.packages.values()
    }

    pub fn install_paths_absolute(&self) -> Vec<PathBuf> {
        self.iter()
            .map(|p| p.install_path_absolute().to_path_buf())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
