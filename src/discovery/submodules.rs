use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::classify::{classify, info_file_path, Rejection, Verdict};
use super::config::{EXCLUDED_DIRS, MANIFEST_FILE_NAME};
use crate::error::Result;
use crate::fixture::{Fixture, Package, PackageCatalog};
use crate::fs::Filesystem;
use crate::manifest::ManifestLoad;

/// Discovered submodules keyed by package name.
pub type Submodules = BTreeMap<String, Package>;

/// Finds the Drupal submodules physically bundled inside a fixture's
/// top-level packages.
pub struct SubmoduleManager<F: Filesystem> {
    fs: F,
    fixture: Fixture,
    catalog: PackageCatalog,
    top_level_names: HashSet<String>,
    submodules: Option<Submodules>,
}

impl<F: Filesystem> SubmoduleManager<F> {
    pub fn new(fs: F, fixture: Fixture, catalog: &PackageCatalog) -> Self {
        Self {
            fs,
            fixture,
            catalog: catalog.clone(),
            top_level_names: catalog.names().map(str::to_string).collect(),
            submodules: None,
        }
    }

    pub fn fixture(&self) -> &Fixture {
        &self.fixture
    }

    /// All submodules under every existing top-level install path.
    ///
    /// Computed on first call and returned unchanged afterwards, even if the
    /// fixture changed on disk, until [`reset`](Self::reset) is called.
    pub fn discover_all(&mut self) -> Result<&Submodules> {
        if self.submodules.is_none() {
            let paths = self.existing_install_paths();
            let found = self.discover_in_paths(&paths)?;
            info!(
                count = found.len(),
                roots = paths.len(),
                "discovered submodules"
            );
            self.submodules = Some(found);
        }
        Ok(self.submodules.get_or_insert_with(Submodules::new))
    }

    /// Submodules inside a single package's install path. Never cached.
    pub fn get_by_parent(&self, package: &Package) -> Result<Submodules> {
        self.discover_in_paths(&[package.install_path_absolute().to_path_buf()])
    }

    /// Like [`get_by_parent`](Self::get_by_parent), looking the parent up by
    /// name among the top-level packages.
    pub fn get_by_parent_name(&self, name: &str) -> Result<Submodules> {
        let parent = self.catalog.require(name)?;
        self.get_by_parent(parent)
    }

    /// Walks `paths` for manifests and keeps the qualifying ones. A later
    /// manifest with an already seen name replaces the earlier record.
    pub fn discover_in_paths(&self, paths: &[PathBuf]) -> Result<Submodules> {
        let mut submodules = Submodules::new();
        if paths.is_empty() {
            return Ok(submodules);
        }

        let candidates = self
            .fs
            .find_files(paths, MANIFEST_FILE_NAME, EXCLUDED_DIRS)?;

        for file in candidates {
            let manifest = match self.classify_file(&file) {
                Verdict::Qualifies(manifest) => manifest,
                Verdict::Rejected(reason) => {
                    debug!(path = %file.display(), %reason, "not a submodule");
                    continue;
                }
            };

            let dir = file.parent().unwrap_or(Path::new(""));
            let package = Package::submodule(&self.fixture, &manifest.name, dir);
            if let Some(previous) = submodules.insert(manifest.name.clone(), package) {
                warn!(
                    name = %manifest.name,
                    replaced = %previous.install_path(),
                    kept = %dir.display(),
                    "duplicate submodule name"
                );
            }
        }

        Ok(submodules)
    }

    /// Runs every check against one candidate manifest file.
    pub fn classify_file(&self, file: &Path) -> Verdict {
        // The walk can report entries that have since disappeared.
        if !self.fs.exists(file) {
            return Verdict::Rejected(Rejection::Missing);
        }

        let manifest = match ManifestLoad::load(&self.fs, file) {
            ManifestLoad::Parsed(manifest) => manifest,
            ManifestLoad::Unparseable(err) => {
                return Verdict::Rejected(Rejection::Unparseable(err.to_string()));
            }
        };

        let name = match classify(&manifest, &self.top_level_names) {
            Ok(name) => name,
            Err(rejection) => return Verdict::Rejected(rejection),
        };

        let info_file = info_file_path(file.parent().unwrap_or(Path::new("")), &name);
        if !self.fs.exists(&info_file) {
            return Verdict::Rejected(Rejection::MissingInfoFile(info_file));
        }

        Verdict::Qualifies(manifest)
    }

    pub fn cached(&self) -> Option<&Submodules> {
        self.submodules.as_ref()
    }

    pub fn is_cached(&self) -> bool {
        self.submodules.is_some()
    }

    /// Drops the cached [`discover_all`](Self::discover_all) result.
    pub fn reset(&mut self) {
        self.submodules = None;
    }

    fn existing_install_paths(&self) -> Vec<PathBuf> {
        self.catalog
            .install_paths_absolute()
            .into_iter()
            .filter(|path| {
                let exists = self.fs.exists(path);
                if !exists {
                    debug!(path = %path.display(), "top-level install path missing; skipping");
                }
                exists
            })
            .collect()
    }
}
