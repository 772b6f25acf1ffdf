//! Package manifests (`composer.json`).
//!
//! [`ManifestDocument`] gives generic dotted-path access. [`Manifest`] is the
//! schema-checked view discovery works from: the fields it needs are
//! validated once at load time, and [`ManifestLoad`] keeps "could not read
//! this file" apart from "read fine".

mod document;
mod name;

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::ManifestError;
use crate::fs::Filesystem;

pub use document::ManifestDocument;
pub use name::PackageName;

/// Dotted key of the per-package install opt-out flag.
pub const INSTALL_FLAG_KEY: &str = "extra.orca.install";

/// Package type assumed when a manifest declares none.
pub const DEFAULT_PACKAGE_TYPE: &str = "library";

#[derive(Debug, Deserialize)]
struct RawManifest {
    name: String,
    #[serde(rename = "type", default = "default_package_type")]
    package_type: String,
}

fn default_package_type() -> String {
    DEFAULT_PACKAGE_TYPE.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub name: String,
    pub package_type: String,
    /// False only when the install flag is literally `false`.
    pub install: bool,
}

impl Manifest {
    pub fn from_document(doc: &ManifestDocument) -> Result<Self, ManifestError> {
        // Derived structs also accept sequences; a manifest must be an object.
        if !doc.value().is_object() {
            return Err(ManifestError::schema(
                doc.path(),
                "manifest root must be an object",
            ));
        }

        let raw: RawManifest = serde_json::from_value(doc.value().clone())
            .map_err(|e| ManifestError::schema(doc.path(), e.to_string()))?;

        let install = !matches!(doc.get(INSTALL_FLAG_KEY), Some(Value::Bool(false)));

        Ok(Self {
            name: raw.name,
            package_type: raw.package_type,
            install,
        })
    }

    pub fn from_str(path: &Path, contents: &str) -> Result<Self, ManifestError> {
        Self::from_document(&ManifestDocument::from_str(path, contents)?)
    }
}

/// Outcome of reading a manifest off disk.
#[derive(Debug)]
pub enum ManifestLoad {
    Parsed(Manifest),
    Unparseable(ManifestError),
}

impl ManifestLoad {
    pub fn load<F: Filesystem + ?Sized>(fs: &F, path: &Path) -> Self {
        match ManifestDocument::load(fs, path).and_then(|doc| Manifest::from_document(&doc)) {
            Ok(manifest) => Self::Parsed(manifest),
            Err(err) => Self::Unparseable(err),
        }
    }
}
