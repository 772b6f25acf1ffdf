//! Submodule classification rules.
//!
//! [`classify`] is the filesystem-free core: it sees an already parsed
//! manifest and the names of the top-level packages. File existence checks
//! happen in the walk adapter around it.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use super::config::{INFO_FILE_EXTENSION, MODULE_PACKAGE_TYPE, SUBMODULE_VENDOR};
use crate::manifest::{Manifest, PackageName};

/// Why a candidate manifest is not a submodule. Variants are listed in the
/// order the checks run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Missing,
    Unparseable(String),
    MalformedName(String),
    TopLevel(String),
    NotModule(String),
    OptedOut,
    ForeignVendor(String),
    MissingInfoFile(PathBuf),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "manifest no longer exists"),
            Self::Unparseable(reason) => write!(f, "unparseable manifest: {reason}"),
            Self::MalformedName(name) => write!(f, "malformed package name '{name}'"),
            Self::TopLevel(name) => write!(f, "{name} is a top-level package"),
            Self::NotModule(package_type) => write!(f, "package type is '{package_type}'"),
            Self::OptedOut => write!(f, "opted out of installation"),
            Self::ForeignVendor(vendor) => write!(f, "vendor '{vendor}' is not '{SUBMODULE_VENDOR}'"),
            Self::MissingInfoFile(path) => write!(f, "no info file at {}", path.display()),
        }
    }
}

/// Result of classifying one candidate manifest file.
#[derive(Debug)]
pub enum Verdict {
    Qualifies(Manifest),
    Rejected(Rejection),
}

impl Verdict {
    pub fn qualifies(&self) -> bool {
        matches!(self, Self::Qualifies(_))
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Qualifies(_) => None,
            Self::Rejected(rejection) => Some(rejection),
        }
    }
}

/// Applies the manifest-level rules in order and stops at the first failure.
/// On success returns the parsed name, whose project part names the info
/// file that must sit next to the manifest.
pub fn classify(manifest: &Manifest, top_level: &HashSet<String>) -> Result<PackageName, Rejection> {
    let name = PackageName::parse(&manifest.name)
        .ok_or_else(|| Rejection::MalformedName(manifest.name.clone()))?;

    if top_level.contains(&manifest.name) {
        return Err(Rejection::TopLevel(manifest.name.clone()));
    }

    if manifest.package_type != MODULE_PACKAGE_TYPE {
        return Err(Rejection::NotModule(manifest.package_type.clone()));
    }

    if !manifest.install {
        return Err(Rejection::OptedOut);
    }

    if name.vendor() != SUBMODULE_VENDOR {
        return Err(Rejection::ForeignVendor(name.vendor().to_string()));
    }

    Ok(name)
}

/// `<dir>/<project>.info.yml`
pub fn info_file_path(dir: &Path, name: &PackageName) -> PathBuf {
    dir.join(format!("{}.{INFO_FILE_EXTENSION}", name.project()))
}
