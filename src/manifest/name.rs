use std::fmt;

use serde::Serialize;

/// A `vendor/project` package name with exactly one separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PackageName {
    vendor: String,
    project: String,
}

impl PackageName {
    pub fn parse(name: &str) -> Option<Self> {
        let (vendor, project) = name.split_once('/')?;
        if vendor.is_empty() || project.is_empty() || project.contains('/') {
            return None;
        }
        Some(Self {
            vendor: vendor.to_string(),
            project: project.to_string(),
        })
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn project(&self) -> &str {
        &self.project
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.vendor, self.project)
    }
}
