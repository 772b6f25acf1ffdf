use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::ManifestError;
use crate::fs::Filesystem;

/// A parsed manifest with dotted-path lookups (`extra.orca.install`).
#[derive(Debug, Clone)]
pub struct ManifestDocument {
    path: PathBuf,
    value: Value,
}

impl ManifestDocument {
    pub fn load<F: Filesystem + ?Sized>(fs: &F, path: &Path) -> Result<Self, ManifestError> {
        let contents = fs
            .read_to_string(path)
            .map_err(|e| ManifestError::read(path, e))?;
        Self::from_str(path, &contents)
    }

    pub fn from_str(path: impl Into<PathBuf>, contents: &str) -> Result<Self, ManifestError> {
        let path = path.into();
        let value = serde_json::from_str(contents)
            .map_err(|e| ManifestError::parse(&path, e.to_string()))?;
        Ok(Self { path, value })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn get(&self, dotted_key: &str) -> Option<&Value> {
        dotted_key
            .split('.')
            .try_fold(&self.value, |current, key| current.as_object()?.get(key))
    }

    pub fn get_or<'a>(&'a self, dotted_key: &str, default: &'a Value) -> &'a Value {
        self.get(dotted_key).unwrap_or(default)
    }

    pub fn get_str(&self, dotted_key: &str) -> Option<&str> {
        self.get(dotted_key).and_then(Value::as_str)
    }
}
