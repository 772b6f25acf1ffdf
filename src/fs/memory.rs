use std::cell::RefCell;
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::io;
use std::path::{Component, Path, PathBuf};

use super::Filesystem;
use crate::error::IoError;

/// In-memory filesystem holding files only; directories exist implicitly as
/// ancestors of files. Mutation goes through `&self` so a test can change
/// the tree while an engine borrows it.
#[derive(Debug, Default)]
pub struct MemoryFilesystem {
    files: RefCell<BTreeMap<PathBuf, String>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.add_file(path, contents);
        self
    }

    pub fn add_file(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.borrow_mut().insert(path.into(), contents.into());
    }

    pub fn remove_file(&self, path: &Path) -> bool {
        self.files.borrow_mut().remove(path).is_some()
    }
}

fn crosses_excluded_dir(relative_dir: &Path, excluded_dirs: &[&str]) -> bool {
    relative_dir.components().any(|component| match component {
        Component::Normal(name) => excluded_dirs.contains(&name.to_string_lossy().as_ref()),
        _ => false,
    })
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path) || self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.files
            .borrow()
            .keys()
            .any(|file| file != path && file.starts_with(path))
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        if self.exists(path) {
            Ok(path.to_path_buf())
        } else {
            Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            ))
        }
    }

    fn find_files(
        &self,
        roots: &[PathBuf],
        file_name: &str,
        excluded_dirs: &[&str],
    ) -> Result<Vec<PathBuf>, IoError> {
        let mut found = Vec::new();

        for root in roots {
            if !self.is_dir(root) {
                return Err(IoError::directory_not_found(root));
            }

            let files = self.files.borrow();
            for path in files.keys() {
                let Ok(relative) = path.strip_prefix(root) else {
                    continue;
                };
                if path.file_name() != Some(OsStr::new(file_name)) {
                    continue;
                }
                let relative_dir = relative.parent().unwrap_or(Path::new(""));
                if crosses_excluded_dir(relative_dir, excluded_dirs) {
                    continue;
                }
                found.push(path.clone());
            }
        }

        Ok(found)
    }
}
