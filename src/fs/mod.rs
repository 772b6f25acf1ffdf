//! Filesystem seam for discovery and tasks.
//!
//! Everything that touches disk goes through [`Filesystem`], so the
//! discovery engine and the normalize task can run against
//! [`MemoryFilesystem`] in tests.

mod memory;

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{trace, warn};
use walkdir::WalkDir;

use crate::error::IoError;

pub use memory::MemoryFilesystem;

pub trait Filesystem {
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    fn canonicalize(&self, path: &Path) -> std::io::Result<PathBuf>;

    /// Recursively finds files named `file_name` under each root, following
    /// symlinks and never descending into a directory whose name is in
    /// `excluded_dirs`. Results are grouped by root, in root order, and
    /// sorted by path within a root.
    fn find_files(
        &self,
        roots: &[PathBuf],
        file_name: &str,
        excluded_dirs: &[&str],
    ) -> Result<Vec<PathBuf>, IoError>;
}

impl<F: Filesystem + ?Sized> Filesystem for &F {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        (**self).read_to_string(path)
    }

    fn canonicalize(&self, path: &Path) -> std::io::Result<PathBuf> {
        (**self).canonicalize(path)
    }

    fn find_files(
        &self,
        roots: &[PathBuf],
        file_name: &str,
        excluded_dirs: &[&str],
    ) -> Result<Vec<PathBuf>, IoError> {
        (**self).find_files(roots, file_name, excluded_dirs)
    }
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        fs::read_to_string(path)
    }

    fn canonicalize(&self, path: &Path) -> std::io::Result<PathBuf> {
        fs::canonicalize(path)
    }

    fn find_files(
        &self,
        roots: &[PathBuf],
        file_name: &str,
        excluded_dirs: &[&str],
    ) -> Result<Vec<PathBuf>, IoError> {
        let mut files = Vec::new();
        let wanted = OsStr::new(file_name);

        for root in roots {
            if !root.is_dir() {
                return Err(IoError::directory_not_found(root));
            }

            let walker = WalkDir::new(root)
                .follow_links(true)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|e| {
                    if e.depth() == 0 || !e.file_type().is_dir() {
                        return true;
                    }
                    let name = e.file_name().to_string_lossy();
                    !excluded_dirs.contains(&name.as_ref())
                });

            for entry in walker {
                // Broken symlinks and link loops surface here; the rest of
                // the tree is still worth scanning.
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        warn!(root = %root.display(), error = %err, "skipping unreadable entry");
                        continue;
                    }
                };

                if entry.file_type().is_file() && entry.file_name() == wanted {
                    trace!(path = %entry.path().display(), "found {file_name}");
                    files.push(entry.into_path());
                }
            }
        }

        Ok(files)
    }
}
