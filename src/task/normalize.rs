use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::config::{
    COMPOSER_VENDOR_BIN, MANIFEST_FILE_NAME, NORMALIZE_ARGS, NORMALIZE_EXCLUDED_DIRS,
};
use super::Task;
use crate::error::TaskError;
use crate::fs::Filesystem;
use crate::process::ProcessRunner;

/// Normalizes every `composer.json` under a path with `composer normalize`.
///
/// Every file is attempted even after a failure; the task fails once at the
/// end if any file failed.
pub struct ComposerNormalizeTask<F: Filesystem, R: ProcessRunner> {
    fs: F,
    runner: R,
    project_dir: PathBuf,
    composer: PathBuf,
    path: Option<PathBuf>,
    failures: bool,
}

impl<F: Filesystem, R: ProcessRunner> ComposerNormalizeTask<F, R> {
    /// `project_dir` is the tool's own project, used as the working
    /// directory so Composer can find the `normalize` plugin.
    pub fn new(fs: F, runner: R, project_dir: impl Into<PathBuf>) -> Self {
        let project_dir = project_dir.into();
        let composer = project_dir.join(COMPOSER_VENDOR_BIN);
        Self {
            fs,
            runner,
            project_dir,
            composer,
            path: None,
            failures: false,
        }
    }

    pub fn with_composer(mut self, composer: impl Into<PathBuf>) -> Self {
        self.composer = composer.into();
        self
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.path = Some(path.into());
        self
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn has_failures(&self) -> bool {
        self.failures
    }

    pub fn command(&self, file: &Path) -> Vec<String> {
        std::iter::once(self.composer.to_string_lossy().into_owned())
            .chain(NORMALIZE_ARGS.iter().map(|arg| arg.to_string()))
            .chain(std::iter::once(file.to_string_lossy().into_owned()))
            .collect()
    }

    fn files(&self, path: &Path) -> Result<Vec<PathBuf>, TaskError> {
        Ok(self.fs.find_files(
            &[path.to_path_buf()],
            MANIFEST_FILE_NAME,
            NORMALIZE_EXCLUDED_DIRS,
        )?)
    }

    fn normalize(&mut self, file: &Path) {
        let absolute = match self.fs.canonicalize(file) {
            Ok(absolute) => absolute,
            Err(err) => {
                warn!(path = %file.display(), error = %err, "cannot resolve manifest path");
                self.failures = true;
                return;
            }
        };

        let command = self.command(&absolute);
        if let Err(err) = self.runner.run(&command, &self.project_dir) {
            warn!(path = %absolute.display(), error = %err, "normalize failed");
            self.failures = true;
        }
    }
}

impl<F: Filesystem, R: ProcessRunner> Task for ComposerNormalizeTask<F, R> {
    fn status_message(&self) -> &str {
        "Normalizing composer.json files"
    }

    fn execute(&mut self) -> Result<(), TaskError> {
        let path = self.path.clone().ok_or(TaskError::PathNotSet)?;
        self.failures = false;

        let files = self.files(&path)?;
        info!(count = files.len(), path = %path.display(), "{}", self.status_message());

        for file in &files {
            self.normalize(file);
        }

        if self.failures {
            return Err(TaskError::Failure);
        }
        Ok(())
    }
}
