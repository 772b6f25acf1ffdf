use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::ProcessError;

/// Runs external commands. `command[0]` is the program.
pub trait ProcessRunner {
    fn run(&self, command: &[String], cwd: &Path) -> Result<(), ProcessError>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &R {
    fn run(&self, command: &[String], cwd: &Path) -> Result<(), ProcessError> {
        (**self).run(command, cwd)
    }
}

/// Runs commands as child processes, inheriting stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, command: &[String], cwd: &Path) -> Result<(), ProcessError> {
        let Some((program, args)) = command.split_first() else {
            return Err(ProcessError::spawn(
                PathBuf::new(),
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
            ));
        };

        debug!(cwd = %cwd.display(), "running {}", command.join(" "));

        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .map_err(|e| ProcessError::spawn(program, e))?;

        if !status.success() {
            return Err(ProcessError::failed(program, status.to_string()));
        }

        Ok(())
    }
}
