// src/core/spelunk/runner.rs
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Launches an external program and reports its exit status.
pub trait CommandRunner {
    /// Runs `program` with `args` to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the program could not be started.
    fn run(&mut self, program: &Path, args: &[String]) -> io::Result<i32>;
}

/// Runs commands as child processes of this one, inheriting stdio.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    working_dir: PathBuf,
}

impl SystemRunner {
    #[must_use]
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&mut self, program: &Path, args: &[String]) -> io::Result<i32> {
        debug!(program = %program.display(), ?args, "launching");
        let status = Command::new(program)
            .args(args)
            .current_dir(&self.working_dir)
            .status()?;
        // Killed by a signal: report it as a plain failure.
        Ok(status.code().unwrap_or(-1))
    }
}
