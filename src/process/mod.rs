//! External command execution
//!
//! Every build step runs its tool with an explicit working directory instead
//! of changing the current directory of this process.

use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use tracing::{debug, warn};

#[cfg(test)]
mod tests;

/// A command line bound to the directory it runs in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    program: String,
    args: Vec<String>,
    working_dir: PathBuf,
}

/// How an external command finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Exited with status zero
    Succeeded,
    /// Exited with a non-zero status, or was terminated by a signal (`None`)
    Failed { code: Option<i32> },
    /// Could not be started at all
    NotStarted { reason: String },
}

impl StepOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, StepOutcome::Succeeded)
    }

    fn from_status(status: ExitStatus) -> Self {
        if status.success() {
            StepOutcome::Succeeded
        } else {
            StepOutcome::Failed {
                code: status.code(),
            }
        }
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepOutcome::Succeeded => write!(f, "succeeded"),
            StepOutcome::Failed { code: Some(code) } => write!(f, "exited with status {}", code),
            StepOutcome::Failed { code: None } => write!(f, "terminated by signal"),
            StepOutcome::NotStarted { reason } => write!(f, "could not be started: {}", reason),
        }
    }
}

impl ExternalCommand {
    /// Build a command from a command line. The first element is the program.
    pub fn from_command_line(
        command_line: &[String],
        working_dir: impl AsRef<Path>,
    ) -> Result<Self> {
        let (program, args) = command_line
            .split_first()
            .context("Command line must name a program")?;

        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
            working_dir: working_dir.as_ref().to_path_buf(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Run to completion with inherited stdio and report how it finished.
    ///
    /// Failing to start the program is reported as an outcome, not an error,
    /// so callers decide whether it aborts the run.
    pub fn run(&self) -> StepOutcome {
        let program = resolve_program(&self.program);

        let mut cmd = Command::new(&program);
        cmd.args(&self.args).current_dir(&self.working_dir);

        debug!("Running command: {:?}", cmd);

        match cmd.status() {
            Ok(status) => StepOutcome::from_status(status),
            Err(e) => {
                warn!("Failed to start {}: {}", self.program, e);
                StepOutcome::NotStarted {
                    reason: e.to_string(),
                }
            }
        }
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Resolve a program on PATH the way a shell would, so wrappers such as
/// `npm.cmd` are found on Windows. Falls back to the bare name.
///
/// Programs given as a path are passed through unchanged. How a relative
/// path interacts with the working directory is platform-specific.
fn resolve_program(program: &str) -> PathBuf {
    if Path::new(program).components().count() > 1 {
        return PathBuf::from(program);
    }

    match which::which(program) {
        Ok(path) => {
            debug!("Resolved {} to {}", program, path.display());
            path
        }
        Err(_) => PathBuf::from(program),
    }
}

/// Turn a step outcome into an error when strict checking is enabled
pub fn check_outcome(
    step: &str,
    command: &ExternalCommand,
    outcome: &StepOutcome,
    strict: bool,
) -> Result<()> {
    if outcome.is_success() {
        return Ok(());
    }

    if strict {
        anyhow::bail!("{} failed: `{}` {}", step, command, outcome);
    }

    warn!("{}: `{}` {}; continuing", step, command, outcome);
    Ok(())
}
