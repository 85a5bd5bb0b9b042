use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::AppConfig;
use crate::process::{check_outcome, ExternalCommand, StepOutcome};

#[cfg(test)]
mod tests;

/// Runs the desktop app packager
pub struct AppPackager {
    project_path: PathBuf,
    package_command: Vec<String>,
    strict: bool,
}

impl AppPackager {
    pub fn new(project_path: impl AsRef<Path>, package_command: Vec<String>) -> Self {
        Self {
            project_path: project_path.as_ref().to_path_buf(),
            package_command,
            strict: false,
        }
    }

    pub fn from_config(root: &Path, config: &AppConfig) -> Self {
        Self::new(root.join(&config.dir), config.package_command.clone())
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn command(&self) -> Result<ExternalCommand> {
        ExternalCommand::from_command_line(&self.package_command, &self.project_path)
    }

    pub fn package(&self) -> Result<StepOutcome> {
        info!("Packaging desktop app at {:?}", self.project_path);

        if !self.project_path.is_dir() {
            anyhow::bail!(
                "Desktop app project directory not found at {}",
                self.project_path.display()
            );
        }

        let cmd = self.command()?;
        info!("Running `{}`", cmd);
        let outcome = cmd.run();

        check_outcome("Packaging", &cmd, &outcome, self.strict)?;
        if outcome.is_success() {
            info!("Packaging finished");
        }
        Ok(outcome)
    }
}
