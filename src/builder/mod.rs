use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::BackendConfig;
use crate::process::{check_outcome, ExternalCommand, StepOutcome};


/// Runs the backend release build
pub struct BackendBuilder {
    project_path: PathBuf,
    build_command: Vec<String>,
    strict: bool,
}

impl BackendBuilder {
    pub fn new(project_path: impl AsRef<Path>, build_command: Vec<String>) -> Self {
        Self {
            project_path: project_path.as_ref().to_path_buf(),
            build_command,
            strict: false,
        }
    }

    pub fn from_config(root: &Path, config: &BackendConfig) -> Self {
        Self::new(root.join(&config.dir), config.build_command.clone())
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn command(&self) -> Result<ExternalCommand> {
        ExternalCommand::from_command_line(&self.build_command, &self.project_path)
    }

    pub fn build(&self) -> Result<StepOutcome> {
        info!("Building backend at {:?}", self.project_path);

        if !self.project_path.is_dir() {
            anyhow::bail!(
                "Backend project directory not found at {}",
                self.project_path.display()
            );
        }

        let cmd = self.command()?;
        info!("Running `{}`", cmd);
        let outcome = cmd.run();

        check_outcome("Backend build", &cmd, &outcome, self.strict)?;
        if outcome.is_success() {
            info!("Backend build finished");
        }
        Ok(outcome)
    }
}

/// Path of the backend binary left by the release build
pub fn release_binary_path(root: &Path, config: &BackendConfig, target_triple: &str) -> PathBuf {
    root.join(&config.dir)
        .join(&config.release_dir)
        .join(crate::assets::binary_file_name(&config.binary, target_triple))
}
