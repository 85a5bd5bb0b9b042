use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants;


#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    /// Abort when a build step exits unsuccessfully
    pub strict: bool,

    /// Backend build configuration
    pub backend: BackendConfig,

    /// Bundled asset configuration
    pub assets: AssetsConfig,

    /// Desktop app packaging configuration
    pub app: AppConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Backend project root
    pub dir: PathBuf,

    /// Backend binary name, without executable suffix
    pub binary: String,

    /// Release output directory, relative to `dir`
    pub release_dir: PathBuf,

    /// Release build command line
    pub build_command: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory the backend binary is copied into
    pub dir: PathBuf,

    /// Target triple used to tag the copied binary
    pub target_triple: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Desktop app project root
    pub dir: PathBuf,

    /// Packaging command line
    pub package_command: Vec<String>,

    /// Artifact location named in the completion message
    pub artifacts_dir: String,
}

fn command_line(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(constants::backend::DIR),
            binary: constants::backend::BINARY.to_string(),
            release_dir: PathBuf::from(constants::backend::RELEASE_DIR),
            build_command: command_line(constants::backend::BUILD_COMMAND),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(constants::assets::DIR),
            target_triple: constants::assets::TARGET_TRIPLE.to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(constants::app::DIR),
            package_command: command_line(constants::app::PACKAGE_COMMAND),
            artifacts_dir: constants::app::ARTIFACTS_DIR.to_string(),
        }
    }
}

impl PackageConfig {
    /// Load configuration for a project root.
    ///
    /// An explicit path must exist. Otherwise the project-local file is tried,
    /// then the user config dir, then the built-in defaults.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let local = root.join(constants::config::LOCAL_FILE);
        if local.exists() {
            return Self::from_file(&local);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user = config_dir
                .join(constants::config::USER_DIR)
                .join(constants::config::USER_FILE);
            if user.exists() {
                return Self::from_file(&user);
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize configuration")
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: PackageConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.backend.build_command.is_empty() {
            anyhow::bail!("backend.build_command must not be empty");
        }
        if self.app.package_command.is_empty() {
            anyhow::bail!("app.package_command must not be empty");
        }
        if self.backend.binary.is_empty() {
            anyhow::bail!("backend.binary must not be empty");
        }
        if self.assets.target_triple.is_empty() {
            anyhow::bail!("assets.target_triple must not be empty");
        }
        Ok(())
    }
}
