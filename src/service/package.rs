//! Packaging service
//!
//! Builds the backend, bundles its binary into the desktop app and runs the
//! desktop app packager, strictly in that order.

use anyhow::{Context, Result};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::{
    assets::{AssetCopier, CopiedAsset},
    builder::BackendBuilder,
    config::PackageConfig,
    packager::AppPackager,
    process::{ExternalCommand, StepOutcome},
};

/// One step of a packaging run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    BuildBackend { command: ExternalCommand },
    CopyAssets { source: PathBuf, destination: PathBuf },
    PackageApp { command: ExternalCommand },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::BuildBackend { command } => write!(
                f,
                "build backend: `{}` in {}",
                command,
                command.working_dir().display()
            ),
            Step::CopyAssets {
                source,
                destination,
            } => write!(
                f,
                "copy assets: {} -> {}",
                source.display(),
                destination.display()
            ),
            Step::PackageApp { command } => write!(
                f,
                "package app: `{}` in {}",
                command,
                command.working_dir().display()
            ),
        }
    }
}

/// Result of a packaging run
#[derive(Debug, Clone)]
pub struct PackageReport {
    pub backend: StepOutcome,
    pub asset: CopiedAsset,
    pub package: StepOutcome,
}

impl PackageReport {
    /// Whether every external step exited successfully
    pub fn all_succeeded(&self) -> bool {
        self.backend.is_success() && self.package.is_success()
    }
}

/// Service for orchestrating a packaging run
pub struct PackageService;

impl PackageService {
    /// The steps a run would perform, in order
    pub fn plan(root: &Path, config: &PackageConfig) -> Result<Vec<Step>> {
        let builder = BackendBuilder::from_config(root, &config.backend);
        let copier = AssetCopier::from_config(root, config);
        let packager = AppPackager::from_config(root, &config.app);

        Ok(vec![
            Step::BuildBackend {
                command: builder.command()?,
            },
            Step::CopyAssets {
                source: copier.source().to_path_buf(),
                destination: copier.destination(),
            },
            Step::PackageApp {
                command: packager.command()?,
            },
        ])
    }

    /// Run every step and print the completion message to stdout
    pub fn run(root: &Path, config: &PackageConfig) -> Result<PackageReport> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        Self::run_with_output(root, config, &mut out)
    }

    /// Run every step and write the completion message to `out`
    pub fn run_with_output(
        root: &Path,
        config: &PackageConfig,
        out: &mut impl Write,
    ) -> Result<PackageReport> {
        let backend = BackendBuilder::from_config(root, &config.backend)
            .with_strict(config.strict)
            .build()?;

        let asset = AssetCopier::from_config(root, config).copy()?;
        info!("Bundled backend at {} ({})", asset.path.display(), asset.digest);

        let package = AppPackager::from_config(root, &config.app)
            .with_strict(config.strict)
            .package()?;

        write!(out, "{}", completion_message(&config.app.artifacts_dir))
            .context("Failed to write completion message")?;
        out.flush().context("Failed to write completion message")?;

        Ok(PackageReport {
            backend,
            asset,
            package,
        })
    }
}

/// The message printed once packaging has returned
pub fn completion_message(artifacts_dir: &str) -> String {
    format!(
        "\n\nThe tauri executable and installer can be found here:\n{}\n",
        artifacts_dir
    )
}
