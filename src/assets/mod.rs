use anyhow::{Context, Result};
use sha256::digest;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::builder::release_binary_path;
use crate::config::PackageConfig;


/// Copies the backend binary into the desktop app's bundled resources
pub struct AssetCopier {
    source: PathBuf,
    destination_dir: PathBuf,
    file_name: String,
}

/// A binary placed in the destination directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedAsset {
    pub path: PathBuf,
    pub size: u64,
    pub digest: String,
}

impl AssetCopier {
    pub fn new(source: impl AsRef<Path>, destination_dir: impl AsRef<Path>, file_name: &str) -> Self {
        Self {
            source: source.as_ref().to_path_buf(),
            destination_dir: destination_dir.as_ref().to_path_buf(),
            file_name: file_name.to_string(),
        }
    }

    pub fn from_config(root: &Path, config: &PackageConfig) -> Self {
        let triple = &config.assets.target_triple;
        Self::new(
            release_binary_path(root, &config.backend, triple),
            root.join(&config.assets.dir),
            &tagged_file_name(&config.backend.binary, triple),
        )
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> PathBuf {
        self.destination_dir.join(&self.file_name)
    }

    /// Create the destination directory if it does not exist yet
    pub fn ensure_destination_dir(&self) -> Result<PathBuf> {
        fs::create_dir_all(&self.destination_dir).with_context(|| {
            format!(
                "Failed to create asset directory {}",
                self.destination_dir.display()
            )
        })?;
        Ok(self.destination_dir.clone())
    }

    pub fn copy(&self) -> Result<CopiedAsset> {
        self.ensure_destination_dir()?;

        if !self.source.exists() {
            anyhow::bail!("Backend binary not found at {}", self.source.display());
        }

        let destination = self.destination();
        info!(
            "Copying {} to {}",
            self.source.display(),
            destination.display()
        );

        let size = fs::copy(&self.source, &destination).with_context(|| {
            format!(
                "Failed to copy {} to {}",
                self.source.display(),
                destination.display()
            )
        })?;

        let data = fs::read(&destination)
            .with_context(|| format!("Failed to read {}", destination.display()))?;
        let asset_digest = format!("sha256:{}", digest(&data));
        debug!("Copied {} bytes, {}", size, asset_digest);

        Ok(CopiedAsset {
            path: destination,
            size,
            digest: asset_digest,
        })
    }
}

/// Executable suffix for a target triple
pub fn executable_suffix(target_triple: &str) -> &'static str {
    if target_triple.contains("windows") {
        ".exe"
    } else {
        ""
    }
}

/// File name the release build gives the binary on a target
pub fn binary_file_name(binary: &str, target_triple: &str) -> String {
    format!("{}{}", binary, executable_suffix(target_triple))
}

/// Platform-tagged file name the desktop app looks its backend up by
pub fn tagged_file_name(binary: &str, target_triple: &str) -> String {
    format!(
        "{}-{}{}",
        binary,
        target_triple,
        executable_suffix(target_triple)
    )
}
