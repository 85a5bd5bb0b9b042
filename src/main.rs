use anyhow::Result;
use clap::Parser;
use lumos_package::{cli::Cli, config::PackageConfig, service::PackageService};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = PackageConfig::load(&cli.root, cli.config.as_deref())?;
    if cli.strict {
        config.strict = true;
    }
    debug!("Effective configuration:\n{}", config.to_toml()?);

    if cli.dry_run {
        info!("Dry run, nothing will be executed");
        for (i, step) in PackageService::plan(&cli.root, &config)?.iter().enumerate() {
            info!("Step {}: {}", i + 1, step);
        }
        return Ok(());
    }

    let report = PackageService::run(&cli.root, &config)?;
    if !report.all_succeeded() {
        warn!("One or more build steps did not succeed; the artifacts may be stale");
    }

    Ok(())
}
