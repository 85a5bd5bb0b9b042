use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lumos-package")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root that relative paths resolve against
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE", env = "LUMOS_PACKAGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Abort when a build step exits unsuccessfully
    #[arg(long)]
    pub strict: bool,

    /// Log the steps that would run, without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
