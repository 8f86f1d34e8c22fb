//! Command line front end for `training_core`.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use training_core::config::{Config, OutputFormat};
use training_core::driver::{run_with, sample_packages};
use training_core::{Package, TrainingResult};

const FALLBACK_FILTER: &str = "info";

#[derive(Parser, Debug, Default)]
#[command(
    name = "training",
    version,
    about = "Distance, speed and calories from workout sensor packages"
)]
pub struct Cli {
    #[arg(
        long,
        value_name = "PATH",
        help = "JSON array of {\"code\", \"data\"} packages (default: built-in sample set)"
    )]
    pub packages: Option<PathBuf>,
    #[arg(long, help = "Output one JSON object per line")]
    pub json: bool,
    #[arg(long, help = "Print the JSON schema of the package file and exit")]
    pub schema: bool,
}

impl Cli {
    /// Flags win over environment settings.
    pub fn merge(&self, mut cfg: Config) -> Config {
        if let Some(path) = &self.packages {
            cfg.packages_path = Some(path.clone());
        }
        if self.json {
            cfg.output = OutputFormat::Json;
        }
        cfg
    }
}

/// Build the log filter, falling back to `info` when the directive is invalid.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}

pub fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter(level))
        .init();
}

pub fn load_packages(path: &Path) -> TrainingResult<Vec<Package>> {
    let raw = std::fs::read_to_string(path)?;
    let packages: Vec<Package> = serde_json::from_str(&raw)?;
    tracing::debug!(path = %path.display(), count = packages.len(), "packages loaded");
    Ok(packages)
}

pub fn package_schema() -> schemars::Schema {
    schemars::schema_for!(Vec<Package>)
}

/// Process the configured packages and write the result to `out`.
pub fn execute<W: Write>(cfg: &Config, out: &mut W) -> TrainingResult<usize> {
    let packages = match &cfg.packages_path {
        Some(path) => load_packages(path)?,
        None => sample_packages(),
    };
    run_with(&packages, out, cfg.output)
}
