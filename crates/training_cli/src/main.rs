use anyhow::Context;
use clap::Parser;
use training_cli::{Cli, execute, init_logging, package_schema};
use training_core::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = cli.merge(Config::from_env()?);
    init_logging(&cfg.log_level);
    tracing::debug!("training: log filter: {}", cfg.log_level);

    if cli.schema {
        println!("{}", serde_json::to_string_pretty(&package_schema())?);
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let count = execute(&cfg, &mut out).context("failed to process packages")?;
    tracing::info!("training: processed {} packages", count);
    Ok(())
}
