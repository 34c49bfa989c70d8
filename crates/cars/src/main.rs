use std::path::PathBuf;

use anyhow::{Context, Result};
use cars_core::{process, TransformConfig};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Combine per-manufacturer CSV listings into a single JSON file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML file with transform settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of manufacturer CSV files (default: raw)
    #[arg(short, long)]
    input_dir: Option<PathBuf>,

    /// Where to write the combined JSON (default: cars.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn resolve_config(self) -> Result<TransformConfig> {
        let mut config = match &self.config {
            Some(path) => TransformConfig::from_toml_file(path)
                .with_context(|| format!("failed to load config from '{}'", path.display()))?,
            None => TransformConfig::default(),
        };

        if let Some(input_dir) = self.input_dir {
            config.input_dir = input_dir;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if self.pretty {
            config.pretty = true;
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = Cli::parse().resolve_config()?;
    let summary = process(&config).with_context(|| {
        format!(
            "failed to build '{}' from '{}'",
            config.output_path.display(),
            config.input_dir.display()
        )
    })?;

    for (make, records) in &summary.makes {
        info!(make = %make, records, "Manufacturer summary");
    }
    Ok(())
}
