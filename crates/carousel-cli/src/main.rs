use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carousel_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "carousel")]
#[command(author, version, about = "A drag-to-snap terminal carousel")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (defaults to ~/.config/carousel/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run {
        /// Items file (.json array or .toml with [[items]])
        #[arg(short = 'i', long)]
        items: Option<PathBuf>,
        /// Number of demo items when no file is given
        #[arg(short = 'n', long, default_value_t = 4)]
        count: usize,
    },
    /// Replay a scripted gesture and print the engine state after each step
    Simulate {
        /// Script file (.json or .toml)
        script: PathBuf,
        /// Print frames as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(short = 'f', long)]
        force: bool,
    },
}

/// Initialize logging; `RUST_LOG` wins over the configured level.
/// The TUI owns the terminal, so it logs to a file instead of stderr.
fn init_logging(config: &AppConfig, log_to_file: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    if log_to_file {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("cannot open log file {}", path.display()))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dispatch(Cli::parse()).await
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);

    // Must not load the existing file: it may be the broken config being replaced
    if let Some(Commands::InitConfig { force }) = cli.command {
        return commands::init_config::run(&config_path, force);
    }

    // Load configuration
    let config = Arc::new(AppConfig::load_from(&config_path)?);

    let interactive = matches!(cli.command, Some(Commands::Run { .. }) | None);
    init_logging(&config, interactive)?;

    match cli.command {
        Some(Commands::Run { items, count }) => {
            commands::run::run(config, items.as_deref(), count).await
        }
        None => commands::run::run(config, None, 4).await,
        Some(Commands::Simulate { script, json }) => {
            commands::simulate::run(&config, &script, json)
        }
        Some(Commands::InitConfig { force }) => commands::init_config::run(&config_path, force),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("carousel").chain(args.iter().copied())).unwrap()
    }

    #[tokio::test]
    async fn test_init_config_replaces_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[carousel]\nvelocity_threshold = -5.0\n").unwrap();
        assert!(AppConfig::load_from(&path).is_err());

        let path_arg = path.to_str().unwrap();
        dispatch(cli(&["-c", path_arg, "init-config", "--force"]))
            .await
            .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.carousel.velocity_threshold, 500.0);
    }

    #[tokio::test]
    async fn test_init_config_keeps_existing_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[carousel]\nvelocity_threshold = -5.0\n").unwrap();

        let path_arg = path.to_str().unwrap();
        assert!(dispatch(cli(&["-c", path_arg, "init-config"])).await.is_err());
        assert!(std::fs::read_to_string(&path).unwrap().contains("-5.0"));
    }
}
