mod commands;

use actionhub_core::ModelChoice;
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "actionhub")]
#[command(author, version, about = "Download pre-trained action recognition models", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a model from a menu and download it (default)
    Setup,

    /// Download a model without the menu
    Pull {
        /// Model to download ("movinet" or "i3d")
        model: ModelChoice,
    },

    /// List the sample of actions the models can recognize
    Labels {
        /// Only show the first N actions
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show available models and whether they are cached
    #[command(alias = "ls")]
    Models,

    /// View or set configuration
    Config {
        /// Config key (e.g., "hub.cache_dir", "hub.timeout_secs")
        key: Option<String>,

        /// Value to set (if omitted, shows current value)
        value: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Setup) | None => {
            let outcome = commands::setup::execute().await?;
            exit_with(outcome);
        }
        Some(Commands::Pull { model }) => {
            let outcome = commands::pull::execute(model).await?;
            exit_with(outcome);
        }
        Some(Commands::Labels { limit }) => {
            commands::labels::execute(limit)?;
        }
        Some(Commands::Models) => {
            commands::models::execute()?;
        }
        Some(Commands::Config { key, value }) => {
            commands::config::execute(key.as_deref(), value.as_deref())?;
        }
    }

    Ok(())
}

fn exit_with(outcome: commands::setup::SetupOutcome) {
    let code = outcome.exit_code();
    if code != 0 {
        std::process::exit(code);
    }
}
