//! Command-line interface.

mod ask;
mod chat;
mod common;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "coinsay", version, about = "Cryptocurrency prices, phrased by an LLM")]
pub(crate) struct Cli {
    /// Config file (default: ~/.coinsay/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the completion model
    #[arg(long, global = true)]
    model: Option<String>,

    /// Override the generated-token budget
    #[arg(long, global = true)]
    max_tokens: Option<u32>,

    /// Log output format (filter with RUST_LOG)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Interactive session (default)
    Chat,
    /// Resolve one or more names in a single session and exit
    Ask {
        /// Cryptocurrency names, e.g. bitcoin ethereum
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Print the effective configuration
    Config,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

/// Parse arguments and dispatch.
pub(crate) async fn run() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_logging(cli.log_format);

    let config = common::load_config(&cli)?;

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => chat::cmd_chat(config).await,
        Commands::Ask { names } => ask::cmd_ask(config, names).await,
        Commands::Config => config::cmd_config(&config, cli.config.as_deref()),
    }
}
