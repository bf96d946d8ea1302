//! Shared CLI helpers: config loading and rendering.

use anyhow::{Context, Result};

use coinsay::config::Config;
use coinsay::session::{Reply, Session, CONTEXT_HEADING};

use super::Cli;

/// Load config (explicit path or default), then env, then CLI overrides.
pub(crate) fn load_config(cli: &Cli) -> Result<Config> {
    let path = cli.config.clone().unwrap_or_else(Config::path);
    let mut config = Config::load_with_env(&path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;

    if let Some(model) = &cli.model {
        config.llm.model = model.clone();
    }
    if let Some(max_tokens) = cli.max_tokens {
        config.llm.max_tokens = max_tokens;
    }
    Ok(config)
}

pub(crate) fn print_reply(reply: &Reply) {
    match reply {
        Reply::Answer(answer) => {
            println!("Response:");
            println!("{}", answer);
        }
        other => {
            if let Some(text) = other.text() {
                println!("{}", text);
            }
        }
    }
}

pub(crate) fn print_context(session: &Session) {
    println!();
    println!("### {}", CONTEXT_HEADING);
    for line in session.context_lines() {
        println!("{}", line);
    }
}

pub(crate) fn print_error(err: &coinsay::CoinsayError) {
    eprintln!("Error: {}", err);
}
