//! Config command handler.

use std::path::Path;

use anyhow::{Context, Result};

use coinsay::config::Config;

/// Print the effective configuration with the API key masked.
pub(crate) fn cmd_config(config: &Config, explicit_path: Option<&Path>) -> Result<()> {
    let path = explicit_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::path);
    let rendered = serde_json::to_string_pretty(&config.redacted())
        .with_context(|| "Failed to render configuration")?;

    println!("Config file: {}", path.display());
    if config.llm.api_key.is_none() {
        println!("API key: not set (export TOGETHER_API)");
    }
    println!("{}", rendered);
    Ok(())
}
