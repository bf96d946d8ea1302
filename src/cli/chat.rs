//! Interactive session command handler.

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, info, warn};

use coinsay::agent::PriceAgent;
use coinsay::config::Config;
use coinsay::session::{Reply, Session, INPUT_PROMPT, INTRO, TITLE};

use super::common::{print_context, print_error, print_reply};

/// Run one interactive session until `exit`, Ctrl-C or Ctrl-D.
pub(crate) async fn cmd_chat(config: Config) -> Result<()> {
    if !config.llm.has_api_key() {
        warn!("No Together API key found; responses will fail until TOGETHER_API is set");
    }

    let agent = PriceAgent::from_config(&config).with_context(|| "Failed to set up clients")?;
    let mut session = Session::new(agent);

    let mut editor = DefaultEditor::new().with_context(|| "Failed to initialize line editor")?;
    let history_path = Config::dir().join("history.txt");
    if editor.load_history(&history_path).is_err() {
        debug!(path = %history_path.display(), "No readline history loaded");
    }

    println!("{}", TITLE);
    println!("{}", INTRO);
    println!();

    while !session.is_finished() {
        let line = match editor.readline(INPUT_PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                print_reply(&Reply::Goodbye);
                break;
            }
            Err(e) => return Err(e).with_context(|| "Failed to read input"),
        };

        if !line.trim().is_empty() {
            let _ = editor.add_history_entry(line.as_str());
        }

        match session.handle(&line).await {
            Ok(Reply::Nothing) => continue,
            Ok(reply) => print_reply(&reply),
            Err(err) => print_error(&err),
        }
        print_context(&session);
        println!();
    }

    let stats = session.cache_stats();
    info!(
        entries = stats.total_entries,
        hits = stats.total_hits,
        "Session ended"
    );

    if let Some(parent) = history_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Err(e) = editor.save_history(&history_path) {
        debug!(error = %e, "Failed to save readline history");
    }

    Ok(())
}
