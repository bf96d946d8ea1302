//! One-shot lookup command handler.

use anyhow::{Context, Result};
use tracing::info;

use coinsay::agent::PriceAgent;
use coinsay::config::Config;
use coinsay::session::{Reply, Session};

use super::common::{print_context, print_error, print_reply};

/// Resolve each name in order within a single session.
pub(crate) async fn cmd_ask(config: Config, names: Vec<String>) -> Result<()> {
    let agent = PriceAgent::from_config(&config).with_context(|| "Failed to set up clients")?;
    let mut session = Session::new(agent);
    let mut failed = 0usize;

    for name in names {
        match session.handle(&name).await {
            Ok(Reply::Nothing) => {}
            Ok(reply) => print_reply(&reply),
            Err(err) => {
                failed += 1;
                print_error(&err);
            }
        }
        if session.is_finished() {
            break;
        }
    }

    print_context(&session);

    let stats = session.cache_stats();
    info!(
        entries = stats.total_entries,
        hits = stats.total_hits,
        "Session ended"
    );

    if failed > 0 {
        anyhow::bail!("{} lookup(s) failed", failed);
    }
    Ok(())
}
