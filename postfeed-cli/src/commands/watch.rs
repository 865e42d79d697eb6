//! Watch command - follow connectivity and print the feed as it changes.

use anyhow::Result;
use clap::Args;
use postfeed_store::FeedEvent;
use std::io::{Write, stdout};
use tokio::sync::broadcast::error::RecvError;
use tokio::time::Duration;
use tracing::{info, warn};

use super::Session;
use super::posts::print_feed;
use crate::output::TextFormatter;
use crate::{Cli, ExitCode, OutputFormat};

/// Arguments for watch command.
#[derive(Args)]
pub struct WatchArgs {
    /// Connectivity probe interval in seconds (defaults to the config value).
    #[arg(long, short)]
    pub interval: Option<u64>,

    /// Minimum interval to use.
    #[arg(long, default_value = "2")]
    pub min_interval: u64,

    /// Do not probe connectivity; stay in the initial online/offline state.
    #[arg(long)]
    pub no_probe: bool,
}

/// Runs the watch command.
pub async fn run(args: &WatchArgs, cli: &Cli) -> Result<ExitCode> {
    let session = Session::open(cli).await?;
    let interval = args
        .interval
        .map_or_else(|| session.config.connectivity_probe_interval(), Duration::from_secs)
        .max(Duration::from_secs(args.min_interval));

    info!(interval_secs = interval.as_secs(), "Starting watch mode");

    let mut events = session.feed.subscribe();
    let watcher = session.feed.watch_connectivity();
    let probe = (!args.no_probe).then(|| {
        session.connectivity.spawn_probe(
            session.http.clone(),
            session.endpoints.posts_url(),
            interval,
        )
    });

    let _initial = session.feed.spawn_refresh();

    let formatter = TextFormatter::new(!cli.no_color);

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(FeedEvent::PostsUpdated) => {
                    if cli.format == OutputFormat::Text {
                        print!("\x1b[2J\x1b[H");
                        stdout().flush()?;
                        let now = chrono::Local::now();
                        println!("{}", formatter.format_watch_header(now, session.feed.is_connected()));
                    }
                    print_feed(&session.feed, &[], cli).await?;
                }
                Ok(FeedEvent::CommentsUpdated) => {}
                Ok(FeedEvent::Error(message)) => {
                    eprintln!("{}", formatter.format_error(&message));
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Watch output fell behind");
                }
                Err(RecvError::Closed) => break,
            },
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, leaving watch mode");
                break;
            }
        }
    }

    watcher.abort();
    if let Some(probe) = probe {
        probe.abort();
    }
    Ok(ExitCode::Success)
}
