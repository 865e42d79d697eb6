//! Posts command - load and display the feed.

use anyhow::Result;
use postfeed_store::{FeedState, PostFeed};
use tracing::info;

use super::{Session, drain_errors};
use crate::output::{FeedOutput, JsonFormatter, TextFormatter};
use crate::{Cli, ExitCode, OutputFormat};

/// Runs the posts command.
pub async fn run(cli: &Cli) -> Result<ExitCode> {
    let session = Session::open(cli).await?;
    let mut events = session.feed.subscribe();

    let state = session.feed.refresh().await;
    let errors = drain_errors(&mut events);
    info!(%state, errors = errors.len(), "Feed refreshed");

    print_feed(&session.feed, &errors, cli).await?;

    if state == FeedState::Empty && !errors.is_empty() {
        return Ok(ExitCode::FetchFailed);
    }
    Ok(ExitCode::Success)
}

/// Prints the current feed in the selected format.
pub async fn print_feed(feed: &PostFeed, errors: &[String], cli: &Cli) -> Result<()> {
    let output = FeedOutput::capture(feed, errors).await;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", JsonFormatter::new(cli.pretty).format(&output)?);
        }
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            for error in errors {
                eprintln!("{}", formatter.format_error(error));
            }
            print!("{}", formatter.format_feed(&output));
        }
    }
    Ok(())
}
