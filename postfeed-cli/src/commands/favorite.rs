//! Favorite command - toggle the favorite flag of one post.

use anyhow::Result;
use clap::Args;
use postfeed_core::PostId;

use super::posts::print_feed;
use super::{Session, drain_errors};
use crate::output::TextFormatter;
use crate::{Cli, ExitCode, OutputFormat};

/// Arguments for the favorite command.
#[derive(Args)]
pub struct FavoriteArgs {
    /// Id of the post to toggle.
    pub post_id: PostId,
}

/// Runs the favorite command.
pub async fn run(args: &FavoriteArgs, cli: &Cli) -> Result<ExitCode> {
    let session = Session::open(cli).await?;
    let mut events = session.feed.subscribe();

    session.feed.refresh().await;

    let Some(is_favourite) = session.feed.toggle_favorite(args.post_id).await else {
        let errors = drain_errors(&mut events);
        if !cli.quiet {
            let formatter = TextFormatter::new(!cli.no_color);
            for error in &errors {
                eprintln!("{}", formatter.format_error(error));
            }
            eprintln!("{}", formatter.format_error(&format!("Post {} is not in the feed", args.post_id)));
        }
        return Ok(ExitCode::NotFound);
    };

    let errors = drain_errors(&mut events);
    if cli.format == OutputFormat::Text && !cli.quiet {
        let formatter = TextFormatter::new(!cli.no_color);
        println!("{}", formatter.format_toggle(args.post_id, is_favourite));
    }
    print_feed(&session.feed, &errors, cli).await?;

    Ok(ExitCode::Success)
}
