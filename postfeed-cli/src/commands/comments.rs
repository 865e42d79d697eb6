//! Comments command - fetch and display the comments of a post.

use anyhow::Result;
use clap::Args;
use postfeed_core::PostId;
use tracing::debug;

use super::{Session, drain_errors};
use crate::output::{CommentsOutput, JsonFormatter, TextFormatter};
use crate::{Cli, ExitCode, OutputFormat};

/// Arguments for the comments command.
#[derive(Args)]
pub struct CommentsArgs {
    /// Id of the post.
    pub post_id: PostId,

    /// Expand the comment at this index (repeatable).
    #[arg(long, short)]
    pub expand: Vec<usize>,

    /// Expand every comment.
    #[arg(long)]
    pub all: bool,
}

/// Runs the comments command.
pub async fn run(args: &CommentsArgs, cli: &Cli) -> Result<ExitCode> {
    let session = Session::open(cli).await?;
    let mut events = session.feed.subscribe();

    session.feed.fetch_comments(args.post_id).await;

    let errors = drain_errors(&mut events);
    if !errors.is_empty() {
        if !cli.quiet {
            let formatter = TextFormatter::new(!cli.no_color);
            for error in &errors {
                eprintln!("{}", formatter.format_error(error));
            }
        }
        return Ok(ExitCode::FetchFailed);
    }

    let count = session.feed.comments().await.len();
    let mut indexes: Vec<usize> = if args.all {
        (0..count).collect()
    } else {
        args.expand.clone()
    };
    indexes.sort_unstable();
    indexes.dedup();
    for index in indexes {
        if session.feed.toggle_comment(index).await.is_none() {
            debug!(index, count, "Ignoring out-of-range comment index");
        }
    }

    let output = CommentsOutput::from_thread(&session.feed.comment_thread().await);
    match cli.format {
        OutputFormat::Json => println!("{}", JsonFormatter::new(cli.pretty).format(&output)?),
        OutputFormat::Text => {
            print!("{}", TextFormatter::new(!cli.no_color).format_comments(&output));
        }
    }
    Ok(ExitCode::Success)
}
