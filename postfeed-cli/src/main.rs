// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! `PostFeed` CLI - browse posts, favorites and comments from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Show the feed (carousel + list)
//! postfeed
//!
//! # Show only the persisted favorites, as if offline
//! postfeed --offline
//!
//! # Mark post 12 as favorite
//! postfeed favorite 12
//!
//! # Comments of post 3 with the first one expanded
//! postfeed comments 3 --expand 0
//!
//! # Follow connectivity changes and print the feed as it updates
//! postfeed watch
//! ```

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use commands::{comments, favorite, favorites, posts, watch};

// ============================================================================
// CLI Definition
// ============================================================================

/// `PostFeed` CLI - browse a post feed with favorites and comments.
#[derive(Parser)]
#[command(name = "postfeed")]
#[command(about = "Browse posts, favorites and comments")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run. If none, runs 'posts' by default.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Start with connectivity down (show persisted favorites only).
    #[arg(long, global = true)]
    pub offline: bool,

    /// Keep favorites in memory only; nothing is read from or written to disk.
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Path to the configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the feed (default if no command specified).
    #[command(visible_alias = "p")]
    Posts,

    /// Show the comments of a post.
    #[command(visible_alias = "c")]
    Comments(comments::CommentsArgs),

    /// Toggle the favorite flag of a post.
    Favorite(favorite::FavoriteArgs),

    /// Show the persisted favorites.
    Favorites,

    /// Follow connectivity and print the feed on every change.
    #[command(visible_alias = "w")]
    Watch(watch::WatchArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// General error.
    Error = 1,
    /// The feed could not be loaded.
    FetchFailed = 2,
    /// The requested post is not in the feed.
    NotFound = 3,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let filter = if verbose {
        EnvFilter::new("postfeed=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("postfeed=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Some(Commands::Posts) | None => posts::run(&cli).await,
        Some(Commands::Comments(args)) => comments::run(args, &cli).await,
        Some(Commands::Favorite(args)) => favorite::run(args, &cli).await,
        Some(Commands::Favorites) => favorites::run(&cli).await,
        Some(Commands::Watch(args)) => watch::run(args, &cli).await,
    };

    match result {
        Ok(code) => {
            if !matches!(code, ExitCode::Success) {
                std::process::exit(code as i32);
            }
        }
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {e:#}");
            }
            std::process::exit(ExitCode::Error as i32);
        }
    }

    Ok(())
}
