//! Favorites command - show the persisted favorites snapshot.

use anyhow::Result;
use postfeed_store::FavoritesStore;

use super::Session;
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, ExitCode, OutputFormat};

/// Runs the favorites command.
pub async fn run(cli: &Cli) -> Result<ExitCode> {
    let session = Session::open(cli).await?;
    let saved = session.favorites.load().await;

    match cli.format {
        OutputFormat::Json => println!("{}", JsonFormatter::new(cli.pretty).format(&saved)?),
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            print!("{}", formatter.format_section("Favorites", &saved));
        }
    }
    Ok(ExitCode::Success)
}
