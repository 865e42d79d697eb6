//! Output formatting for CLI.

mod json;
mod text;

pub use json::{CommentsOutput, FeedOutput, JsonFormatter};
pub use text::TextFormatter;
#[cfg(test)]
mod tests;
