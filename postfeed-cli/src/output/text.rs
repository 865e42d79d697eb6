//! Text output formatting with colors.

use chrono::{DateTime, Local};
use postfeed_core::{Post, PostId};
use postfeed_store::FeedState;

use super::json::{CommentsOutput, FeedOutput};

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";

const HEART_FILLED: char = '♥';
const HEART_EMPTY: char = '♡';

/// Titles longer than this are cut with an ellipsis.
const TITLE_WIDTH: usize = 60;

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
    title_width: usize,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self {
            use_colors,
            title_width: TITLE_WIDTH,
        }
    }

    /// Formats the carousel and list sections of the feed.
    pub fn format_feed(&self, feed: &FeedOutput) -> String {
        let mut out = String::new();

        if feed.state == FeedState::OfflineFallback {
            out.push_str(&self.color("Offline - showing saved favorites", YELLOW));
            out.push('\n');
        }

        out.push_str(&self.format_section("Carousel", &feed.top_posts));
        out.push_str(&self.format_section("List", &feed.remaining_posts));

        if let Some(updated) = feed.last_updated {
            let local: DateTime<Local> = updated.into();
            out.push_str(&self.dim(&format!("Updated {}", local.format("%H:%M:%S"))));
            out.push('\n');
        }
        out
    }

    /// Formats a titled list of posts.
    pub fn format_section(&self, title: &str, posts: &[Post]) -> String {
        let mut out = format!("{} ({})\n", self.bold(title), posts.len());
        if posts.is_empty() {
            out.push_str(&self.dim("  (none)"));
            out.push('\n');
        }
        for post in posts {
            out.push_str(&self.format_post_line(post));
            out.push('\n');
        }
        out
    }

    /// Formats one post as `  <id> <heart> <title>`.
    pub fn format_post_line(&self, post: &Post) -> String {
        let heart = if post.is_favourite {
            self.color(&HEART_FILLED.to_string(), RED)
        } else {
            HEART_EMPTY.to_string()
        };
        format!(
            "  {:>4} {} {}",
            post.id,
            heart,
            truncate(&post.title, self.title_width)
        )
    }

    /// Formats a comment thread. Collapsed comments show only the author.
    pub fn format_comments(&self, thread: &CommentsOutput) -> String {
        let title = match thread.post_id {
            Some(id) => format!("Comments on post {id}"),
            None => "Comments".to_string(),
        };
        let mut out = format!("{} ({})\n", self.bold(&title), thread.comments.len());

        for entry in &thread.comments {
            let marker = if entry.expanded { '▾' } else { '▸' };
            out.push_str(&format!(
                "  {marker} [{}] {} {}\n",
                entry.index,
                entry.comment.name,
                self.dim(&format!("<{}>", entry.comment.email))
            ));
            if entry.expanded {
                for line in entry.comment.body.lines() {
                    out.push_str(&format!("      {line}\n"));
                }
            }
        }
        out
    }

    /// Formats the result of a favorite toggle.
    pub fn format_toggle(&self, post_id: PostId, is_favourite: bool) -> String {
        if is_favourite {
            format!(
                "{} Post {post_id} added to favorites",
                self.color(&HEART_FILLED.to_string(), RED)
            )
        } else {
            format!("{HEART_EMPTY} Post {post_id} removed from favorites")
        }
    }

    /// Formats an error line.
    pub fn format_error(&self, message: &str) -> String {
        self.color(&format!("✗ {message}"), RED)
    }

    /// Formats the header printed above each watch refresh.
    pub fn format_watch_header(&self, now: DateTime<Local>, connected: bool) -> String {
        let status = if connected {
            self.color("online", GREEN)
        } else {
            self.color("offline", YELLOW)
        };
        format!(
            "PostFeed Watch - {} ({status})\n{}",
            now.format("%H:%M:%S"),
            "─".repeat(50)
        )
    }

    fn bold(&self, text: &str) -> String {
        self.color(text, BOLD)
    }

    fn dim(&self, text: &str) -> String {
        self.color(text, DIM)
    }

    fn color(&self, text: &str, code: &str) -> String {
        if self.use_colors {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

/// Cuts `text` to at most `max` characters, ending with an ellipsis if cut.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
