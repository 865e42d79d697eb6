//! CLI output formatting tests.

#[cfg(test)]
mod text_formatter_tests {
    use super::super::json::{CommentOutput, CommentsOutput, FeedOutput};
    use super::super::text::{TextFormatter, truncate};
    use postfeed_core::{Comment, Post};
    use postfeed_store::FeedState;

    fn feed_output(state: FeedState, top: Vec<Post>, rest: Vec<Post>) -> FeedOutput {
        FeedOutput {
            state,
            connected: state != FeedState::OfflineFallback,
            last_updated: None,
            top_posts: top,
            remaining_posts: rest,
            errors: Vec::new(),
        }
    }

    fn comment(id: u64) -> Comment {
        Comment {
            post_id: 3,
            id,
            name: format!("name {id}"),
            email: "who@example.com".to_string(),
            body: "first line\nsecond line".to_string(),
        }
    }

    #[test]
    fn test_post_line_marks_favorites() {
        let formatter = TextFormatter::new(false);
        let plain = formatter.format_post_line(&Post::new(1, 7, "hello", "b"));
        let fav = formatter.format_post_line(&Post::new(1, 7, "hello", "b").favourite());

        assert_eq!(plain, "     7 ♡ hello");
        assert_eq!(fav, "     7 ♥ hello");
    }

    #[test]
    fn test_feed_sections() {
        let formatter = TextFormatter::new(false);
        let output = feed_output(
            FeedState::Loaded,
            vec![Post::new(1, 1, "a", "b")],
            vec![],
        );

        let text = formatter.format_feed(&output);
        assert!(text.contains("Carousel (1)"));
        assert!(text.contains("List (0)"));
        assert!(text.contains("(none)"));
        assert!(!text.contains("Offline"));
    }

    #[test]
    fn test_offline_banner() {
        let formatter = TextFormatter::new(false);
        let output = feed_output(FeedState::OfflineFallback, vec![], vec![]);
        assert!(formatter.format_feed(&output).starts_with("Offline"));
    }

    #[test]
    fn test_collapsed_comment_hides_body() {
        let formatter = TextFormatter::new(false);
        let thread = CommentsOutput {
            post_id: Some(3),
            comments: vec![
                CommentOutput {
                    index: 0,
                    expanded: false,
                    comment: comment(1),
                },
                CommentOutput {
                    index: 1,
                    expanded: true,
                    comment: comment(2),
                },
            ],
        };

        let text = formatter.format_comments(&thread);
        assert!(text.contains("Comments on post 3 (2)"));
        assert!(text.contains("▸ [0] name 1"));
        assert!(text.contains("▾ [1] name 2"));
        assert_eq!(text.matches("first line").count(), 1);
    }

    #[test]
    fn test_colors_only_when_enabled() {
        let plain = TextFormatter::new(false).format_error("boom");
        let colored = TextFormatter::new(true).format_error("boom");

        assert_eq!(plain, "✗ boom");
        assert!(colored.contains("\x1b[31m"));
    }

    #[test]
    fn test_toggle_messages() {
        let formatter = TextFormatter::new(false);
        assert_eq!(formatter.format_toggle(4, true), "♥ Post 4 added to favorites");
        assert_eq!(formatter.format_toggle(4, false), "♡ Post 4 removed from favorites");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
        assert_eq!(truncate("ééééé", 5), "ééééé");
    }
}

#[cfg(test)]
mod json_formatter_tests {
    use super::super::json::{CommentsOutput, FeedOutput, JsonFormatter};
    use postfeed_core::{Comment, Post};
    use postfeed_store::{CommentThread, FeedState};

    #[test]
    fn test_feed_json_shape() {
        let output = FeedOutput {
            state: FeedState::Loaded,
            connected: true,
            last_updated: None,
            top_posts: vec![Post::new(1, 1, "a", "b")],
            remaining_posts: vec![],
            errors: vec![],
        };

        let json = JsonFormatter::new(false).format(&output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["state"], "loaded");
        assert_eq!(value["topPosts"][0]["id"], 1);
        assert_eq!(value["topPosts"][0]["isFavourite"], false);
        assert!(value.get("errors").is_none());
        assert!(value.get("lastUpdated").is_none());
    }

    #[test]
    fn test_comments_json_flattens_comment() {
        let mut thread = CommentThread::new();
        thread.replace(
            2,
            vec![Comment {
                post_id: 2,
                id: 9,
                name: "n".to_string(),
                email: "e@x.io".to_string(),
                body: "b".to_string(),
            }],
        );
        thread.toggle(0);

        let output = CommentsOutput::from_thread(&thread);
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(value["postId"], 2);
        assert_eq!(value["comments"][0]["expanded"], true);
        assert_eq!(value["comments"][0]["email"], "e@x.io");
        assert_eq!(value["comments"][0]["index"], 0);
    }

    #[test]
    fn test_pretty_output_is_multiline() {
        let json = JsonFormatter::new(true).format(&vec![1, 2]).unwrap();
        assert!(json.contains('\n'));
    }
}
