//! Serde tests for the wire shapes of the posts and comments endpoints.

use crate::{Comment, Post};

// ============================================================================
// Post Serde Tests
// ============================================================================

#[test]
fn test_post_decodes_api_shape() {
    let json = r#"{
        "userId": 1,
        "id": 3,
        "title": "ea molestias quasi",
        "body": "et iusto sed quo iure"
    }"#;

    let post: Post = serde_json::from_str(json).unwrap();
    assert_eq!(post.user_id, 1);
    assert_eq!(post.id, 3);
    assert_eq!(post.title, "ea molestias quasi");
    assert!(!post.is_favourite, "missing flag should default to false");
}

#[test]
fn test_post_null_flag_is_false() {
    let json = r#"{"userId":1,"id":3,"title":"t","body":"b","isFavourite":null}"#;
    let post: Post = serde_json::from_str(json).unwrap();
    assert!(!post.is_favourite);
}

#[test]
fn test_post_serializes_camel_case() {
    let post = Post::new(2, 14, "title", "body").favourite();
    let value = serde_json::to_value(&post).unwrap();

    assert_eq!(value["userId"], 2);
    assert_eq!(value["isFavourite"], true);
    assert!(value.get("user_id").is_none());
}

#[test]
fn test_favourite_survives_persistence_shape() {
    let posts = vec![Post::new(1, 1, "a", "b").favourite()];
    let json = serde_json::to_string(&posts).unwrap();
    let restored: Vec<Post> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, posts);
}

#[test]
fn test_post_missing_id_is_rejected() {
    let json = r#"{"userId":1,"title":"t","body":"b"}"#;
    assert!(serde_json::from_str::<Post>(json).is_err());
}

// ============================================================================
// Comment Serde Tests
// ============================================================================

#[test]
fn test_comment_decodes_api_shape() {
    let json = r#"[{
        "postId": 1,
        "id": 1,
        "name": "id labore ex et quam laborum",
        "email": "Eliseo@gardner.biz",
        "body": "laudantium enim quasi est"
    }]"#;

    let comments: Vec<Comment> = serde_json::from_str(json).unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].post_id, 1);
    assert_eq!(comments[0].email, "Eliseo@gardner.biz");
}

#[test]
fn test_comment_rejects_post_shape() {
    let json = r#"[{"userId":1,"id":1,"title":"t","body":"b"}]"#;
    assert!(serde_json::from_str::<Vec<Comment>>(json).is_err());
}
