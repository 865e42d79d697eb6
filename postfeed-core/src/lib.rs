// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `PostFeed` Core
//!
//! Core types and feed rules shared by all other `PostFeed` crates.
//!
//! This crate provides:
//!
//! - Domain models ([`Post`], [`Comment`])
//! - The carousel/list split of a feed ([`split_feed`], [`CAROUSEL_SIZE`])
//! - The favorites ordering policy ([`sort_by_favorites`])
//!
//! Everything here is synchronous and free of I/O so the ordering rules can
//! be tested without a network or a runtime.

pub mod models;

// Re-export all model types
pub use models::{
    // Posts and comments
    Comment,
    Post,
    PostId,
    // Feed partition
    CAROUSEL_SIZE,
    remaining_posts,
    sort_by_favorites,
    split_feed,
    top_posts,
};
