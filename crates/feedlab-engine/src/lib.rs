//! Orchestration for the feedlab feed.
//!
//! Sits between the CLI and the store: builds the stack-ordered feed
//! snapshot, runs the two-sided search and carries out post actions.

mod feed;
mod search;

pub use feed::{FeedEngine, LECTURE_POST_TYPE, lecture_cards};
pub use search::{SearchOrchestrator, SearchResults, feed_snapshot};

/// Component name used in log entries from this crate.
pub const COMPONENT: &str = "engine";
