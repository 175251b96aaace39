//! Persisted posts for feedlab.
//!
//! [`PostStore`] is the port the engine talks to. [`SqliteDatabase`] hands
//! out one [`SqliteSession`] per request; [`InMemoryPostStore`] backs tests
//! and dry runs with the same semantics.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

mod memory;
mod sqlite;

pub use memory::InMemoryPostStore;
pub use sqlite::{SCHEMA, SqliteDatabase, SqliteSession};

pub const DEFAULT_AUTHOR: &str = "Anonymous";
pub const DEFAULT_POST_TYPE: &str = "regular";

/// A stored post. Missing titles and captions read back as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub caption: String,
    pub author: String,
    pub post_type: String,
    pub up: i64,
    pub down: i64,
}

/// Fields supplied when creating a post. Counters always start at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: Option<String>,
    pub caption: Option<String>,
    pub author: Option<String>,
    pub post_type: Option<String>,
}

impl NewPost {
    pub fn new(title: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            caption: Some(caption.into()),
            author: None,
            post_type: None,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_post_type(mut self, post_type: impl Into<String>) -> Self {
        self.post_type = Some(post_type.into());
        self
    }

    pub fn author_or_default(&self) -> &str {
        self.author.as_deref().unwrap_or(DEFAULT_AUTHOR)
    }

    pub fn post_type_or_default(&self) -> &str {
        self.post_type.as_deref().unwrap_or(DEFAULT_POST_TYPE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Up,
    Down,
}

impl Vote {
    /// `"up"` is an upvote; any other direction counts as a downvote.
    pub fn from_way(way: &str) -> Self {
        if way == "up" { Vote::Up } else { Vote::Down }
    }

    pub(crate) fn column(self) -> &'static str {
        match self {
            Vote::Up => "up",
            Vote::Down => "down",
        }
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Access to persisted posts.
///
/// Mutating calls return whether a row was affected; an unknown id is not an
/// error.
pub trait PostStore {
    /// All posts, lowest id first.
    fn list_ascending(&self) -> Result<Vec<Post>>;

    /// Insert a post and return its id.
    fn insert(&mut self, post: &NewPost) -> Result<i64>;

    fn update_caption(&mut self, id: i64, caption: &str) -> Result<bool>;

    fn vote(&mut self, id: i64, vote: Vote) -> Result<bool>;

    fn delete(&mut self, id: i64) -> Result<bool>;

    /// Posts whose title or caption contains `keyword`, ignoring ASCII case.
    fn search_title_or_caption(&self, keyword: &str) -> Result<Vec<Post>>;
}
