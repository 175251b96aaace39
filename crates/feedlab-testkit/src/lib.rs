//! Shared fixtures for feedlab tests.
//!
//! Keeping these in one workspace-only crate avoids copy-paste across the
//! store, engine and CLI tests.

use anyhow::Result;
use feedlab_store::{InMemoryPostStore, NewPost, Post, PostStore, SqliteDatabase};
use tempfile::TempDir;

pub mod proptest;

/// Titles used by the end-to-end search scenario.
pub const STACK_AND_QUEUE: [&str; 2] = ["Intro to Stacks", "Queue Basics"];

pub fn post(id: i64, title: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        caption: String::new(),
        author: "Anonymous".into(),
        post_type: "regular".into(),
        up: 0,
        down: 0,
    }
}

/// In-memory store holding one post per title, inserted in order.
pub fn seeded_store(titles: &[&str]) -> InMemoryPostStore {
    let mut store = InMemoryPostStore::new();
    for title in titles {
        // The in-memory store cannot fail.
        let _ = store.insert(&NewPost::new(*title, ""));
    }
    store
}

/// A SQLite database file in a fresh temporary directory, schema applied.
///
/// Keep the returned `TempDir` alive for as long as the database is used.
pub fn temp_database() -> Result<(TempDir, SqliteDatabase)> {
    let dir = TempDir::new()?;
    let db = SqliteDatabase::new(dir.path().join("feed.db"));
    db.init_schema()?;
    Ok((dir, db))
}

/// Like [`temp_database`], with one post per title.
pub fn seeded_database(titles: &[&str]) -> Result<(TempDir, SqliteDatabase)> {
    let (dir, db) = temp_database()?;
    let mut session = db.session()?;
    for title in titles {
        session.insert(&NewPost::new(*title, ""))?;
    }
    Ok((dir, db))
}
