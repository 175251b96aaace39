use crate::COMPONENT;
use anyhow::{Context, Result};
use feedlab_bst::StringBst;
use feedlab_logging::Logger;
use feedlab_stack::LinkedStack;
use feedlab_store::{Post, PostStore};
use serde::Serialize;

/// The three independent result sets of one search. They are never merged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    /// Every post, newest first.
    pub feed_snapshot: Vec<Post>,
    /// Titles matching the keyword, in BST preorder.
    pub dfs_matches: Vec<String>,
    /// Posts whose title or caption matches in the store query.
    pub store_matches: Vec<Post>,
}

/// Read all posts and stack them in ascending id order, then read the stack
/// back top-first. The result is newest first.
pub fn feed_snapshot(store: &dyn PostStore) -> Result<Vec<Post>> {
    let posts = store.list_ascending().context("load feed")?;
    let mut stack = LinkedStack::new();
    for post in posts {
        stack.push(post);
    }
    Ok(stack.into_vec())
}

pub struct SearchOrchestrator<'a> {
    store: &'a dyn PostStore,
    logger: &'a Logger,
}

impl<'a> SearchOrchestrator<'a> {
    pub fn new(store: &'a dyn PostStore, logger: &'a Logger) -> Self {
        Self { store, logger }
    }

    pub fn search(&self, keyword: &str) -> Result<SearchResults> {
        let feed_snapshot = feed_snapshot(self.store)?;

        let mut titles = StringBst::new();
        for post in &feed_snapshot {
            titles.insert(&post.title);
        }
        let report = titles.search_with_report(keyword);
        if report.skipped > 0 {
            self.logger.debug(
                COMPONENT,
                format!("skipped {} title(s) that are not text", report.skipped),
            );
        }

        let store_matches = self
            .store
            .search_title_or_caption(keyword)
            .context("store search")?;

        self.logger.info(
            COMPONENT,
            format!(
                "search {keyword:?}: {} posts, {} bst matches, {} store matches",
                feed_snapshot.len(),
                report.matches.len(),
                store_matches.len()
            ),
        );

        Ok(SearchResults {
            feed_snapshot,
            dfs_matches: report.matches,
            store_matches,
        })
    }
}
