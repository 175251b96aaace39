use crate::COMPONENT;
use crate::search::{SearchOrchestrator, SearchResults, feed_snapshot};
use anyhow::Result;
use feedlab_logging::Logger;
use feedlab_queue::LinkedQueue;
use feedlab_store::{NewPost, Post, PostStore, Vote};

/// `post_type` carried by the fixed lecture cards.
pub const LECTURE_POST_TYPE: &str = "interactive";

const LECTURES: [(i64, &str, &str); 5] = [
    (
        -1,
        "Queue Interactive Demo",
        "Real-time enqueue/dequeue visualization.",
    ),
    (-2, "Stack Interactive Demo", "Push/pop to see LIFO behavior."),
    (-3, "Tree Interactive Demo", "Add nodes to grow a general tree."),
    (
        -4,
        "Binary Tree Interactive Demo",
        "Insert left/right nodes manually.",
    ),
    (
        -5,
        "Binary Search Tree Interactive Demo",
        "Automatic BST insertion.",
    ),
];

/// The interactive demo cards shown ahead of stored posts. Their ids are
/// negative so they never collide with stored rows.
pub fn lecture_cards() -> Vec<Post> {
    LECTURES
        .iter()
        .map(|&(id, title, caption)| Post {
            id,
            title: title.to_string(),
            caption: caption.to_string(),
            author: String::new(),
            post_type: LECTURE_POST_TYPE.to_string(),
            up: 0,
            down: 0,
        })
        .collect()
}

/// Post actions over a single store session.
pub struct FeedEngine<S> {
    store: S,
    logger: Logger,
}

impl<S: PostStore> FeedEngine<S> {
    pub fn new(store: S, logger: Logger) -> Self {
        Self { store, logger }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// All stored posts, newest first.
    pub fn feed(&self) -> Result<Vec<Post>> {
        feed_snapshot(&self.store)
    }

    /// Lecture cards followed by the feed.
    pub fn lectures(&self) -> Result<Vec<Post>> {
        let mut posts = lecture_cards();
        posts.extend(self.feed()?);
        Ok(posts)
    }

    pub fn search(&self, keyword: &str) -> Result<SearchResults> {
        SearchOrchestrator::new(&self.store, &self.logger).search(keyword)
    }

    pub fn create_post(&mut self, post: &NewPost) -> Result<i64> {
        let id = self.store.insert(post)?;
        self.logger.info(COMPONENT, format!("created post {id}"));
        Ok(id)
    }

    pub fn vote(&mut self, id: i64, vote: Vote) -> Result<bool> {
        let changed = self.store.vote(id, vote)?;
        self.log_change("vote", id, changed);
        Ok(changed)
    }

    /// Replace a caption. A missing caption is stored as the empty string.
    pub fn edit_caption(&mut self, id: i64, caption: Option<&str>) -> Result<bool> {
        let changed = self.store.update_caption(id, caption.unwrap_or_default())?;
        self.log_change("edit", id, changed);
        Ok(changed)
    }

    /// Delete a post. The id passes through a queue first, and an empty
    /// dequeue deletes nothing.
    pub fn delete_post(&mut self, id: i64) -> Result<bool> {
        let mut pending = LinkedQueue::new();
        pending.enqueue(id);
        let Some(post_id) = pending.dequeue() else {
            return Ok(false);
        };
        let changed = self.store.delete(post_id)?;
        self.log_change("delete", post_id, changed);
        Ok(changed)
    }

    fn log_change(&self, action: &str, id: i64, changed: bool) {
        if changed {
            self.logger.info(COMPONENT, format!("{action} post {id}"));
        } else {
            self.logger
                .debug(COMPONENT, format!("{action}: no post with id {id}"));
        }
    }
}
