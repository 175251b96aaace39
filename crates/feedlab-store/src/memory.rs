use crate::{NewPost, Post, PostStore, Vote};
use anyhow::Result;

/// Post store held in a `Vec`, for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPostStore {
    posts: Vec<Post>,
    last_id: i64,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    fn get_mut(&mut self, id: i64) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == id)
    }
}

fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}

impl PostStore for InMemoryPostStore {
    fn list_ascending(&self) -> Result<Vec<Post>> {
        // Ids are handed out in increasing order, so insertion order is id order.
        Ok(self.posts.clone())
    }

    fn insert(&mut self, post: &NewPost) -> Result<i64> {
        self.last_id += 1;
        self.posts.push(Post {
            id: self.last_id,
            title: post.title.clone().unwrap_or_default(),
            caption: post.caption.clone().unwrap_or_default(),
            author: post.author_or_default().to_string(),
            post_type: post.post_type_or_default().to_string(),
            up: 0,
            down: 0,
        });
        Ok(self.last_id)
    }

    fn update_caption(&mut self, id: i64, caption: &str) -> Result<bool> {
        Ok(match self.get_mut(id) {
            Some(post) => {
                post.caption = caption.to_string();
                true
            }
            None => false,
        })
    }

    fn vote(&mut self, id: i64, vote: Vote) -> Result<bool> {
        Ok(match self.get_mut(id) {
            Some(post) => {
                match vote {
                    Vote::Up => post.up += 1,
                    Vote::Down => post.down += 1,
                }
                true
            }
            None => false,
        })
    }

    fn delete(&mut self, id: i64) -> Result<bool> {
        let before = self.posts.len();
        self.posts.retain(|p| p.id != id);
        Ok(self.posts.len() < before)
    }

    fn search_title_or_caption(&self, keyword: &str) -> Result<Vec<Post>> {
        Ok(self
            .posts
            .iter()
            .filter(|p| {
                contains_ignore_ascii_case(&p.title, keyword)
                    || contains_ignore_ascii_case(&p.caption, keyword)
            })
            .cloned()
            .collect())
    }
}
