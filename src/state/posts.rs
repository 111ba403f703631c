//! Posts and the newest-first feed

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::notify::{Listener, Notifier};
use super::profile::ImageRef;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A published post. Fields are private: nothing edits a post after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    id: PostId,
    image: ImageRef,
    description: String,
    timestamp: DateTime<Utc>,
}

impl Post {
    pub(crate) fn new(
        id: PostId,
        image: ImageRef,
        description: String,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            image,
            description,
            timestamp,
        }
    }

    pub fn id(&self) -> &PostId {
        &self.id
    }

    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Ordered post collection, newest first
#[derive(Debug, Default)]
pub struct PostFeed {
    posts: Vec<Post>,
    notifier: Notifier<[Post]>,
}

impl PostFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the head. Ids are not checked for duplicates.
    pub fn prepend(&mut self, post: Post) {
        info!(id = %post.id, total = self.posts.len() + 1, "Post added to feed");
        self.posts.insert(0, post);
        self.notifier.notify(&self.posts);
    }

    pub fn list(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn subscribe(&mut self, listener: Listener<[Post]>) {
        self.notifier.subscribe(listener);
    }

    pub fn revision(&self) -> u64 {
        self.notifier.revision()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::cell::Cell;
    use std::rc::Rc;

    fn post(id: &str, description: &str) -> Post {
        Post::new(
            PostId::new(id),
            ImageRef::new(format!("img://{id}")),
            description.to_string(),
            Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        )
    }

    #[test]
    fn test_prepend_is_newest_first() {
        let mut feed = PostFeed::new();
        let p1 = post("1", "first");
        let p2 = post("2", "second");

        feed.prepend(p1.clone());
        feed.prepend(p2.clone());

        assert_eq!(feed.list(), &[p2, p1]);
    }

    #[test]
    fn test_duplicate_ids_are_accepted() {
        let mut feed = PostFeed::new();
        feed.prepend(post("same", "a"));
        feed.prepend(post("same", "b"));

        assert_eq!(feed.len(), 2);
        assert_eq!(feed.list()[0].description(), "b");
    }

    #[test]
    fn test_prepend_notifies() {
        let count = Rc::new(Cell::new(0usize));
        let mut feed = PostFeed::new();

        let sink = Rc::clone(&count);
        feed.subscribe(Box::new(move |posts: &[Post]| sink.set(posts.len())));

        feed.prepend(post("1", "first"));
        feed.prepend(post("2", "second"));

        assert_eq!(count.get(), 2);
        assert_eq!(feed.revision(), 2);
    }

    #[test]
    fn test_new_feed_is_empty() {
        let feed = PostFeed::new();
        assert!(feed.is_empty());
        assert!(feed.list().is_empty());
    }
}
