//! New-post draft state machine
//!
//! Closed -> Open(image = none, description = "") -> Closed. Posting is only
//! allowed once an image is chosen and the description is not blank.

use tracing::{debug, info};

use super::posts::{Post, PostFeed};
use super::profile::ImageRef;
use super::SessionId;
use crate::clock::Clock;

#[derive(Debug)]
struct ComposeSession {
    id: SessionId,
    image: Option<ImageRef>,
    description: String,
}

#[derive(Debug, Default)]
pub struct PostComposer {
    session: Option<ComposeSession>,
    opened: u64,
}

impl PostComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<SessionId> {
        self.session.as_ref().map(|s| s.id)
    }

    /// Open with an empty draft. Already open: keeps the draft in progress.
    pub fn open(&mut self) -> SessionId {
        if let Some(session) = &self.session {
            return session.id;
        }

        self.opened += 1;
        let id = SessionId(self.opened);
        self.session = Some(ComposeSession {
            id,
            image: None,
            description: String::new(),
        });
        info!(session = ?id, "Post composer opened");
        id
    }

    pub fn image(&self) -> Option<&ImageRef> {
        self.session.as_ref().and_then(|s| s.image.as_ref())
    }

    pub fn description(&self) -> &str {
        self.session
            .as_ref()
            .map(|s| s.description.as_str())
            .unwrap_or_default()
    }

    /// Replace the selected image. Ignored when closed, stale or cancelled.
    pub fn image_selected(&mut self, session_id: SessionId, image: Option<ImageRef>) -> bool {
        let Some(session) = self.session.as_mut() else {
            debug!(session = ?session_id, "Dropping image for closed composer");
            return false;
        };
        if session.id != session_id {
            debug!(session = ?session_id, current = ?session.id, "Dropping image from stale composer session");
            return false;
        }
        match image {
            Some(image) => {
                session.image = Some(image);
                true
            }
            None => false,
        }
    }

    /// Store the description verbatim; trimming happens on post
    pub fn description_edit(&mut self, text: impl Into<String>) {
        if let Some(session) = self.session.as_mut() {
            session.description = text.into();
        }
    }

    pub fn can_submit(&self) -> bool {
        self.session.as_ref().is_some_and(|s| {
            s.image.as_ref().is_some_and(|image| !image.is_empty())
                && !s.description.trim().is_empty()
        })
    }

    /// Create the post and put it at the head of the feed.
    /// Returns None, touching nothing, unless `can_submit` holds.
    pub fn post(&mut self, clock: &mut dyn Clock, feed: &mut PostFeed) -> Option<Post> {
        if !self.can_submit() {
            debug!(open = self.is_open(), "Post rejected: image and description required");
            return None;
        }
        let session = self.session.take()?;
        let image = session.image?;
        let stamp = clock.issue();
        let post = Post::new(
            stamp.id,
            image,
            session.description.trim().to_string(),
            stamp.at,
        );
        feed.prepend(post.clone());
        info!(session = ?session.id, id = %post.id(), "Post published");
        Some(post)
    }

    pub fn discard(&mut self) {
        if let Some(session) = self.session.take() {
            info!(session = ?session.id, "Post composer discarded");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn composer_with(image: Option<&str>, description: &str) -> PostComposer {
        let mut composer = PostComposer::new();
        let session = composer.open();
        composer.image_selected(session, image.map(ImageRef::new));
        composer.description_edit(description);
        composer
    }

    #[test]
    fn test_can_submit_combinations() {
        let cases = [
            (None, "", false),
            (None, "nice fossil", false),
            (None, "   \t\n", false),
            (Some("img://1"), "", false),
            (Some("img://1"), "nice fossil", true),
            (Some("img://1"), "   \t\n", false),
        ];

        for (image, description, expected) in cases {
            let composer = composer_with(image, description);
            assert_eq!(
                composer.can_submit(),
                expected,
                "image={image:?} description={description:?}"
            );
        }
    }

    #[test]
    fn test_empty_image_ref_counts_as_unset() {
        let composer = composer_with(Some(""), "nice fossil");
        assert!(!composer.can_submit());
    }

    #[test]
    fn test_closed_composer_cannot_submit() {
        let composer = PostComposer::new();
        assert!(!composer.can_submit());
        assert_eq!(composer.description(), "");
    }

    #[test]
    fn test_guard_blocks_then_posts() {
        let mut clock = ManualClock::starting_at(1_700_000_000);
        let mut feed = PostFeed::new();
        let mut composer = PostComposer::new();

        let session = composer.open();
        composer.image_selected(session, Some(ImageRef::new("img://1")));
        assert!(composer.post(&mut clock, &mut feed).is_none());
        assert!(feed.is_empty());
        assert!(composer.is_open());

        composer.description_edit("nice fossil");
        let post = composer.post(&mut clock, &mut feed).unwrap();

        assert_eq!(feed.list()[0], post);
        assert_eq!(post.image(), &ImageRef::new("img://1"));
        assert_eq!(post.description(), "nice fossil");
        assert!(!composer.is_open());
    }

    #[test]
    fn test_post_trims_description_and_resets() {
        let mut clock = ManualClock::starting_at(0);
        let mut feed = PostFeed::new();
        let mut composer = composer_with(Some("img://1"), "  raptor tooth \n");

        let post = composer.post(&mut clock, &mut feed).unwrap();
        assert_eq!(post.description(), "raptor tooth");

        composer.open();
        assert!(composer.image().is_none());
        assert_eq!(composer.description(), "");
    }

    #[test]
    fn test_two_posts_are_newest_first() {
        let mut clock = ManualClock::starting_at(0);
        let mut feed = PostFeed::new();
        let mut composer = PostComposer::new();

        let mut publish = |composer: &mut PostComposer, image: &str, text: &str| {
            let session = composer.open();
            composer.image_selected(session, Some(ImageRef::new(image)));
            composer.description_edit(text);
            composer.post(&mut clock, &mut feed).unwrap()
        };
        let p1 = publish(&mut composer, "img://1", "first");
        let p2 = publish(&mut composer, "img://2", "second");

        assert_eq!(feed.list(), &[p2.clone(), p1.clone()]);
        assert!(p2.timestamp() > p1.timestamp());
        assert_ne!(p1.id(), p2.id());
    }

    #[test]
    fn test_discard_resets_and_leaves_feed() {
        let mut feed = PostFeed::new();
        let mut composer = composer_with(Some("img://1"), "draft");

        composer.discard();
        assert!(!composer.is_open());
        assert!(feed.is_empty());

        composer.open();
        assert!(composer.image().is_none());
        assert_eq!(composer.description(), "");
        let mut clock = ManualClock::starting_at(0);
        assert!(composer.post(&mut clock, &mut feed).is_none());
    }

    #[test]
    fn test_image_selection_replaces_previous() {
        let mut composer = PostComposer::new();
        let session = composer.open();

        composer.image_selected(session, Some(ImageRef::new("img://1")));
        composer.image_selected(session, Some(ImageRef::new("img://2")));
        assert_eq!(composer.image(), Some(&ImageRef::new("img://2")));

        assert!(!composer.image_selected(session, None));
        assert_eq!(composer.image(), Some(&ImageRef::new("img://2")));
    }

    #[test]
    fn test_late_image_after_discard_is_ignored() {
        let mut composer = PostComposer::new();
        let stale = composer.open();
        composer.discard();

        assert!(!composer.image_selected(stale, Some(ImageRef::new("img://late"))));

        composer.open();
        assert!(!composer.image_selected(stale, Some(ImageRef::new("img://late"))));
        assert!(composer.image().is_none());
    }

    #[test]
    fn test_description_kept_verbatim_while_editing() {
        let mut composer = PostComposer::new();
        composer.open();
        composer.description_edit("  spaced  ");
        assert_eq!(composer.description(), "  spaced  ");
    }
}
