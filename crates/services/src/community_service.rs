use mindcare_core::model::{Post, PostId};
use mindcare_core::{Catalog, Clock};

use crate::error::FeedError;

/// In-memory community feed. Nothing here survives a restart.
#[derive(Debug, Clone)]
pub struct CommunityFeed {
    clock: Clock,
    posts: Vec<Post>,
}

impl CommunityFeed {
    /// Seed the feed from the catalog posts.
    #[must_use]
    pub fn new(catalog: &Catalog, clock: Clock) -> Self {
        Self::with_posts(catalog.posts().to_vec(), clock)
    }

    #[must_use]
    pub fn with_posts(posts: Vec<Post>, clock: Clock) -> Self {
        Self { clock, posts }
    }

    /// Posts newest first.
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// # Errors
    ///
    /// Returns `FeedError::PostNotFound` for an unknown id.
    pub fn toggle_like(&mut self, id: PostId) -> Result<&Post, FeedError> {
        let post = self.find_mut(id)?;
        post.toggle_like();
        Ok(post)
    }

    /// # Errors
    ///
    /// Returns `FeedError::PostNotFound` for an unknown id.
    pub fn toggle_comments(&mut self, id: PostId) -> Result<&Post, FeedError> {
        let post = self.find_mut(id)?;
        post.toggle_comments();
        Ok(post)
    }

    /// Prepends a post authored on this device.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::Post` if the message is blank.
    pub fn create_post(&mut self, message: &str) -> Result<&Post, FeedError> {
        let id = self
            .posts
            .iter()
            .map(Post::id)
            .max()
            .map_or(PostId::new(1), |max| max.next());
        let post = Post::compose(id, message, self.clock.now())?;
        tracing::debug!(post = %id, "post created");
        self.posts.insert(0, post);
        Ok(&self.posts[0])
    }

    fn find_mut(&mut self, id: PostId) -> Result<&mut Post, FeedError> {
        self.posts
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(FeedError::PostNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindcare_core::model::{OWN_USERNAME, PostError};
    use mindcare_core::time::{fixed_clock, fixed_now};

    fn feed() -> CommunityFeed {
        CommunityFeed::new(&Catalog::builtin().unwrap(), fixed_clock())
    }

    #[test]
    fn seeded_posts_start_unliked_and_collapsed() {
        let feed = feed();
        assert!(!feed.posts().is_empty());
        assert!(feed.posts().iter().all(|p| !p.liked() && !p.comments_visible()));
    }

    #[test]
    fn like_toggle_moves_counter_both_ways() {
        let mut feed = feed();
        let id = feed.posts()[0].id();
        let before = feed.posts()[0].likes();

        let post = feed.toggle_like(id).unwrap();
        assert!(post.liked());
        assert_eq!(post.likes(), before + 1);

        let post = feed.toggle_like(id).unwrap();
        assert!(!post.liked());
        assert_eq!(post.likes(), before);
    }

    #[test]
    fn comments_toggle_only_affects_target() {
        let mut feed = feed();
        let id = feed.posts()[1].id();
        feed.toggle_comments(id).unwrap();
        assert!(feed.posts()[1].comments_visible());
        assert!(!feed.posts()[0].comments_visible());
    }

    #[test]
    fn new_post_is_prepended_with_next_id() {
        let mut feed = feed();
        let max = feed.posts().iter().map(Post::id).max().unwrap();

        let post = feed.create_post("  feeling better today  ").unwrap();
        assert_eq!(post.id(), max.next());
        assert_eq!(post.message(), "feeling better today");
        assert_eq!(post.username(), OWN_USERNAME);
        assert_eq!(post.likes(), 0);
        assert!(post.comments().is_empty());
        assert_eq!(post.posted_at(), fixed_now());
        assert_eq!(feed.posts()[0].id(), max.next());
    }

    #[test]
    fn first_post_in_empty_feed_gets_id_one() {
        let mut feed = CommunityFeed::with_posts(Vec::new(), fixed_clock());
        assert_eq!(feed.create_post("hi").unwrap().id(), PostId::new(1));
    }

    #[test]
    fn blank_post_is_rejected() {
        let mut feed = feed();
        let count = feed.posts().len();
        assert_eq!(
            feed.create_post("   ").unwrap_err(),
            FeedError::Post(PostError::EmptyMessage)
        );
        assert_eq!(feed.posts().len(), count);
    }

    #[test]
    fn unknown_post_is_not_found() {
        let mut feed = feed();
        assert_eq!(
            feed.toggle_like(PostId::new(999)).unwrap_err(),
            FeedError::PostNotFound(PostId::new(999))
        );
    }
}
