use mindcare_core::Clock;
use mindcare_core::model::{Comment, Post, PostId};

use crate::vm::time_fmt::plural;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostVm {
    pub id: PostId,
    pub username: String,
    pub avatar: String,
    pub message: String,
    pub likes_label: String,
    pub posted_label: String,
    pub comments_label: String,
    pub liked: bool,
    pub comments_visible: bool,
    pub comments: Vec<Comment>,
}

impl PostVm {
    #[must_use]
    pub fn from_post(post: &Post, clock: &Clock) -> Self {
        Self {
            id: post.id(),
            username: post.username().to_string(),
            avatar: post.avatar().to_string(),
            message: post.message().to_string(),
            likes_label: post.likes().to_string(),
            posted_label: clock.since_label(post.posted_at()),
            comments_label: plural(post.comments().len(), "comment"),
            liked: post.liked(),
            comments_visible: post.comments_visible(),
            comments: post.comments().to_vec(),
        }
    }
}

#[must_use]
pub fn map_posts(posts: &[Post], clock: &Clock) -> Vec<PostVm> {
    posts.iter().map(|post| PostVm::from_post(post, clock)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindcare_core::time::fixed_clock;
    use services::AppServices;

    #[test]
    fn seeded_post_shows_relative_time() {
        let services = AppServices::in_memory(fixed_clock()).unwrap();
        let feed = services.community_feed();
        let vms = map_posts(feed.posts(), &feed.clock());

        let first = &vms[0];
        assert_eq!(first.username, "Hopeful_Journey");
        assert_eq!(first.posted_label, "2 hours ago");
        assert_eq!(first.comments_label, "2 comments");
        assert!(!first.liked);
    }

    #[test]
    fn own_post_is_just_now() {
        let services = AppServices::in_memory(fixed_clock()).unwrap();
        let mut feed = services.community_feed();
        feed.create_post("one step at a time").unwrap();

        let vm = PostVm::from_post(&feed.posts()[0], &feed.clock());
        assert_eq!(vm.username, "You");
        assert_eq!(vm.posted_label, "Just now");
        assert_eq!(vm.likes_label, "0");
        assert_eq!(vm.comments_label, "0 comments");
    }
}
