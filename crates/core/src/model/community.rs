use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::ids::PostId;

/// Username shown on posts written from this device.
pub const OWN_USERNAME: &str = "You";
/// Avatar shown on posts written from this device.
pub const OWN_AVATAR: &str = "😊";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PostError {
    #[error("post message cannot be empty")]
    EmptyMessage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub username: String,
    pub message: String,
}

/// A community post plus the local like and comment-visibility state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    id: PostId,
    username: String,
    avatar: String,
    message: String,
    likes: u32,
    posted_at: DateTime<Utc>,
    comments: Vec<Comment>,
    liked: bool,
    comments_visible: bool,
}

impl Post {
    /// Rebuild a post from catalog data. Local state starts cleared.
    #[must_use]
    pub fn from_seed(
        id: PostId,
        username: impl Into<String>,
        avatar: impl Into<String>,
        message: impl Into<String>,
        likes: u32,
        posted_at: DateTime<Utc>,
        comments: Vec<Comment>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            avatar: avatar.into(),
            message: message.into(),
            likes,
            posted_at,
            comments,
            liked: false,
            comments_visible: false,
        }
    }

    /// A fresh post authored locally.
    ///
    /// # Errors
    ///
    /// Returns `PostError::EmptyMessage` if the message is blank.
    pub fn compose(
        id: PostId,
        message: &str,
        posted_at: DateTime<Utc>,
    ) -> Result<Self, PostError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(PostError::EmptyMessage);
        }
        Ok(Self::from_seed(
            id,
            OWN_USERNAME,
            OWN_AVATAR,
            message,
            0,
            posted_at,
            Vec::new(),
        ))
    }

    #[must_use]
    pub fn id(&self) -> PostId {
        self.id
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn likes(&self) -> u32 {
        self.likes
    }

    #[must_use]
    pub fn posted_at(&self) -> DateTime<Utc> {
        self.posted_at
    }

    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    #[must_use]
    pub fn liked(&self) -> bool {
        self.liked
    }

    #[must_use]
    pub fn comments_visible(&self) -> bool {
        self.comments_visible
    }

    /// Flips the like flag and moves the counter with it.
    pub fn toggle_like(&mut self) {
        if self.liked {
            self.likes = self.likes.saturating_sub(1);
        } else {
            self.likes = self.likes.saturating_add(1);
        }
        self.liked = !self.liked;
    }

    pub fn toggle_comments(&mut self) {
        self.comments_visible = !self.comments_visible;
    }
}
