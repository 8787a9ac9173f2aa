//! Post service port - the boundary the rest of the application talks to.

use async_trait::async_trait;

use crate::domain::{Post, PostId};
use crate::error::PostError;

/// Number of posts listed when the caller does not ask for a count.
pub const DEFAULT_RECENT_POSTS: usize = 10;

#[async_trait]
pub trait PostService: Send + Sync {
    /// Look up a post. `Ok(None)` when it was never created.
    async fn get_post(&self, id: PostId) -> Result<Option<Post>, PostError>;

    /// Store a new post under a freshly allocated id and return that id.
    /// Any id or timestamps on `post` are ignored.
    async fn create_post(&self, post: Post) -> Result<PostId, PostError>;

    /// Overwrite the editable fields of the post addressed by `post.id`.
    async fn update_post(&self, post: Post) -> Result<(), PostError>;

    /// Up to `count` of the most recently allocated posts, newest-created first.
    async fn get_recent_posts(&self, count: usize) -> Result<Vec<Post>, PostError>;
}
