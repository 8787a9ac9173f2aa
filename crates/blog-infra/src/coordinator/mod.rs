//! Post coordinator - allocates ids, routes calls to post actors and
//! translates between the actor record and the caller-facing post.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use futures::future::join_all;
use tokio::sync::RwLock;

use blog_core::ports::{ActorResolver, DEFAULT_RECENT_POSTS, PostService};
use blog_core::{Post, PostDraft, PostError, PostId};


/// Routes post operations to the actor addressed by each id.
///
/// Holds no post content itself, only the id counter and the ids it has
/// handed out.
pub struct PostCoordinator {
    resolver: Arc<dyn ActorResolver>,
    last_id: AtomicU64,
    known_ids: RwLock<Vec<PostId>>,
}

impl PostCoordinator {
    pub fn new(resolver: Arc<dyn ActorResolver>) -> Self {
        Self {
            resolver,
            last_id: AtomicU64::new(0),
            known_ids: RwLock::new(Vec::new()),
        }
    }

    fn allocate_id(&self) -> PostId {
        self.last_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Snapshot of every id handed out by `create_post`, including ids whose
    /// create was rejected or is still in flight.
    pub async fn known_ids(&self) -> Vec<PostId> {
        self.known_ids.read().await.clone()
    }

    /// Number of ids handed out so far.
    pub async fn allocated_count(&self) -> usize {
        self.known_ids.read().await.len()
    }

    pub async fn get_recent_posts_default(&self) -> Result<Vec<Post>, PostError> {
        self.get_recent_posts(DEFAULT_RECENT_POSTS).await
    }

    /// The `count` highest allocated ids, highest first.
    async fn recent_ids(&self, count: usize) -> Vec<PostId> {
        let mut ids = self.known_ids.read().await.clone();
        ids.sort_unstable_by(|a, b| b.cmp(a));
        ids.truncate(count);
        ids
    }
}

#[async_trait]
impl PostService for PostCoordinator {
    async fn get_post(&self, id: PostId) -> Result<Option<Post>, PostError> {
        let actor = self.resolver.resolve(id).await?;
        let post = actor
            .get()
            .await?
            .filter(|record| record.exists())
            .map(Post::from);

        tracing::debug!(post_id = id, found = post.is_some(), "Post lookup");
        Ok(post)
    }

    async fn create_post(&self, post: Post) -> Result<PostId, PostError> {
        let id = self.allocate_id();
        tracing::debug!(post_id = id, "Allocated post id");

        // Record before routing: a caller dropped mid-create must not leave an
        // unlisted post. Ids whose create fails resolve to nothing when listed.
        self.known_ids.write().await.push(id);

        let actor = self.resolver.resolve(id).await?;
        actor.create(PostDraft::from(post)).await?;

        tracing::info!(post_id = id, "Post registered");
        Ok(id)
    }

    async fn update_post(&self, post: Post) -> Result<(), PostError> {
        let id = post.id;
        let actor = self.resolver.resolve(id).await?;
        actor.update(PostDraft::from(post)).await
    }

    async fn get_recent_posts(&self, count: usize) -> Result<Vec<Post>, PostError> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let ids = self.recent_ids(count).await;
        let lookups = join_all(ids.iter().map(|&id| self.get_post(id))).await;

        let mut posts = Vec::with_capacity(lookups.len());
        for lookup in lookups {
            // Ids whose create has not landed yet resolve to nothing
            if let Some(post) = lookup? {
                posts.push(post);
            }
        }

        posts.sort_by(|a, b| b.created.cmp(&a.created).then(b.id.cmp(&a.id)));
        tracing::debug!(requested = count, returned = posts.len(), "Recent posts");
        Ok(posts)
    }
}
