//! Actor ports - one addressable, single-writer state unit per post id.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{PostDraft, PostId, PostRecord};
use crate::error::PostError;

/// A reference to the actor that owns exactly one post.
///
/// Implementations must process calls one at a time per id; calls on
/// different ids are independent.
#[async_trait]
pub trait PostActor: Send + Sync {
    /// The id this actor is addressed under.
    fn id(&self) -> PostId;

    /// Current record, or `None` while nothing has been created.
    async fn get(&self) -> Result<Option<PostRecord>, PostError>;

    /// Create the post. Fails with `AlreadyExists` once a post is stored.
    async fn create(&self, draft: PostDraft) -> Result<(), PostError>;

    /// Replace the editable fields. Fails with `NotFound` before `create`.
    async fn update(&self, draft: PostDraft) -> Result<(), PostError>;
}

/// Addressing mechanism: maps an id to its single logical actor.
///
/// Resolving an id nobody has touched yields a fresh, empty actor.
/// Resolving the same id twice yields the same logical actor.
#[async_trait]
pub trait ActorResolver: Send + Sync {
    async fn resolve(&self, id: PostId) -> Result<Arc<dyn PostActor>, PostError>;
}
