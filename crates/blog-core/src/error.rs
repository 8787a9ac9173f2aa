//! Domain-level error types.

use thiserror::Error;

use crate::domain::PostId;

/// Errors raised by post actors and propagated verbatim by the coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostError {
    #[error("Post already exists: {0}")]
    AlreadyExists(PostId),

    #[error("Post not found: {0}")]
    NotFound(PostId),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The actor behind `id` no longer accepts messages (runtime shut down).
    #[error("Post actor {id} unavailable: {reason}")]
    Unavailable { id: PostId, reason: String },
}

impl PostError {
    /// True for errors that follow from the post's state rather than from
    /// the runtime. These are never worth retrying.
    pub fn is_state_error(&self) -> bool {
        matches!(self, PostError::AlreadyExists(_) | PostError::NotFound(_))
    }
}
