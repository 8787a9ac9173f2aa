//! Mailbox-driven post actor: a tokio task plus a cloneable handle.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use blog_core::ports::{Clock, PostActor};
use blog_core::{PostDraft, PostError, PostId, PostRecord};

use super::state::PostActorState;

enum ActorMessage {
    Get {
        reply: oneshot::Sender<Option<PostRecord>>,
    },
    Create {
        draft: PostDraft,
        reply: oneshot::Sender<Result<(), PostError>>,
    },
    Update {
        draft: PostDraft,
        reply: oneshot::Sender<Result<(), PostError>>,
    },
}

/// Handle to a running post actor.
///
/// Clones share the same mailbox. The actor task exits once every handle
/// has been dropped and the mailbox is drained.
#[derive(Clone)]
pub struct PostActorHandle {
    id: PostId,
    sender: mpsc::Sender<ActorMessage>,
}

impl PostActorHandle {
    /// Spawn the actor task for `id`. Must be called inside a tokio runtime.
    pub fn spawn(id: PostId, clock: Arc<dyn Clock>, mailbox_capacity: usize) -> Self {
        let (sender, receiver) = mpsc::channel(mailbox_capacity.max(1));
        tokio::spawn(run(PostActorState::new(id), clock, receiver));
        Self { id, sender }
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    async fn request<T>(
        &self,
        message: impl FnOnce(oneshot::Sender<T>) -> ActorMessage,
    ) -> Result<T, PostError> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(message(reply))
            .await
            .map_err(|_| self.unavailable("mailbox closed"))?;
        response
            .await
            .map_err(|_| self.unavailable("actor dropped the request"))
    }

    fn unavailable(&self, reason: &str) -> PostError {
        PostError::Unavailable {
            id: self.id,
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
impl PostActor for PostActorHandle {
    fn id(&self) -> PostId {
        self.id
    }

    async fn get(&self) -> Result<Option<PostRecord>, PostError> {
        self.request(|reply| ActorMessage::Get { reply }).await
    }

    async fn create(&self, draft: PostDraft) -> Result<(), PostError> {
        self.request(|reply| ActorMessage::Create { draft, reply }).await?
    }

    async fn update(&self, draft: PostDraft) -> Result<(), PostError> {
        self.request(|reply| ActorMessage::Update { draft, reply }).await?
    }
}

async fn run(
    mut state: PostActorState,
    clock: Arc<dyn Clock>,
    mut receiver: mpsc::Receiver<ActorMessage>,
) {
    let post_id = state.id();
    tracing::debug!(post_id, "Post actor started");

    while let Some(message) = receiver.recv().await {
        match message {
            ActorMessage::Get { reply } => {
                // Caller may have given up waiting
                let _ = reply.send(state.get());
            }
            ActorMessage::Create { draft, reply } => {
                let result = state.create(draft, clock.now());
                match &result {
                    Ok(()) => tracing::info!(post_id, "Post created"),
                    Err(e) => tracing::warn!(post_id, error = %e, "Post create rejected"),
                }
                let _ = reply.send(result);
            }
            ActorMessage::Update { draft, reply } => {
                let result = state.update(draft, clock.now());
                match &result {
                    Ok(()) => tracing::info!(post_id, "Post updated"),
                    Err(e) => tracing::warn!(post_id, error = %e, "Post update rejected"),
                }
                let _ = reply.send(result);
            }
        }
    }

    tracing::debug!(post_id, "Post actor stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;

    fn draft(title: &str) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            content: "Content".to_string(),
            author_id: "user123".to_string(),
            tags: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_handle_round_trips_through_mailbox() {
        let actor = PostActorHandle::spawn(7, Arc::new(SystemClock), 8);
        assert!(actor.get().await.unwrap().is_none());

        actor.create(draft("Hello")).await.unwrap();
        let post = actor.get().await.unwrap().unwrap();
        assert_eq!(post.id, 7);
        assert_eq!(post.title, "Hello");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_racing_creates_admit_exactly_one() {
        let actor = PostActorHandle::spawn(11, Arc::new(SystemClock), 4);

        let tasks: Vec<_> = (0..16)
            .map(|i| {
                let actor = actor.clone();
                tokio::spawn(async move { actor.create(draft(&format!("Post {i}"))).await })
            })
            .collect();

        let mut created = 0;
        let mut rejected = 0;
        for task in tasks {
            match task.await.unwrap() {
                Ok(()) => created += 1,
                Err(PostError::AlreadyExists(11)) => rejected += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }

        assert_eq!(created, 1);
        assert_eq!(rejected, 15);
    }
}
