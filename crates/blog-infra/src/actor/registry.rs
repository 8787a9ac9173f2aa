//! Actor registry - activates one post actor per id on first touch.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::ports::{ActorResolver, Clock, PostActor};
use blog_core::{PostError, PostId};

use super::RuntimeConfig;
use super::mailbox::PostActorHandle;

/// In-memory actor directory.
///
/// Note: actors live for as long as the registry does. State is lost on
/// process restart.
pub struct ActorRegistry {
    actors: RwLock<HashMap<PostId, PostActorHandle>>,
    clock: Arc<dyn Clock>,
    config: RuntimeConfig,
    closed: AtomicBool,
}

impl ActorRegistry {
    pub fn new(clock: Arc<dyn Clock>, config: RuntimeConfig) -> Self {
        Self {
            actors: RwLock::new(HashMap::new()),
            clock,
            config,
            closed: AtomicBool::new(false),
        }
    }

    /// Number of activated actors.
    pub async fn len(&self) -> usize {
        self.actors.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.actors.read().await.is_empty()
    }

    pub async fn contains(&self, id: PostId) -> bool {
        self.actors.read().await.contains_key(&id)
    }

    /// Stop accepting new activations and release every actor.
    ///
    /// Each actor finishes the messages already in its mailbox, then exits.
    pub async fn shutdown(&self) {
        self.closed.store(true, Ordering::SeqCst);
        let mut actors = self.actors.write().await;
        let count = actors.len();
        actors.clear();
        tracing::info!(actors = count, "Actor registry shut down");
    }

    fn shut_down_error(id: PostId) -> PostError {
        PostError::Unavailable {
            id,
            reason: "actor runtime is shut down".to_string(),
        }
    }
}

#[async_trait]
impl ActorResolver for ActorRegistry {
    async fn resolve(&self, id: PostId) -> Result<Arc<dyn PostActor>, PostError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(Self::shut_down_error(id));
        }

        if let Some(handle) = self.actors.read().await.get(&id) {
            return Ok(Arc::new(handle.clone()));
        }

        // Re-check under the write lock so racing first touches share one actor
        let mut actors = self.actors.write().await;
        if self.closed.load(Ordering::SeqCst) {
            return Err(Self::shut_down_error(id));
        }
        let handle = actors
            .entry(id)
            .or_insert_with(|| {
                tracing::debug!(post_id = id, "Activating post actor");
                PostActorHandle::spawn(id, self.clock.clone(), self.config.mailbox_capacity)
            })
            .clone();

        Ok(Arc::new(handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;
    use blog_core::PostDraft;

    fn registry() -> Arc<ActorRegistry> {
        Arc::new(ActorRegistry::new(
            Arc::new(SystemClock),
            RuntimeConfig::default(),
        ))
    }

    fn draft(title: &str) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_unused_id_resolves_to_empty_actor() {
        let registry = registry();
        let actor = registry.resolve(1).await.unwrap();
        assert_eq!(actor.id(), 1);
        assert!(actor.get().await.unwrap().is_none());
        assert!(registry.contains(1).await);
    }

    #[tokio::test]
    async fn test_same_id_resolves_to_same_actor() {
        let registry = registry();
        registry
            .resolve(2)
            .await
            .unwrap()
            .create(draft("Stored"))
            .await
            .unwrap();

        let again = registry.resolve(2).await.unwrap();
        let post = again.get().await.unwrap().unwrap();
        assert_eq!(post.title, "Stored");
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn test_different_ids_are_independent() {
        let registry = registry();
        registry
            .resolve(3)
            .await
            .unwrap()
            .create(draft("Three"))
            .await
            .unwrap();

        let other = registry.resolve(4).await.unwrap();
        assert!(other.get().await.unwrap().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_racing_first_touch_activates_once() {
        let registry = registry();

        let tasks: Vec<_> = (0..32)
            .map(|_| {
                let registry = registry.clone();
                tokio::spawn(async move {
                    let actor = registry.resolve(5).await.unwrap();
                    actor.create(draft("Race")).await
                })
            })
            .collect();

        let mut created = 0;
        for task in tasks {
            if task.await.unwrap().is_ok() {
                created += 1;
            }
        }

        assert_eq!(created, 1);
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn test_shutdown_rejects_resolution() {
        let registry = registry();
        registry.resolve(6).await.unwrap();
        registry.shutdown().await;

        assert!(registry.is_empty().await);
        let err = registry.resolve(6).await.err().unwrap();
        assert!(matches!(err, PostError::Unavailable { id: 6, .. }));
    }

    #[tokio::test]
    async fn test_outstanding_handle_survives_shutdown() {
        let registry = registry();
        let handle = {
            registry.resolve(8).await.unwrap();
            registry.actors.read().await.get(&8).cloned().unwrap()
        };
        let probe = handle.clone();
        drop(handle);
        registry.shutdown().await;

        // The probe still holds a sender, so the actor keeps serving it.
        assert!(!probe.is_closed());
        assert!(probe.get().await.unwrap().is_none());
    }
}
