//! Silo - the runtime wiring shared by the boot sequence.

use std::sync::Arc;

use blog_core::ports::{Clock, PostService};
use blog_core::{Post, PostError, PostId};
use blog_infra::{ActorRegistry, PostCoordinator, RuntimeConfig, SystemClock};

const DEMO_AUTHOR: &str = "silo-demo";

/// Actor registry plus the coordinator that fronts it.
pub struct Silo {
    pub registry: Arc<ActorRegistry>,
    pub coordinator: Arc<PostCoordinator>,
}

impl Silo {
    pub fn new(config: RuntimeConfig) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let registry = Arc::new(ActorRegistry::new(clock, config));
        let coordinator = Arc::new(PostCoordinator::new(registry.clone()));

        tracing::info!("Silo initialized");

        Self {
            registry,
            coordinator,
        }
    }

    /// Create `count` demo posts and return their ids in creation order.
    pub async fn seed_demo_posts(&self, count: usize) -> Result<Vec<PostId>, PostError> {
        let mut ids = Vec::new();
        for n in 1..=count {
            let post = Post::new(
                format!("Demo post {n}"),
                format!("Seeded at boot, number {n} of {count}."),
                DEMO_AUTHOR,
            )
            .with_tags(["demo"]);
            ids.push(self.coordinator.create_post(post).await?);
        }

        if count > 0 {
            tracing::info!(count, "Seeded demo posts");
        }
        Ok(ids)
    }

    pub async fn shutdown(&self) {
        let allocated = self.coordinator.allocated_count().await;
        self.registry.shutdown().await;
        tracing::info!(allocated, "Silo stopped");
    }
}
