//! In-process actor runtime.
//!
//! Every post id maps to one tokio task that owns the post's state and
//! drains a bounded mailbox one message at a time. Different ids never
//! share a lock, so they run fully in parallel.

mod mailbox;
mod registry;
mod state;

pub use mailbox::PostActorHandle;
pub use registry::ActorRegistry;
pub use state::PostActorState;

/// Actor runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Pending messages a single actor buffers before senders wait.
    pub mailbox_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 64,
        }
    }
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source. Missing, unparsable or zero values
    /// fall back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            mailbox_capacity: lookup("ACTOR_MAILBOX_CAPACITY")
                .and_then(|s| s.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(64),
        }
    }
}
