//! Ports - trait definitions for the runtime the core is hosted in.
//! These are the "interfaces" that infrastructure must implement.

mod actor;
mod clock;
mod post_service;

pub use actor::{ActorResolver, PostActor};
pub use clock::Clock;
pub use post_service::{DEFAULT_RECENT_POSTS, PostService};
