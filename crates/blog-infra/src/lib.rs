//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! This crate hosts the in-process actor runtime: one tokio task per post
//! id, a registry that activates actors on first touch, and the
//! coordinator that allocates ids and serves listings.

pub mod actor;
pub mod clock;
pub mod coordinator;

pub use actor::{ActorRegistry, PostActorHandle, PostActorState, RuntimeConfig};
pub use clock::{StepClock, SystemClock};
pub use coordinator::PostCoordinator;
