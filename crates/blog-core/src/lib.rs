//! # Blog Core
//!
//! The domain layer of the actor-backed blog.
//! This crate holds the post entity, the per-post actor record, the error
//! taxonomy and the ports the runtime has to implement. It has no runtime
//! dependencies of its own.

pub mod domain;
pub mod error;
pub mod ports;

pub use domain::{Post, PostDraft, PostId, PostRecord};
pub use error::PostError;
