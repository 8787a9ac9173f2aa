//! Domain entities - the post as callers see it and as actors store it.

mod post;

pub use post::{Post, PostDraft, PostId, PostRecord};
