//! The create/update state machine of a single post.

use chrono::{DateTime, Duration, Utc};

use blog_core::{PostDraft, PostError, PostId, PostRecord};

/// State owned by one post actor: `Empty` until the first successful
/// create, `Created` forever after.
#[derive(Debug)]
pub struct PostActorState {
    id: PostId,
    post: Option<PostRecord>,
}

impl PostActorState {
    pub fn new(id: PostId) -> Self {
        Self { id, post: None }
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn is_created(&self) -> bool {
        self.post.as_ref().is_some_and(PostRecord::exists)
    }

    pub fn get(&self) -> Option<PostRecord> {
        self.post.clone()
    }

    pub fn create(&mut self, draft: PostDraft, now: DateTime<Utc>) -> Result<(), PostError> {
        if self.id == 0 {
            return Err(PostError::InvalidArgument(
                "post id 0 is reserved".to_string(),
            ));
        }
        if self.is_created() {
            return Err(PostError::AlreadyExists(self.id));
        }

        self.post = Some(PostRecord::from_draft(self.id, draft, now));
        Ok(())
    }

    pub fn update(&mut self, draft: PostDraft, now: DateTime<Utc>) -> Result<(), PostError> {
        match self.post.as_mut() {
            Some(record) if record.exists() => {
                // `updated` stays after `created` and never moves backwards
                let floor = record
                    .updated
                    .unwrap_or(record.created)
                    .max(record.created + Duration::nanoseconds(1));
                record.revise(draft, now.max(floor));
                Ok(())
            }
            _ => Err(PostError::NotFound(self.id)),
        }
    }
}
