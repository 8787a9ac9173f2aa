use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier under which a post actor is addressed. `0` is never allocated.
pub type PostId = u64;

/// Post entity - the shape handed to and returned from the coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
    pub updated: Option<DateTime<Utc>>,
    pub author_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Post {
    /// Create an unsaved post. Id and timestamps are assigned by the actor.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            content: content.into(),
            created: DateTime::<Utc>::UNIX_EPOCH,
            updated: None,
            author_id: author_id.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_id(mut self, id: PostId) -> Self {
        self.id = id;
        self
    }
}

/// Caller-supplied post content without any server-assigned fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<Post> for PostDraft {
    fn from(post: Post) -> Self {
        Self {
            title: post.title,
            content: post.content,
            author_id: post.author_id,
            tags: post.tags,
        }
    }
}

impl From<&Post> for PostDraft {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            author_id: post.author_id.clone(),
            tags: post.tags.clone(),
        }
    }
}

/// The record a post actor keeps in memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
    pub updated: Option<DateTime<Utc>>,
    pub author_id: String,
    pub tags: Vec<String>,
}

impl PostRecord {
    /// Build the record for a freshly created post.
    pub fn from_draft(id: PostId, draft: PostDraft, created: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            created,
            updated: None,
            author_id: draft.author_id,
            tags: draft.tags,
        }
    }

    /// Overwrite the editable fields. `id` and `created` are left untouched.
    pub fn revise(&mut self, draft: PostDraft, updated: DateTime<Utc>) {
        self.title = draft.title;
        self.content = draft.content;
        self.author_id = draft.author_id;
        self.tags = draft.tags;
        self.updated = Some(updated);
    }

    pub fn exists(&self) -> bool {
        self.id > 0
    }
}

impl From<PostRecord> for Post {
    fn from(record: PostRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            content: record.content,
            created: record.created,
            updated: record.updated,
            author_id: record.author_id,
            tags: record.tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_new_post_is_unsaved() {
        let post = Post::new("Title", "Body", "user123").with_tags(["rust", "actors"]);
        assert_eq!(post.id, 0);
        assert_eq!(post.created, DateTime::<Utc>::UNIX_EPOCH);
        assert!(post.updated.is_none());
        assert_eq!(post.tags, vec!["rust".to_string(), "actors".to_string()]);
    }

    #[test]
    fn test_draft_drops_server_fields() {
        let post = Post::new("Title", "Body", "user123").with_id(42);
        let draft = PostDraft::from(&post);
        assert_eq!(draft.title, "Title");
        assert_eq!(draft.content, "Body");
        assert_eq!(draft.author_id, "user123");
    }

    #[test]
    fn test_revise_keeps_identity() {
        let draft = PostDraft {
            title: "First".into(),
            ..Default::default()
        };
        let mut record = PostRecord::from_draft(9, draft, at(0));
        record.revise(
            PostDraft {
                title: "Second".into(),
                tags: vec!["edited".into()],
                ..Default::default()
            },
            at(0) + Duration::seconds(5),
        );

        assert_eq!(record.id, 9);
        assert_eq!(record.created, at(0));
        assert_eq!(record.updated, Some(at(5)));
        assert_eq!(record.title, "Second");
        assert_eq!(record.tags, vec!["edited".to_string()]);
    }

    #[test]
    fn test_zero_id_record_does_not_exist() {
        let record = PostRecord::from_draft(0, PostDraft::default(), at(0));
        assert!(!record.exists());
    }

    #[test]
    fn test_post_uses_camel_case_fields() {
        let post: Post = PostRecord::from_draft(
            3,
            PostDraft {
                title: "Hello".into(),
                author_id: "user1".into(),
                ..Default::default()
            },
            at(0),
        )
        .into();

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["authorId"], "user1");
        assert_eq!(json["id"], 3);
        assert!(json["updated"].is_null());
    }
}
