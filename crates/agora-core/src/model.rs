//! Feed entities
//!
//! Plain data for actors, posts, and comments. Like counts and karma never
//! appear here: both are derived quantities owned by `agora-engagement`,
//! recomputed from like rows and ledger entries.

use crate::identifiers::{ActorId, CommentId, PostId};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// An identity that posts, comments, likes, and accrues karma.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Unique identifier for this actor
    pub id: ActorId,
    /// Display handle shown in feeds and leaderboards
    pub handle: String,
    /// Optional avatar image URL
    pub avatar_url: Option<String>,
    /// When the actor was created
    pub created_at: OffsetDateTime,
}

impl Actor {
    /// Create a new actor with a fresh identifier.
    pub fn new(handle: impl Into<String>, created_at: OffsetDateTime) -> Self {
        Self {
            id: ActorId::new(),
            handle: handle.into(),
            avatar_url: None,
            created_at,
        }
    }
}

/// A feed post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier for this post
    pub id: PostId,
    /// Actor that authored the post
    pub author: ActorId,
    /// Post body
    pub content: String,
    /// When the post was created
    pub created_at: OffsetDateTime,
}

impl Post {
    /// Create a new post with a fresh identifier.
    pub fn new(author: ActorId, content: impl Into<String>, created_at: OffsetDateTime) -> Self {
        Self {
            id: PostId::new(),
            author,
            content: content.into(),
            created_at,
        }
    }
}

/// A threaded comment with a self-referential parent.
///
/// `depth` is fixed at construction from the parent chain (`parent.depth + 1`,
/// 0 for roots). The parent reference is immutable after creation, so the
/// stored depth stays consistent with the chain for the comment's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique identifier for this comment
    pub id: CommentId,
    /// Post this comment belongs to
    pub post: PostId,
    /// Actor that authored the comment
    pub author: ActorId,
    /// Parent comment when this is a reply, `None` for top-level comments
    pub parent: Option<CommentId>,
    /// Comment body
    pub content: String,
    /// Nesting depth: 0 for roots, parent depth + 1 for replies
    pub depth: u32,
    /// When the comment was created
    pub created_at: OffsetDateTime,
}

impl Comment {
    /// Create a top-level comment on a post.
    pub fn root(
        post: PostId,
        author: ActorId,
        content: impl Into<String>,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            id: CommentId::new(),
            post,
            author,
            parent: None,
            content: content.into(),
            depth: 0,
            created_at,
        }
    }

    /// Create a reply to an existing comment.
    ///
    /// The reply inherits the parent's post and sits one level deeper.
    pub fn reply(
        parent: &Comment,
        author: ActorId,
        content: impl Into<String>,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            id: CommentId::new(),
            post: parent.post,
            author,
            parent: Some(parent.id),
            content: content.into(),
            depth: parent.depth + 1,
            created_at,
        }
    }

    /// Whether this is a top-level comment.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
