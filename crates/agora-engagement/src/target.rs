//! Engagement targets
//!
//! Posts and comments are unified as "likeable" targets. A `TargetRef`
//! carries exactly one kind by construction, so a like row can never
//! reference both a post and a comment.

use crate::error::EngagementError;
use crate::ledger::KarmaReason;
use agora_core::{ActorId, CommentId, PostId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The kind of entity a like points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// A feed post
    Post,
    /// A comment on a post
    Comment,
}

impl TargetKind {
    /// The ledger reason code for likes on this kind of target.
    pub fn reason(&self) -> KarmaReason {
        match self {
            Self::Post => KarmaReason::PostLike,
            Self::Comment => KarmaReason::CommentLike,
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Post => write!(f, "post"),
            Self::Comment => write!(f, "comment"),
        }
    }
}

impl FromStr for TargetKind {
    type Err = EngagementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "post" => Ok(Self::Post),
            "comment" => Ok(Self::Comment),
            other => Err(EngagementError::invalid_kind(other)),
        }
    }
}

/// Reference to a likeable target: a post or a comment, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetRef {
    /// Reference to a post
    Post(PostId),
    /// Reference to a comment
    Comment(CommentId),
}

impl TargetRef {
    /// Build a reference from a parsed kind and a raw id.
    ///
    /// This is the boundary constructor for callers that receive the kind
    /// as a string (e.g. a request handler).
    pub fn new(kind: TargetKind, id: Uuid) -> Self {
        match kind {
            TargetKind::Post => Self::Post(PostId::from_uuid(id)),
            TargetKind::Comment => Self::Comment(CommentId::from_uuid(id)),
        }
    }

    /// The kind of this reference.
    pub fn kind(&self) -> TargetKind {
        match self {
            Self::Post(_) => TargetKind::Post,
            Self::Comment(_) => TargetKind::Comment,
        }
    }

    /// The raw id of the referenced row.
    pub fn raw_id(&self) -> Uuid {
        match self {
            Self::Post(id) => id.uuid(),
            Self::Comment(id) => id.uuid(),
        }
    }
}

impl fmt::Display for TargetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.raw_id())
    }
}

/// A resolved target as returned by a write-intent fetch.
///
/// Carries what the toggle path needs: the reference back to the row and
/// the author who receives (or loses) karma. The like-count view is
/// derived separately from live like rows, never stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementTarget {
    /// Reference to the underlying row
    pub target: TargetRef,
    /// Actor that authored the target
    pub author: ActorId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_kind_parses_known_values() {
        assert_eq!("post".parse::<TargetKind>().unwrap(), TargetKind::Post);
        assert_eq!(
            "comment".parse::<TargetKind>().unwrap(),
            TargetKind::Comment
        );
    }

    #[test]
    fn test_kind_rejects_unknown_values() {
        let err = "article".parse::<TargetKind>().unwrap_err();
        assert_matches!(err, EngagementError::InvalidTargetKind { kind } if kind == "article");
    }

    #[test]
    fn test_ref_round_trips_kind_and_id() {
        let id = Uuid::from_u128(9);
        let target = TargetRef::new(TargetKind::Comment, id);
        assert_eq!(target.kind(), TargetKind::Comment);
        assert_eq!(target.raw_id(), id);
        assert_eq!(target, TargetRef::Comment(CommentId::from_u128(9)));
    }

    #[test]
    fn test_ref_display_names_the_kind() {
        let target = TargetRef::Post(PostId::from_u128(3));
        assert!(target.to_string().starts_with("post "));
    }
}
