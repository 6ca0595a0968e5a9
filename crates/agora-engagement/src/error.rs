//! Engagement error types
//!
//! Errors specific to like toggling and its storage collaborator.

use crate::target::TargetRef;
use agora_core::ActorId;
use thiserror::Error;

/// Errors from engagement operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngagementError {
    /// The toggle target does not exist (client-visible 404-equivalent).
    #[error("{target} not found")]
    TargetNotFound {
        /// The target that was requested
        target: TargetRef,
    },

    /// The target kind string is not `post` or `comment` (400-equivalent).
    #[error("invalid target kind {kind:?} (expected \"post\" or \"comment\")")]
    InvalidTargetKind {
        /// The rejected kind string
        kind: String,
    },

    /// A duplicate like survived the locking layers (409-equivalent).
    ///
    /// Surfaced from the storage uniqueness constraint; never retried
    /// automatically; whether to retry is the caller's choice.
    #[error("actor {actor} already likes {target}")]
    DuplicateLike {
        /// Actor whose like already exists
        actor: ActorId,
        /// Target of the duplicate like
        target: TargetRef,
    },

    /// The storage collaborator failed; the transaction was rolled back.
    #[error("storage failure: {reason}")]
    Storage {
        /// Description of the underlying failure
        reason: String,
    },
}

impl EngagementError {
    /// Create a target not found error.
    pub fn not_found(target: TargetRef) -> Self {
        Self::TargetNotFound { target }
    }

    /// Create an invalid target kind error.
    pub fn invalid_kind(kind: impl Into<String>) -> Self {
        Self::InvalidTargetKind { kind: kind.into() }
    }

    /// Create a duplicate like error.
    pub fn duplicate_like(actor: ActorId, target: TargetRef) -> Self {
        Self::DuplicateLike { actor, target }
    }

    /// Create a storage failure error.
    pub fn storage(reason: impl Into<String>) -> Self {
        Self::Storage {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_core::PostId;

    #[test]
    fn test_error_display() {
        let target = TargetRef::Post(PostId::from_u128(1));

        let err = EngagementError::not_found(target);
        assert!(err.to_string().contains("not found"));

        let err = EngagementError::invalid_kind("article");
        assert!(err.to_string().contains("article"));

        let err = EngagementError::duplicate_like(ActorId::from_u128(2), target);
        assert!(err.to_string().contains("already likes"));

        let err = EngagementError::storage("connection reset");
        assert!(err.to_string().contains("connection reset"));
    }
}
