//! Like rows
//!
//! A `Like` records that an actor currently likes a target. Rows are
//! created on toggle-to-liked and deleted on toggle-to-unliked, never
//! updated in place. Storage enforces at most one row per (actor, target)
//! pair, partitioned by target kind.

use crate::target::TargetRef;
use agora_core::ActorId;
use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;
use uuid::Uuid;

/// Identifier for a like row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LikeId(pub Uuid);

impl LikeId {
    /// Create a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Deterministic identifier from an integer seed (for tests).
    pub fn from_u128(seed: u128) -> Self {
        Self(Uuid::from_u128(seed))
    }
}

impl Default for LikeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LikeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// "Actor X currently likes target Y".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    /// Unique identifier for this like row
    pub id: LikeId,
    /// Actor who pressed like
    pub actor: ActorId,
    /// The liked post or comment
    pub target: TargetRef,
    /// When the like was created
    pub created_at: OffsetDateTime,
}

impl Like {
    /// Create a new like row with a fresh identifier.
    pub fn new(actor: ActorId, target: TargetRef, created_at: OffsetDateTime) -> Self {
        Self {
            id: LikeId::new(),
            actor,
            target,
            created_at,
        }
    }
}
