//! Karma ledger
//!
//! The ledger is the source of truth for reputation: an append-only record
//! of signed karma deltas. Entries are never mutated or deleted after
//! creation. Reversals (unlikes) append a new entry with the opposite sign
//! instead of touching the original, so the full history stays auditable
//! and every karma value is exactly reconstructible by summing.

use crate::like::LikeId;
use agora_core::ActorId;
use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;
use uuid::Uuid;

/// Identifier for a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(pub Uuid);

impl EntryId {
    /// Create a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why karma moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KarmaReason {
    /// A like (or unlike) on a post
    PostLike,
    /// A like (or unlike) on a comment
    CommentLike,
}

/// Link from a ledger entry back to the like event that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerRef {
    /// Entry appended when this like was created
    Liked(LikeId),
    /// Entry appended when this like was removed
    Unliked(LikeId),
}

/// One immutable karma delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Unique identifier for this entry
    pub id: EntryId,
    /// Actor receiving the delta (the liked target's author)
    pub recipient: ActorId,
    /// Signed karma amount: positive on like, negative on unlike
    pub amount: i64,
    /// Reason code for the delta
    pub reason: KarmaReason,
    /// The like event this entry accounts for
    pub reference: LedgerRef,
    /// When the entry was appended
    pub created_at: OffsetDateTime,
}

impl LedgerEntry {
    /// Create a new entry with a fresh identifier.
    pub fn new(
        recipient: ActorId,
        amount: i64,
        reason: KarmaReason,
        reference: LedgerRef,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            id: EntryId::new(),
            recipient,
            amount,
            reason,
            reference,
            created_at,
        }
    }
}
