//! Storage collaborator boundary
//!
//! The engagement core does not implement durable storage. It drives a
//! collaborator through these traits: a store that can open transactions,
//! and a transaction that supports write-intent reads and the handful of
//! row operations the toggle path needs.
//!
//! # Transaction contract
//!
//! - `fetch_target_for_update` must lock the target row against concurrent
//!   writers for the remainder of the transaction (the `SELECT ... FOR
//!   UPDATE` shape). This is the cross-process correctness guarantee the
//!   in-process `LockCoordinator` composes with.
//! - Writes buffered in a transaction become visible to that transaction's
//!   own reads (`count_likes`, `ledger_entries_for`) before commit.
//! - `commit` consumes the transaction. Dropping an uncommitted
//!   transaction discards every buffered write; there is no partial state
//!   on any failure or cancellation path.

use crate::error::EngagementError;
use crate::ledger::LedgerEntry;
use crate::like::{Like, LikeId};
use crate::target::{EngagementTarget, TargetRef};
use agora_core::{ActorId, Comment, PostId};
use async_trait::async_trait;

/// Entry point to the persistence collaborator.
#[async_trait]
pub trait EngagementStore: Send + Sync {
    /// Open a transaction for one toggle operation.
    async fn begin(&self) -> Result<Box<dyn EngagementTxn>, EngagementError>;

    /// Fetch all comments for a post, ordered by creation time ascending.
    ///
    /// The ordering is the tree builder's input contract: parents are
    /// created before their children, so an ascending result set lets the
    /// builder run in a single forward pass.
    async fn fetch_comments_for_post(
        &self,
        post: PostId,
    ) -> Result<Vec<Comment>, EngagementError>;
}

/// One transactional unit of work against the store.
#[async_trait]
pub trait EngagementTxn: Send {
    /// Load a target with a write-intent lock, or `TargetNotFound`.
    async fn fetch_target_for_update(
        &mut self,
        target: TargetRef,
    ) -> Result<EngagementTarget, EngagementError>;

    /// Look up the existing like for (actor, target), if any.
    async fn find_like(
        &mut self,
        actor: ActorId,
        target: TargetRef,
    ) -> Result<Option<Like>, EngagementError>;

    /// Insert a like row. Fails with `DuplicateLike` if the (actor,
    /// target) uniqueness constraint is violated.
    async fn insert_like(&mut self, like: Like) -> Result<(), EngagementError>;

    /// Delete a like row by id.
    async fn delete_like(&mut self, like: LikeId) -> Result<(), EngagementError>;

    /// Append one entry to the karma ledger.
    async fn insert_ledger_entry(&mut self, entry: LedgerEntry) -> Result<(), EngagementError>;

    /// Live count of like rows for a target.
    async fn count_likes(&mut self, target: TargetRef) -> Result<u64, EngagementError>;

    /// All ledger entries credited to a recipient.
    async fn ledger_entries_for(
        &mut self,
        recipient: ActorId,
    ) -> Result<Vec<LedgerEntry>, EngagementError>;

    /// Commit every buffered write atomically.
    async fn commit(self: Box<Self>) -> Result<(), EngagementError>;
}
