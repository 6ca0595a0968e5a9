//! Like toggle service
//!
//! The concurrency core of the engagement subsystem. A toggle flips the
//! like state for an (actor, target) pair. It is not an idempotent
//! set-like operation: calling it twice in succession goes like, unlike.
//!
//! Each call runs under the composed lock pair: the in-process coordinator
//! key, then a storage transaction whose target fetch takes the row-level
//! write-intent lock. Exactly one like-row mutation and one ledger append
//! happen per successful call; everything rolls back together on failure.

use crate::config::ToggleConfig;
use crate::error::EngagementError;
use crate::karma::KarmaAggregator;
use crate::ledger::{LedgerEntry, LedgerRef};
use crate::like::Like;
use crate::lock::{LockCoordinator, ToggleKey};
use crate::store::EngagementStore;
use crate::target::TargetRef;
use agora_core::ActorId;
use std::sync::Arc;
use time::OffsetDateTime;
use tracing::debug;

/// What a completed toggle reports back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ToggleOutcome {
    /// Whether the actor likes the target after this call
    pub liked: bool,
    /// Live like-row count for the target
    pub likes_count: u64,
    /// Live ledger sum for the target's author
    pub author_karma: i64,
}

/// Service that toggles likes and maintains the karma ledger.
pub struct LikeToggleService<S> {
    store: Arc<S>,
    locks: LockCoordinator,
    config: ToggleConfig,
}

impl<S: EngagementStore> LikeToggleService<S> {
    /// Create a service with the default reward policy.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, ToggleConfig::default())
    }

    /// Create a service with an explicit policy.
    pub fn with_config(store: Arc<S>, config: ToggleConfig) -> Self {
        Self {
            store,
            locks: LockCoordinator::new(),
            config,
        }
    }

    /// The policy this service applies.
    pub fn config(&self) -> &ToggleConfig {
        &self.config
    }

    /// Flip the like state for (actor, target).
    ///
    /// On toggle-to-liked, inserts a like row and appends a positive
    /// ledger entry to the target's author; on toggle-to-unliked, deletes
    /// the like row and appends the negating entry. The returned counts
    /// are recomputed live inside the same transaction.
    pub async fn toggle(
        &self,
        actor: ActorId,
        target: TargetRef,
    ) -> Result<ToggleOutcome, EngagementError> {
        let _guard = self.locks.acquire(ToggleKey::new(actor, target)).await;
        debug!(%actor, %target, "toggle entered critical section");

        // Dropping `txn` on any early return below discards its writes.
        let mut txn = self.store.begin().await?;
        let resolved = txn.fetch_target_for_update(target).await?;
        let now = OffsetDateTime::now_utc();
        let reward = self.config.reward(target.kind());

        let liked = match txn.find_like(actor, target).await? {
            Some(existing) => {
                txn.delete_like(existing.id).await?;
                txn.insert_ledger_entry(LedgerEntry::new(
                    resolved.author,
                    -reward,
                    target.kind().reason(),
                    LedgerRef::Unliked(existing.id),
                    now,
                ))
                .await?;
                false
            }
            None => {
                let like = Like::new(actor, target, now);
                let like_id = like.id;
                txn.insert_like(like).await?;
                txn.insert_ledger_entry(LedgerEntry::new(
                    resolved.author,
                    reward,
                    target.kind().reason(),
                    LedgerRef::Liked(like_id),
                    now,
                ))
                .await?;
                true
            }
        };

        let likes_count = txn.count_likes(target).await?;
        let entries = txn.ledger_entries_for(resolved.author).await?;
        let author_karma = KarmaAggregator::total_karma(&entries, resolved.author);
        txn.commit().await?;

        debug!(%actor, %target, liked, likes_count, author_karma, "toggle committed");
        Ok(ToggleOutcome {
            liked,
            likes_count,
            author_karma,
        })
    }
}
