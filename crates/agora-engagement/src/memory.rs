//! In-memory reference store
//!
//! A complete `EngagementStore` implementation backed by process memory,
//! used by the test suites and small embeddings. The whole state sits
//! behind a single async mutex that a transaction holds from `begin` to
//! `commit`, which serializes transactions wholesale: a coarse stand-in
//! for the row-level write-intent locks a durable backend would take, with
//! the same observable guarantees.
//!
//! Transactions work on a private copy of the state and write it back on
//! commit, so dropping an uncommitted transaction rolls back by doing
//! nothing.

use crate::error::EngagementError;
use crate::ledger::LedgerEntry;
use crate::like::{Like, LikeId};
use crate::store::{EngagementStore, EngagementTxn};
use crate::target::{EngagementTarget, TargetRef};
use agora_core::{Actor, ActorId, Comment, CommentId, Post, PostId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

#[derive(Debug, Clone, Default)]
struct StoreState {
    actors: HashMap<ActorId, Actor>,
    posts: HashMap<PostId, Post>,
    comments: HashMap<CommentId, Comment>,
    likes: HashMap<LikeId, Like>,
    ledger: Vec<LedgerEntry>,
}

/// In-memory engagement store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<AsyncMutex<StoreState>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an actor (CRUD glue outside the engagement core).
    pub async fn insert_actor(&self, actor: Actor) {
        self.state.lock().await.actors.insert(actor.id, actor);
    }

    /// Insert a post (CRUD glue outside the engagement core).
    pub async fn insert_post(&self, post: Post) {
        self.state.lock().await.posts.insert(post.id, post);
    }

    /// Insert a comment (CRUD glue outside the engagement core).
    pub async fn insert_comment(&self, comment: Comment) {
        self.state.lock().await.comments.insert(comment.id, comment);
    }

    /// Snapshot of all actors, for leaderboard annotation.
    pub async fn actors(&self) -> Vec<Actor> {
        self.state.lock().await.actors.values().cloned().collect()
    }

    /// Snapshot of the committed ledger.
    pub async fn ledger(&self) -> Vec<LedgerEntry> {
        self.state.lock().await.ledger.clone()
    }

    /// Snapshot of all committed like rows.
    pub async fn likes(&self) -> Vec<Like> {
        self.state.lock().await.likes.values().copied().collect()
    }
}

#[async_trait]
impl EngagementStore for MemoryStore {
    async fn begin(&self) -> Result<Box<dyn EngagementTxn>, EngagementError> {
        let guard = self.state.clone().lock_owned().await;
        let working = guard.clone();
        Ok(Box::new(MemoryTxn { guard, working }))
    }

    async fn fetch_comments_for_post(
        &self,
        post: PostId,
    ) -> Result<Vec<Comment>, EngagementError> {
        let state = self.state.lock().await;
        let mut comments: Vec<Comment> = state
            .comments
            .values()
            .filter(|c| c.post == post)
            .cloned()
            .collect();
        // Creation order, with the id as a deterministic tiebreak.
        comments.sort_by_key(|c| (c.created_at, c.id));
        Ok(comments)
    }
}

/// Transaction over the in-memory store.
///
/// Holds the store lock for its whole lifetime; `working` is the private
/// copy all reads and writes go through until commit writes it back.
struct MemoryTxn {
    guard: OwnedMutexGuard<StoreState>,
    working: StoreState,
}

#[async_trait]
impl EngagementTxn for MemoryTxn {
    async fn fetch_target_for_update(
        &mut self,
        target: TargetRef,
    ) -> Result<EngagementTarget, EngagementError> {
        let author = match target {
            TargetRef::Post(id) => self.working.posts.get(&id).map(|p| p.author),
            TargetRef::Comment(id) => self.working.comments.get(&id).map(|c| c.author),
        };
        author
            .map(|author| EngagementTarget { target, author })
            .ok_or_else(|| EngagementError::not_found(target))
    }

    async fn find_like(
        &mut self,
        actor: ActorId,
        target: TargetRef,
    ) -> Result<Option<Like>, EngagementError> {
        Ok(self
            .working
            .likes
            .values()
            .find(|l| l.actor == actor && l.target == target)
            .copied())
    }

    async fn insert_like(&mut self, like: Like) -> Result<(), EngagementError> {
        let duplicate = self
            .working
            .likes
            .values()
            .any(|l| l.actor == like.actor && l.target == like.target);
        if duplicate {
            return Err(EngagementError::duplicate_like(like.actor, like.target));
        }
        self.working.likes.insert(like.id, like);
        Ok(())
    }

    async fn delete_like(&mut self, like: LikeId) -> Result<(), EngagementError> {
        match self.working.likes.remove(&like) {
            Some(_) => Ok(()),
            None => Err(EngagementError::storage(format!(
                "like row {like} vanished mid-transaction"
            ))),
        }
    }

    async fn insert_ledger_entry(&mut self, entry: LedgerEntry) -> Result<(), EngagementError> {
        self.working.ledger.push(entry);
        Ok(())
    }

    async fn count_likes(&mut self, target: TargetRef) -> Result<u64, EngagementError> {
        Ok(self
            .working
            .likes
            .values()
            .filter(|l| l.target == target)
            .count() as u64)
    }

    async fn ledger_entries_for(
        &mut self,
        recipient: ActorId,
    ) -> Result<Vec<LedgerEntry>, EngagementError> {
        Ok(self
            .working
            .ledger
            .iter()
            .filter(|e| e.recipient == recipient)
            .copied()
            .collect())
    }

    async fn commit(self: Box<Self>) -> Result<(), EngagementError> {
        let MemoryTxn { mut guard, working } = *self;
        *guard = working;
        Ok(())
    }
}
