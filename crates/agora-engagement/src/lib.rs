//! Agora Engagement - Concurrency-Safe Like/Karma Core
//!
//! This crate implements the engagement subsystem of the Agora feed:
//!
//! - `LikeToggleService`: atomically flips like state on a post or comment
//!   and appends the matching entry to the karma ledger
//! - `LockCoordinator`: per-(actor, target) mutual exclusion for toggles
//! - `KarmaAggregator`: read-side projections over the append-only ledger
//!   (total karma, trailing-24h karma, leaderboard)
//! - `EngagementStore` / `EngagementTxn`: the transactional boundary to the
//!   persistence collaborator, with an in-memory reference implementation
//!
//! # Architecture
//!
//! Karma is never stored as a counter. Every karma-affecting event appends
//! one signed `LedgerEntry`, and every karma value a caller sees is a sum
//! over those entries. Unliking appends a negating entry rather than
//! deleting the original, so the ledger stays auditable.
//!
//! The in-process `LockCoordinator` serializes same-key toggles cheaply, but
//! it is only the first line of defense: the storage transaction opened by
//! the toggle service takes a write-intent lock on the target row, which is
//! the correctness guarantee across processes.
//!
//! # Example
//!
//! ```ignore
//! use agora_engagement::{LikeToggleService, MemoryStore, TargetRef};
//!
//! let store = Arc::new(MemoryStore::new());
//! let service = LikeToggleService::new(store);
//!
//! let outcome = service.toggle(actor, TargetRef::Post(post_id)).await?;
//! assert!(outcome.liked);
//! ```

pub mod config;
pub mod error;
pub mod karma;
pub mod ledger;
pub mod like;
pub mod lock;
pub mod memory;
pub mod store;
pub mod target;
pub mod toggle;

// Re-export primary types
pub use config::ToggleConfig;
pub use error::EngagementError;
pub use karma::{KarmaAggregator, LeaderboardRow, DEFAULT_LEADERBOARD_LIMIT, TRAILING_WINDOW};
pub use ledger::{EntryId, KarmaReason, LedgerEntry, LedgerRef};
pub use like::{Like, LikeId};
pub use lock::{LockCoordinator, ToggleGuard, ToggleKey};
pub use memory::MemoryStore;
pub use store::{EngagementStore, EngagementTxn};
pub use target::{EngagementTarget, TargetKind, TargetRef};
pub use toggle::{LikeToggleService, ToggleOutcome};
