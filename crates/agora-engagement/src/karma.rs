//! Karma aggregation
//!
//! Read-side projections over the ledger. All three queries are pure
//! functions of the entries they are given: karma is reconstructed by
//! summing, never read from a counter, so the values are always auditable
//! against the ledger. Absence of entries is zero karma, not an error.

use crate::ledger::LedgerEntry;
use agora_core::{Actor, ActorId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use time::{Duration, OffsetDateTime};

/// Lookback window for the "active contributors" ranking.
pub const TRAILING_WINDOW: Duration = Duration::hours(24);

/// Default number of leaderboard rows.
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 5;

/// One leaderboard row: an active actor annotated with karma totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    /// The ranked actor
    pub actor: ActorId,
    /// Display handle, joined from the actor directory
    pub handle: String,
    /// Avatar URL, if the actor has one
    pub avatar_url: Option<String>,
    /// Karma earned inside the trailing window
    pub karma_24h: i64,
    /// All-time karma
    pub total_karma: i64,
}

/// Pure projections over ledger entries.
pub struct KarmaAggregator;

impl KarmaAggregator {
    /// All-time karma for an actor: the sum of every entry credited to
    /// them. Zero when no entries exist.
    pub fn total_karma(entries: &[LedgerEntry], actor: ActorId) -> i64 {
        entries
            .iter()
            .filter(|e| e.recipient == actor)
            .map(|e| e.amount)
            .sum()
    }

    /// Karma earned in the trailing 24-hour window ending at `now`.
    pub fn karma_24h(entries: &[LedgerEntry], actor: ActorId, now: OffsetDateTime) -> i64 {
        let cutoff = now - TRAILING_WINDOW;
        entries
            .iter()
            .filter(|e| e.recipient == actor && e.created_at >= cutoff)
            .map(|e| e.amount)
            .sum()
    }

    /// Top actors by trailing-window karma.
    ///
    /// Only actors with strictly positive window karma appear: an actor
    /// whose activity is all older than the window is excluded even if
    /// their total karma is the highest. Rows order by window karma
    /// descending with the actor id as tiebreak, so a snapshot is
    /// deterministic, and each row is annotated with the all-time total
    /// plus the actor's handle and avatar from `actors`.
    pub fn leaderboard(
        entries: &[LedgerEntry],
        actors: &[Actor],
        now: OffsetDateTime,
        limit: usize,
    ) -> Vec<LeaderboardRow> {
        let cutoff = now - TRAILING_WINDOW;
        let mut windowed: HashMap<ActorId, i64> = HashMap::new();
        for entry in entries.iter().filter(|e| e.created_at >= cutoff) {
            *windowed.entry(entry.recipient).or_insert(0) += entry.amount;
        }

        let directory: HashMap<ActorId, &Actor> = actors.iter().map(|a| (a.id, a)).collect();

        let mut rows: Vec<LeaderboardRow> = windowed
            .into_iter()
            .filter(|(_, karma_24h)| *karma_24h > 0)
            .filter_map(|(actor, karma_24h)| {
                directory.get(&actor).map(|profile| LeaderboardRow {
                    actor,
                    handle: profile.handle.clone(),
                    avatar_url: profile.avatar_url.clone(),
                    karma_24h,
                    total_karma: Self::total_karma(entries, actor),
                })
            })
            .collect();

        rows.sort_by(|a, b| b.karma_24h.cmp(&a.karma_24h).then(a.actor.cmp(&b.actor)));
        rows.truncate(limit);
        rows
    }
}
