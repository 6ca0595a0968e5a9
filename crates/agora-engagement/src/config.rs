//! Toggle policy configuration
//!
//! The reward magnitudes and leaderboard size are product decisions. They
//! live here so the literals appear in exactly one place; the defaults are
//! the shipped policy.

use crate::target::TargetKind;
use serde::{Deserialize, Serialize};

/// Engagement policy knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleConfig {
    /// Karma awarded to a post's author per like
    pub post_reward: i64,
    /// Karma awarded to a comment's author per like
    pub comment_reward: i64,
    /// Maximum number of leaderboard rows returned
    pub leaderboard_limit: usize,
}

impl ToggleConfig {
    /// Karma reward for a like on the given target kind.
    ///
    /// Unlike reverses the same magnitude with the opposite sign.
    pub fn reward(&self, kind: TargetKind) -> i64 {
        match kind {
            TargetKind::Post => self.post_reward,
            TargetKind::Comment => self.comment_reward,
        }
    }
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            post_reward: 5,
            comment_reward: 1,
            leaderboard_limit: crate::karma::DEFAULT_LEADERBOARD_LIMIT,
        }
    }
}
