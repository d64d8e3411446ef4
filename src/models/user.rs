//! User record and score history.

use serde::{Deserialize, Serialize};

use crate::models::ScoreCard;

/// Most recent completed attempts kept per user.
pub const HISTORY_LIMIT: usize = 10;

/// Locally-identified user with their score history.
///
/// Identity is just the email string: no password, no verification, exact
/// case-sensitive matching against stored records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    /// Completed attempts, newest first, at most [`HISTORY_LIMIT`]
    #[serde(default)]
    pub history: Vec<SavedScore>,
}

impl User {
    /// Fresh record with empty history.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            history: Vec::new(),
        }
    }

    /// Prepend a completed attempt, evicting the oldest past the cap.
    pub fn record_attempt(&mut self, score: SavedScore) {
        self.history.insert(0, score);
        self.history.truncate(HISTORY_LIMIT);
    }
}

/// Immutable snapshot of one completed attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedScore {
    pub id: uuid::Uuid,
    /// Human-readable creation date
    pub date: String,
    pub total: u32,
    /// Value copy of the per-category scores at completion
    pub scores: ScoreCard,
}

impl SavedScore {
    /// Snapshot the given scores as a new history entry.
    pub fn capture(scores: &ScoreCard, date: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            date,
            total: scores.total(),
            scores: scores.clone(),
        }
    }
}
