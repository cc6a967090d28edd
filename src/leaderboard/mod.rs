//! Leaderboard collaborator.
//!
//! Validates submissions, stamps them, and presents the stored records in
//! ranking order. Read failures degrade to an empty list so a broken store
//! never blocks gameplay; write failures surface as retryable errors.

pub mod error;
pub mod store;
pub mod types;

use std::cmp::Ordering;
use std::sync::Arc;

use chrono::Utc;
use log::warn;

use crate::config::leaderboard::MAX_NICKNAME_LEN;
use crate::leaderboard::error::LeaderboardError;
use crate::leaderboard::store::ScoreStore;
use crate::leaderboard::types::{NewScore, ScoreRecord};

#[derive(Clone)]
pub struct Leaderboard {
    store: Arc<dyn ScoreStore>,
}

impl Leaderboard {
    pub fn new(store: Arc<dyn ScoreStore>) -> Self {
        Leaderboard { store }
    }

    /// Validate and persist one submission. The nickname is trimmed before
    /// the emptiness check; a rejected submission never reaches the store.
    pub fn submit_score(&self, submission: NewScore) -> Result<ScoreRecord, LeaderboardError> {
        let nickname = submission.nickname.trim();
        if nickname.is_empty() {
            return Err(LeaderboardError::Validation("nickname must not be empty".to_string()));
        }
        if nickname.len() > MAX_NICKNAME_LEN {
            return Err(LeaderboardError::Validation(format!(
                "nickname longer than {MAX_NICKNAME_LEN} characters"
            )));
        }

        let record = ScoreRecord {
            nickname: nickname.to_string(),
            score: submission.score,
            time_taken: submission.time_taken,
            timestamp: Utc::now().to_rfc3339(),
        };
        Ok(self.store.insert(record)?)
    }

    /// Records ranked best-first: score descending, ties broken by the
    /// faster win, entries without a time last. A failed read logs and
    /// returns an empty board rather than propagating.
    pub fn list_scores(&self) -> Vec<ScoreRecord> {
        let mut records = match self.store.fetch_all() {
            Ok(records) => records,
            Err(e) => {
                warn!("[Leaderboard] Read failed, serving empty board: {}", e);
                return Vec::new();
            }
        };

        records.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| match (a.time_taken, b.time_taken) {
                    (Some(x), Some(y)) => x.cmp(&y),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                })
        });
        records
    }
}
