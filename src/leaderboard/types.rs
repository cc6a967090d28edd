use serde::{Serialize, Deserialize};

/// One stored leaderboard row. `time_taken` is the number of seconds the
/// winning run needed; losing runs submit no time and sort after every
/// timed entry with the same score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub nickname: String,
    pub score: u32,
    pub time_taken: Option<u64>,
    /// RFC 3339 timestamp set at insertion.
    pub timestamp: String,
}

/// An incoming submission, before validation. Accepts the legacy camelCase
/// field spelling used by the web client.
#[derive(Debug, Clone, Deserialize)]
pub struct NewScore {
    pub nickname: String,
    pub score: u32,
    #[serde(default, alias = "timeTaken")]
    pub time_taken: Option<u64>,
}
