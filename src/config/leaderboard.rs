/// Leaderboard configuration constants.
///
/// This module defines where the score store lives on disk and the limits
/// applied to submitted nicknames.
pub const LEADERBOARD_FILE: &str = "leaderboard.json";

/// Maximum accepted nickname length, after trimming.
pub const MAX_NICKNAME_LEN: usize = 32;
