// src/server/state.rs

//! Application state for the backend server.
//!
//! Holds the leaderboard service shared between HTTP handlers and the
//! WebSocket game sessions.

use crate::leaderboard::Leaderboard;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Leaderboard service (validation, ranking, persistence).
    pub leaderboard: Leaderboard,
}

impl AppState {
    /// Create a new AppState around the given leaderboard service.
    pub fn new(leaderboard: Leaderboard) -> Self {
        AppState { leaderboard }
    }
}
