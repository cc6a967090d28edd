pub mod game_session;
pub mod leaderboard_routes;
pub mod router;
pub mod state;
pub mod ws_error;
