/// Main configuration module.
///
/// Re-exports submodules for game and leaderboard configuration.
pub mod game;
pub mod leaderboard;
