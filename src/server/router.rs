//! HTTP and WebSocket routing configuration.
//!
//! Defines the leaderboard endpoints and the game session endpoint.
//! Each game connection is handled by a dedicated WebSocket actor.

use actix_web::web;
use crate::server::game_session::session::ws_game;
use crate::server::leaderboard_routes::{get_leaderboard, post_score};

/// Configure the application's HTTP/WebSocket routes.
///
/// The leaderboard is plain request/response; the game endpoint upgrades to
/// a WebSocket actor that owns the connection's game state.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/leaderboard")
            .route(web::get().to(get_leaderboard))
            .route(web::post().to(post_score))
    )
    .service(
        web::resource("/ws/game")
            .to(ws_game)
    );
}
