//! Main entry point for the backend server.
//!
//! Initializes logging, opens the leaderboard store, and launches the HTTP
//! server with the leaderboard endpoints and the game session WebSocket.

use std::sync::Arc;

use actix_web::{web, App, HttpServer};

use leaderboard::Leaderboard;
use leaderboard::store::FileStore;

pub mod config;
mod game;
mod leaderboard;
mod server;


#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::init();

    // File-backed score store behind the leaderboard service.
    let store = Arc::new(FileStore::new(config::leaderboard::LEADERBOARD_FILE));
    let leaderboard = Leaderboard::new(store);

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(server::state::AppState::new(leaderboard));

    // Start the HTTP server with the leaderboard and game endpoints.
    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind(("127.0.0.1", 8080))?
    .run()
    .await
}
