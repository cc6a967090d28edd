//! Leaderboard HTTP handlers.
//!
//! GET returns the ranked records (an empty array when the store cannot be
//! read); POST validates and persists one submission. Store work touches
//! the filesystem, so it runs on the blocking pool.

use actix_web::{HttpResponse, http::StatusCode, web};
use log::error;

use crate::leaderboard::error::LeaderboardError;
use crate::leaderboard::types::NewScore;
use crate::server::state::AppState;
use crate::server::ws_error::http_error_response;

/// GET /api/leaderboard
pub async fn get_leaderboard(data: web::Data<AppState>) -> HttpResponse {
    let leaderboard = data.leaderboard.clone();
    let records = web::block(move || leaderboard.list_scores())
        .await
        .unwrap_or_default();
    HttpResponse::Ok().json(records)
}

/// POST /api/leaderboard
pub async fn post_score(data: web::Data<AppState>, body: web::Json<NewScore>) -> HttpResponse {
    let leaderboard = data.leaderboard.clone();
    let submission = body.into_inner();

    let result = web::block(move || leaderboard.submit_score(submission)).await;
    match result {
        Ok(Ok(record)) => HttpResponse::Ok().json(record),
        Ok(Err(LeaderboardError::Validation(message))) => http_error_response(
            "INVALID_SUBMISSION",
            &message,
            None,
            StatusCode::BAD_REQUEST,
        ),
        Ok(Err(LeaderboardError::Backend(e))) => {
            error!("[Leaderboard] Write failed: {}", e);
            http_error_response(
                "STORE_WRITE_FAILED",
                "Failed to save score",
                None,
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
        Err(e) => {
            error!("[Leaderboard] Blocking task failed: {}", e);
            http_error_response(
                "STORE_WRITE_FAILED",
                "Failed to save score",
                None,
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    }
}
