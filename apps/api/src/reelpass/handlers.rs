//! Axum route handler for the ReelPass score.

use axum::{extract::rejection::JsonRejection, Json};
use chrono::Utc;
use tracing::info;

use crate::errors::AppError;
use crate::reelpass::models::{ReelPassRequest, ReelPassScore};
use crate::reelpass::scoring::calculate_reelpass_score;

/// POST /api/v1/reelpass/score
///
/// Stateless: the caller sends every project and signal source on each call.
pub async fn handle_reelpass_score(
    payload: Result<Json<ReelPassRequest>, JsonRejection>,
) -> Result<Json<ReelPassScore>, AppError> {
    let Json(request) = payload?;

    let score = calculate_reelpass_score(&request, Utc::now());

    info!(
        projects = request.projects.len(),
        total_score = score.total_score,
        level = score.level_name.as_str(),
        "reelpass score calculated"
    );

    Ok(Json(score))
}
