//! Axum route handlers for video verification.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;
use crate::verification::evidence::{verify_project_evidence, EvidenceOutcome, EvidenceRequest};
use crate::verification::oracle::{VideoAnalysisRequest, VideoAnalysisResponse};

/// POST /api/v1/verify-skill-video
///
/// Rates a single skill demonstration video through the configured oracle.
pub async fn handle_verify_skill_video(
    State(state): State<AppState>,
    payload: Result<Json<VideoAnalysisRequest>, JsonRejection>,
) -> Result<Json<VideoAnalysisResponse>, AppError> {
    let Json(request) = payload?;
    if request.skill_name.trim().is_empty() {
        return Err(AppError::Validation("skillName cannot be empty".to_string()));
    }

    let response = state.verifier.verify(&request).await?;

    info!(
        skill = %request.skill_name,
        rating = response.rating,
        backend = state.verifier.backend_name(),
        "skill video verified"
    );

    Ok(Json(response))
}

/// POST /api/v1/projects/verify-evidence
///
/// Applies one showcase video to every skill on the project. Returns the
/// updated project; the caller persists it.
pub async fn handle_verify_evidence(
    State(state): State<AppState>,
    payload: Result<Json<EvidenceRequest>, JsonRejection>,
) -> Result<Json<EvidenceOutcome>, AppError> {
    let Json(request) = payload?;
    let outcome = verify_project_evidence(state.verifier.as_ref(), request).await?;
    Ok(Json(outcome))
}
