//! Axum route handler for project scope analysis.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use crate::analysis::models::{ProjectInput, ScopeAnalysis};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/analyze-project-scope
///
/// Malformed bodies are rejected with 400. An empty `targetSkills` list is a
/// valid request and yields empty skill sequences.
pub async fn handle_analyze_project_scope(
    State(state): State<AppState>,
    payload: Result<Json<ProjectInput>, JsonRejection>,
) -> Result<Json<ScopeAnalysis>, AppError> {
    let Json(input) = payload?;

    let analysis = state.analyzer.analyze(&input).await;

    info!(
        skills = input.target_skills.len(),
        clarity = analysis.clarity_score,
        feasibility = analysis.feasibility_score,
        backend = state.analyzer.backend_name(),
        "project scope analyzed"
    );

    Ok(Json(analysis))
}
