//! Axum route handler for skill suggestions.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;
use crate::suggestions::generator::SkillSuggestions;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSuggestionRequest {
    pub project_description: String,
    #[serde(default)]
    pub project_goals: Option<String>,
}

/// POST /api/v1/generate-skill-suggestions
///
/// No minimum description length is enforced here; the web client gates calls itself.
pub async fn handle_generate_skill_suggestions(
    State(state): State<AppState>,
    payload: Result<Json<SkillSuggestionRequest>, JsonRejection>,
) -> Result<Json<SkillSuggestions>, AppError> {
    let Json(request) = payload?;
    let goals = request.project_goals.as_deref().unwrap_or("");

    let suggestions = state
        .analyzer
        .suggest_skills(&request.project_description, goals)
        .await;

    info!(
        technical = suggestions.technical.len(),
        soft = suggestions.soft.len(),
        backend = state.analyzer.backend_name(),
        "skill suggestions generated"
    );

    Ok(Json(suggestions))
}
