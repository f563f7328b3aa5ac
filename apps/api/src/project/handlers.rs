//! Axum route handlers for the project workflow.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::project::Project;
use crate::project::draft::{draft_project, DraftRequest, ProjectDraft};
use crate::project::pipeline::{build_board, PipelineBoard};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PipelineRequest {
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// POST /api/v1/projects/draft
///
/// Validates the form, runs scope analysis, and returns an unsaved project with
/// its plan and seeded demonstrations. Persisting it is the caller's job.
pub async fn handle_draft_project(
    State(state): State<AppState>,
    payload: Result<Json<DraftRequest>, JsonRejection>,
) -> Result<Json<ProjectDraft>, AppError> {
    let Json(request) = payload?;
    let input = request.validate()?;

    let analysis = state.analyzer.analyze(&input).await;
    let draft = draft_project(
        &request,
        input,
        analysis,
        Uuid::new_v4().to_string(),
        Utc::now(),
    );

    info!(
        project_id = %draft.project.id,
        skills = draft.project.skill_demonstrations.len(),
        plan_steps = draft.project.plan.len(),
        "project draft created"
    );

    Ok(Json(draft))
}

/// POST /api/v1/projects/pipeline
pub async fn handle_pipeline(
    payload: Result<Json<PipelineRequest>, JsonRejection>,
) -> Result<Json<PipelineBoard>, AppError> {
    let Json(request) = payload?;
    Ok(Json(build_board(&request.projects, Utc::now())))
}
