pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze_project_scope;
use crate::project::handlers::{handle_draft_project, handle_pipeline};
use crate::reelpass::handlers::handle_reelpass_score;
use crate::state::AppState;
use crate::suggestions::handlers::handle_generate_skill_suggestions;
use crate::verification::handlers::{handle_verify_evidence, handle_verify_skill_video};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis
        .route(
            "/api/v1/analyze-project-scope",
            post(handle_analyze_project_scope),
        )
        .route(
            "/api/v1/generate-skill-suggestions",
            post(handle_generate_skill_suggestions),
        )
        // Verification
        .route("/api/v1/verify-skill-video", post(handle_verify_skill_video))
        // Scoring
        .route("/api/v1/reelpass/score", post(handle_reelpass_score))
        // Project workflow
        .route("/api/v1/projects/draft", post(handle_draft_project))
        .route("/api/v1/projects/pipeline", post(handle_pipeline))
        .route(
            "/api/v1/projects/verify-evidence",
            post(handle_verify_evidence),
        )
        .with_state(state)
}
