//! Scope analyzer backends.
//!
//! Default: `RuleBasedAnalyzer` (pure, deterministic, always available).
//! Optional: `UpstreamAnalyzer` (remote analysis service) which degrades to the
//! rule-based result on any transport, status or decode error.
//!
//! `AppState` holds an `Arc<dyn ScopeAnalyzer>`, chosen at startup from config.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::models::{ProjectInput, ScopeAnalysis};
use crate::analysis::scope::analyze_scope;
use crate::suggestions::generator::{generate_skill_suggestions, SkillSuggestions};
use crate::upstream::UpstreamClient;

const SCOPE_PATH: &str = "analyze-project-scope";
const SUGGESTIONS_PATH: &str = "generate-skill-suggestions";

/// Infallible by contract: every backend must produce a result for any input.
#[async_trait]
pub trait ScopeAnalyzer: Send + Sync {
    async fn analyze(&self, input: &ProjectInput) -> ScopeAnalysis;

    async fn suggest_skills(&self, description: &str, goals: &str) -> SkillSuggestions;

    /// "rule_based" | "upstream", logged at startup.
    fn backend_name(&self) -> &'static str;
}

pub struct RuleBasedAnalyzer;

#[async_trait]
impl ScopeAnalyzer for RuleBasedAnalyzer {
    async fn analyze(&self, input: &ProjectInput) -> ScopeAnalysis {
        analyze_scope(input)
    }

    async fn suggest_skills(&self, description: &str, goals: &str) -> SkillSuggestions {
        generate_skill_suggestions(description, goals)
    }

    fn backend_name(&self) -> &'static str {
        "rule_based"
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SuggestionRequest<'a> {
    project_description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_goals: Option<&'a str>,
}

/// Remote analyzer with local fallback.
pub struct UpstreamAnalyzer {
    client: UpstreamClient,
}

impl UpstreamAnalyzer {
    pub fn new(client: UpstreamClient) -> Self {
        info!("Scope analysis delegated to upstream {}", client.base_url());
        Self { client }
    }
}

#[async_trait]
impl ScopeAnalyzer for UpstreamAnalyzer {
    async fn analyze(&self, input: &ProjectInput) -> ScopeAnalysis {
        match self.client.post_json(SCOPE_PATH, input).await {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!("Upstream scope analysis failed, using local analysis: {e}");
                analyze_scope(input)
            }
        }
    }

    async fn suggest_skills(&self, description: &str, goals: &str) -> SkillSuggestions {
        let request = SuggestionRequest {
            project_description: description,
            project_goals: (!goals.is_empty()).then_some(goals),
        };
        match self.client.post_json(SUGGESTIONS_PATH, &request).await {
            Ok(suggestions) => suggestions,
            Err(e) => {
                warn!("Upstream skill suggestions failed, using local rules: {e}");
                generate_skill_suggestions(description, goals)
            }
        }
    }

    fn backend_name(&self) -> &'static str {
        "upstream"
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::analysis::models::{DemonstrationMethod, Proficiency};

    fn unreachable_analyzer() -> UpstreamAnalyzer {
        let client =
            UpstreamClient::new("http://127.0.0.1:9", None, Duration::from_millis(200)).unwrap();
        UpstreamAnalyzer::new(client)
    }

    #[tokio::test]
    async fn test_rule_based_matches_pure_function() {
        let input = ProjectInput::new("Build a REST api", None, &["Rust", "Leadership"]);
        let analysis = RuleBasedAnalyzer.analyze(&input).await;
        assert_eq!(analysis, analyze_scope(&input));
        assert_eq!(RuleBasedAnalyzer.backend_name(), "rule_based");
    }

    #[tokio::test]
    async fn test_upstream_failure_falls_back_to_local_analysis() {
        let input = ProjectInput::new("Build a REST api", Some("ship it"), &["Rust"]);
        let analysis = unreachable_analyzer().analyze(&input).await;
        assert_eq!(analysis, analyze_scope(&input));
    }

    #[tokio::test]
    async fn test_upstream_failure_falls_back_to_local_suggestions() {
        let suggestions = unreachable_analyzer()
            .suggest_skills("Improve hospital discharge planning", "")
            .await;
        assert_eq!(
            suggestions,
            generate_skill_suggestions("Improve hospital discharge planning", "")
        );
    }

    const UPSTREAM_ANALYSIS: &str = r#"{
        "clarity_score": 9,
        "feasibility_score": 8,
        "identified_risks": ["Vendor lock-in"],
        "suggested_technologies": ["Rust", "PostgreSQL"],
        "detected_skills": [{
            "id": "skill_1",
            "name": "Rust",
            "category": "technical",
            "proficiency": "advanced",
            "demonstrationMethod": "code",
            "requirements": "Ship a crate",
            "aiPrompt": "Review the repository"
        }],
        "skill_mapping": [{
            "skill": "Rust",
            "demonstration_method": "code",
            "complexity_level": 4,
            "verification_criteria": ["Idiomatic ownership"]
        }]
    }"#;

    const UPSTREAM_SUGGESTIONS: &str =
        r#"{"technical": ["Async Rust"], "soft": ["Code Review"], "certification": []}"#;

    /// Serves canned bodies on both upstream paths from an ephemeral local port.
    async fn canned_upstream() -> UpstreamAnalyzer {
        use axum::{http::header, response::IntoResponse, routing::post, Router};

        async fn analysis() -> impl IntoResponse {
            ([(header::CONTENT_TYPE, "application/json")], UPSTREAM_ANALYSIS)
        }
        async fn suggestions() -> impl IntoResponse {
            ([(header::CONTENT_TYPE, "application/json")], UPSTREAM_SUGGESTIONS)
        }

        let app = Router::new()
            .route("/analyze-project-scope", post(analysis))
            .route("/generate-skill-suggestions", post(suggestions));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        let client =
            UpstreamClient::new(format!("http://{addr}"), None, Duration::from_secs(5)).unwrap();
        UpstreamAnalyzer::new(client)
    }

    #[tokio::test]
    async fn test_upstream_analysis_is_decoded() {
        let input = ProjectInput::new("Build a REST api", None, &["Rust"]);
        let analysis = canned_upstream().await.analyze(&input).await;

        assert_ne!(analysis, analyze_scope(&input));
        assert_eq!(analysis.clarity_score, 9);
        assert_eq!(analysis.identified_risks, vec!["Vendor lock-in"]);
        assert_eq!(analysis.detected_skills[0].proficiency, Proficiency::Advanced);
        assert_eq!(
            analysis.detected_skills[0].demonstration_method,
            DemonstrationMethod::Code
        );
        assert_eq!(analysis.complexity_of("Rust"), 4);
        assert_eq!(analysis.criteria_of("Rust"), vec!["Idiomatic ownership"]);
    }

    #[tokio::test]
    async fn test_upstream_suggestions_are_decoded() {
        let suggestions = canned_upstream()
            .await
            .suggest_skills("Build a REST api", "")
            .await;
        assert_eq!(suggestions.technical, vec!["Async Rust"]);
        assert_eq!(suggestions.soft, vec!["Code Review"]);
        // Categories the upstream omits default to empty.
        assert!(suggestions.regulatory.is_empty());
    }

    #[test]
    fn test_suggestion_request_omits_blank_goals() {
        let body = serde_json::to_value(SuggestionRequest {
            project_description: "x",
            project_goals: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"projectDescription": "x"}));
    }
}
