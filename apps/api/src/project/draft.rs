//! Project draft: validates the form, then assembles plan, feedback and
//! seeded demonstrations around a finished scope analysis.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::models::{ProjectInput, ScopeAnalysis};
use crate::errors::AppError;
use crate::models::project::{PipelineStage, Project, ProjectStatus};
use crate::project::feedback::{skill_feedback, SkillFeedback};
use crate::project::plan::{generate_plan, seed_demonstrations};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRequest {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub goals: Option<String>,
    #[serde(default)]
    pub target_skills: Vec<String>,
}

impl DraftRequest {
    /// Skills are trimmed; blanks and repeats are dropped.
    pub fn normalized_skills(&self) -> Vec<String> {
        let mut skills: Vec<String> = Vec::with_capacity(self.target_skills.len());
        for skill in self.target_skills.iter().map(|s| s.trim()) {
            if !skill.is_empty() && !skills.iter().any(|s| s == skill) {
                skills.push(skill.to_string());
            }
        }
        skills
    }

    /// A draft needs a name, a description and at least one skill.
    pub fn validate(&self) -> Result<ProjectInput, AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name cannot be empty".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(AppError::Validation(
                "description cannot be empty".to_string(),
            ));
        }
        let skills = self.normalized_skills();
        if skills.is_empty() {
            return Err(AppError::Validation(
                "at least one target skill is required".to_string(),
            ));
        }

        Ok(ProjectInput {
            project_description: self.description.clone(),
            project_goals: self.goals.clone(),
            target_skills: skills,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectDraft {
    pub project: Project,
    pub analysis: ScopeAnalysis,
    pub skill_feedback: Vec<SkillFeedback>,
}

/// Builds an active project in the planning stage from a validated request.
pub fn draft_project(
    request: &DraftRequest,
    input: ProjectInput,
    analysis: ScopeAnalysis,
    id: String,
    created_at: DateTime<Utc>,
) -> ProjectDraft {
    let name = request.name.trim().to_string();
    let project = Project {
        id,
        plan: generate_plan(&name, &analysis.detected_skills),
        skill_demonstrations: seed_demonstrations(&analysis.detected_skills),
        name,
        description: input.project_description,
        goals: input.project_goals,
        target_skills: input.target_skills,
        created_at: Some(created_at),
        status: ProjectStatus::Active,
        pipeline_stage: Some(PipelineStage::Planning),
        ..Default::default()
    };

    ProjectDraft {
        skill_feedback: skill_feedback(&analysis),
        project,
        analysis,
    }
}
