//! Pipeline staging: derives each project's kanban column from its status and
//! demonstration progress.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::project::{PipelineStage, Project, ProjectStatus};

const SECONDS_PER_DAY: i64 = 86_400;

/// Derived stage. Active projects advance on evidence; paused ones sit in planning.
pub fn derive_stage(project: &Project) -> PipelineStage {
    let demos = &project.skill_demonstrations;
    match project.status {
        ProjectStatus::Active => {
            if demos.iter().any(|d| d.verified) {
                PipelineStage::Verification
            } else if demos.iter().any(|d| d.evidence_url.is_some()) {
                PipelineStage::Testing
            } else if !demos.is_empty() {
                PipelineStage::Development
            } else {
                PipelineStage::Planning
            }
        }
        ProjectStatus::Completed => PipelineStage::Completed,
        ProjectStatus::Paused | ProjectStatus::Other => PipelineStage::Planning,
    }
}

/// Verified share of demonstrations, 0–100, rounded half up.
pub fn completion_percent(project: &Project) -> u32 {
    let total = project.skill_demonstrations.len();
    if total == 0 {
        return 0;
    }
    let verified = project
        .skill_demonstrations
        .iter()
        .filter(|d| d.verified)
        .count();
    ((verified * 200 + total) / (total * 2)) as u32
}

/// Whole days since creation, rounded up. Missing timestamps count as zero.
pub fn days_in_stage(project: &Project, now: DateTime<Utc>) -> u32 {
    let Some(created_at) = project.created_at else {
        return 0;
    };
    let seconds = (now - created_at).num_seconds().abs();
    let days = (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY;
    u32::try_from(days).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineCard {
    pub id: String,
    pub name: String,
    pub progress: u32,
    pub days_in_stage: u32,
    pub verified_skills: usize,
    pub total_skills: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StageColumn {
    pub stage: PipelineStage,
    pub name: &'static str,
    pub description: &'static str,
    pub projects: Vec<PipelineCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineBoard {
    pub stages: Vec<StageColumn>,
}

fn stage_description(stage: PipelineStage) -> &'static str {
    match stage {
        PipelineStage::Planning => "Define project scope and requirements",
        PipelineStage::Development => "Build and implement features",
        PipelineStage::Testing => "Test functionality and fix bugs",
        PipelineStage::Verification => "Skill verification and review",
        PipelineStage::Completed => "Project delivered and verified",
    }
}

/// Groups projects into the five columns, preserving input order within each.
pub fn build_board(projects: &[Project], now: DateTime<Utc>) -> PipelineBoard {
    let mut stages: Vec<StageColumn> = PipelineStage::ALL
        .iter()
        .map(|stage| StageColumn {
            stage: *stage,
            name: stage.title(),
            description: stage_description(*stage),
            projects: Vec::new(),
        })
        .collect();

    for project in projects {
        let stage = derive_stage(project);
        let card = PipelineCard {
            id: project.id.clone(),
            name: project.name.clone(),
            progress: completion_percent(project),
            days_in_stage: days_in_stage(project, now),
            verified_skills: project
                .skill_demonstrations
                .iter()
                .filter(|d| d.verified)
                .count(),
            total_skills: project.skill_demonstrations.len(),
        };
        if let Some(column) = stages.iter_mut().find(|c| c.stage == stage) {
            column.projects.push(card);
        }
    }

    PipelineBoard { stages }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::SkillDemonstration;
    use chrono::Duration;

    fn demo(verified: bool, evidence: bool) -> SkillDemonstration {
        SkillDemonstration {
            name: "Skill".to_string(),
            verified,
            evidence_url: evidence.then(|| "https://cdn.example.com/v.mp4".to_string()),
            ..Default::default()
        }
    }

    fn project(status: ProjectStatus, demos: Vec<SkillDemonstration>) -> Project {
        Project {
            status,
            skill_demonstrations: demos,
            ..Default::default()
        }
    }

    #[test]
    fn test_active_stage_progression() {
        let active = ProjectStatus::Active;
        assert_eq!(derive_stage(&project(active, vec![])), PipelineStage::Planning);
        assert_eq!(
            derive_stage(&project(active, vec![demo(false, false)])),
            PipelineStage::Development
        );
        assert_eq!(
            derive_stage(&project(active, vec![demo(false, false), demo(false, true)])),
            PipelineStage::Testing
        );
        assert_eq!(
            derive_stage(&project(active, vec![demo(false, true), demo(true, true)])),
            PipelineStage::Verification
        );
    }

    #[test]
    fn test_status_overrides() {
        let done = project(ProjectStatus::Completed, vec![demo(false, false)]);
        assert_eq!(derive_stage(&done), PipelineStage::Completed);
        let paused = project(ProjectStatus::Paused, vec![demo(true, true)]);
        assert_eq!(derive_stage(&paused), PipelineStage::Planning);
    }

    #[test]
    fn test_untracked_status_goes_to_planning() {
        let archived: Project =
            serde_json::from_str(r#"{"name": "A", "status": "archived"}"#).unwrap();
        assert_eq!(archived.status, ProjectStatus::Other);
        assert_eq!(derive_stage(&archived), PipelineStage::Planning);
        let board = build_board(&[archived], Utc::now());
        assert_eq!(board.stages[0].projects.len(), 1);
    }

    #[test]
    fn test_completion_percent_rounds() {
        assert_eq!(completion_percent(&project(ProjectStatus::Active, vec![])), 0);
        let one_of_three = project(
            ProjectStatus::Active,
            vec![demo(true, true), demo(false, false), demo(false, false)],
        );
        assert_eq!(completion_percent(&one_of_three), 33);
        let two_of_three = project(
            ProjectStatus::Active,
            vec![demo(true, true), demo(true, true), demo(false, false)],
        );
        assert_eq!(completion_percent(&two_of_three), 67);
        let half = project(ProjectStatus::Active, vec![demo(true, true), demo(false, false)]);
        assert_eq!(completion_percent(&half), 50);
    }

    #[test]
    fn test_days_in_stage_rounds_up() {
        let now = Utc::now();
        let mut p = project(ProjectStatus::Active, vec![]);
        assert_eq!(days_in_stage(&p, now), 0);
        p.created_at = Some(now - Duration::hours(1));
        assert_eq!(days_in_stage(&p, now), 1);
        p.created_at = Some(now - Duration::days(3));
        assert_eq!(days_in_stage(&p, now), 3);
        p.created_at = Some(now - Duration::days(3) - Duration::minutes(1));
        assert_eq!(days_in_stage(&p, now), 4);
    }

    #[test]
    fn test_board_has_all_columns_in_order() {
        let projects = vec![
            project(ProjectStatus::Completed, vec![]),
            project(ProjectStatus::Active, vec![demo(true, true), demo(false, false)]),
        ];
        let board = build_board(&projects, Utc::now());
        let order: Vec<PipelineStage> = board.stages.iter().map(|c| c.stage).collect();
        assert_eq!(order, PipelineStage::ALL.to_vec());
        assert_eq!(board.stages[3].projects.len(), 1);
        assert_eq!(board.stages[3].projects[0].progress, 50);
        assert_eq!(board.stages[4].projects.len(), 1);
        assert!(board.stages[0].projects.is_empty());
    }
}
