use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::models::{DemonstrationMethod, Proficiency, SkillCategory};

/// Project records are owned by the external persistence layer. Only the fields
/// the scoring, pipeline and verification flows read are modelled; everything
/// is lenient so partially filled client payloads still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub goals: Option<String>,
    #[serde(default)]
    pub target_skills: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub pipeline_stage: Option<PipelineStage>,
    #[serde(default)]
    pub plan: Vec<String>,
    #[serde(default)]
    pub skill_demonstrations: Vec<SkillDemonstration>,
    #[serde(default)]
    pub scale: Option<ProjectScale>,
    /// Free-text impact column from storage; parsed when `projectImpact` is absent.
    #[serde(default)]
    pub impact: Option<String>,
    #[serde(default, rename = "projectImpact")]
    pub project_impact: Option<ImpactLevel>,
    #[serde(default, rename = "externalValidations")]
    pub external_validations: Vec<ExternalValidation>,
    #[serde(default, rename = "liveDemo", skip_serializing_if = "Option::is_none")]
    pub live_demo: Option<LiveDemo>,
}

impl Project {
    /// `projectImpact` wins over the storage `impact` text. Unrecognised values
    /// on either side are ignored.
    pub fn impact_level(&self) -> Option<ImpactLevel> {
        self.project_impact
            .filter(|impact| *impact != ImpactLevel::Unknown)
            .or_else(|| self.impact.as_deref().and_then(ImpactLevel::parse))
    }

    pub fn verified_validation_count(&self) -> usize {
        self.external_validations.iter().filter(|v| v.verified).count()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Active,
    Completed,
    Paused,
    /// Any status this service does not track, e.g. `archived`.
    #[serde(other)]
    Other,
}

/// Kanban column of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Planning,
    Development,
    Testing,
    Verification,
    Completed,
}

impl PipelineStage {
    pub const ALL: [PipelineStage; 5] = [
        PipelineStage::Planning,
        PipelineStage::Development,
        PipelineStage::Testing,
        PipelineStage::Verification,
        PipelineStage::Completed,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            PipelineStage::Planning => "Planning",
            PipelineStage::Development => "Development",
            PipelineStage::Testing => "Testing",
            PipelineStage::Verification => "Verification",
            PipelineStage::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DemonstrationStatus {
    InProgress = 1,
    Completed = 2,
    Verified = 3,
    #[default]
    #[serde(other)]
    Planned = 0,
}

/// A target skill as tracked on a project, including verification outcome.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillDemonstration {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: SkillCategory,
    #[serde(default)]
    pub proficiency: Proficiency,
    #[serde(default, rename = "demonstrationMethod", skip_serializing_if = "Option::is_none")]
    pub demonstration_method: Option<DemonstrationMethod>,
    #[serde(default)]
    pub requirements: String,
    #[serde(default, rename = "aiPrompt", skip_serializing_if = "Option::is_none")]
    pub ai_prompt: Option<String>,
    #[serde(default)]
    pub status: DemonstrationStatus,
    #[serde(default)]
    pub evidence_url: Option<String>,
    #[serde(default)]
    pub verified: bool,
    /// 1–5 when rated.
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_feedback: Option<String>,
}

/// Ordered: comparisons pick the largest scale seen. `Unknown` sorts lowest
/// and is skipped by scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectScale {
    // Explicit discriminants keep `Unknown` lowest under derived `Ord`
    // while `#[serde(other)]` sits on the last variant as serde requires.
    Small = 1,
    Medium = 2,
    Large = 3,
    Enterprise = 4,
    #[serde(other)]
    Unknown = 0,
}

impl ProjectScale {
    pub fn points(&self) -> u32 {
        match self {
            ProjectScale::Unknown => 0,
            ProjectScale::Small => 10,
            ProjectScale::Medium => 20,
            ProjectScale::Large => 30,
            ProjectScale::Enterprise => 40,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    // Explicit discriminants keep `Unknown` lowest under derived `Ord`
    // while `#[serde(other)]` sits on the last variant as serde requires.
    Low = 1,
    Medium = 2,
    High = 3,
    Significant = 4,
    #[serde(other)]
    Unknown = 0,
}

impl ImpactLevel {
    pub fn points(&self) -> u32 {
        match self {
            ImpactLevel::Unknown => 0,
            ImpactLevel::Low => 10,
            ImpactLevel::Medium => 20,
            ImpactLevel::High => 30,
            ImpactLevel::Significant => 40,
        }
    }

    /// Parses the storage text column; anything unrecognised is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "low" => Some(ImpactLevel::Low),
            "medium" => Some(ImpactLevel::Medium),
            "high" => Some(ImpactLevel::High),
            "significant" => Some(ImpactLevel::Significant),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationKind {
    ClientTestimonial,
    UserMetrics,
    OpenSource,
    Award,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalValidation {
    #[serde(rename = "type")]
    pub kind: ValidationKind,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiveDemoKind {
    VideoWalkthrough,
    PublicPresentation,
    LiveDeployment,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveDemo {
    pub url: String,
    #[serde(rename = "type")]
    pub kind: LiveDemoKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_project_deserializes() {
        let project: Project = serde_json::from_str(r#"{"name": "Portfolio"}"#).unwrap();
        assert_eq!(project.status, ProjectStatus::Active);
        assert!(project.skill_demonstrations.is_empty());
        assert!(project.scale.is_none());
        assert!(project.live_demo.is_none());
    }

    #[test]
    fn test_project_impact_takes_precedence_over_text_column() {
        let project: Project = serde_json::from_str(
            r#"{"impact": "Significant", "projectImpact": "medium"}"#,
        )
        .unwrap();
        assert_eq!(project.impact_level(), Some(ImpactLevel::Medium));

        let text_only: Project = serde_json::from_str(r#"{"impact": " High "}"#).unwrap();
        assert_eq!(text_only.impact_level(), Some(ImpactLevel::High));

        let free_text: Project =
            serde_json::from_str(r#"{"impact": "Cut onboarding time in half"}"#).unwrap();
        assert_eq!(free_text.impact_level(), None);
    }

    #[test]
    fn test_scale_and_impact_are_ordered() {
        assert!(ProjectScale::Enterprise > ProjectScale::Large);
        assert!(ImpactLevel::Significant > ImpactLevel::High);
        assert_eq!(ProjectScale::Enterprise.points(), 40);
        assert_eq!(ImpactLevel::Low.points(), 10);
    }

    #[test]
    fn test_demonstration_wire_names() {
        let demo: SkillDemonstration = serde_json::from_str(
            r#"{
                "id": "skill_1",
                "name": "React",
                "category": "technical",
                "demonstrationMethod": "live-demo",
                "status": "in-progress",
                "evidence_url": null,
                "verified": false,
                "rating": null
            }"#,
        )
        .unwrap();
        assert_eq!(demo.status, DemonstrationStatus::InProgress);
        assert_eq!(demo.demonstration_method, Some(DemonstrationMethod::LiveDemo));

        let value = serde_json::to_value(&demo).unwrap();
        assert_eq!(value["demonstrationMethod"], "live-demo");
        assert!(value.get("verification_feedback").is_none());
    }

    #[test]
    fn test_unrecognised_enum_values_are_tolerated() {
        let project: Project = serde_json::from_str(
            r#"{
                "status": "archived",
                "scale": "huge",
                "projectImpact": "galactic",
                "impact": "High",
                "skill_demonstrations": [{"name": "React", "status": "abandoned"}],
                "externalValidations": [{"type": "press_mention", "verified": true}],
                "liveDemo": {"url": "https://demo.example.com", "type": "hologram"}
            }"#,
        )
        .unwrap();
        assert_eq!(project.status, ProjectStatus::Other);
        assert_eq!(project.scale, Some(ProjectScale::Unknown));
        assert_eq!(project.project_impact, Some(ImpactLevel::Unknown));
        // Falls through to the text column.
        assert_eq!(project.impact_level(), Some(ImpactLevel::High));
        assert_eq!(
            project.skill_demonstrations[0].status,
            DemonstrationStatus::Planned
        );
        assert_eq!(project.external_validations[0].kind, ValidationKind::Other);
        assert_eq!(project.verified_validation_count(), 1);
        assert_eq!(
            project.live_demo.map(|d| d.kind),
            Some(LiveDemoKind::Other)
        );
    }

    #[test]
    fn test_unknown_scale_and_impact_sort_lowest() {
        assert!(ProjectScale::Unknown < ProjectScale::Small);
        assert!(ImpactLevel::Unknown < ImpactLevel::Low);
        assert_eq!(ProjectScale::Unknown.points(), 0);
    }

    #[test]
    fn test_external_validation_counts_only_verified() {
        let project: Project = serde_json::from_str(
            r#"{"externalValidations": [
                {"type": "award", "description": "Hackathon", "verified": true},
                {"type": "open_source", "description": "Stars", "verified": false}
            ]}"#,
        )
        .unwrap();
        assert_eq!(project.verified_validation_count(), 1);
    }
}
