//! Wire and domain types for project scope analysis.
//!
//! Field names follow the JSON contract consumed by the web client:
//! `ScopeAnalysis` and `SkillMappingEntry` are snake_case, `SkillRecord` and the
//! request body are camelCase.

use serde::{Deserialize, Serialize};

/// Broad skill family. Drives requirement templates and verification criteria.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    #[default]
    Technical,
    Soft,
    Language,
    Certification,
    Creative,
    Analytical,
    Physical,
    Regulatory,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "technical",
            SkillCategory::Soft => "soft",
            SkillCategory::Language => "language",
            SkillCategory::Certification => "certification",
            SkillCategory::Creative => "creative",
            SkillCategory::Analytical => "analytical",
            SkillCategory::Physical => "physical",
            SkillCategory::Regulatory => "regulatory",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Proficiency {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
    Master,
}

/// The medium through which a skill is evidenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DemonstrationMethod {
    Code,
    Video,
    Documentation,
    Presentation,
    LiveDemo,
    Portfolio,
    CaseStudy,
    Simulation,
    Performance,
    Assessment,
}

impl DemonstrationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DemonstrationMethod::Code => "code",
            DemonstrationMethod::Video => "video",
            DemonstrationMethod::Documentation => "documentation",
            DemonstrationMethod::Presentation => "presentation",
            DemonstrationMethod::LiveDemo => "live-demo",
            DemonstrationMethod::Portfolio => "portfolio",
            DemonstrationMethod::CaseStudy => "case-study",
            DemonstrationMethod::Simulation => "simulation",
            DemonstrationMethod::Performance => "performance",
            DemonstrationMethod::Assessment => "assessment",
        }
    }
}

/// Caller-supplied project text and skills. Skill order is preserved; duplicates are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    pub project_description: String,
    #[serde(default)]
    pub project_goals: Option<String>,
    pub target_skills: Vec<String>,
}

impl ProjectInput {
    #[cfg(test)]
    pub fn new(description: &str, goals: Option<&str>, skills: &[&str]) -> Self {
        Self {
            project_description: description.to_string(),
            project_goals: goals.map(str::to_string),
            target_skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn goals(&self) -> &str {
        self.project_goals.as_deref().unwrap_or("")
    }

    /// Lowercased `description + " " + goals`, the text every keyword predicate scans.
    pub fn combined_text(&self) -> String {
        combined_text(&self.project_description, self.goals())
    }
}

pub fn combined_text(description: &str, goals: &str) -> String {
    format!("{} {}", description, goals).to_lowercase()
}

/// One analysed target skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRecord {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    pub proficiency: Proficiency,
    pub demonstration_method: DemonstrationMethod,
    pub requirements: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_prompt: Option<String>,
}

/// Verification plan for one target skill, index-aligned with `detected_skills`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMappingEntry {
    pub skill: String,
    pub demonstration_method: DemonstrationMethod,
    pub complexity_level: u8,
    pub verification_criteria: Vec<String>,
}

/// Full result of one scope analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeAnalysis {
    pub clarity_score: u8,
    pub feasibility_score: u8,
    pub identified_risks: Vec<String>,
    pub suggested_technologies: Vec<String>,
    pub detected_skills: Vec<SkillRecord>,
    pub skill_mapping: Vec<SkillMappingEntry>,
}

impl ScopeAnalysis {
    /// Complexity recorded for `skill_name`, defaulting to medium when unmapped.
    pub fn complexity_of(&self, skill_name: &str) -> u8 {
        self.skill_mapping
            .iter()
            .find(|m| m.skill == skill_name)
            .map(|m| m.complexity_level)
            .unwrap_or(3)
    }

    pub fn criteria_of(&self, skill_name: &str) -> Vec<String> {
        self.skill_mapping
            .iter()
            .find(|m| m.skill == skill_name)
            .map(|m| m.verification_criteria.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demonstration_method_serde_is_kebab_case() {
        let json = serde_json::to_string(&DemonstrationMethod::CaseStudy).unwrap();
        assert_eq!(json, r#""case-study""#);
        let method: DemonstrationMethod = serde_json::from_str(r#""live-demo""#).unwrap();
        assert_eq!(method, DemonstrationMethod::LiveDemo);
    }

    #[test]
    fn test_as_str_matches_serde_names() {
        for method in [
            DemonstrationMethod::Code,
            DemonstrationMethod::LiveDemo,
            DemonstrationMethod::CaseStudy,
            DemonstrationMethod::Assessment,
        ] {
            let json = serde_json::to_string(&method).unwrap();
            assert_eq!(json, format!("\"{}\"", method.as_str()));
        }
        let json = serde_json::to_string(&SkillCategory::Regulatory).unwrap();
        assert_eq!(json, format!("\"{}\"", SkillCategory::Regulatory.as_str()));
    }

    #[test]
    fn test_project_input_accepts_missing_goals() {
        let input: ProjectInput = serde_json::from_str(
            r#"{"projectDescription": "Build a CLI", "targetSkills": ["Rust"]}"#,
        )
        .unwrap();
        assert_eq!(input.goals(), "");
        assert_eq!(input.target_skills, vec!["Rust"]);
    }

    #[test]
    fn test_project_input_rejects_missing_skills() {
        let result: Result<ProjectInput, _> =
            serde_json::from_str(r#"{"projectDescription": "Build a CLI"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_combined_text_is_lowercased() {
        let input = ProjectInput::new("Build an API", Some("Serve CUSTOMERS"), &[]);
        assert_eq!(input.combined_text(), "build an api serve customers");
    }

    #[test]
    fn test_skill_record_serializes_camel_case() {
        let record = SkillRecord {
            id: "skill_1".to_string(),
            name: "React".to_string(),
            category: SkillCategory::Technical,
            proficiency: Proficiency::Intermediate,
            demonstration_method: DemonstrationMethod::Code,
            requirements: "Build it".to_string(),
            ai_prompt: Some("Show it".to_string()),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["demonstrationMethod"], "code");
        assert_eq!(value["aiPrompt"], "Show it");
        assert_eq!(value["proficiency"], "intermediate");
    }
}
