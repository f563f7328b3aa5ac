//! Per-skill guidance shown next to each detected skill while drafting.

use serde::Serialize;

use crate::analysis::models::{DemonstrationMethod, ScopeAnalysis, SkillCategory};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillFeedback {
    pub skill: String,
    pub feedback: String,
}

const HIGH_COMPLEXITY_FEEDBACK: &str = "High complexity skill - consider breaking into smaller demonstrations or focusing on specific aspects";

/// First matching rule wins: high complexity, code+technical, video+soft, generic.
pub fn skill_feedback(analysis: &ScopeAnalysis) -> Vec<SkillFeedback> {
    analysis
        .detected_skills
        .iter()
        .map(|skill| {
            let complexity = analysis.complexity_of(&skill.name);
            let feedback = match (skill.demonstration_method, skill.category) {
                _ if complexity >= 4 => HIGH_COMPLEXITY_FEEDBACK.to_string(),
                (DemonstrationMethod::Code, SkillCategory::Technical) => format!(
                    "Perfect for code demonstration - build a feature that showcases {} expertise",
                    skill.name
                ),
                (DemonstrationMethod::Video, SkillCategory::Soft) => format!(
                    "Great for video demo - show real examples of {} in action",
                    skill.name
                ),
                (method, _) => format!("Well-suited for {} demonstration", method.as_str()),
            };
            SkillFeedback {
                skill: skill.name.clone(),
                feedback,
            }
        })
        .collect()
}
