//! Project plan and seeded skill demonstrations for a new project.

use crate::analysis::models::SkillRecord;
use crate::models::project::{DemonstrationStatus, SkillDemonstration};

/// Ordered plan: three setup steps, one step per skill, four delivery steps.
pub fn generate_plan(project_name: &str, skills: &[SkillRecord]) -> Vec<String> {
    let mut plan = Vec::with_capacity(skills.len() + 7);
    plan.push(format!(
        "Project Setup: Initialize the {project_name} project with proper structure and dependencies"
    ));
    plan.push(
        "Requirements Analysis: Define detailed specifications and user stories based on analysis recommendations"
            .to_string(),
    );
    plan.push(
        "Architecture Design: Plan the system architecture using suggested technologies".to_string(),
    );
    plan.extend(
        skills
            .iter()
            .map(|skill| format!("{} Implementation: {}", skill.name, skill.requirements)),
    );
    plan.extend(
        [
            "Integration Testing: Ensure all components work together seamlessly",
            "Documentation: Create comprehensive project documentation with skill verification evidence",
            "Quality Assurance: Conduct thorough testing and prepare for skill verification",
            "Deployment & Presentation: Deploy the project and present skill demonstrations for analysis",
        ]
        .map(str::to_string),
    );
    plan
}

/// One planned, unverified demonstration per detected skill.
pub fn seed_demonstrations(skills: &[SkillRecord]) -> Vec<SkillDemonstration> {
    skills
        .iter()
        .map(|skill| SkillDemonstration {
            id: skill.id.clone(),
            name: skill.name.clone(),
            category: skill.category,
            proficiency: skill.proficiency,
            demonstration_method: Some(skill.demonstration_method),
            requirements: skill.requirements.clone(),
            ai_prompt: skill.ai_prompt.clone(),
            status: DemonstrationStatus::Planned,
            evidence_url: None,
            verified: false,
            rating: None,
            verification_feedback: None,
        })
        .collect()
}
