//! Complexity & Requirement Generator.
//!
//! Complexity is a 1–5 rating derived from skill keywords, raised for regulated
//! professions. Requirement, verification-strategy and criteria texts are plain
//! templates keyed by skill category; nothing downstream parses them.

use crate::analysis::categorizer::categorize_skill;
use crate::analysis::models::SkillCategory;
use crate::analysis::profession::{contains_any, ProfessionTag};

const DEFAULT_COMPLEXITY: u8 = 3;

/// Rates a skill from 2 (basic) to 5 (expert). Checks run from highest to lowest.
pub fn calculate_complexity(skill: &str, profession: ProfessionTag) -> u8 {
    let skill_lower = skill.to_lowercase();

    if contains_any(&skill_lower, &["advanced", "expert", "senior"]) {
        return 5;
    }
    if contains_any(&skill_lower, &["architecture", "strategy", "leadership"]) {
        return 4;
    }

    if profession.is_complex() {
        if contains_any(&skill_lower, &["clinical", "surgical", "diagnostic"]) {
            return 5;
        }
        if contains_any(&skill_lower, &["regulatory", "compliance", "audit"]) {
            return 4;
        }
    }

    if contains_any(&skill_lower, &["management", "analysis", "design"]) {
        return 3;
    }
    if contains_any(&skill_lower, &["basic", "fundamental", "entry"]) {
        return 2;
    }

    DEFAULT_COMPLEXITY
}

/// What the learner must show to evidence `skill`.
pub fn generate_requirement(skill: &str, profession: ProfessionTag) -> String {
    let p = profession.as_str();
    match categorize_skill(skill, profession) {
        SkillCategory::Technical => format!(
            "Demonstrate {skill} through practical application with clear methodology, documentation of process, and measurable outcomes relevant to {p}"
        ),
        SkillCategory::Creative => format!(
            "Showcase {skill} through a comprehensive portfolio demonstrating range, creativity, and professional application in {p} context"
        ),
        SkillCategory::Analytical => format!(
            "Present {skill} through detailed analysis, methodology explanation, data interpretation, and actionable insights for {p}"
        ),
        SkillCategory::Physical => format!(
            "Demonstrate {skill} through safe, competent performance with proper technique and adherence to {p} standards"
        ),
        SkillCategory::Regulatory => format!(
            "Show {skill} knowledge through compliance examples, risk assessment, and practical application of regulations in {p}"
        ),
        SkillCategory::Soft => format!(
            "Demonstrate {skill} through specific examples, measurable outcomes, and real-world application in {p} scenarios"
        ),
        SkillCategory::Language => format!(
            "Demonstrate {skill} proficiency through clear communication, professional usage, and contextual application in {p}"
        ),
        SkillCategory::Certification => format!(
            "Provide evidence of {skill} certification and demonstrate practical application of certified knowledge in {p}"
        ),
    }
}

/// Prompt describing how a reviewer (human or oracle) should verify `skill`.
pub fn generate_verification_strategy(skill: &str, profession: ProfessionTag) -> String {
    let p = profession.as_str();
    match categorize_skill(skill, profession) {
        SkillCategory::Technical => format!(
            "Create a comprehensive demonstration of {skill} showing problem-solving approach, technical competency, and industry best practices for {p}"
        ),
        SkillCategory::Creative => format!(
            "Develop a portfolio piece showcasing {skill} with creative process documentation, iteration examples, and professional application in {p}"
        ),
        SkillCategory::Analytical => format!(
            "Present a detailed analysis using {skill} with clear methodology, data sources, interpretation, and actionable recommendations for {p}"
        ),
        SkillCategory::Physical => format!(
            "Perform {skill} demonstration with safety protocols, proper technique, and quality standards relevant to {p}"
        ),
        SkillCategory::Regulatory => format!(
            "Demonstrate {skill} through compliance scenario, risk assessment, and practical application of industry regulations in {p}"
        ),
        SkillCategory::Soft => format!(
            "Present specific examples of {skill} application with context, challenges faced, actions taken, and measurable results in {p}"
        ),
        SkillCategory::Language => format!(
            "Demonstrate {skill} through professional communication examples, cultural competency, and effective usage in {p} contexts"
        ),
        SkillCategory::Certification => format!(
            "Show certification credentials and demonstrate practical application through real-world examples and continued professional development in {p}"
        ),
    }
}

fn category_criteria(category: SkillCategory) -> &'static [&'static str] {
    match category {
        SkillCategory::Technical => &[
            "Proper methodology and best practices application",
            "Problem-solving approach and troubleshooting",
            "Documentation and knowledge transfer capability",
        ],
        SkillCategory::Creative => &[
            "Originality and creative problem-solving",
            "Professional quality and attention to detail",
            "Ability to iterate and incorporate feedback",
        ],
        SkillCategory::Analytical => &[
            "Data accuracy and interpretation skills",
            "Clear methodology and logical reasoning",
            "Actionable insights and recommendations",
        ],
        SkillCategory::Physical => &[
            "Safety protocols and proper technique",
            "Consistency and quality of performance",
            "Adherence to industry standards",
        ],
        SkillCategory::Regulatory => &[
            "Compliance knowledge and application",
            "Risk assessment and mitigation",
            "Current regulatory understanding",
        ],
        SkillCategory::Soft => &[
            "Specific examples with measurable outcomes",
            "Interpersonal effectiveness demonstration",
            "Adaptability and emotional intelligence",
        ],
        SkillCategory::Language | SkillCategory::Certification => &[],
    }
}

/// Three base criteria followed by up to three category-specific ones.
pub fn generate_verification_criteria(skill: &str, profession: ProfessionTag) -> Vec<String> {
    let mut criteria = vec![
        format!("Clear demonstration of {skill} knowledge and practical application"),
        "Professional presentation and explanation of methodology".to_string(),
        "Evidence of competency and real-world experience".to_string(),
    ];
    criteria.extend(
        category_criteria(categorize_skill(skill, profession))
            .iter()
            .map(|c| c.to_string()),
    );
    criteria
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_complexity_is_medium() {
        assert_eq!(calculate_complexity("React", ProfessionTag::General), 3);
        assert_eq!(calculate_complexity("", ProfessionTag::General), 3);
    }

    #[test]
    fn test_high_complexity_keywords() {
        assert_eq!(calculate_complexity("Advanced Rust", ProfessionTag::General), 5);
        assert_eq!(calculate_complexity("Senior Leadership", ProfessionTag::General), 5);
        assert_eq!(calculate_complexity("Leadership", ProfessionTag::General), 4);
        assert_eq!(calculate_complexity("System Architecture", ProfessionTag::General), 4);
    }

    #[test]
    fn test_low_complexity_keywords() {
        assert_eq!(calculate_complexity("Basic HTML", ProfessionTag::General), 2);
        assert_eq!(calculate_complexity("Entry-level Sales", ProfessionTag::General), 2);
    }

    #[test]
    fn test_complex_profession_raises_domain_skills() {
        assert_eq!(calculate_complexity("Clinical Assessment", ProfessionTag::Healthcare), 5);
        assert_eq!(calculate_complexity("Clinical Assessment", ProfessionTag::Design), 3);
        assert_eq!(calculate_complexity("Audit Preparation", ProfessionTag::Finance), 4);
        assert_eq!(calculate_complexity("Audit Preparation", ProfessionTag::Retail), 3);
    }

    #[test]
    fn test_complexity_always_in_range() {
        for skill in ["", "basic", "expert", "compliance", "design", "whatever"] {
            for profession in [ProfessionTag::Legal, ProfessionTag::General] {
                let c = calculate_complexity(skill, profession);
                assert!((1..=5).contains(&c));
            }
        }
    }

    #[test]
    fn test_requirement_interpolates_skill_and_profession() {
        let text = generate_requirement("React", ProfessionTag::Sales);
        assert!(text.starts_with("Demonstrate React through practical application"));
        assert!(text.ends_with("relevant to sales"));

        let soft = generate_requirement("Leadership", ProfessionTag::General);
        assert!(soft.contains("real-world application in general scenarios"));
    }

    #[test]
    fn test_verification_strategy_uses_category_template() {
        let text = generate_verification_strategy("Graphic Design", ProfessionTag::Design);
        assert!(text.starts_with("Develop a portfolio piece showcasing Graphic Design"));
    }

    #[test]
    fn test_criteria_base_plus_category() {
        let technical = generate_verification_criteria("React", ProfessionTag::General);
        assert_eq!(technical.len(), 6);
        assert_eq!(
            technical[0],
            "Clear demonstration of React knowledge and practical application"
        );
        assert_eq!(technical[3], "Proper methodology and best practices application");

        let soft = generate_verification_criteria("Leadership", ProfessionTag::General);
        assert_eq!(soft[3], "Specific examples with measurable outcomes");
    }

    #[test]
    fn test_language_and_certification_get_base_criteria_only() {
        assert_eq!(
            generate_verification_criteria("Spanish Translation", ProfessionTag::General).len(),
            3
        );
        assert_eq!(
            generate_verification_criteria("Certified Scrum Master", ProfessionTag::General).len(),
            3
        );
    }
}
