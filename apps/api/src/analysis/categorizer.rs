//! Skill Categorizer: assigns one of eight categories to a skill name.
//!
//! Profession is accepted for tracing context only; category is a function of
//! the skill name alone.

use tracing::trace;

use crate::analysis::models::SkillCategory;
use crate::analysis::profession::{contains_any, ProfessionTag};

/// Ordered (category, keywords) table. First match wins; `Technical` is the fallback.
pub const CATEGORY_KEYWORDS: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::Technical,
        &[
            "software", "programming", "coding", "system", "database", "network", "security",
            "analysis", "research", "methodology", "process", "procedure", "equipment", "tool",
            "platform", "application",
        ],
    ),
    (
        SkillCategory::Creative,
        &[
            "design", "creative", "artistic", "visual", "graphic", "photography", "video",
            "writing", "content", "branding", "storytelling", "innovation",
        ],
    ),
    (
        SkillCategory::Analytical,
        &[
            "analysis", "data", "research", "statistics", "metrics", "reporting", "evaluation",
            "assessment", "investigation", "audit",
        ],
    ),
    (
        SkillCategory::Physical,
        &[
            "physical", "manual", "dexterity", "coordination", "strength", "endurance",
            "athletic", "motor", "hands-on",
        ],
    ),
    (
        SkillCategory::Regulatory,
        &[
            "compliance", "regulation", "legal", "policy", "standard", "audit", "governance",
            "risk", "safety", "quality assurance",
        ],
    ),
    (
        SkillCategory::Language,
        &[
            "language", "translation", "interpretation", "multilingual", "communication",
            "writing", "speaking",
        ],
    ),
    (
        SkillCategory::Certification,
        &[
            "certified", "certification", "license", "accredited", "credential", "qualification",
        ],
    ),
    (
        SkillCategory::Soft,
        &[
            "leadership", "communication", "management", "collaboration", "teamwork",
            "negotiation", "customer service", "problem solving", "critical thinking",
            "time management",
        ],
    ),
];

/// Categorizes a skill by name. Total: unrecognised skills are `Technical`.
pub fn categorize_skill(skill: &str, profession: ProfessionTag) -> SkillCategory {
    let skill_lower = skill.to_lowercase();
    let category = CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| contains_any(&skill_lower, keywords))
        .map(|(category, _)| *category)
        .unwrap_or(SkillCategory::Technical);
    trace!(skill, %profession, category = category.as_str(), "categorized skill");
    category
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categorize(skill: &str) -> SkillCategory {
        categorize_skill(skill, ProfessionTag::General)
    }

    #[test]
    fn test_unrecognised_skill_is_technical() {
        assert_eq!(categorize("React"), SkillCategory::Technical);
        assert_eq!(categorize(""), SkillCategory::Technical);
        assert_eq!(categorize("Basket Weaving"), SkillCategory::Technical);
    }

    #[test]
    fn test_leadership_is_soft() {
        assert_eq!(categorize("Leadership"), SkillCategory::Soft);
        assert_eq!(categorize("Time Management"), SkillCategory::Soft);
    }

    #[test]
    fn test_each_category_is_reachable() {
        assert_eq!(categorize("Database Tuning"), SkillCategory::Technical);
        assert_eq!(categorize("Graphic Design"), SkillCategory::Creative);
        assert_eq!(categorize("Data Reporting"), SkillCategory::Analytical);
        assert_eq!(categorize("Manual Dexterity"), SkillCategory::Physical);
        assert_eq!(categorize("HIPAA Compliance"), SkillCategory::Regulatory);
        assert_eq!(categorize("Spanish Translation"), SkillCategory::Language);
        assert_eq!(categorize("Certified Scrum Master"), SkillCategory::Certification);
        assert_eq!(categorize("Negotiation"), SkillCategory::Soft);
    }

    #[test]
    fn test_table_order_breaks_ties() {
        // "analysis" appears in both technical and analytical; technical is listed first.
        assert_eq!(categorize("Financial Analysis"), SkillCategory::Technical);
        // "communication" appears in language and soft; language is listed first.
        assert_eq!(categorize("Communication"), SkillCategory::Language);
        // "writing" appears in creative and language; creative wins.
        assert_eq!(categorize("Technical Writing"), SkillCategory::Creative);
    }

    #[test]
    fn test_profession_does_not_change_category() {
        for profession in [
            ProfessionTag::Healthcare,
            ProfessionTag::Legal,
            ProfessionTag::Design,
            ProfessionTag::General,
        ] {
            assert_eq!(
                categorize_skill("Leadership", profession),
                SkillCategory::Soft
            );
        }
    }
}
