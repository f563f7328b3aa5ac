//! Demonstration-Method Selector: picks the evidence medium for a skill.
//!
//! Lookup order:
//! 1. profession-specific overrides (only a handful of professions have them)
//! 2. universal skill-keyword table
//! 3. fallback by category: technical skills are shown as `code`, everything else as `video`

use crate::analysis::categorizer::categorize_skill;
use crate::analysis::models::{DemonstrationMethod, SkillCategory};
use crate::analysis::profession::{contains_any, ProfessionTag};

use DemonstrationMethod as M;

type KeywordRule = (&'static str, DemonstrationMethod);

const HEALTHCARE_OVERRIDES: &[KeywordRule] = &[
    ("clinical", M::CaseStudy),
    ("patient", M::Simulation),
    ("medical", M::CaseStudy),
    ("diagnosis", M::CaseStudy),
];

const EDUCATION_OVERRIDES: &[KeywordRule] = &[
    ("teaching", M::Video),
    ("curriculum", M::Documentation),
    ("lesson", M::Presentation),
    ("classroom", M::Video),
];

const LEGAL_OVERRIDES: &[KeywordRule] = &[
    ("legal", M::CaseStudy),
    ("contract", M::Documentation),
    ("litigation", M::CaseStudy),
    ("research", M::Documentation),
];

const DESIGN_OVERRIDES: &[KeywordRule] = &[
    ("design", M::Portfolio),
    ("creative", M::Portfolio),
    ("visual", M::Portfolio),
    ("graphic", M::Portfolio),
];

const SALES_OVERRIDES: &[KeywordRule] = &[
    ("sales", M::Video),
    ("negotiation", M::Video),
    ("presentation", M::Presentation),
    ("customer", M::CaseStudy),
];

/// Universal skill-keyword table, checked after profession overrides.
const UNIVERSAL_METHODS: &[(&[&str], DemonstrationMethod)] = &[
    (&["programming", "coding", "development"], M::Code),
    (&["presentation", "speaking", "communication"], M::Presentation),
    (&["design", "creative", "visual"], M::Portfolio),
    (&["analysis", "research", "documentation"], M::Documentation),
    (&["performance", "demonstration", "practical"], M::Video),
    (&["assessment", "evaluation", "testing"], M::Assessment),
    (&["simulation", "modeling", "scenario"], M::Simulation),
    (&["live demo", "demo"], M::LiveDemo),
];

fn profession_overrides(profession: ProfessionTag) -> &'static [KeywordRule] {
    match profession {
        ProfessionTag::Healthcare => HEALTHCARE_OVERRIDES,
        ProfessionTag::Education => EDUCATION_OVERRIDES,
        ProfessionTag::Legal => LEGAL_OVERRIDES,
        ProfessionTag::Design => DESIGN_OVERRIDES,
        ProfessionTag::Sales => SALES_OVERRIDES,
        _ => &[],
    }
}

/// Selects the demonstration method for `skill` in the context of `profession`. Total.
pub fn select_demonstration_method(skill: &str, profession: ProfessionTag) -> DemonstrationMethod {
    let skill_lower = skill.to_lowercase();

    if let Some((_, method)) = profession_overrides(profession)
        .iter()
        .find(|(keyword, _)| skill_lower.contains(keyword))
    {
        return *method;
    }

    if let Some((_, method)) = UNIVERSAL_METHODS
        .iter()
        .find(|(keywords, _)| contains_any(&skill_lower, keywords))
    {
        return *method;
    }

    fallback_method(categorize_skill(skill, profession))
}

/// Technical skills are evidenced in code; anything else defaults to video.
pub fn fallback_method(category: SkillCategory) -> DemonstrationMethod {
    match category {
        SkillCategory::Technical => M::Code,
        _ => M::Video,
    }
}
