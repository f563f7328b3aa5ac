//! Project Scope Analyzer: orchestrates the classifier, categorizer, method
//! selector and complexity generator into one `ScopeAnalysis`.
//!
//! Every keyword predicate scans the lowercased `description + " " + goals`.
//! Total over strings: no input produces an error.

use tracing::debug;

use crate::analysis::categorizer::categorize_skill;
use crate::analysis::complexity::{
    calculate_complexity, generate_requirement, generate_verification_criteria,
    generate_verification_strategy,
};
use crate::analysis::demonstration::select_demonstration_method;
use crate::analysis::models::{
    Proficiency, ProjectInput, ScopeAnalysis, SkillMappingEntry, SkillRecord,
};
use crate::analysis::profession::{contains_any, detect_profession, ProfessionTag};

pub const MAX_TECHNOLOGIES: usize = 8;

const BASE_CLARITY: i32 = 5;
/// Feasibility is tracked in half-points so the 0.5 penalties stay exact.
const BASE_FEASIBILITY_HALVES: i32 = 14;

pub const FALLBACK_RISK: &str =
    "Consider time management and resource allocation for comprehensive skill demonstration";

// ────────────────────────────────────────────────────────────────────────────
// Scores
// ────────────────────────────────────────────────────────────────────────────

/// Description quality, 0–10. Lengths are counted in characters.
pub fn clarity_score(description: &str, goals: &str, text: &str) -> u8 {
    let mut score = BASE_CLARITY;
    let description_len = description.chars().count();

    if description_len > 100 {
        score += 1;
    }
    if description_len > 200 {
        score += 1;
    }
    if goals.chars().count() > 50 {
        score += 1;
    }
    if contains_any(text, &["objective", "goal"]) {
        score += 1;
    }
    if contains_any(text, &["stakeholder", "client"]) {
        score += 1;
    }
    if contains_any(text, &["outcome", "result"]) {
        score += 1;
    }

    score.clamp(0, 10) as u8
}

/// Scope realism, 1–10, rounded half up.
pub fn feasibility_score(text: &str, skill_count: usize, profession: ProfessionTag) -> u8 {
    let mut halves = BASE_FEASIBILITY_HALVES;

    if skill_count > 8 {
        halves -= 2;
    }
    if skill_count < 3 {
        halves -= 2;
    }
    if profession.is_complex() {
        halves -= 1;
    }
    if contains_any(text, &["complex", "advanced"]) {
        halves -= 2;
    }
    if contains_any(text, &["simple", "basic"]) {
        halves += 2;
    }
    if contains_any(text, &["regulatory", "compliance"]) {
        halves -= 1;
    }

    let rounded = (halves + 1).div_euclid(2);
    rounded.clamp(1, 10) as u8
}

// ────────────────────────────────────────────────────────────────────────────
// Risks & technologies
// ────────────────────────────────────────────────────────────────────────────

fn profession_risks(profession: ProfessionTag) -> &'static [&'static str] {
    match profession {
        ProfessionTag::Healthcare => &[
            "Patient safety considerations",
            "Regulatory compliance requirements",
        ],
        ProfessionTag::Legal => &["Ethical considerations", "Confidentiality requirements"],
        ProfessionTag::Finance => &["Regulatory compliance", "Data security requirements"],
        ProfessionTag::Education => &[
            "Student privacy considerations",
            "Accessibility requirements",
        ],
        ProfessionTag::Engineering => &["Safety protocols", "Technical complexity"],
        _ => &[],
    }
}

/// Ordered risk list. Never empty.
pub fn identify_risks(text: &str, skill_count: usize, profession: ProfessionTag) -> Vec<String> {
    let mut risks: Vec<String> = Vec::new();

    if skill_count > 6 {
        risks.push(
            "Large number of skills may require extended development time and careful prioritization"
                .to_string(),
        );
    }
    if contains_any(text, &["new", "learning"]) {
        risks.push(
            "Learning curve for new competencies may impact project timeline and require additional resources"
                .to_string(),
        );
    }
    if contains_any(text, &["integration", "api"]) {
        risks.push(
            "Third-party integrations may introduce dependencies and complexity".to_string(),
        );
    }
    if contains_any(text, &["scale", "performance"]) {
        risks.push("Performance optimization may require additional expertise".to_string());
    }
    risks.extend(profession_risks(profession).iter().map(|r| r.to_string()));

    if risks.is_empty() {
        risks.push(FALLBACK_RISK.to_string());
    }
    risks
}

const TECHNOLOGY_CLUSTERS: &[(&[&str], &[&str])] = &[
    (
        &["web", "frontend", "ui"],
        &["React", "TypeScript", "Tailwind CSS", "Vite"],
    ),
    (
        &["backend", "api", "server"],
        &["Node.js", "Express.js", "PostgreSQL", "REST APIs"],
    ),
    (
        &["data", "database", "store"],
        &["PostgreSQL", "MongoDB", "Redis", "Database Design"],
    ),
    (
        &["mobile", "app"],
        &["React Native", "Flutter", "Mobile UI/UX"],
    ),
    (
        &["deploy", "production", "scale"],
        &["Docker", "CI/CD", "Git", "Testing"],
    ),
];

const DEFAULT_TECHNOLOGIES: &[&str] = &["Git", "Documentation", "Testing", "Code Review"];

/// Keyword-triggered technology clusters, deduplicated in first-seen order, at most 8.
pub fn suggest_technologies(text: &str) -> Vec<String> {
    let mut suggestions: Vec<&str> = TECHNOLOGY_CLUSTERS
        .iter()
        .filter(|(triggers, _)| contains_any(text, triggers))
        .flat_map(|(_, cluster)| cluster.iter().copied())
        .collect();

    if suggestions.is_empty() {
        suggestions.extend_from_slice(DEFAULT_TECHNOLOGIES);
    }

    let mut unique: Vec<String> = Vec::with_capacity(MAX_TECHNOLOGIES);
    for tech in suggestions {
        if unique.len() == MAX_TECHNOLOGIES {
            break;
        }
        if !unique.iter().any(|t| t == tech) {
            unique.push(tech.to_string());
        }
    }
    unique
}

// ────────────────────────────────────────────────────────────────────────────
// Orchestration
// ────────────────────────────────────────────────────────────────────────────

fn skill_record(index: usize, skill: &str, profession: ProfessionTag) -> SkillRecord {
    SkillRecord {
        id: format!("skill_{}", index + 1),
        name: skill.to_string(),
        category: categorize_skill(skill, profession),
        proficiency: Proficiency::Intermediate,
        demonstration_method: select_demonstration_method(skill, profession),
        requirements: generate_requirement(skill, profession),
        ai_prompt: Some(generate_verification_strategy(skill, profession)),
    }
}

fn skill_mapping_entry(skill: &str, profession: ProfessionTag) -> SkillMappingEntry {
    SkillMappingEntry {
        skill: skill.to_string(),
        demonstration_method: select_demonstration_method(skill, profession),
        complexity_level: calculate_complexity(skill, profession),
        verification_criteria: generate_verification_criteria(skill, profession),
    }
}

/// Runs the full rule-based analysis for one project.
pub fn analyze_scope(input: &ProjectInput) -> ScopeAnalysis {
    let text = input.combined_text();
    let profession = detect_profession(&input.project_description, input.goals());
    let skills = &input.target_skills;

    debug!(
        %profession,
        skills = skills.len(),
        "analyzing project scope"
    );

    ScopeAnalysis {
        clarity_score: clarity_score(&input.project_description, input.goals(), &text),
        feasibility_score: feasibility_score(&text, skills.len(), profession),
        identified_risks: identify_risks(&text, skills.len(), profession),
        suggested_technologies: suggest_technologies(&text),
        detected_skills: skills
            .iter()
            .enumerate()
            .map(|(i, skill)| skill_record(i, skill, profession))
            .collect(),
        skill_mapping: skills
            .iter()
            .map(|skill| skill_mapping_entry(skill, profession))
            .collect(),
    }
}
