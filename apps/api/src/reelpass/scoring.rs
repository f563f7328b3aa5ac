//! ReelPass Aggregate Scorer: stateless recomputation over projects and
//! caller-supplied signals.
//!
//! Component caps: ReelProjects 500, ReelPersona 200, FoundationalKnowledge 150,
//! ExperienceDiversity 100, ContinuousLearning 50. Total is the plain sum, so
//! it never exceeds 1000. Absent signal sources score zero.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::analysis::models::SkillCategory;
use crate::models::project::{ImpactLevel, Project, ProjectScale};
use crate::reelpass::models::*;

pub const REEL_PROJECTS_CAP: u32 = 500;
pub const REEL_PERSONA_CAP: u32 = 200;
pub const FOUNDATIONAL_KNOWLEDGE_CAP: u32 = 150;
pub const EXPERIENCE_DIVERSITY_CAP: u32 = 100;
pub const CONTINUOUS_LEARNING_CAP: u32 = 50;

const MAX_SKILL_POINTS: u32 = 50;
const TOP_SKILLS: usize = 6;
const POINTS_PER_RATING: u32 = 10;
const VALIDATION_POINTS: u32 = 25;
const VALIDATION_CAP: u32 = 50;
const LIVE_DEMO_POINTS: u32 = 50;

const PERSONA_PART_CAP: u32 = 100;

const CERTIFICATION_POINTS: u32 = 10;
const CERTIFICATION_CAP: u32 = 75;
const REPUTABLE_BONUS: u32 = 10;
const DEGREE_CAP: u32 = 75;

const POINTS_PER_YEAR: f64 = 5.0;
const YEARS_CAP: f64 = 50.0;
const POINTS_PER_CATEGORY: u32 = 10;
const DIVERSITY_CAP: u32 = 50;

const COURSE_POINTS: u32 = 5;
const COURSE_CAP: u32 = 15;
const WORKSHOP_POINTS: u32 = 10;
const WORKSHOP_CAP: u32 = 10;
const ENGAGEMENT_FLAG_POINTS: u32 = 5;

/// Closed, contiguous bands checked in order.
const LEVEL_BANDS: [(ReelPassLevel, u32, u32, &str); 5] = [
    (ReelPassLevel::Aspiring, 0, 199, "Aspiring Professional"),
    (ReelPassLevel::Emerging, 200, 399, "Emerging Professional"),
    (ReelPassLevel::Competent, 400, 599, "Competent Professional"),
    (ReelPassLevel::Skilled, 600, 799, "Skilled Professional"),
    (ReelPassLevel::Expert, 800, 1000, "Expert Professional"),
];

fn saturating_count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

// ────────────────────────────────────────────────────────────────────────────
// ReelProjects (500)
// ────────────────────────────────────────────────────────────────────────────

pub fn reel_projects_score(projects: &[Project]) -> ReelProjectsScore {
    let mut demonstrated: Vec<DemonstratedSkill> = Vec::new();
    let mut highest_scale = ProjectScale::Small;
    let mut highest_impact = ImpactLevel::Low;
    let mut validations: u32 = 0;
    let mut has_live_demo = false;

    for project in projects {
        for skill in &project.skill_demonstrations {
            let rating = match skill.rating {
                Some(r) if skill.verified && r > 0 => u32::from(r),
                _ => continue,
            };
            if demonstrated.iter().any(|d| d.skill_name == skill.name) {
                continue;
            }
            demonstrated.push(DemonstratedSkill {
                skill_name: skill.name.clone(),
                points: (rating * POINTS_PER_RATING).min(MAX_SKILL_POINTS),
                verified: true,
            });
        }

        if let Some(scale) = project.scale.filter(|s| *s != ProjectScale::Unknown) {
            highest_scale = highest_scale.max(scale);
        }
        if let Some(impact) = project.impact_level() {
            highest_impact = highest_impact.max(impact);
        }
        validations =
            validations.saturating_add(saturating_count(project.verified_validation_count()));
        has_live_demo |= project.live_demo.is_some();
    }

    // Stable sort keeps first-seen order among equal points.
    demonstrated.sort_by(|a, b| b.points.cmp(&a.points));
    demonstrated.truncate(TOP_SKILLS);

    let skill_demonstration: u32 = demonstrated.iter().map(|d| d.points).sum();
    let project_impact = highest_scale.points() + highest_impact.points();
    let mut verification_bonus = validations.saturating_mul(VALIDATION_POINTS).min(VALIDATION_CAP);
    if has_live_demo {
        verification_bonus += LIVE_DEMO_POINTS;
    }

    ReelProjectsScore {
        total_score: (skill_demonstration + project_impact + verification_bonus)
            .min(REEL_PROJECTS_CAP),
        breakdown: ReelProjectsBreakdown {
            skill_demonstration,
            project_impact,
            verification_bonus,
        },
        details: ReelProjectsDetails {
            demonstrated_skills: demonstrated,
            project_scale: highest_scale,
            project_impact: highest_impact,
            external_validations: validations,
            live_demo: has_live_demo,
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// ReelPersona (200)
// ────────────────────────────────────────────────────────────────────────────

pub fn reel_persona_score(persona: Option<&PersonaData>) -> ReelPersonaScore {
    let default = PersonaData::default();
    let persona = persona.unwrap_or(&default);

    let behavioral_assessment = persona.behavioral_score.min(PERSONA_PART_CAP);
    let peer_feedback = persona.feedback_score.min(PERSONA_PART_CAP);

    ReelPersonaScore {
        total_score: behavioral_assessment + peer_feedback,
        breakdown: ReelPersonaBreakdown {
            behavioral_assessment,
            peer_feedback,
        },
        details: ReelPersonaDetails {
            personality_traits: persona.traits,
            work_traits: persona.work_traits,
            feedback_count: persona.feedback_count,
            managerial_feedback: persona.has_managerial_feedback,
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// FoundationalKnowledge (150)
// ────────────────────────────────────────────────────────────────────────────

pub fn foundational_knowledge_score(
    credentials: Option<&Credentials>,
) -> FoundationalKnowledgeScore {
    let default = Credentials::default();
    let credentials = credentials.unwrap_or(&default);

    let certifications: Vec<ScoredCertification> = credentials
        .certifications
        .iter()
        .map(|c| ScoredCertification {
            name: c.name.clone(),
            points: CERTIFICATION_POINTS,
            verified: c.verified,
        })
        .collect();

    let degrees: Vec<ScoredDegree> = credentials
        .degrees
        .iter()
        .map(|d| ScoredDegree {
            level: d.level,
            field: d.field.clone(),
            institution: d.institution.clone(),
            points: d.level.points() + if d.is_reputable { REPUTABLE_BONUS } else { 0 },
        })
        .collect();

    let certification_score = certifications
        .iter()
        .fold(0u32, |acc, c| acc.saturating_add(c.points))
        .min(CERTIFICATION_CAP);
    let degree_score = degrees
        .iter()
        .fold(0u32, |acc, d| acc.saturating_add(d.points))
        .min(DEGREE_CAP);

    FoundationalKnowledgeScore {
        total_score: certification_score + degree_score,
        breakdown: FoundationalKnowledgeBreakdown {
            certifications: certification_score,
            academic_degrees: degree_score,
        },
        details: FoundationalKnowledgeDetails {
            certifications,
            degrees,
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// ExperienceDiversity (100)
// ────────────────────────────────────────────────────────────────────────────

/// Categories are collected from every demonstration, verified or not, in first-seen order.
pub fn experience_diversity_score(
    experience: Option<&Experience>,
    projects: &[Project],
) -> ExperienceDiversityScore {
    let total_years = experience
        .map(|e| e.years)
        .filter(|y| y.is_finite() && *y > 0.0)
        .unwrap_or(0.0);
    // Bounded to [0, 50] before the cast.
    let years_score = (total_years * POINTS_PER_YEAR).min(YEARS_CAP).round() as u32;

    let mut categories: Vec<SkillCategory> = Vec::new();
    for skill in projects.iter().flat_map(|p| &p.skill_demonstrations) {
        if !categories.contains(&skill.category) {
            categories.push(skill.category);
        }
    }
    let unique = saturating_count(categories.len());
    let diversity_score = unique.saturating_mul(POINTS_PER_CATEGORY).min(DIVERSITY_CAP);

    ExperienceDiversityScore {
        total_score: years_score + diversity_score,
        breakdown: ExperienceDiversityBreakdown {
            years_of_experience: years_score,
            skill_diversity: diversity_score,
        },
        details: ExperienceDiversityDetails {
            total_years,
            skill_categories: categories,
            unique_skill_count: unique,
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// ContinuousLearning (50)
// ────────────────────────────────────────────────────────────────────────────

pub fn continuous_learning_score(
    learning: Option<&LearningData>,
    computed_at: DateTime<Utc>,
) -> ContinuousLearningScore {
    let (learning_activity, platform_engagement) = match learning {
        Some(data) => {
            let courses = data.courses_completed.saturating_mul(COURSE_POINTS).min(COURSE_CAP);
            let workshops = data
                .workshops_attended
                .saturating_mul(WORKSHOP_POINTS)
                .min(WORKSHOP_CAP);
            let flags = [
                data.profile_complete,
                data.verification_steps > 2,
                data.community_participation,
                data.regular_updates,
                data.portfolio_updates,
            ];
            let engagement =
                saturating_count(flags.iter().filter(|f| **f).count()) * ENGAGEMENT_FLAG_POINTS;
            (courses + workshops, engagement)
        }
        None => (0, 0),
    };

    ContinuousLearningScore {
        total_score: learning_activity + platform_engagement,
        breakdown: ContinuousLearningBreakdown {
            learning_activity,
            platform_engagement,
        },
        details: ContinuousLearningDetails {
            courses_completed: learning.map(|l| l.courses_completed).unwrap_or(0),
            workshops_attended: learning.map(|l| l.workshops_attended).unwrap_or(0),
            profile_completeness: learning.map(|l| l.profile_completeness).unwrap_or(0),
            community_participation: learning.map(|l| l.community_participation).unwrap_or(false),
            last_activity_date: learning
                .and_then(|l| l.last_activity_date)
                .unwrap_or(computed_at),
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Aggregate
// ────────────────────────────────────────────────────────────────────────────

/// Band for `total_score`. Scores above the top band fall back to aspiring.
pub fn level_for(total_score: u32) -> (ReelPassLevel, &'static str) {
    LEVEL_BANDS
        .iter()
        .find(|(_, min, max, _)| (*min..=*max).contains(&total_score))
        .map(|(level, _, _, name)| (*level, *name))
        .unwrap_or((ReelPassLevel::Aspiring, LEVEL_BANDS[0].3))
}

/// Computes the full score document. `computed_at` becomes `lastUpdated`.
pub fn calculate_reelpass_score(
    request: &ReelPassRequest,
    computed_at: DateTime<Utc>,
) -> ReelPassScore {
    let reel_projects = reel_projects_score(&request.projects);
    let reel_persona = reel_persona_score(request.persona_data.as_ref());
    let foundational_knowledge = foundational_knowledge_score(request.credentials.as_ref());
    let experience_diversity =
        experience_diversity_score(request.experience.as_ref(), &request.projects);
    let continuous_learning =
        continuous_learning_score(request.learning_data.as_ref(), computed_at);

    let total_score = reel_projects.total_score
        + reel_persona.total_score
        + foundational_knowledge.total_score
        + experience_diversity.total_score
        + continuous_learning.total_score;
    let (level, level_name) = level_for(total_score);

    debug!(
        total_score,
        projects = request.projects.len(),
        level = level_name,
        "reelpass score computed"
    );

    ReelPassScore {
        total_score,
        level,
        level_name: level_name.to_string(),
        components: ScoreComponents {
            reel_projects,
            reel_persona,
            foundational_knowledge,
            experience_diversity,
            continuous_learning,
        },
        last_updated: computed_at,
    }
}
