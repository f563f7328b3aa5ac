//! ReelPass scorer inputs (caller-supplied signals) and the score document.
//!
//! Everything on the wire is camelCase. Inputs are lenient: missing fields are zero.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::models::SkillCategory;
use crate::models::project::{ImpactLevel, Project, ProjectScale};

// ────────────────────────────────────────────────────────────────────────────
// Inputs
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReelPassRequest {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub persona_data: Option<PersonaData>,
    #[serde(default)]
    pub credentials: Option<Credentials>,
    #[serde(default)]
    pub experience: Option<Experience>,
    #[serde(default)]
    pub learning_data: Option<LearningData>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalityTraits {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkTraits {
    pub collaboration: f64,
    pub leadership: f64,
    pub resilience: f64,
    pub proactivity: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonaData {
    pub behavioral_score: u32,
    pub feedback_score: u32,
    pub traits: PersonalityTraits,
    pub work_traits: WorkTraits,
    pub feedback_count: u32,
    pub has_managerial_feedback: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub certifications: Vec<CertificationInput>,
    pub degrees: Vec<DegreeInput>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CertificationInput {
    pub name: String,
    pub verified: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeLevel {
    Bachelors,
    Masters,
    Phd,
    /// Unrecognised or missing level.
    #[default]
    #[serde(other)]
    Other,
}

impl DegreeLevel {
    pub fn points(&self) -> u32 {
        match self {
            DegreeLevel::Bachelors => 25,
            DegreeLevel::Masters => 35,
            DegreeLevel::Phd => 40,
            DegreeLevel::Other => 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DegreeInput {
    #[serde(default)]
    pub level: DegreeLevel,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub is_reputable: bool,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct Experience {
    /// May be fractional.
    pub years: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LearningData {
    pub courses_completed: u32,
    pub workshops_attended: u32,
    pub profile_complete: bool,
    pub verification_steps: u32,
    pub community_participation: bool,
    pub regular_updates: bool,
    pub portfolio_updates: bool,
    pub profile_completeness: u32,
    pub last_activity_date: Option<DateTime<Utc>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Score document
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReelPassLevel {
    Aspiring,
    Emerging,
    Competent,
    Skilled,
    Expert,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReelPassScore {
    pub total_score: u32,
    pub level: ReelPassLevel,
    pub level_name: String,
    pub components: ScoreComponents,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreComponents {
    pub reel_projects: ReelProjectsScore,
    pub reel_persona: ReelPersonaScore,
    pub foundational_knowledge: FoundationalKnowledgeScore,
    pub experience_diversity: ExperienceDiversityScore,
    pub continuous_learning: ContinuousLearningScore,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReelProjectsScore {
    pub total_score: u32,
    pub breakdown: ReelProjectsBreakdown,
    pub details: ReelProjectsDetails,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReelProjectsBreakdown {
    pub skill_demonstration: u32,
    pub project_impact: u32,
    pub verification_bonus: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemonstratedSkill {
    pub skill_name: String,
    pub points: u32,
    pub verified: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReelProjectsDetails {
    pub demonstrated_skills: Vec<DemonstratedSkill>,
    pub project_scale: ProjectScale,
    pub project_impact: ImpactLevel,
    pub external_validations: u32,
    pub live_demo: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReelPersonaScore {
    pub total_score: u32,
    pub breakdown: ReelPersonaBreakdown,
    pub details: ReelPersonaDetails,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReelPersonaBreakdown {
    pub behavioral_assessment: u32,
    pub peer_feedback: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReelPersonaDetails {
    pub personality_traits: PersonalityTraits,
    pub work_traits: WorkTraits,
    pub feedback_count: u32,
    pub managerial_feedback: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundationalKnowledgeScore {
    pub total_score: u32,
    pub breakdown: FoundationalKnowledgeBreakdown,
    pub details: FoundationalKnowledgeDetails,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundationalKnowledgeBreakdown {
    pub certifications: u32,
    pub academic_degrees: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct FoundationalKnowledgeDetails {
    pub certifications: Vec<ScoredCertification>,
    pub degrees: Vec<ScoredDegree>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoredCertification {
    pub name: String,
    pub points: u32,
    pub verified: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoredDegree {
    pub level: DegreeLevel,
    pub field: String,
    pub institution: String,
    pub points: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceDiversityScore {
    pub total_score: u32,
    pub breakdown: ExperienceDiversityBreakdown,
    pub details: ExperienceDiversityDetails,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceDiversityBreakdown {
    pub years_of_experience: u32,
    pub skill_diversity: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceDiversityDetails {
    pub total_years: f64,
    pub skill_categories: Vec<SkillCategory>,
    pub unique_skill_count: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuousLearningScore {
    pub total_score: u32,
    pub breakdown: ContinuousLearningBreakdown,
    pub details: ContinuousLearningDetails,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuousLearningBreakdown {
    pub learning_activity: u32,
    pub platform_engagement: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuousLearningDetails {
    pub courses_completed: u32,
    pub workshops_attended: u32,
    pub profile_completeness: u32,
    pub community_participation: bool,
    pub last_activity_date: DateTime<Utc>,
}
