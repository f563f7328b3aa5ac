//! Evidence verification flow: one showcase video is checked against every
//! skill on a project, and the verdicts are written back onto the skill
//! demonstrations.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::models::ScopeAnalysis;
use crate::errors::AppError;
use crate::models::project::{DemonstrationStatus, Project};
use crate::verification::oracle::{VideoAnalysisRequest, VideoVerifier};

const VERIFY_ACTION: &str = "verify-project-evidence";
const DEFAULT_EVIDENCE_TYPE: &str = "video/mp4";
const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceRequest {
    pub project: Project,
    pub evidence_url: String,
    #[serde(default)]
    pub evidence_type: Option<String>,
    /// Supplies verification criteria by skill name; criteria are empty without it.
    #[serde(default)]
    pub analysis: Option<ScopeAnalysis>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillVerdict {
    pub skill_id: String,
    pub skill_name: String,
    pub rating: u8,
    pub feedback: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationSummary {
    pub verified_skills: usize,
    /// Mean rating of verified skills, one decimal place.
    pub average_rating: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvidenceOutcome {
    pub project: Project,
    pub results: Vec<SkillVerdict>,
    pub summary: VerificationSummary,
}

fn oracle_request(
    request: &EvidenceRequest,
    skill_id: &str,
    skill_name: &str,
    requirements: &str,
) -> VideoAnalysisRequest {
    VideoAnalysisRequest {
        action: VERIFY_ACTION.to_string(),
        project_id: request.project.id.clone(),
        skill_id: skill_id.to_string(),
        skill_name: skill_name.to_string(),
        demonstration_method: "video".to_string(),
        evidence_url: request.evidence_url.clone(),
        evidence_type: request
            .evidence_type
            .clone()
            .unwrap_or_else(|| DEFAULT_EVIDENCE_TYPE.to_string()),
        skill_requirements: requirements.to_string(),
        verification_criteria: request
            .analysis
            .as_ref()
            .map(|a| a.criteria_of(skill_name))
            .unwrap_or_default(),
    }
}

/// Sends every skill to the oracle sequentially. Per-skill failures are logged
/// and skipped; the call fails only when no skill was verified.
pub async fn verify_project_evidence(
    verifier: &dyn VideoVerifier,
    request: EvidenceRequest,
) -> Result<EvidenceOutcome, AppError> {
    let evidence_url = request.evidence_url.trim().to_string();
    if evidence_url.is_empty() {
        return Err(AppError::Validation(
            "evidenceUrl cannot be empty".to_string(),
        ));
    }

    let mut results: Vec<SkillVerdict> = Vec::new();
    for skill in &request.project.skill_demonstrations {
        let oracle_request = oracle_request(&request, &skill.id, &skill.name, &skill.requirements);
        match verifier.verify(&oracle_request).await {
            Ok(response) if response.rating > 0 => {
                let feedback = if response.feedback.trim().is_empty() {
                    format!("Verified {} demonstration in video", skill.name)
                } else {
                    response.feedback
                };
                results.push(SkillVerdict {
                    skill_id: skill.id.clone(),
                    skill_name: skill.name.clone(),
                    rating: response.rating.min(MAX_RATING),
                    feedback,
                    confidence: response.confidence,
                });
            }
            Ok(_) => warn!(skill = %skill.name, "oracle returned no rating, skipping"),
            Err(e) => warn!(skill = %skill.name, "verification failed, skipping: {e}"),
        }
    }

    if results.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "Verification failed for all skills. Please try again or check your video quality."
                .to_string(),
        ));
    }

    let mut project = request.project;
    for skill in &mut project.skill_demonstrations {
        skill.evidence_url = Some(evidence_url.clone());
        match results.iter().find(|r| r.skill_id == skill.id && r.skill_name == skill.name) {
            Some(verdict) => {
                skill.verified = true;
                skill.rating = Some(verdict.rating);
                skill.verification_feedback = Some(verdict.feedback.clone());
                skill.status = DemonstrationStatus::Verified;
            }
            None => skill.status = DemonstrationStatus::Completed,
        }
    }

    let total: u32 = results.iter().map(|r| u32::from(r.rating)).sum();
    let average = f64::from(total) / results.len() as f64;
    let summary = VerificationSummary {
        verified_skills: results.len(),
        average_rating: (average * 10.0).round() / 10.0,
    };

    info!(
        project_id = %project.id,
        verified = summary.verified_skills,
        skills = project.skill_demonstrations.len(),
        average_rating = summary.average_rating,
        "project evidence verified"
    );

    Ok(EvidenceOutcome {
        project,
        results,
        summary,
    })
}
