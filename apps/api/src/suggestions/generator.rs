//! Skill Suggestion Generator.
//!
//! Detects at most one profession (priority order below, first hit wins), adds
//! that profession's skill clusters, then always adds the universal soft and
//! technical skills plus contextual add-ons. Every category is deduplicated in
//! first-seen order and capped at 10.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::models::{combined_text, SkillCategory};
use crate::analysis::profession::{contains_any, ProfessionTag};

pub const MAX_PER_CATEGORY: usize = 10;

/// Profession predicates are evaluated in this order. Differs from the
/// classifier table: legal outranks finance, engineering outranks sales.
pub const SUGGESTION_PRIORITY: [ProfessionTag; 10] = [
    ProfessionTag::Healthcare,
    ProfessionTag::Education,
    ProfessionTag::Legal,
    ProfessionTag::Finance,
    ProfessionTag::Marketing,
    ProfessionTag::Engineering,
    ProfessionTag::Sales,
    ProfessionTag::Design,
    ProfessionTag::Manufacturing,
    ProfessionTag::Research,
];

/// Suggested skills per category. Serialized field order is part of the wire contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSuggestions {
    #[serde(default)]
    pub technical: Vec<String>,
    #[serde(default)]
    pub soft: Vec<String>,
    #[serde(default)]
    pub creative: Vec<String>,
    #[serde(default)]
    pub analytical: Vec<String>,
    #[serde(default)]
    pub physical: Vec<String>,
    #[serde(default)]
    pub regulatory: Vec<String>,
    #[serde(default)]
    pub language: Vec<String>,
    #[serde(default)]
    pub certification: Vec<String>,
}

impl SkillSuggestions {
    #[cfg(test)]
    pub fn get(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Technical => &self.technical,
            SkillCategory::Soft => &self.soft,
            SkillCategory::Creative => &self.creative,
            SkillCategory::Analytical => &self.analytical,
            SkillCategory::Physical => &self.physical,
            SkillCategory::Regulatory => &self.regulatory,
            SkillCategory::Language => &self.language,
            SkillCategory::Certification => &self.certification,
        }
    }

    fn bucket_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Technical => &mut self.technical,
            SkillCategory::Soft => &mut self.soft,
            SkillCategory::Creative => &mut self.creative,
            SkillCategory::Analytical => &mut self.analytical,
            SkillCategory::Physical => &mut self.physical,
            SkillCategory::Regulatory => &mut self.regulatory,
            SkillCategory::Language => &mut self.language,
            SkillCategory::Certification => &mut self.certification,
        }
    }

    fn push_all(&mut self, category: SkillCategory, skills: &[&str]) {
        self.bucket_mut(category)
            .extend(skills.iter().map(|s| s.to_string()));
    }

    /// Deduplicates every category (first occurrence wins) and caps it.
    fn finalize(&mut self) {
        for category in ALL_CATEGORIES {
            let bucket = self.bucket_mut(category);
            let mut unique: Vec<String> = Vec::with_capacity(MAX_PER_CATEGORY);
            for skill in bucket.drain(..) {
                if unique.len() == MAX_PER_CATEGORY {
                    break;
                }
                if !unique.contains(&skill) {
                    unique.push(skill);
                }
            }
            *bucket = unique;
        }
    }
}

const ALL_CATEGORIES: [SkillCategory; 8] = [
    SkillCategory::Technical,
    SkillCategory::Soft,
    SkillCategory::Creative,
    SkillCategory::Analytical,
    SkillCategory::Physical,
    SkillCategory::Regulatory,
    SkillCategory::Language,
    SkillCategory::Certification,
];

use SkillCategory as C;

type Cluster = &'static [(SkillCategory, &'static [&'static str])];

#[rustfmt::skip]
const HEALTHCARE: Cluster = &[
    (C::Technical, &["Electronic Health Records", "Medical Imaging", "Clinical Decision Support", "Patient Monitoring", "Telemedicine", "Medical Devices"]),
    (C::Soft, &["Patient Communication", "Empathy", "Crisis Management", "Team Collaboration", "Cultural Sensitivity", "Stress Management"]),
    (C::Analytical, &["Clinical Assessment", "Diagnostic Reasoning", "Evidence-Based Practice", "Quality Improvement", "Risk Assessment", "Data Analysis"]),
    (C::Physical, &["Manual Dexterity", "Physical Stamina", "Hand-Eye Coordination", "Fine Motor Skills", "Physical Assessment"]),
    (C::Regulatory, &["HIPAA Compliance", "Patient Safety", "Medical Ethics", "Joint Commission Standards", "FDA Regulations"]),
    (C::Certification, &["Medical License", "CPR Certification", "Specialty Certifications", "Continuing Education", "Board Certification"]),
];

#[rustfmt::skip]
const EDUCATION: Cluster = &[
    (C::Technical, &["Learning Management Systems", "Educational Technology", "Online Teaching Tools", "Assessment Platforms", "Digital Literacy"]),
    (C::Soft, &["Classroom Management", "Student Engagement", "Patience", "Adaptability", "Mentoring", "Conflict Resolution"]),
    (C::Creative, &["Curriculum Design", "Lesson Planning", "Educational Content Creation", "Interactive Learning", "Storytelling"]),
    (C::Analytical, &["Student Assessment", "Learning Analytics", "Educational Research", "Data-Driven Instruction", "Performance Analysis"]),
    (C::Regulatory, &["FERPA Compliance", "Special Education Law", "Child Protection", "Academic Standards", "Accessibility Requirements"]),
    (C::Certification, &["Teaching License", "Subject Area Certification", "ESL Certification", "Special Education Certification"]),
];

#[rustfmt::skip]
const LEGAL: Cluster = &[
    (C::Technical, &["Legal Research Software", "Case Management Systems", "Document Review Tools", "E-Discovery", "Legal Databases"]),
    (C::Soft, &["Negotiation", "Client Relations", "Oral Advocacy", "Professional Ethics", "Critical Thinking", "Attention to Detail"]),
    (C::Analytical, &["Legal Analysis", "Case Law Research", "Statutory Interpretation", "Risk Assessment", "Contract Analysis"]),
    (C::Regulatory, &["Bar Ethics Rules", "Court Procedures", "Legal Compliance", "Professional Responsibility", "Confidentiality"]),
    (C::Certification, &["Bar Admission", "Specialty Certifications", "Continuing Legal Education", "Paralegal Certification"]),
];

#[rustfmt::skip]
const FINANCE: Cluster = &[
    (C::Technical, &["Financial Software", "Trading Platforms", "Risk Management Systems", "Portfolio Management", "Financial Modeling"]),
    (C::Soft, &["Client Relations", "Risk Communication", "Ethical Decision Making", "Stress Management", "Negotiation"]),
    (C::Analytical, &["Financial Analysis", "Market Research", "Risk Assessment", "Investment Analysis", "Performance Metrics"]),
    (C::Regulatory, &["SEC Compliance", "Anti-Money Laundering", "Fiduciary Responsibility", "Financial Regulations", "Audit Standards"]),
    (C::Certification, &["CPA", "CFA", "FRM", "Series Licenses", "Financial Planning Certification"]),
];

#[rustfmt::skip]
const MARKETING: Cluster = &[
    (C::Technical, &["Marketing Analytics", "CRM Systems", "Social Media Platforms", "Email Marketing", "SEO Tools", "Content Management"]),
    (C::Soft, &["Brand Storytelling", "Customer Empathy", "Persuasion", "Creativity", "Trend Analysis", "Cross-functional Collaboration"]),
    (C::Creative, &["Content Creation", "Visual Design", "Campaign Development", "Brand Strategy", "Creative Writing", "Video Production"]),
    (C::Analytical, &["Market Research", "Consumer Behavior Analysis", "Campaign Performance", "ROI Analysis", "A/B Testing"]),
    (C::Regulatory, &["GDPR Compliance", "Advertising Standards", "Data Privacy", "FTC Guidelines", "Email Regulations"]),
    (C::Certification, &["Google Analytics", "HubSpot Certification", "Facebook Blueprint", "Digital Marketing Certification"]),
];

#[rustfmt::skip]
const ENGINEERING: Cluster = &[
    (C::Technical, &["CAD Software", "Simulation Tools", "Project Management", "Quality Control Systems", "Technical Documentation"]),
    (C::Soft, &["Problem Solving", "Team Leadership", "Client Communication", "Project Management", "Innovation", "Continuous Learning"]),
    (C::Analytical, &["Systems Analysis", "Performance Optimization", "Risk Assessment", "Data Analysis", "Research Methodology"]),
    (C::Physical, &["Technical Skills", "Equipment Operation", "Safety Protocols", "Manual Dexterity", "Spatial Reasoning"]),
    (C::Regulatory, &["Safety Standards", "Environmental Regulations", "Quality Standards", "Professional Ethics", "Code Compliance"]),
    (C::Certification, &["Professional Engineer License", "Industry Certifications", "Safety Certifications", "Quality Certifications"]),
];

#[rustfmt::skip]
const SALES: Cluster = &[
    (C::Technical, &["CRM Software", "Sales Analytics", "Lead Generation Tools", "Presentation Software", "Communication Platforms"]),
    (C::Soft, &["Relationship Building", "Persuasion", "Active Listening", "Resilience", "Emotional Intelligence", "Negotiation"]),
    (C::Analytical, &["Sales Forecasting", "Market Analysis", "Customer Segmentation", "Performance Metrics", "Competitive Analysis"]),
    (C::Certification, &["Sales Certifications", "Product Certifications", "Industry Credentials", "Professional Development"]),
];

#[rustfmt::skip]
const DESIGN: Cluster = &[
    (C::Technical, &["Design Software", "Prototyping Tools", "Version Control", "Collaboration Platforms", "Web Technologies"]),
    (C::Soft, &["Creative Problem Solving", "Client Communication", "Feedback Integration", "Time Management", "Attention to Detail"]),
    (C::Creative, &["Visual Design", "User Experience Design", "Branding", "Typography", "Color Theory", "Layout Design"]),
    (C::Analytical, &["User Research", "Usability Testing", "Design Metrics", "A/B Testing", "Market Research"]),
    (C::Certification, &["Design Certifications", "UX Certifications", "Adobe Certifications", "Industry Credentials"]),
];

#[rustfmt::skip]
const MANUFACTURING: Cluster = &[
    (C::Technical, &["Manufacturing Systems", "Quality Control", "Automation", "Supply Chain Management", "Production Planning"]),
    (C::Soft, &["Team Leadership", "Safety Awareness", "Continuous Improvement", "Problem Solving", "Communication"]),
    (C::Analytical, &["Process Optimization", "Quality Analysis", "Performance Metrics", "Cost Analysis", "Efficiency Analysis"]),
    (C::Physical, &["Equipment Operation", "Manual Skills", "Safety Protocols", "Technical Maintenance", "Quality Inspection"]),
    (C::Regulatory, &["Safety Standards", "Quality Standards", "Environmental Compliance", "OSHA Regulations", "ISO Standards"]),
    (C::Certification, &["Quality Certifications", "Safety Certifications", "Lean Manufacturing", "Six Sigma"]),
];

#[rustfmt::skip]
const RESEARCH: Cluster = &[
    (C::Technical, &["Research Software", "Statistical Tools", "Data Collection", "Laboratory Equipment", "Documentation Systems"]),
    (C::Soft, &["Critical Thinking", "Attention to Detail", "Persistence", "Collaboration", "Communication", "Ethics"]),
    (C::Analytical, &["Research Methodology", "Statistical Analysis", "Data Interpretation", "Literature Review", "Hypothesis Testing"]),
    (C::Regulatory, &["Research Ethics", "IRB Compliance", "Data Privacy", "Publication Standards", "Grant Compliance"]),
    (C::Certification, &["Research Certifications", "Statistical Certifications", "Ethics Training", "Specialized Credentials"]),
];

fn profession_cluster(profession: ProfessionTag) -> Cluster {
    match profession {
        ProfessionTag::Healthcare => HEALTHCARE,
        ProfessionTag::Education => EDUCATION,
        ProfessionTag::Legal => LEGAL,
        ProfessionTag::Finance => FINANCE,
        ProfessionTag::Marketing => MARKETING,
        ProfessionTag::Engineering => ENGINEERING,
        ProfessionTag::Sales => SALES,
        ProfessionTag::Design => DESIGN,
        ProfessionTag::Manufacturing => MANUFACTURING,
        ProfessionTag::Research => RESEARCH,
        _ => &[],
    }
}

const UNIVERSAL_SOFT: &[&str] = &[
    "Communication", "Problem Solving", "Time Management", "Adaptability", "Critical Thinking",
    "Teamwork", "Leadership", "Emotional Intelligence", "Continuous Learning", "Work Ethic",
    "Attention to Detail", "Creativity",
];

const UNIVERSAL_TECHNICAL: &[&str] = &[
    "Microsoft Office", "Email Communication", "Video Conferencing", "Project Management Tools",
    "Data Entry", "Internet Research", "Digital Literacy", "Cloud Storage", "Basic Troubleshooting",
];

/// (triggers, category, skills) applied after the universal sets, independent of profession.
const CONTEXTUAL_ADD_ONS: &[(&[&str], SkillCategory, &[&str])] = &[
    (
        &["international", "global", "multilingual"],
        C::Language,
        &["English", "Spanish", "French", "German", "Mandarin", "Business Communication"],
    ),
    (
        &["customer", "client"],
        C::Soft,
        &["Customer Service", "Relationship Building", "Conflict Resolution"],
    ),
    (
        &["team", "collaborate"],
        C::Soft,
        &["Team Collaboration", "Cross-functional Teamwork", "Meeting Facilitation"],
    ),
    (
        &["data", "analysis"],
        C::Analytical,
        &["Data Analysis", "Reporting", "Excel", "Statistical Analysis", "Data Visualization"],
    ),
    (
        &["presentation", "public speaking"],
        C::Soft,
        &["Presentation Skills", "Public Speaking", "Visual Communication"],
    ),
    (
        &["project", "manage"],
        C::Soft,
        &["Project Management", "Resource Planning", "Risk Management", "Stakeholder Management"],
    ),
    (
        &["project", "manage"],
        C::Certification,
        &["PMP", "Agile Certification", "Scrum Master"],
    ),
];

/// First profession in `SUGGESTION_PRIORITY` whose keywords appear in `text`.
pub fn suggestion_profession(text: &str) -> Option<ProfessionTag> {
    SUGGESTION_PRIORITY
        .iter()
        .copied()
        .find(|profession| profession.matches(text))
}

/// Builds skill suggestions for a project. Total: empty text still yields the universal sets.
pub fn generate_skill_suggestions(description: &str, goals: &str) -> SkillSuggestions {
    let text = combined_text(description, goals);
    let mut suggestions = SkillSuggestions::default();

    let profession = suggestion_profession(&text);
    if let Some(profession) = profession {
        for (category, skills) in profession_cluster(profession) {
            suggestions.push_all(*category, skills);
        }
    }

    suggestions.push_all(C::Soft, UNIVERSAL_SOFT);
    suggestions.push_all(C::Technical, UNIVERSAL_TECHNICAL);

    for (triggers, category, skills) in CONTEXTUAL_ADD_ONS {
        if contains_any(&text, triggers) {
            suggestions.push_all(*category, skills);
        }
    }

    suggestions.finalize();

    debug!(
        profession = profession.map(|p| p.as_str()).unwrap_or("none"),
        technical = suggestions.technical.len(),
        soft = suggestions.soft.len(),
        "generated skill suggestions"
    );
    suggestions
}
