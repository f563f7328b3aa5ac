//! Profession Classifier: maps free project text to a single profession tag.
//!
//! The keyword table is an ordered slice: when text matches keywords of several
//! professions, the earliest row wins. Tests pin that order.

use serde::{Deserialize, Serialize};

/// Inferred field of a project. Recomputed on every call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfessionTag {
    Healthcare,
    Education,
    Finance,
    Legal,
    Marketing,
    Sales,
    Hr,
    Design,
    Engineering,
    Technology,
    Manufacturing,
    Research,
    Consulting,
    Media,
    Hospitality,
    Retail,
    Nonprofit,
    Agriculture,
    Construction,
    Transportation,
    Energy,
    RealEstate,
    Sports,
    Arts,
    General,
}

impl ProfessionTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfessionTag::Healthcare => "healthcare",
            ProfessionTag::Education => "education",
            ProfessionTag::Finance => "finance",
            ProfessionTag::Legal => "legal",
            ProfessionTag::Marketing => "marketing",
            ProfessionTag::Sales => "sales",
            ProfessionTag::Hr => "hr",
            ProfessionTag::Design => "design",
            ProfessionTag::Engineering => "engineering",
            ProfessionTag::Technology => "technology",
            ProfessionTag::Manufacturing => "manufacturing",
            ProfessionTag::Research => "research",
            ProfessionTag::Consulting => "consulting",
            ProfessionTag::Media => "media",
            ProfessionTag::Hospitality => "hospitality",
            ProfessionTag::Retail => "retail",
            ProfessionTag::Nonprofit => "nonprofit",
            ProfessionTag::Agriculture => "agriculture",
            ProfessionTag::Construction => "construction",
            ProfessionTag::Transportation => "transportation",
            ProfessionTag::Energy => "energy",
            ProfessionTag::RealEstate => "real_estate",
            ProfessionTag::Sports => "sports",
            ProfessionTag::Arts => "arts",
            ProfessionTag::General => "general",
        }
    }

    /// Regulated, high-stakes fields. Lowers feasibility and raises skill complexity.
    pub fn is_complex(&self) -> bool {
        matches!(
            self,
            ProfessionTag::Healthcare
                | ProfessionTag::Legal
                | ProfessionTag::Engineering
                | ProfessionTag::Finance
        )
    }

    /// Keyword set for this profession; empty for `General`.
    pub fn keywords(&self) -> &'static [&'static str] {
        PROFESSION_KEYWORDS
            .iter()
            .find(|(tag, _)| tag == self)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }

    /// True when `text` (already lowercased) contains any of this profession's keywords.
    pub fn matches(&self, text: &str) -> bool {
        contains_any(text, self.keywords())
    }
}

impl std::fmt::Display for ProfessionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered (tag, keywords) table. Row order is the tie-break.
pub const PROFESSION_KEYWORDS: &[(ProfessionTag, &[&str])] = &[
    (
        ProfessionTag::Healthcare,
        &[
            "medical", "patient", "clinical", "diagnosis", "treatment", "healthcare", "nursing",
            "therapy", "pharmaceutical", "surgery", "hospital", "clinic",
        ],
    ),
    (
        ProfessionTag::Education,
        &[
            "teaching", "student", "curriculum", "lesson", "classroom", "education", "learning",
            "academic", "school", "university", "training",
        ],
    ),
    (
        ProfessionTag::Finance,
        &[
            "financial", "investment", "banking", "accounting", "budget", "audit", "tax",
            "portfolio", "trading", "insurance", "loan", "credit",
        ],
    ),
    (
        ProfessionTag::Legal,
        &[
            "legal", "law", "court", "contract", "litigation", "compliance", "regulation",
            "attorney", "lawyer", "paralegal", "case",
        ],
    ),
    (
        ProfessionTag::Marketing,
        &[
            "marketing", "brand", "campaign", "advertising", "promotion", "social media",
            "content", "seo", "digital marketing", "customer acquisition",
        ],
    ),
    (
        ProfessionTag::Sales,
        &[
            "sales", "selling", "customer", "client", "revenue", "lead", "prospect",
            "negotiation", "deal", "quota", "crm",
        ],
    ),
    (
        ProfessionTag::Hr,
        &[
            "human resources", "recruitment", "hiring", "employee", "talent", "performance",
            "compensation", "benefits", "onboarding",
        ],
    ),
    (
        ProfessionTag::Design,
        &[
            "design", "creative", "visual", "graphic", "ui", "ux", "branding", "layout",
            "typography", "color", "aesthetic",
        ],
    ),
    (
        ProfessionTag::Engineering,
        &[
            "engineering", "technical", "system", "architecture", "infrastructure", "mechanical",
            "electrical", "civil", "chemical",
        ],
    ),
    (
        ProfessionTag::Technology,
        &[
            "software", "programming", "development", "coding", "app", "website", "database",
            "api", "algorithm", "tech",
        ],
    ),
    (
        ProfessionTag::Manufacturing,
        &[
            "manufacturing", "production", "assembly", "quality control", "supply chain",
            "logistics", "inventory", "operations",
        ],
    ),
    (
        ProfessionTag::Research,
        &[
            "research", "analysis", "study", "experiment", "data", "methodology", "hypothesis",
            "findings", "publication",
        ],
    ),
    (
        ProfessionTag::Consulting,
        &[
            "consulting", "advisory", "strategy", "optimization", "improvement",
            "transformation", "analysis", "recommendation",
        ],
    ),
    (
        ProfessionTag::Media,
        &[
            "media", "journalism", "content creation", "broadcasting", "publishing",
            "video production", "photography", "writing",
        ],
    ),
    (
        ProfessionTag::Hospitality,
        &[
            "hospitality", "hotel", "restaurant", "tourism", "service", "guest",
            "event planning", "catering", "travel",
        ],
    ),
    (
        ProfessionTag::Retail,
        &[
            "retail", "store", "merchandise", "inventory", "customer service", "point of sale",
            "shopping", "product",
        ],
    ),
    (
        ProfessionTag::Nonprofit,
        &[
            "nonprofit", "charity", "volunteer", "community", "social impact", "fundraising",
            "grant", "mission",
        ],
    ),
    (
        ProfessionTag::Agriculture,
        &[
            "agriculture", "farming", "crop", "livestock", "soil", "harvest", "irrigation",
            "sustainable farming",
        ],
    ),
    (
        ProfessionTag::Construction,
        &[
            "construction", "building", "contractor", "project management", "safety",
            "blueprint", "renovation",
        ],
    ),
    (
        ProfessionTag::Transportation,
        &[
            "transportation", "logistics", "shipping", "delivery", "fleet", "route",
            "supply chain", "warehouse",
        ],
    ),
    (
        ProfessionTag::Energy,
        &[
            "energy", "renewable", "solar", "wind", "oil", "gas", "power", "grid",
            "sustainability", "utilities",
        ],
    ),
    (
        ProfessionTag::RealEstate,
        &[
            "real estate", "property", "housing", "commercial", "residential", "lease",
            "mortgage", "appraisal",
        ],
    ),
    (
        ProfessionTag::Sports,
        &[
            "sports", "athletic", "fitness", "coaching", "training", "performance",
            "competition", "team", "exercise",
        ],
    ),
    (
        ProfessionTag::Arts,
        &[
            "art", "creative", "painting", "sculpture", "music", "theater", "dance",
            "performance", "gallery", "exhibition",
        ],
    ),
];

/// Substring containment over an already-lowercased haystack.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// Classifies the combined project text. Total: falls back to `General`.
pub fn detect_profession(description: &str, goals: &str) -> ProfessionTag {
    classify_text(&super::models::combined_text(description, goals))
}

/// Classifies already-lowercased text against the ordered keyword table.
pub fn classify_text(text: &str) -> ProfessionTag {
    PROFESSION_KEYWORDS
        .iter()
        .find(|(_, keywords)| contains_any(text, keywords))
        .map(|(tag, _)| *tag)
        .unwrap_or(ProfessionTag::General)
}
