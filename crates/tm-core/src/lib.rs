pub mod embedding;
pub mod extraction;
pub mod geocode;
pub mod logging;
pub mod matching;
pub mod ner;
pub mod normalize;
pub mod recommend;
pub mod taxonomy;

use std::collections::BTreeSet;

/// De-duplicated lowercase skill tokens with deterministic iteration order.
pub type SkillSet = BTreeSet<String>;

// Commonly used data models for matching functions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobRequirement {
    pub job_title: Option<String>,
    pub job_description: Option<String>,
    pub required_skills: Option<String>,
    pub location: Option<String>,
    pub salary_range: Option<String>,
    pub experience_required: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateProfile {
    pub candidate_id: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub current_position: Option<String>,
    /// Raw text or a bare number ("5 years in fintech", "3").
    pub years_experience: Option<String>,
    pub skills: Option<String>,
    pub profile_summary: Option<String>,
    pub location: Option<String>,
    pub expected_salary: Option<String>,
}

pub use matching::pipeline::{MatchingEngine, DEFAULT_TOP_N};
pub use matching::report::{MatchReport, MatchResult};
