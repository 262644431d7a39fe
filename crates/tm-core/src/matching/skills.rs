use crate::normalize::normalize_skill_set;
use crate::SkillSet;

/// Skill overlap as a fraction of the required set.
///
/// Guards, in order: either raw input empty -> 0.0 (nothing to compare);
/// required set empty after normalization -> 1.0 (a job with no extractable
/// requirement is satisfied by definition); else |intersection|/|required|.
/// Excess candidate skills never raise the score above 1.0.
pub fn calculate_skills_match(candidate_skills: &[String], required_skills: &[String]) -> f64 {
    if candidate_skills.is_empty() || required_skills.is_empty() {
        return 0.0;
    }

    let candidate = normalize_skill_set(candidate_skills);
    let required = normalize_skill_set(required_skills);

    if required.is_empty() {
        return 1.0;
    }

    let matched = candidate.intersection(&required).count();
    matched as f64 / required.len() as f64
}

/// Explanation sets attached to each match result. Sorted, since they come
/// from ordered sets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillGap {
    pub matching: Vec<String>,
    pub missing: Vec<String>,
    pub additional: Vec<String>,
}

pub fn skill_gap(candidate: &SkillSet, required: &SkillSet) -> SkillGap {
    SkillGap {
        matching: candidate.intersection(required).cloned().collect(),
        missing: required.difference(candidate).cloned().collect(),
        additional: candidate.difference(required).cloned().collect(),
    }
}
