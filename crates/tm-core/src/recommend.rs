use crate::extraction::SkillExtractor;
use crate::{CandidateProfile, SkillSet};

const MAX_RECOMMENDATIONS: usize = 5;

const PROGRAMMING_TRIGGERS: &[&str] = &["python", "java", "javascript"];
const WEB_FRAMEWORKS: &[&str] = &["django", "flask", "react", "angular", "spring"];

const DATA_TRIGGERS: &[&str] = &["python", "r", "sql"];
const DATA_TOOLS: &[&str] = &["tensorflow", "pytorch", "pandas", "scikit-learn"];

/// Complementary skills a candidate could add, at most five.
///
/// Programming skills trigger the web-framework list, data skills the
/// ML-tooling list; anything the candidate already has is dropped. The
/// result follows the fixed proposal-list order; callers wanting a
/// different order must re-sort.
pub fn recommend(extractor: &SkillExtractor, candidate: &CandidateProfile) -> Vec<String> {
    let mut text = String::new();
    if let Some(skills) = candidate.skills.as_deref() {
        text.push_str(skills);
    }
    text.push(' ');
    if let Some(summary) = candidate.profile_summary.as_deref() {
        text.push_str(summary);
    }

    let current = extractor.extract(&text);

    let mut recommendations = Vec::new();
    if triggered(&current, PROGRAMMING_TRIGGERS) {
        propose(&mut recommendations, &current, WEB_FRAMEWORKS);
    }
    if triggered(&current, DATA_TRIGGERS) {
        propose(&mut recommendations, &current, DATA_TOOLS);
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

fn triggered(current: &SkillSet, triggers: &[&str]) -> bool {
    triggers.iter().any(|skill| current.contains(*skill))
}

fn propose(recommendations: &mut Vec<String>, current: &SkillSet, proposals: &[&str]) {
    for proposal in proposals {
        if !current.contains(*proposal) && !recommendations.iter().any(|r| r == proposal) {
            recommendations.push((*proposal).to_string());
        }
    }
}
