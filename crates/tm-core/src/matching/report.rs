use serde::{Deserialize, Serialize};

/// One ranked candidate with per-dimension percentages and the skill gap.
///
/// The semantic similarity feeds the overall percentage but is not
/// surfaced per result. All percentages are on a 0-100 scale rounded to
/// two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MatchResult {
    pub candidate_id: String,
    pub name: String,
    pub email: String,
    pub current_position: String,
    pub years_experience: u32,
    pub location: String,
    pub match_percentage: f64,
    pub skills_match: f64,
    pub experience_match: f64,
    pub location_match: f64,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub additional_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MatchReport {
    pub matches: Vec<MatchResult>,
    pub total_candidates_analyzed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_with_snake_case_fields() {
        let report = MatchReport {
            matches: vec![MatchResult {
                candidate_id: "c-1".into(),
                name: "Ada".into(),
                email: "ada@example.com".into(),
                current_position: "Engineer".into(),
                years_experience: 5,
                location: "Berlin".into(),
                match_percentage: 87.5,
                skills_match: 100.0,
                experience_match: 100.0,
                location_match: 100.0,
                matching_skills: vec!["rust".into()],
                missing_skills: vec![],
                additional_skills: vec!["go".into()],
            }],
            total_candidates_analyzed: 1,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["total_candidates_analyzed"], 1);
        assert_eq!(json["matches"][0]["candidate_id"], "c-1");
        assert_eq!(json["matches"][0]["match_percentage"], 87.5);
        assert_eq!(json["matches"][0]["matching_skills"][0], "rust");
        // semantic similarity is folded into match_percentage, never surfaced
        assert!(json["matches"][0].get("semantic_match").is_none());
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = MatchReport {
            matches: vec![],
            total_candidates_analyzed: 0,
        };
        let json = serde_json::to_string(&report).unwrap();
        let back: MatchReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
