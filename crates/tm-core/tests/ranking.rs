use tm_core::embedding::{create_embedder, EmbedderConfig};
use tm_core::extraction::SkillExtractor;
use tm_core::geocode::NullGeocoder;
use tm_core::ner::NullRecognizer;
use tm_core::taxonomy::SkillTaxonomy;
use tm_core::{CandidateProfile, JobRequirement, MatchingEngine};

fn engine() -> MatchingEngine {
    MatchingEngine::new(
        SkillExtractor::new(SkillTaxonomy::default(), Box::new(NullRecognizer)),
        create_embedder("hash", EmbedderConfig::default()),
        Box::new(NullGeocoder),
    )
}

fn data_job() -> JobRequirement {
    JobRequirement {
        job_title: Some("Data Engineer".into()),
        job_description: Some(
            "Design pipelines with python and sql, 5 years of experience required".into(),
        ),
        required_skills: Some("python, sql".into()),
        location: Some("Remote".into()),
        salary_range: Some("$80,000 - $120,000".into()),
        experience_required: None,
    }
}

fn pool() -> Vec<CandidateProfile> {
    vec![
        CandidateProfile {
            candidate_id: "c-1".into(),
            full_name: Some("Ada Lovelace".into()),
            email: Some("ada@example.com".into()),
            current_position: Some("Senior Data Engineer".into()),
            years_experience: Some("7 years of experience".into()),
            skills: Some("Python developer with SQL and AWS experience".into()),
            profile_summary: Some("Built warehouse pipelines and dashboards".into()),
            location: Some("Berlin".into()),
            expected_salary: Some("100000".into()),
        },
        CandidateProfile {
            candidate_id: "c-2".into(),
            full_name: Some("Grace Hopper".into()),
            email: Some("grace@example.com".into()),
            current_position: Some("Analyst".into()),
            years_experience: Some("3".into()),
            skills: Some("sql".into()),
            profile_summary: Some("Reporting and dashboards".into()),
            location: Some("Lisbon".into()),
            expected_salary: Some("60000".into()),
        },
        CandidateProfile {
            candidate_id: "c-3".into(),
            full_name: None,
            email: Some("ghost@example.com".into()),
            current_position: Some("Engineer".into()),
            years_experience: Some("10".into()),
            skills: Some("python, sql".into()),
            profile_summary: Some("Everything".into()),
            location: Some("Berlin".into()),
            expected_salary: None,
        },
    ]
}

#[test]
fn end_to_end_ranking_orders_the_stronger_candidate_first() {
    let report = engine().rank(&data_job(), &pool(), None);

    assert_eq!(report.total_candidates_analyzed, 2);
    assert_eq!(report.matches.len(), 2);
    assert_eq!(report.matches[0].candidate_id, "c-1");
    assert!(report.matches[0].match_percentage >= report.matches[1].match_percentage);
}

#[test]
fn full_required_coverage_scores_full_skills_match() {
    let report = engine().rank(&data_job(), &pool(), None);

    let ada = &report.matches[0];
    assert_eq!(ada.skills_match, 100.0);
    assert!(ada.matching_skills.contains(&"python".to_string()));
    assert!(ada.matching_skills.contains(&"sql".to_string()));
    assert!(ada.additional_skills.contains(&"aws".to_string()));
}

#[test]
fn remote_job_maxes_location_for_everyone() {
    let report = engine().rank(&data_job(), &pool(), None);

    for result in &report.matches {
        assert_eq!(result.location_match, 100.0);
    }
}

#[test]
fn bare_numeric_years_field_is_honored() {
    let report = engine().rank(&data_job(), &pool(), None);

    let grace = report
        .matches
        .iter()
        .find(|m| m.candidate_id == "c-2")
        .unwrap();
    assert_eq!(grace.years_experience, 3);
    // 3 of the required 5 years
    assert_eq!(grace.experience_match, 60.0);
}

#[test]
fn nameless_candidates_never_appear_in_the_report() {
    let report = engine().rank(&data_job(), &pool(), None);

    assert!(report.matches.iter().all(|m| m.candidate_id != "c-3"));
}

#[test]
fn top_n_bounds_the_result_length() {
    let report = engine().rank(&data_job(), &pool(), Some(1));

    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.total_candidates_analyzed, 2);
}

#[test]
fn identical_runs_are_byte_identical() {
    let first = engine().rank(&data_job(), &pool(), None);
    let second = engine().rank(&data_job(), &pool(), None);

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn salary_signal_matches_the_documented_examples() {
    let engine = engine();
    let job = data_job();
    let candidates = pool();

    assert_eq!(engine.salary_signal(&candidates[0], &job), 1.0);
    assert!((engine.salary_signal(&candidates[1], &job) - 0.75).abs() < f64::EPSILON);
}

#[test]
fn every_surfaced_score_stays_in_percentage_range() {
    let report = engine().rank(&data_job(), &pool(), None);

    for result in &report.matches {
        for score in [
            result.match_percentage,
            result.skills_match,
            result.experience_match,
            result.location_match,
        ] {
            assert!((0.0..=100.0).contains(&score), "score out of range: {score}");
        }
    }
}
