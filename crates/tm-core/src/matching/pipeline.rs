use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::embedding::{
    cosine_similarity, create_embedder, load_config_from_env, TextEmbedder,
};
use crate::extraction::{extract_years, SkillExtractor};
use crate::geocode::{create_geocoder, CachedGeocoder, Geocoder};
use crate::matching::location::LocationScorer;
use crate::matching::report::{MatchReport, MatchResult};
use crate::matching::salary::calculate_salary_match;
use crate::matching::skills::{calculate_skills_match, skill_gap};
use crate::matching::weights::AGGREGATE_WEIGHTS;
use crate::ner::create_recognizer;
use crate::taxonomy::SkillTaxonomy;
use crate::{CandidateProfile, JobRequirement};

pub const DEFAULT_TOP_N: usize = 10;

/// End-to-end ranking of a candidate pool against one job.
///
/// Owns the skill extractor, the embedder, and a location scorer backed by
/// a memoizing geocoder, so repeated location strings within one pass hit
/// the backend once. One `rank` call makes exactly one batched embedding
/// request covering the job profile and every eligible candidate profile.
pub struct MatchingEngine {
    extractor: SkillExtractor,
    embedder: Box<dyn TextEmbedder>,
    location: LocationScorer,
}

impl MatchingEngine {
    pub fn new(
        extractor: SkillExtractor,
        embedder: Box<dyn TextEmbedder>,
        geocoder: Box<dyn Geocoder>,
    ) -> Self {
        Self {
            extractor,
            embedder,
            location: LocationScorer::new(Box::new(CachedGeocoder::new(geocoder))),
        }
    }

    /// Engine wired from `TM_EMBEDDER`, `TM_EMBED_DIMENSION` and
    /// `TM_GEOCODER`, with the built-in taxonomy and gazetteer.
    pub fn from_env() -> Self {
        let embedder = std::env::var("TM_EMBEDDER").unwrap_or_else(|_| "hash".to_string());
        let geocoder = std::env::var("TM_GEOCODER").unwrap_or_else(|_| "static".to_string());
        Self::new(
            SkillExtractor::new(SkillTaxonomy::default(), create_recognizer("gazetteer")),
            create_embedder(&embedder, load_config_from_env()),
            create_geocoder(&geocoder),
        )
    }

    /// Score every named candidate against the job and return the top
    /// `top_n` (default 10) in descending order of overall percentage.
    ///
    /// Candidates without a name are skipped, not errors. A failing
    /// embedding backend zeroes the semantic component for the whole batch;
    /// geocoding failures degrade per candidate inside the location scorer.
    /// The pass itself never fails.
    pub fn rank(
        &self,
        job: &JobRequirement,
        candidates: &[CandidateProfile],
        top_n: Option<usize>,
    ) -> MatchReport {
        let top_n = top_n.unwrap_or(DEFAULT_TOP_N);

        let required_skills = self.extractor.extract(&composite(&[
            job.job_description.as_deref(),
            job.required_skills.as_deref(),
            job.job_title.as_deref(),
        ]));
        let required_list: Vec<String> = required_skills.iter().cloned().collect();
        let required_years = extract_years(&composite(&[
            job.job_description.as_deref(),
            job.experience_required.as_deref(),
        ]));
        let job_profile = composite(&[
            job.job_title.as_deref(),
            job.job_description.as_deref(),
            job.required_skills.as_deref(),
        ]);

        let eligible: Vec<&CandidateProfile> = candidates
            .iter()
            .filter(|candidate| {
                let named = candidate
                    .full_name
                    .as_deref()
                    .is_some_and(|name| !name.trim().is_empty());
                if !named {
                    debug!(
                        candidate_id = %candidate.candidate_id,
                        "skipping candidate without a name"
                    );
                }
                named
            })
            .collect();

        let profiles: Vec<String> = eligible
            .iter()
            .map(|candidate| {
                composite(&[
                    candidate.current_position.as_deref(),
                    candidate.skills.as_deref(),
                    candidate.profile_summary.as_deref(),
                ])
            })
            .collect();

        let mut texts = Vec::with_capacity(profiles.len() + 1);
        texts.push(job_profile.clone());
        texts.extend(profiles.iter().cloned());

        let vectors = match self.embedder.embed_batch(&texts) {
            Ok(vectors) if vectors.len() == texts.len() => Some(vectors),
            Ok(vectors) => {
                warn!(
                    embedder = self.embedder.name(),
                    expected = texts.len(),
                    returned = vectors.len(),
                    "embedder returned wrong batch size; semantic scores default to zero"
                );
                None
            }
            Err(err) => {
                warn!(
                    embedder = self.embedder.name(),
                    error = %err,
                    "batch embedding failed; semantic scores default to zero"
                );
                None
            }
        };

        let mut matches = Vec::with_capacity(eligible.len());
        for (index, candidate) in eligible.iter().enumerate() {
            let candidate_skills = self.extractor.extract(&composite(&[
                candidate.skills.as_deref(),
                candidate.profile_summary.as_deref(),
                candidate.current_position.as_deref(),
            ]));
            let candidate_list: Vec<String> = candidate_skills.iter().cloned().collect();
            let candidate_years = candidate_years(candidate);

            let skills_score = calculate_skills_match(&candidate_list, &required_list);
            let semantic_score = match &vectors {
                Some(vectors)
                    if !job_profile.trim().is_empty() && !profiles[index].trim().is_empty() =>
                {
                    f64::from(cosine_similarity(&vectors[0], &vectors[index + 1]))
                }
                _ => 0.0,
            };
            let experience_score = experience_ratio(candidate_years, required_years);
            let location_score = self
                .location
                .score(candidate.location.as_deref(), job.location.as_deref());

            let overall = skills_score * AGGREGATE_WEIGHTS.skills
                + semantic_score * AGGREGATE_WEIGHTS.semantic
                + experience_score * AGGREGATE_WEIGHTS.experience
                + location_score * AGGREGATE_WEIGHTS.location;

            let gap = skill_gap(&candidate_skills, &required_skills);

            matches.push(MatchResult {
                candidate_id: candidate.candidate_id.clone(),
                name: candidate.full_name.clone().unwrap_or_default(),
                email: candidate.email.clone().unwrap_or_default(),
                current_position: candidate.current_position.clone().unwrap_or_default(),
                years_experience: candidate_years,
                location: candidate.location.clone().unwrap_or_default(),
                match_percentage: round_pct(overall),
                skills_match: round_pct(skills_score),
                experience_match: round_pct(experience_score),
                location_match: round_pct(location_score),
                matching_skills: gap.matching,
                missing_skills: gap.missing,
                additional_skills: gap.additional,
            });
        }

        // stable: ties keep input order
        matches.sort_by(|a, b| {
            b.match_percentage
                .partial_cmp(&a.match_percentage)
                .unwrap_or(Ordering::Equal)
        });
        matches.truncate(top_n);

        MatchReport {
            matches,
            total_candidates_analyzed: eligible.len(),
        }
    }

    /// Salary compatibility for one candidate, reported on demand; not part
    /// of the aggregate `rank` percentage.
    pub fn salary_signal(&self, candidate: &CandidateProfile, job: &JobRequirement) -> f64 {
        calculate_salary_match(
            candidate.expected_salary.as_deref(),
            job.salary_range.as_deref(),
        )
    }
}

/// Space-join the non-blank fields.
fn composite(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .filter_map(|part| *part)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Years from the summary plus the raw field; the field alone is retried
/// so a bare "3" still counts when the summary carries unrelated prose.
fn candidate_years(candidate: &CandidateProfile) -> u32 {
    let years = extract_years(&composite(&[
        candidate.profile_summary.as_deref(),
        candidate.years_experience.as_deref(),
    ]));
    if years > 0 {
        return years;
    }
    extract_years(candidate.years_experience.as_deref().unwrap_or_default())
}

fn experience_ratio(candidate_years: u32, required_years: u32) -> f64 {
    if required_years == 0 || candidate_years >= required_years {
        1.0
    } else {
        f64::from(candidate_years) / f64::from(required_years)
    }
}

/// Two-decimal percentage on a 0-100 scale.
fn round_pct(value: f64) -> f64 {
    (value * 10_000.0).round() / 100.0
}
