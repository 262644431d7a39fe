use tracing::warn;

use crate::geocode::{haversine_km, Geocoder};
use crate::normalize::nfkc_lower_trim;

/// Neutral score when either location is missing.
const NEUTRAL: f64 = 0.5;

/// Geographic/remote compatibility between two location strings.
///
/// Policy, in order: missing input -> 0.5; "remote" anywhere -> 1.0;
/// both geocoded -> distance bands; unresolved -> string fallback
/// (exact / token-overlap / none); geocoder error -> reduced string
/// fallback (no token-overlap tier). The unresolved/error distinction is
/// deliberate and load-bearing.
pub struct LocationScorer {
    geocoder: Box<dyn Geocoder>,
}

impl LocationScorer {
    pub fn new(geocoder: Box<dyn Geocoder>) -> Self {
        Self { geocoder }
    }

    pub fn score(&self, candidate_location: Option<&str>, job_location: Option<&str>) -> f64 {
        let (candidate, job) = match (normalized(candidate_location), normalized(job_location)) {
            (Some(candidate), Some(job)) => (candidate, job),
            _ => return NEUTRAL,
        };

        if candidate.contains("remote") || job.contains("remote") {
            return 1.0;
        }

        match (
            self.geocoder.resolve(&candidate),
            self.geocoder.resolve(&job),
        ) {
            (Ok(Some(candidate_point)), Ok(Some(job_point))) => {
                distance_band(haversine_km(candidate_point, job_point))
            }
            (Err(err), _) | (_, Err(err)) => {
                warn!(
                    geocoder = self.geocoder.name(),
                    error = %err,
                    "geocoding failed; degrading to reduced string fallback"
                );
                reduced_fallback(&candidate, &job)
            }
            _ => string_fallback(&candidate, &job),
        }
    }
}

fn normalized(location: Option<&str>) -> Option<String> {
    let location = nfkc_lower_trim(location?);
    (!location.is_empty()).then_some(location)
}

fn distance_band(distance_km: f64) -> f64 {
    if distance_km < 50.0 {
        1.0
    } else if distance_km < 100.0 {
        0.8
    } else if distance_km < 500.0 {
        0.5
    } else {
        0.2
    }
}

/// Fallback when the geocoder answered but could not resolve a string.
fn string_fallback(candidate: &str, job: &str) -> f64 {
    if candidate == job {
        1.0
    } else if candidate.split_whitespace().any(|part| job.contains(part)) {
        0.7
    } else {
        0.3
    }
}

/// Fallback when the geocoder itself failed: exact match or nothing.
fn reduced_fallback(candidate: &str, job: &str) -> f64 {
    if candidate == job {
        1.0
    } else {
        0.3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::{GeoPoint, GeocodeError, NullGeocoder, StaticGeocoder};

    struct FailingGeocoder;

    impl Geocoder for FailingGeocoder {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn resolve(&self, _location: &str) -> Result<Option<GeoPoint>, GeocodeError> {
            Err(GeocodeError::Backend("connection refused".into()))
        }
    }

    fn static_scorer() -> LocationScorer {
        LocationScorer::new(Box::new(StaticGeocoder))
    }

    #[test]
    fn missing_location_is_neutral() {
        let scorer = static_scorer();
        assert_eq!(scorer.score(None, Some("Berlin")), 0.5);
        assert_eq!(scorer.score(Some("Berlin"), None), 0.5);
        assert_eq!(scorer.score(Some("   "), Some("Berlin")), 0.5);
    }

    #[test]
    fn remote_wins_regardless_of_geocoding() {
        let scorer = static_scorer();
        assert_eq!(scorer.score(Some("Berlin"), Some("Remote")), 1.0);
        assert_eq!(scorer.score(Some("Fully remote"), Some("Berlin")), 1.0);
        // also with a geocoder that would otherwise fail
        let failing = LocationScorer::new(Box::new(FailingGeocoder));
        assert_eq!(failing.score(Some("REMOTE"), Some("Tokyo")), 1.0);
    }

    #[test]
    fn distance_bands_apply_when_both_resolve() {
        let scorer = static_scorer();
        // same city, 0 km
        assert_eq!(scorer.score(Some("Berlin"), Some("Berlin")), 1.0);
        // Berlin-Paris ~880 km
        assert_eq!(scorer.score(Some("Berlin"), Some("Paris")), 0.2);
        // London-Manchester ~262 km
        assert_eq!(scorer.score(Some("London"), Some("Manchester")), 0.5);
    }

    #[test]
    fn unresolved_strings_take_the_full_fallback() {
        let scorer = LocationScorer::new(Box::new(NullGeocoder));
        // exact
        assert_eq!(scorer.score(Some("Springfield"), Some("springfield")), 1.0);
        // token overlap
        assert_eq!(
            scorer.score(Some("Berlin Mitte"), Some("berlin, germany")),
            0.7
        );
        // nothing shared
        assert_eq!(scorer.score(Some("Oslo"), Some("Lisbon")), 0.3);
    }

    #[test]
    fn geocoder_errors_take_the_reduced_fallback() {
        let scorer = LocationScorer::new(Box::new(FailingGeocoder));
        assert_eq!(scorer.score(Some("Berlin"), Some("Berlin")), 1.0);
        // token overlap tier is NOT available on errors
        assert_eq!(
            scorer.score(Some("Berlin Mitte"), Some("berlin, germany")),
            0.3
        );
    }
}
