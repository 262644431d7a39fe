use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref INTEGER_RUN: Regex = Regex::new(r"\d+").unwrap();
}

/// Neutral score when salary information is missing or unparseable.
const NEUTRAL: f64 = 0.5;

/// Salary compatibility between a candidate expectation and a job range.
///
/// Missing or unparseable input on either side -> 0.5. The job range is the
/// first two integer runs in the string (commas stripped first, so
/// "80,000" reads as one number); the candidate figure is the digits of the
/// expectation. In range -> 1.0; below the minimum -> expected/min; above
/// the maximum -> max/expected. This signal is reported on demand and is
/// not folded into the default aggregate.
pub fn calculate_salary_match(
    candidate_expected: Option<&str>,
    job_salary_range: Option<&str>,
) -> f64 {
    let (expected, range) = match (candidate_expected, job_salary_range) {
        (Some(expected), Some(range)) if !expected.trim().is_empty() && !range.trim().is_empty() => {
            (expected, range)
        }
        _ => return NEUTRAL,
    };

    let range = range.replace(',', "");
    let mut bounds = INTEGER_RUN
        .find_iter(&range)
        .filter_map(|m| m.as_str().parse::<f64>().ok());
    let (min, max) = match (bounds.next(), bounds.next()) {
        (Some(min), Some(max)) => (min, max),
        _ => return NEUTRAL,
    };

    let digits: String = expected.chars().filter(char::is_ascii_digit).collect();
    let expected: f64 = match digits.parse() {
        Ok(value) => value,
        Err(_) => return NEUTRAL,
    };

    if expected >= min && expected <= max {
        1.0
    } else if expected < min {
        expected / min
    } else {
        max / expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_is_neutral() {
        assert_eq!(calculate_salary_match(None, Some("$80,000 - $120,000")), 0.5);
        assert_eq!(calculate_salary_match(Some("100000"), None), 0.5);
        assert_eq!(calculate_salary_match(Some("  "), Some("$80k+")), 0.5);
    }

    #[test]
    fn range_without_two_numbers_is_neutral() {
        assert_eq!(calculate_salary_match(Some("100000"), Some("competitive")), 0.5);
        assert_eq!(calculate_salary_match(Some("100000"), Some("$90000")), 0.5);
    }

    #[test]
    fn expectation_without_digits_is_neutral() {
        assert_eq!(
            calculate_salary_match(Some("negotiable"), Some("$80,000 - $120,000")),
            0.5
        );
    }

    #[test]
    fn in_range_expectation_scores_one() {
        assert_eq!(
            calculate_salary_match(Some("100000"), Some("$80,000 - $120,000")),
            1.0
        );
        // boundaries are inclusive
        assert_eq!(
            calculate_salary_match(Some("80000"), Some("$80,000 - $120,000")),
            1.0
        );
        assert_eq!(
            calculate_salary_match(Some("120000"), Some("$80,000 - $120,000")),
            1.0
        );
    }

    #[test]
    fn below_minimum_scales_by_the_minimum() {
        let score = calculate_salary_match(Some("60000"), Some("$80,000 - $120,000"));
        assert!((score - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn above_maximum_scales_by_the_expectation() {
        let score = calculate_salary_match(Some("150000"), Some("$80,000 - $120,000"));
        assert!((score - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn commas_and_currency_symbols_are_ignored() {
        assert_eq!(
            calculate_salary_match(Some("$95,000"), Some("90000 to 100000 USD")),
            1.0
        );
    }
}
