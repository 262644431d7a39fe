use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Ordered; first match wins.
    static ref YEARS_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(\d+)\+?\s*years?\s*(?:of\s*)?experience").unwrap(),
        Regex::new(r"experience\s*(?:of\s*)?\s*(\d+)\+?\s*years?").unwrap(),
        Regex::new(r"(\d+)\+?\s*years?\s*(?:of\s*)?professional").unwrap(),
        Regex::new(r"(\d+)\+?\s*yrs?\s*exp").unwrap(),
    ];
    // Range: "3 to 5 years" -> floor average
    static ref YEARS_RANGE: Regex = Regex::new(r"(\d+)\s*to\s*(\d+)\s*years?").unwrap();
}

/// Pull a years-of-experience estimate out of free text.
///
/// The fixed patterns are consulted in order and the first capture wins;
/// then the "N to M years" range form (floor average); then a bare number,
/// since the years field is raw text or a number. Anything else is 0.
pub fn extract_years(text: &str) -> u32 {
    let text = text.to_lowercase();

    for pattern in YEARS_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(&text) {
            if let Some(years) = caps.get(1).and_then(|m| m.as_str().parse().ok()) {
                return years;
            }
        }
    }

    if let Some(caps) = YEARS_RANGE.captures(&text) {
        let low: Option<u32> = caps.get(1).and_then(|m| m.as_str().parse().ok());
        let high: Option<u32> = caps.get(2).and_then(|m| m.as_str().parse().ok());
        if let (Some(low), Some(high)) = (low, high) {
            return (low + high) / 2;
        }
    }

    if let Ok(years) = text.trim().parse() {
        return years;
    }

    0
}
