use std::collections::BTreeSet;

use unicode_normalization::UnicodeNormalization;

/// NFKC-normalize, trim, and lowercase a token.
pub fn nfkc_lower_trim(input: &str) -> String {
    input.nfkc().collect::<String>().trim().to_lowercase()
}

/// Lowercase whitespace tokens with surrounding punctuation stripped.
/// Inner punctuation survives so "c++", "node.js", "ci/cd" stay intact.
pub fn tokenize(input: &str) -> Vec<String> {
    nfkc_lower_trim(input)
        .split_whitespace()
        .map(|token| {
            token
                .trim_matches(|c: char| matches!(c, ',' | '.' | ';' | ':' | '!' | '?' | '(' | ')' | '"' | '\''))
                .to_string()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

/// Build a normalized skill set, dropping tokens that normalize to nothing.
pub fn normalize_skill_set(skills: &[String]) -> BTreeSet<String> {
    skills
        .iter()
        .map(|skill| nfkc_lower_trim(skill))
        .filter(|skill| !skill.is_empty())
        .collect()
}
