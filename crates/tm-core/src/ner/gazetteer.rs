use std::sync::LazyLock;

use super::{Entity, EntityCategory, EntityRecognizer};
use crate::normalize::nfkc_lower_trim;

/// Lowercase surface form → category. Ordered so longer phrases are
/// scanned before their prefixes ("github actions" before "github").
static GAZETTEER: LazyLock<Vec<(&'static str, EntityCategory)>> = LazyLock::new(|| {
    use EntityCategory::*;
    vec![
        ("github actions", Product),
        ("github", Organization),
        ("gitlab", Organization),
        ("bitbucket", Product),
        ("atlassian", Organization),
        ("jira", Product),
        ("confluence", Product),
        ("salesforce", Organization),
        ("snowflake", Product),
        ("databricks", Organization),
        ("apache kafka", Technology),
        ("kafka", Technology),
        ("rabbitmq", Technology),
        ("grafana", Product),
        ("prometheus", Technology),
        ("stripe", Organization),
        ("twilio", Organization),
        ("shopify", Organization),
        ("oracle", Organization),
        ("sap", Organization),
        ("linux", Technology),
        ("git", Technology),
        ("graphql", Technology),
        ("airflow", Technology),
        ("hadoop", Technology),
        ("new york", Location),
        ("san francisco", Location),
        ("london", Location),
        ("berlin", Location),
        ("tokyo", Location),
    ]
});

/// Deterministic recognizer backed by a fixed vendor/product gazetteer.
///
/// Substring scan over the normalized text. Coarse on purpose: the point is
/// a dependency-free, reproducible stand-in for a model-backed recognizer,
/// with the same contract.
#[derive(Default)]
pub struct GazetteerRecognizer;

impl EntityRecognizer for GazetteerRecognizer {
    fn name(&self) -> &'static str {
        "gazetteer"
    }

    fn recognize(&self, text: &str) -> Vec<Entity> {
        let haystack = nfkc_lower_trim(text);
        let mut entities = Vec::new();

        for (surface, category) in GAZETTEER.iter() {
            if haystack.contains(surface) {
                entities.push(Entity {
                    text: (*surface).to_string(),
                    category: *category,
                });
            }
        }

        entities
    }
}
