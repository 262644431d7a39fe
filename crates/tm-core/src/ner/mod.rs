pub mod gazetteer;

pub use gazetteer::GazetteerRecognizer;

use crate::normalize::nfkc_lower_trim;

/// Semantic category of a recognized entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityCategory {
    Organization,
    Product,
    Technology,
    Location,
}

impl EntityCategory {
    /// Categories that count as skill evidence during extraction.
    pub fn is_skill_like(self) -> bool {
        matches!(
            self,
            EntityCategory::Organization | EntityCategory::Product | EntityCategory::Technology
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub text: String,
    pub category: EntityCategory,
}

/// Entity-recognition capability.
///
/// Implementations:
/// - GazetteerRecognizer: static vendor/product lookup (deterministic)
/// - NullRecognizer: recognizes nothing
///
/// The core only depends on this contract; a model-backed recognizer can be
/// dropped in without touching extraction.
pub trait EntityRecognizer: Send + Sync {
    /// Implementation name ("gazetteer", "null").
    fn name(&self) -> &'static str;

    fn recognize(&self, text: &str) -> Vec<Entity>;
}

/// Recognizer that never yields entities; extraction then relies on the
/// taxonomy scan alone.
pub struct NullRecognizer;

impl EntityRecognizer for NullRecognizer {
    fn name(&self) -> &'static str {
        "null"
    }

    fn recognize(&self, _text: &str) -> Vec<Entity> {
        Vec::new()
    }
}

/// Recognizer factory. Unknown names fall back to the gazetteer.
pub fn create_recognizer(name: &str) -> Box<dyn EntityRecognizer> {
    match nfkc_lower_trim(name).as_str() {
        "null" => Box::new(NullRecognizer),
        _ => Box::new(GazetteerRecognizer::default()),
    }
}
