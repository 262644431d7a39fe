use crate::ner::EntityRecognizer;
use crate::normalize::nfkc_lower_trim;
use crate::taxonomy::SkillTaxonomy;
use crate::SkillSet;

/// Skill detection over free text.
///
/// Two evidence sources: a substring scan over every taxonomy skill, and
/// entities from the injected recognizer whose category is
/// organization/product/technology.
///
/// Substring matching false-positives on short tokens ("go" inside
/// "going", "r" inside most words). Known limitation, kept as-is:
/// word-boundary matching would change scores for existing comparisons.
pub struct SkillExtractor {
    taxonomy: SkillTaxonomy,
    recognizer: Box<dyn EntityRecognizer>,
}

impl SkillExtractor {
    pub fn new(taxonomy: SkillTaxonomy, recognizer: Box<dyn EntityRecognizer>) -> Self {
        Self {
            taxonomy,
            recognizer,
        }
    }

    pub fn taxonomy(&self) -> &SkillTaxonomy {
        &self.taxonomy
    }

    pub fn extract(&self, text: &str) -> SkillSet {
        let haystack = nfkc_lower_trim(text);
        let mut found = SkillSet::new();

        for skill in self.taxonomy.skills() {
            if haystack.contains(skill) {
                found.insert(skill.to_string());
            }
        }

        for entity in self.recognizer.recognize(text) {
            if entity.category.is_skill_like() {
                let token = nfkc_lower_trim(&entity.text);
                if !token.is_empty() {
                    found.insert(token);
                }
            }
        }

        found
    }
}
