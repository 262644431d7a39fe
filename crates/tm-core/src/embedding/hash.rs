use std::hash::{Hash, Hasher};

use siphasher::sip::SipHasher13;

use super::{EmbedError, EmbedderConfig, TextEmbedder};
use crate::normalize::tokenize;

// Fixed seed for deterministic hashing.
// Changing either key changes every embedding; bump version() with it.
const HASH_SEED_K0: u64 = 0x7461_6c65_6e74_6d61;
const HASH_SEED_K1: u64 = 0x7463_685f_636f_7265;

/// Feature-hashing embedder.
///
/// - no training, no model assets
/// - O(tokens) per text
/// - SipHash13 with fixed seeds keeps vectors stable across Rust versions
pub struct HashEmbedder {
    config: EmbedderConfig,
}

impl HashEmbedder {
    pub fn new(config: EmbedderConfig) -> Self {
        let mut cfg = config;
        cfg.dimension = cfg.dimension.max(1);
        Self { config: cfg }
    }

    fn hash_token(&self, token: &str) -> usize {
        let mut hasher = SipHasher13::new_with_keys(HASH_SEED_K0, HASH_SEED_K1);
        token.hash(&mut hasher);
        (hasher.finish() as usize) % self.config.dimension
    }

    fn text_to_vector(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.config.dimension];

        for token in tokenize(text) {
            let idx = self.hash_token(&token);
            // Sign hashing: even hash -> +1, odd hash -> -1
            let sign = if self.hash_token(&format!("{token}_sign")) % 2 == 0 {
                1.0
            } else {
                -1.0
            };
            vector[idx] += sign;
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }

        vector
    }
}

impl TextEmbedder for HashEmbedder {
    fn name(&self) -> &'static str {
        "hash"
    }

    fn version(&self) -> &str {
        "v1"
    }

    fn dimension(&self) -> usize {
        self.config.dimension
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbedError> {
        Ok(texts.iter().map(|text| self.text_to_vector(text)).collect())
    }
}
