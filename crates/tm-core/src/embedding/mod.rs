pub mod hash;
pub mod similarity;

pub use hash::HashEmbedder;
pub use similarity::cosine_similarity;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("embedding backend failure: {0}")]
    Backend(String),
}

/// A produced embedding with creation metadata.
#[derive(Debug, Clone)]
pub struct Embedding {
    pub vector: Vec<f32>,
    pub embedder: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone)]
pub struct EmbedderConfig {
    /// Vector dimension (powers of two recommended: 256, 512, 1024).
    pub dimension: usize,
}

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self { dimension: 256 }
    }
}

/// Text-embedding capability.
///
/// Implementations:
/// - HashEmbedder: feature hashing (deterministic, no model assets)
///
/// The core has no opinion on model internals, only on the
/// batch-in/vectors-out contract. All vectors in one batch share
/// `dimension()`.
pub trait TextEmbedder: Send + Sync {
    /// Implementation name ("hash").
    fn name(&self) -> &'static str;

    /// Model generation, for result provenance.
    fn version(&self) -> &str;

    fn dimension(&self) -> usize;

    /// Embed every text in one call. Batch-oriented so backends with real
    /// inference cost amortize it across a whole ranking pass.
    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbedError>;

    /// Single-text convenience over `embed_batch`.
    fn embed(&self, text: &str) -> Result<Embedding, EmbedError> {
        let mut vectors = self.embed_batch(std::slice::from_ref(&text.to_string()))?;
        let vector = vectors.pop().ok_or_else(|| {
            EmbedError::Backend(format!("{} returned an empty batch", self.name()))
        })?;
        Ok(Embedding {
            vector,
            embedder: format!("{}-{}", self.name(), self.version()),
            created_at: chrono::Utc::now(),
        })
    }
}

/// Embedder factory. Unknown names fall back to feature hashing.
pub fn create_embedder(name: &str, config: EmbedderConfig) -> Box<dyn TextEmbedder> {
    match name {
        "hash" => Box::new(HashEmbedder::new(config)),
        _ => Box::new(HashEmbedder::new(config)),
    }
}

/// Read embedder settings from the environment.
pub fn load_config_from_env() -> EmbedderConfig {
    EmbedderConfig {
        dimension: std::env::var("TM_EMBED_DIMENSION")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
    }
}
