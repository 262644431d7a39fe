use tracing::warn;

use crate::embedding::similarity::cosine_similarity;
use crate::embedding::TextEmbedder;

/// Cosine similarity between the embeddings of two free-text profiles.
///
/// Either text blank after trimming -> 0.0. Embedding failure -> warn and
/// 0.0 so one bad backend call never sinks a whole ranking pass. The raw
/// cosine is returned unclamped; callers weigh it into an aggregate and a
/// negative contribution for opposed profiles is intentional.
pub fn calculate_semantic_similarity(embedder: &dyn TextEmbedder, text1: &str, text2: &str) -> f64 {
    if text1.trim().is_empty() || text2.trim().is_empty() {
        return 0.0;
    }

    let texts = [text1.to_string(), text2.to_string()];
    match embedder.embed_batch(&texts) {
        Ok(vectors) if vectors.len() == 2 => f64::from(cosine_similarity(&vectors[0], &vectors[1])),
        Ok(vectors) => {
            warn!(
                embedder = embedder.name(),
                returned = vectors.len(),
                "embedder returned wrong batch size"
            );
            0.0
        }
        Err(err) => {
            warn!(
                embedder = embedder.name(),
                error = %err,
                "embedding failed; semantic similarity defaults to zero"
            );
            0.0
        }
    }
}
