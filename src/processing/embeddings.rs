//! Sentence embeddings using Model2Vec

use crate::config::Config;
use crate::error::{MatcherError, Result};
use log::info;
use model2vec_rs::model::StaticModel;
use std::path::PathBuf;
use std::time::Instant;

/// Maps text to a fixed-size dense vector.
///
/// Implementations are loaded once by the caller and shared read-only
/// between matching requests.
pub trait Embedder: Send + Sync {
    fn embed(&self, text: &str) -> Result<Vec<f32>>;

    fn model_name(&self) -> &str;
}

/// Static Model2Vec model, loaded from a local folder or the Hugging Face Hub
pub struct Model2VecEmbedder {
    model: StaticModel,
    model_name: String,
}

impl Model2VecEmbedder {
    /// Load a model from a local folder or hub repository id
    pub fn load(repo_or_path: &str) -> Result<Self> {
        let start_time = Instant::now();
        info!("Loading Model2Vec embedding model from: {}", repo_or_path);

        let model = StaticModel::from_pretrained(
            repo_or_path,
            None, // token
            None, // normalize
            None, // subfolder
        )
        .map_err(|e| MatcherError::EmbeddingUnavailable(format!("Failed to load model {}: {:#}", repo_or_path, e)))?;

        info!("Model loaded successfully in {:.2?}", start_time.elapsed());

        Ok(Self {
            model,
            model_name: repo_or_path.to_string(),
        })
    }

    /// Load the model named in the configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let source = Self::model_source(config);
        Self::load(&source.to_string_lossy())
    }

    /// Prefer a local copy under the models directory, fall back to the hub id
    fn model_source(config: &Config) -> PathBuf {
        let model_name = &config.models.embedding_model;
        let local_path = config.models_dir().join(model_name);
        if local_path.exists() {
            local_path
        } else {
            PathBuf::from(model_name)
        }
    }
}

impl Embedder for Model2VecEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self.model.encode_single(text))
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

/// Stand-in for a backend that failed to load.
///
/// Every call reports `EmbeddingUnavailable` with the original load failure,
/// so keyword-only fallback stays an explicit decision of the caller.
pub struct UnavailableEmbedder {
    reason: String,
}

impl UnavailableEmbedder {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl Embedder for UnavailableEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        Err(MatcherError::EmbeddingUnavailable(self.reason.clone()))
    }

    fn model_name(&self) -> &str {
        "unavailable"
    }
}

/// Cosine similarity between two embeddings, in [-1, 1]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(MatcherError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    if a.is_empty() {
        return Ok(0.0);
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        Ok(0.0)
    } else {
        Ok((dot_product / (norm_a * norm_b)).clamp(-1.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_identical_and_opposite() {
        let a = [1.0, 2.0, 3.0];
        let b = [-1.0, -2.0, -3.0];
        assert!((cosine_similarity(&a, &a).unwrap() - 1.0).abs() < 1e-6);
        assert!((cosine_similarity(&a, &b).unwrap() + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal_and_zero_vectors() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap(), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]).unwrap(), 0.0);
        assert_eq!(cosine_similarity(&[], &[]).unwrap(), 0.0);
    }

    #[test]
    fn test_cosine_dimension_mismatch() {
        let err = cosine_similarity(&[1.0], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, MatcherError::DimensionMismatch { left: 1, right: 2 }));
    }

    #[test]
    fn test_unavailable_embedder_reports_reason() {
        let embedder = UnavailableEmbedder::new("no network");
        let err = embedder.embed("python").unwrap_err();
        assert!(err.is_degraded());
        assert!(err.to_string().contains("no network"));
    }

    #[test]
    fn test_load_missing_local_model_is_unavailable() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = Model2VecEmbedder::load(&dir.path().to_string_lossy()).err().unwrap();
        assert!(err.is_degraded());
    }
}
