//! Shared helpers for integration tests

use placement_matcher::processing::embeddings::Embedder;
use placement_matcher::Result;
use std::collections::HashSet;

/// Bag-of-words embedder over a fixed vocabulary, deterministic and offline
pub struct VocabularyEmbedder {
    vocabulary: Vec<&'static str>,
}

impl VocabularyEmbedder {
    pub fn new() -> Self {
        Self {
            vocabulary: vec![
                "python", "java", "sql", "cloud", "aws", "linux", "develop", "api", "data", "design",
                "mechan", "autocad", "commun", "custom", "servic", "test",
            ],
        }
    }
}

impl Embedder for VocabularyEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let words: HashSet<&str> = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();
        Ok(self
            .vocabulary
            .iter()
            .map(|term| if words.iter().any(|w| w.contains(term)) { 1.0 } else { 0.0 })
            .collect())
    }

    fn model_name(&self) -> &str {
        "vocabulary-test"
    }
}
