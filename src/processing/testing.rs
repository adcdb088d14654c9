//! Deterministic embedder for unit tests

use crate::error::Result;
use crate::processing::embeddings::Embedder;

/// Hashes character trigrams into a fixed number of buckets
pub(crate) struct TrigramEmbedder {
    dimensions: usize,
}

impl Default for TrigramEmbedder {
    fn default() -> Self {
        Self { dimensions: 64 }
    }
}

impl Embedder for TrigramEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut vector = vec![0.0f32; self.dimensions];
        let chars: Vec<char> = text.chars().collect();
        for window in chars.windows(3) {
            // FNV-1a keeps bucket assignment stable across runs
            let mut hash: u64 = 0xcbf29ce484222325;
            for c in window {
                hash ^= *c as u64;
                hash = hash.wrapping_mul(0x100000001b3);
            }
            vector[(hash % self.dimensions as u64) as usize] += 1.0;
        }
        Ok(vector)
    }

    fn model_name(&self) -> &str {
        "trigram-test"
    }
}
