//! Semantic similarity between a resume and a synthesized role description

use crate::error::Result;
use crate::processing::combiner::round2;
use crate::processing::embeddings::{cosine_similarity, Embedder};
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticMatchResult {
    /// Cosine similarity clamped at zero, as a percentage (0-100, 2 decimals)
    pub similarity_score: f64,
}

impl SemanticMatchResult {
    /// Negative similarity is clamped to 0 so the score never leaves [0, 100]
    pub fn from_cosine(cosine: f32) -> Self {
        let similarity = f64::from(cosine).clamp(0.0, 1.0);
        Self {
            similarity_score: round2(similarity * 100.0),
        }
    }
}

/// Sentence describing a role, built only from its skill list
pub fn role_description(role: &str, skills: &[String]) -> String {
    format!("Required skills for a {} include: {}.", role, skills.join(", "))
}

/// Scores resume text against a role description with a shared embedder
#[derive(Clone)]
pub struct SemanticMatcher {
    embedder: Arc<dyn Embedder>,
}

impl SemanticMatcher {
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self { embedder }
    }

    pub fn score(&self, text: &str, role_description: &str) -> Result<SemanticMatchResult> {
        let resume_embedding = self.embedder.embed(text)?;
        let role_embedding = self.embedder.embed(role_description)?;

        let cosine = cosine_similarity(&resume_embedding, &role_embedding)?;
        debug!("Cosine similarity {:.4} using {}", cosine, self.embedder.model_name());

        Ok(SemanticMatchResult::from_cosine(cosine))
    }

    pub fn model_name(&self) -> &str {
        self.embedder.model_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::embeddings::UnavailableEmbedder;
    use crate::processing::testing::TrigramEmbedder;

    #[test]
    fn test_role_description_format() {
        let skills = vec!["python".to_string(), "sql".to_string(), "cloud".to_string()];
        assert_eq!(
            role_description("Software Developer", &skills),
            "Required skills for a Software Developer include: python, sql, cloud."
        );
    }

    #[test]
    fn test_negative_cosine_clamps_to_zero() {
        assert_eq!(SemanticMatchResult::from_cosine(-0.4).similarity_score, 0.0);
        assert_eq!(SemanticMatchResult::from_cosine(0.0).similarity_score, 0.0);
        assert_eq!(SemanticMatchResult::from_cosine(0.71234).similarity_score, 71.23);
        assert_eq!(SemanticMatchResult::from_cosine(1.0).similarity_score, 100.0);
    }

    #[test]
    fn test_related_text_scores_higher() {
        let matcher = SemanticMatcher::new(Arc::new(TrigramEmbedder::default()));
        let description = "Required skills for a Data Scientist include: python, machin, learn, statist.";

        let close = matcher.score("python machin learn statist model", description).unwrap();
        let far = matcher.score("mechan autocad solidwork", description).unwrap();

        assert!(close.similarity_score > far.similarity_score);
        assert!((0.0..=100.0).contains(&far.similarity_score));
    }

    #[test]
    fn test_repeated_scoring_is_identical() {
        let matcher = SemanticMatcher::new(Arc::new(TrigramEmbedder::default()));
        let first = matcher.score("java spring rest api", "Required skills for a Developer include: java.").unwrap();
        let second = matcher.score("java spring rest api", "Required skills for a Developer include: java.").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_backend_failure_is_not_a_zero_score() {
        let matcher = SemanticMatcher::new(Arc::new(UnavailableEmbedder::new("model missing")));
        let err = matcher.score("python", "Required skills for a Dev include: python.").unwrap_err();
        assert!(err.is_degraded());
    }
}
