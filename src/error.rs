//! Error handling for the placement matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatcherError {
    #[error("Unknown role '{role}' for company '{company}'")]
    UnknownRole { company: String, role: String },

    #[error("Embedding backend unavailable: {0}")]
    EmbeddingUnavailable(String),

    #[error("No submissions for '{role}' at '{company}'")]
    EmptyLeaderboard { company: String, role: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Knowledge base error: {0}")]
    KnowledgeBase(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Embedding dimensions don't match: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("Submission store lock poisoned")]
    StorePoisoned,
}

impl MatcherError {
    /// Whether the caller may continue with keyword-only scoring
    pub fn is_degraded(&self) -> bool {
        matches!(self, MatcherError::EmbeddingUnavailable(_))
    }

    pub(crate) fn unknown_role(company: &str, role: &str) -> Self {
        MatcherError::UnknownRole {
            company: company.to_string(),
            role: role.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MatcherError>;
