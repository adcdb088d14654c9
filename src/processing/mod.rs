//! Matching pipeline: keyword overlap, semantic similarity, scoring, feedback

pub mod combiner;
pub mod embeddings;
pub mod engine;
pub mod feedback;
pub mod keyword_matcher;
pub mod semantic_matcher;

#[cfg(test)]
pub(crate) mod testing;

pub use combiner::{combine, MatchBand, MODERATE_MATCH_THRESHOLD, STRONG_MATCH_THRESHOLD};
pub use engine::{KeywordOnlyResult, MatchEngine, MatchResult};
pub use keyword_matcher::{KeywordMatchResult, KeywordMatcher};
pub use semantic_matcher::{SemanticMatchResult, SemanticMatcher};
