//! Combination of keyword and semantic scores into one ranking metric

use crate::processing::keyword_matcher::KeywordMatchResult;
use crate::processing::semantic_matcher::SemanticMatchResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Combined scores at or above this are a strong match
pub const STRONG_MATCH_THRESHOLD: f64 = 70.0;

/// Combined scores at or above this (and below strong) are a moderate match
pub const MODERATE_MATCH_THRESHOLD: f64 = 50.0;

/// Classification of a combined score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchBand {
    Strong,
    Moderate,
    Weak,
}

impl MatchBand {
    pub fn classify(score: f64) -> Self {
        if score >= STRONG_MATCH_THRESHOLD {
            MatchBand::Strong
        } else if score >= MODERATE_MATCH_THRESHOLD {
            MatchBand::Moderate
        } else {
            MatchBand::Weak
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchBand::Strong => "Strong match",
            MatchBand::Moderate => "Moderate match",
            MatchBand::Weak => "Weak match",
        }
    }
}

impl fmt::Display for MatchBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Average of the keyword and semantic percentages, rounded to 2 decimals
pub fn combine(keyword: &KeywordMatchResult, semantic: &SemanticMatchResult) -> f64 {
    combine_scores(keyword.keyword_score, semantic.similarity_score)
}

pub fn combine_scores(keyword_score: f64, similarity_score: f64) -> f64 {
    round2((keyword_score + similarity_score) / 2.0)
}
