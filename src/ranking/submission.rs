//! Candidate submissions and their flat leaderboard projection

use crate::knowledge::RoleKey;
use crate::processing::combiner::combine_scores;
use crate::processing::{KeywordOnlyResult, MatchResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp format used in leaderboard rows
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One candidate's scores for one role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSubmission {
    pub name: String,
    pub company: String,
    pub role: String,
    pub keyword_score: f64,
    /// `None` when the submission was scored keyword-only
    pub semantic_score: Option<f64>,
    pub combined_score: f64,
    pub matched_skills: usize,
    pub missing_skills: usize,
    pub total_skills: usize,
    pub submitted_at: DateTime<Utc>,
}

impl CandidateSubmission {
    pub fn from_match(name: impl Into<String>, result: &MatchResult, submitted_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            company: result.company.clone(),
            role: result.role.clone(),
            keyword_score: result.keyword.keyword_score,
            semantic_score: Some(result.semantic.similarity_score),
            combined_score: result.combined_score,
            matched_skills: result.keyword.matched_skills.len(),
            missing_skills: result.keyword.missing_skills.len(),
            total_skills: result.keyword.total_required,
            submitted_at,
        }
    }

    /// Keyword-only submissions combine with a semantic score of 0, so they sit
    /// on the same scale as fully scored ones. `semantic_score` stays `None`.
    pub fn from_keyword_only(
        name: impl Into<String>,
        result: &KeywordOnlyResult,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            company: result.company.clone(),
            role: result.role.clone(),
            keyword_score: result.keyword.keyword_score,
            semantic_score: None,
            combined_score: combine_scores(result.keyword.keyword_score, 0.0),
            matched_skills: result.keyword.matched_skills.len(),
            missing_skills: result.keyword.missing_skills.len(),
            total_skills: result.keyword.total_required,
            submitted_at,
        }
    }

    /// Identity key: a later submission with the same key replaces this one
    pub fn same_identity(&self, other: &CandidateSubmission) -> bool {
        self.name == other.name && self.company == other.company && self.role == other.role
    }

    pub fn is_for(&self, key: &RoleKey) -> bool {
        self.company == key.company && self.role == key.role
    }
}

/// Flat, tabular view of a ranked submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub name: String,
    pub combined_score: f64,
    pub keyword_score: f64,
    pub semantic_score: Option<f64>,
    pub matched_skills: usize,
    pub missing_skills: usize,
    pub total_skills: usize,
    pub submitted_at: String,
}

impl LeaderboardRow {
    pub fn new(rank: usize, submission: &CandidateSubmission) -> Self {
        Self {
            rank,
            name: submission.name.clone(),
            combined_score: submission.combined_score,
            keyword_score: submission.keyword_score,
            semantic_score: submission.semantic_score,
            matched_skills: submission.matched_skills,
            missing_skills: submission.missing_skills,
            total_skills: submission.total_skills,
            submitted_at: submission.submitted_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}
