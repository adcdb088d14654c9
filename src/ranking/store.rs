//! Session-scoped submission repository and leaderboard queries

use crate::error::{MatcherError, Result};
use crate::knowledge::RoleKey;
use crate::processing::combiner::round2;
use crate::ranking::submission::{CandidateSubmission, LeaderboardRow};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    /// An earlier submission with the same identity was overwritten
    Replaced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardSummary {
    pub count: usize,
    pub average: f64,
    pub max: f64,
    pub min: f64,
}

impl LeaderboardSummary {
    /// Statistics over rows already sorted best first; `None` when empty
    pub fn from_rows(rows: &[LeaderboardRow]) -> Option<Self> {
        let (first, last) = (rows.first()?, rows.last()?);
        let total: f64 = rows.iter().map(|r| r.combined_score).sum();
        Some(Self {
            count: rows.len(),
            average: round2(total / rows.len() as f64),
            max: first.combined_score,
            min: last.combined_score,
        })
    }
}

/// In-memory submissions, kept in insertion order
#[derive(Debug, Default)]
pub struct SubmissionStore {
    entries: RwLock<Vec<CandidateSubmission>>,
}

impl SubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<CandidateSubmission>>> {
        self.entries.read().map_err(|_| MatcherError::StorePoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<CandidateSubmission>>> {
        self.entries.write().map_err(|_| MatcherError::StorePoisoned)
    }

    /// Insert a submission, replacing any entry with the same (name, company, role).
    ///
    /// A replaced entry keeps its original position, so tie order follows the
    /// first submission.
    pub fn upsert(&self, submission: CandidateSubmission) -> Result<UpsertOutcome> {
        let mut entries = self.write()?;

        match entries.iter_mut().find(|existing| existing.same_identity(&submission)) {
            Some(existing) => {
                info!(
                    "{} already submitted for {} - {}, updating scores",
                    submission.name, submission.company, submission.role
                );
                *existing = submission;
                Ok(UpsertOutcome::Replaced)
            }
            None => {
                debug!("Added submission for {}", submission.name);
                entries.push(submission);
                Ok(UpsertOutcome::Inserted)
            }
        }
    }

    /// Submissions for a role, best combined score first, stable on ties
    pub fn leaderboard(&self, key: &RoleKey) -> Result<Vec<CandidateSubmission>> {
        let mut board: Vec<CandidateSubmission> = self
            .read()?
            .iter()
            .filter(|s| s.is_for(key))
            .cloned()
            .collect();
        board.sort_by(|a, b| b.combined_score.total_cmp(&a.combined_score));
        Ok(board)
    }

    /// Leaderboard as flat rows with 1-based ranks
    pub fn ranked(&self, key: &RoleKey) -> Result<Vec<LeaderboardRow>> {
        Ok(self
            .leaderboard(key)?
            .iter()
            .enumerate()
            .map(|(i, submission)| LeaderboardRow::new(i + 1, submission))
            .collect())
    }

    /// The `n` best submissions for a role
    pub fn top(&self, key: &RoleKey, n: usize) -> Result<Vec<CandidateSubmission>> {
        let mut board = self.leaderboard(key)?;
        board.truncate(n);
        Ok(board)
    }

    pub fn summary(&self, key: &RoleKey) -> Result<LeaderboardSummary> {
        LeaderboardSummary::from_rows(&self.ranked(key)?).ok_or_else(|| MatcherError::EmptyLeaderboard {
            company: key.company.clone(),
            role: key.role.clone(),
        })
    }

    /// Drop every submission for every role
    pub fn clear(&self) -> Result<()> {
        let mut entries = self.write()?;
        info!("Cleared {} submissions", entries.len());
        entries.clear();
        Ok(())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.is_empty())
    }
}
