//! Ranking of candidate submissions per role

pub mod export;
pub mod store;
pub mod submission;

pub use store::{LeaderboardSummary, SubmissionStore, UpsertOutcome};
pub use submission::{CandidateSubmission, LeaderboardRow};
