//! Placement matcher library
//!
//! Scores normalized resume text against the skill requirements of a job role
//! and ranks candidates per role.

pub mod cli;
pub mod config;
pub mod error;
pub mod knowledge;
pub mod output;
pub mod processing;
pub mod ranking;

pub use config::Config;
pub use error::{MatcherError, Result};
pub use knowledge::{KnowledgeBase, RoleKey};
pub use processing::{MatchEngine, MatchResult};
pub use ranking::{CandidateSubmission, SubmissionStore};
