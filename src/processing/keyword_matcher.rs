//! ATS-style keyword matching of required skills against normalized resume text

use crate::error::{MatcherError, Result};
use crate::processing::combiner::round2;
use aho_corasick::{AhoCorasick, MatchKind};
use log::debug;
use serde::{Deserialize, Serialize};

/// Outcome of matching one resume against one role's skill list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatchResult {
    /// Required skills found in the text, in requirement order
    pub matched_skills: Vec<String>,
    /// Required skills absent from the text, in requirement order
    pub missing_skills: Vec<String>,
    pub total_required: usize,
    /// Percentage of required skills matched (0-100, 2 decimals)
    pub keyword_score: f64,
}

impl KeywordMatchResult {
    fn empty() -> Self {
        Self {
            matched_skills: Vec::new(),
            missing_skills: Vec::new(),
            total_required: 0,
            keyword_score: 0.0,
        }
    }
}

/// Substring matcher over a fixed set of required skills.
///
/// A skill counts as present when it occurs anywhere in the text, including
/// inside a longer word. Normalized text is stemmed, so `develop` must match
/// `developer` and `cloud` must match `cloudform`.
pub struct KeywordMatcher {
    skills: Vec<String>,
    automaton: Option<AhoCorasick>,
}

impl KeywordMatcher {
    /// Build a matcher for the given required skills
    pub fn new(required_skills: &[String]) -> Result<Self> {
        let automaton = if required_skills.is_empty() {
            None
        } else {
            // Standard semantics are required for overlapping search, which is
            // what makes this equivalent to per-skill containment.
            let automaton = AhoCorasick::builder()
                .match_kind(MatchKind::Standard)
                .build(required_skills)
                .map_err(|e| MatcherError::InvalidInput(format!("Failed to build keyword matcher: {}", e)))?;
            Some(automaton)
        };

        Ok(Self {
            skills: required_skills.to_vec(),
            automaton,
        })
    }

    /// Score normalized text against the required skills
    pub fn score(&self, text: &str) -> KeywordMatchResult {
        let automaton = match &self.automaton {
            Some(automaton) => automaton,
            None => return KeywordMatchResult::empty(),
        };

        let mut found = vec![false; self.skills.len()];
        for mat in automaton.find_overlapping_iter(text) {
            found[mat.pattern().as_usize()] = true;
        }

        let mut matched_skills = Vec::new();
        let mut missing_skills = Vec::new();
        for (skill, present) in self.skills.iter().zip(found) {
            if present {
                matched_skills.push(skill.clone());
            } else {
                missing_skills.push(skill.clone());
            }
        }

        let total_required = self.skills.len();
        let keyword_score = round2(matched_skills.len() as f64 / total_required as f64 * 100.0);

        debug!(
            "Keyword match: {}/{} skills ({:.2}%)",
            matched_skills.len(),
            total_required,
            keyword_score
        );

        KeywordMatchResult {
            matched_skills,
            missing_skills,
            total_required,
            keyword_score,
        }
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }
}

/// One-shot keyword scoring
pub fn score_keywords(text: &str, required_skills: &[String]) -> Result<KeywordMatchResult> {
    Ok(KeywordMatcher::new(required_skills)?.score(text))
}
