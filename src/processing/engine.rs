//! Main match engine combining keyword matching, semantic similarity, and feedback

use crate::error::Result;
use crate::knowledge::{CourseCatalog, KnowledgeBase, RequirementSource, RoleKey};
use crate::processing::combiner::{combine, MatchBand};
use crate::processing::embeddings::Embedder;
use crate::processing::feedback::FeedbackGenerator;
use crate::processing::keyword_matcher::{KeywordMatchResult, KeywordMatcher};
use crate::processing::semantic_matcher::{role_description, SemanticMatchResult, SemanticMatcher};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

/// Full analysis of one resume against one role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub company: String,
    pub role: String,
    #[serde(flatten)]
    pub keyword: KeywordMatchResult,
    #[serde(flatten)]
    pub semantic: SemanticMatchResult,
    /// Average of keyword and semantic scores (0-100, 2 decimals)
    pub combined_score: f64,
    pub band: MatchBand,
    /// Missing skill -> recommendation
    pub feedback: BTreeMap<String, String>,
}

impl MatchResult {
    pub fn role_key(&self) -> RoleKey {
        RoleKey::new(self.company.clone(), self.role.clone())
    }
}

/// Keyword-only analysis, used when the embedding backend is unavailable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordOnlyResult {
    pub company: String,
    pub role: String,
    #[serde(flatten)]
    pub keyword: KeywordMatchResult,
    pub feedback: BTreeMap<String, String>,
}

/// Coordinates all matching components for resolved roles
#[derive(Clone)]
pub struct MatchEngine {
    requirements: Arc<dyn RequirementSource>,
    semantic: SemanticMatcher,
    feedback: FeedbackGenerator,
}

impl MatchEngine {
    pub fn new(
        requirements: Arc<dyn RequirementSource>,
        courses: Arc<dyn CourseCatalog>,
        embedder: Arc<dyn Embedder>,
    ) -> Self {
        Self {
            requirements,
            semantic: SemanticMatcher::new(embedder),
            feedback: FeedbackGenerator::new(courses),
        }
    }

    /// Engine backed by a single knowledge base for both lookups
    pub fn from_knowledge_base(knowledge_base: Arc<KnowledgeBase>, embedder: Arc<dyn Embedder>) -> Self {
        Self::new(knowledge_base.clone(), knowledge_base, embedder)
    }

    /// Keyword, semantic, and feedback analysis for one resume
    pub fn analyze(&self, text: &str, key: &RoleKey) -> Result<MatchResult> {
        let start_time = Instant::now();
        let requirement = self.requirements.resolve(key)?;

        let keyword = KeywordMatcher::new(requirement.skills())?.score(text);
        let description = role_description(&key.role, requirement.skills());
        let semantic = self.semantic.score(text, &description)?;

        let combined_score = combine(&keyword, &semantic);
        let feedback = self.feedback.feedback(&keyword.missing_skills);

        info!(
            "Matched resume against {}: combined {:.2}% (keywords {:.2}%, semantic {:.2}%)",
            key, combined_score, keyword.keyword_score, semantic.similarity_score
        );
        debug!("Analysis took {:.2?}", start_time.elapsed());

        Ok(MatchResult {
            company: key.company.clone(),
            role: key.role.clone(),
            keyword,
            semantic,
            combined_score,
            band: MatchBand::classify(combined_score),
            feedback,
        })
    }

    /// Keyword matching and feedback without the semantic step
    pub fn analyze_keywords(&self, text: &str, key: &RoleKey) -> Result<KeywordOnlyResult> {
        let requirement = self.requirements.resolve(key)?;
        let keyword = KeywordMatcher::new(requirement.skills())?.score(text);
        let feedback = self.feedback.feedback(&keyword.missing_skills);

        Ok(KeywordOnlyResult {
            company: key.company.clone(),
            role: key.role.clone(),
            keyword,
            feedback,
        })
    }

    /// The synthesized description the semantic step compares against
    pub fn role_description(&self, key: &RoleKey) -> Result<String> {
        let requirement = self.requirements.resolve(key)?;
        Ok(role_description(&key.role, requirement.skills()))
    }

    pub fn embedding_model(&self) -> &str {
        self.semantic.model_name()
    }
}
