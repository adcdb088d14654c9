//! Course recommendations for skill gaps

use crate::knowledge::CourseCatalog;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Recommendation for a skill the catalogue has no course for
pub fn generic_recommendation(skill: &str) -> String {
    format!("Search for resources on '{}'.", skill)
}

#[derive(Clone)]
pub struct FeedbackGenerator {
    catalog: Arc<dyn CourseCatalog>,
}

impl FeedbackGenerator {
    pub fn new(catalog: Arc<dyn CourseCatalog>) -> Self {
        Self { catalog }
    }

    /// One recommendation per missing skill
    pub fn feedback(&self, missing_skills: &[String]) -> BTreeMap<String, String> {
        missing_skills
            .iter()
            .map(|skill| (skill.clone(), self.recommend(skill)))
            .collect()
    }

    pub fn recommend(&self, skill: &str) -> String {
        match self.catalog.course_for(skill) {
            Some(course) => course.to_string(),
            None => generic_recommendation(skill),
        }
    }
}
