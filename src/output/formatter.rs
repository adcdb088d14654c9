//! Console and JSON rendering of match results and leaderboards

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::knowledge::RoleKey;
use crate::processing::{KeywordOnlyResult, MatchBand, MatchResult};
use crate::ranking::{LeaderboardRow, LeaderboardSummary, SubmissionStore};
use colored::{Color, Colorize};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Everything shown for one role in placement mode
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardReport {
    pub company: String,
    pub role: String,
    /// Absent when nobody has submitted yet
    pub summary: Option<LeaderboardSummary>,
    pub rows: Vec<LeaderboardRow>,
    pub top_performers: Vec<LeaderboardRow>,
}

impl LeaderboardReport {
    pub fn build(store: &SubmissionStore, key: &RoleKey, top_n: usize) -> Result<Self> {
        let rows = store.ranked(key)?;
        let summary = LeaderboardSummary::from_rows(&rows);
        let top_performers = rows.iter().take(top_n).cloned().collect();

        Ok(Self {
            company: key.company.clone(),
            role: key.role.clone(),
            summary,
            rows,
            top_performers,
        })
    }
}

/// Trait for rendering results
pub trait OutputFormatter {
    fn format_match(&self, result: &MatchResult) -> Result<String>;
    fn format_keyword_only(&self, result: &KeywordOnlyResult) -> Result<String>;
    fn format_leaderboard(&self, report: &LeaderboardReport) -> Result<String>;
}

/// Pick the formatter the configuration asks for
pub fn formatter_for(config: &OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Console => Box::new(
            ConsoleFormatter::new(config.color_output, config.feedback_limit)
                .with_missing_skill_limit(config.missing_skill_limit),
        ),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}

/// Console formatter with colored score bands
pub struct ConsoleFormatter {
    use_colors: bool,
    missing_skill_limit: usize,
    feedback_limit: usize,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, feedback_limit: usize) -> Self {
        Self {
            use_colors,
            missing_skill_limit: 12,
            feedback_limit,
        }
    }

    pub fn with_missing_skill_limit(mut self, limit: usize) -> Self {
        self.missing_skill_limit = limit;
        self
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn score(&self, score: f64) -> String {
        let color = match MatchBand::classify(score) {
            MatchBand::Strong => Color::Green,
            MatchBand::Moderate => Color::Yellow,
            MatchBand::Weak => Color::Red,
        };
        self.paint(&format!("{:.2}%", score), color)
    }

    fn write_skills(
        &self,
        out: &mut String,
        matched: &[String],
        missing: &[String],
        feedback: &BTreeMap<String, String>,
    ) {
        let _ = writeln!(out, "\nSkills you have ({}):", matched.len());
        if matched.is_empty() {
            let _ = writeln!(out, "  (none of the required skills were found)");
        }
        for skill in matched {
            let _ = writeln!(out, "  + {}", skill);
        }

        let _ = writeln!(out, "\nSkills to develop ({}):", missing.len());
        for skill in missing.iter().take(self.missing_skill_limit) {
            let _ = writeln!(out, "  - {}", skill);
        }
        if missing.len() > self.missing_skill_limit {
            let _ = writeln!(out, "  ... and {} more", missing.len() - self.missing_skill_limit);
        }

        if missing.is_empty() || self.feedback_limit == 0 {
            return;
        }
        let _ = writeln!(out, "\nRecommended learning:");
        for skill in missing.iter().take(self.feedback_limit) {
            let recommendation = feedback.get(skill).map(String::as_str).unwrap_or_default();
            let _ = writeln!(out, "  {}: {}", skill, recommendation);
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_match(&self, result: &MatchResult) -> Result<String> {
        let mut out = String::new();
        let _ = writeln!(out, "{} - {}", result.company, result.role);
        let _ = writeln!(
            out,
            "\nOverall score: {} ({})",
            self.score(result.combined_score),
            result.band
        );
        let _ = writeln!(out, "  Keyword (ATS) score: {}", self.score(result.keyword.keyword_score));
        let _ = writeln!(out, "  Semantic score:      {}", self.score(result.semantic.similarity_score));

        self.write_skills(
            &mut out,
            &result.keyword.matched_skills,
            &result.keyword.missing_skills,
            &result.feedback,
        );
        Ok(out)
    }

    fn format_keyword_only(&self, result: &KeywordOnlyResult) -> Result<String> {
        let mut out = String::new();
        let _ = writeln!(out, "{} - {}", result.company, result.role);
        let _ = writeln!(out, "\n{}", self.paint("Semantic scoring unavailable, showing keyword score only", Color::Yellow));
        let _ = writeln!(out, "  Keyword (ATS) score: {}", self.score(result.keyword.keyword_score));

        self.write_skills(
            &mut out,
            &result.keyword.matched_skills,
            &result.keyword.missing_skills,
            &result.feedback,
        );
        Ok(out)
    }

    fn format_leaderboard(&self, report: &LeaderboardReport) -> Result<String> {
        let mut out = String::new();
        let _ = writeln!(out, "Rankings for {} - {}", report.company, report.role);

        let summary = match &report.summary {
            Some(summary) => summary,
            None => {
                let _ = writeln!(out, "\nNo submissions yet.");
                return Ok(out);
            }
        };

        let _ = writeln!(out, "\nApplicants: {}", summary.count);
        let _ = writeln!(out, "Average:    {:.1}%", summary.average);
        let _ = writeln!(out, "Highest:    {}", self.score(summary.max));
        let _ = writeln!(out, "Lowest:     {}", self.score(summary.min));

        let _ = writeln!(
            out,
            "\n{:>4}  {:<24} {:>9} {:>9} {:>9} {:>7}  {}",
            "Rank", "Name", "Overall", "ATS", "Semantic", "Skills", "Submitted"
        );
        for row in &report.rows {
            let semantic = row
                .semantic_score
                .map(|s| format!("{:.2}", s))
                .unwrap_or_else(|| "-".to_string());
            let _ = writeln!(
                out,
                "{:>4}  {:<24} {:>9.2} {:>9.2} {:>9} {:>7}  {}",
                row.rank,
                row.name,
                row.combined_score,
                row.keyword_score,
                semantic,
                format!("{}/{}", row.matched_skills, row.total_skills),
                row.submitted_at
            );
        }

        if !report.top_performers.is_empty() {
            let _ = writeln!(out, "\nTop {} performers:", report.top_performers.len());
            for row in &report.top_performers {
                let _ = writeln!(out, "  #{} {} ({})", row.rank, row.name, self.score(row.combined_score));
            }
        }
        Ok(out)
    }
}

/// JSON formatter for scripting and integration
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_match(&self, result: &MatchResult) -> Result<String> {
        self.render(result)
    }

    fn format_keyword_only(&self, result: &KeywordOnlyResult) -> Result<String> {
        self.render(result)
    }

    fn format_leaderboard(&self, report: &LeaderboardReport) -> Result<String> {
        self.render(report)
    }
}
