//! Integration tests for matching and ranking

mod common;

use chrono::{Duration, TimeZone, Utc};
use common::VocabularyEmbedder;
use placement_matcher::knowledge::{KnowledgeBase, RoleKey};
use placement_matcher::output::{ConsoleFormatter, LeaderboardReport, OutputFormatter};
use placement_matcher::processing::{MatchBand, MatchEngine};
use placement_matcher::ranking::{export, CandidateSubmission, SubmissionStore, UpsertOutcome};
use placement_matcher::MatcherError;
use std::sync::Arc;
use tempfile::TempDir;

fn engine_with(knowledge_base: KnowledgeBase) -> MatchEngine {
    MatchEngine::from_knowledge_base(Arc::new(knowledge_base), Arc::new(VocabularyEmbedder::new()))
}

const CUSTOM_KB: &str = r#"
version = 1

[[roles]]
company = "Acme Cloud"
role = "Platform Engineer"
skills = ["python", "sql", "cloud"]

[courses]
cloud = "Cloud Computing Basics - Coursera"
"#;

#[test]
fn test_python_sql_without_cloud() {
    let engine = engine_with(KnowledgeBase::from_toml_str(CUSTOM_KB).unwrap());
    let key = RoleKey::new("Acme Cloud", "Platform Engineer");

    let result = engine.analyze("python develop sql databas experi", &key).unwrap();

    assert_eq!(result.keyword.keyword_score, 66.67);
    assert_eq!(result.keyword.matched_skills, vec!["python", "sql"]);
    assert_eq!(result.keyword.missing_skills, vec!["cloud"]);
    assert_eq!(result.feedback["cloud"], "Cloud Computing Basics - Coursera");
    assert!((0.0..=100.0).contains(&result.semantic.similarity_score));
    assert_eq!(
        result.combined_score,
        ((result.keyword.keyword_score + result.semantic.similarity_score) / 2.0 * 100.0).round() / 100.0
    );
}

#[test]
fn test_unrelated_resume_scores_weak() {
    let engine = engine_with(KnowledgeBase::builtin().unwrap());
    let key = RoleKey::new("IBM", "Software Developer");

    let result = engine.analyze("mechan autocad solidwork", &key).unwrap();
    assert_eq!(result.keyword.keyword_score, 0.0);
    assert_eq!(result.semantic.similarity_score, 0.0);
    assert_eq!(result.band, MatchBand::Weak);
    assert_eq!(result.feedback.len(), 7);
}

#[test]
fn test_empty_resume_is_not_an_error() {
    let engine = engine_with(KnowledgeBase::builtin().unwrap());
    let result = engine.analyze("", &RoleKey::new("Amazon", "Support Engineer III")).unwrap();
    assert_eq!(result.keyword.keyword_score, 0.0);
    assert_eq!(result.combined_score, 0.0);
}

#[test]
fn test_unknown_role_never_defaults_to_zero() {
    let engine = engine_with(KnowledgeBase::builtin().unwrap());
    let err = engine
        .analyze("python", &RoleKey::new("Amazon", "Software Developer"))
        .unwrap_err();
    assert!(matches!(err, MatcherError::UnknownRole { .. }));
}

#[test]
fn test_placement_ranking_flow() {
    let engine = engine_with(KnowledgeBase::builtin().unwrap());
    let key = RoleKey::new("Infosys", "Systems Engineer Trainee");
    let store = SubmissionStore::new();
    let start = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap();

    let candidates = [
        ("Asha", "python"),
        ("Ravi", "programm java python sql algorithm"),
        ("Meera", "java sql"),
        ("Asha", "programm java python sql"),
    ];

    let mut outcomes = Vec::new();
    for (i, (name, text)) in candidates.iter().enumerate() {
        let result = engine.analyze(text, &key).unwrap();
        let submission = CandidateSubmission::from_match(*name, &result, start + Duration::minutes(i as i64));
        outcomes.push(store.upsert(submission).unwrap());
    }
    assert_eq!(outcomes.last(), Some(&UpsertOutcome::Replaced));

    let board = store.leaderboard(&key).unwrap();
    assert_eq!(board.len(), 3);
    assert_eq!(board.iter().filter(|s| s.name == "Asha").count(), 1);
    for pair in board.windows(2) {
        assert!(pair[0].combined_score >= pair[1].combined_score);
    }

    let asha = board.iter().find(|s| s.name == "Asha").unwrap();
    assert_eq!(asha.keyword_score, 80.0);
    assert_eq!(asha.submitted_at, start + Duration::minutes(3));

    let summary = store.summary(&key).unwrap();
    assert_eq!(summary.count, 3);
    assert_eq!(summary.max, board[0].combined_score);
    assert_eq!(summary.min, board[2].combined_score);
    assert!(summary.min <= summary.average && summary.average <= summary.max);
}

#[test]
fn test_summary_without_submissions() {
    let store = SubmissionStore::new();
    let err = store.summary(&RoleKey::new("UST", "Data Scientist")).unwrap_err();
    assert!(matches!(err, MatcherError::EmptyLeaderboard { .. }));
}

#[test]
fn test_export_ranked_leaderboard() {
    let engine = engine_with(KnowledgeBase::builtin().unwrap());
    let key = RoleKey::new("Envestnet", "Cloud Platform Engineer");
    let store = SubmissionStore::new();

    for (name, text) in [("Nila", "cloud aws docker"), ("Arjun", "azure kubernet devops cloud aws docker")] {
        let result = engine.analyze(text, &key).unwrap();
        store.upsert(CandidateSubmission::from_match(name, &result, Utc::now())).unwrap();
    }

    let report = LeaderboardReport::build(&store, &key, 5).unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rankings.csv");
    export::export_file(&report.rows, &path).unwrap();

    let csv = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("rank,name,combined_score"));
    assert!(lines[1].starts_with("1,Arjun,"));
    assert!(lines[2].starts_with("2,Nila,"));

    let console = ConsoleFormatter::new(false, 8).format_leaderboard(&report).unwrap();
    assert!(console.contains("Applicants: 2"));
}

#[test]
fn test_knowledge_base_file_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kb.toml");
    std::fs::write(&path, KnowledgeBase::builtin().unwrap().to_toml_string().unwrap()).unwrap();

    let loaded = KnowledgeBase::load(&path).unwrap();
    assert_eq!(loaded.role_count(), KnowledgeBase::builtin().unwrap().role_count());
    assert_eq!(loaded.companies(), KnowledgeBase::builtin().unwrap().companies());
}
