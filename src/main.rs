//! Placement matcher: resume-to-role matching and candidate ranking

use anyhow::{bail, Context};
use chrono::{Local, Utc};
use clap::Parser;
use log::{error, info, warn};
use placement_matcher::cli::{self, Cli, Commands, ConfigAction};
use placement_matcher::config::Config;
use placement_matcher::knowledge::{KnowledgeBase, RequirementSource, RoleKey};
use placement_matcher::output::{formatter_for, LeaderboardReport};
use placement_matcher::processing::embeddings::{Embedder, Model2VecEmbedder, UnavailableEmbedder};
use placement_matcher::processing::MatchEngine;
use placement_matcher::ranking::export;
use placement_matcher::ranking::{CandidateSubmission, SubmissionStore, UpsertOutcome};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

const RESUME_EXTENSIONS: &[&str] = &["txt", "md"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: &Path) -> anyhow::Result<()> {
    match command {
        Commands::Match {
            company,
            role,
            resume,
            keyword_only,
            output,
        } => {
            if let Some(format) = output {
                config.output.format = cli::parse_output_format(&format).map_err(anyhow::Error::msg)?;
            }
            let knowledge_base = Arc::new(config.knowledge_base()?);
            let key = RoleKey::new(company, role);
            knowledge_base.resolve(&key)?;

            let text = read_resume(&resume).await?;
            let formatter = formatter_for(&config.output);

            if keyword_only {
                let engine = MatchEngine::from_knowledge_base(
                    knowledge_base,
                    Arc::new(UnavailableEmbedder::new("semantic scoring disabled")),
                );
                let result = engine.analyze_keywords(&text, &key)?;
                println!("{}", formatter.format_keyword_only(&result)?);
                return Ok(());
            }

            let embedder = load_embedder(&config)
                .await
                .context("Semantic scoring unavailable; pass --keyword-only to score keywords alone")?;
            let engine = MatchEngine::from_knowledge_base(knowledge_base, embedder);
            let result = engine.analyze(&text, &key)?;
            println!("{}", formatter.format_match(&result)?);
        }

        Commands::Rank {
            company,
            role,
            submissions,
            csv,
            allow_keyword_only,
            output,
        } => {
            if let Some(format) = output {
                config.output.format = cli::parse_output_format(&format).map_err(anyhow::Error::msg)?;
            }
            let knowledge_base = Arc::new(config.knowledge_base()?);
            let key = RoleKey::new(company, role);
            knowledge_base.resolve(&key)?;

            let (embedder, keyword_mode) = match load_embedder(&config).await {
                Ok(embedder) => (embedder, false),
                Err(e) if allow_keyword_only && e.is_degraded() => {
                    warn!("{}; ranking with keyword scores only (semantic score 0)", e);
                    let fallback: Arc<dyn Embedder> = Arc::new(UnavailableEmbedder::new(e.to_string()));
                    (fallback, true)
                }
                Err(e) => return Err(e.into()),
            };
            let engine = MatchEngine::from_knowledge_base(knowledge_base, embedder);

            let store = SubmissionStore::new();
            for (name, path) in submissions {
                let text = read_resume(&path).await?;
                let submitted_at = Utc::now();
                let submission = if keyword_mode {
                    let result = engine.analyze_keywords(&text, &key)?;
                    CandidateSubmission::from_keyword_only(name, &result, submitted_at)
                } else {
                    let result = engine.analyze(&text, &key)?;
                    CandidateSubmission::from_match(name, &result, submitted_at)
                };

                let candidate = submission.name.clone();
                if store.upsert(submission)? == UpsertOutcome::Replaced {
                    warn!("{} was submitted more than once; keeping the latest scores", candidate);
                }
            }

            let report = LeaderboardReport::build(&store, &key, config.output.top_performers)?;
            if let Some(csv_path) = csv {
                let target = csv_target(&csv_path, &key);
                export::export_file(&report.rows, &target)?;
                println!("Rankings exported to {}", target.display());
            }

            let formatter = formatter_for(&config.output);
            println!("{}", formatter.format_leaderboard(&report)?);
        }

        Commands::Roles { company } => {
            let knowledge_base = config.knowledge_base()?;
            let companies: Vec<&str> = match &company {
                Some(company) => vec![company.as_str()],
                None => knowledge_base.companies(),
            };
            print_roles(&knowledge_base, &companies)?;
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config).context("Failed to serialize config")?;
                println!("{}", content);
            }
            ConfigAction::Reset => {
                Config::default().save_to(config_path)?;
                println!("Configuration reset to defaults at {}", config_path.display());
            }
            ConfigAction::Path => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

/// Load the embedding model once; inference is shared read-only afterwards
async fn load_embedder(config: &Config) -> placement_matcher::Result<Arc<dyn Embedder>> {
    let config = config.clone();
    let embedder = tokio::task::spawn_blocking(move || Model2VecEmbedder::from_config(&config))
        .await
        .map_err(|e| placement_matcher::MatcherError::EmbeddingUnavailable(format!("Model loader panicked: {}", e)))??;
    info!("Using embedding model {}", embedder.model_name());
    Ok(Arc::new(embedder))
}

async fn read_resume(path: &Path) -> anyhow::Result<String> {
    cli::validate_file_extension(path, RESUME_EXTENSIONS)
        .map_err(|e| anyhow::anyhow!("Resume file {}: {}", path.display(), e))?;
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read resume {}", path.display()))?;
    Ok(text)
}

/// A directory target gets the default dated file name
fn csv_target(path: &Path, key: &RoleKey) -> PathBuf {
    if path.is_dir() {
        path.join(export::export_filename(key, Local::now().date_naive()))
    } else {
        path.to_path_buf()
    }
}

fn print_roles(knowledge_base: &KnowledgeBase, companies: &[&str]) -> anyhow::Result<()> {
    for company in companies {
        let roles = knowledge_base.roles_for(company);
        if roles.is_empty() {
            bail!("Unknown company '{}'", company);
        }
        println!("{}", company);
        for requirement in roles {
            println!("  • {} ({})", requirement.key().role, requirement.skills().join(", "));
        }
    }
    Ok(())
}
