//! CLI interface for the placement matcher

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "placement-matcher")]
#[command(about = "Match resumes against job role skill requirements and rank candidates")]
#[command(long_about = "Score normalized resume text against a company's role requirements using keyword overlap and sentence embeddings, and rank candidates per role")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check one resume against one role
    Match {
        /// Company name as listed by `roles`
        #[arg(long)]
        company: String,

        /// Job role at that company
        #[arg(long)]
        role: String,

        /// Normalized resume text (TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Skip semantic scoring (keywords only)
        #[arg(long)]
        keyword_only: bool,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Rank several candidates for one role
    Rank {
        #[arg(long)]
        company: String,

        #[arg(long)]
        role: String,

        /// Candidate submission as NAME=FILE; a repeated NAME replaces the earlier one
        #[arg(short, long = "submission", value_parser = parse_submission, required = true)]
        submissions: Vec<(String, PathBuf)>,

        /// Export the ranked leaderboard as CSV to this path
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Rank by keyword score alone if the embedding model cannot be loaded
        #[arg(long)]
        allow_keyword_only: bool,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List companies and their roles
    Roles {
        /// Only show roles for this company
        #[arg(long)]
        company: Option<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}

/// Parse a `NAME=FILE` submission argument
pub fn parse_submission(arg: &str) -> Result<(String, PathBuf), String> {
    match arg.split_once('=') {
        Some((name, path)) if !name.trim().is_empty() && !path.trim().is_empty() => {
            Ok((name.trim().to_string(), PathBuf::from(path.trim())))
        }
        _ => Err(format!("Expected NAME=FILE, got '{}'", arg)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_submission() {
        assert_eq!(
            parse_submission("Asha=resumes/asha.txt").unwrap(),
            ("Asha".to_string(), PathBuf::from("resumes/asha.txt"))
        );
        assert_eq!(
            parse_submission("Asha K = a=b.txt").unwrap(),
            ("Asha K".to_string(), PathBuf::from("a=b.txt"))
        );
        assert!(parse_submission("asha.txt").is_err());
        assert!(parse_submission("=asha.txt").is_err());
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("a.txt"), &["txt", "md"]).is_ok());
        assert!(validate_file_extension(Path::new("a.PDF"), &["txt", "md"]).is_err());
        assert!(validate_file_extension(Path::new("resume"), &["txt"]).is_err());
    }

    #[test]
    fn test_rank_command_parses_repeated_submissions() {
        let cli = Cli::try_parse_from([
            "placement-matcher",
            "rank",
            "--company",
            "Infosys",
            "--role",
            "Systems Engineer Trainee",
            "-s",
            "Asha=a.txt",
            "--submission",
            "Ravi=r.txt",
        ])
        .unwrap();

        match cli.command {
            Commands::Rank { submissions, .. } => assert_eq!(submissions.len(), 2),
            _ => panic!("expected rank command"),
        }
    }
}
