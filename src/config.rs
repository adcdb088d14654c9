//! Configuration management for the placement matcher

use crate::error::{MatcherError, Result};
use crate::knowledge::KnowledgeBase;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub models: ModelConfig,
    #[serde(default)]
    pub knowledge_base: KnowledgeBaseConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub models_dir: PathBuf,
    /// Local folder name under `models_dir`, or a Hugging Face repo id
    pub embedding_model: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBaseConfig {
    /// Versioned knowledge base file; the built-in catalogue is used when unset
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    /// How many missing skills to list per result
    #[serde(default = "default_missing_skill_limit")]
    pub missing_skill_limit: usize,
    /// How many of those missing skills get a course recommendation
    pub feedback_limit: usize,
    /// How many candidates to highlight under the leaderboard
    pub top_performers: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
}

fn default_missing_skill_limit() -> usize {
    12
}

impl Default for Config {
    fn default() -> Self {
        let models_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".placement-matcher")
            .join("models");

        Self {
            models: ModelConfig {
                models_dir,
                embedding_model: "minishlab/potion-base-8M".to_string(),
            },
            knowledge_base: KnowledgeBaseConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
                missing_skill_limit: default_missing_skill_limit(),
                feedback_limit: 8,
                top_performers: 5,
            },
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first run
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| MatcherError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            info!("Wrote default configuration to {}", config_path.display());
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| MatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("placement-matcher")
            .join("config.toml")
    }

    pub fn models_dir(&self) -> &PathBuf {
        &self.models.models_dir
    }

    /// Build the knowledge base this configuration points at
    pub fn knowledge_base(&self) -> Result<KnowledgeBase> {
        match &self.knowledge_base.path {
            Some(path) => KnowledgeBase::load(path),
            None => KnowledgeBase::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_first_load_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config, Config::default());
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_without_knowledge_base_section() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[models]
models_dir = "/tmp/models"
embedding_model = "potion-base-8M"

[output]
format = "json"
color_output = false
feedback_limit = 3
top_performers = 10
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.feedback_limit, 3);
        assert_eq!(config.output.missing_skill_limit, 12);
        assert!(config.knowledge_base.path.is_none());
        assert!(config.knowledge_base().unwrap().role_count() > 0);
    }

    #[test]
    fn test_invalid_file_is_configuration_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "models = 3").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, MatcherError::Configuration(_)));
    }

    #[test]
    fn test_custom_knowledge_base_path() {
        let dir = TempDir::new().unwrap();
        let kb_path = dir.path().join("kb.toml");
        std::fs::write(
            &kb_path,
            "version = 1\n[[roles]]\ncompany = \"Acme\"\nrole = \"Dev\"\nskills = [\"rust\"]\n",
        )
        .unwrap();

        let mut config = Config::default();
        config.knowledge_base.path = Some(kb_path);
        let kb = config.knowledge_base().unwrap();
        assert_eq!(kb.companies(), vec!["Acme"]);
    }
}
