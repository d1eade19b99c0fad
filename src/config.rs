//! Configuration management for the resume matcher

use crate::error::{Result, ResumeMatcherError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub input: InputConfig,
    pub llm: LlmConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Extra keywords per category name, merged into the built-in categories
    pub extra_keywords: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub enable_cache: bool,
}

/// Settings for the hosted chat-completion scorer. The credential itself is never
/// stored here; only the name of the environment variable that holds it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
    pub api_key_env: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { enable_cache: true }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4".to_string(),
            temperature: 0.7,
            max_tokens: 1000,
            timeout_secs: 60,
            api_key_env: "OPENAI_API_KEY".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults there on first use
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ResumeMatcherError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
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
            .map_err(|e| ResumeMatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-matcher")
            .join("config.toml")
    }

    /// Resolve the chat API credential: an explicit value wins over the environment
    pub fn resolve_api_key(&self, explicit: Option<String>) -> Result<String> {
        explicit
            .filter(|key| !key.trim().is_empty())
            .or_else(|| {
                std::env::var(&self.llm.api_key_env)
                    .ok()
                    .filter(|key| !key.trim().is_empty())
            })
            .ok_or_else(|| {
                ResumeMatcherError::Configuration(format!(
                    "Missing API key: pass --api-key or set {}",
                    self.llm.api_key_env
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_creates_default_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.llm.model, "gpt-4");
        assert_eq!(config.output.format, OutputFormat::Console);
        assert!(config.input.enable_cache);
    }

    #[test]
    fn test_round_trip_with_extra_keywords() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config
            .scoring
            .extra_keywords
            .insert("technical".to_string(), vec!["elixir".to_string()]);
        config.output.format = OutputFormat::Markdown;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.scoring.extra_keywords["technical"], vec!["elixir".to_string()]);
        assert_eq!(loaded.output.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[llm]\nmodel = \"gpt-4o-mini\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.max_tokens, 1000);
        assert!(config.output.color_output);
    }

    #[test]
    fn test_invalid_file_is_configuration_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[llm\nmodel = ").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ResumeMatcherError::Configuration(_))
        ));
    }

    #[test]
    fn test_explicit_api_key_wins() {
        let mut config = Config::default();
        config.llm.api_key_env = "RESUME_MATCHER_TEST_UNSET_KEY".to_string();

        assert_eq!(config.resolve_api_key(Some("sk-test".to_string())).unwrap(), "sk-test");
        assert!(config.resolve_api_key(Some("   ".to_string())).is_err());
        assert!(config.resolve_api_key(None).is_err());
    }
}
