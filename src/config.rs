use crate::core::gloss::Language;
use crate::lexicon::DEFAULT_ASSET_EXTENSION;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Vocabulary
    pub lexicon_path: String,
    pub assets_dir: String,
    pub asset_extension: String,

    // Language model
    pub llm_enabled: bool,
    pub llm_url: String,
    pub llm_model: String,
    /// Name of the environment variable holding the API key
    pub llm_api_key_env: String,
    pub llm_timeout_secs: u64,
    pub llm_retries: usize,

    // History
    pub history_db_path: String,
    pub history_limit: usize,

    // Meta
    pub default_language: Language,
    pub log_level: String,

    // Data
    pub custom_synonyms: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lexicon_path: data_dir().join("words.txt").to_string_lossy().to_string(),
            assets_dir: data_dir().join("sigml").to_string_lossy().to_string(),
            asset_extension: DEFAULT_ASSET_EXTENSION.to_string(),
            llm_enabled: true,
            llm_url: "https://api.groq.com/openai/v1".to_string(),
            llm_model: "llama-3.3-70b-versatile".to_string(),
            llm_api_key_env: "GROQ_API_KEY".to_string(),
            llm_timeout_secs: 15,
            llm_retries: 2,
            history_db_path: data_dir().join("history.db").to_string_lossy().to_string(),
            history_limit: 50,
            default_language: Language::default(),
            log_level: "INFO".to_string(),
            custom_synonyms: HashMap::new(),
        }
    }
}

impl Config {
    /// Load config from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from `path`; a corrupt file is moved aside and defaults used
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                // Graceful degradation: log warning and use defaults
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                // Backup corrupt file for debugging
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("signbridge")
        .join("config.json")
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("signbridge")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.asset_extension, "sigml");
        assert_eq!(config.history_limit, 50);
        assert_eq!(config.default_language, Language::Isl);
        assert_eq!(config.llm_api_key_env, "GROQ_API_KEY");
        assert!(config.custom_synonyms.is_empty());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string(&config).expect("Failed to serialize");
        let restored: Config = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(config.llm_model, restored.llm_model);
        assert_eq!(config.assets_dir, restored.assets_dir);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "history_limit": 5, "default_language": "asl" }"#).unwrap();

        let config = Config::load_from(&path).expect("Failed to load");
        assert_eq!(config.history_limit, 5);
        assert_eq!(config.default_language, Language::Asl);
        assert_eq!(config.asset_extension, "sigml");
    }

    #[test]
    fn test_config_corrupt_json_handling() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not valid json").unwrap();

        let config = Config::load_from(&path).expect("Corrupt config should degrade");
        assert_eq!(config.history_limit, 50);
        assert!(!path.exists());
        assert!(dir.path().join("config.json.corrupt").exists());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.json");
        let mut config = Config::default();
        config
            .custom_synonyms
            .insert("ATOM".to_string(), "PARTICLE".to_string());
        config.save_to(&path).expect("Failed to save");

        let restored = Config::load_from(&path).expect("Failed to load");
        assert_eq!(
            restored.custom_synonyms.get("ATOM").map(String::as_str),
            Some("PARTICLE")
        );
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("absent.json")).expect("Failed to load");
        assert_eq!(config.log_level, "INFO");
    }
}
