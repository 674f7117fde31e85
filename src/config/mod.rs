//! Configuration management for Preceptor

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::quiz::model::Mood;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Question bank API base URL
    pub base_url: String,

    /// Identity value included verbatim in submission payloads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Mood used when a subject quiz does not specify one
    #[serde(default)]
    pub default_mood: Mood,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://bank.preceptor.app/api/v1".to_string(),
            user_id: None,
            default_mood: Mood::Moderate,
        }
    }
}

impl Config {
    /// Load configuration from disk, or create default if not exists
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config from {:?}", config_path))?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse config.json")
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config to {:?}", config_path))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "preceptor")
            .context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// The user id quizzes are submitted under
    pub fn require_user_id(&self) -> Result<&str> {
        self.user_id
            .as_deref()
            .context("No user_id configured. Add one to config.json before starting a quiz")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_the_bank() {
        let config = Config::default();
        assert!(config.base_url.starts_with("https://"));
        assert!(config.user_id.is_none());
        assert_eq!(config.default_mood, Mood::Moderate);
    }

    #[test]
    fn missing_user_id_is_an_error() {
        let config = Config::default();
        assert!(config.require_user_id().is_err());
    }

    #[test]
    fn config_serializes_to_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("base_url"));
        assert!(json.contains("Moderate"));
    }

    #[test]
    fn config_deserializes_from_json() {
        let json = r#"{
            "base_url": "https://bank.test/api",
            "user_id": "u-17",
            "default_mood": "Competitive"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.user_id.as_deref(), Some("u-17"));
        assert_eq!(config.default_mood, Mood::Competitive);
    }

    #[test]
    fn default_mood_falls_back_when_absent() {
        let json = r#"{"base_url": "https://bank.test/api"}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_mood, Mood::Moderate);
    }
}
