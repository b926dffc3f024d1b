//! Configuration settings for Snakk.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub scraper: ScraperSettings,
    pub whisper: WhisperSettings,
    pub llm: LlmSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Directory for storing application data.
    pub data_dir: String,
    /// Directory for temporary files (downloaded audio, decoded PCM).
    pub temp_dir: String,
    /// Filename of the persisted transcript inside the data directory.
    pub transcript_file: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            temp_dir: "/tmp/snakk".to_string(),
            transcript_file: "transcript.txt".to_string(),
        }
    }
}

/// Settings for the caption-scraping service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperSettings {
    /// Endpoint that accepts a form POST with the video URL.
    pub endpoint: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://youtubetotranscript.com/transcript".to_string(),
            timeout_seconds: 30,
        }
    }
}

/// Settings for local whisper.cpp transcription.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WhisperSettings {
    /// Path to the ggml model file.
    pub model_path: String,
    /// Language hint. None means auto-detect.
    pub language: Option<String>,
}

impl Default for WhisperSettings {
    fn default() -> Self {
        Self {
            model_path: "~/.snakk/models/ggml-small.bin".to_string(),
            language: None,
        }
    }
}

/// Settings for the chat backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// Model identifier for summary and Q&A requests.
    pub model: String,
    /// Maximum number of history pairs included in answer prompts.
    pub max_history: usize,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            max_history: 10,
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::SnakkError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("snakk")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Get the expanded data directory path.
    pub fn data_dir(&self) -> PathBuf {
        Self::expand_path(&self.general.data_dir)
    }

    /// Get the expanded temp directory path.
    pub fn temp_dir(&self) -> PathBuf {
        Self::expand_path(&self.general.temp_dir)
    }

    /// Get the expanded whisper model path.
    pub fn whisper_model_path(&self) -> PathBuf {
        Self::expand_path(&self.whisper.model_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.scraper.timeout_seconds, 30);
        assert_eq!(
            settings.scraper.endpoint,
            "https://youtubetotranscript.com/transcript"
        );
        assert_eq!(settings.llm.max_history, 10);
        assert!(settings.whisper.language.is_none());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let settings: Settings = toml::from_str("[llm]\nmodel = \"gpt-4o\"").unwrap();
        assert_eq!(settings.llm.model, "gpt-4o");
        assert_eq!(settings.llm.max_history, 10);
        assert_eq!(settings.general.transcript_file, "transcript.txt");
    }
}
