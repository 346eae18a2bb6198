use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, VidscribeError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub media: MediaConfig,
    pub transcribe: TranscribeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Path to ffmpeg binary
    pub binary_path: String,
    /// Target audio bitrate passed to the encoder (e.g. "128k")
    pub bitrate: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscribeConfig {
    /// Base URL of the transcription API
    pub endpoint: String,
    /// Model identifier sent with each request
    pub model: String,
    /// Optional language hint to bias recognition
    pub language: Option<String>,
    /// API credential; resolved from the environment at startup,
    /// never read from the config file
    #[serde(skip)]
    pub api_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            media: MediaConfig {
                binary_path: "ffmpeg".to_string(),
                bitrate: "128k".to_string(),
            },
            transcribe: TranscribeConfig {
                endpoint: "https://api.openai.com/v1".to_string(),
                model: "whisper-1".to_string(),
                language: None,
                api_key: String::new(),
            },
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| VidscribeError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| VidscribeError::Config(format!("Failed to parse config file: {}", e)))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VidscribeError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| VidscribeError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Resolve the API credential from the environment. Called once at
    /// startup so stage logic never reads ambient state.
    pub fn resolve_api_key(&mut self) -> Result<()> {
        self.transcribe.api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            VidscribeError::Config(
                "OPENAI_API_KEY environment variable is not set".to_string(),
            )
        })?;
        Ok(())
    }
}
