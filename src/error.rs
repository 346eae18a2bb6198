use thiserror::Error;

#[derive(Error, Debug)]
pub enum VidscribeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No supported video files found in {0}")]
    NoInput(String),

    #[error("Multiple video files found in {0}; keep exactly one")]
    AmbiguousInput(String),

    #[error("Media processing error: {0}")]
    Media(String),

    #[error("Transcription error: {0}")]
    Transcribe(String),

    #[error("Subtitle generation error: {0}")]
    Subtitle(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, VidscribeError>;
