use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::config::TranscribeConfig;
use crate::error::{Result, VidscribeError};

/// Structured transcript returned by the service (`verbose_json` format).
/// Missing segments or timing fields are a parse error, not a silent hole;
/// token-level fields in the response are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcription {
    pub text: String,
    pub language: Option<String>,
    pub duration: Option<f64>,
    pub segments: Vec<Segment>,
}

/// A time-bounded span of the transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// Transcription seam; the pipeline only depends on this trait.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Upload the audio file and return the structured transcript.
    async fn transcribe(&self, audio_path: &Path) -> Result<Transcription>;
}

/// Client for the OpenAI audio transcription endpoint.
pub struct OpenAiTranscriber {
    config: TranscribeConfig,
    client: Client,
}

impl OpenAiTranscriber {
    pub fn new(config: TranscribeConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Transcriber for OpenAiTranscriber {
    async fn transcribe(&self, audio_path: &Path) -> Result<Transcription> {
        info!("Transcribing audio file: {}", audio_path.display());

        let file_bytes = tokio::fs::read(audio_path).await?;
        let filename = audio_path
            .file_name()
            .ok_or_else(|| {
                VidscribeError::Transcribe(format!(
                    "Audio path has no filename: {}",
                    audio_path.display()
                ))
            })?
            .to_string_lossy()
            .to_string();

        let mut form = Form::new()
            .part(
                "file",
                Part::bytes(file_bytes)
                    .file_name(filename)
                    .mime_str("audio/mpeg")?,
            )
            .text("model", self.config.model.clone())
            .text("response_format", "verbose_json");

        if let Some(language) = &self.config.language {
            form = form.text("language", language.clone());
        }

        let url = format!("{}/audio/transcriptions", self.config.endpoint);
        debug!("Uploading audio to {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VidscribeError::Transcribe(format!(
                "Service returned {}: {}",
                status, body
            )));
        }

        let body = response.text().await?;
        let transcription: Transcription = serde_json::from_str(&body).map_err(|e| {
            VidscribeError::Transcribe(format!("Failed to parse service response: {}", e))
        })?;

        info!(
            "Transcription completed: {} segments",
            transcription.segments.len()
        );
        Ok(transcription)
    }
}
