use async_trait::async_trait;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

use crate::config::MediaConfig;
use crate::error::{Result, VidscribeError};

/// Audio extraction seam; the pipeline only depends on this trait.
#[async_trait]
pub trait AudioExtractor: Send + Sync {
    /// Extract the audio track of `video_path` into `audio_path`.
    async fn extract_audio(&self, video_path: &Path, audio_path: &Path) -> Result<()>;
}

/// FFmpeg-based audio extractor.
pub struct FfmpegExtractor {
    config: MediaConfig,
}

impl FfmpegExtractor {
    pub fn new(config: MediaConfig) -> Self {
        Self { config }
    }

    /// Check that the ffmpeg binary can be executed. Failure here is
    /// startup-fatal; nothing is processed without a working transcoder.
    pub fn check_availability(&self) -> Result<()> {
        let output = Command::new(&self.config.binary_path)
            .arg("-version")
            .output()
            .map_err(|e| VidscribeError::Media(format!("FFmpeg not found: {}", e)))?;

        if output.status.success() {
            info!("FFmpeg is available");
            Ok(())
        } else {
            Err(VidscribeError::Media(
                "FFmpeg version check failed".to_string(),
            ))
        }
    }
}

#[async_trait]
impl AudioExtractor for FfmpegExtractor {
    async fn extract_audio(&self, video_path: &Path, audio_path: &Path) -> Result<()> {
        info!(
            "Extracting audio from {} to {}",
            video_path.display(),
            audio_path.display()
        );

        let mut cmd = tokio::process::Command::new(&self.config.binary_path);
        cmd.arg("-i")
            .arg(video_path)
            .arg("-vn") // Discard the video stream
            .arg("-acodec")
            .arg("libmp3lame")
            .arg("-b:a")
            .arg(&self.config.bitrate)
            .arg("-y") // Overwrite output
            .arg(audio_path);

        debug!("Executing ffmpeg command: {:?}", cmd);

        let output = cmd
            .output()
            .await
            .map_err(|e| VidscribeError::Media(format!("Failed to execute ffmpeg: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(VidscribeError::Media(format!(
                "Audio extraction failed: {}",
                stderr
            )));
        }

        info!("Audio extracted to {}", audio_path.display());
        Ok(())
    }
}
