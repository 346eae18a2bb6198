use std::path::Path;
use tokio::fs;
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::locate::find_video;
use crate::media::{AudioExtractor, FfmpegExtractor};
use crate::subtitle::{build_srt, write_srt};
use crate::transcribe::{OpenAiTranscriber, Transcriber};

/// The single-run pipeline: locate, extract, transcribe, format, write.
pub struct Pipeline {
    extractor: Box<dyn AudioExtractor>,
    transcriber: Box<dyn Transcriber>,
}

impl Pipeline {
    /// Build the default pipeline. Verifies the transcoder is present
    /// before any file processing; a missing ffmpeg aborts startup.
    pub fn new(config: Config) -> Result<Self> {
        let extractor = FfmpegExtractor::new(config.media.clone());
        extractor.check_availability()?;

        let transcriber = OpenAiTranscriber::new(config.transcribe.clone());

        Ok(Self {
            extractor: Box::new(extractor),
            transcriber: Box::new(transcriber),
        })
    }

    #[cfg(test)]
    fn with_stages(extractor: Box<dyn AudioExtractor>, transcriber: Box<dyn Transcriber>) -> Self {
        Self {
            extractor,
            transcriber,
        }
    }

    /// Process the single video file in `input_dir`, writing
    /// `<stem>.mp3` and `<stem>.srt` into `output_dir`.
    pub async fn run<P: AsRef<Path>>(&self, input_dir: P, output_dir: P) -> Result<()> {
        let output_dir = output_dir.as_ref();
        fs::create_dir_all(output_dir).await?;

        let video = find_video(input_dir)?;
        info!("Processing video file: {}", video.path.display());

        let audio_path = output_dir.join(format!("{}.mp3", video.stem));
        self.extractor
            .extract_audio(&video.path, &audio_path)
            .await?;

        let transcription = self.transcriber.transcribe(&audio_path).await?;

        let srt_content = build_srt(&transcription)?;
        let srt_path = output_dir.join(format!("{}.srt", video.stem));
        write_srt(&srt_content, &srt_path).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use crate::error::VidscribeError;
    use crate::transcribe::{Segment, Transcription};

    struct StubExtractor {
        fail: bool,
        called: Arc<AtomicBool>,
    }

    #[async_trait]
    impl AudioExtractor for StubExtractor {
        async fn extract_audio(&self, _video: &Path, audio: &Path) -> crate::error::Result<()> {
            self.called.store(true, Ordering::SeqCst);
            if self.fail {
                return Err(VidscribeError::Media("simulated engine failure".to_string()));
            }
            std::fs::write(audio, b"mp3")?;
            Ok(())
        }
    }

    struct StubTranscriber {
        fail: bool,
        called: Arc<AtomicBool>,
    }

    #[async_trait]
    impl Transcriber for StubTranscriber {
        async fn transcribe(&self, _audio: &Path) -> crate::error::Result<Transcription> {
            self.called.store(true, Ordering::SeqCst);
            if self.fail {
                return Err(VidscribeError::Transcribe(
                    "simulated service failure".to_string(),
                ));
            }
            Ok(Transcription {
                text: "Hello World".to_string(),
                language: Some("english".to_string()),
                duration: Some(3.0),
                segments: vec![
                    Segment {
                        start: 0.0,
                        end: 1.5,
                        text: " Hello".to_string(),
                    },
                    Segment {
                        start: 1.5,
                        end: 3.0,
                        text: " World".to_string(),
                    },
                ],
            })
        }
    }

    struct Harness {
        pipeline: Pipeline,
        extract_called: Arc<AtomicBool>,
        transcribe_called: Arc<AtomicBool>,
        input_dir: PathBuf,
        output_dir: PathBuf,
        _tmp: tempfile::TempDir,
    }

    fn harness(fail_extract: bool, fail_transcribe: bool) -> Harness {
        let tmp = tempfile::tempdir().unwrap();
        let input_dir = tmp.path().join("input");
        let output_dir = tmp.path().join("output");
        std::fs::create_dir_all(&input_dir).unwrap();
        std::fs::write(input_dir.join("clip.mp4"), b"video").unwrap();

        let extract_called = Arc::new(AtomicBool::new(false));
        let transcribe_called = Arc::new(AtomicBool::new(false));

        let pipeline = Pipeline::with_stages(
            Box::new(StubExtractor {
                fail: fail_extract,
                called: extract_called.clone(),
            }),
            Box::new(StubTranscriber {
                fail: fail_transcribe,
                called: transcribe_called.clone(),
            }),
        );

        Harness {
            pipeline,
            extract_called,
            transcribe_called,
            input_dir,
            output_dir,
            _tmp: tmp,
        }
    }

    #[tokio::test]
    async fn test_successful_run_writes_audio_and_subtitles() {
        let h = harness(false, false);
        h.pipeline.run(&h.input_dir, &h.output_dir).await.unwrap();

        assert!(h.output_dir.join("clip.mp3").exists());
        let srt = std::fs::read_to_string(h.output_dir.join("clip.srt")).unwrap();
        assert_eq!(
            srt,
            "1\n00:00:00,000 --> 00:00:01,500\nHello\n\n2\n00:00:01,500 --> 00:00:03,000\nWorld\n\n"
        );
    }

    #[tokio::test]
    async fn test_extraction_failure_skips_transcription() {
        let h = harness(true, false);
        let err = h
            .pipeline
            .run(&h.input_dir, &h.output_dir)
            .await
            .unwrap_err();

        assert!(matches!(err, VidscribeError::Media(_)));
        assert!(h.extract_called.load(Ordering::SeqCst));
        assert!(!h.transcribe_called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_transcription_failure_writes_no_subtitles() {
        let h = harness(false, true);
        let err = h
            .pipeline
            .run(&h.input_dir, &h.output_dir)
            .await
            .unwrap_err();

        assert!(matches!(err, VidscribeError::Transcribe(_)));
        assert!(h.transcribe_called.load(Ordering::SeqCst));
        assert!(!h.output_dir.join("clip.srt").exists());
    }

    #[tokio::test]
    async fn test_empty_input_dir_runs_no_stage() {
        let h = harness(false, false);
        std::fs::remove_file(h.input_dir.join("clip.mp4")).unwrap();

        let err = h
            .pipeline
            .run(&h.input_dir, &h.output_dir)
            .await
            .unwrap_err();

        assert!(matches!(err, VidscribeError::NoInput(_)));
        assert!(!h.extract_called.load(Ordering::SeqCst));
        assert!(!h.transcribe_called.load(Ordering::SeqCst));
    }
}
