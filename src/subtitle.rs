use std::path::Path;
use tokio::fs;
use tracing::info;

use crate::error::{Result, VidscribeError};
use crate::transcribe::Transcription;

/// Build SRT subtitle text from a transcription.
///
/// Each segment becomes one numbered block: index, `start --> end` timestamp
/// line, trimmed text, blank line. Segments are emitted in service order.
pub fn build_srt(transcription: &Transcription) -> Result<String> {
    let mut srt_content = String::new();

    for (index, segment) in transcription.segments.iter().enumerate() {
        validate_time(segment.start)?;
        validate_time(segment.end)?;

        let start_time = format_srt_time(segment.start);
        let end_time = format_srt_time(segment.end);

        srt_content.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            index + 1,
            start_time,
            end_time,
            segment.text.trim()
        ));
    }

    Ok(srt_content)
}

/// Write SRT content to disk, overwriting any existing file.
pub async fn write_srt<P: AsRef<Path>>(content: &str, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();

    fs::write(output_path, content).await?;

    info!("SRT file saved to {}", output_path.display());
    Ok(())
}

fn validate_time(seconds: f64) -> Result<()> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(VidscribeError::Subtitle(format!(
            "Invalid segment timestamp: {}",
            seconds
        )));
    }
    Ok(())
}

/// Format time in seconds to SRT time format (HH:MM:SS,mmm)
fn format_srt_time(seconds: f64) -> String {
    let total_milliseconds = (seconds * 1000.0).round() as u64;
    let hours = total_milliseconds / 3_600_000;
    let minutes = (total_milliseconds % 3_600_000) / 60_000;
    let secs = (total_milliseconds % 60_000) / 1_000;
    let millis = total_milliseconds % 1_000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}
