//! Vidscribe - Single-Shot Video Transcription
//!
//! Locates one video file in an input directory, extracts its audio track
//! with ffmpeg, transcribes the audio via the OpenAI Whisper API, and writes
//! the result as an SRT subtitle file.

pub mod cli;
pub mod config;
pub mod error;
pub mod locate;
pub mod media;
pub mod pipeline;
pub mod subtitle;
pub mod transcribe;
