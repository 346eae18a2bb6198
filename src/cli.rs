use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory containing the source video (exactly one file expected)
    #[arg(short, long, default_value = "input")]
    pub input_dir: PathBuf,

    /// Directory for the extracted audio and the generated subtitles
    #[arg(short, long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Language hint passed to the transcription service (e.g. "en")
    #[arg(short, long)]
    pub language: Option<String>,

    /// Target audio bitrate for extraction (e.g. "128k")
    #[arg(short, long)]
    pub bitrate: Option<String>,
}
