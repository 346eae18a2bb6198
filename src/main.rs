//! Vidscribe - Single-Shot Video Transcription
//!
//! This is the main entry point for the vidscribe application, which takes
//! the one video file in an input directory, extracts its audio with ffmpeg,
//! transcribes it via the OpenAI Whisper API, and writes an SRT subtitle file.

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, Level};
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vidscribe::cli::Args;
use vidscribe::config::Config;
use vidscribe::pipeline::Pipeline;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Setup logging to both console and file
    setup_logging(args.verbose)?;

    // Load configuration
    let mut config = match &args.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => {
            // Try to load config.toml from current directory first
            if std::path::Path::new("config.toml").exists() {
                info!("Found config.toml in current directory, loading...");
                Config::from_file("config.toml")?
            } else {
                Config::default()
            }
        }
    };

    // Apply command-line overrides
    if let Some(language) = args.language {
        config.transcribe.language = Some(language);
    }
    if let Some(bitrate) = args.bitrate {
        config.media.bitrate = bitrate;
    }

    // Resolve the API credential once, before any stage runs
    config.resolve_api_key()?;

    // Build the pipeline; this verifies ffmpeg is available
    let pipeline = Pipeline::new(config)?;

    // A failed run exits non-zero
    match pipeline.run(&args.input_dir, &args.output_dir).await {
        Ok(()) => {
            info!("Vidscribe run completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("Failed to process video: {}", e);
            Err(e.into())
        }
    }
}

/// Setup logging to both console and file
fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = std::env::current_dir()?.join(".vidscribe").join("log");
    std::fs::create_dir_all(&log_dir)?;

    // Set up file appender with daily rotation
    let file_appender = rolling::daily(&log_dir, "vidscribe.log");
    let (non_blocking_file, _guard) = non_blocking(file_appender);
    // Keep the guard alive for the duration of the program
    std::mem::forget(_guard);

    // Determine log level
    let log_level = if verbose { Level::DEBUG } else { Level::INFO };

    // Create console layer
    let console_layer = fmt::layer().with_target(false);

    // Create file layer
    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_target(false)
        .with_ansi(false); // No ANSI colors in file

    // Setup layered subscriber
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(console_layer)
        .with(file_layer);

    // Initialize the subscriber
    subscriber
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
