use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::{Result, VidscribeError};

/// Video container formats accepted as pipeline input.
pub const SUPPORTED_FORMATS: [&str; 5] = ["mp4", "mkv", "avi", "mov", "flv"];

/// The single source video selected from the input directory.
#[derive(Debug, Clone)]
pub struct VideoFile {
    pub path: PathBuf,
    /// File name with the extension stripped; used to derive output names.
    pub stem: String,
}

/// Find exactly one supported video file in the given directory.
///
/// Scans one directory level only. Zero matches or more than one match
/// abort the run; the caller is expected to fix the input directory.
pub fn find_video<P: AsRef<Path>>(input_dir: P) -> Result<VideoFile> {
    let input_dir = input_dir.as_ref();

    if !input_dir.is_dir() {
        return Err(VidscribeError::Config(format!(
            "Input path is not a directory: {}",
            input_dir.display()
        )));
    }

    let mut candidates = Vec::new();

    for entry in WalkDir::new(input_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(extension) = entry.path().extension() {
            if let Some(ext_str) = extension.to_str() {
                if SUPPORTED_FORMATS.contains(&ext_str.to_lowercase().as_str()) {
                    debug!("Candidate video file: {}", entry.path().display());
                    candidates.push(entry.path().to_path_buf());
                }
            }
        }
    }

    match candidates.len() {
        0 => Err(VidscribeError::NoInput(input_dir.display().to_string())),
        1 => {
            let path = candidates.remove(0);
            let stem = path
                .file_stem()
                .ok_or_else(|| {
                    VidscribeError::Config(format!("Invalid video filename: {}", path.display()))
                })?
                .to_string_lossy()
                .to_string();

            info!("Selected video file: {}", path.display());
            Ok(VideoFile { path, stem })
        }
        _ => Err(VidscribeError::AmbiguousInput(
            input_dir.display().to_string(),
        )),
    }
}
