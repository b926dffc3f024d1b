//! Audio-only stream download via yt-dlp.

use crate::error::{Result, SnakkError};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{error, info};

/// Target filename for the downloaded audio track.
pub const AUDIO_FILENAME: &str = "audio.mp3";

/// Download the audio-only stream of a video into `temp_dir`.
///
/// Total from the caller's perspective: any failure (missing tool, no
/// audio-only stream, rename failure) is logged and surfaces as None.
pub async fn download_audio(url: &str, temp_dir: &Path) -> Option<PathBuf> {
    match try_download(url, temp_dir).await {
        Ok(path) => Some(path),
        Err(e) => {
            error!("Audio download error: {}", e);
            None
        }
    }
}

/// Download the audio track to a temporary name, then atomically rename it
/// onto the target filename, overwriting any prior file of that name.
pub async fn try_download(url: &str, temp_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(temp_dir)?;

    let target_path = temp_dir.join(AUDIO_FILENAME);
    // Same directory as the target so the rename stays on one filesystem.
    let template = temp_dir.join("download_audio.%(ext)s");

    info!("Downloading audio from {}", url);

    let result = Command::new("yt-dlp")
        .arg("--extract-audio")
        .arg("--audio-format").arg("mp3")
        .arg("--audio-quality").arg("0")
        .arg("--output").arg(template.to_str().unwrap_or_default())
        .arg("--no-playlist")
        .arg("--quiet")
        .arg("--no-warnings")
        .arg(url)
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .await;

    let output = match result {
        Ok(o) => o,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(SnakkError::ToolNotFound("yt-dlp".into()));
        }
        Err(e) => {
            return Err(SnakkError::AudioDownload(format!("yt-dlp execution failed: {e}")));
        }
    };

    if !output.status.success() {
        // Covers "no audio-only stream" too; yt-dlp reports it on stderr.
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SnakkError::AudioDownload(format!("yt-dlp failed: {stderr}")));
    }

    let downloaded = temp_dir.join("download_audio.mp3");
    if !downloaded.exists() {
        return Err(SnakkError::AudioDownload(
            "Audio file not found after download".into(),
        ));
    }

    std::fs::rename(&downloaded, &target_path)
        .map_err(|e| SnakkError::AudioDownload(format!("Rename failed: {e}")))?;

    Ok(target_path)
}
