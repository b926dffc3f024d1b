//! Pre-flight checks before a session.
//!
//! Missing requirements are reported as warnings, not errors: the run
//! continues and the affected step degrades to its empty-sentinel result.

use crate::cli::Output;
use crate::config::Settings;
use std::process::Command;

/// Warn about anything that will make a session step degrade.
pub fn warn_on_missing_requirements(settings: &Settings) {
    if api_key_missing() {
        Output::warning(
            "OPENAI_API_KEY not set. Summaries and answers will come back empty.",
        );
    }

    if !tool_available("yt-dlp") {
        Output::warning("yt-dlp not found. Metadata and the audio fallback will be unavailable.");
    }

    if !tool_available("ffmpeg") {
        Output::warning("ffmpeg not found. The whisper fallback will be unavailable.");
    }

    if !settings.whisper_model_path().exists() {
        Output::warning(&format!(
            "Whisper model not found at {}. The fallback path will fail if needed.",
            settings.whisper_model_path().display()
        ));
    }
}

fn api_key_missing() -> bool {
    std::env::var("OPENAI_API_KEY")
        .map(|k| k.is_empty())
        .unwrap_or(true)
}

/// Check if an external tool is available.
pub fn tool_available(name: &str) -> bool {
    // ffmpeg uses -version (single dash), others use --version
    let version_arg = match name {
        "ffmpeg" | "ffprobe" => "-version",
        _ => "--version",
    };

    Command::new(name)
        .arg(version_arg)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tool_is_unavailable() {
        assert!(!tool_available("definitely-not-a-real-tool-name"));
    }
}
