//! Video metadata fetching via yt-dlp.

use crate::error::{Result, SnakkError};
use tracing::{debug, error};

/// Metadata for a single video.
///
/// All fields are plain strings; fetch failures leave every field at the
/// "Unknown" sentinel rather than erroring.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoMetadata {
    pub title: String,
    pub channel: String,
    pub views: String,
    pub description: String,
}

impl VideoMetadata {
    /// Sentinel metadata used when the fetch fails.
    pub fn unknown() -> Self {
        Self {
            title: "Unknown".to_string(),
            channel: "Unknown".to_string(),
            views: "Unknown".to_string(),
            description: "Unknown".to_string(),
        }
    }
}

/// Fetch title/channel/views/description for a video.
///
/// Total from the caller's perspective: any failure is logged and the
/// "Unknown" sentinel is returned.
pub async fn fetch_video_info(url: &str) -> VideoMetadata {
    match try_fetch_video_info(url).await {
        Ok(info) => info,
        Err(e) => {
            error!("Error fetching video info: {}", e);
            VideoMetadata::unknown()
        }
    }
}

async fn try_fetch_video_info(url: &str) -> Result<VideoMetadata> {
    debug!("Fetching metadata for {}", url);

    let output = tokio::process::Command::new("yt-dlp")
        .args(["--dump-json", "--no-download", "--no-warnings", "--no-playlist", url])
        .output()
        .await
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SnakkError::ToolNotFound("yt-dlp".to_string())
            } else {
                SnakkError::VideoSource(format!("Failed to run yt-dlp: {}", e))
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SnakkError::VideoSource(format!(
            "Video not found or unavailable: {}",
            stderr
        )));
    }

    let json_str = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&json_str)
        .map_err(|e| SnakkError::VideoSource(format!("Failed to parse yt-dlp output: {}", e)))?;

    Ok(parse_video_info(&json))
}

/// Build metadata from a yt-dlp JSON dump, filling absent fields with the
/// "Unknown" sentinel.
pub fn parse_video_info(json: &serde_json::Value) -> VideoMetadata {
    let title = json["title"].as_str().unwrap_or("Unknown").to_string();

    let channel = json["channel"]
        .as_str()
        .or_else(|| json["uploader"].as_str())
        .unwrap_or("Unknown")
        .to_string();

    let views = json["view_count"]
        .as_u64()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    let description = json["description"].as_str().unwrap_or("Unknown").to_string();

    VideoMetadata {
        title,
        channel,
        views,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_full_dump() {
        let dump = json!({
            "title": "Never Gonna Give You Up",
            "channel": "Rick Astley",
            "view_count": 1500000000u64,
            "description": "The official video.",
        });

        let info = parse_video_info(&dump);
        assert_eq!(info.title, "Never Gonna Give You Up");
        assert_eq!(info.channel, "Rick Astley");
        assert_eq!(info.views, "1500000000");
        assert_eq!(info.description, "The official video.");
    }

    #[test]
    fn test_parse_falls_back_to_uploader() {
        let dump = json!({
            "title": "t",
            "uploader": "someone",
        });

        let info = parse_video_info(&dump);
        assert_eq!(info.channel, "someone");
    }

    #[test]
    fn test_parse_missing_fields_are_unknown() {
        let info = parse_video_info(&json!({}));
        assert_eq!(info, VideoMetadata::unknown());
    }
}
