//! Video ID extraction.

use regex::Regex;
use std::sync::OnceLock;

static VIDEO_ID_REGEX: OnceLock<Regex> = OnceLock::new();

fn video_id_regex() -> &'static Regex {
    VIDEO_ID_REGEX.get_or_init(|| {
        // Matches watch, embed, shorts and short-link URLs, with or without
        // scheme/www and trailing query parameters.
        Regex::new(
            r"(?x)
            (?:https?://)?
            (?:www\.)?
            (?:
                youtu\.be/
                |
                youtube\.com/(?:watch\?v=|embed/|shorts/)
            )
            ([0-9A-Za-z_-]{11})
        ",
        )
        .expect("Invalid regex")
    })
}

/// Extract the 11-character video ID from a YouTube URL.
///
/// Returns None when the input doesn't contain a recognized URL shape.
/// Never errors on malformed input.
pub fn extract_video_id(input: &str) -> Option<String> {
    video_id_regex()
        .captures(input.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "dQw4w9WgXcQ";

    #[test]
    fn test_extract_from_all_shapes() {
        let urls = [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/shorts/dQw4w9WgXcQ",
            "youtube.com/watch?v=dQw4w9WgXcQ",
        ];
        for url in urls {
            assert_eq!(extract_video_id(url).as_deref(), Some(ID), "failed: {url}");
        }
    }

    #[test]
    fn test_extract_with_trailing_query() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ?si=abc").as_deref(),
            Some(ID)
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s").as_deref(),
            Some(ID)
        );
        assert_eq!(
            extract_video_id("https://youtube.com/shorts/dQw4w9WgXcQ?feature=share").as_deref(),
            Some(ID)
        );
    }

    #[test]
    fn test_extract_absent() {
        assert_eq!(extract_video_id("not-a-url"), None);
        assert_eq!(extract_video_id(""), None);
        assert_eq!(extract_video_id("https://example.com/watch?v=dQw4w9WgXcQ"), None);
        // Too-short path segment
        assert_eq!(extract_video_id("https://youtu.be/short"), None);
    }
}
