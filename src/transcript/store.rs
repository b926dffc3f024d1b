//! Transcript persistence.

use crate::error::Result;
use crate::youtube::VideoMetadata;
use std::path::PathBuf;
use tracing::error;

/// Maximum description length in the metadata header.
const MAX_DESCRIPTION_CHARS: usize = 150;

/// Persists the transcript to a fixed file, overwriting each run.
pub struct TranscriptStore {
    dir: PathBuf,
    filename: String,
}

impl TranscriptStore {
    pub fn new(dir: PathBuf, filename: &str) -> Self {
        Self {
            dir,
            filename: filename.to_string(),
        }
    }

    /// Path of the persisted transcript file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.filename)
    }

    /// Write the transcript, optionally prefixed with a metadata header.
    ///
    /// Creates the data directory if needed and unconditionally overwrites
    /// any prior content.
    pub fn save(&self, metadata: Option<&VideoMetadata>, transcript: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;

        let content = match metadata {
            Some(info) => render_with_header(info, transcript),
            None => transcript.to_string(),
        };

        std::fs::write(self.path(), content)?;
        Ok(())
    }

    /// Save, logging failure instead of raising it. The in-memory transcript
    /// stays usable for the rest of the run even when persistence fails.
    pub fn save_or_log(&self, metadata: Option<&VideoMetadata>, transcript: &str) {
        if let Err(e) = self.save(metadata, transcript) {
            error!("Error saving transcript: {}", e);
        }
    }
}

fn render_with_header(info: &VideoMetadata, transcript: &str) -> String {
    let description = truncate_chars(&info.description, MAX_DESCRIPTION_CHARS);

    format!(
        "Title: {}\nChannel: {}\nViews: {}\nDescription: {}\n\nTranscript:\n\n{}",
        info.title, info.channel, info.views, description, transcript
    )
}

/// Truncate to `max` characters, appending an ellipsis. Char-based so
/// multibyte text never splits mid-character.
fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn sample_metadata() -> VideoMetadata {
        VideoMetadata {
            title: "A Title".to_string(),
            channel: "A Channel".to_string(),
            views: "1234".to_string(),
            description: "A description.".to_string(),
        }
    }

    fn store_in(dir: &Path) -> TranscriptStore {
        TranscriptStore::new(dir.to_path_buf(), "transcript.txt")
    }

    #[test]
    fn test_save_with_metadata_header() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        store.save(Some(&sample_metadata()), "Hello world").unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            content,
            "Title: A Title\nChannel: A Channel\nViews: 1234\nDescription: A description.\n\nTranscript:\n\nHello world"
        );
    }

    #[test]
    fn test_save_bare_transcript() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        store.save(None, "Hello world").unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "Hello world");
    }

    #[test]
    fn test_save_always_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        store.save(None, "first run transcript").unwrap();
        store.save(None, "second").unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "second");
        assert!(!content.contains("first"));
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir.path().join("data"));

        store.save(None, "text").unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_description_truncated_to_150_chars() {
        let mut info = sample_metadata();
        info.description = "x".repeat(200);

        let rendered = render_with_header(&info, "body");
        let line = rendered
            .lines()
            .find(|l| l.starts_with("Description:"))
            .unwrap();

        assert_eq!(line, format!("Description: {}...", "x".repeat(150)));
    }

    #[test]
    fn test_truncate_is_char_boundary_safe() {
        let s = "é".repeat(200);
        let truncated = truncate_chars(&s, 150);
        assert_eq!(truncated.chars().count(), 153); // 150 chars + "..."
    }

    #[test]
    fn test_short_description_not_truncated() {
        let rendered = render_with_header(&sample_metadata(), "body");
        assert!(rendered.contains("Description: A description.\n"));
        assert!(!rendered.contains("A description...."));
    }
}
