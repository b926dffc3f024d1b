//! Transcript acquisition and storage.
//!
//! Two acquisition paths: scraped captions from a third-party service, and
//! local whisper.cpp transcription of the downloaded audio track. The scrape
//! is always tried first; the whisper path only runs when it yields nothing.

mod scrape;
mod store;
mod whisper;

pub use scrape::{parse_transcript_html, ScrapeClient};
pub use store::TranscriptStore;
pub use whisper::LocalTranscriber;

use async_trait::async_trait;
use console::style;

/// Where a transcript came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptOrigin {
    /// Captions scraped from the transcript service.
    Captions,
    /// Local whisper fallback over the downloaded audio.
    Whisper,
}

impl TranscriptOrigin {
    /// Label rendered on the "Chosen subtitle language" line.
    pub fn label(&self) -> &'static str {
        match self {
            TranscriptOrigin::Captions => "auto",
            TranscriptOrigin::Whisper => "auto (whisper)",
        }
    }
}

/// Source of scraped captions.
#[async_trait]
pub trait CaptionSource: Send + Sync {
    /// Fetch caption text for a video URL.
    ///
    /// Total: failures surface as `("", None)`, never as an error.
    async fn fetch(&self, url: &str) -> (String, Option<TranscriptOrigin>);
}

/// Speech-to-text over a video's audio track.
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Download the audio track and transcribe it.
    ///
    /// Total: failures surface as an empty string.
    async fn transcribe_url(&self, url: &str) -> String;
}

/// Run the acquisition chain: scraped captions first, speech-to-text only
/// when the scrape yields nothing.
///
/// Returns None when neither path produced text.
pub async fn resolve_transcript(
    captions: &dyn CaptionSource,
    fallback: &dyn SpeechToText,
    url: &str,
) -> Option<(String, TranscriptOrigin)> {
    let (text, origin) = captions.fetch(url).await;
    if !text.is_empty() {
        return Some((text, origin.unwrap_or(TranscriptOrigin::Captions)));
    }

    println!(
        "{}",
        style("No captions found. Falling back to Whisper...").red()
    );

    let text = fallback.transcribe_url(url).await;
    if text.is_empty() {
        return None;
    }

    Some((text, TranscriptOrigin::Whisper))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedCaptions(&'static str);

    #[async_trait]
    impl CaptionSource for FixedCaptions {
        async fn fetch(&self, _url: &str) -> (String, Option<TranscriptOrigin>) {
            if self.0.is_empty() {
                (String::new(), None)
            } else {
                (self.0.to_string(), Some(TranscriptOrigin::Captions))
            }
        }
    }

    struct CountingSpeech {
        calls: AtomicUsize,
        result: &'static str,
    }

    impl CountingSpeech {
        fn new(result: &'static str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                result,
            }
        }
    }

    #[async_trait]
    impl SpeechToText for CountingSpeech {
        async fn transcribe_url(&self, _url: &str) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.to_string()
        }
    }

    #[tokio::test]
    async fn test_scrape_success_short_circuits_fallback() {
        let captions = FixedCaptions("Hello world");
        let speech = CountingSpeech::new("unused");

        let resolved = resolve_transcript(&captions, &speech, "url").await;

        assert_eq!(
            resolved,
            Some(("Hello world".to_string(), TranscriptOrigin::Captions))
        );
        assert_eq!(speech.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_scrape_falls_back_to_whisper() {
        let captions = FixedCaptions("");
        let speech = CountingSpeech::new("spoken words");

        let resolved = resolve_transcript(&captions, &speech, "url").await;

        assert_eq!(
            resolved,
            Some(("spoken words".to_string(), TranscriptOrigin::Whisper))
        );
        assert_eq!(speech.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_both_paths_empty_yields_none() {
        let captions = FixedCaptions("");
        let speech = CountingSpeech::new("");

        assert_eq!(resolve_transcript(&captions, &speech, "url").await, None);
    }

    #[test]
    fn test_origin_labels() {
        assert_eq!(TranscriptOrigin::Captions.label(), "auto");
        assert_eq!(TranscriptOrigin::Whisper.label(), "auto (whisper)");
    }
}
