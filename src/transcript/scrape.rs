//! Caption scraping from the transcript service.

use super::{CaptionSource, TranscriptOrigin};
use crate::config::ScraperSettings;
use crate::error::Result;
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, error, warn};

/// CSS selector for caption segments in the service's response.
const SEGMENT_SELECTOR: &str = "span.transcript-segment";

/// Client for the HTML caption-scraping service.
pub struct ScrapeClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ScrapeClient {
    pub fn new(settings: &ScraperSettings) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            endpoint: settings.endpoint.clone(),
        }
    }

    /// Fetch scraped captions for a video URL.
    ///
    /// Total: transport, HTTP and parse failures are logged and surface as
    /// `("", None)`.
    pub async fn fetch_scraped_transcript(&self, url: &str) -> (String, Option<TranscriptOrigin>) {
        let body = match self.try_fetch(url).await {
            Ok(body) => body,
            Err(e) => {
                error!("Transcript fetch request failed: {}", e);
                return (String::new(), None);
            }
        };

        let transcript = parse_transcript_html(&body);
        if transcript.is_empty() {
            warn!("No transcript found.");
            return (String::new(), None);
        }

        (transcript, Some(TranscriptOrigin::Captions))
    }

    async fn try_fetch(&self, url: &str) -> Result<String> {
        debug!("POST {} for {}", self.endpoint, url);

        // The service expects a browser-shaped request.
        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::USER_AGENT, "Mozilla/5.0")
            .header(reqwest::header::ORIGIN, "https://youtubetotranscript.com")
            .header(reqwest::header::REFERER, "https://youtubetotranscript.com/")
            .form(&[("youtube_url", url)])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }
}

#[async_trait]
impl CaptionSource for ScrapeClient {
    async fn fetch(&self, url: &str) -> (String, Option<TranscriptOrigin>) {
        self.fetch_scraped_transcript(url).await
    }
}

/// Extract caption text from the service's HTML response.
///
/// Joins non-empty trimmed segment texts with single spaces, in document
/// order. Segments that trim to empty are skipped entirely.
pub fn parse_transcript_html(html: &str) -> String {
    let document = Html::parse_document(html);
    let selector = Selector::parse(SEGMENT_SELECTOR).expect("Invalid selector");

    document
        .select(&selector)
        .filter_map(|element| {
            let text = element.text().collect::<String>();
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_segments() {
        let html = r#"<html><body>
            <span class="transcript-segment">Hello</span>
            <span class="transcript-segment">world</span>
        </body></html>"#;

        assert_eq!(parse_transcript_html(html), "Hello world");
    }

    #[test]
    fn test_parse_skips_segments_that_trim_to_empty() {
        let html = r#"<html><body>
            <span class="transcript-segment">Hello</span>
            <span class="transcript-segment">   </span>
            <span class="transcript-segment"></span>
            <span class="transcript-segment">world</span>
        </body></html>"#;

        assert_eq!(parse_transcript_html(html), "Hello world");
    }

    #[test]
    fn test_parse_trims_segment_whitespace() {
        let html = r#"<span class="transcript-segment">  Hello there  </span>"#;
        assert_eq!(parse_transcript_html(html), "Hello there");
    }

    #[test]
    fn test_parse_no_segments() {
        let html = "<html><body><p>Nothing to see here.</p></body></html>";
        assert_eq!(parse_transcript_html(html), "");
    }

    #[test]
    fn test_parse_ignores_other_spans() {
        let html = r#"<html><body>
            <span class="nav-item">Menu</span>
            <span class="transcript-segment">Only this</span>
        </body></html>"#;

        assert_eq!(parse_transcript_html(html), "Only this");
    }
}
