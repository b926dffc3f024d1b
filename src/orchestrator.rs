//! Pipeline orchestration for Snakk.
//!
//! Wires the acquisition chain, persistence and the LLM engine together.
//! Every step the orchestrator drives is total: internal failures have
//! already been converted to sentinels by the components.

use crate::audio::download_audio;
use crate::config::{Prompts, Settings};
use crate::error::Result;
use crate::llm::LlmEngine;
use crate::transcript::{
    resolve_transcript, LocalTranscriber, ScrapeClient, SpeechToText, TranscriptOrigin,
    TranscriptStore,
};
use crate::youtube::{fetch_video_info, VideoMetadata};
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

/// Everything the interactive session needs after acquisition.
pub struct VideoSession {
    pub metadata: VideoMetadata,
    pub transcript: String,
    pub origin: TranscriptOrigin,
}

/// The main orchestrator for a Snakk run.
pub struct Orchestrator {
    scraper: ScrapeClient,
    fallback: WhisperFallback,
    store: TranscriptStore,
    engine: LlmEngine,
}

impl Orchestrator {
    /// Create a new orchestrator from settings.
    pub fn new(settings: Settings) -> Result<Self> {
        let prompts = Prompts::default();

        let scraper = ScrapeClient::new(&settings.scraper);
        let fallback = WhisperFallback::new(&settings);
        let store = TranscriptStore::new(settings.data_dir(), &settings.general.transcript_file);
        let engine = LlmEngine::new(&settings.llm, prompts);

        std::fs::create_dir_all(settings.temp_dir())?;

        Ok(Self {
            scraper,
            fallback,
            store,
            engine,
        })
    }

    /// Get the LLM engine.
    pub fn engine(&self) -> &LlmEngine {
        &self.engine
    }

    /// Acquire transcript and metadata for a video, persisting the result.
    ///
    /// Returns None when neither acquisition path produced a transcript.
    pub async fn prepare(&self, url: &str) -> Option<VideoSession> {
        let (transcript, origin) = resolve_transcript(&self.scraper, &self.fallback, url).await?;

        let metadata = fetch_video_info(url).await;
        self.store.save_or_log(Some(&metadata), &transcript);

        Some(VideoSession {
            metadata,
            transcript,
            origin,
        })
    }
}

/// Download-then-transcribe fallback used when the scrape yields nothing.
pub struct WhisperFallback {
    transcriber: LocalTranscriber,
    temp_dir: PathBuf,
}

impl WhisperFallback {
    pub fn new(settings: &Settings) -> Self {
        Self {
            transcriber: LocalTranscriber::new(&settings.whisper, settings.whisper_model_path()),
            temp_dir: settings.temp_dir(),
        }
    }
}

#[async_trait]
impl SpeechToText for WhisperFallback {
    async fn transcribe_url(&self, url: &str) -> String {
        let spinner = step_spinner("Downloading audio...");
        let audio = download_audio(url, &self.temp_dir).await;
        spinner.finish_and_clear();

        let Some(audio_path) = audio else {
            return String::new();
        };

        let spinner = step_spinner("Transcribing with whisper...");
        let text = self.transcriber.transcribe(&audio_path).await;
        spinner.finish_and_clear();

        text
    }
}

fn step_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
