//! Snakk - Chat with YouTube Videos
//!
//! A CLI assistant for summarizing and interactively questioning YouTube videos.
//!
//! The name "Snakk" comes from the Norwegian word for "talk."
//!
//! # Overview
//!
//! Snakk allows you to:
//! - Fetch a video's transcript from a caption-scraping service
//! - Fall back to local whisper.cpp transcription when no captions exist
//! - Stream an AI-generated summary of the video to your terminal
//! - Ask follow-up questions with rolling conversation context
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `youtube` - Video ID parsing and metadata fetching
//! - `audio` - Audio-only stream download
//! - `transcript` - Transcript acquisition (scrape, whisper fallback) and storage
//! - `chat` - Rolling question/answer history
//! - `llm` - Summarization and Q&A against the chat backend
//! - `orchestrator` - Pipeline coordination
//!
//! # Example
//!
//! ```rust,no_run
//! use snakk::config::Settings;
//! use snakk::orchestrator::Orchestrator;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let orchestrator = Orchestrator::new(settings)?;
//!
//!     if let Some(session) = orchestrator.prepare("https://youtu.be/dQw4w9WgXcQ").await {
//!         println!("Transcript has {} characters", session.transcript.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod audio;
pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod orchestrator;
pub mod transcript;
pub mod youtube;

pub use error::{Result, SnakkError};
