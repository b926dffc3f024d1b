//! Configuration module for Snakk.
//!
//! Handles loading and managing application settings and prompt templates.

mod prompts;
mod settings;

pub use prompts::{Prompts, QaPrompts, SummaryPrompts};
pub use settings::{
    GeneralSettings, LlmSettings, ScraperSettings, Settings, WhisperSettings,
};
