//! Prompt templates for Snakk.

use serde::{Deserialize, Serialize};

/// Collection of all prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Prompts {
    pub summary: SummaryPrompts,
    pub qa: QaPrompts,
}

/// Prompts for video summarization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryPrompts {
    pub system: String,
}

impl Default for SummaryPrompts {
    fn default() -> Self {
        Self {
            system: "You are given a YouTube video's metadata and transcript. Summarize briefly."
                .to_string(),
        }
    }
}

/// Prompts for interactive Q&A.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QaPrompts {
    pub system: String,
}

impl Default for QaPrompts {
    fn default() -> Self {
        Self {
            system: "Answer concisely using video metadata, transcript, and chat history."
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prompts() {
        let prompts = Prompts::default();
        assert!(!prompts.summary.system.is_empty());
        assert!(!prompts.qa.system.is_empty());
    }
}
