//! Summarization and Q&A against the chat backend.
//!
//! Both request shapes stream deltas to the terminal as they arrive and
//! return the accumulated text. Backend failures are logged and yield an
//! empty string; the interactive loop tolerates empty answers.

use crate::chat::{ChatHistory, Exchange};
use crate::config::{LlmSettings, Prompts};
use crate::error::{Result, SnakkError};
use crate::youtube::VideoMetadata;
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use console::style;
use futures::StreamExt;
use std::io::Write;
use std::time::Duration;
use tracing::error;

/// Timeout for backend requests (5 minutes).
const REQUEST_TIMEOUT_SECS: u64 = 300;

/// Summarizer / Q&A engine over an OpenAI-compatible chat backend.
pub struct LlmEngine {
    client: Client<OpenAIConfig>,
    model: String,
    prompts: Prompts,
    max_history: usize,
}

impl LlmEngine {
    /// Create an engine with the configured model. The API key comes from
    /// the environment; a missing key surfaces as failed requests, not a
    /// construction error.
    pub fn new(settings: &LlmSettings, prompts: Prompts) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let client = Client::with_config(OpenAIConfig::default()).with_http_client(http_client);

        Self {
            client,
            model: settings.model.clone(),
            prompts,
            max_history: settings.max_history,
        }
    }

    /// Stream a brief summary of the video, returning the full text.
    pub async fn summarize(&self, info: &VideoMetadata, transcript: &str) -> String {
        let prompt = build_summary_prompt(info, transcript);
        self.stream_completion(&self.prompts.summary.system, &prompt)
            .await
    }

    /// Stream an answer to a question, with rolling history context.
    pub async fn answer(
        &self,
        info: &VideoMetadata,
        transcript: &str,
        history: &ChatHistory,
        question: &str,
    ) -> String {
        let prompt = build_answer_prompt(info, transcript, history.recent(self.max_history), question);
        self.stream_completion(&self.prompts.qa.system, &prompt).await
    }

    /// Run one streaming completion, echoing chunks as they arrive.
    ///
    /// Total: failures are logged and yield whatever text accumulated
    /// (empty when nothing arrived).
    async fn stream_completion(&self, system: &str, user: &str) -> String {
        match self.try_stream_completion(system, user).await {
            Ok(text) => text,
            Err(e) => {
                error!("LLM streaming error: {}", e);
                String::new()
            }
        }
    }

    async fn try_stream_completion(&self, system: &str, user: &str) -> Result<String> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(system)
                .build()
                .map_err(|e| SnakkError::Llm(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(user)
                .build()
                .map_err(|e| SnakkError::Llm(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .build()
            .map_err(|e| SnakkError::Llm(e.to_string()))?;

        let mut stream = self
            .client
            .chat()
            .create_stream(request)
            .await
            .map_err(|e| SnakkError::Llm(format!("Chat API error: {e}")))?;

        let mut full_text = String::new();
        let mut stdout = std::io::stdout();

        while let Some(result) = stream.next().await {
            match result {
                Ok(chunk) => {
                    for choice in &chunk.choices {
                        if let Some(content) = &choice.delta.content {
                            print!("{}", style(content).yellow());
                            stdout.flush().ok();
                            full_text.push_str(content);
                        }
                    }
                }
                Err(e) => {
                    // Keep what already arrived.
                    error!("Stream interrupted: {}", e);
                    break;
                }
            }
        }

        println!();
        Ok(full_text)
    }
}

fn metadata_block(info: &VideoMetadata) -> String {
    format!(
        "Video Info:\nTitle: {}\nChannel: {}\nViews: {}\nDescription: {}\n",
        info.title, info.channel, info.views, info.description
    )
}

/// Prompt body for summarization: metadata block plus transcript.
pub fn build_summary_prompt(info: &VideoMetadata, transcript: &str) -> String {
    format!("{}\nTranscript:\n{}", metadata_block(info), transcript)
}

/// Prompt body for Q&A: metadata block, transcript, the history window
/// numbered sequentially, then the current question labeled as such.
pub fn build_answer_prompt(
    info: &VideoMetadata,
    transcript: &str,
    history: &[Exchange],
    question: &str,
) -> String {
    let mut prompt = format!("{}\nTranscript:\n{}\n\n", metadata_block(info), transcript);

    for (i, exchange) in history.iter().enumerate() {
        prompt.push_str(&format!(
            "Q{n}: {}\nA{n}: {}\n\n",
            exchange.question,
            exchange.answer,
            n = i + 1
        ));
    }

    prompt.push_str(&format!("Current Question: {}", question));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_metadata() -> VideoMetadata {
        VideoMetadata {
            title: "Title".to_string(),
            channel: "Channel".to_string(),
            views: "42".to_string(),
            description: "Desc".to_string(),
        }
    }

    #[test]
    fn test_summary_prompt_contains_metadata_and_transcript() {
        let prompt = build_summary_prompt(&sample_metadata(), "the transcript");

        assert!(prompt.contains("Title: Title"));
        assert!(prompt.contains("Channel: Channel"));
        assert!(prompt.contains("Views: 42"));
        assert!(prompt.contains("Description: Desc"));
        assert!(prompt.ends_with("Transcript:\nthe transcript"));
    }

    #[test]
    fn test_answer_prompt_numbers_history_chronologically() {
        let mut history = ChatHistory::new();
        for i in 1..=12 {
            history.push(format!("q{i}"), format!("a{i}"));
        }

        let prompt = build_answer_prompt(
            &sample_metadata(),
            "text",
            history.recent(10),
            "what now?",
        );

        // Only the 10 most recent pairs, renumbered from 1, oldest first.
        assert!(prompt.contains("Q1: q3\nA1: a3"));
        assert!(prompt.contains("Q10: q12\nA10: a12"));
        assert!(!prompt.contains("q1\n"));
        assert!(!prompt.contains("Q11:"));
        assert!(prompt.ends_with("Current Question: what now?"));
    }

    #[test]
    fn test_answer_prompt_without_history() {
        let prompt = build_answer_prompt(&sample_metadata(), "text", &[], "why?");

        assert!(!prompt.contains("Q1:"));
        assert!(prompt.ends_with("Current Question: why?"));
    }
}
