//! The interactive session: acquire, display, summarize, question loop.

use crate::chat::ChatHistory;
use crate::cli::preflight;
use crate::config::Settings;
use crate::orchestrator::Orchestrator;
use crate::youtube::extract_video_id;
use console::style;
use std::io::{self, BufRead, Write};

/// Maximum description length shown in the VIDEO INFO block.
const DESCRIPTION_PREVIEW_CHARS: usize = 300;

/// Run a full interactive session.
///
/// Acquisition failures print a message and return early; the process exits
/// with code 0 either way.
pub async fn run_session(url: Option<String>, settings: Settings) -> anyhow::Result<()> {
    preflight::warn_on_missing_requirements(&settings);

    let orchestrator = Orchestrator::new(settings)?;

    let url = match url {
        Some(u) => u.trim().to_string(),
        None => {
            let Some(line) = prompt_line(&format!(
                "{} ",
                style("Enter YouTube URL:").green().bold()
            ))?
            else {
                return Ok(());
            };
            line
        }
    };

    if extract_video_id(&url).is_none() {
        println!(
            "{}",
            style("Could not find a video ID in that URL.").red().bold()
        );
        return Ok(());
    }

    let Some(session) = orchestrator.prepare(&url).await else {
        println!("{}", style("Transcript not available.").red().bold());
        return Ok(());
    };

    println!("\n=== {} ===", style("VIDEO INFO").cyan().bold());
    println!("{} {}", style("Title:").green().bold(), session.metadata.title);
    println!("{} {}", style("Channel:").cyan().bold(), session.metadata.channel);
    println!("{} {}", style("Views:").yellow().bold(), session.metadata.views);
    println!(
        "{} {}",
        style("Description:").bold(),
        preview(&session.metadata.description, DESCRIPTION_PREVIEW_CHARS)
    );

    println!(
        "\n{} {}",
        style("Chosen subtitle language:").green().bold(),
        session.origin.label()
    );

    println!("\n=== {} ===\n", style("SUMMARY").cyan().bold());
    orchestrator
        .engine()
        .summarize(&session.metadata, &session.transcript)
        .await;

    let mut history = ChatHistory::new();

    loop {
        let Some(question) = prompt_line(&format!(
            "\n{} ",
            style("Ask a question (or 'exit' to quit):").green().bold()
        ))?
        else {
            break;
        };

        if question.is_empty() {
            continue;
        }

        if question.eq_ignore_ascii_case("exit") || question.eq_ignore_ascii_case("quit") {
            break;
        }

        println!("\n{}\n", style("Answer:").cyan().bold());
        let answer = orchestrator
            .engine()
            .answer(&session.metadata, &session.transcript, &history, &question)
            .await;

        // Appended even when the backend came back empty.
        history.push(question, answer);
    }

    Ok(())
}

/// Print a prompt and read one trimmed line. None on EOF.
fn prompt_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes = io::stdin().lock().read_line(&mut input)?;
    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

/// Truncate to `max` characters with an ellipsis, without splitting a
/// multibyte character.
fn preview(s: &str, max: usize) -> String {
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

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("short", 300), "short");
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let long = "y".repeat(400);
        let shown = preview(&long, 300);
        assert_eq!(shown.chars().count(), 303);
        assert!(shown.ends_with("..."));
    }
}
