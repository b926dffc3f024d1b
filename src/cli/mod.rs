//! CLI module for Snakk.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Snakk - Chat with YouTube videos
///
/// Fetches a video's transcript (scraped captions with a local whisper
/// fallback), summarizes it, and answers questions interactively.
/// The name "Snakk" comes from the Norwegian word for "talk."
#[derive(Parser, Debug)]
#[command(name = "snakk")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// YouTube URL to process (prompted for interactively when omitted)
    pub url: Option<String>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check system requirements and configuration
    Doctor,
}
