//! YouTube module for Snakk.
//!
//! Video ID extraction from the URL shapes YouTube hands out, and metadata
//! fetching via yt-dlp.

mod metadata;
mod url;

pub use metadata::{fetch_video_info, parse_video_info, VideoMetadata};
pub use url::extract_video_id;
