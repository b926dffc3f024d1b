//! Audio download for the whisper fallback path.

mod downloader;

pub use downloader::{download_audio, try_download, AUDIO_FILENAME};
