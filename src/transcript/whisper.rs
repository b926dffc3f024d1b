//! Local whisper.cpp transcription.
//!
//! The model is expensive to load, so a single context is cached for the
//! process lifetime and shared by all transcription calls.

use crate::config::WhisperSettings;
use crate::error::{Result, SnakkError};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tokio::sync::OnceCell;
use tracing::{debug, error, info};
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

/// Process-wide cached whisper context. Loaded at most once, never
/// invalidated within a run.
static WHISPER_CONTEXT: OnceCell<WhisperContext> = OnceCell::const_new();

/// Local speech-to-text over downloaded audio files.
pub struct LocalTranscriber {
    model_path: PathBuf,
    language: Option<String>,
}

impl LocalTranscriber {
    pub fn new(settings: &WhisperSettings, model_path: PathBuf) -> Self {
        Self {
            model_path,
            language: settings.language.clone(),
        }
    }

    /// Transcribe an audio file.
    ///
    /// Total: any failure (model load, decode, inference) is logged and
    /// surfaces as an empty string.
    pub async fn transcribe(&self, audio_path: &Path) -> String {
        match self.try_transcribe(audio_path).await {
            Ok(text) => text,
            Err(e) => {
                error!("Whisper transcription error: {}", e);
                String::new()
            }
        }
    }

    /// Decode the audio to PCM, run inference, return the stripped text.
    pub async fn try_transcribe(&self, audio_path: &Path) -> Result<String> {
        let ctx = self.context().await?;

        let temp_dir = tempfile::tempdir()?;
        let wav_path = temp_dir.path().join("audio16k.wav");
        decode_to_pcm_wav(audio_path, &wav_path).await?;

        let samples = read_samples(&wav_path).await?;
        debug!("Running whisper inference over {} samples", samples.len());

        let language = self.language.clone();
        let text = tokio::task::spawn_blocking(move || run_inference(ctx, &samples, language))
            .await
            .map_err(|e| SnakkError::Transcription(format!("Inference task failed: {e}")))??;

        Ok(text.trim().to_string())
    }

    /// Get the cached whisper context, loading the model on first use only.
    async fn context(&self) -> Result<&'static WhisperContext> {
        WHISPER_CONTEXT
            .get_or_try_init(|| {
                let model_path = self.model_path.clone();
                async move {
                    info!("Loading whisper model from {}", model_path.display());

                    tokio::task::spawn_blocking(move || {
                        let path = model_path.to_str().ok_or_else(|| {
                            SnakkError::Transcription("Model path is not valid UTF-8".into())
                        })?;
                        WhisperContext::new_with_params(path, WhisperContextParameters::default())
                            .map_err(|e| {
                                SnakkError::Transcription(format!("Failed to load model: {e}"))
                            })
                    })
                    .await
                    .map_err(|e| SnakkError::Transcription(format!("Model load task failed: {e}")))?
                }
            })
            .await
    }
}

/// Run the model over normalized samples and concatenate segment texts.
fn run_inference(
    ctx: &WhisperContext,
    samples: &[f32],
    language: Option<String>,
) -> Result<String> {
    let mut state = ctx
        .create_state()
        .map_err(|e| SnakkError::Transcription(format!("Failed to create state: {e}")))?;

    let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
    let language = language.unwrap_or_else(|| "auto".to_string());
    params.set_language(Some(language.as_str()));
    params.set_print_special(false);
    params.set_print_progress(false);
    params.set_print_realtime(false);
    params.set_print_timestamps(false);

    state
        .full(params, samples)
        .map_err(|e| SnakkError::Transcription(format!("Inference failed: {e}")))?;

    let mut text = String::new();
    for segment in state.as_iter() {
        if let Ok(s) = segment.to_str() {
            text.push_str(s);
        }
    }

    Ok(text)
}

/// Decode an audio file to 16 kHz mono 16-bit PCM WAV, the input whisper
/// expects.
async fn decode_to_pcm_wav(source: &Path, dest: &Path) -> Result<()> {
    debug!("Decoding {:?} to PCM", source);

    let result = Command::new("ffmpeg")
        .arg("-i").arg(source)
        .arg("-vn")
        .arg("-ar").arg("16000")
        .arg("-ac").arg("1")
        .arg("-c:a").arg("pcm_s16le")
        .arg("-y")
        .arg("-loglevel").arg("error")
        .arg(dest)
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .await;

    match result {
        Ok(out) if out.status.success() => Ok(()),
        Ok(out) => {
            let err = String::from_utf8_lossy(&out.stderr);
            Err(SnakkError::Transcription(format!("ffmpeg decode failed: {err}")))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(SnakkError::ToolNotFound("ffmpeg".into()))
        }
        Err(e) => Err(SnakkError::Transcription(format!("ffmpeg error: {e}"))),
    }
}

/// Read WAV samples and normalize to f32 in [-1, 1].
async fn read_samples(wav_path: &Path) -> Result<Vec<f32>> {
    let wav_path = wav_path.to_path_buf();

    tokio::task::spawn_blocking(move || {
        let reader = hound::WavReader::open(&wav_path)
            .map_err(|e| SnakkError::Transcription(format!("Failed to read PCM audio: {e}")))?;

        let samples = reader
            .into_samples::<i16>()
            .collect::<std::result::Result<Vec<i16>, _>>()
            .map_err(|e| SnakkError::Transcription(format!("Corrupt PCM audio: {e}")))?;

        Ok(samples
            .into_iter()
            .map(|s| s as f32 / i16::MAX as f32)
            .collect())
    })
    .await
    .map_err(|e| SnakkError::Transcription(format!("Sample read task failed: {e}")))?
}
