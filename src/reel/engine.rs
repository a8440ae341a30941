use std::path::Path;

use tracing::{debug, info, warn};

use crate::{
    config::Config,
    encode::{EncodedOutput, GifEncoder, VideoEncoder},
    error::Result,
    sequence::{FrameSequence, SequenceScanner},
};

/// Summary of one completed assembly run
#[derive(Debug, Clone)]
pub struct ReelSummary {
    /// Frames that went into the outputs
    pub frames_used: usize,

    /// Candidate frames that were missing on disk
    pub frames_missing: usize,

    /// The encoded video artifact
    pub video: EncodedOutput,

    /// The encoded looped-GIF artifact
    pub gif: EncodedOutput,
}

/// Main engine that assembles a frame sequence into the two output artifacts
///
/// The engine follows a short pipeline:
/// 1. Sequence Scan - walk the configured ranges and collect existing frames
/// 2. Video Encoding - encode the ordered frames to MP4 via ffmpeg
/// 3. GIF Encoding - encode the same frames to an infinitely looped GIF
///
/// Both encoders receive the same ordered list and the same frame rate.
pub struct ReelEngine {
    config: Config,
}

impl ReelEngine {
    /// Create a new engine with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Assemble the frames found under `frames_dir` into the configured outputs
    ///
    /// Returns `Ok(None)` when no frames are found: a diagnostic is emitted,
    /// no encoder runs, and the process exits normally.
    pub async fn assemble<P: AsRef<Path>>(&self, frames_dir: P) -> Result<Option<ReelSummary>> {
        let frames_dir = frames_dir.as_ref();

        info!("🎬 Starting framereel assembly");
        info!("   Frames: {:?}", frames_dir);
        info!("   Video:  {:?}", self.config.encode.video_output);
        info!("   GIF:    {:?}", self.config.encode.gif_output);
        info!("   FPS:    {}", self.config.encode.params.fps);

        // Pipeline Step 1: Sequence Scan
        let sequence = self.scan_sequence(frames_dir)?;

        if sequence.is_empty() {
            warn!("No frames found in {:?}, nothing to encode", frames_dir);
            return Ok(None);
        }

        // Pipeline Step 2: Video Encoding
        let video = self.encode_video(&sequence).await?;

        // Pipeline Step 3: GIF Encoding
        let gif = self.encode_gif(&sequence)?;

        let summary = ReelSummary {
            frames_used: sequence.len(),
            frames_missing: sequence.missing().len(),
            video,
            gif,
        };

        info!("🎉 Assembly complete!");
        info!("   Frames used: {}", summary.frames_used);
        if summary.frames_missing > 0 {
            info!("   Frames missing: {}", summary.frames_missing);
        }

        Ok(Some(summary))
    }

    fn scan_sequence(&self, frames_dir: &Path) -> Result<FrameSequence> {
        info!("🔍 Step 1: Scanning frame sequence...");

        let scanner = SequenceScanner::new(
            self.config.sequence.template.clone(),
            self.config.sequence.ranges.clone(),
        )?;

        let sequence = scanner.scan(frames_dir)?;

        debug!(
            "Scan complete: {} found, {} missing",
            sequence.len(),
            sequence.missing().len()
        );

        Ok(sequence)
    }

    async fn encode_video(
        &self,
        sequence: &FrameSequence,
    ) -> Result<EncodedOutput> {
        info!("🎥 Step 2: Encoding video...");

        let mut encoder = VideoEncoder::new(self.config.encode.params.clone());
        let video = encoder
            .encode(sequence.frames(), &self.config.encode.video_output)
            .await?;
        encoder.cleanup()?;

        Ok(video)
    }

    fn encode_gif(&self, sequence: &FrameSequence) -> Result<EncodedOutput> {
        info!("🌀 Step 3: Encoding looped GIF...");

        let encoder = GifEncoder::new(self.config.encode.params.clone());
        encoder.encode(sequence.frames(), &self.config.encode.gif_output)
    }
}
