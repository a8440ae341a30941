use serde::{Deserialize, Serialize};

use crate::error::{EncodeError, Result};

/// Encoder parameters shared by both output artifacts
///
/// One fps value is threaded through the video and GIF encoders so the two
/// artifacts always play back at the same rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeParams {
    /// Output frame rate for both artifacts
    pub fps: u32,

    /// Video codec passed to ffmpeg
    pub codec: String,

    /// Quality setting (0-100, higher is better)
    pub quality: u8,
}

impl Default for EncodeParams {
    fn default() -> Self {
        Self {
            fps: 20,
            codec: "libx264".to_string(),
            quality: 85,
        }
    }
}

impl EncodeParams {
    /// Check that the parameters are usable
    pub fn validate(&self) -> Result<()> {
        if self.fps == 0 {
            return Err(EncodeError::InvalidParameters {
                details: "fps must be at least 1".to_string(),
            }
            .into());
        }
        if self.codec.is_empty() {
            return Err(EncodeError::InvalidParameters {
                details: "codec must not be empty".to_string(),
            }
            .into());
        }
        if self.quality > 100 {
            return Err(EncodeError::InvalidParameters {
                details: format!("quality must be 0-100, got {}", self.quality),
            }
            .into());
        }
        Ok(())
    }

    /// Map the 0-100 quality setting onto ffmpeg's CRF scale (51..0)
    pub fn crf(&self) -> u8 {
        (51 - ((self.quality as f32 / 100.0) * 51.0) as u8).clamp(0, 51)
    }

    /// Per-frame delay in centiseconds, as the GIF container counts time
    pub fn frame_delay_cs(&self) -> u16 {
        ((100 / self.fps.max(1)) as u16).max(1)
    }

    /// Duration in seconds of a sequence with the given frame count
    pub fn duration_for(&self, frame_count: usize) -> f64 {
        frame_count as f64 / self.fps as f64
    }
}

/// Summary of one encoded output artifact
#[derive(Debug, Clone)]
pub struct EncodedOutput {
    pub path: String,
    pub duration: f64,
    pub frame_count: usize,
    pub file_size: u64,
}
