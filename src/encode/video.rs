use std::fs::{create_dir_all, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tokio::task;
use tracing::{debug, info, warn};

use crate::encode::types::{EncodeParams, EncodedOutput};
use crate::error::{EncodeError, Result};

/// Encodes an ordered PNG sequence into an MP4 via an external ffmpeg process
///
/// The frames already exist on disk, so encoding is a single ffmpeg
/// invocation over a concat-demuxer list file naming every frame with its
/// display duration. The list file lives in a per-process temp directory
/// that is removed when the encoder is dropped.
pub struct VideoEncoder {
    params: EncodeParams,
    temp_dir: Option<String>,
}

impl VideoEncoder {
    pub fn new(params: EncodeParams) -> Self {
        Self {
            params,
            temp_dir: None,
        }
    }

    pub fn check_ffmpeg_available() -> bool {
        Command::new("ffmpeg")
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn ensure_temp_dir(&mut self) -> Result<String> {
        if let Some(ref temp_dir) = self.temp_dir {
            return Ok(temp_dir.clone());
        }

        let temp_dir = format!("./temp_framereel_{}", std::process::id());
        create_dir_all(&temp_dir)?;
        self.temp_dir = Some(temp_dir.clone());
        Ok(temp_dir)
    }

    /// Encode the ordered frame paths into a video at `output_path`
    pub async fn encode<P: AsRef<Path>>(
        &mut self,
        frames: &[PathBuf],
        output_path: P,
    ) -> Result<EncodedOutput> {
        self.params.validate()?;

        if frames.is_empty() {
            return Err(EncodeError::VideoFailed {
                reason: "no frames to encode".to_string(),
            }
            .into());
        }

        if !Self::check_ffmpeg_available() {
            return Err(EncodeError::FfmpegMissing.into());
        }

        let output_path = output_path.as_ref().display().to_string();
        info!("Encoding {} frames to video: {}", frames.len(), output_path);

        let temp_dir = self.ensure_temp_dir()?;
        let frame_list_path = self.create_frame_list(frames, &temp_dir)?;

        self.run_ffmpeg(&frame_list_path, &output_path).await?;

        let metadata = std::fs::metadata(&output_path)?;
        let encoded = EncodedOutput {
            path: output_path,
            duration: self.params.duration_for(frames.len()),
            frame_count: frames.len(),
            file_size: metadata.len(),
        };

        info!(
            "Video encoding complete: {:.1}s, {}KB",
            encoded.duration,
            encoded.file_size / 1024
        );

        Ok(encoded)
    }

    /// Write the concat-demuxer list file naming every frame
    ///
    /// Each frame gets an explicit display duration of 1/fps. The concat
    /// demuxer ignores the duration of the final entry, so the last frame
    /// is listed a second time without one.
    fn create_frame_list(&self, frames: &[PathBuf], temp_dir: &str) -> Result<String> {
        let list_path = format!("{}/frame_list.txt", temp_dir);
        let mut file = File::create(&list_path)?;

        let frame_duration = 1.0 / self.params.fps as f64;

        for frame_path in frames {
            // Absolute paths avoid resolution relative to the list file
            let absolute_path = frame_path
                .canonicalize()
                .unwrap_or_else(|_| frame_path.clone());

            writeln!(file, "file '{}'", absolute_path.display())?;
            writeln!(file, "duration {:.6}", frame_duration)?;
        }

        if let Some(last_frame) = frames.last() {
            let absolute_path = last_frame
                .canonicalize()
                .unwrap_or_else(|_| last_frame.clone());
            writeln!(file, "file '{}'", absolute_path.display())?;
        }

        debug!("Wrote frame list: {}", list_path);
        Ok(list_path)
    }

    async fn run_ffmpeg(&self, frame_list_path: &str, output_path: &str) -> Result<()> {
        let mut cmd = Command::new("ffmpeg");
        cmd.args([
            "-f",
            "concat",
            "-safe",
            "0",
            "-i",
            frame_list_path,
            "-c:v",
            &self.params.codec,
            "-r",
            &self.params.fps.to_string(),
            "-pix_fmt",
            "yuv420p",
            "-crf",
            &self.params.crf().to_string(),
            "-y",
            output_path,
        ]);

        let output = task::spawn_blocking(move || cmd.output())
            .await
            .map_err(|e| EncodeError::VideoFailed {
                reason: format!("Failed to spawn ffmpeg process: {}", e),
            })?
            .map_err(|e| EncodeError::VideoFailed {
                reason: format!("ffmpeg execution failed: {}", e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(EncodeError::VideoFailed {
                reason: format!("ffmpeg failed: {}", stderr),
            }
            .into());
        }

        Ok(())
    }

    pub fn cleanup(&mut self) -> Result<()> {
        if let Some(temp_dir) = &self.temp_dir {
            if let Err(e) = std::fs::remove_dir_all(temp_dir) {
                warn!("Failed to remove temporary directory: {}", e);
            }
            self.temp_dir = None;
        }
        Ok(())
    }
}

impl Drop for VideoEncoder {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{read_to_string, File};
    use tempfile::tempdir;

    #[test]
    fn test_frame_list_format() {
        let dir = tempdir().unwrap();
        let frames: Vec<PathBuf> = (0..3)
            .map(|i| {
                let path = dir.path().join(format!("frame_{:04}.png", i));
                File::create(&path).unwrap();
                path
            })
            .collect();

        let mut encoder = VideoEncoder::new(EncodeParams {
            fps: 20,
            ..Default::default()
        });
        let temp = encoder.ensure_temp_dir().unwrap();
        let list_path = encoder.create_frame_list(&frames, &temp).unwrap();

        let content = read_to_string(&list_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        // Three file/duration pairs plus the repeated final frame
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("file '"));
        assert_eq!(lines[1], "duration 0.050000");
        assert!(lines[6].starts_with("file '"));
        assert!(lines[6].contains("frame_0002.png"));

        encoder.cleanup().unwrap();
    }

    #[tokio::test]
    async fn test_empty_sequence_is_an_error() {
        let mut encoder = VideoEncoder::new(EncodeParams::default());
        let result = encoder.encode(&[], "out.mp4").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_invalid_params_are_rejected() {
        let mut encoder = VideoEncoder::new(EncodeParams {
            fps: 0,
            ..Default::default()
        });
        let frames = vec![PathBuf::from("frame_0000.png")];
        assert!(encoder.encode(&frames, "out.mp4").await.is_err());
    }
}
