use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use gif::{Encoder, Frame, Repeat};
use image::GenericImageView;
use tracing::{debug, info};

use crate::encode::types::{EncodeParams, EncodedOutput};
use crate::error::{EncodeError, Result};

/// Encodes an ordered PNG sequence into an infinitely looped GIF
///
/// Pure Rust, no external process: frames are decoded with the `image`
/// crate and quantized by the `gif` encoder. The canvas takes the first
/// frame's dimensions; any later frame of a different size is rejected.
pub struct GifEncoder {
    params: EncodeParams,
}

impl GifEncoder {
    pub fn new(params: EncodeParams) -> Self {
        Self { params }
    }

    /// Encode the ordered frame paths into a looped GIF at `output_path`
    pub fn encode<P: AsRef<Path>>(
        &self,
        frames: &[PathBuf],
        output_path: P,
    ) -> Result<EncodedOutput> {
        self.params.validate()?;

        if frames.is_empty() {
            return Err(EncodeError::GifFailed {
                reason: "no frames to encode".to_string(),
            }
            .into());
        }

        let output_path = output_path.as_ref();
        info!(
            "Encoding {} frames to looped GIF: {}",
            frames.len(),
            output_path.display()
        );

        let first = self.load_rgba(&frames[0])?;
        let (width, height) = (first.0, first.1);

        let file = File::create(output_path)?;
        let mut writer = BufWriter::new(file);

        {
            let mut encoder = Encoder::new(&mut writer, width as u16, height as u16, &[])
                .map_err(|e| EncodeError::GifFailed {
                    reason: format!("Failed to create GIF encoder: {}", e),
                })?;

            encoder
                .set_repeat(Repeat::Infinite)
                .map_err(|e| EncodeError::GifFailed {
                    reason: format!("Failed to set GIF repeat: {}", e),
                })?;

            let delay = self.params.frame_delay_cs();
            let speed = self.quantization_speed();

            for (i, path) in frames.iter().enumerate() {
                let mut rgba = if i == 0 {
                    first.2.clone()
                } else {
                    let (w, h, data) = self.load_rgba(path)?;
                    if (w, h) != (width, height) {
                        return Err(EncodeError::DimensionMismatch {
                            expected_width: width,
                            expected_height: height,
                            width: w,
                            height: h,
                            path: path.display().to_string(),
                        }
                        .into());
                    }
                    data
                };

                let mut frame =
                    Frame::from_rgba_speed(width as u16, height as u16, &mut rgba, speed);
                frame.delay = delay;

                encoder
                    .write_frame(&frame)
                    .map_err(|e| EncodeError::GifFailed {
                        reason: format!("Failed to write GIF frame {}: {}", i, e),
                    })?;

                debug!("Wrote GIF frame {} of {}", i + 1, frames.len());
            }
        }

        writer.flush()?;

        let metadata = std::fs::metadata(output_path)?;
        let encoded = EncodedOutput {
            path: output_path.display().to_string(),
            duration: self.params.duration_for(frames.len()),
            frame_count: frames.len(),
            file_size: metadata.len(),
        };

        info!(
            "GIF encoding complete: {:.1}s, {}KB",
            encoded.duration,
            encoded.file_size / 1024
        );

        Ok(encoded)
    }

    fn load_rgba(&self, path: &Path) -> Result<(u32, u32, Vec<u8>)> {
        let image = image::open(path).map_err(|_| EncodeError::FrameLoadFailed {
            path: path.display().to_string(),
        })?;

        let (width, height) = image.dimensions();
        Ok((width, height, image.to_rgba8().into_raw()))
    }

    /// Map the 0-100 quality setting onto the gif crate's 1-30 speed scale
    /// (lower speed means better quantization)
    fn quantization_speed(&self) -> i32 {
        (30 - (self.params.quality as i32 * 29 / 100)).clamp(1, 30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use tempfile::tempdir;

    fn write_png(path: &Path, width: u32, height: u32, color: [u8; 3]) {
        let buffer: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::from_fn(width, height, |_, _| Rgb(color));
        buffer.save(path).unwrap();
    }

    #[test]
    fn test_encodes_looped_gif() {
        let dir = tempdir().unwrap();

        let frames: Vec<PathBuf> = [[255, 0, 0], [0, 255, 0], [0, 0, 255]]
            .iter()
            .enumerate()
            .map(|(i, &color)| {
                let path = dir.path().join(format!("frame_{:04}.png", i));
                write_png(&path, 8, 8, color);
                path
            })
            .collect();

        let encoder = GifEncoder::new(EncodeParams {
            fps: 20,
            ..Default::default()
        });
        let output_path = dir.path().join("out.gif");
        let encoded = encoder.encode(&frames, &output_path).unwrap();

        assert_eq!(encoded.frame_count, 3);
        assert!(output_path.exists());

        let bytes = std::fs::read(&output_path).unwrap();
        assert_eq!(&bytes[0..6], b"GIF89a");
        // NETSCAPE2.0 application extension carries the infinite loop flag
        assert!(bytes
            .windows(11)
            .any(|window| window == &b"NETSCAPE2.0"[..]));
    }

    #[test]
    fn test_dimension_mismatch_is_rejected() {
        let dir = tempdir().unwrap();

        let first = dir.path().join("frame_0000.png");
        let second = dir.path().join("frame_0001.png");
        write_png(&first, 8, 8, [255, 0, 0]);
        write_png(&second, 16, 8, [0, 255, 0]);

        let encoder = GifEncoder::new(EncodeParams::default());
        let result = encoder.encode(
            &[first, second],
            dir.path().join("out.gif"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_sequence_is_an_error() {
        let dir = tempdir().unwrap();
        let encoder = GifEncoder::new(EncodeParams::default());
        assert!(encoder.encode(&[], dir.path().join("out.gif")).is_err());
    }

    #[test]
    fn test_unreadable_frame_is_an_error() {
        let dir = tempdir().unwrap();
        let bogus = dir.path().join("frame_0000.png");
        std::fs::write(&bogus, b"not a png").unwrap();

        let encoder = GifEncoder::new(EncodeParams::default());
        assert!(encoder.encode(&[bogus], dir.path().join("out.gif")).is_err());
    }
}
