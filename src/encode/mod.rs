//! # Encoding Module
//!
//! Turns the ordered frame list into the two output artifacts: an MP4 via
//! an external ffmpeg process and a looped GIF encoded in-process.

pub mod gif;
pub mod types;
pub mod video;

pub use gif::GifEncoder;
pub use types::{EncodeParams, EncodedOutput};
pub use video::VideoEncoder;
