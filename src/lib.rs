//! # Framereel
//!
//! Assemble numbered still-image frames into an H.264 video and an
//! infinitely looped animated GIF at a single frame rate.
//!
//! Framereel walks an ordered list of index ranges over a filename template
//! (`<prefix>_<4-digit index>.png`), skips missing frames with a warning,
//! and hands the resulting ordered list to two encoders: an ffmpeg-backed
//! video encoder and a pure-Rust GIF encoder.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use framereel::{config::Config, reel::ReelEngine};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config::default();
//! let engine = ReelEngine::new(config);
//!
//! match engine.assemble("renders/").await? {
//!     Some(summary) => println!("Encoded {} frames", summary.frames_used),
//!     None => println!("No frames found"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - [`sequence`] - Frame-path enumeration over index ranges
//! - [`encode`] - Video (ffmpeg) and GIF encoders
//! - [`reel`] - The assembly engine tying the two together
//! - [`config`] - Configuration management

pub mod config;
pub mod encode;
pub mod error;
pub mod reel;
pub mod sequence;

// Re-export commonly used types for convenience
pub use crate::{
    config::Config,
    error::{ReelError, Result},
    reel::{ReelEngine, ReelSummary},
    sequence::{FrameRange, FrameSequence, FrameTemplate, SequenceScanner},
};
