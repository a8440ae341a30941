//! # Reel Assembly Engine
//!
//! Coordinates the sequence scan and the two encoders to turn a directory
//! of numbered frames into the final video and looped-GIF artifacts.

pub mod engine;

// Re-exports for convenience
pub use engine::{ReelEngine, ReelSummary};
