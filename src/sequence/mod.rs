//! # Frame Sequence Module
//!
//! Builds the ordered list of frame paths the encoders consume. A
//! [`SequenceScanner`] walks an ordered list of [`FrameRange`]s over a
//! [`FrameTemplate`], keeping only paths that exist on disk and warning
//! about the rest.

pub mod scanner;
pub mod types;

pub use scanner::SequenceScanner;
pub use types::{FrameRange, FrameSequence, FrameTemplate};
