use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SequenceError;

/// A half-open index range with a signed step, iterated uniformly
///
/// Semantics match a classic counted loop: iteration starts at `start` and
/// advances by `step` while the index has not reached or passed `stop`
/// (`stop` itself is never produced). A negative step counts down, so
/// `FrameRange::new(43, -1, -1)` yields 43, 42, ... 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRange {
    /// First index produced
    pub start: i32,

    /// Exclusive bound; never produced
    pub stop: i32,

    /// Signed stride; must not be zero
    pub step: i32,
}

impl FrameRange {
    /// Create a new range
    pub fn new(start: i32, stop: i32, step: i32) -> Self {
        Self { start, stop, step }
    }

    /// Check that the range is well-formed
    pub fn validate(&self) -> Result<(), SequenceError> {
        if self.step == 0 {
            return Err(SequenceError::InvalidRange {
                details: format!("step must be non-zero ({}, {}, {})", self.start, self.stop, self.step),
            });
        }
        Ok(())
    }

    /// Number of indices this range produces
    pub fn len(&self) -> usize {
        if self.step > 0 {
            if self.stop > self.start {
                ((self.stop - self.start - 1) / self.step + 1) as usize
            } else {
                0
            }
        } else if self.step < 0 {
            if self.start > self.stop {
                ((self.start - self.stop - 1) / -self.step + 1) as usize
            } else {
                0
            }
        } else {
            0
        }
    }

    /// True if the range produces no indices
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the indices in order
    pub fn indices(&self) -> impl Iterator<Item = i32> {
        let Self { start, step, .. } = *self;
        (0..self.len() as i32).map(move |k| start + k * step)
    }
}

/// Filename template for numbered frames: `<prefix>_<4-digit index>.<extension>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameTemplate {
    /// Filename prefix before the index, e.g. "Diamond_Video_Frame"
    pub prefix: String,

    /// File extension without the dot
    pub extension: String,
}

impl FrameTemplate {
    /// Create a template with the given prefix and a `png` extension
    pub fn new<S: Into<String>>(prefix: S) -> Self {
        Self {
            prefix: prefix.into(),
            extension: "png".to_string(),
        }
    }

    /// Check that the template is well-formed
    pub fn validate(&self) -> Result<(), SequenceError> {
        if self.prefix.is_empty() {
            return Err(SequenceError::InvalidTemplate {
                details: "prefix must not be empty".to_string(),
            });
        }
        if self.extension.is_empty() {
            return Err(SequenceError::InvalidTemplate {
                details: "extension must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Format the filename for a frame index (zero-padded to 4 digits)
    pub fn filename(&self, index: i32) -> String {
        format!("{}_{:04}.{}", self.prefix, index, self.extension)
    }

    /// Full path for a frame index under the given directory
    pub fn path<P: AsRef<Path>>(&self, dir: P, index: i32) -> PathBuf {
        dir.as_ref().join(self.filename(index))
    }
}

impl Default for FrameTemplate {
    fn default() -> Self {
        Self::new("Diamond_Video_Frame")
    }
}

/// An ordered list of existing frame paths, plus the candidates that were missing
///
/// Order is insertion order, determined by the ranges the scan walked.
/// The sequence is append-only during construction and consumed once by
/// the encoders.
#[derive(Debug, Clone, Default)]
pub struct FrameSequence {
    frames: Vec<PathBuf>,
    missing: Vec<PathBuf>,
}

impl FrameSequence {
    /// Create a new empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an existing frame path
    pub fn push(&mut self, path: PathBuf) {
        self.frames.push(path);
    }

    /// Record a candidate path that did not exist on disk
    pub fn record_missing(&mut self, path: PathBuf) {
        self.missing.push(path);
    }

    /// All frame paths in scan order
    pub fn frames(&self) -> &[PathBuf] {
        &self.frames
    }

    /// Candidate paths that were missing during the scan
    pub fn missing(&self) -> &[PathBuf] {
        &self.missing
    }

    /// Number of frames found
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True if no frames were found
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Iterate the frame paths in order
    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.frames.iter()
    }
}

impl FromIterator<PathBuf> for FrameSequence {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        let mut sequence = Self::new();
        for path in iter {
            sequence.push(path);
        }
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_range() {
        let range = FrameRange::new(43, -1, -1);
        let indices: Vec<i32> = range.indices().collect();
        assert_eq!(indices.len(), 44);
        assert_eq!(indices.first(), Some(&43));
        assert_eq!(indices.last(), Some(&0));
        assert_eq!(range.len(), 44);
    }

    #[test]
    fn test_ascending_range() {
        let range = FrameRange::new(77, 120, 1);
        let indices: Vec<i32> = range.indices().collect();
        assert_eq!(indices.len(), 43);
        assert_eq!(indices.first(), Some(&77));
        assert_eq!(indices.last(), Some(&119));
    }

    #[test]
    fn test_stop_is_exclusive() {
        let range = FrameRange::new(0, 3, 1);
        assert_eq!(range.indices().collect::<Vec<_>>(), vec![0, 1, 2]);

        let range = FrameRange::new(3, 0, -1);
        assert_eq!(range.indices().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_empty_range() {
        assert!(FrameRange::new(5, 5, 1).is_empty());
        assert!(FrameRange::new(5, 10, -1).is_empty());
        assert!(FrameRange::new(10, 5, 1).is_empty());
    }

    #[test]
    fn test_wide_step() {
        let range = FrameRange::new(0, 10, 3);
        assert_eq!(range.indices().collect::<Vec<_>>(), vec![0, 3, 6, 9]);
        assert_eq!(range.len(), 4);
    }

    #[test]
    fn test_zero_step_is_invalid() {
        assert!(FrameRange::new(0, 10, 0).validate().is_err());
        assert!(FrameRange::new(0, 10, 1).validate().is_ok());
    }

    #[test]
    fn test_template_zero_padding() {
        let template = FrameTemplate::new("Diamond_Video_Frame");
        assert_eq!(template.filename(0), "Diamond_Video_Frame_0000.png");
        assert_eq!(template.filename(7), "Diamond_Video_Frame_0007.png");
        assert_eq!(template.filename(119), "Diamond_Video_Frame_0119.png");
        assert_eq!(template.filename(1234), "Diamond_Video_Frame_1234.png");
    }

    #[test]
    fn test_template_path_join() {
        let template = FrameTemplate::new("shot");
        let path = template.path("/renders/out", 42);
        assert_eq!(path, PathBuf::from("/renders/out/shot_0042.png"));
    }

    #[test]
    fn test_empty_prefix_is_invalid() {
        let template = FrameTemplate::new("");
        assert!(template.validate().is_err());
    }

    #[test]
    fn test_sequence_preserves_insertion_order() {
        let mut sequence = FrameSequence::new();
        sequence.push(PathBuf::from("b.png"));
        sequence.push(PathBuf::from("a.png"));
        sequence.push(PathBuf::from("c.png"));

        let order: Vec<_> = sequence.iter().cloned().collect();
        assert_eq!(order, vec![
            PathBuf::from("b.png"),
            PathBuf::from("a.png"),
            PathBuf::from("c.png"),
        ]);
    }
}
