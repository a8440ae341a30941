use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{Result, SequenceError};
use crate::sequence::types::{FrameRange, FrameSequence, FrameTemplate};

/// Enumerates frame paths across an ordered list of index ranges
///
/// The scanner walks every range in order, formats a candidate filename for
/// each index and keeps the path only if the file exists on disk. Missing
/// candidates are skipped with a warning naming the full path; they never
/// abort the scan. The result is purely a function of which files exist, so
/// repeated scans over an unchanged directory are identical.
pub struct SequenceScanner {
    template: FrameTemplate,
    ranges: Vec<FrameRange>,
}

impl SequenceScanner {
    /// Create a scanner, validating the template and every range up front
    pub fn new(template: FrameTemplate, ranges: Vec<FrameRange>) -> Result<Self> {
        template.validate()?;
        for range in &ranges {
            range.validate()?;
        }
        Ok(Self { template, ranges })
    }

    /// Total number of candidate indices across all ranges
    ///
    /// This is an upper bound on the scanned sequence length; indices whose
    /// files are missing reduce the actual count.
    pub fn total_candidates(&self) -> usize {
        self.ranges.iter().map(|range| range.len()).sum()
    }

    /// The ordered ranges this scanner walks
    pub fn ranges(&self) -> &[FrameRange] {
        &self.ranges
    }

    /// Walk all ranges over the given directory and collect existing frames
    pub fn scan<P: AsRef<Path>>(&self, dir: P) -> Result<FrameSequence> {
        let dir = dir.as_ref();

        if !dir.is_dir() {
            return Err(SequenceError::DirectoryNotFound {
                path: dir.display().to_string(),
            }
            .into());
        }

        debug!(
            "Scanning {:?} across {} ranges ({} candidates)",
            dir,
            self.ranges.len(),
            self.total_candidates()
        );

        let mut sequence = FrameSequence::new();

        for range in &self.ranges {
            for index in range.indices() {
                let path = self.template.path(dir, index);
                if path.exists() {
                    sequence.push(path);
                } else {
                    warn!("Missing frame file: {}", path.display());
                    sequence.record_missing(path);
                }
            }
        }

        info!(
            "Found {} of {} frames in {:?}",
            sequence.len(),
            self.total_candidates(),
            dir
        );

        Ok(sequence)
    }
}
