use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    encode::EncodeParams,
    error::{ConfigError, Result},
    sequence::{FrameRange, FrameTemplate},
};

/// Main configuration for framereel
///
/// The defaults reproduce the original assembly: a ping-pong walk over
/// `Diamond_Video_Frame_NNNN.png` frames, encoded at 20 fps to
/// `diamond.mp4` and `diamond.gif`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Frame enumeration settings
    pub sequence: SequenceConfig,

    /// Encoder settings
    pub encode: EncodeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sequence: SequenceConfig::default(),
            encode: EncodeConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|_| ConfigError::ParseFailed {
            path: path.display().to_string(),
        })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            key: "config".to_string(),
            value: e.to_string(),
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.sequence.validate()?;
        self.encode.validate()?;
        Ok(())
    }
}

/// Frame enumeration configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceConfig {
    /// Filename template for the numbered frames
    pub template: FrameTemplate,

    /// Ordered index ranges to walk
    pub ranges: Vec<FrameRange>,
}

impl SequenceConfig {
    /// The original ping-pong walk: down 43..0, down 119..77, up 77..119,
    /// up 0..43
    ///
    /// Boundary indices 0, 43, 77 and 119 each appear in two adjacent
    /// ranges, holding the turnaround frame for one extra tick.
    pub fn ping_pong_ranges() -> Vec<FrameRange> {
        vec![
            FrameRange::new(43, -1, -1),
            FrameRange::new(119, 76, -1),
            FrameRange::new(77, 120, 1),
            FrameRange::new(0, 44, 1),
        ]
    }

    fn validate(&self) -> Result<()> {
        self.template.validate()?;

        if self.ranges.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "sequence.ranges".to_string(),
                value: "empty".to_string(),
            }
            .into());
        }

        for range in &self.ranges {
            range.validate()?;
        }

        Ok(())
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            template: FrameTemplate::default(),
            ranges: Self::ping_pong_ranges(),
        }
    }
}

/// Encoder configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeConfig {
    /// Shared encoder parameters (fps, codec, quality)
    pub params: EncodeParams,

    /// Output path for the video artifact
    pub video_output: PathBuf,

    /// Output path for the looped-GIF artifact
    pub gif_output: PathBuf,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            params: EncodeParams::default(),
            video_output: PathBuf::from("diamond.mp4"),
            gif_output: PathBuf::from("diamond.gif"),
        }
    }
}

impl EncodeConfig {
    fn validate(&self) -> Result<()> {
        self.params.validate()?;

        if self.video_output.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "encode.video_output".to_string(),
                value: "empty".to_string(),
            }
            .into());
        }

        if self.gif_output.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "encode.gif_output".to_string(),
                value: "empty".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_ranges_cover_174_candidates() {
        let config = Config::default();
        let total: usize = config.sequence.ranges.iter().map(|r| r.len()).sum();
        assert_eq!(total, 174);
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test_config.toml");

        let original_config = Config::default();

        original_config.save_to_file(&file_path).unwrap();
        let loaded_config = Config::from_file(&file_path).unwrap();

        assert_eq!(
            original_config.encode.params.fps,
            loaded_config.encode.params.fps
        );
        assert_eq!(
            original_config.sequence.template.prefix,
            loaded_config.sequence.template.prefix
        );
        assert_eq!(original_config.sequence.ranges, loaded_config.sequence.ranges);
    }

    #[test]
    fn test_invalid_fps() {
        let mut config = Config::default();
        config.encode.params.fps = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_step_range_is_rejected() {
        let mut config = Config::default();
        config.sequence.ranges.push(FrameRange::new(0, 10, 0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_ranges_are_rejected() {
        let mut config = Config::default();
        config.sequence.ranges.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_config_file() {
        assert!(Config::from_file("/no/such/config.toml").is_err());
    }
}
