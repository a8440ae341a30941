use thiserror::Error;

/// Main error type for the framereel library
#[derive(Error, Debug)]
pub enum ReelError {
    #[error("Sequence error: {0}")]
    Sequence(#[from] SequenceError),

    #[error("Encoding error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

/// Frame-sequence enumeration errors
///
/// Missing frame files are not errors (they are skipped with a warning);
/// these variants cover problems with the scan itself.
#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("Frames directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Invalid frame range: {details}")]
    InvalidRange { details: String },

    #[error("Invalid filename template: {details}")]
    InvalidTemplate { details: String },
}

/// Encoder errors (both the ffmpeg-backed video encoder and the GIF encoder)
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Video encoding failed: {reason}")]
    VideoFailed { reason: String },

    #[error("GIF encoding failed: {reason}")]
    GifFailed { reason: String },

    #[error("Failed to load frame image: {path}")]
    FrameLoadFailed { path: String },

    #[error("Frame dimension mismatch: expected {expected_width}x{expected_height}, got {width}x{height} in {path}")]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        width: u32,
        height: u32,
        path: String,
    },

    #[error("FFmpeg not found on PATH. Please install FFmpeg.")]
    FfmpegMissing,

    #[error("Invalid encoder parameters: {details}")]
    InvalidParameters { details: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using ReelError
pub type Result<T> = std::result::Result<T, ReelError>;

impl ReelError {
    /// Create a generic error with a custom message
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into())
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Sequence(SequenceError::DirectoryNotFound { path }) => {
                format!("Frames directory '{}' not found. Please check the path.", path)
            }
            Self::Encode(EncodeError::FfmpegMissing) => {
                "FFmpeg was not found on your PATH. Install it from https://ffmpeg.org and retry.".to_string()
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            _ => self.to_string(),
        }
    }
}
