use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Failed to start frame source `{program}`: {reason}")]
    SourceSpawn { program: String, reason: String },

    #[error("Failed to read frame: {0}")]
    SourceRead(String),

    #[error("Frame buffer has {actual} bytes, expected {expected} for {width}x{height} RGB")]
    FrameSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("Failed to decode frame {path}: {reason}")]
    DecodeError { path: String, reason: String },

    #[error("Failed to write view `{name}`: {reason}")]
    SinkWrite { name: String, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
