//! Tennis ball detection pipeline module
//!
//! This module splits the tracker into the per-frame detector and the thin
//! collaborators around it: frame sources, display sinks, quit signals and
//! the driver loop that ties them together.

pub mod common;
pub mod config;
pub mod detection;
pub mod driver;
pub mod quit;
pub mod sink;
pub mod source;

pub use common::{
    Result,
    TrackerError,
};

pub use config::{
    MorphologyOrder,
    TrackerConfig,
    TrackerConfigBuilder,
};

pub use detection::{
    ColorRange,
    Detection,
    Frame,
    FrameProcessor,
    Hsv,
    ProcessedFrame,
};

pub use driver::{
    RunSummary,
    StopReason,
    TrackingLoop,
};

pub use quit::{
    NeverQuit,
    QuitSignal,
    StdinQuit,
};

pub use sink::{
    FrameSink,
    FrameView,
    ImageFileSink,
};

pub use source::{
    FrameSource,
    GStreamerCamera,
    ImageSequenceSource,
    RawVideoSource,
    WebcamCamera,
};
