//! Frame sources
//!
//! Live cameras (Jetson CSI through GStreamer, V4L2 webcams through ffmpeg)
//! and offline image sequences, all behind the `FrameSource` trait.

mod camera;
mod image_sequence_source;
mod raw_video_source;
mod reader;

pub use camera::{GStreamerCamera, WebcamCamera};
pub use image_sequence_source::ImageSequenceSource;
pub use raw_video_source::RawVideoSource;
pub use reader::FrameSource;
