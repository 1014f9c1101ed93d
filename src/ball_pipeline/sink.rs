//! Frame sinks

mod image_file_sink;
mod writer;

pub use image_file_sink::ImageFileSink;
pub use writer::{FrameSink, FrameView};
