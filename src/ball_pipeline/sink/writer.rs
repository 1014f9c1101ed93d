use crate::ball_pipeline::common::error::Result;
use crate::ball_pipeline::detection::types::{Frame, Mask};

/// An image handed to a sink: either a color frame or a binary mask.
#[derive(Debug, Clone, Copy)]
pub enum FrameView<'a> {
    Color(&'a Frame),
    Mask(&'a Mask),
}

pub trait FrameSink {
    /// Shows `view` under `name`, replacing whatever was shown under that name before.
    fn show(&mut self, name: &str, view: FrameView<'_>) -> Result<()>;
}
