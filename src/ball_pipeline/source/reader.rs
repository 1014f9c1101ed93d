use crate::ball_pipeline::common::error::Result;
use crate::ball_pipeline::detection::types::Frame;

/// Supplies frames one at a time. `Ok(None)` marks the end of the stream.
pub trait FrameSource {
    fn read_frame(&mut self) -> Result<Option<Frame>>;
}
