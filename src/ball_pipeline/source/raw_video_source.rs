//! Frame source reading packed RGB24 frames from a byte stream.
//!
//! Capture tools such as `gst-launch-1.0` and `ffmpeg` can write decoded video
//! to stdout as raw `rgb24`. Every frame has the same size, so the stream is
//! split into fixed `width * height * 3` byte chunks.

use std::io::{ErrorKind, Read};
use std::process::{Child, ChildStdout, Command, Stdio};

use tracing::{debug, warn};

use crate::ball_pipeline::common::error::{Result, TrackerError};
use crate::ball_pipeline::detection::types::Frame;
use crate::ball_pipeline::source::reader::FrameSource;

pub struct RawVideoSource<R: Read> {
    reader: R,
    child: Option<Child>,
    width: u32,
    height: u32,
    frame_bytes: usize,
}

impl RawVideoSource<ChildStdout> {
    /// Starts `command` and reads frames from its stdout.
    pub fn spawn(mut command: Command, width: u32, height: u32) -> Result<Self> {
        let frame_bytes = frame_len(width, height)?;
        let program = command.get_program().to_string_lossy().into_owned();
        debug!(program = %program, width, height, "Spawning capture process");

        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());

        let mut child = command.spawn().map_err(|e| TrackerError::SourceSpawn {
            program: program.clone(),
            reason: e.to_string(),
        })?;

        let stdout = match child.stdout.take() {
            Some(stdout) => stdout,
            None => {
                let _ = child.kill();
                return Err(TrackerError::SourceSpawn {
                    program,
                    reason: "stdout was not captured".to_string(),
                });
            }
        };

        Ok(Self {
            reader: stdout,
            child: Some(child),
            width,
            height,
            frame_bytes,
        })
    }
}

impl<R: Read> RawVideoSource<R> {
    pub fn from_reader(reader: R, width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            reader,
            child: None,
            width,
            height,
            frame_bytes: frame_len(width, height)?,
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Fills `buf` completely, returning the number of bytes read before EOF.
    fn fill(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(TrackerError::SourceRead(e.to_string())),
            }
        }
        Ok(filled)
    }
}

fn frame_len(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(TrackerError::InvalidConfig(format!(
            "raw video frame size must be positive, got {}x{}",
            width, height
        )));
    }
    Ok(width as usize * height as usize * 3)
}

impl<R: Read> FrameSource for RawVideoSource<R> {
    fn read_frame(&mut self) -> Result<Option<Frame>> {
        let mut buffer = vec![0u8; self.frame_bytes];
        let filled = self.fill(&mut buffer)?;

        if filled == 0 {
            debug!("Raw video stream ended");
            return Ok(None);
        }
        if filled < self.frame_bytes {
            warn!(
                received = filled,
                expected = self.frame_bytes,
                "Discarding truncated final frame"
            );
            return Ok(None);
        }

        let frame = Frame::from_raw(self.width, self.height, buffer).ok_or(TrackerError::FrameSize {
            width: self.width,
            height: self.height,
            expected: self.frame_bytes,
            actual: filled,
        })?;
        Ok(Some(frame))
    }
}

impl<R: Read> Drop for RawVideoSource<R> {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}
