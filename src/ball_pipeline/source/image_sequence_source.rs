//! Replays a directory of still images as a video stream.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::ball_pipeline::common::error::{Result, TrackerError};
use crate::ball_pipeline::detection::types::Frame;
use crate::ball_pipeline::source::reader::FrameSource;

const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

/// Yields every supported image in a directory, in file-name order.
pub struct ImageSequenceSource {
    pending: VecDeque<PathBuf>,
}

impl ImageSequenceSource {
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let read_error = |e: std::io::Error| TrackerError::SourceRead(format!("{}: {}", dir.display(), e));

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(read_error)? {
            let path = entry.map_err(read_error)?.path();
            if path.is_file() && is_supported(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        info!(dir = %dir.display(), frames = paths.len(), "Opened image sequence");
        Ok(Self {
            pending: paths.into(),
        })
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

impl FrameSource for ImageSequenceSource {
    fn read_frame(&mut self) -> Result<Option<Frame>> {
        let Some(path) = self.pending.pop_front() else {
            return Ok(None);
        };
        debug!(path = %path.display(), "Loading frame");
        let image = image::open(&path).map_err(|e| TrackerError::DecodeError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Some(image.to_rgb8()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn frames_come_back_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        RgbImage::from_pixel(4, 4, Rgb([2, 2, 2]))
            .save(dir.path().join("frame_002.png"))
            .unwrap();
        RgbImage::from_pixel(4, 4, Rgb([1, 1, 1]))
            .save(dir.path().join("frame_001.png"))
            .unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"not a frame").unwrap();

        let mut source = ImageSequenceSource::open(dir.path()).unwrap();
        assert_eq!(source.remaining(), 2);

        let first = source.read_frame().unwrap().unwrap();
        let second = source.read_frame().unwrap().unwrap();
        assert_eq!(first.get_pixel(0, 0), &Rgb([1, 1, 1]));
        assert_eq!(second.get_pixel(0, 0), &Rgb([2, 2, 2]));
        assert!(source.read_frame().unwrap().is_none());
    }

    #[test]
    fn corrupt_image_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.png"), b"definitely not png").unwrap();

        let mut source = ImageSequenceSource::open(dir.path()).unwrap();
        let result = source.read_frame();

        assert!(matches!(result, Err(TrackerError::DecodeError { .. })));
    }

    #[test]
    fn subdirectories_are_not_frames() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested.png")).unwrap();
        RgbImage::new(2, 2).save(dir.path().join("only.png")).unwrap();

        let source = ImageSequenceSource::open(dir.path()).unwrap();

        assert_eq!(source.remaining(), 1);
    }

    #[test]
    fn missing_directory_is_a_read_error() {
        let result = ImageSequenceSource::open("/nonexistent/frames/dir");
        assert!(matches!(result, Err(TrackerError::SourceRead(_))));
    }
}
