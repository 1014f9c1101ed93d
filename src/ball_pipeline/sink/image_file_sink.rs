use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::{debug, info};

use crate::ball_pipeline::common::error::{Result, TrackerError};
use crate::ball_pipeline::sink::writer::{FrameSink, FrameView};

/// Writes each named view to `<dir>/<name>.png`, overwriting the previous frame.
///
/// Files are written under a temporary name and renamed into place, so a
/// viewer polling the directory never sees a half-written image.
pub struct ImageFileSink {
    dir: PathBuf,
}

impl ImageFileSink {
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        info!(dir = %dir.display(), "Writing frames to directory");
        Ok(Self { dir })
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.png", name.to_ascii_lowercase()))
    }
}

impl FrameSink for ImageFileSink {
    fn show(&mut self, name: &str, view: FrameView<'_>) -> Result<()> {
        let path = self.path_for(name);
        let staging = path.with_extension("png.tmp");
        debug!(path = %path.display(), "Writing view");

        let saved = match view {
            FrameView::Color(frame) => frame.save_with_format(&staging, ImageFormat::Png),
            FrameView::Mask(mask) => mask.save_with_format(&staging, ImageFormat::Png),
        };
        saved.map_err(|e| TrackerError::SinkWrite {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        std::fs::rename(&staging, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    #[test]
    fn views_overwrite_their_own_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = ImageFileSink::new(dir.path().join("out")).unwrap();

        let first = RgbImage::from_pixel(3, 3, Rgb([10, 20, 30]));
        let second = RgbImage::from_pixel(3, 3, Rgb([40, 50, 60]));
        sink.show("Ball", FrameView::Color(&first)).unwrap();
        sink.show("Ball", FrameView::Color(&second)).unwrap();

        let written = image::open(sink.path_for("Ball")).unwrap().to_rgb8();
        assert_eq!(written.get_pixel(1, 1), &Rgb([40, 50, 60]));
        assert!(!sink.path_for("Ball").with_extension("png.tmp").exists());
    }

    #[test]
    fn masks_are_written_as_grayscale() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = ImageFileSink::new(dir.path()).unwrap();
        let mask = GrayImage::from_pixel(2, 2, Luma([255]));

        sink.show("Mask", FrameView::Mask(&mask)).unwrap();

        let written = image::open(dir.path().join("mask.png")).unwrap().to_luma8();
        assert_eq!(written.get_pixel(0, 0), &Luma([255]));
    }
}
