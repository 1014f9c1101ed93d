//! Live camera sources built on external capture processes.

use std::process::{ChildStdout, Command};

use tracing::info;

use crate::ball_pipeline::common::error::Result;
use crate::ball_pipeline::source::raw_video_source::RawVideoSource;

/// CSI camera on a Jetson Nano, captured through `nvarguscamerasrc`.
#[derive(Debug, Clone)]
pub struct GStreamerCamera {
    pub capture_width: u32,
    pub capture_height: u32,
    /// Size of the frames handed to the processor
    pub display_width: u32,
    pub display_height: u32,
    pub framerate: u32,
    /// `nvvidconv` flip method; 2 rotates the image by 180 degrees
    pub flip_method: u32,
}

impl Default for GStreamerCamera {
    fn default() -> Self {
        Self {
            capture_width: 1280,
            capture_height: 720,
            display_width: 640,
            display_height: 480,
            framerate: 60,
            flip_method: 2,
        }
    }
}

impl GStreamerCamera {
    /// gst-launch pipeline that writes packed RGB frames to stdout.
    pub fn pipeline_description(&self) -> String {
        format!(
            "nvarguscamerasrc ! video/x-raw(memory:NVMM), \
             width=(int){}, height=(int){}, \
             format=(string)NV12, framerate=(fraction){}/1 ! \
             nvvidconv flip-method={} ! \
             video/x-raw, width=(int){}, height=(int){}, format=(string)BGRx ! \
             videoconvert ! video/x-raw, format=(string)RGB ! fdsink fd=1",
            self.capture_width,
            self.capture_height,
            self.framerate,
            self.flip_method,
            self.display_width,
            self.display_height,
        )
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new("gst-launch-1.0");
        // -q keeps gst-launch status messages off stdout
        cmd.arg("-q").args(self.pipeline_description().split_whitespace());
        cmd
    }

    pub fn open(&self) -> Result<RawVideoSource<ChildStdout>> {
        info!(
            capture = %format!("{}x{}@{}", self.capture_width, self.capture_height, self.framerate),
            display = %format!("{}x{}", self.display_width, self.display_height),
            "Opening Jetson CSI camera"
        );
        RawVideoSource::spawn(self.command(), self.display_width, self.display_height)
    }
}

/// V4L2 webcam read through `ffmpeg`.
#[derive(Debug, Clone)]
pub struct WebcamCamera {
    pub device: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WebcamCamera {
    fn default() -> Self {
        Self {
            device: "/dev/video0".to_string(),
            width: 640,
            height: 480,
        }
    }
}

impl WebcamCamera {
    pub fn command(&self) -> Command {
        let mut cmd = Command::new("ffmpeg");
        cmd.arg("-hide_banner")
            .arg("-loglevel")
            .arg("error")
            .arg("-f")
            .arg("video4linux2")
            .arg("-i")
            .arg(&self.device)
            .arg("-vf")
            .arg(format!("scale={}:{}", self.width, self.height))
            .arg("-pix_fmt")
            .arg("rgb24")
            .arg("-f")
            .arg("rawvideo")
            .arg("-");
        cmd
    }

    pub fn open(&self) -> Result<RawVideoSource<ChildStdout>> {
        info!(device = %self.device, width = self.width, height = self.height, "Opening webcam");
        RawVideoSource::spawn(self.command(), self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gstreamer_pipeline_carries_sizes_and_flip() {
        let camera = GStreamerCamera::default();
        let description = camera.pipeline_description();

        assert!(description.starts_with("nvarguscamerasrc ! "));
        assert!(description.contains("width=(int)1280, height=(int)720"));
        assert!(description.contains("framerate=(fraction)60/1"));
        assert!(description.contains("nvvidconv flip-method=2"));
        assert!(description.contains("width=(int)640, height=(int)480, format=(string)BGRx"));
        assert!(description.ends_with("format=(string)RGB ! fdsink fd=1"));
    }

    #[test]
    fn gstreamer_command_is_quiet() {
        let cmd = GStreamerCamera::default().command();
        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(cmd.get_program(), "gst-launch-1.0");
        assert_eq!(args[0], "-q");
        assert_eq!(args[1], "nvarguscamerasrc");
    }

    #[test]
    fn webcam_command_requests_scaled_rgb24() {
        let camera = WebcamCamera {
            device: "/dev/video2".to_string(),
            width: 320,
            height: 240,
        };
        let args: Vec<_> = camera
            .command()
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();

        assert!(args.windows(2).any(|w| w == ["-i", "/dev/video2"]));
        assert!(args.windows(2).any(|w| w == ["-vf", "scale=320:240"]));
        assert!(args.windows(2).any(|w| w == ["-pix_fmt", "rgb24"]));
        assert_eq!(args.last().map(String::as_str), Some("-"));
    }
}
