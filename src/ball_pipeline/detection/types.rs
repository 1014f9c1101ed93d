//! Frame, color range and detection types

use image::{GrayImage, RgbImage};

use crate::ball_pipeline::common::error::{Result, TrackerError};

/// A captured video frame: 8-bit RGB, row-major.
pub type Frame = RgbImage;

/// Binary mask, 255 for in-range pixels and 0 otherwise.
pub type Mask = GrayImage;

/// Largest hue value in the 8-bit HSV scale (degrees halved).
pub const MAX_HUE: u8 = 179;

/// A pixel in 8-bit HSV: hue in `0..=179`, saturation and value in `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

/// Inclusive HSV bounds selecting the "ball-colored" pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRange {
    lower: Hsv,
    upper: Hsv,
}

impl ColorRange {
    /// Yellow-green felt of a tennis ball under indoor lighting.
    pub const TENNIS_BALL: ColorRange = ColorRange {
        lower: Hsv::new(23, 75, 75),
        upper: Hsv::new(65, 255, 255),
    };

    pub fn new(lower: Hsv, upper: Hsv) -> Result<Self> {
        if lower.h > MAX_HUE || upper.h > MAX_HUE {
            return Err(TrackerError::InvalidConfig(format!(
                "hue bounds must not exceed {}, got {}..={}",
                MAX_HUE, lower.h, upper.h
            )));
        }
        if lower.h > upper.h || lower.s > upper.s || lower.v > upper.v {
            return Err(TrackerError::InvalidConfig(format!(
                "lower bound {:?} exceeds upper bound {:?}",
                lower, upper
            )));
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> Hsv {
        self.lower
    }

    pub fn upper(&self) -> Hsv {
        self.upper
    }

    pub fn contains(&self, pixel: Hsv) -> bool {
        (self.lower.h..=self.upper.h).contains(&pixel.h)
            && (self.lower.s..=self.upper.s).contains(&pixel.s)
            && (self.lower.v..=self.upper.v).contains(&pixel.v)
    }
}

impl Default for ColorRange {
    fn default() -> Self {
        Self::TENNIS_BALL
    }
}

/// The single largest blob found in a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    /// Area centroid (`M10/M00`, `M01/M00`), rounded to the pixel grid.
    pub center: (i32, i32),
    /// Radius of the minimal enclosing circle.
    pub radius: f32,
    /// Center of the minimal enclosing circle.
    pub circle_center: (f32, f32),
    /// Enclosed area of the selected outline, in pixels.
    pub area: f64,
}

/// Intermediate images kept for diagnostics when stage output is enabled.
#[derive(Debug, Clone)]
pub struct StageImages {
    pub blurred: Frame,
    pub mask: Mask,
    pub dilated: Mask,
    pub eroded: Mask,
}

/// Output of one `FrameProcessor::process` call.
#[derive(Debug, Clone)]
pub struct ProcessedFrame {
    /// Resized copy of the input, with the detection drawn on it if there is one.
    pub annotated: Frame,
    pub detection: Option<Detection>,
    pub stages: Option<StageImages>,
}
