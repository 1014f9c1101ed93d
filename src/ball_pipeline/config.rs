//! Tracker configuration types

use image::Rgb;

use crate::ball_pipeline::common::error::{Result, TrackerError};

/// Order of the two morphological passes applied to the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphologyOrder {
    /// Close small gaps first, then shave the grown edge back (default)
    DilateThenErode,
    /// Remove speckles first, then restore the surviving blobs
    ErodeThenDilate,
}

/// Configuration for the frame processor and the driver loop
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Width every frame is resized to before processing; height follows the aspect ratio
    pub target_width: u32,
    /// Side of the square Gaussian kernel in pixels, odd; sigma follows from it. 1 disables blurring
    pub blur_kernel_size: u32,
    pub morphology_order: MorphologyOrder,
    pub dilate_iterations: u32,
    pub erode_iterations: u32,
    /// Blobs whose enclosing radius is not strictly greater than this are dropped
    pub min_radius: f32,
    pub outline_color: Rgb<u8>,
    pub outline_thickness: u32,
    pub marker_color: Rgb<u8>,
    pub marker_radius: i32,
    /// Keep the blurred frame and intermediate masks and send them to the sink
    pub show_stages: bool,
    pub quit_key: u8,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            target_width: 600,
            blur_kernel_size: 9,
            morphology_order: MorphologyOrder::DilateThenErode,
            dilate_iterations: 2,
            erode_iterations: 1,
            min_radius: 10.0,
            outline_color: Rgb([255, 255, 0]),
            outline_thickness: 2,
            marker_color: Rgb([255, 0, 0]),
            marker_radius: 5,
            show_stages: false,
            quit_key: b'q',
        }
    }
}

impl TrackerConfig {
    pub fn builder() -> TrackerConfigBuilder {
        TrackerConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.target_width == 0 {
            return Err(TrackerError::InvalidConfig(
                "target width must be positive".to_string(),
            ));
        }
        if self.blur_kernel_size % 2 == 0 {
            return Err(TrackerError::InvalidConfig(format!(
                "blur kernel size must be odd, got {}",
                self.blur_kernel_size
            )));
        }
        if self.min_radius.is_nan() || self.min_radius < 0.0 {
            return Err(TrackerError::InvalidConfig(format!(
                "minimum radius must be a non-negative number, got {}",
                self.min_radius
            )));
        }
        Ok(())
    }

    /// Standard deviation matching the kernel size, as OpenCV derives it for `sigma = 0`.
    pub fn blur_sigma(&self) -> Option<f32> {
        if self.blur_kernel_size <= 1 {
            return None;
        }
        let k = self.blur_kernel_size as f32;
        Some(0.3 * ((k - 1.0) * 0.5 - 1.0) + 0.8)
    }
}

/// Builder for TrackerConfig
#[derive(Default)]
pub struct TrackerConfigBuilder {
    target_width: Option<u32>,
    blur_kernel_size: Option<u32>,
    morphology_order: Option<MorphologyOrder>,
    dilate_iterations: Option<u32>,
    erode_iterations: Option<u32>,
    min_radius: Option<f32>,
    outline_color: Option<Rgb<u8>>,
    outline_thickness: Option<u32>,
    marker_color: Option<Rgb<u8>>,
    marker_radius: Option<i32>,
    show_stages: Option<bool>,
    quit_key: Option<u8>,
}

impl TrackerConfigBuilder {
    pub fn target_width(mut self, width: u32) -> Self {
        self.target_width = Some(width);
        self
    }

    pub fn blur_kernel_size(mut self, size: u32) -> Self {
        self.blur_kernel_size = Some(size);
        self
    }

    pub fn morphology_order(mut self, order: MorphologyOrder) -> Self {
        self.morphology_order = Some(order);
        self
    }

    pub fn dilate_iterations(mut self, iterations: u32) -> Self {
        self.dilate_iterations = Some(iterations);
        self
    }

    pub fn erode_iterations(mut self, iterations: u32) -> Self {
        self.erode_iterations = Some(iterations);
        self
    }

    pub fn min_radius(mut self, radius: f32) -> Self {
        self.min_radius = Some(radius);
        self
    }

    pub fn outline_color(mut self, color: Rgb<u8>) -> Self {
        self.outline_color = Some(color);
        self
    }

    pub fn outline_thickness(mut self, thickness: u32) -> Self {
        self.outline_thickness = Some(thickness);
        self
    }

    pub fn marker_color(mut self, color: Rgb<u8>) -> Self {
        self.marker_color = Some(color);
        self
    }

    pub fn marker_radius(mut self, radius: i32) -> Self {
        self.marker_radius = Some(radius);
        self
    }

    pub fn show_stages(mut self, enable: bool) -> Self {
        self.show_stages = Some(enable);
        self
    }

    pub fn quit_key(mut self, key: u8) -> Self {
        self.quit_key = Some(key);
        self
    }

    pub fn build(self) -> TrackerConfig {
        let default = TrackerConfig::default();
        TrackerConfig {
            target_width: self.target_width.unwrap_or(default.target_width),
            blur_kernel_size: self.blur_kernel_size.unwrap_or(default.blur_kernel_size),
            morphology_order: self.morphology_order.unwrap_or(default.morphology_order),
            dilate_iterations: self.dilate_iterations.unwrap_or(default.dilate_iterations),
            erode_iterations: self.erode_iterations.unwrap_or(default.erode_iterations),
            min_radius: self.min_radius.unwrap_or(default.min_radius),
            outline_color: self.outline_color.unwrap_or(default.outline_color),
            outline_thickness: self.outline_thickness.unwrap_or(default.outline_thickness),
            marker_color: self.marker_color.unwrap_or(default.marker_color),
            marker_radius: self.marker_radius.unwrap_or(default.marker_radius),
            show_stages: self.show_stages.unwrap_or(default.show_stages),
            quit_key: self.quit_key.unwrap_or(default.quit_key),
        }
    }
}
