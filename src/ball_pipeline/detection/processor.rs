use image::imageops::{self, FilterType};
use tracing::{debug, instrument, trace};

use crate::ball_pipeline::{
    common::error::Result,
    config::TrackerConfig,
    detection::{
        annotate::draw_detection,
        blur::gaussian_blur,
        color::threshold,
        contours::{Contour, external_contours},
        geometry::{Moments, min_enclosing_circle},
        morphology::clean,
        timing::{PipelineTimings, Timer},
        types::{ColorRange, Detection, Frame, ProcessedFrame, StageImages},
    },
};

/// Finds the largest blob of a given color in a frame and marks it.
///
/// Each call depends only on its input frame, the color range and the
/// configuration; nothing is carried over between frames.
pub struct FrameProcessor {
    config: TrackerConfig,
}

impl FrameProcessor {
    pub fn new(config: TrackerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn process(&self, frame: &Frame, color_range: &ColorRange) -> ProcessedFrame {
        self.process_with_timings(frame, color_range).0
    }

    #[instrument(skip_all, fields(width = frame.width(), height = frame.height()))]
    pub fn process_with_timings(
        &self,
        frame: &Frame,
        color_range: &ColorRange,
    ) -> (ProcessedFrame, PipelineTimings) {
        let mut timings = PipelineTimings::new();

        if frame.width() == 0 || frame.height() == 0 {
            debug!("Empty frame, nothing to process");
            let processed = ProcessedFrame {
                annotated: frame.clone(),
                detection: None,
                stages: None,
            };
            return (processed, timings);
        }

        let mut annotated = {
            let _span = tracing::debug_span!("resize").entered();
            let timer = Timer::start("resize");
            let resized = resize_to_width(frame, self.config.target_width);
            timings.record(timer);
            resized
        };

        let blurred = {
            let _span = tracing::debug_span!("blur", kernel = self.config.blur_kernel_size).entered();
            let timer = Timer::start("blur");
            let blurred = match self.config.blur_sigma() {
                Some(sigma) => gaussian_blur(&annotated, self.config.blur_kernel_size, sigma),
                None => annotated.clone(),
            };
            timings.record(timer);
            blurred
        };

        let mask = {
            let _span = tracing::debug_span!("threshold").entered();
            let timer = Timer::start("threshold");
            let mask = threshold(&blurred, color_range);
            timings.record(timer);
            mask
        };

        let cleaned = {
            let _span = tracing::debug_span!("morphology", order = ?self.config.morphology_order).entered();
            let timer = Timer::start("morphology");
            let cleaned = clean(&mask, &self.config);
            timings.record(timer);
            cleaned
        };

        let contours = {
            let _span = tracing::debug_span!("contours").entered();
            let timer = Timer::start("contours");
            let contours = external_contours(cleaned.final_mask(self.config.morphology_order));
            timings.record(timer);
            contours
        };
        trace!(count = contours.len(), "External contours found");

        let detection = {
            let _span = tracing::debug_span!("select").entered();
            let timer = Timer::start("select");
            let detection = select_largest(&contours, self.config.min_radius);
            timings.record(timer);
            detection
        };

        if let Some(detection) = &detection {
            let _span = tracing::debug_span!("annotate").entered();
            let timer = Timer::start("annotate");
            draw_detection(&mut annotated, detection, &self.config);
            timings.record(timer);
        }

        let stages = self.config.show_stages.then(|| StageImages {
            blurred,
            mask,
            dilated: cleaned.dilated,
            eroded: cleaned.eroded,
        });

        let processed = ProcessedFrame {
            annotated,
            detection,
            stages,
        };
        (processed, timings)
    }
}

/// Scales `frame` to `width` keeping its aspect ratio. Frames already at that
/// width are copied unchanged.
pub fn resize_to_width(frame: &Frame, width: u32) -> Frame {
    if frame.width() == width {
        return frame.clone();
    }
    let height = (frame.height() as f64 * width as f64 / frame.width() as f64).round() as u32;
    imageops::resize(frame, width, height.max(1), FilterType::Triangle)
}

/// Picks the outline with the largest enclosed area and turns it into a
/// detection if it is big enough.
///
/// Among outlines of exactly equal area the one found last wins; callers
/// should not rely on that order. An outline with zero area, or whose
/// enclosing radius is not strictly greater than `min_radius`, produces no
/// detection.
pub fn select_largest(contours: &[Contour], min_radius: f32) -> Option<Detection> {
    let (contour, moments) = contours
        .iter()
        .map(|c| (c, Moments::of_polygon(c)))
        .max_by(|a, b| a.1.area().total_cmp(&b.1.area()))?;

    let Some((cx, cy)) = moments.centroid() else {
        debug!(points = contour.len(), "Largest outline encloses no area");
        return None;
    };

    let circle = min_enclosing_circle(contour)?;
    let radius = circle.radius as f32;
    if radius <= min_radius {
        trace!(radius, min_radius, "Largest blob below minimum radius");
        return None;
    }

    Some(Detection {
        center: (cx.round() as i32, cy.round() as i32),
        radius,
        circle_center: (circle.x as f32, circle.y as f32),
        area: moments.area(),
    })
}
