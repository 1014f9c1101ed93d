use tracing::{debug, info, instrument};

use crate::ball_pipeline::{
    common::error::Result,
    config::TrackerConfig,
    detection::{ColorRange, FrameProcessor, PipelineTimings, ProcessedFrame},
    quit::QuitSignal,
    sink::{FrameSink, FrameView},
    source::FrameSource,
};

pub const BALL_VIEW: &str = "Ball";
pub const MASK_VIEW: &str = "Mask";
pub const DILATED_VIEW: &str = "Dilated";
pub const ERODED_VIEW: &str = "Eroded";
pub const BLURRED_VIEW: &str = "Blurred";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The source returned no frame.
    EndOfStream,
    /// The quit key was pressed.
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub detections: u64,
    pub stop_reason: StopReason,
    /// Per-stage processing time summed over every frame
    pub timings: PipelineTimings,
}

/// Pulls frames from a source, runs them through the processor and shows the
/// result, until the source ends or the quit key is pressed.
pub struct TrackingLoop<S: FrameSource, D: FrameSink, Q: QuitSignal> {
    source: S,
    sink: D,
    quit: Q,
    processor: FrameProcessor,
    color_range: ColorRange,
}

impl<S: FrameSource, D: FrameSink, Q: QuitSignal> TrackingLoop<S, D, Q> {
    pub fn with_custom(
        source: S,
        sink: D,
        quit: Q,
        config: TrackerConfig,
        color_range: ColorRange,
    ) -> Result<Self> {
        Ok(Self {
            source,
            sink,
            quit,
            processor: FrameProcessor::new(config)?,
            color_range,
        })
    }

    pub fn config(&self) -> &TrackerConfig {
        self.processor.config()
    }

    pub fn color_range(&self) -> &ColorRange {
        &self.color_range
    }

    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<RunSummary> {
        info!(
            lower = ?self.color_range.lower(),
            upper = ?self.color_range.upper(),
            "Starting tracking loop"
        );

        let mut frames = 0;
        let mut detections = 0;
        let mut timings = PipelineTimings::new();

        let stop_reason = loop {
            let Some(frame) = self.source.read_frame()? else {
                info!("Frame source ended");
                break StopReason::EndOfStream;
            };

            let (processed, frame_timings) =
                self.processor.process_with_timings(&frame, &self.color_range);
            timings.merge(&frame_timings);
            frames += 1;
            match &processed.detection {
                Some(detection) => {
                    detections += 1;
                    debug!(
                        frame = frames,
                        x = detection.center.0,
                        y = detection.center.1,
                        radius = detection.radius,
                        elapsed_ms = frame_timings.total_duration().as_secs_f64() * 1000.0,
                        "Ball found"
                    );
                }
                None => debug!(
                    frame = frames,
                    elapsed_ms = frame_timings.total_duration().as_secs_f64() * 1000.0,
                    "No ball"
                ),
            }

            self.show(&processed)?;

            if self.quit.poll_key() == Some(self.config().quit_key) {
                info!("Quit key pressed");
                break StopReason::Quit;
            }
        };

        timings.log_summary(frames);
        let summary = RunSummary {
            frames,
            detections,
            stop_reason,
            timings,
        };
        info!(
            frames = summary.frames,
            detections = summary.detections,
            reason = ?summary.stop_reason,
            "Tracking loop finished"
        );
        Ok(summary)
    }

    fn show(&mut self, processed: &ProcessedFrame) -> Result<()> {
        self.sink.show(BALL_VIEW, FrameView::Color(&processed.annotated))?;
        if let Some(stages) = &processed.stages {
            self.sink.show(MASK_VIEW, FrameView::Mask(&stages.mask))?;
            self.sink.show(ERODED_VIEW, FrameView::Mask(&stages.eroded))?;
            self.sink.show(DILATED_VIEW, FrameView::Mask(&stages.dilated))?;
            self.sink.show(BLURRED_VIEW, FrameView::Color(&stages.blurred))?;
        }
        Ok(())
    }
}
