use std::process::ChildStdout;

use anyhow::Context;
use tennis_tracker_rs::ball_pipeline::{
    ColorRange, FrameSource, ImageFileSink, ImageSequenceSource, NeverQuit, QuitSignal,
    RawVideoSource, RunSummary, StdinQuit, TrackerConfig, TrackingLoop,
};
use tennis_tracker_rs::logger;

use tracing::{error, info};

/// Directory of still images to replay instead of opening the camera.
const INPUT_DIR_VAR: &str = "TRACKER_INPUT_DIR";
const OUTPUT_DIR_VAR: &str = "TRACKER_OUTPUT_DIR";
const SHOW_STAGES_VAR: &str = "TRACKER_SHOW_STAGES";
const DEFAULT_OUTPUT_DIR: &str = "tracker_output";

fn main() -> anyhow::Result<()> {
    logger::init("info");

    info!("Starting tennis ball tracker...");

    let show_stages = std::env::var(SHOW_STAGES_VAR)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    let config = TrackerConfig::builder().show_stages(show_stages).build();
    let color_range = ColorRange::TENNIS_BALL;

    let output_dir = std::env::var(OUTPUT_DIR_VAR).unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.to_string());
    let sink = ImageFileSink::new(&output_dir)
        .with_context(|| format!("creating output directory {}", output_dir))?;

    info!("Target width: {}px", config.target_width);
    info!("Minimum radius: {}px", config.min_radius);
    info!(
        "Stage output: {}",
        if config.show_stages { "enabled" } else { "disabled" }
    );

    let result = match std::env::var_os(INPUT_DIR_VAR) {
        Some(dir) => {
            let source = ImageSequenceSource::open(&dir)
                .with_context(|| format!("opening image sequence {}", dir.to_string_lossy()))?;
            track(source, sink, NeverQuit, config, color_range)
        }
        None => {
            let source = open_camera().context("opening camera")?;
            info!("Type 'q' and press Enter to quit");
            track(source, sink, StdinQuit::spawn(), config, color_range)
        }
    };

    match result {
        Ok(summary) => {
            info!(
                "Processed {} frames, ball found in {}",
                summary.frames, summary.detections
            );
            Ok(())
        }
        Err(e) => {
            error!("Tracking failed: {}", e);
            Err(e)
        }
    }
}

fn track<S: FrameSource, Q: QuitSignal>(
    source: S,
    sink: ImageFileSink,
    quit: Q,
    config: TrackerConfig,
    color_range: ColorRange,
) -> anyhow::Result<RunSummary> {
    let mut tracker = TrackingLoop::with_custom(source, sink, quit, config, color_range)?;
    Ok(tracker.run()?)
}

#[cfg(jetson)]
fn open_camera() -> tennis_tracker_rs::ball_pipeline::Result<RawVideoSource<ChildStdout>> {
    tennis_tracker_rs::ball_pipeline::GStreamerCamera::default().open()
}

#[cfg(not(jetson))]
fn open_camera() -> tennis_tracker_rs::ball_pipeline::Result<RawVideoSource<ChildStdout>> {
    tennis_tracker_rs::ball_pipeline::WebcamCamera::default().open()
}
