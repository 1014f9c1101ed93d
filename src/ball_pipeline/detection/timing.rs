use std::time::{Duration, Instant};

use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTiming {
    pub name: String,
    pub duration: Duration,
}

/// Durations per pipeline stage, in the order each stage first ran.
/// Recording a stage again adds to its existing entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineTimings {
    steps: Vec<StepTiming>,
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn add_step(&mut self, name: impl Into<String>, duration: Duration) {
        let name = name.into();
        match self.steps.iter_mut().find(|s| s.name == name) {
            Some(step) => step.duration += duration,
            None => self.steps.push(StepTiming { name, duration }),
        }
    }

    pub fn record(&mut self, timer: Timer) {
        let (name, duration) = timer.stop();
        self.add_step(name, duration);
    }

    /// Folds another frame's timings into these totals.
    pub fn merge(&mut self, other: &PipelineTimings) {
        for step in &other.steps {
            self.add_step(step.name.as_str(), step.duration);
        }
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }

    pub fn get_step(&self, name: &str) -> Option<Duration> {
        self.steps.iter().find(|s| s.name == name).map(|s| s.duration)
    }

    pub fn steps(&self) -> &[StepTiming] {
        &self.steps
    }

    /// Logs each stage's share of the total at debug level. `frames` turns the
    /// totals into per-frame averages; pass 1 for a single frame.
    pub fn log_summary(&self, frames: u64) {
        let frames = frames.max(1) as f64;
        let total = self.total_duration().as_secs_f64();
        for step in &self.steps {
            let secs = step.duration.as_secs_f64();
            let percentage = if total > 0.0 { secs / total * 100.0 } else { 0.0 };
            debug!(
                stage = %step.name,
                avg_ms = secs * 1000.0 / frames,
                share_pct = percentage,
                "Stage timing"
            );
        }
        debug!(avg_ms = total * 1000.0 / frames, "Frame processing time");
    }
}

pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            name: name.into(),
        }
    }

    pub fn stop(self) -> (String, Duration) {
        (self.name, self.start.elapsed())
    }
}
