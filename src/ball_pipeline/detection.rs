//! Single-frame ball detection
//!
//! Resize, Gaussian blur, HSV threshold, morphological clean-up, external contours,
//! largest-blob selection and annotation, each in its own module.

pub mod annotate;
pub mod blur;
pub mod color;
pub mod contours;
pub mod geometry;
pub mod morphology;
mod processor;
mod timing;
pub mod types;


pub use processor::{FrameProcessor, resize_to_width, select_largest};
pub use timing::{PipelineTimings, StepTiming, Timer};
pub use types::{ColorRange, Detection, Frame, Hsv, Mask, ProcessedFrame, StageImages};
