//! Mask clean-up with a 3x3 square structuring element.

use imageproc::distance_transform::Norm;
use imageproc::morphology::{dilate, erode};

use crate::ball_pipeline::config::{MorphologyOrder, TrackerConfig};
use crate::ball_pipeline::detection::types::Mask;

/// Result of the two morphological passes.
pub struct CleanedMask {
    /// Output of the dilate pass.
    pub dilated: Mask,
    /// Output of the erode pass.
    pub eroded: Mask,
}

impl CleanedMask {
    /// The mask produced by whichever pass ran last.
    pub fn final_mask(&self, order: MorphologyOrder) -> &Mask {
        match order {
            MorphologyOrder::DilateThenErode => &self.eroded,
            MorphologyOrder::ErodeThenDilate => &self.dilated,
        }
    }
}

pub fn dilate_n(mask: &Mask, iterations: u32) -> Mask {
    let mut out = mask.clone();
    for _ in 0..iterations {
        out = dilate(&out, Norm::LInf, 1);
    }
    out
}

pub fn erode_n(mask: &Mask, iterations: u32) -> Mask {
    let mut out = mask.clone();
    for _ in 0..iterations {
        out = erode(&out, Norm::LInf, 1);
    }
    out
}

pub fn clean(mask: &Mask, config: &TrackerConfig) -> CleanedMask {
    match config.morphology_order {
        MorphologyOrder::DilateThenErode => {
            let dilated = dilate_n(mask, config.dilate_iterations);
            let eroded = erode_n(&dilated, config.erode_iterations);
            CleanedMask { dilated, eroded }
        }
        MorphologyOrder::ErodeThenDilate => {
            let eroded = erode_n(mask, config.erode_iterations);
            let dilated = dilate_n(&eroded, config.dilate_iterations);
            CleanedMask { dilated, eroded }
        }
    }
}
