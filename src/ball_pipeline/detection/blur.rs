//! Gaussian smoothing with a fixed-size kernel.

use imageproc::filter::separable_filter_equal;

use crate::ball_pipeline::detection::types::Frame;

/// Normalised 1-D Gaussian weights with exactly `size` taps.
pub fn gaussian_kernel(size: u32, sigma: f32) -> Vec<f32> {
    let half = (size / 2) as f32;
    let weights: Vec<f32> = (0..size)
        .map(|i| {
            let x = i as f32 - half;
            (-(x * x) / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let sum: f32 = weights.iter().sum();
    weights.into_iter().map(|w| w / sum).collect()
}

/// Blurs `frame` with a `size` x `size` Gaussian, applied as two passes of the
/// same 1-D kernel. Edge pixels are extended past the border.
pub fn gaussian_blur(frame: &Frame, size: u32, sigma: f32) -> Frame {
    separable_filter_equal(frame, &gaussian_kernel(size, sigma))
}
