//! RGB to HSV conversion and color-range thresholding.

use image::{Luma, Rgb};

use crate::ball_pipeline::detection::types::{ColorRange, Frame, Hsv, Mask};

pub const IN_RANGE: Luma<u8> = Luma([255]);
pub const OUT_OF_RANGE: Luma<u8> = Luma([0]);

/// Converts one RGB pixel to 8-bit HSV.
///
/// Hue is expressed in degrees halved so a full turn fits in `0..180`;
/// saturation and value are scaled to `0..=255`.
pub fn rgb_to_hsv(Rgb([r, g, b]): Rgb<u8>) -> Hsv {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = (max - min) as f32;

    let s = if max == 0 {
        0
    } else {
        (255.0 * delta / max as f32).round() as u8
    };

    if delta == 0.0 {
        return Hsv::new(0, s, max);
    }

    let (r, g, b) = (r as f32, g as f32, b as f32);
    let mut degrees = if max as f32 == r {
        60.0 * (g - b) / delta
    } else if max as f32 == g {
        120.0 + 60.0 * (b - r) / delta
    } else {
        240.0 + 60.0 * (r - g) / delta
    };
    if degrees < 0.0 {
        degrees += 360.0;
    }

    let h = (degrees / 2.0).round() as u32 % 180;
    Hsv::new(h as u8, s, max)
}

/// Marks every pixel whose HSV value lies inside `range` (bounds inclusive).
pub fn threshold(frame: &Frame, range: &ColorRange) -> Mask {
    imageproc::map::map_pixels(frame, |_, _, p| {
        if range.contains(rgb_to_hsv(p)) {
            IN_RANGE
        } else {
            OUT_OF_RANGE
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn primary_colors_land_on_expected_hues() {
        assert_eq!(rgb_to_hsv(Rgb([255, 0, 0])), Hsv::new(0, 255, 255));
        assert_eq!(rgb_to_hsv(Rgb([0, 255, 0])), Hsv::new(60, 255, 255));
        assert_eq!(rgb_to_hsv(Rgb([0, 0, 255])), Hsv::new(120, 255, 255));
        assert_eq!(rgb_to_hsv(Rgb([255, 255, 0])), Hsv::new(30, 255, 255));
    }

    #[test]
    fn grays_have_no_hue_or_saturation() {
        assert_eq!(rgb_to_hsv(Rgb([0, 0, 0])), Hsv::new(0, 0, 0));
        assert_eq!(rgb_to_hsv(Rgb([128, 128, 128])), Hsv::new(0, 0, 128));
    }

    #[test]
    fn hue_near_full_turn_wraps_to_zero() {
        // 359.x degrees rounds up to 180 before wrapping
        let hsv = rgb_to_hsv(Rgb([255, 0, 1]));
        assert_eq!(hsv.h, 0);
    }

    #[test]
    fn threshold_bounds_are_inclusive() {
        let range = ColorRange::new(Hsv::new(60, 255, 200), Hsv::new(60, 255, 255)).unwrap();
        let mut frame = RgbImage::new(3, 1);
        frame.put_pixel(0, 0, Rgb([0, 200, 0]));
        frame.put_pixel(1, 0, Rgb([0, 255, 0]));
        frame.put_pixel(2, 0, Rgb([0, 199, 0]));

        let mask = threshold(&frame, &range);

        assert_eq!(mask.get_pixel(0, 0), &IN_RANGE);
        assert_eq!(mask.get_pixel(1, 0), &IN_RANGE);
        assert_eq!(mask.get_pixel(2, 0), &OUT_OF_RANGE);
    }

    #[test]
    fn color_range_rejects_inverted_bounds() {
        assert!(ColorRange::new(Hsv::new(65, 75, 75), Hsv::new(23, 255, 255)).is_err());
        assert!(ColorRange::new(Hsv::new(0, 0, 0), Hsv::new(180, 255, 255)).is_err());
    }
}
