use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut};

use crate::ball_pipeline::config::TrackerConfig;
use crate::ball_pipeline::detection::types::{Detection, Frame};

/// Draws the enclosing circle outline and a filled centroid marker.
pub fn draw_detection(canvas: &mut Frame, detection: &Detection, config: &TrackerConfig) {
    let center = (
        detection.circle_center.0 as i32,
        detection.circle_center.1 as i32,
    );
    let radius = detection.radius as i32;
    let thickness = config.outline_thickness as i32;

    for offset in 0..thickness {
        let r = radius + offset - thickness / 2;
        if r > 0 {
            draw_hollow_circle_mut(canvas, center, r, config.outline_color);
        }
    }

    draw_filled_circle_mut(canvas, detection.center, config.marker_radius, config.marker_color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn outline_and_marker_land_where_expected() {
        let config = TrackerConfig::default();
        let mut canvas = RgbImage::new(100, 100);
        let detection = Detection {
            center: (50, 50),
            radius: 20.0,
            circle_center: (50.0, 50.0),
            area: 1256.0,
        };

        draw_detection(&mut canvas, &detection, &config);

        assert_eq!(canvas.get_pixel(50, 50), &config.marker_color);
        assert_eq!(canvas.get_pixel(70, 50), &config.outline_color);
        assert_eq!(canvas.get_pixel(60, 50), &Rgb([0, 0, 0]));
    }
}
