//! External contour extraction with collinear-point compression.

use image::imageops;
use imageproc::contours::{BorderType, find_contours};
use imageproc::point::Point;

use crate::ball_pipeline::detection::types::Mask;

/// Ordered boundary points of one connected in-range region.
pub type Contour = Vec<Point<i32>>;

/// Finds the outer boundaries of all connected regions in `mask`.
///
/// Hole borders and anything nested inside a hole are skipped; only
/// top-level outlines are returned. Regions touching the image edge count
/// as top-level too. Runs of points along a straight horizontal, vertical or
/// diagonal step are reduced to their end points.
pub fn external_contours(mask: &Mask) -> Vec<Contour> {
    // find_contours reports a region touching the edge as a hole, so trace a
    // copy with a one pixel background frame and shift the points back
    let mut padded = Mask::new(mask.width() + 2, mask.height() + 2);
    imageops::replace(&mut padded, mask, 1, 1);

    find_contours::<i32>(&padded)
        .into_iter()
        .filter(|c| matches!(c.border_type, BorderType::Outer) && c.parent.is_none())
        .map(|c| {
            let points: Contour = c.points.iter().map(|p| Point::new(p.x - 1, p.y - 1)).collect();
            compress_collinear(&points)
        })
        .collect()
}

/// Drops every point that continues the direction of the previous step.
pub fn compress_collinear(points: &[Point<i32>]) -> Contour {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let step = |from: Point<i32>, to: Point<i32>| ((to.x - from.x).signum(), (to.y - from.y).signum());

    let compressed: Contour = (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let curr = points[i];
            let next = points[(i + 1) % n];
            step(prev, curr) != step(curr, next)
        })
        .map(|i| points[i])
        .collect();

    // every step identical: repeated points
    if compressed.is_empty() {
        points[..1].to_vec()
    } else {
        compressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn fill_rect(mask: &mut GrayImage, x0: u32, y0: u32, x1: u32, y1: u32) {
        for y in y0..y1 {
            for x in x0..x1 {
                mask.put_pixel(x, y, Luma([255]));
            }
        }
    }

    #[test]
    fn rectangle_compresses_to_corners() {
        let mut mask = GrayImage::new(30, 30);
        fill_rect(&mut mask, 5, 5, 15, 12);

        let contours = external_contours(&mask);

        assert_eq!(contours.len(), 1);
        let mut corners = contours[0].clone();
        corners.sort_by_key(|p| (p.x, p.y));
        assert_eq!(
            corners,
            vec![
                Point::new(5, 5),
                Point::new(5, 11),
                Point::new(14, 5),
                Point::new(14, 11)
            ]
        );
    }

    #[test]
    fn hole_and_island_inside_it_are_ignored() {
        let mut mask = GrayImage::new(40, 40);
        fill_rect(&mut mask, 2, 2, 38, 38);
        for y in 8..32 {
            for x in 8..32 {
                mask.put_pixel(x, y, Luma([0]));
            }
        }
        fill_rect(&mut mask, 15, 15, 25, 25);

        let contours = external_contours(&mask);

        assert_eq!(contours.len(), 1);
        assert!(contours[0].iter().all(|p| p.x == 2 || p.x == 37 || p.y == 2 || p.y == 37));
    }

    #[test]
    fn separate_regions_each_get_an_outline() {
        let mut mask = GrayImage::new(50, 20);
        fill_rect(&mut mask, 2, 2, 10, 10);
        fill_rect(&mut mask, 30, 5, 45, 15);

        assert_eq!(external_contours(&mask).len(), 2);
    }

    #[test]
    fn region_touching_the_edge_is_an_outline() {
        let mut mask = GrayImage::new(50, 50);
        fill_rect(&mut mask, 0, 10, 20, 40);

        let contours = external_contours(&mask);

        assert_eq!(contours.len(), 1);
        let mut corners = contours[0].clone();
        corners.sort_by_key(|p| (p.x, p.y));
        assert_eq!(
            corners,
            vec![
                Point::new(0, 10),
                Point::new(0, 39),
                Point::new(19, 10),
                Point::new(19, 39)
            ]
        );
    }

    #[test]
    fn fully_set_mask_is_one_outline_along_the_border() {
        let mask = GrayImage::from_pixel(12, 8, Luma([255]));

        let contours = external_contours(&mask);

        assert_eq!(contours.len(), 1);
        assert!(contours[0].contains(&Point::new(0, 0)));
        assert!(contours[0].contains(&Point::new(11, 7)));
    }

    #[test]
    fn short_point_lists_are_kept_as_is() {
        let pts = vec![Point::new(1, 1), Point::new(2, 2)];
        assert_eq!(compress_collinear(&pts), pts);
    }
}
