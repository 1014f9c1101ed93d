//! Polygon moments and minimal enclosing circles for contour outlines.

use imageproc::point::Point;

/// Spatial moments up to first order of a closed polygon.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Moments {
    pub m00: f64,
    pub m10: f64,
    pub m01: f64,
}

impl Moments {
    /// Computes the moments of the region enclosed by `points` using Green's
    /// theorem over the polygon edges. The result does not depend on the
    /// winding direction of the outline.
    pub fn of_polygon(points: &[Point<i32>]) -> Self {
        let n = points.len();
        if n < 3 {
            return Self::default();
        }

        let mut a00 = 0.0;
        let mut a10 = 0.0;
        let mut a01 = 0.0;
        let mut prev = points[n - 1];
        for &curr in points {
            let (xp, yp) = (prev.x as f64, prev.y as f64);
            let (xc, yc) = (curr.x as f64, curr.y as f64);
            let cross = xp * yc - xc * yp;
            a00 += cross;
            a10 += cross * (xp + xc);
            a01 += cross * (yp + yc);
            prev = curr;
        }

        let sign = if a00 < 0.0 { -1.0 } else { 1.0 };
        Self {
            m00: sign * a00 / 2.0,
            m10: sign * a10 / 6.0,
            m01: sign * a01 / 6.0,
        }
    }

    pub fn area(&self) -> f64 {
        self.m00
    }

    /// Area centroid, or `None` for a degenerate outline with no enclosed area.
    pub fn centroid(&self) -> Option<(f64, f64)> {
        if self.m00 == 0.0 {
            return None;
        }
        Some((self.m10 / self.m00, self.m01 / self.m00))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

const CONTAINMENT_EPSILON: f64 = 1e-7;

impl Circle {
    fn contains(&self, p: (f64, f64)) -> bool {
        (p.0 - self.x).hypot(p.1 - self.y) <= self.radius + CONTAINMENT_EPSILON
    }

    fn from_two(a: (f64, f64), b: (f64, f64)) -> Self {
        let x = (a.0 + b.0) / 2.0;
        let y = (a.1 + b.1) / 2.0;
        Self {
            x,
            y,
            radius: (a.0 - x).hypot(a.1 - y),
        }
    }

    fn from_three(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Self {
        let d = 2.0 * (a.0 * (b.1 - c.1) + b.0 * (c.1 - a.1) + c.0 * (a.1 - b.1));
        if d == 0.0 {
            // collinear: the widest pair spans the other point
            return [Self::from_two(a, b), Self::from_two(a, c), Self::from_two(b, c)]
                .into_iter()
                .max_by(|l, r| l.radius.total_cmp(&r.radius))
                .unwrap_or(Self::from_two(a, b));
        }
        let sq = |p: (f64, f64)| p.0 * p.0 + p.1 * p.1;
        let x = (sq(a) * (b.1 - c.1) + sq(b) * (c.1 - a.1) + sq(c) * (a.1 - b.1)) / d;
        let y = (sq(a) * (c.0 - b.0) + sq(b) * (a.0 - c.0) + sq(c) * (b.0 - a.0)) / d;
        Self {
            x,
            y,
            radius: (a.0 - x).hypot(a.1 - y),
        }
    }
}

/// Smallest circle containing every point, or `None` for an empty set.
///
/// Incremental Welzl construction over the points in their given order, so the
/// result is deterministic for a given outline.
pub fn min_enclosing_circle(points: &[Point<i32>]) -> Option<Circle> {
    let pts: Vec<(f64, f64)> = points.iter().map(|p| (p.x as f64, p.y as f64)).collect();
    let first = *pts.first()?;

    let mut circle = Circle {
        x: first.0,
        y: first.1,
        radius: 0.0,
    };
    for i in 1..pts.len() {
        if circle.contains(pts[i]) {
            continue;
        }
        circle = Circle {
            x: pts[i].0,
            y: pts[i].1,
            radius: 0.0,
        };
        for j in 0..i {
            if circle.contains(pts[j]) {
                continue;
            }
            circle = Circle::from_two(pts[i], pts[j]);
            for k in 0..j {
                if !circle.contains(pts[k]) {
                    circle = Circle::from_three(pts[i], pts[j], pts[k]);
                }
            }
        }
    }
    Some(circle)
}
