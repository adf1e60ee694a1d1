use figkit_core::geometry::{line_angle, reflect_across, rotate_about, round4, Bounds, Point};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use super::CanvasShape;

/// A circular arc: center + rim point for the radius, plus a sweep given by
/// start/end angles in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub center: Point,
    pub rim: Point,
    pub start_angle: f64,
    pub end_angle: f64,
    pub rotation: f64,
}

impl Arc {
    pub fn new(center: Point, rim: Point, start_angle: f64, end_angle: f64) -> Self {
        Self {
            center,
            rim,
            start_angle,
            end_angle,
            rotation: 0.0,
        }
    }

    pub fn radius(&self) -> f64 {
        self.center.distance_to(self.rim)
    }

    pub fn point_at(&self, angle: f64) -> Point {
        let r = self.radius();
        Point::new(
            self.center.x + r * angle.cos(),
            self.center.y + r * angle.sin(),
        )
    }

    fn sweep_contains(&self, angle: f64) -> bool {
        let norm = |mut a: f64| {
            while a < 0.0 {
                a += TAU;
            }
            a % TAU
        };
        let a = norm(angle);
        let start = norm(self.start_angle);
        let end = norm(self.end_angle);
        if start <= end {
            a >= start && a <= end
        } else {
            a >= start || a <= end
        }
    }
}

impl CanvasShape for Arc {
    fn bounds(&self) -> Bounds {
        // The full circle's box. Coarse for short sweeps but stable under
        // angle edits, which is what the handle engine needs.
        let r = self.radius();
        Bounds::new(
            self.center.x - r,
            self.center.y - r,
            self.center.x + r,
            self.center.y + r,
        )
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.center = self.center.translated(dx, dy);
        self.rim = self.rim.translated(dx, dy);
    }

    fn rotate_about(&mut self, pivot: Point, angle: f64) {
        let new_center = rotate_about(self.center, pivot, angle);
        let dx = new_center.x - self.center.x;
        let dy = new_center.y - self.center.y;
        self.translate(dx, dy);
        self.rotation += angle;
    }

    fn reflect_across(&mut self, a: Point, b: Point) {
        let new_center = reflect_across(self.center, a, b);
        let dx = new_center.x - self.center.x;
        let dy = new_center.y - self.center.y;
        self.center = self.center.translated(dx, dy).rounded4();
        self.rim = self.rim.translated(dx, dy).rounded4();
        let axis = line_angle(a, b);
        // Reflection reverses winding, so the sweep endpoints swap as well
        // as mirror.
        let old_start = self.start_angle;
        let old_end = self.end_angle;
        self.start_angle = round4(2.0 * axis - old_end);
        self.end_angle = round4(2.0 * axis - old_start);
        self.rotation = round4(2.0 * axis - self.rotation);
    }

    fn contains_point(&self, p: Point, tolerance: f64, _filled: bool) -> bool {
        let local = rotate_about(p, self.center, -self.rotation);
        let angle = (local.y - self.center.y).atan2(local.x - self.center.x);
        if self.sweep_contains(angle) {
            (self.center.distance_to(local) - self.radius()).abs() <= tolerance
        } else {
            local.distance_to(self.point_at(self.start_angle)) <= tolerance
                || local.distance_to(self.point_at(self.end_angle)) <= tolerance
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn hit_respects_sweep() {
        // Upper half circle, radius 2.
        let arc = Arc::new(Point::ZERO, Point::new(2.0, 0.0), 0.0, PI);
        assert!(arc.contains_point(Point::new(0.0, 2.1), 0.3, false));
        assert!(!arc.contains_point(Point::new(0.0, -2.0), 0.3, false));
    }

    #[test]
    fn reflect_swaps_and_mirrors_sweep() {
        // Mirror across the X axis: start/end swap and negate.
        let mut arc = Arc::new(Point::ZERO, Point::new(2.0, 0.0), FRAC_PI_2, PI);
        arc.reflect_across(Point::ZERO, Point::new(1.0, 0.0));
        assert!((arc.start_angle - (-PI)).abs() < 1e-4);
        assert!((arc.end_angle - (-FRAC_PI_2)).abs() < 1e-4);
    }

    #[test]
    fn reflect_twice_restores_sweep() {
        let mut arc = Arc::new(Point::new(1.0, 1.0), Point::new(3.0, 1.0), 0.3, 2.1);
        let a = Point::new(-1.0, 0.0);
        let b = Point::new(2.0, 3.0);
        arc.reflect_across(a, b);
        arc.reflect_across(a, b);
        assert!((arc.start_angle - 0.3).abs() < 1e-3);
        assert!((arc.end_angle - 2.1).abs() < 1e-3);
        assert!((arc.center.x - 1.0).abs() < 1e-3);
    }
}
