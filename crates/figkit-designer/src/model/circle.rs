use figkit_core::geometry::{line_angle, reflect_across, rotate_about, round4, Bounds, Point};
use serde::{Deserialize, Serialize};

use super::CanvasShape;

/// A circle stored as its center and a rim point; the rim point defines the
/// radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub rim: Point,
    pub rotation: f64,
}

impl Circle {
    pub fn new(center: Point, rim: Point) -> Self {
        Self {
            center,
            rim,
            rotation: 0.0,
        }
    }

    pub fn with_radius(center: Point, radius: f64) -> Self {
        Self::new(center, Point::new(center.x + radius, center.y))
    }

    pub fn radius(&self) -> f64 {
        self.center.distance_to(self.rim)
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.rim = Point::new(self.center.x + radius, self.center.y);
    }
}

impl CanvasShape for Circle {
    fn bounds(&self) -> Bounds {
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
        self.rotation = round4(2.0 * line_angle(a, b) - self.rotation);
    }

    fn contains_point(&self, p: Point, tolerance: f64, filled: bool) -> bool {
        let d = self.center.distance_to(p);
        if filled {
            d <= self.radius()
        } else {
            (d - self.radius()).abs() <= tolerance
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rim_defines_radius() {
        let c = Circle::new(Point::new(1.0, 1.0), Point::new(4.0, 5.0));
        assert!((c.radius() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn unfilled_hits_only_near_rim() {
        let c = Circle::with_radius(Point::ZERO, 2.0);
        assert!(c.contains_point(Point::new(2.4, 0.0), 0.5, false));
        assert!(!c.contains_point(Point::new(1.0, 0.0), 0.5, false));
        assert!(c.contains_point(Point::new(1.0, 0.0), 0.5, true));
    }
}
