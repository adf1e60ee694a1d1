use figkit_core::geometry::{line_angle, reflect_across, rotate_about, round4, Bounds, Point};
use serde::{Deserialize, Serialize};

use super::CanvasShape;

/// An ellipse stored as its center and a rim point whose X/Y offsets from
/// the center define the two radii.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub center: Point,
    pub rim: Point,
    pub rotation: f64,
}

impl Ellipse {
    pub fn new(center: Point, rim: Point) -> Self {
        Self {
            center,
            rim,
            rotation: 0.0,
        }
    }

    pub fn with_radii(center: Point, rx: f64, ry: f64) -> Self {
        Self::new(center, Point::new(center.x + rx, center.y + ry))
    }

    pub fn rx(&self) -> f64 {
        (self.rim.x - self.center.x).abs()
    }

    pub fn ry(&self) -> f64 {
        (self.rim.y - self.center.y).abs()
    }

    pub fn set_radii(&mut self, rx: f64, ry: f64) {
        self.rim = Point::new(self.center.x + rx, self.center.y + ry);
    }

    fn in_ellipse(&self, local: Point, rx: f64, ry: f64) -> bool {
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }
        let dx = local.x - self.center.x;
        let dy = local.y - self.center.y;
        (dx * dx) / (rx * rx) + (dy * dy) / (ry * ry) <= 1.0
    }
}

impl CanvasShape for Ellipse {
    fn bounds(&self) -> Bounds {
        Bounds::new(
            self.center.x - self.rx(),
            self.center.y - self.ry(),
            self.center.x + self.rx(),
            self.center.y + self.ry(),
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
        let local = rotate_about(p, self.center, -self.rotation);
        if filled {
            self.in_ellipse(local, self.rx() + tolerance, self.ry() + tolerance)
        } else {
            // Ring test: inside the inflated outline but not the deflated one.
            self.in_ellipse(local, self.rx() + tolerance, self.ry() + tolerance)
                && !self.in_ellipse(local, self.rx() - tolerance, self.ry() - tolerance)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radii_from_rim_offsets() {
        let e = Ellipse::with_radii(Point::new(1.0, 2.0), 4.0, 2.0);
        assert_eq!(e.rx(), 4.0);
        assert_eq!(e.ry(), 2.0);
    }

    #[test]
    fn ring_test_for_unfilled() {
        let e = Ellipse::with_radii(Point::ZERO, 4.0, 2.0);
        assert!(e.contains_point(Point::new(4.1, 0.0), 0.3, false));
        assert!(!e.contains_point(Point::new(0.0, 0.0), 0.3, false));
        assert!(e.contains_point(Point::new(0.0, 0.0), 0.3, true));
    }
}
