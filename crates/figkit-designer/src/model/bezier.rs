use figkit_core::geometry::{point_segment_distance, reflect_across, rotate_about, Bounds, Point};
use serde::{Deserialize, Serialize};

use super::CanvasShape;

/// A cubic bezier defined by two endpoints and two control points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bezier {
    pub start: Point,
    pub end: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
}

impl Bezier {
    /// Creates a bezier with the default control placement: controls at 33%
    /// and 66% along the chord, which draws as a straight-ish curve the user
    /// can later drag into an S shape.
    pub fn with_default_controls(start: Point, end: Point) -> Self {
        let (ctrl1, ctrl2) = Self::default_controls(start, end);
        Self {
            start,
            end,
            ctrl1,
            ctrl2,
        }
    }

    pub fn default_controls(start: Point, end: Point) -> (Point, Point) {
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        (
            Point::new(start.x + dx / 3.0, start.y + dy / 3.0),
            Point::new(start.x + dx * 2.0 / 3.0, start.y + dy * 2.0 / 3.0),
        )
    }
}

impl CanvasShape for Bezier {
    fn bounds(&self) -> Bounds {
        // Control-polygon box. Loose for extreme curves, but consistent with
        // the control-polygon hit test below.
        Bounds::from_points([self.start, self.ctrl1, self.ctrl2, self.end])
            .unwrap_or(Bounds::new(0.0, 0.0, 0.0, 0.0))
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.start = self.start.translated(dx, dy);
        self.end = self.end.translated(dx, dy);
        self.ctrl1 = self.ctrl1.translated(dx, dy);
        self.ctrl2 = self.ctrl2.translated(dx, dy);
    }

    fn rotate_about(&mut self, pivot: Point, angle: f64) {
        self.start = rotate_about(self.start, pivot, angle);
        self.end = rotate_about(self.end, pivot, angle);
        self.ctrl1 = rotate_about(self.ctrl1, pivot, angle);
        self.ctrl2 = rotate_about(self.ctrl2, pivot, angle);
    }

    fn reflect_across(&mut self, a: Point, b: Point) {
        self.start = reflect_across(self.start, a, b).rounded4();
        self.end = reflect_across(self.end, a, b).rounded4();
        self.ctrl1 = reflect_across(self.ctrl1, a, b).rounded4();
        self.ctrl2 = reflect_across(self.ctrl2, a, b).rounded4();
    }

    fn contains_point(&self, p: Point, tolerance: f64, _filled: bool) -> bool {
        // Approximation by the control polygon P1-C1, C1-C2, C2-P2 rather
        // than exact curve distance.
        point_segment_distance(p, self.start, self.ctrl1) <= tolerance
            || point_segment_distance(p, self.ctrl1, self.ctrl2) <= tolerance
            || point_segment_distance(p, self.ctrl2, self.end) <= tolerance
    }
}
