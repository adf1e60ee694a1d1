use figkit_core::geometry::{point_segment_distance, reflect_across, rotate_about, Bounds, Point};
use serde::{Deserialize, Serialize};

use super::CanvasShape;

/// A straight segment between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }
}

impl CanvasShape for Line {
    fn bounds(&self) -> Bounds {
        Bounds::new(self.start.x, self.start.y, self.end.x, self.end.y)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.start = self.start.translated(dx, dy);
        self.end = self.end.translated(dx, dy);
    }

    fn rotate_about(&mut self, pivot: Point, angle: f64) {
        self.start = rotate_about(self.start, pivot, angle);
        self.end = rotate_about(self.end, pivot, angle);
    }

    fn reflect_across(&mut self, a: Point, b: Point) {
        self.start = reflect_across(self.start, a, b).rounded4();
        self.end = reflect_across(self.end, a, b).rounded4();
    }

    fn contains_point(&self, p: Point, tolerance: f64, _filled: bool) -> bool {
        point_segment_distance(p, self.start, self.end) <= tolerance
    }
}
