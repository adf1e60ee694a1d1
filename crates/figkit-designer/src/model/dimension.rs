//! Dimension and annotation shapes: linear measures, radius measures, angle
//! marks and braces.
//!
//! All of these are point-based: every defining coordinate (endpoints and
//! the optional label anchor) rotates and reflects directly, unlike the
//! box-based primitives that accumulate a rotation angle.

use figkit_core::geometry::{point_segment_distance, reflect_across, rotate_about, Bounds, Point};
use serde::{Deserialize, Serialize};

use super::CanvasShape;

/// Rotates a free vector (not a position) by `angle` radians.
fn rotate_vec(v: Point, angle: f64) -> Point {
    rotate_about(v, Point::ZERO, angle)
}

/// Reflects a free vector across the direction of the axis `a`..`b`.
fn reflect_vec(v: Point, a: Point, b: Point) -> Point {
    let dir = Point::new(b.x - a.x, b.y - a.y);
    reflect_across(v, Point::ZERO, dir)
}

fn reflect_anchor(anchor: Option<Point>, a: Point, b: Point) -> Option<Point> {
    anchor.map(|p| reflect_across(p, a, b).rounded4())
}

fn rotate_anchor(anchor: Option<Point>, pivot: Point, angle: f64) -> Option<Point> {
    anchor.map(|p| rotate_about(p, pivot, angle))
}

/// A linear dimension between two measured points.
///
/// `offset` is a perpendicular vector from the measured segment to the
/// dimension line; the witness lines span it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub start: Point,
    pub end: Point,
    pub offset: Point,
    pub label_anchor: Option<Point>,
    pub label: Option<String>,
}

impl Measure {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            offset: Point::new(0.0, 0.5),
            label_anchor: None,
            label: None,
        }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    /// The dimension line endpoints (measured points displaced by the
    /// witness offset).
    pub fn dimension_line(&self) -> (Point, Point) {
        (
            self.start.translated(self.offset.x, self.offset.y),
            self.end.translated(self.offset.x, self.offset.y),
        )
    }
}

impl CanvasShape for Measure {
    fn bounds(&self) -> Bounds {
        let (d1, d2) = self.dimension_line();
        let mut pts = vec![self.start, self.end, d1, d2];
        if let Some(anchor) = self.label_anchor {
            pts.push(anchor);
        }
        Bounds::from_points(pts).unwrap_or(Bounds::new(0.0, 0.0, 0.0, 0.0))
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.start = self.start.translated(dx, dy);
        self.end = self.end.translated(dx, dy);
        self.label_anchor = self.label_anchor.map(|p| p.translated(dx, dy));
    }

    fn rotate_about(&mut self, pivot: Point, angle: f64) {
        self.start = rotate_about(self.start, pivot, angle);
        self.end = rotate_about(self.end, pivot, angle);
        self.offset = rotate_vec(self.offset, angle);
        self.label_anchor = rotate_anchor(self.label_anchor, pivot, angle);
    }

    fn reflect_across(&mut self, a: Point, b: Point) {
        self.start = reflect_across(self.start, a, b).rounded4();
        self.end = reflect_across(self.end, a, b).rounded4();
        self.offset = reflect_vec(self.offset, a, b).rounded4();
        self.label_anchor = reflect_anchor(self.label_anchor, a, b);
    }

    fn contains_point(&self, p: Point, tolerance: f64, _filled: bool) -> bool {
        point_segment_distance(p, self.start, self.end) <= tolerance
    }
}

/// A radius/diameter callout across a circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureRadius {
    pub start: Point,
    pub end: Point,
    pub label_anchor: Option<Point>,
    pub label: Option<String>,
}

impl MeasureRadius {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            label_anchor: None,
            label: None,
        }
    }
}

impl CanvasShape for MeasureRadius {
    fn bounds(&self) -> Bounds {
        let mut pts = vec![self.start, self.end];
        if let Some(anchor) = self.label_anchor {
            pts.push(anchor);
        }
        Bounds::from_points(pts).unwrap_or(Bounds::new(0.0, 0.0, 0.0, 0.0))
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.start = self.start.translated(dx, dy);
        self.end = self.end.translated(dx, dy);
        self.label_anchor = self.label_anchor.map(|p| p.translated(dx, dy));
    }

    fn rotate_about(&mut self, pivot: Point, angle: f64) {
        self.start = rotate_about(self.start, pivot, angle);
        self.end = rotate_about(self.end, pivot, angle);
        self.label_anchor = rotate_anchor(self.label_anchor, pivot, angle);
    }

    fn reflect_across(&mut self, a: Point, b: Point) {
        self.start = reflect_across(self.start, a, b).rounded4();
        self.end = reflect_across(self.end, a, b).rounded4();
        self.label_anchor = reflect_anchor(self.label_anchor, a, b);
    }

    fn contains_point(&self, p: Point, tolerance: f64, _filled: bool) -> bool {
        point_segment_distance(p, self.start, self.end) <= tolerance
    }
}

/// An angle mark at a vertex; the second anchor lies on the marked ray and
/// its distance from the vertex sets the arc radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkAngle {
    pub vertex: Point,
    pub toward: Point,
    pub label_anchor: Option<Point>,
    pub label: Option<String>,
}

impl MarkAngle {
    pub fn new(vertex: Point, toward: Point) -> Self {
        Self {
            vertex,
            toward,
            label_anchor: None,
            label: None,
        }
    }

    pub fn radius(&self) -> f64 {
        self.vertex.distance_to(self.toward)
    }
}

impl CanvasShape for MarkAngle {
    fn bounds(&self) -> Bounds {
        let mut pts = vec![self.vertex, self.toward];
        if let Some(anchor) = self.label_anchor {
            pts.push(anchor);
        }
        Bounds::from_points(pts).unwrap_or(Bounds::new(0.0, 0.0, 0.0, 0.0))
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.vertex = self.vertex.translated(dx, dy);
        self.toward = self.toward.translated(dx, dy);
        self.label_anchor = self.label_anchor.map(|p| p.translated(dx, dy));
    }

    fn rotate_about(&mut self, pivot: Point, angle: f64) {
        self.vertex = rotate_about(self.vertex, pivot, angle);
        self.toward = rotate_about(self.toward, pivot, angle);
        self.label_anchor = rotate_anchor(self.label_anchor, pivot, angle);
    }

    fn reflect_across(&mut self, a: Point, b: Point) {
        self.vertex = reflect_across(self.vertex, a, b).rounded4();
        self.toward = reflect_across(self.toward, a, b).rounded4();
        self.label_anchor = reflect_anchor(self.label_anchor, a, b);
    }

    fn contains_point(&self, p: Point, tolerance: f64, _filled: bool) -> bool {
        point_segment_distance(p, self.vertex, self.toward) <= tolerance
    }
}

/// A curly brace spanning two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brace {
    pub start: Point,
    pub end: Point,
    pub label_anchor: Option<Point>,
    pub label: Option<String>,
}

impl Brace {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            label_anchor: None,
            label: None,
        }
    }
}

impl CanvasShape for Brace {
    fn bounds(&self) -> Bounds {
        let mut pts = vec![self.start, self.end];
        if let Some(anchor) = self.label_anchor {
            pts.push(anchor);
        }
        Bounds::from_points(pts).unwrap_or(Bounds::new(0.0, 0.0, 0.0, 0.0))
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.start = self.start.translated(dx, dy);
        self.end = self.end.translated(dx, dy);
        self.label_anchor = self.label_anchor.map(|p| p.translated(dx, dy));
    }

    fn rotate_about(&mut self, pivot: Point, angle: f64) {
        self.start = rotate_about(self.start, pivot, angle);
        self.end = rotate_about(self.end, pivot, angle);
        self.label_anchor = rotate_anchor(self.label_anchor, pivot, angle);
    }

    fn reflect_across(&mut self, a: Point, b: Point) {
        self.start = reflect_across(self.start, a, b).rounded4();
        self.end = reflect_across(self.end, a, b).rounded4();
        self.label_anchor = reflect_anchor(self.label_anchor, a, b);
    }

    fn contains_point(&self, p: Point, tolerance: f64, _filled: bool) -> bool {
        point_segment_distance(p, self.start, self.end) <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn measure_rotates_offset_as_vector() {
        let mut m = Measure::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0));
        m.offset = Point::new(0.0, 1.0);
        m.rotate_about(Point::ZERO, FRAC_PI_2);
        assert!((m.offset.x + 1.0).abs() < 1e-9);
        assert!((m.offset.y).abs() < 1e-9);
        assert!((m.end.y - 4.0).abs() < 1e-9);
    }

    #[test]
    fn label_anchor_follows_translation() {
        let mut m = MeasureRadius::new(Point::ZERO, Point::new(2.0, 0.0));
        m.label_anchor = Some(Point::new(1.0, 0.5));
        m.translate(1.0, 1.0);
        assert_eq!(m.label_anchor, Some(Point::new(2.0, 1.5)));
    }
}
