use figkit_core::geometry::{
    line_angle, point_segment_distance, reflect_across, rotate_about, round4, Bounds, Point,
};
use serde::{Deserialize, Serialize};

use super::CanvasShape;

/// An axis-aligned rectangle stored as two opposite corners.
///
/// The corners are not order-normalized: either may hold the min or max
/// coordinate after handle edits. Consumers normalize at read time via
/// `bounds()`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub corner1: Point,
    pub corner2: Point,
    /// Accumulated rotation in radians, applied about the center at render
    /// and transform time; never baked into the corners.
    pub rotation: f64,
}

impl Rect {
    pub fn new(corner1: Point, corner2: Point) -> Self {
        Self {
            corner1,
            corner2,
            rotation: 0.0,
        }
    }

    pub fn center(&self) -> Point {
        self.corner1.midpoint(self.corner2)
    }

    pub fn width(&self) -> f64 {
        (self.corner2.x - self.corner1.x).abs()
    }

    pub fn height(&self) -> f64 {
        (self.corner2.y - self.corner1.y).abs()
    }
}

/// A rectangle with rounded corners. Same corner storage rules as `Rect`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundRect {
    pub corner1: Point,
    pub corner2: Point,
    /// Corner radius in grid units.
    pub corner_radius: f64,
    pub rotation: f64,
}

impl RoundRect {
    pub fn new(corner1: Point, corner2: Point, corner_radius: f64) -> Self {
        Self {
            corner1,
            corner2,
            corner_radius,
            rotation: 0.0,
        }
    }

    pub fn center(&self) -> Point {
        self.corner1.midpoint(self.corner2)
    }
}

pub(super) fn box_bounds(c1: Point, c2: Point) -> Bounds {
    Bounds::new(c1.x, c1.y, c2.x, c2.y)
}

/// Shared rect hit test. Filled boxes hit on the whole interior; unfilled
/// boxes only near one of the four edges. The probe point is un-rotated
/// about the center first so the test runs in the box's local frame.
pub(super) fn box_contains(
    c1: Point,
    c2: Point,
    rotation: f64,
    p: Point,
    tolerance: f64,
    filled: bool,
) -> bool {
    let b = box_bounds(c1, c2);
    let local = rotate_about(p, b.center(), -rotation);
    if filled {
        return b.inflated(tolerance).contains(local);
    }
    let corners = [
        Point::new(b.min_x, b.min_y),
        Point::new(b.max_x, b.min_y),
        Point::new(b.max_x, b.max_y),
        Point::new(b.min_x, b.max_y),
    ];
    (0..4).any(|i| point_segment_distance(local, corners[i], corners[(i + 1) % 4]) <= tolerance)
}

fn box_rotate(c1: &mut Point, c2: &mut Point, rotation: &mut f64, pivot: Point, angle: f64) {
    // Box-based: only the center orbits the pivot; width/height stay local
    // and the angle accumulates in `rotation`.
    let center = c1.midpoint(*c2);
    let new_center = rotate_about(center, pivot, angle);
    let dx = new_center.x - center.x;
    let dy = new_center.y - center.y;
    *c1 = c1.translated(dx, dy);
    *c2 = c2.translated(dx, dy);
    *rotation += angle;
}

fn box_reflect(c1: &mut Point, c2: &mut Point, rotation: &mut f64, a: Point, b: Point) {
    let center = c1.midpoint(*c2);
    let new_center = reflect_across(center, a, b);
    let dx = new_center.x - center.x;
    let dy = new_center.y - center.y;
    *c1 = c1.translated(dx, dy).rounded4();
    *c2 = c2.translated(dx, dy).rounded4();
    *rotation = round4(2.0 * line_angle(a, b) - *rotation);
}

impl CanvasShape for Rect {
    fn bounds(&self) -> Bounds {
        box_bounds(self.corner1, self.corner2)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.corner1 = self.corner1.translated(dx, dy);
        self.corner2 = self.corner2.translated(dx, dy);
    }

    fn rotate_about(&mut self, pivot: Point, angle: f64) {
        box_rotate(
            &mut self.corner1,
            &mut self.corner2,
            &mut self.rotation,
            pivot,
            angle,
        );
    }

    fn reflect_across(&mut self, a: Point, b: Point) {
        box_reflect(
            &mut self.corner1,
            &mut self.corner2,
            &mut self.rotation,
            a,
            b,
        );
    }

    fn contains_point(&self, p: Point, tolerance: f64, filled: bool) -> bool {
        box_contains(self.corner1, self.corner2, self.rotation, p, tolerance, filled)
    }
}

impl CanvasShape for RoundRect {
    fn bounds(&self) -> Bounds {
        box_bounds(self.corner1, self.corner2)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.corner1 = self.corner1.translated(dx, dy);
        self.corner2 = self.corner2.translated(dx, dy);
    }

    fn rotate_about(&mut self, pivot: Point, angle: f64) {
        box_rotate(
            &mut self.corner1,
            &mut self.corner2,
            &mut self.rotation,
            pivot,
            angle,
        );
    }

    fn reflect_across(&mut self, a: Point, b: Point) {
        box_reflect(
            &mut self.corner1,
            &mut self.corner2,
            &mut self.rotation,
            a,
            b,
        );
    }

    fn contains_point(&self, p: Point, tolerance: f64, filled: bool) -> bool {
        box_contains(self.corner1, self.corner2, self.rotation, p, tolerance, filled)
    }
}
