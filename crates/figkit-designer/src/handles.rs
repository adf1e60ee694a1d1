//! Handle engine: named manipulation handles for the selected shape.
//!
//! Point-based shapes expose `start`/`end` grips; circles get a center grip
//! plus four cardinal rim grips that all drive the radius; the remaining
//! box-based shapes get the eight compass handles of their (pre-rotation)
//! bounding box. Handle hits are tested in device pixels and take priority
//! over body hits.

use figkit_core::constants::HANDLE_TOLERANCE_PX;
use figkit_core::geometry::Point;
use smallvec::SmallVec;

use crate::canvas::DrawingObject;
use crate::model::{CanvasShape, Shape};
use crate::viewport::Viewport;

/// A named manipulation handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    /// Body drag: every coordinate field moves by the same delta.
    Move,
    Start,
    End,
    N,
    S,
    E,
    W,
    Nw,
    Ne,
    Sw,
    Se,
}

pub type HandleSet = SmallVec<[(Handle, Point); 9]>;

/// Grid-space positions of the shape's handles.
pub fn handle_positions(shape: &Shape) -> HandleSet {
    let mut out = HandleSet::new();
    match shape {
        Shape::Circle(c) => {
            let r = c.radius();
            out.push((Handle::Start, c.center));
            out.push((Handle::End, Point::new(c.center.x + r, c.center.y)));
            out.push((Handle::End, Point::new(c.center.x - r, c.center.y)));
            out.push((Handle::End, Point::new(c.center.x, c.center.y + r)));
            out.push((Handle::End, Point::new(c.center.x, c.center.y - r)));
        }
        _ if shape.is_box_based() => {
            let b = shape.bounds();
            let cx = (b.min_x + b.max_x) / 2.0;
            let cy = (b.min_y + b.max_y) / 2.0;
            // Grid Y grows upward, so "north" is the max-Y edge.
            out.push((Handle::Nw, Point::new(b.min_x, b.max_y)));
            out.push((Handle::N, Point::new(cx, b.max_y)));
            out.push((Handle::Ne, Point::new(b.max_x, b.max_y)));
            out.push((Handle::W, Point::new(b.min_x, cy)));
            out.push((Handle::E, Point::new(b.max_x, cy)));
            out.push((Handle::Sw, Point::new(b.min_x, b.min_y)));
            out.push((Handle::S, Point::new(cx, b.min_y)));
            out.push((Handle::Se, Point::new(b.max_x, b.min_y)));
        }
        _ => {
            if let (Some(start), Some(end)) = (shape.start_point(), shape.end_point()) {
                out.push((Handle::Start, start));
                out.push((Handle::End, end));
            }
        }
    }
    out
}

/// Returns the handle of `obj` under the device point, if any.
pub fn handle_at(obj: &DrawingObject, px: f64, py: f64, viewport: &Viewport) -> Option<Handle> {
    for (handle, pos) in handle_positions(&obj.shape) {
        let (hx, hy) = viewport.grid_to_screen(pos);
        let dist = ((px - hx).powi(2) + (py - hy).powi(2)).sqrt();
        if dist <= HANDLE_TOLERANCE_PX {
            return Some(handle);
        }
    }
    None
}

/// Applies a handle edit to a copy of the start-of-drag shape.
///
/// The delta is the *total* grid-space drag vector from the gesture anchor,
/// so repeated pointer-move events recompute the same result instead of
/// accumulating per-frame error.
pub fn apply_handle(base: &Shape, handle: Handle, dx: f64, dy: f64) -> Shape {
    let mut shape = base.clone();
    match handle {
        Handle::Move => shape.translate(dx, dy),
        Handle::Start => move_start(&mut shape, dx, dy),
        Handle::End => move_end(&mut shape, dx, dy),
        _ => edit_box(&mut shape, handle, dx, dy),
    }
    shape
}

fn move_start(shape: &mut Shape, dx: f64, dy: f64) {
    match shape {
        Shape::Line(s) => s.start = s.start.translated(dx, dy),
        Shape::Bezier(s) => s.start = s.start.translated(dx, dy),
        Shape::Freehand(s) => {
            let p = s.start().translated(dx, dy);
            s.move_start(p);
        }
        Shape::Measure(s) => s.start = s.start.translated(dx, dy),
        Shape::MeasureRadius(s) => s.start = s.start.translated(dx, dy),
        Shape::MarkAngle(s) => s.vertex = s.vertex.translated(dx, dy),
        Shape::Brace(s) => s.start = s.start.translated(dx, dy),
        // The circle's center grip moves the whole shape.
        Shape::Circle(s) => s.translate(dx, dy),
        _ => {}
    }
}

fn move_end(shape: &mut Shape, dx: f64, dy: f64) {
    match shape {
        Shape::Line(s) => s.end = s.end.translated(dx, dy),
        Shape::Bezier(s) => s.end = s.end.translated(dx, dy),
        Shape::Freehand(s) => {
            let p = s.end().translated(dx, dy);
            s.move_end(p);
        }
        Shape::Measure(s) => s.end = s.end.translated(dx, dy),
        Shape::MeasureRadius(s) => s.end = s.end.translated(dx, dy),
        Shape::MarkAngle(s) => s.toward = s.toward.translated(dx, dy),
        Shape::Brace(s) => s.end = s.end.translated(dx, dy),
        // Any rim grip re-derives the radius from the displaced rim point.
        Shape::Circle(s) => s.rim = s.rim.translated(dx, dy),
        _ => {}
    }
}

/// Per-edge deltas named by a compass handle. West/east move the min/max X
/// edge, north/south the max/min Y edge (grid Y up).
fn edge_deltas(handle: Handle, dx: f64, dy: f64) -> (f64, f64, f64, f64) {
    // (west, east, north, south)
    match handle {
        Handle::W => (dx, 0.0, 0.0, 0.0),
        Handle::E => (0.0, dx, 0.0, 0.0),
        Handle::N => (0.0, 0.0, dy, 0.0),
        Handle::S => (0.0, 0.0, 0.0, dy),
        Handle::Nw => (dx, 0.0, dy, 0.0),
        Handle::Ne => (0.0, dx, dy, 0.0),
        Handle::Sw => (dx, 0.0, 0.0, dy),
        Handle::Se => (0.0, dx, 0.0, dy),
        _ => (0.0, 0.0, 0.0, 0.0),
    }
}

fn edit_box(shape: &mut Shape, handle: Handle, dx: f64, dy: f64) {
    let (west, east, north, south) = edge_deltas(handle, dx, dy);
    match shape {
        Shape::Rect(s) => {
            edit_corners(&mut s.corner1, &mut s.corner2, west, east, north, south);
        }
        Shape::RoundRect(s) => {
            edit_corners(&mut s.corner1, &mut s.corner2, west, east, north, south);
        }
        Shape::Ellipse(s) => {
            let b = s.bounds();
            let (min_x, max_x) = (b.min_x + west, b.max_x + east);
            let (min_y, max_y) = (b.min_y + south, b.max_y + north);
            s.center = Point::new((min_x + max_x) / 2.0, (min_y + max_y) / 2.0);
            s.set_radii((max_x - min_x).abs() / 2.0, (max_y - min_y).abs() / 2.0);
        }
        Shape::Arc(s) => {
            let b = s.bounds();
            let (min_x, max_x) = (b.min_x + west, b.max_x + east);
            let (min_y, max_y) = (b.min_y + south, b.max_y + north);
            let center = Point::new((min_x + max_x) / 2.0, (min_y + max_y) / 2.0);
            let radius = (max_x - min_x).abs().min((max_y - min_y).abs()) / 2.0;
            s.center = center;
            s.rim = Point::new(center.x + radius, center.y);
        }
        // Text has no extent to resize; its compass handles move the anchor.
        Shape::Text(s) => s.translate(dx, dy),
        _ => {}
    }
}

/// Edits raw corner fields without normalizing them: the storage order is
/// whatever previous edits left behind, so first resolve which field
/// currently holds the named edge.
fn edit_corners(c1: &mut Point, c2: &mut Point, west: f64, east: f64, north: f64, south: f64) {
    if c1.x <= c2.x {
        c1.x += west;
        c2.x += east;
    } else {
        c2.x += west;
        c1.x += east;
    }
    if c1.y <= c2.y {
        c1.y += south;
        c2.y += north;
    } else {
        c2.y += south;
        c1.y += north;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Circle, Line, Rect};

    #[test]
    fn west_handle_moves_min_x_regardless_of_storage_order() {
        // Corners stored max-first.
        let base = Shape::Rect(Rect::new(Point::new(4.0, 4.0), Point::new(0.0, 0.0)));
        let edited = apply_handle(&base, Handle::W, 1.0, 0.0);
        let b = edited.bounds();
        assert_eq!(b.min_x, 1.0);
        assert_eq!(b.max_x, 4.0);
    }

    #[test]
    fn northeast_handle_edits_two_edges() {
        let base = Shape::Rect(Rect::new(Point::ZERO, Point::new(2.0, 2.0)));
        let edited = apply_handle(&base, Handle::Ne, 1.0, 0.5);
        let b = edited.bounds();
        assert_eq!(b.max_x, 3.0);
        assert_eq!(b.max_y, 2.5);
        assert_eq!(b.min_x, 0.0);
    }

    #[test]
    fn circle_rim_grip_changes_radius_center_grip_moves() {
        let base = Shape::Circle(Circle::with_radius(Point::ZERO, 2.0));
        let grown = apply_handle(&base, Handle::End, 1.0, 0.0);
        if let Shape::Circle(c) = grown {
            assert!((c.radius() - 3.0).abs() < 1e-9);
            assert_eq!(c.center, Point::ZERO);
        } else {
            unreachable!();
        }
        let moved = apply_handle(&base, Handle::Start, 1.0, 1.0);
        if let Shape::Circle(c) = moved {
            assert_eq!(c.center, Point::new(1.0, 1.0));
            assert!((c.radius() - 2.0).abs() < 1e-9);
        } else {
            unreachable!();
        }
    }

    #[test]
    fn line_handles_sit_on_endpoints() {
        let shape = Shape::Line(Line::new(Point::ZERO, Point::new(3.0, 0.0)));
        let handles = handle_positions(&shape);
        assert_eq!(handles.len(), 2);
        assert_eq!(handles[0], (Handle::Start, Point::ZERO));
        assert_eq!(handles[1], (Handle::End, Point::new(3.0, 0.0)));
    }

    #[test]
    fn total_delta_is_idempotent() {
        let base = Shape::Rect(Rect::new(Point::ZERO, Point::new(2.0, 2.0)));
        let once = apply_handle(&base, Handle::Se, 1.5, -0.5);
        let twice = apply_handle(&base, Handle::Se, 1.5, -0.5);
        assert_eq!(once, twice);
    }
}
