//! The shape model: a closed sum type over every drawable kind.
//!
//! Each variant carries only the fields that are meaningful for it, and
//! implements the [`CanvasShape`] operations with its own anchor semantics:
//! center+rim for circles/ellipses/arcs, two free corners for rectangles,
//! endpoint pairs for line work, a point trail for freehand strokes.

use figkit_core::geometry::{Bounds, Point};
use serde::{Deserialize, Serialize};

mod arc;
mod bezier;
mod circle;
mod dimension;
mod ellipse;
mod freehand;
mod line;
mod rect;
mod style;
mod text;

pub use arc::Arc;
pub use bezier::Bezier;
pub use circle::Circle;
pub use dimension::{Brace, MarkAngle, Measure, MeasureRadius};
pub use ellipse::Ellipse;
pub use freehand::Freehand;
pub use line::Line;
pub use rect::{Rect, RoundRect};
pub use style::{ArrowStyle, Color, HatchStyle, LineStyle, ShapeStyle};
pub use text::Text;

/// Operations every shape kind supports. Implemented per variant; the
/// algorithms never branch on a type tag themselves.
pub trait CanvasShape {
    /// Axis-aligned bounding box in grid coordinates, min/max normalized at
    /// read time regardless of storage order.
    fn bounds(&self) -> Bounds;

    /// Moves every coordinate field by the same delta.
    fn translate(&mut self, dx: f64, dy: f64);

    /// Rotates about a pivot. Point-based shapes rotate every defining
    /// coordinate; box-based shapes orbit their center and accumulate the
    /// angle in their `rotation` field.
    fn rotate_about(&mut self, pivot: Point, angle: f64);

    /// Reflects across the infinite line through `a` and `b`, rounding the
    /// resulting coordinates to four decimals.
    fn reflect_across(&mut self, a: Point, b: Point);

    /// Hit test with a grid-space tolerance. `filled` switches closed shapes
    /// between interior and outline tests.
    fn contains_point(&self, p: Point, tolerance: f64, filled: bool) -> bool;
}

/// Discriminant for the shape variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Freehand,
    Line,
    Bezier,
    Rect,
    RoundRect,
    Circle,
    Ellipse,
    Arc,
    Measure,
    MeasureRadius,
    MarkAngle,
    Brace,
    Text,
}

/// Enum wrapper for all drawable shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Freehand(Freehand),
    Line(Line),
    Bezier(Bezier),
    Rect(Rect),
    RoundRect(RoundRect),
    Circle(Circle),
    Ellipse(Ellipse),
    Arc(Arc),
    Measure(Measure),
    MeasureRadius(MeasureRadius),
    MarkAngle(MarkAngle),
    Brace(Brace),
    Text(Text),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Freehand(_) => ShapeKind::Freehand,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Bezier(_) => ShapeKind::Bezier,
            Shape::Rect(_) => ShapeKind::Rect,
            Shape::RoundRect(_) => ShapeKind::RoundRect,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
            Shape::Arc(_) => ShapeKind::Arc,
            Shape::Measure(_) => ShapeKind::Measure,
            Shape::MeasureRadius(_) => ShapeKind::MeasureRadius,
            Shape::MarkAngle(_) => ShapeKind::MarkAngle,
            Shape::Brace(_) => ShapeKind::Brace,
            Shape::Text(_) => ShapeKind::Text,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind() {
            ShapeKind::Freehand => "Freehand",
            ShapeKind::Line => "Line",
            ShapeKind::Bezier => "Bezier",
            ShapeKind::Rect => "Rectangle",
            ShapeKind::RoundRect => "Rounded Rectangle",
            ShapeKind::Circle => "Circle",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::Arc => "Arc",
            ShapeKind::Measure => "Measure",
            ShapeKind::MeasureRadius => "Radius Measure",
            ShapeKind::MarkAngle => "Angle Mark",
            ShapeKind::Brace => "Brace",
            ShapeKind::Text => "Text",
        }
    }

    /// Box-based shapes anchor on a center/bounding box and accumulate
    /// rotation instead of rotating their stored coordinates.
    pub fn is_box_based(&self) -> bool {
        matches!(
            self.kind(),
            ShapeKind::Rect
                | ShapeKind::RoundRect
                | ShapeKind::Circle
                | ShapeKind::Ellipse
                | ShapeKind::Arc
                | ShapeKind::Text
        )
    }

    /// Accumulated rotation in radians; zero for point-based shapes.
    pub fn rotation(&self) -> f64 {
        match self {
            Shape::Rect(s) => s.rotation,
            Shape::RoundRect(s) => s.rotation,
            Shape::Circle(s) => s.rotation,
            Shape::Ellipse(s) => s.rotation,
            Shape::Arc(s) => s.rotation,
            Shape::Text(s) => s.rotation,
            _ => 0.0,
        }
    }

    /// The shape's type-specific center: the stored center for center-defined
    /// shapes, the bounding-box center otherwise.
    pub fn center(&self) -> Point {
        match self {
            Shape::Circle(s) => s.center,
            Shape::Ellipse(s) => s.center,
            Shape::Arc(s) => s.center,
            Shape::Text(s) => s.anchor,
            _ => self.bounds().center(),
        }
    }

    /// First endpoint for point-based shapes (`None` for box-based kinds).
    pub fn start_point(&self) -> Option<Point> {
        match self {
            Shape::Freehand(s) => Some(s.start()),
            Shape::Line(s) => Some(s.start),
            Shape::Bezier(s) => Some(s.start),
            Shape::Measure(s) => Some(s.start),
            Shape::MeasureRadius(s) => Some(s.start),
            Shape::MarkAngle(s) => Some(s.vertex),
            Shape::Brace(s) => Some(s.start),
            _ => None,
        }
    }

    /// Second endpoint for point-based shapes.
    pub fn end_point(&self) -> Option<Point> {
        match self {
            Shape::Freehand(s) => Some(s.end()),
            Shape::Line(s) => Some(s.end),
            Shape::Bezier(s) => Some(s.end),
            Shape::Measure(s) => Some(s.end),
            Shape::MeasureRadius(s) => Some(s.end),
            Shape::MarkAngle(s) => Some(s.toward),
            Shape::Brace(s) => Some(s.end),
            _ => None,
        }
    }
}

impl CanvasShape for Shape {
    fn bounds(&self) -> Bounds {
        match self {
            Shape::Freehand(s) => s.bounds(),
            Shape::Line(s) => s.bounds(),
            Shape::Bezier(s) => s.bounds(),
            Shape::Rect(s) => s.bounds(),
            Shape::RoundRect(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
            Shape::Ellipse(s) => s.bounds(),
            Shape::Arc(s) => s.bounds(),
            Shape::Measure(s) => s.bounds(),
            Shape::MeasureRadius(s) => s.bounds(),
            Shape::MarkAngle(s) => s.bounds(),
            Shape::Brace(s) => s.bounds(),
            Shape::Text(s) => s.bounds(),
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Shape::Freehand(s) => s.translate(dx, dy),
            Shape::Line(s) => s.translate(dx, dy),
            Shape::Bezier(s) => s.translate(dx, dy),
            Shape::Rect(s) => s.translate(dx, dy),
            Shape::RoundRect(s) => s.translate(dx, dy),
            Shape::Circle(s) => s.translate(dx, dy),
            Shape::Ellipse(s) => s.translate(dx, dy),
            Shape::Arc(s) => s.translate(dx, dy),
            Shape::Measure(s) => s.translate(dx, dy),
            Shape::MeasureRadius(s) => s.translate(dx, dy),
            Shape::MarkAngle(s) => s.translate(dx, dy),
            Shape::Brace(s) => s.translate(dx, dy),
            Shape::Text(s) => s.translate(dx, dy),
        }
    }

    fn rotate_about(&mut self, pivot: Point, angle: f64) {
        match self {
            Shape::Freehand(s) => s.rotate_about(pivot, angle),
            Shape::Line(s) => s.rotate_about(pivot, angle),
            Shape::Bezier(s) => s.rotate_about(pivot, angle),
            Shape::Rect(s) => s.rotate_about(pivot, angle),
            Shape::RoundRect(s) => s.rotate_about(pivot, angle),
            Shape::Circle(s) => s.rotate_about(pivot, angle),
            Shape::Ellipse(s) => s.rotate_about(pivot, angle),
            Shape::Arc(s) => s.rotate_about(pivot, angle),
            Shape::Measure(s) => s.rotate_about(pivot, angle),
            Shape::MeasureRadius(s) => s.rotate_about(pivot, angle),
            Shape::MarkAngle(s) => s.rotate_about(pivot, angle),
            Shape::Brace(s) => s.rotate_about(pivot, angle),
            Shape::Text(s) => s.rotate_about(pivot, angle),
        }
    }

    fn reflect_across(&mut self, a: Point, b: Point) {
        match self {
            Shape::Freehand(s) => s.reflect_across(a, b),
            Shape::Line(s) => s.reflect_across(a, b),
            Shape::Bezier(s) => s.reflect_across(a, b),
            Shape::Rect(s) => s.reflect_across(a, b),
            Shape::RoundRect(s) => s.reflect_across(a, b),
            Shape::Circle(s) => s.reflect_across(a, b),
            Shape::Ellipse(s) => s.reflect_across(a, b),
            Shape::Arc(s) => s.reflect_across(a, b),
            Shape::Measure(s) => s.reflect_across(a, b),
            Shape::MeasureRadius(s) => s.reflect_across(a, b),
            Shape::MarkAngle(s) => s.reflect_across(a, b),
            Shape::Brace(s) => s.reflect_across(a, b),
            Shape::Text(s) => s.reflect_across(a, b),
        }
    }

    fn contains_point(&self, p: Point, tolerance: f64, filled: bool) -> bool {
        match self {
            Shape::Freehand(s) => s.contains_point(p, tolerance, filled),
            Shape::Line(s) => s.contains_point(p, tolerance, filled),
            Shape::Bezier(s) => s.contains_point(p, tolerance, filled),
            Shape::Rect(s) => s.contains_point(p, tolerance, filled),
            Shape::RoundRect(s) => s.contains_point(p, tolerance, filled),
            Shape::Circle(s) => s.contains_point(p, tolerance, filled),
            Shape::Ellipse(s) => s.contains_point(p, tolerance, filled),
            Shape::Arc(s) => s.contains_point(p, tolerance, filled),
            Shape::Measure(s) => s.contains_point(p, tolerance, filled),
            Shape::MeasureRadius(s) => s.contains_point(p, tolerance, filled),
            Shape::MarkAngle(s) => s.contains_point(p, tolerance, filled),
            Shape::Brace(s) => s.contains_point(p, tolerance, filled),
            Shape::Text(s) => s.contains_point(p, tolerance, filled),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn categories_split_the_variant_set() {
        let boxy = Shape::Rect(Rect::new(Point::ZERO, Point::new(1.0, 1.0)));
        let pointy = Shape::Line(Line::new(Point::ZERO, Point::new(1.0, 1.0)));
        assert!(boxy.is_box_based());
        assert!(!pointy.is_box_based());
        assert!(pointy.start_point().is_some());
        assert!(boxy.start_point().is_none());
    }

    #[test]
    fn point_based_rotation_moves_coordinates_not_rotation() {
        let mut line = Shape::Line(Line::new(Point::new(1.0, 0.0), Point::new(2.0, 0.0)));
        line.rotate_about(Point::ZERO, FRAC_PI_2);
        assert_eq!(line.rotation(), 0.0);
        let start = line.start_point().unwrap();
        assert!((start.x).abs() < 1e-9);
        assert!((start.y - 1.0).abs() < 1e-9);
    }
}
