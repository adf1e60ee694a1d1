//! Property tests for the algebraic laws of the geometry layer.

use figkit_designer::{CanvasShape, Line, Point, Rect, Shape};
use proptest::prelude::*;

use figkit_core::geometry::{reflect_across, snap_half};

fn finite_coord() -> impl Strategy<Value = f64> {
    -1_000.0..1_000.0f64
}

proptest! {
    #[test]
    fn snap_is_idempotent_and_half_unit(v in -10_000.0..10_000.0f64) {
        let snapped = snap_half(v);
        prop_assert_eq!(snap_half(snapped), snapped);
        // A multiple of 0.5 doubles to a whole number.
        let doubled = snapped * 2.0;
        prop_assert!((doubled - doubled.round()).abs() < 1e-9);
    }

    #[test]
    fn point_reflection_is_involutive(
        px in finite_coord(), py in finite_coord(),
        ax in finite_coord(), ay in finite_coord(),
        bx in finite_coord(), by in finite_coord(),
    ) {
        let a = Point::new(ax, ay);
        let b = Point::new(bx, by);
        prop_assume!(a.distance_to(b) > 1.0);
        let p = Point::new(px, py);
        let back = reflect_across(reflect_across(p, a, b), a, b);
        prop_assert!((back.x - p.x).abs() < 1e-6);
        prop_assert!((back.y - p.y).abs() < 1e-6);
    }

    #[test]
    fn line_shape_mirror_is_involutive_within_rounding(
        sx in -100.0..100.0f64, sy in -100.0..100.0f64,
        ex in -100.0..100.0f64, ey in -100.0..100.0f64,
        ax in -100.0..100.0f64, ay in -100.0..100.0f64,
        bx in -100.0..100.0f64, by in -100.0..100.0f64,
    ) {
        let a = Point::new(ax, ay);
        let b = Point::new(bx, by);
        prop_assume!(a.distance_to(b) > 1.0);

        let original = Line::new(Point::new(sx, sy), Point::new(ex, ey));
        let mut shape = Shape::Line(original);
        shape.reflect_across(a, b);
        shape.reflect_across(a, b);

        if let Shape::Line(l) = shape {
            // Coordinates are rounded to 4 decimals per reflection.
            prop_assert!((l.start.x - original.start.x).abs() < 1e-3);
            prop_assert!((l.start.y - original.start.y).abs() < 1e-3);
            prop_assert!((l.end.x - original.end.x).abs() < 1e-3);
            prop_assert!((l.end.y - original.end.y).abs() < 1e-3);
        }
    }

    #[test]
    fn rect_mirror_preserves_size_and_restores_rotation(
        cx in -100.0..100.0f64, cy in -100.0..100.0f64,
        w in 0.5..50.0f64, h in 0.5..50.0f64,
        rot in -3.0..3.0f64,
        ax in -100.0..100.0f64, ay in -100.0..100.0f64,
        bx in -100.0..100.0f64, by in -100.0..100.0f64,
    ) {
        let a = Point::new(ax, ay);
        let b = Point::new(bx, by);
        prop_assume!(a.distance_to(b) > 1.0);

        let mut rect = Rect::new(
            Point::new(cx - w / 2.0, cy - h / 2.0),
            Point::new(cx + w / 2.0, cy + h / 2.0),
        );
        rect.rotation = rot;
        let mut shape = Shape::Rect(rect);

        shape.reflect_across(a, b);
        let mid_bounds = shape.bounds();
        prop_assert!((mid_bounds.width() - w).abs() < 1e-3, "size preserved");
        prop_assert!((mid_bounds.height() - h).abs() < 1e-3);

        shape.reflect_across(a, b);
        let back = shape.bounds().center();
        prop_assert!((back.x - cx).abs() < 1e-3);
        prop_assert!((back.y - cy).abs() < 1e-3);
        prop_assert!((shape.rotation() - rot).abs() < 1e-3, "rotation restored");
    }

    #[test]
    fn snapped_draws_only_contain_half_units(
        x in -50.0..50.0f64, y in -50.0..50.0f64,
    ) {
        let p = Point::new(snap_half(x), snap_half(y));
        prop_assert_eq!(p.x, snap_half(p.x));
        prop_assert_eq!(p.y, snap_half(p.y));
    }
}
