//! Mirror operation: reflection semantics per shape category, selection
//! hand-off and the degenerate-axis policy.

use std::f64::consts::{FRAC_PI_2, PI};

use figkit_designer::{
    Arc, CanvasShape, DrawingMode, Editor, Line, Point, PointerModifiers, Rect, Shape, ShapeStyle,
};

fn add_selected(editor: &mut Editor, shape: Shape) -> u64 {
    let id = editor.canvas.add_shape(shape, ShapeStyle::default());
    editor
        .canvas
        .selection
        .select_id(&mut editor.canvas.store, id, false);
    id
}

#[test]
fn test_mirror_creates_selected_copies_and_keeps_originals() {
    let mut editor = Editor::with_canvas_size(800.0, 600.0);
    let original = add_selected(
        &mut editor,
        Shape::Line(Line::new(Point::new(1.0, 0.0), Point::new(2.0, 1.0))),
    );

    // Mirror across the Y axis.
    editor.mirror_selection(Point::new(0.0, -1.0), Point::new(0.0, 1.0));

    assert_eq!(editor.canvas.shape_count(), 2);
    let orig = editor.canvas.store.get(original).unwrap();
    assert!(!orig.selected, "selection moves to the copies");
    if let Shape::Line(l) = &orig.shape {
        assert_eq!(l.start, Point::new(1.0, 0.0), "originals do not move");
    }

    let copy = editor
        .canvas
        .store
        .iter()
        .find(|o| o.id != original)
        .unwrap();
    assert!(copy.selected);
    if let Shape::Line(l) = &copy.shape {
        assert_eq!(l.start, Point::new(-1.0, 0.0));
        assert_eq!(l.end, Point::new(-2.0, 1.0));
    } else {
        panic!("copy must be a line");
    }
}

#[test]
fn test_mirror_twice_is_involution_for_point_based() {
    let mut editor = Editor::with_canvas_size(800.0, 600.0);
    add_selected(
        &mut editor,
        Shape::Line(Line::new(Point::new(0.7, 0.3), Point::new(2.9, 1.4))),
    );
    let a = Point::new(-1.0, 0.25);
    let b = Point::new(2.0, 3.5);

    editor.mirror_selection(a, b);
    editor.mirror_selection(a, b);

    // The second mirror acts on the first copies; its output must land back
    // on the original coordinates within the 1e-4 rounding tolerance.
    let lines: Vec<Line> = editor
        .canvas
        .store
        .iter()
        .filter(|o| o.selected)
        .filter_map(|o| match &o.shape {
            Shape::Line(l) => Some(*l),
            _ => None,
        })
        .collect();
    assert_eq!(lines.len(), 1);
    assert!((lines[0].start.x - 0.7).abs() < 1e-3);
    assert!((lines[0].start.y - 0.3).abs() < 1e-3);
    assert!((lines[0].end.x - 2.9).abs() < 1e-3);
    assert!((lines[0].end.y - 1.4).abs() < 1e-3);
}

#[test]
fn test_mirror_box_based_recomputes_rotation() {
    let mut editor = Editor::with_canvas_size(800.0, 600.0);
    let mut rect = Rect::new(Point::new(1.0, 1.0), Point::new(3.0, 2.0));
    rect.rotation = 0.4;
    add_selected(&mut editor, Shape::Rect(rect));

    // Mirror across the X axis (angle 0): rotation becomes -0.4 and the
    // center's Y negates while the local size is preserved.
    editor.mirror_selection(Point::new(-5.0, 0.0), Point::new(5.0, 0.0));

    let copy = editor
        .canvas
        .store
        .iter()
        .find(|o| o.selected)
        .expect("mirrored copy selected");
    assert!((copy.shape.rotation() + 0.4).abs() < 1e-4);
    let b = copy.shape.bounds();
    assert!((b.width() - 2.0).abs() < 1e-9);
    assert!((b.height() - 1.0).abs() < 1e-9);
    assert!((b.center().y + 1.5).abs() < 1e-4);
    assert!((b.center().x - 2.0).abs() < 1e-4);
}

#[test]
fn test_mirror_arc_swaps_and_negates_sweep() {
    let mut editor = Editor::with_canvas_size(800.0, 600.0);
    add_selected(
        &mut editor,
        Shape::Arc(Arc::new(
            Point::new(1.0, 1.0),
            Point::new(3.0, 1.0),
            FRAC_PI_2,
            PI,
        )),
    );

    editor.mirror_selection(Point::new(-5.0, 0.0), Point::new(5.0, 0.0));

    let copy = editor
        .canvas
        .store
        .iter()
        .find(|o| o.selected)
        .expect("mirrored arc");
    if let Shape::Arc(arc) = &copy.shape {
        assert!((arc.start_angle + PI).abs() < 1e-4, "start = -old_end");
        assert!((arc.end_angle + FRAC_PI_2).abs() < 1e-4, "end = -old_start");
        assert!((arc.center.y + 1.0).abs() < 1e-4);
    } else {
        panic!("copy must be an arc");
    }
}

#[test]
fn test_degenerate_axis_is_a_noop() {
    let mut editor = Editor::with_canvas_size(800.0, 600.0);
    add_selected(
        &mut editor,
        Shape::Line(Line::new(Point::ZERO, Point::new(1.0, 1.0))),
    );
    let depth = editor.undo_depth();

    let p = Point::new(2.0, 2.0);
    editor.mirror_selection(p, p);

    assert_eq!(editor.canvas.shape_count(), 1);
    assert_eq!(editor.undo_depth(), depth);
}

#[test]
fn test_mirror_axis_gesture_feeds_the_operation() {
    let mut editor = Editor::with_canvas_size(800.0, 600.0);
    add_selected(
        &mut editor,
        Shape::Line(Line::new(Point::new(1.0, 0.0), Point::new(2.0, 0.0))),
    );

    // Draw the axis along x = 0; the drawn segment itself must not be
    // committed as a shape.
    editor.set_mode(DrawingMode::MirrorAxis);
    let (x0, y0) = editor.canvas.grid_to_screen(Point::new(0.0, -2.0));
    let (x1, y1) = editor.canvas.grid_to_screen(Point::new(0.0, 2.0));
    editor.pointer_down(x0, y0, PointerModifiers::default());
    editor.pointer_move(x1, y1);
    editor.pointer_up(x1, y1);

    assert_eq!(editor.canvas.shape_count(), 2, "original plus mirrored copy");
    let copy = editor
        .canvas
        .store
        .iter()
        .find(|o| o.selected)
        .expect("copy selected");
    if let Shape::Line(l) = &copy.shape {
        assert!((l.start.x + 1.0).abs() < 1e-4);
        assert!((l.end.x + 2.0).abs() < 1e-4);
    } else {
        panic!("copy must be a line");
    }
}
