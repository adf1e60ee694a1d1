//! Inward offset: per-kind inset rules, the skip policy and its history
//! behavior.

use figkit_designer::{
    CanvasShape, Circle, Editor, Ellipse, Line, Point, Rect, Shape, ShapeStyle,
};

fn add_selected(editor: &mut Editor, shape: Shape) -> u64 {
    let id = editor.canvas.add_shape(shape, ShapeStyle::default());
    editor
        .canvas
        .selection
        .select_id(&mut editor.canvas.store, id, true);
    id
}

#[test]
fn test_circle_offset_skip_rule() {
    let mut editor = Editor::with_canvas_size(800.0, 600.0);
    let id = add_selected(&mut editor, Shape::Circle(Circle::with_radius(Point::ZERO, 1.0)));

    // Radius would hit zero: skipped entirely.
    editor.offset_selection(1.0);
    assert_eq!(editor.canvas.shape_count(), 1);

    // Half the radius survives.
    editor
        .canvas
        .selection
        .select_id(&mut editor.canvas.store, id, false);
    editor.offset_selection(0.5);
    assert_eq!(editor.canvas.shape_count(), 2);
    let inset = editor
        .canvas
        .store
        .iter()
        .find(|o| o.selected)
        .expect("inset circle selected");
    if let Shape::Circle(c) = &inset.shape {
        assert!((c.radius() - 0.5).abs() < 1e-9);
    } else {
        panic!("inset must be a circle");
    }
}

#[test]
fn test_fully_skipped_offset_writes_no_history() {
    let mut editor = Editor::with_canvas_size(800.0, 600.0);
    add_selected(&mut editor, Shape::Circle(Circle::with_radius(Point::ZERO, 1.0)));
    let depth = editor.undo_depth();

    editor.offset_selection(2.0);

    assert_eq!(editor.canvas.shape_count(), 1);
    assert_eq!(
        editor.undo_depth(),
        depth,
        "a fully-skipped offset must not leave a no-op undo frame"
    );
}

#[test]
fn test_rect_offset_shrinks_all_edges() {
    let mut editor = Editor::with_canvas_size(800.0, 600.0);
    add_selected(
        &mut editor,
        Shape::Rect(Rect::new(Point::new(0.0, 0.0), Point::new(4.0, 2.0))),
    );

    editor.offset_selection(0.5);

    let inset = editor
        .canvas
        .store
        .iter()
        .find(|o| o.selected)
        .expect("inset rect");
    let b = inset.shape.bounds();
    assert_eq!((b.min_x, b.min_y, b.max_x, b.max_y), (0.5, 0.5, 3.5, 1.5));
}

#[test]
fn test_rect_offset_skips_when_height_collapses() {
    let mut editor = Editor::with_canvas_size(800.0, 600.0);
    add_selected(
        &mut editor,
        Shape::Rect(Rect::new(Point::new(0.0, 0.0), Point::new(4.0, 2.0))),
    );

    // Height 2 - 2*1 = 0: not a valid shape, skipped.
    editor.offset_selection(1.0);
    assert_eq!(editor.canvas.shape_count(), 1);
}

#[test]
fn test_ellipse_offset_shrinks_both_radii_independently() {
    let mut editor = Editor::with_canvas_size(800.0, 600.0);
    add_selected(
        &mut editor,
        Shape::Ellipse(Ellipse::with_radii(Point::new(1.0, 1.0), 3.0, 1.0)),
    );

    editor.offset_selection(0.5);
    let inset = editor
        .canvas
        .store
        .iter()
        .find(|o| o.selected)
        .expect("inset ellipse");
    if let Shape::Ellipse(e) = &inset.shape {
        assert!((e.rx() - 2.5).abs() < 1e-9);
        assert!((e.ry() - 0.5).abs() < 1e-9);
    } else {
        panic!("inset must be an ellipse");
    }

    // The second inset would collapse ry.
    editor.offset_selection(0.75);
    assert_eq!(editor.canvas.shape_count(), 2);
}

#[test]
fn test_mixed_selection_skips_only_collapsed_shapes() {
    let mut editor = Editor::with_canvas_size(800.0, 600.0);
    add_selected(&mut editor, Shape::Circle(Circle::with_radius(Point::ZERO, 0.4)));
    add_selected(
        &mut editor,
        Shape::Rect(Rect::new(Point::new(2.0, 0.0), Point::new(6.0, 4.0))),
    );
    add_selected(
        &mut editor,
        Shape::Line(Line::new(Point::ZERO, Point::new(1.0, 0.0))),
    );

    editor.offset_selection(0.5);

    // Only the rect survives: the circle collapses, the line is unsupported.
    assert_eq!(editor.canvas.shape_count(), 4);
    let selected: Vec<_> = editor
        .canvas
        .store
        .iter()
        .filter(|o| o.selected)
        .collect();
    assert_eq!(selected.len(), 1);
    assert!(matches!(selected[0].shape, Shape::Rect(_)));
}
