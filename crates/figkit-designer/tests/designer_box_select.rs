//! Rubber-band selection over screen-space bounding boxes.

use figkit_designer::{Editor, PointerModifiers, Rect, Shape, ShapeStyle};

/// Adds a rectangle whose *screen* bounding box is the given pixel rect.
fn add_screen_rect(editor: &mut Editor, x1: f64, y1: f64, x2: f64, y2: f64) -> u64 {
    let c1 = editor.canvas.screen_to_grid(x1, y1);
    let c2 = editor.canvas.screen_to_grid(x2, y2);
    editor
        .canvas
        .add_shape(Shape::Rect(Rect::new(c1, c2)), ShapeStyle::default())
}

fn box_select(editor: &mut Editor, from: (f64, f64), to: (f64, f64)) {
    editor.pointer_down(
        from.0,
        from.1,
        PointerModifiers {
            box_select: true,
            ..Default::default()
        },
    );
    editor.pointer_move(to.0, to.1);
    editor.pointer_up(to.0, to.1);
}

#[test]
fn test_box_select_intersecting_shapes() {
    let mut editor = Editor::with_canvas_size(800.0, 600.0);
    let a = add_screen_rect(&mut editor, 0.0, 0.0, 10.0, 10.0);
    let b = add_screen_rect(&mut editor, 20.0, 20.0, 30.0, 30.0);
    let c = add_screen_rect(&mut editor, 100.0, 100.0, 110.0, 110.0);

    box_select(&mut editor, (0.0, 0.0), (35.0, 35.0));

    let selected = editor.canvas.selection.selected_ids(&editor.canvas.store);
    assert!(selected.contains(&a), "A intersects the box");
    assert!(selected.contains(&b), "B intersects the box");
    assert!(!selected.contains(&c), "C lies outside the box");
}

#[test]
fn test_touching_edges_do_not_select() {
    let mut editor = Editor::with_canvas_size(800.0, 600.0);
    let d = add_screen_rect(&mut editor, 35.0, 35.0, 45.0, 45.0);

    box_select(&mut editor, (0.0, 0.0), (35.0, 35.0));

    let selected = editor.canvas.selection.selected_ids(&editor.canvas.store);
    assert!(
        !selected.contains(&d),
        "open-interval overlap: touching corners must not select"
    );
}

#[test]
fn test_box_select_skips_guides() {
    let mut editor = Editor::with_canvas_size(800.0, 600.0);
    let guide_id = editor.canvas.store.generate_id();
    let c1 = editor.canvas.screen_to_grid(10.0, 10.0);
    let c2 = editor.canvas.screen_to_grid(30.0, 30.0);
    editor
        .canvas
        .restore_object(figkit_designer::DrawingObject::guide(
            guide_id,
            Shape::Rect(Rect::new(c1, c2)),
        ));

    box_select(&mut editor, (0.0, 0.0), (50.0, 50.0));
    assert_eq!(
        editor.canvas.selection.selected_count(&editor.canvas.store),
        0,
        "guides are never selectable"
    );
}

#[test]
fn test_multi_box_select_adds_to_selection() {
    let mut editor = Editor::with_canvas_size(800.0, 600.0);
    let a = add_screen_rect(&mut editor, 0.0, 0.0, 10.0, 10.0);
    let b = add_screen_rect(&mut editor, 200.0, 200.0, 220.0, 220.0);

    box_select(&mut editor, (0.0, 0.0), (15.0, 15.0));
    editor.pointer_down(
        195.0,
        195.0,
        PointerModifiers {
            box_select: true,
            toggle: true,
        },
    );
    editor.pointer_move(225.0, 225.0);
    editor.pointer_up(225.0, 225.0);

    let selected = editor.canvas.selection.selected_ids(&editor.canvas.store);
    assert!(selected.contains(&a) && selected.contains(&b));
}

#[test]
fn test_box_select_anchor_corner_order_is_irrelevant() {
    let mut editor = Editor::with_canvas_size(800.0, 600.0);
    let a = add_screen_rect(&mut editor, 50.0, 50.0, 60.0, 60.0);

    // Drag from bottom-right to top-left.
    box_select(&mut editor, (70.0, 70.0), (40.0, 40.0));
    let selected = editor.canvas.selection.selected_ids(&editor.canvas.store);
    assert!(selected.contains(&a));
}
