//! Hit-test tolerance boundaries in device pixels.

use figkit_designer::{Circle, Editor, Point, Shape, ShapeStyle, Text};

/// Zoom of 8 px per grid unit makes the 8 px tolerance exactly one grid
/// unit, so the boundary cases below use exact binary fractions.
fn editor_at_zoom_8() -> Editor {
    let mut editor = Editor::with_canvas_size(800.0, 600.0);
    editor.canvas.viewport_mut().set_zoom(8.0);
    editor
}

#[test]
fn test_unfilled_circle_rim_boundary() {
    let mut editor = editor_at_zoom_8();
    let id = editor.canvas.add_shape(
        Shape::Circle(Circle::with_radius(Point::ZERO, 1.0)),
        ShapeStyle::default(),
    );

    // Exactly tolerance (8 px = 1.0 grid unit) outside the rim: a hit.
    let (px, py) = editor.canvas.grid_to_screen(Point::new(2.0, 0.0));
    assert_eq!(editor.canvas.hit_test_screen(px, py), Some(id));

    // One pixel beyond tolerance: a miss.
    let (px, py) = editor.canvas.grid_to_screen(Point::new(2.0 + 1.0 / 8.0, 0.0));
    assert_eq!(editor.canvas.hit_test_screen(px, py), None);

    // Deep inside an unfilled circle: a miss.
    let (px, py) = editor.canvas.grid_to_screen(Point::ZERO);
    assert_eq!(editor.canvas.hit_test_screen(px, py), None);
}

#[test]
fn test_filled_circle_hits_on_interior() {
    let mut editor = editor_at_zoom_8();
    let id = editor.canvas.add_shape(
        Shape::Circle(Circle::with_radius(Point::ZERO, 1.0)),
        ShapeStyle {
            fill: Some(figkit_designer::Color::rgb(10, 10, 10)),
            ..ShapeStyle::default()
        },
    );
    let (px, py) = editor.canvas.grid_to_screen(Point::ZERO);
    assert_eq!(editor.canvas.hit_test_screen(px, py), Some(id));
}

#[test]
fn test_text_hitbox_is_coarser_than_geometry() {
    let mut editor = editor_at_zoom_8();
    let text_id = editor.canvas.add_shape(
        Shape::Text(Text::new(Point::ZERO, "label")),
        ShapeStyle::default(),
    );

    // 15 px from the anchor: within the 16 px text radius.
    let (ax, ay) = editor.canvas.grid_to_screen(Point::ZERO);
    assert_eq!(editor.canvas.hit_test_screen(ax + 15.0, ay), Some(text_id));
    // 17 px away: outside it.
    assert_eq!(editor.canvas.hit_test_screen(ax + 17.0, ay), None);
}

#[test]
fn test_line_segment_tolerance() {
    let mut editor = editor_at_zoom_8();
    let id = editor.canvas.add_shape(
        Shape::Line(figkit_designer::Line::new(
            Point::new(-2.0, 0.0),
            Point::new(2.0, 0.0),
        )),
        ShapeStyle::default(),
    );
    let (px, py) = editor.canvas.grid_to_screen(Point::new(0.0, 1.0));
    assert_eq!(editor.canvas.hit_test_screen(px, py), Some(id));
    let (px, py) = editor.canvas.grid_to_screen(Point::new(0.0, 1.25));
    assert_eq!(editor.canvas.hit_test_screen(px, py), None);
}
