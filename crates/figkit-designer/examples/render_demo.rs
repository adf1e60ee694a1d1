//! Builds a small figure through the editor API, renders it and writes a
//! PNG next to the working directory. Doubles as an end-to-end smoke path:
//! drawing gestures, a pattern operation, selection and rasterization.

use anyhow::Result;
use figkit_designer::{
    CircularPatternParams, Color, DrawingMode, Editor, Point, PointerModifiers, ShapeStyle,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut editor = Editor::with_canvas_size(800.0, 600.0);
    editor.default_style = ShapeStyle {
        stroke: Color::rgb(40, 90, 160),
        ..ShapeStyle::default()
    };

    // Draw a circle by dragging center to rim.
    editor.set_mode(DrawingMode::Circle);
    let (cx, cy) = editor.canvas.grid_to_screen(Point::new(0.0, 2.0));
    let (rx, ry) = editor.canvas.grid_to_screen(Point::new(1.0, 2.0));
    editor.pointer_down(cx, cy, PointerModifiers::default());
    editor.pointer_move(rx, ry);
    editor.pointer_up(rx, ry);

    // Select it and spin a six-instance polar pattern around the origin.
    editor.set_mode(DrawingMode::Pan);
    editor.pointer_down(rx, ry, PointerModifiers::default());
    editor.pointer_up(rx, ry);
    editor.circular_pattern(CircularPatternParams::new(Point::ZERO, 6));

    let image = figkit_designer::render_canvas(&editor, 800, 600)?;
    image.save("render_demo.png")?;
    tracing::info!(
        shapes = editor.canvas.shape_count(),
        "wrote render_demo.png"
    );
    Ok(())
}
