//! Canvas renderer.
//!
//! Rasterizes the full editor state (grid, axes, shapes with style and
//! hatch, selection overlay, in-progress gesture previews) into an image
//! buffer using tiny-skia. Rendering is stateless: the same editor state
//! always produces the same image, so the caller may re-render on every
//! state change.

use figkit_core::error::DesignError;
use figkit_core::geometry::{line_angle, Bounds, Point};
use image::{Rgb, RgbImage};
use tiny_skia::{
    FillRule, Mask, Paint, PathBuilder, Pixmap, Stroke, StrokeDash, Transform,
};

use crate::canvas::{DrawingMode, DrawingObject};
use crate::editor::Editor;
use crate::handles;
use crate::model::{ArrowStyle, CanvasShape, Color, HatchStyle, LineStyle, Shape, ShapeStyle};

const BASE_STROKE_PX: f32 = 1.6;
const HANDLE_SIZE_PX: f32 = 7.0;
const ARROW_LEN_PX: f64 = 10.0;

fn skia_color(c: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn bg_color() -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(250, 250, 248, 255)
}

fn grid_color() -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(222, 224, 228, 255)
}

fn axis_color() -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(160, 164, 170, 255)
}

fn selection_color() -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(30, 144, 255, 255)
}

/// Renders the editor state to an RGB image of the given pixel size.
pub fn render_canvas(editor: &Editor, width: u32, height: u32) -> Result<RgbImage, DesignError> {
    let mut pixmap =
        Pixmap::new(width, height).ok_or(DesignError::RenderTarget { width, height })?;
    pixmap.fill(bg_color());

    let viewport = editor.canvas.viewport();
    let zoom = viewport.zoom() as f32;
    let (offset_x, offset_y) = viewport.offset();
    let cx = viewport.canvas_width() as f32 / 2.0;
    let cy = viewport.canvas_height() as f32 / 2.0;

    // World -> screen: scale by zoom with the Y axis flipped, then move the
    // grid origin to the viewport center plus the pan offset.
    let world = Transform::from_scale(zoom, -zoom)
        .post_translate(cx + offset_x as f32, cy + offset_y as f32);

    if editor.show_grid {
        draw_grid(&mut pixmap, editor, width, height);
    }
    if editor.show_axes {
        draw_axes(&mut pixmap, editor, width, height);
    }

    for obj in editor.canvas.store.iter() {
        draw_object(&mut pixmap, obj, world, zoom);
    }
    for obj in editor.canvas.store.iter().filter(|o| o.selected) {
        draw_selection_overlay(&mut pixmap, editor, obj);
    }

    if let Some(draft) = editor.drawing_draft() {
        let style = if editor.mode() == DrawingMode::MirrorAxis {
            ShapeStyle::guide()
        } else {
            editor.default_style.clone()
        };
        draw_shape(&mut pixmap, draft, &style, world, zoom);
    }
    if let Some((a, b)) = editor.box_select_rect() {
        draw_box_select(&mut pixmap, a, b);
    }

    let data = pixmap.data();
    Ok(RgbImage::from_fn(width, height, |x, y| {
        let idx = ((y * width + x) * 4) as usize;
        Rgb([data[idx], data[idx + 1], data[idx + 2]])
    }))
}

/// Visible grid range in whole grid units.
fn visible_range(editor: &Editor, width: u32, height: u32) -> (i64, i64, i64, i64) {
    let viewport = editor.canvas.viewport();
    let top_left = viewport.screen_to_grid(0.0, 0.0);
    let bottom_right = viewport.screen_to_grid(width as f64, height as f64);
    (
        top_left.x.floor() as i64 - 1,
        bottom_right.x.ceil() as i64 + 1,
        bottom_right.y.floor() as i64 - 1,
        top_left.y.ceil() as i64 + 1,
    )
}

fn draw_grid(pixmap: &mut Pixmap, editor: &Editor, width: u32, height: u32) {
    let viewport = editor.canvas.viewport();
    let (min_x, max_x, min_y, max_y) = visible_range(editor, width, height);

    let mut pb = PathBuilder::new();
    for gx in min_x..=max_x {
        let (sx, _) = viewport.grid_to_screen(Point::new(gx as f64, 0.0));
        pb.move_to(sx as f32, 0.0);
        pb.line_to(sx as f32, height as f32);
    }
    for gy in min_y..=max_y {
        let (_, sy) = viewport.grid_to_screen(Point::new(0.0, gy as f64));
        pb.move_to(0.0, sy as f32);
        pb.line_to(width as f32, sy as f32);
    }
    let Some(path) = pb.finish() else { return };

    let mut paint = Paint::default();
    paint.set_color(grid_color());
    paint.anti_alias = false;
    let stroke = Stroke {
        width: 1.0,
        ..Default::default()
    };
    pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
}

fn draw_axes(pixmap: &mut Pixmap, editor: &Editor, width: u32, height: u32) {
    let viewport = editor.canvas.viewport();
    let (origin_x, origin_y) = viewport.grid_to_screen(Point::ZERO);

    let mut pb = PathBuilder::new();
    if origin_y >= 0.0 && origin_y < height as f64 {
        pb.move_to(0.0, origin_y as f32);
        pb.line_to(width as f32, origin_y as f32);
    }
    if origin_x >= 0.0 && origin_x < width as f64 {
        pb.move_to(origin_x as f32, 0.0);
        pb.line_to(origin_x as f32, height as f32);
    }
    let Some(path) = pb.finish() else { return };

    let mut paint = Paint::default();
    paint.set_color(axis_color());
    paint.anti_alias = false;
    let stroke = Stroke {
        width: 1.0,
        ..Default::default()
    };
    pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
}

fn draw_object(pixmap: &mut Pixmap, obj: &DrawingObject, world: Transform, zoom: f32) {
    draw_shape(pixmap, &obj.shape, &obj.style, world, zoom);
}

fn draw_shape(
    pixmap: &mut Pixmap,
    shape: &Shape,
    style: &ShapeStyle,
    world: Transform,
    zoom: f32,
) {
    // Box-based rotation is applied at render time, about the shape's own
    // center, never baked into the stored coordinates.
    let transform = if shape.is_box_based() && shape.rotation().abs() > f64::EPSILON {
        let c = shape.center();
        world.pre_concat(Transform::from_rotate_at(
            shape.rotation().to_degrees() as f32,
            c.x as f32,
            c.y as f32,
        ))
    } else {
        world
    };

    let Some(path) = shape_path(shape, zoom) else {
        return;
    };

    if let Some(fill) = style.fill {
        if is_closed(shape) {
            let mut paint = Paint::default();
            paint.set_color(skia_color(fill));
            paint.anti_alias = true;
            pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
        }
    }
    if style.hatch != HatchStyle::None && is_closed(shape) {
        draw_hatch(pixmap, &path, style, transform);
    }

    let mut paint = Paint::default();
    paint.set_color(skia_color(style.stroke));
    paint.anti_alias = true;
    let stroke = Stroke {
        width: BASE_STROKE_PX * style.line_width as f32 / zoom,
        dash: dash_pattern(style.line_style, zoom),
        ..Default::default()
    };
    pixmap.stroke_path(&path, &paint, &stroke, transform, None);

    if style.arrow != ArrowStyle::None {
        draw_arrowheads(pixmap, shape, style, transform, zoom);
    }
}

fn dash_pattern(line_style: LineStyle, zoom: f32) -> Option<StrokeDash> {
    match line_style {
        LineStyle::Solid => None,
        LineStyle::Dashed => StrokeDash::new(vec![8.0 / zoom, 5.0 / zoom], 0.0),
        LineStyle::Dotted => StrokeDash::new(vec![1.5 / zoom, 4.0 / zoom], 0.0),
    }
}

fn is_closed(shape: &Shape) -> bool {
    matches!(
        shape,
        Shape::Rect(_) | Shape::RoundRect(_) | Shape::Circle(_) | Shape::Ellipse(_)
    )
}

/// Builds the outline path for a shape in world coordinates (pre-rotation).
fn shape_path(shape: &Shape, zoom: f32) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    match shape {
        Shape::Line(s) => {
            pb.move_to(s.start.x as f32, s.start.y as f32);
            pb.line_to(s.end.x as f32, s.end.y as f32);
        }
        Shape::Bezier(s) => {
            pb.move_to(s.start.x as f32, s.start.y as f32);
            pb.cubic_to(
                s.ctrl1.x as f32,
                s.ctrl1.y as f32,
                s.ctrl2.x as f32,
                s.ctrl2.y as f32,
                s.end.x as f32,
                s.end.y as f32,
            );
        }
        Shape::Freehand(s) => {
            let mut points = s.points.iter();
            let first = points.next()?;
            pb.move_to(first.x as f32, first.y as f32);
            for p in points {
                pb.line_to(p.x as f32, p.y as f32);
            }
        }
        Shape::Rect(s) => {
            let b = s.bounds();
            let rect = tiny_skia::Rect::from_ltrb(
                b.min_x as f32,
                b.min_y as f32,
                b.max_x as f32,
                b.max_y as f32,
            )?;
            pb.push_rect(rect);
        }
        Shape::RoundRect(s) => {
            round_rect_path(&mut pb, s.bounds(), s.corner_radius);
        }
        Shape::Circle(s) => {
            return PathBuilder::from_circle(
                s.center.x as f32,
                s.center.y as f32,
                s.radius() as f32,
            );
        }
        Shape::Ellipse(s) => {
            let b = s.bounds();
            let rect = tiny_skia::Rect::from_ltrb(
                b.min_x as f32,
                b.min_y as f32,
                b.max_x as f32,
                b.max_y as f32,
            )?;
            return PathBuilder::from_oval(rect);
        }
        Shape::Arc(s) => {
            arc_polyline(&mut pb, s.center, s.radius(), s.start_angle, s.end_angle);
        }
        Shape::Measure(s) => {
            // Witness lines plus the displaced dimension line.
            let (d1, d2) = s.dimension_line();
            pb.move_to(s.start.x as f32, s.start.y as f32);
            pb.line_to(d1.x as f32, d1.y as f32);
            pb.move_to(s.end.x as f32, s.end.y as f32);
            pb.line_to(d2.x as f32, d2.y as f32);
            pb.move_to(d1.x as f32, d1.y as f32);
            pb.line_to(d2.x as f32, d2.y as f32);
        }
        Shape::MeasureRadius(s) => {
            pb.move_to(s.start.x as f32, s.start.y as f32);
            pb.line_to(s.end.x as f32, s.end.y as f32);
        }
        Shape::MarkAngle(s) => {
            let ray = line_angle(s.vertex, s.toward);
            pb.move_to(s.vertex.x as f32, s.vertex.y as f32);
            pb.line_to(s.toward.x as f32, s.toward.y as f32);
            arc_polyline(
                &mut pb,
                s.vertex,
                s.radius() * 0.6,
                ray - std::f64::consts::FRAC_PI_4,
                ray,
            );
        }
        Shape::Brace(s) => {
            // A shallow bow perpendicular to the span.
            let mid = s.start.midpoint(s.end);
            let len = s.start.distance_to(s.end).max(f64::EPSILON);
            let bulge = 0.15 * len.min(2.0);
            let nx = -(s.end.y - s.start.y) / len * bulge;
            let ny = (s.end.x - s.start.x) / len * bulge;
            pb.move_to(s.start.x as f32, s.start.y as f32);
            pb.quad_to(
                (mid.x + nx) as f32,
                (mid.y + ny) as f32,
                s.end.x as f32,
                s.end.y as f32,
            );
        }
        Shape::Text(s) => {
            // Glyph layout is the UI layer's concern; the core marks the
            // anchor with a small cross so the label is locatable.
            let half = 4.0 / zoom;
            pb.move_to((s.anchor.x - half as f64) as f32, s.anchor.y as f32);
            pb.line_to((s.anchor.x + half as f64) as f32, s.anchor.y as f32);
            pb.move_to(s.anchor.x as f32, (s.anchor.y - half as f64) as f32);
            pb.line_to(s.anchor.x as f32, (s.anchor.y + half as f64) as f32);
        }
    }
    pb.finish()
}

fn round_rect_path(pb: &mut PathBuilder, b: Bounds, radius: f64) {
    let r = radius.min(b.width() / 2.0).min(b.height() / 2.0).max(0.0) as f32;
    let (x1, y1, x2, y2) = (
        b.min_x as f32,
        b.min_y as f32,
        b.max_x as f32,
        b.max_y as f32,
    );
    if r <= 0.0 {
        if let Some(rect) = tiny_skia::Rect::from_ltrb(x1, y1, x2, y2) {
            pb.push_rect(rect);
        }
        return;
    }
    pb.move_to(x1 + r, y1);
    pb.line_to(x2 - r, y1);
    pb.quad_to(x2, y1, x2, y1 + r);
    pb.line_to(x2, y2 - r);
    pb.quad_to(x2, y2, x2 - r, y2);
    pb.line_to(x1 + r, y2);
    pb.quad_to(x1, y2, x1, y2 - r);
    pb.line_to(x1, y1 + r);
    pb.quad_to(x1, y1, x1 + r, y1);
    pb.close();
}

fn arc_polyline(pb: &mut PathBuilder, center: Point, radius: f64, start: f64, end: f64) {
    let mut sweep = end - start;
    while sweep <= 0.0 {
        sweep += std::f64::consts::TAU;
    }
    let steps = ((sweep.abs() / 0.1).ceil() as usize).clamp(8, 128);
    for i in 0..=steps {
        let a = start + sweep * i as f64 / steps as f64;
        let x = (center.x + radius * a.cos()) as f32;
        let y = (center.y + radius * a.sin()) as f32;
        if i == 0 {
            pb.move_to(x, y);
        } else {
            pb.line_to(x, y);
        }
    }
}

fn draw_hatch(pixmap: &mut Pixmap, path: &tiny_skia::Path, style: &ShapeStyle, transform: Transform) {
    let Some(mut mask) = Mask::new(pixmap.width(), pixmap.height()) else {
        return;
    };
    mask.fill_path(path, FillRule::Winding, true, transform);

    let screen = match path.clone().transform(transform) {
        Some(p) => p.bounds(),
        None => return,
    };

    let mut paint = Paint::default();
    paint.set_color(skia_color(style.stroke));
    paint.anti_alias = true;
    let stroke = Stroke {
        width: 1.0,
        ..Default::default()
    };

    let step = 9.0_f32;
    let mut pb = PathBuilder::new();
    match style.hatch {
        HatchStyle::Lines | HatchStyle::Grid => {
            // Diagonal lines; the grid variant adds the crossing set.
            let span = screen.width() + screen.height();
            let mut offset = -screen.height();
            while offset < span {
                pb.move_to(screen.left() + offset, screen.top());
                pb.line_to(screen.left() + offset + screen.height(), screen.bottom());
                offset += step;
            }
            if style.hatch == HatchStyle::Grid {
                let mut offset = 0.0;
                while offset < span {
                    pb.move_to(screen.left() + offset, screen.bottom());
                    pb.line_to(screen.left() + offset - screen.height(), screen.top());
                    offset += step;
                }
            }
        }
        HatchStyle::Dots => {
            let mut y = screen.top();
            while y < screen.bottom() {
                let mut x = screen.left();
                while x < screen.right() {
                    if let Some(dot) = PathBuilder::from_circle(x, y, 1.0) {
                        let mut dot_paint = Paint::default();
                        dot_paint.set_color(skia_color(style.stroke));
                        dot_paint.anti_alias = true;
                        pixmap.fill_path(
                            &dot,
                            &dot_paint,
                            FillRule::Winding,
                            Transform::identity(),
                            Some(&mask),
                        );
                    }
                    x += step;
                }
                y += step;
            }
            return;
        }
        HatchStyle::None => return,
    }

    if let Some(lines) = pb.finish() {
        pixmap.stroke_path(&lines, &paint, &stroke, Transform::identity(), Some(&mask));
    }
}

fn draw_arrowheads(
    pixmap: &mut Pixmap,
    shape: &Shape,
    style: &ShapeStyle,
    transform: Transform,
    zoom: f32,
) {
    let (Some(start), Some(end)) = (shape.start_point(), shape.end_point()) else {
        return;
    };
    if start.distance_to(end) < f64::EPSILON {
        return;
    }
    let len = ARROW_LEN_PX as f64 / zoom as f64;
    let mut pb = PathBuilder::new();
    if matches!(style.arrow, ArrowStyle::Start | ArrowStyle::Both) {
        arrow_triangle(&mut pb, start, line_angle(end, start), len);
    }
    if matches!(style.arrow, ArrowStyle::End | ArrowStyle::Both) {
        arrow_triangle(&mut pb, end, line_angle(start, end), len);
    }
    let Some(path) = pb.finish() else { return };
    let mut paint = Paint::default();
    paint.set_color(skia_color(style.stroke));
    paint.anti_alias = true;
    pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
}

fn arrow_triangle(pb: &mut PathBuilder, tip: Point, heading: f64, len: f64) {
    let spread = 0.45;
    let left = heading + std::f64::consts::PI - spread;
    let right = heading + std::f64::consts::PI + spread;
    pb.move_to(tip.x as f32, tip.y as f32);
    pb.line_to(
        (tip.x + len * left.cos()) as f32,
        (tip.y + len * left.sin()) as f32,
    );
    pb.line_to(
        (tip.x + len * right.cos()) as f32,
        (tip.y + len * right.sin()) as f32,
    );
    pb.close();
}

fn draw_selection_overlay(pixmap: &mut Pixmap, editor: &Editor, obj: &DrawingObject) {
    let viewport = editor.canvas.viewport();
    let b = obj.shape.bounds();
    let (sx1, sy1) = viewport.grid_to_screen(Point::new(b.min_x, b.min_y));
    let (sx2, sy2) = viewport.grid_to_screen(Point::new(b.max_x, b.max_y));

    let mut paint = Paint::default();
    paint.set_color(selection_color());
    paint.anti_alias = true;
    let stroke = Stroke {
        width: 1.0,
        dash: StrokeDash::new(vec![4.0, 3.0], 0.0),
        ..Default::default()
    };

    if let Some(rect) = tiny_skia::Rect::from_ltrb(
        sx1.min(sx2) as f32,
        sy1.min(sy2) as f32,
        sx1.max(sx2) as f32,
        sy1.max(sy2) as f32,
    ) {
        let path = PathBuilder::from_rect(rect);
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    // Handles are drawn for the primary selected shape only.
    if editor.canvas.selection.selected_id() != Some(obj.id) {
        return;
    }
    for (_, pos) in handles::handle_positions(&obj.shape) {
        let (hx, hy) = viewport.grid_to_screen(pos);
        if let Some(rect) = tiny_skia::Rect::from_xywh(
            hx as f32 - HANDLE_SIZE_PX / 2.0,
            hy as f32 - HANDLE_SIZE_PX / 2.0,
            HANDLE_SIZE_PX,
            HANDLE_SIZE_PX,
        ) {
            let path = PathBuilder::from_rect(rect);
            pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }
}

fn draw_box_select(pixmap: &mut Pixmap, a: (f64, f64), b: (f64, f64)) {
    let Some(rect) = tiny_skia::Rect::from_ltrb(
        a.0.min(b.0) as f32,
        a.1.min(b.1) as f32,
        a.0.max(b.0) as f32,
        a.1.max(b.1) as f32,
    ) else {
        return;
    };
    let path = PathBuilder::from_rect(rect);

    let mut fill = Paint::default();
    fill.set_color(tiny_skia::Color::from_rgba8(30, 144, 255, 40));
    fill.anti_alias = false;
    pixmap.fill_path(&path, &fill, FillRule::Winding, Transform::identity(), None);

    let mut paint = Paint::default();
    paint.set_color(selection_color());
    paint.anti_alias = false;
    let stroke = Stroke {
        width: 1.0,
        ..Default::default()
    };
    pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
}
