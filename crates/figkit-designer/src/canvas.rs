//! Canvas: the aggregate of shape storage, selection and viewport.

use figkit_core::constants::{HIT_TOLERANCE_PX, TEXT_HIT_RADIUS_PX};
use figkit_core::geometry::{Bounds, Point};
use serde::{Deserialize, Serialize};

use crate::model::{CanvasShape, Shape, ShapeStyle};
use crate::selection_manager::SelectionManager;
use crate::shape_store::ShapeStore;
use crate::viewport::Viewport;

/// Drawing modes for the canvas. `Pan` is the base mode (select / move /
/// pan); the shape modes arm a drag-to-draw gesture; `MirrorAxis` and
/// `CircularPattern` arm the corresponding transform operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingMode {
    Pan,
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
    MirrorAxis,
    CircularPattern,
}

/// A shape on the canvas together with its identity and presentation state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingObject {
    pub id: u64,
    pub name: String,
    pub shape: Shape,
    pub style: ShapeStyle,
    pub selected: bool,
    /// Construction-only shapes are rendered but never hit-tested, selected
    /// or exported.
    pub guide: bool,
}

impl DrawingObject {
    pub fn new(id: u64, shape: Shape) -> Self {
        Self {
            id,
            name: shape.kind_name().to_string(),
            shape,
            style: ShapeStyle::default(),
            selected: false,
            guide: false,
        }
    }

    pub fn with_style(id: u64, shape: Shape, style: ShapeStyle) -> Self {
        Self {
            id,
            name: shape.kind_name().to_string(),
            shape,
            style,
            selected: false,
            guide: false,
        }
    }

    /// Builds a construction guide (dashed, unselectable).
    pub fn guide(id: u64, shape: Shape) -> Self {
        Self {
            id,
            name: shape.kind_name().to_string(),
            shape,
            style: ShapeStyle::guide(),
            selected: false,
            guide: true,
        }
    }
}

/// Canvas state managing shapes, selection and the viewport.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub store: ShapeStore,
    pub selection: SelectionManager,
    viewport: Viewport,
    mode: DrawingMode,
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            store: ShapeStore::new(),
            selection: SelectionManager::new(),
            viewport: Viewport::new(),
            mode: DrawingMode::Pan,
        }
    }

    /// Creates a canvas with a measured viewport.
    pub fn with_size(width: f64, height: f64) -> Self {
        let mut canvas = Self::new();
        canvas.viewport.set_canvas_size(width, height);
        canvas
    }

    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: DrawingMode) {
        self.mode = mode;
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn shape_count(&self) -> usize {
        self.store.len()
    }

    /// Hit tolerance in grid units at the current zoom.
    pub fn grid_tolerance(&self) -> f64 {
        HIT_TOLERANCE_PX / self.viewport.zoom()
    }

    /// Coarser text-label tolerance in grid units at the current zoom.
    pub fn text_tolerance(&self) -> f64 {
        TEXT_HIT_RADIUS_PX / self.viewport.zoom()
    }

    /// Adds a shape with the given style; returns its fresh id.
    pub fn add_shape(&mut self, shape: Shape, style: ShapeStyle) -> u64 {
        let id = self.store.generate_id();
        self.store
            .insert(DrawingObject::with_style(id, shape, style));
        id
    }

    /// Re-inserts an object (undo/redo and transform helpers).
    pub fn restore_object(&mut self, obj: DrawingObject) {
        self.store.insert(obj);
    }

    pub fn remove_shape(&mut self, id: u64) -> Option<DrawingObject> {
        let removed = self.store.remove(id);
        if removed.is_some() {
            self.selection.reconcile(&self.store);
        }
        removed
    }

    /// Topmost non-guide shape under the device point, if any.
    pub fn hit_test_screen(&self, px: f64, py: f64) -> Option<u64> {
        let p = self.viewport.screen_to_grid(px, py);
        crate::selection_manager::hit_test(
            &self.store,
            p,
            self.grid_tolerance(),
            self.text_tolerance(),
        )
    }

    /// Click-selection at a device point.
    pub fn select_at_screen(&mut self, px: f64, py: f64, multi: bool) -> Option<u64> {
        let p = self.viewport.screen_to_grid(px, py);
        let tol = self.grid_tolerance();
        let text_tol = self.text_tolerance();
        self.selection
            .select_at(&mut self.store, p, tol, text_tol, multi)
    }

    /// Deselects all shapes.
    pub fn deselect_all(&mut self) {
        self.selection.deselect_all(&mut self.store);
    }

    /// Selects all non-guide shapes.
    pub fn select_all(&mut self) {
        self.selection.select_all(&mut self.store);
    }

    /// Union bounding box of the selected shapes, in grid coordinates.
    pub fn selection_bounds(&self) -> Option<Bounds> {
        let mut bounds: Option<Bounds> = None;
        for obj in self.store.iter().filter(|o| o.selected) {
            let b = obj.shape.bounds();
            bounds = Some(match bounds {
                Some(acc) => acc.union(&b),
                None => b,
            });
        }
        bounds
    }

    /// Union bounding box of all shapes (guides included, they render too).
    pub fn content_bounds(&self) -> Option<Bounds> {
        let mut bounds: Option<Bounds> = None;
        for obj in self.store.iter() {
            let b = obj.shape.bounds();
            bounds = Some(match bounds {
                Some(acc) => acc.union(&b),
                None => b,
            });
        }
        bounds
    }

    /// Fits the viewport to all content; an empty canvas resets the view.
    pub fn fit_all_shapes(&mut self) {
        match self.content_bounds() {
            Some(bounds) => self.viewport.fit_to_bounds(&bounds),
            None => self.viewport.reset(),
        }
    }

    pub fn selected_objects(&self) -> impl Iterator<Item = &DrawingObject> {
        self.store.iter().filter(|o| o.selected)
    }

    /// The primary selected object, if the selection is non-empty.
    pub fn primary_selected(&self) -> Option<&DrawingObject> {
        self.selection
            .selected_id()
            .and_then(|id| self.store.get(id))
    }

    pub fn clear(&mut self) {
        self.store.clear();
        self.selection.set_selected_id(None);
    }

    pub fn screen_to_grid(&self, px: f64, py: f64) -> Point {
        self.viewport.screen_to_grid(px, py)
    }

    pub fn grid_to_screen(&self, p: Point) -> (f64, f64) {
        self.viewport.grid_to_screen(p)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Circle, Line};

    #[test]
    fn topmost_shape_wins_hit_test() {
        let mut canvas = Canvas::with_size(800.0, 600.0);
        let below = canvas.add_shape(
            Shape::Line(Line::new(Point::new(-1.0, 0.0), Point::new(1.0, 0.0))),
            ShapeStyle::default(),
        );
        let above = canvas.add_shape(
            Shape::Line(Line::new(Point::new(0.0, -1.0), Point::new(0.0, 1.0))),
            ShapeStyle::default(),
        );
        // Both lines pass through the origin; the later one must win.
        let (px, py) = canvas.grid_to_screen(Point::ZERO);
        assert_eq!(canvas.hit_test_screen(px, py), Some(above));
        assert_ne!(canvas.hit_test_screen(px, py), Some(below));
    }

    #[test]
    fn guides_are_never_hit() {
        let mut canvas = Canvas::with_size(800.0, 600.0);
        let id = canvas.store.generate_id();
        let guide = DrawingObject::guide(
            id,
            Shape::Circle(Circle::with_radius(Point::ZERO, 2.0)),
        );
        canvas.restore_object(guide);
        let (px, py) = canvas.grid_to_screen(Point::new(2.0, 0.0));
        assert_eq!(canvas.hit_test_screen(px, py), None);
    }
}
