//! Shape-level editor operations: delete, clipboard, nudge, annotations and
//! template insertion.

use figkit_core::constants::{NUDGE_COARSE, NUDGE_FINE, PASTE_OFFSET_X, PASTE_OFFSET_Y};
use figkit_core::geometry::Point;
use tracing::debug;

use super::Editor;
use crate::canvas::DrawingObject;
use crate::model::{CanvasShape, MeasureRadius, Shape, ShapeStyle};

impl Editor {
    /// Deletes the selected shapes (one undoable step).
    pub fn delete_selected(&mut self) {
        let ids = self.canvas.selection.selected_ids(&self.canvas.store);
        if ids.is_empty() {
            return;
        }
        self.push_history();
        for id in ids {
            self.canvas.store.remove(id);
        }
        self.canvas.selection.set_selected_id(None);
    }

    /// Removes every shape from the canvas (one undoable step).
    pub fn clear_canvas(&mut self) {
        if self.canvas.store.is_empty() {
            return;
        }
        self.push_history();
        self.canvas.clear();
    }

    pub fn select_all(&mut self) {
        self.canvas.select_all();
    }

    /// Copies the selected shapes to the clipboard.
    pub fn copy_selected(&mut self) {
        self.clipboard = self
            .canvas
            .store
            .iter()
            .filter(|o| o.selected)
            .cloned()
            .collect();
    }

    /// Pastes the clipboard with the standard paste offset; the copies
    /// become the selection.
    pub fn paste_clipboard(&mut self) {
        if self.clipboard.is_empty() {
            return;
        }
        let source = self.clipboard.clone();
        self.insert_copies(&source);
    }

    /// Duplicates the selected shapes in place with the paste offset.
    pub fn duplicate_selected(&mut self) {
        let source: Vec<DrawingObject> = self
            .canvas
            .store
            .iter()
            .filter(|o| o.selected)
            .cloned()
            .collect();
        if source.is_empty() {
            return;
        }
        self.insert_copies(&source);
    }

    fn insert_copies(&mut self, source: &[DrawingObject]) {
        self.push_history();
        self.canvas.deselect_all();

        let mut last_id = None;
        for obj in source {
            let id = self.canvas.store.generate_id();
            let mut copy = obj.clone();
            copy.id = id;
            copy.shape.translate(PASTE_OFFSET_X, PASTE_OFFSET_Y);
            copy.selected = true;
            self.canvas.store.insert(copy);
            last_id = Some(id);
        }
        self.canvas.selection.set_selected_id(last_id);
    }

    /// Nudges the selection by one step. `dx`/`dy` are direction signs
    /// (-1, 0, 1); each call is one undoable step regardless of key repeat.
    pub fn nudge_selected(&mut self, dx: f64, dy: f64, coarse: bool) {
        if self.canvas.selection.selected_count(&self.canvas.store) == 0 {
            return;
        }
        let step = if coarse { NUDGE_COARSE } else { NUDGE_FINE };
        self.push_history();
        for obj in self.canvas.store.iter_mut().filter(|o| o.selected) {
            obj.shape.translate(dx * step, dy * step);
        }
    }

    /// Convenience operation: when exactly one circle is selected, inserts a
    /// radius-measure shape spanning its diameter, pre-labelled with the
    /// formatted diameter value. The annotation becomes the selection.
    pub fn add_diameter_annotation(&mut self) {
        if self.canvas.selection.selected_count(&self.canvas.store) != 1 {
            return;
        }
        let Some(obj) = self.canvas.primary_selected() else {
            return;
        };
        let Shape::Circle(circle) = &obj.shape else {
            debug!("diameter annotation requires a circle selection");
            return;
        };
        let center = circle.center;
        let r = circle.radius();

        let mut measure = MeasureRadius::new(
            Point::new(center.x - r, center.y),
            Point::new(center.x + r, center.y),
        );
        measure.label = Some(format!("{:.2}", 2.0 * r));
        measure.label_anchor = Some(center);

        self.push_history();
        self.canvas.deselect_all();
        let id = self
            .canvas
            .add_shape(Shape::MeasureRadius(measure), self.default_style.clone());
        self.canvas.selection.select_id(&mut self.canvas.store, id, false);
    }

    /// Template-collaborator entry point: appends ready-made shapes with
    /// fresh ids and selects them.
    pub fn insert_shapes(&mut self, shapes: Vec<(Shape, ShapeStyle)>) {
        if shapes.is_empty() {
            return;
        }
        self.push_history();
        self.canvas.deselect_all();
        let mut last_id = None;
        for (shape, style) in shapes {
            let id = self.canvas.add_shape(shape, style);
            if let Some(obj) = self.canvas.store.get_mut(id) {
                obj.selected = true;
            }
            last_id = Some(id);
        }
        self.canvas.selection.set_selected_id(last_id);
    }
}
