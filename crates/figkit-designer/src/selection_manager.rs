//! Shape selection state and selection operations.
//!
//! `SelectionManager` is responsible for:
//! - Tracking which shape is the "primary" selected shape
//! - Point-based selection (clicking on shapes, topmost first)
//! - Screen-space rubber-band selection
//! - Multi-select toggling (modifier-click)
//!
//! # Selection Model
//!
//! One shape is the "primary" selection (`selected_id`); any number of
//! shapes can have their `selected` flag set. Guide shapes are never
//! selectable. After an undo/redo snapshot swap, `reconcile` re-derives the
//! primary id from the restored flags so the selection only ever references
//! ids that exist.

use figkit_core::geometry::{Bounds, Point};

use crate::model::CanvasShape;
use crate::shape_store::ShapeStore;
use crate::viewport::Viewport;

/// Returns the topmost non-guide shape within tolerance of the grid point.
///
/// Iterates in reverse draw order so later-drawn shapes occlude earlier
/// ones. `tolerance` applies to geometry; `text_tolerance` is the coarser
/// radius used for text labels.
pub fn hit_test(
    store: &ShapeStore,
    p: Point,
    tolerance: f64,
    text_tolerance: f64,
) -> Option<u64> {
    for obj in store.iter().rev() {
        if obj.guide {
            continue;
        }
        let tol = if matches!(obj.shape, crate::model::Shape::Text(_)) {
            text_tolerance
        } else {
            tolerance
        };
        if obj.shape.contains_point(p, tol, obj.style.is_filled()) {
            return Some(obj.id);
        }
    }
    None
}

#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected_id: Option<u64>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    /// The primary selected shape id, if any.
    pub fn selected_id(&self) -> Option<u64> {
        self.selected_id
    }

    pub fn set_selected_id(&mut self, id: Option<u64>) {
        self.selected_id = id;
    }

    /// Clears the `selected` flag on every shape and the primary id.
    pub fn deselect_all(&mut self, store: &mut ShapeStore) {
        for obj in store.iter_mut() {
            obj.selected = false;
        }
        self.selected_id = None;
    }

    /// Selects every non-guide shape; the topmost becomes primary.
    pub fn select_all(&mut self, store: &mut ShapeStore) {
        let mut last = None;
        for obj in store.iter_mut() {
            if obj.guide {
                continue;
            }
            obj.selected = true;
            last = Some(obj.id);
        }
        self.selected_id = last;
    }

    /// Selects the topmost shape at the given grid point.
    ///
    /// With `multi` false the hit shape becomes the exclusive selection;
    /// with `multi` true the hit shape's membership is toggled without
    /// touching the rest. Clicking empty space without `multi` clears the
    /// selection.
    ///
    /// Returns the id of the shape that was clicked, if any.
    pub fn select_at(
        &mut self,
        store: &mut ShapeStore,
        p: Point,
        tolerance: f64,
        text_tolerance: f64,
        multi: bool,
    ) -> Option<u64> {
        let found = hit_test(store, p, tolerance, text_tolerance);

        match found {
            Some(id) => {
                if multi {
                    let now_selected = {
                        let obj = store.get_mut(id).expect("hit shape exists");
                        obj.selected = !obj.selected;
                        obj.selected
                    };
                    if now_selected {
                        self.selected_id = Some(id);
                    } else if self.selected_id == Some(id) {
                        self.selected_id = store.iter().find(|o| o.selected).map(|o| o.id);
                    }
                } else if !store.get(id).map(|o| o.selected).unwrap_or(false) {
                    // Exclusive select only when the shape was not already
                    // part of the selection, so a body-drag of a
                    // multi-selection does not collapse it.
                    self.deselect_all(store);
                    if let Some(obj) = store.get_mut(id) {
                        obj.selected = true;
                    }
                    self.selected_id = Some(id);
                } else {
                    self.selected_id = Some(id);
                }
            }
            None => {
                if !multi {
                    self.deselect_all(store);
                }
            }
        }
        found
    }

    /// Selects a shape by id.
    pub fn select_id(&mut self, store: &mut ShapeStore, id: u64, multi: bool) {
        if !multi {
            self.deselect_all(store);
        }
        if let Some(obj) = store.get_mut(id) {
            obj.selected = true;
            self.selected_id = Some(id);
        }
    }

    /// Rubber-band selection: selects every non-guide shape whose
    /// screen-space bounding box intersects the device-space rectangle.
    ///
    /// The overlap test is open-interval on both axes — boxes that merely
    /// touch the rectangle's edge are not selected.
    pub fn select_in_screen_rect(
        &mut self,
        store: &mut ShapeStore,
        viewport: &Viewport,
        corner_a: (f64, f64),
        corner_b: (f64, f64),
        multi: bool,
    ) {
        if !multi {
            self.deselect_all(store);
        }
        let rect = Bounds::new(corner_a.0, corner_a.1, corner_b.0, corner_b.1);

        for obj in store.iter_mut() {
            if obj.guide {
                continue;
            }
            let b = obj.shape.bounds();
            let (sx1, sy1) = viewport.grid_to_screen(Point::new(b.min_x, b.min_y));
            let (sx2, sy2) = viewport.grid_to_screen(Point::new(b.max_x, b.max_y));
            let screen_box = Bounds::new(sx1, sy1, sx2, sy2);
            if screen_box.intersects(&rect) {
                obj.selected = true;
                if self.selected_id.is_none() {
                    self.selected_id = Some(obj.id);
                }
            }
        }
    }

    /// Ids of all selected shapes, in draw order.
    pub fn selected_ids(&self, store: &ShapeStore) -> Vec<u64> {
        store.iter().filter(|o| o.selected).map(|o| o.id).collect()
    }

    pub fn selected_count(&self, store: &ShapeStore) -> usize {
        store.iter().filter(|o| o.selected).count()
    }

    /// Re-derives the primary id after the collection was replaced by an
    /// undo/redo snapshot: a primary id that no longer exists falls back to
    /// any restored selected shape.
    pub fn reconcile(&mut self, store: &ShapeStore) {
        let valid = self
            .selected_id
            .map(|id| store.get(id).map(|o| o.selected).unwrap_or(false))
            .unwrap_or(false);
        if !valid {
            self.selected_id = store.iter().find(|o| o.selected).map(|o| o.id);
        }
    }
}
