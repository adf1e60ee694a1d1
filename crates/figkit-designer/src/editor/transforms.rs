//! Selection transforms: mirror, linear/circular patterns, inward offset and
//! alignment.
//!
//! Every operation here follows the same contract: it requires a non-empty
//! selection, pushes one history snapshot before mutating, assigns fresh ids
//! to every generated shape, and ends with the selection on the generated
//! shapes (pattern operations keep the originals selected alongside the
//! copies). Rejected parameters degrade to a logged no-op.

use figkit_core::geometry::Point;
use tracing::{debug, warn};

use super::Editor;
use crate::canvas::{DrawingMode, DrawingObject};
use crate::model::{CanvasShape, Circle, Ellipse, Rect, RoundRect, Shape};
use crate::patterns::{CircularPatternParams, LinearPatternParams};

/// Alignment targets for the selection's bounding boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    CenterHorizontal,
    Right,
    Top,
    CenterVertical,
    Bottom,
}

impl Editor {
    /// Reflects the selected shapes across the infinite line through `a`
    /// and `b`, inserting mirrored copies; the copies become the selection.
    pub fn mirror_selection(&mut self, a: Point, b: Point) {
        let source: Vec<DrawingObject> = self
            .canvas
            .store
            .iter()
            .filter(|o| o.selected)
            .cloned()
            .collect();
        if source.is_empty() {
            debug!("mirror: empty selection");
            return;
        }
        let axis_len = a.distance_to(b);
        if axis_len < f64::EPSILON {
            warn!(
                "{}",
                figkit_core::DesignError::DegenerateAxis { length: axis_len }
            );
            return;
        }

        self.push_history();
        self.canvas.deselect_all();

        let mut last_id = None;
        for obj in &source {
            let id = self.canvas.store.generate_id();
            let mut copy = obj.clone();
            copy.id = id;
            copy.shape.reflect_across(a, b);
            copy.selected = true;
            self.canvas.store.insert(copy);
            last_id = Some(id);
        }
        self.canvas.selection.set_selected_id(last_id);
    }

    /// Generates `count - 1` translated copies of each selected shape along
    /// an axis direction. Originals stay in place and in the selection.
    pub fn linear_pattern(&mut self, params: LinearPatternParams) {
        let offsets = match params.offsets() {
            Ok(offsets) => offsets,
            Err(err) => {
                warn!("linear pattern rejected: {err}");
                return;
            }
        };
        let source: Vec<DrawingObject> = self
            .canvas
            .store
            .iter()
            .filter(|o| o.selected)
            .cloned()
            .collect();
        if source.is_empty() {
            debug!("linear pattern: empty selection");
            return;
        }

        self.push_history();
        for obj in &source {
            for (dx, dy) in &offsets {
                let id = self.canvas.store.generate_id();
                let mut copy = obj.clone();
                copy.id = id;
                copy.shape.translate(*dx, *dy);
                copy.selected = true;
                self.canvas.store.insert(copy);
            }
        }
    }

    /// Generates `count - 1` rotated copies of each selected shape around a
    /// pivot, plus one dashed guide circle through the selection's center.
    ///
    /// Point-based shapes rotate every defining coordinate about the pivot;
    /// box-based shapes orbit their center and accumulate the angle in their
    /// `rotation` field (the per-variant `rotate_about` impls carry this
    /// policy). Resets the mode to pan when done.
    pub fn circular_pattern(&mut self, params: CircularPatternParams) {
        let angles = match params.angles() {
            Ok(angles) => angles,
            Err(err) => {
                warn!("circular pattern rejected: {err}");
                return;
            }
        };
        let source: Vec<DrawingObject> = self
            .canvas
            .store
            .iter()
            .filter(|o| o.selected)
            .cloned()
            .collect();
        if source.is_empty() {
            debug!("circular pattern: empty selection");
            return;
        }
        let center = self
            .canvas
            .selection_bounds()
            .map(|b| b.center())
            .unwrap_or(params.pivot);
        let guide_radius = center.distance_to(params.pivot);

        self.push_history();

        let guide_id = self.canvas.store.generate_id();
        self.canvas.store.insert(DrawingObject::guide(
            guide_id,
            Shape::Circle(Circle::with_radius(params.pivot, guide_radius)),
        ));

        for obj in &source {
            for angle in &angles {
                let id = self.canvas.store.generate_id();
                let mut copy = obj.clone();
                copy.id = id;
                copy.shape.rotate_about(params.pivot, *angle);
                copy.selected = true;
                self.canvas.store.insert(copy);
            }
        }
        self.canvas.set_mode(DrawingMode::Pan);
    }

    /// Insets the selected closed shapes by `distance`, inserting the inset
    /// copies; shapes whose inset would collapse to zero or negative size
    /// are skipped, as are unsupported kinds. A fully-skipped offset writes
    /// no history entry at all.
    pub fn offset_selection(&mut self, distance: f64) {
        if !distance.is_finite() || distance <= 0.0 {
            debug!("offset: rejected distance {distance}");
            return;
        }
        let insets: Vec<(DrawingObject, Shape)> = self
            .canvas
            .store
            .iter()
            .filter(|o| o.selected)
            .filter_map(|o| inset_shape(&o.shape, distance).map(|s| (o.clone(), s)))
            .collect();
        if insets.is_empty() {
            debug!("offset: every selected shape skipped");
            return;
        }

        self.push_history();
        self.canvas.deselect_all();

        let mut last_id = None;
        for (source, shape) in insets {
            let id = self.canvas.store.generate_id();
            let mut copy = source;
            copy.id = id;
            copy.shape = shape;
            copy.selected = true;
            self.canvas.store.insert(copy);
            last_id = Some(id);
        }
        self.canvas.selection.set_selected_id(last_id);
    }

    /// Aligns the selected shapes' bounding boxes to a shared edge or
    /// center line (one undoable step; no-op when nothing would move).
    pub fn align_selected(&mut self, alignment: Alignment) {
        let deltas = self.alignment_deltas(alignment);
        if deltas.is_empty() {
            return;
        }
        self.push_history();
        for (id, dx, dy) in deltas {
            if let Some(obj) = self.canvas.store.get_mut(id) {
                obj.shape.translate(dx, dy);
            }
        }
    }

    fn alignment_deltas(&self, alignment: Alignment) -> Vec<(u64, f64, f64)> {
        let selected: Vec<&DrawingObject> =
            self.canvas.store.iter().filter(|o| o.selected).collect();
        if selected.len() < 2 {
            return Vec::new();
        }
        let union = selected
            .iter()
            .map(|o| o.shape.bounds())
            .reduce(|acc, b| acc.union(&b))
            .expect("non-empty selection");

        let mut deltas = Vec::new();
        for obj in selected {
            let b = obj.shape.bounds();
            let (dx, dy) = match alignment {
                Alignment::Left => (union.min_x - b.min_x, 0.0),
                Alignment::Right => (union.max_x - b.max_x, 0.0),
                Alignment::CenterHorizontal => (union.center().x - b.center().x, 0.0),
                Alignment::Top => (0.0, union.max_y - b.max_y),
                Alignment::Bottom => (0.0, union.min_y - b.min_y),
                Alignment::CenterVertical => (0.0, union.center().y - b.center().y),
            };
            if dx.abs() > f64::EPSILON || dy.abs() > f64::EPSILON {
                deltas.push((obj.id, dx, dy));
            }
        }
        deltas
    }
}

/// Analytic inset for the supported closed kinds; `None` skips the shape
/// (unsupported kind, or the inset would produce a non-positive size).
fn inset_shape(shape: &Shape, d: f64) -> Option<Shape> {
    match shape {
        Shape::Rect(r) => {
            let b = r.bounds();
            if b.width() - 2.0 * d <= 0.0 || b.height() - 2.0 * d <= 0.0 {
                return None;
            }
            let mut inner = Rect::new(
                Point::new(b.min_x + d, b.min_y + d),
                Point::new(b.max_x - d, b.max_y - d),
            );
            inner.rotation = r.rotation;
            Some(Shape::Rect(inner))
        }
        Shape::RoundRect(r) => {
            let b = r.bounds();
            let w = b.width() - 2.0 * d;
            let h = b.height() - 2.0 * d;
            if w <= 0.0 || h <= 0.0 {
                return None;
            }
            let mut inner = RoundRect::new(
                Point::new(b.min_x + d, b.min_y + d),
                Point::new(b.max_x - d, b.max_y - d),
                r.corner_radius.min(w.min(h) / 2.0),
            );
            inner.rotation = r.rotation;
            Some(Shape::RoundRect(inner))
        }
        Shape::Circle(c) => {
            let r = c.radius() - d;
            if r <= 0.0 {
                return None;
            }
            let mut inner = Circle::with_radius(c.center, r);
            inner.rotation = c.rotation;
            Some(Shape::Circle(inner))
        }
        Shape::Ellipse(e) => {
            let rx = e.rx() - d;
            let ry = e.ry() - d;
            if rx <= 0.0 || ry <= 0.0 {
                return None;
            }
            let mut inner = Ellipse::with_radii(e.center, rx, ry);
            inner.rotation = e.rotation;
            Some(Shape::Ellipse(inner))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_skips_collapsed_shapes() {
        let circle = Shape::Circle(Circle::with_radius(Point::ZERO, 1.0));
        assert!(inset_shape(&circle, 1.0).is_none());
        let smaller = inset_shape(&circle, 0.5).unwrap();
        if let Shape::Circle(c) = smaller {
            assert!((c.radius() - 0.5).abs() < 1e-9);
        } else {
            unreachable!();
        }
    }

    #[test]
    fn inset_unsupported_kind_is_skipped() {
        let line = Shape::Line(crate::model::Line::new(Point::ZERO, Point::new(1.0, 0.0)));
        assert!(inset_shape(&line, 0.1).is_none());
    }
}
