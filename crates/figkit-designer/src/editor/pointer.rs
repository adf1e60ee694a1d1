//! The pointer-driven gesture state machine.
//!
//! States: idle, panning, box-selecting, drawing, editing. Transitions are
//! driven by pointer-down/move/up plus the canvas drawing mode. All shape
//! mutation during an edit drag is recomputed from the start-of-drag
//! snapshot plus the total delta, never accumulated per frame.

use std::f64::consts::PI;

use figkit_core::geometry::Point;

use super::{Editor, Gesture, PointerModifiers};
use crate::canvas::DrawingMode;
use crate::handles;
use crate::handles::Handle;
use crate::model::{
    Arc, Bezier, Brace, Circle, Ellipse, Freehand, Line, MarkAngle, Measure, MeasureRadius, Rect,
    RoundRect, Shape, Text,
};
use crate::patterns::CircularPatternParams;

impl Editor {
    pub fn pointer_down(&mut self, px: f64, py: f64, mods: PointerModifiers) {
        match self.mode() {
            DrawingMode::Pan => self.pointer_down_pan(px, py, mods),
            DrawingMode::CircularPattern => {
                // No drag state: the click is the pivot.
                let pivot = self.snap(self.canvas.screen_to_grid(px, py));
                let params = CircularPatternParams::new(pivot, self.pattern_count);
                self.circular_pattern(params);
            }
            _ => {
                let anchor = self.snap(self.canvas.screen_to_grid(px, py));
                let draft = self.new_draft(anchor);
                self.gesture = Gesture::Drawing { draft, anchor };
            }
        }
    }

    fn pointer_down_pan(&mut self, px: f64, py: f64, mods: PointerModifiers) {
        if mods.box_select {
            self.gesture = Gesture::BoxSelecting {
                anchor: (px, py),
                current: (px, py),
                multi: mods.toggle,
            };
            return;
        }

        // Handles take priority over body hits, and only exist for the
        // primary selected shape.
        if let Some(primary) = self.canvas.primary_selected() {
            if let Some(handle) = handles::handle_at(primary, px, py, self.canvas.viewport()) {
                self.begin_edit(handle, px, py);
                return;
            }
        }

        if self.canvas.hit_test_screen(px, py).is_some() {
            let hit = self.canvas.select_at_screen(px, py, mods.toggle);
            let still_selected = hit
                .and_then(|id| self.canvas.store.get(id))
                .map(|o| o.selected)
                .unwrap_or(false);
            // A toggle-click that removed the shape from the selection does
            // not start a drag.
            if still_selected {
                self.begin_edit(Handle::Move, px, py);
            }
        } else {
            self.canvas.deselect_all();
            self.gesture = Gesture::Panning { last: (px, py) };
        }
    }

    fn begin_edit(&mut self, handle: Handle, px: f64, py: f64) {
        let anchor = self.snap(self.canvas.screen_to_grid(px, py));
        let originals: Vec<(u64, Shape)> = self
            .canvas
            .selected_objects()
            .map(|o| (o.id, o.shape.clone()))
            .collect();
        if originals.is_empty() {
            return;
        }
        let pre_drag = Some(self.canvas.store.snapshot());
        self.gesture = Gesture::Editing {
            handle,
            anchor,
            originals,
            pre_drag,
        };
    }

    fn new_draft(&self, anchor: Point) -> Shape {
        match self.mode() {
            DrawingMode::Freehand => Shape::Freehand(Freehand::new(anchor)),
            DrawingMode::Bezier => Shape::Bezier(Bezier::with_default_controls(anchor, anchor)),
            DrawingMode::Rect => Shape::Rect(Rect::new(anchor, anchor)),
            DrawingMode::RoundRect => Shape::RoundRect(RoundRect::new(anchor, anchor, 0.25)),
            DrawingMode::Circle => Shape::Circle(Circle::new(anchor, anchor)),
            DrawingMode::Ellipse => Shape::Ellipse(Ellipse::new(anchor, anchor)),
            DrawingMode::Arc => Shape::Arc(Arc::new(anchor, anchor, 0.0, PI)),
            DrawingMode::Measure => Shape::Measure(Measure::new(anchor, anchor)),
            DrawingMode::MeasureRadius => Shape::MeasureRadius(MeasureRadius::new(anchor, anchor)),
            DrawingMode::MarkAngle => Shape::MarkAngle(MarkAngle::new(anchor, anchor)),
            DrawingMode::Brace => Shape::Brace(Brace::new(anchor, anchor)),
            DrawingMode::Text => Shape::Text(Text::new(anchor, "Text")),
            // MirrorAxis draws a plain segment that is consumed by the
            // mirror operation on pointer-up.
            _ => Shape::Line(Line::new(anchor, anchor)),
        }
    }

    pub fn pointer_move(&mut self, px: f64, py: f64) {
        match &mut self.gesture {
            Gesture::Idle => {}
            Gesture::Panning { last } => {
                let (dx, dy) = (px - last.0, py - last.1);
                *last = (px, py);
                // Raw pixel delta; panning is continuous and never snapped.
                self.canvas.viewport_mut().pan_by(dx, dy);
            }
            Gesture::BoxSelecting { current, .. } => {
                *current = (px, py);
            }
            Gesture::Drawing { .. } => self.update_draft(px, py),
            Gesture::Editing { .. } => self.update_edit(px, py),
        }
    }

    fn update_draft(&mut self, px: f64, py: f64) {
        let raw = self.canvas.screen_to_grid(px, py);
        let snapped = self.snap(raw);
        let Gesture::Drawing { draft, .. } = &mut self.gesture else {
            return;
        };
        match draft {
            // Freehand keeps the unsnapped trail for smoothness.
            Shape::Freehand(s) => s.push(raw),
            Shape::Line(s) => s.end = snapped,
            Shape::Bezier(s) => {
                s.end = snapped;
                let (c1, c2) = Bezier::default_controls(s.start, s.end);
                s.ctrl1 = c1;
                s.ctrl2 = c2;
            }
            Shape::Rect(s) => s.corner2 = snapped,
            Shape::RoundRect(s) => s.corner2 = snapped,
            Shape::Circle(s) => s.rim = snapped,
            Shape::Ellipse(s) => s.rim = snapped,
            Shape::Arc(s) => s.rim = snapped,
            Shape::Measure(s) => s.end = snapped,
            Shape::MeasureRadius(s) => s.end = snapped,
            Shape::MarkAngle(s) => s.toward = snapped,
            Shape::Brace(s) => s.end = snapped,
            Shape::Text(s) => s.anchor = snapped,
        }
    }

    fn update_edit(&mut self, px: f64, py: f64) {
        let grid = self.snap(self.canvas.screen_to_grid(px, py));
        let Gesture::Editing {
            handle,
            anchor,
            originals,
            pre_drag,
        } = &mut self.gesture
        else {
            return;
        };
        let dx = grid.x - anchor.x;
        let dy = grid.y - anchor.y;
        if dx == 0.0 && dy == 0.0 && pre_drag.is_some() {
            return;
        }

        let handle = *handle;
        let originals = originals.clone();
        // First effective move books the pre-drag snapshot; a click with no
        // drag leaves no history entry.
        let snapshot = pre_drag.take();
        if let Some(snapshot) = snapshot {
            self.push_history_snapshot(snapshot);
        }

        for (id, original) in &originals {
            if let Some(obj) = self.canvas.store.get_mut(*id) {
                obj.shape = handles::apply_handle(original, handle, dx, dy);
            }
        }
    }

    pub fn pointer_up(&mut self, _px: f64, _py: f64) {
        let gesture = std::mem::replace(&mut self.gesture, Gesture::Idle);
        match gesture {
            Gesture::BoxSelecting {
                anchor,
                current,
                multi,
            } => {
                let viewport = self.canvas.viewport().clone();
                self.canvas.selection.select_in_screen_rect(
                    &mut self.canvas.store,
                    &viewport,
                    anchor,
                    current,
                    multi,
                );
            }
            Gesture::Drawing { draft, .. } => {
                if self.mode() == DrawingMode::MirrorAxis {
                    if let Shape::Line(axis) = draft {
                        self.mirror_selection(axis.start, axis.end);
                    }
                } else {
                    self.push_history();
                    self.canvas.add_shape(draft, self.default_style.clone());
                }
            }
            // Editing drops its drag snapshot; panning just ends.
            _ => {}
        }
    }

    /// Wheel zoom, keeping the grid point under the cursor stationary.
    pub fn wheel(&mut self, px: f64, py: f64, steps: f64) {
        self.canvas.viewport_mut().zoom_at(px, py, steps);
    }
}
