//! Editor state for the interactive canvas.
//!
//! `Editor` owns the canvas plus everything a pointer/keyboard session needs:
//! the gesture state machine, the snapshot undo/redo stacks, the clipboard
//! and the input settings (snap, grid, pattern parameters).
//!
//! Split into submodules:
//! - `pointer`: the pointer-driven gesture state machine
//! - `history`: snapshot undo/redo
//! - `shapes`: clipboard, delete, nudge, annotations, template insertion
//! - `transforms`: mirror, patterns, offset, alignment

mod history;
mod pointer;
mod shapes;
mod transforms;

pub use transforms::Alignment;

use figkit_core::geometry::{snap_half, Point};

use crate::canvas::{Canvas, DrawingMode, DrawingObject};
use crate::handles::Handle;
use crate::model::{Shape, ShapeStyle};

/// The active pointer gesture.
#[derive(Debug, Clone)]
pub(crate) enum Gesture {
    Idle,
    Panning {
        last: (f64, f64),
    },
    BoxSelecting {
        anchor: (f64, f64),
        current: (f64, f64),
        multi: bool,
    },
    Drawing {
        draft: Shape,
        anchor: Point,
    },
    Editing {
        handle: Handle,
        anchor: Point,
        /// Start-of-drag shapes; every pointer-move recomputes from these
        /// plus the total delta.
        originals: Vec<(u64, Shape)>,
        /// Pre-drag collection snapshot, pushed to the undo stack on the
        /// first effective move so an aborted click leaves no history.
        pre_drag: Option<Vec<DrawingObject>>,
    },
}

/// Modifier keys accompanying a pointer-down.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerModifiers {
    /// Toggles selection membership instead of replacing the selection.
    pub toggle: bool,
    /// Arms rubber-band selection instead of pan/edit.
    pub box_select: bool,
}

/// Editor state: canvas + interaction session.
#[derive(Debug, Clone)]
pub struct Editor {
    pub canvas: Canvas,
    pub snap_enabled: bool,
    pub show_grid: bool,
    pub show_axes: bool,
    /// Style applied to newly drawn shapes.
    pub default_style: ShapeStyle,
    /// Instance count used by the armed pattern modes (set from the
    /// parameter panel before the gesture).
    pub pattern_count: u32,
    pub clipboard: Vec<DrawingObject>,
    pub(crate) undo_stack: Vec<Vec<DrawingObject>>,
    pub(crate) redo_stack: Vec<Vec<DrawingObject>>,
    pub(crate) gesture: Gesture,
}

impl Editor {
    pub fn new() -> Self {
        Self {
            canvas: Canvas::new(),
            snap_enabled: true,
            show_grid: true,
            show_axes: true,
            default_style: ShapeStyle::default(),
            pattern_count: 6,
            clipboard: Vec::new(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            gesture: Gesture::Idle,
        }
    }

    /// Creates an editor with a measured viewport.
    pub fn with_canvas_size(width: f64, height: f64) -> Self {
        let mut editor = Self::new();
        editor.canvas.viewport_mut().set_canvas_size(width, height);
        editor
    }

    pub fn mode(&self) -> DrawingMode {
        self.canvas.mode()
    }

    pub fn set_mode(&mut self, mode: DrawingMode) {
        self.canvas.set_mode(mode);
    }

    /// Applies grid snapping to a grid point when enabled. Snapping happens
    /// at gesture-input time so unsnapped intermediate values never reach
    /// the shape collection.
    pub fn snap(&self, p: Point) -> Point {
        if self.snap_enabled {
            Point::new(snap_half(p.x), snap_half(p.y))
        } else {
            p
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.gesture, Gesture::Idle)
    }

    /// The in-progress drawing, for the renderer's preview pass.
    pub fn drawing_draft(&self) -> Option<&Shape> {
        match &self.gesture {
            Gesture::Drawing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// The in-progress rubber-band rectangle in device pixels.
    pub fn box_select_rect(&self) -> Option<((f64, f64), (f64, f64))> {
        match &self.gesture {
            Gesture::BoxSelecting {
                anchor, current, ..
            } => Some((*anchor, *current)),
            _ => None,
        }
    }

    /// Hard reset: back to pan mode, selection cleared, any in-progress
    /// gesture (including a not-yet-committed drawing) discarded.
    pub fn escape(&mut self) {
        self.canvas.set_mode(DrawingMode::Pan);
        self.canvas.deselect_all();
        self.gesture = Gesture::Idle;
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
