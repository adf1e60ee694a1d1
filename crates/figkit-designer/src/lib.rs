//! # FigKit Designer
//!
//! The interactive canvas engine of the FigKit figure editor: an infinite
//! Cartesian grid on which geometric diagrams (line work, primitives and
//! dimension annotations) are drawn, edited through direct-manipulation
//! handles, and multiplied through parametric transforms.
//!
//! ## Core Components
//!
//! - **Shape model**: a closed sum type over the thirteen drawable kinds,
//!   each with its own anchor semantics
//! - **Viewport**: screen/grid coordinate transform with zoom and pan
//! - **Hit-test & handles**: per-kind geometric tests and named grips
//! - **Editor**: the pointer-driven interaction state machine with
//!   snapshot undo/redo
//! - **Patterns & transforms**: mirror, linear/polar arrays, inward offset
//! - **Renderer**: stateless tiny-skia rasterization
//!
//! ## Architecture
//!
//! ```text
//! Editor (gestures, history, clipboard)
//!   └── Canvas
//!         ├── ShapeStore (draw-ordered objects)
//!         ├── SelectionManager
//!         └── Viewport (screen <-> grid)
//!
//! Renderer (Editor -> image buffer, every state change)
//! Export boundary (non-guide shapes -> external collaborator)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use figkit_designer::{DrawingMode, Editor, PointerModifiers};
//!
//! let mut editor = Editor::with_canvas_size(800.0, 600.0);
//! editor.set_mode(DrawingMode::Line);
//! editor.pointer_down(100.0, 100.0, PointerModifiers::default());
//! editor.pointer_move(300.0, 200.0);
//! editor.pointer_up(300.0, 200.0);
//! assert_eq!(editor.canvas.shape_count(), 1);
//! ```

pub mod canvas;
pub mod editor;
pub mod export;
pub mod handles;
pub mod model;
pub mod patterns;
pub mod renderer;
pub mod selection_manager;
pub mod shape_store;
pub mod viewport;

pub use canvas::{Canvas, DrawingMode, DrawingObject};
pub use editor::{Alignment, Editor, PointerModifiers};
pub use export::ExportRequest;
pub use handles::{apply_handle, handle_at, handle_positions, Handle};
pub use model::{
    Arc, ArrowStyle, Bezier, Brace, CanvasShape, Circle, Color, Ellipse, Freehand, HatchStyle,
    Line, LineStyle, MarkAngle, Measure, MeasureRadius, Rect, RoundRect, Shape, ShapeKind,
    ShapeStyle, Text,
};
pub use patterns::{CircularPatternParams, Direction, LinearPatternParams};
pub use renderer::render_canvas;
pub use selection_manager::SelectionManager;
pub use shape_store::ShapeStore;
pub use viewport::Viewport;

// Re-export the core kernel types used throughout the public API.
pub use figkit_core::geometry::{Bounds, Point};
