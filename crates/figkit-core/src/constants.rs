//! Shared constants for the canvas engine.

/// Hit-test tolerance around shape geometry, in device pixels.
pub const HIT_TOLERANCE_PX: f64 = 8.0;

/// Hit-test tolerance around a manipulation handle, in device pixels.
pub const HANDLE_TOLERANCE_PX: f64 = 8.0;

/// Text labels use a coarser hitbox than line geometry, in device pixels.
pub const TEXT_HIT_RADIUS_PX: f64 = 16.0;

/// Nominal half-extent of a text label's bounding box, in grid units.
/// Glyph metrics live in the UI layer; the core only needs a stable box
/// for selection rectangles and handle placement.
pub const TEXT_BOUNDS_HALF_UNITS: f64 = 0.5;

/// Grid snapping rounds coordinates to the nearest multiple of this step.
pub const SNAP_STEP: f64 = 0.5;

/// Minimum zoom, in pixels per grid unit.
pub const MIN_ZOOM: f64 = 5.0;

/// Maximum zoom, in pixels per grid unit.
pub const MAX_ZOOM: f64 = 500.0;

/// Multiplicative zoom change per wheel tick.
pub const ZOOM_WHEEL_FACTOR: f64 = 1.2;

/// Fine nudge step (arrow key), in grid units.
pub const NUDGE_FINE: f64 = 0.1;

/// Coarse nudge step (shift + arrow key), in grid units.
pub const NUDGE_COARSE: f64 = 0.5;

/// Offset applied to duplicated/pasted shapes, in grid units.
pub const PASTE_OFFSET_X: f64 = 2.0;
pub const PASTE_OFFSET_Y: f64 = -2.0;

/// Fraction of the viewport reserved as padding by fit-to-view.
pub const VIEW_PADDING: f64 = 0.05;

/// Default zoom for a fresh viewport, in pixels per grid unit.
pub const DEFAULT_ZOOM: f64 = 50.0;
