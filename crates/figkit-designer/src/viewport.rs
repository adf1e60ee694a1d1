//! Viewport and coordinate transformation for the canvas.
//!
//! Maps between device pixels (Y down, origin at the top-left of the
//! viewport) and grid coordinates (Y up, infinite plane). The grid origin
//! projects to the viewport center displaced by the pan offset; `zoom` is
//! the scale in pixels per grid unit.

use figkit_core::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, VIEW_PADDING, ZOOM_WHEEL_FACTOR};
use figkit_core::geometry::{Bounds, Point};

#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    offset_x: f64,
    offset_y: f64,
    canvas_width: f64,
    canvas_height: f64,
}

impl Viewport {
    /// Creates an unmeasured viewport. Until `set_canvas_size` is called the
    /// screen-to-grid mapping is undefined and resolves to the grid origin.
    pub fn new() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            offset_x: 0.0,
            offset_y: 0.0,
            canvas_width: 0.0,
            canvas_height: 0.0,
        }
    }

    pub fn with_size(width: f64, height: f64) -> Self {
        let mut vp = Self::new();
        vp.set_canvas_size(width, height);
        vp
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Records the measured viewport size (called on mount and resize).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    pub fn is_measured(&self) -> bool {
        self.canvas_width > 0.0 && self.canvas_height > 0.0
    }

    /// Zoom in pixels per grid unit.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    pub fn set_offset(&mut self, x: f64, y: f64) {
        self.offset_x = x;
        self.offset_y = y;
    }

    /// Pans by a raw pixel delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Converts device pixels to grid coordinates.
    ///
    /// Returns the grid origin when the viewport has not been measured yet;
    /// callers treat that as a harmless null mapping rather than an error.
    pub fn screen_to_grid(&self, px: f64, py: f64) -> Point {
        if !self.is_measured() {
            return Point::ZERO;
        }
        let cx = self.canvas_width / 2.0;
        let cy = self.canvas_height / 2.0;
        Point::new(
            (px - cx - self.offset_x) / self.zoom,
            // Screen Y grows downward, grid Y grows upward.
            -(py - cy - self.offset_y) / self.zoom,
        )
    }

    /// Converts grid coordinates to device pixels.
    pub fn grid_to_screen(&self, p: Point) -> (f64, f64) {
        let cx = self.canvas_width / 2.0;
        let cy = self.canvas_height / 2.0;
        (
            cx + self.offset_x + p.x * self.zoom,
            cy + self.offset_y - p.y * self.zoom,
        )
    }

    /// Applies one wheel tick: positive steps zoom in, negative zoom out,
    /// keeping the grid point under the cursor stationary on screen.
    pub fn zoom_at(&mut self, px: f64, py: f64, steps: f64) {
        let factor = ZOOM_WHEEL_FACTOR.powf(steps);
        self.zoom_to(px, py, self.zoom * factor);
    }

    fn zoom_to(&mut self, px: f64, py: f64, new_zoom: f64) {
        let anchor = self.screen_to_grid(px, py);
        self.set_zoom(new_zoom);
        if !self.is_measured() {
            return;
        }
        let cx = self.canvas_width / 2.0;
        let cy = self.canvas_height / 2.0;
        // Solve the forward transform for the offset that pins the anchor.
        self.offset_x = px - cx - anchor.x * self.zoom;
        self.offset_y = py - cy + anchor.y * self.zoom;
    }

    /// Fits the given grid-space bounds into the viewport with the standard
    /// padding margin, centering the content.
    pub fn fit_to_bounds(&mut self, bounds: &Bounds) {
        if !self.is_measured() || bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return;
        }
        let usable = 1.0 - VIEW_PADDING * 2.0;
        let zoom_x = self.canvas_width * usable / bounds.width();
        let zoom_y = self.canvas_height * usable / bounds.height();
        self.set_zoom(zoom_x.min(zoom_y));

        let center = bounds.center();
        self.offset_x = -center.x * self.zoom;
        self.offset_y = center.y * self.zoom;
    }

    /// Resets zoom and pan to the defaults.
    pub fn reset(&mut self) {
        self.zoom = DEFAULT_ZOOM;
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}
