use figkit_core::constants::TEXT_BOUNDS_HALF_UNITS;
use figkit_core::geometry::{line_angle, reflect_across, rotate_about, round4, Bounds, Point};
use serde::{Deserialize, Serialize};

use super::CanvasShape;

/// A text label anchored at a single point.
///
/// Glyph layout belongs to the UI layer; the core carries the anchor, the
/// content string and a nominal bounding box for selection purposes. The
/// label hitbox is deliberately coarser than line geometry (the caller
/// passes the text hit radius as the tolerance).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub anchor: Point,
    pub content: String,
    pub rotation: f64,
}

impl Text {
    pub fn new(anchor: Point, content: impl Into<String>) -> Self {
        Self {
            anchor,
            content: content.into(),
            rotation: 0.0,
        }
    }
}

impl CanvasShape for Text {
    fn bounds(&self) -> Bounds {
        Bounds::new(
            self.anchor.x - TEXT_BOUNDS_HALF_UNITS,
            self.anchor.y - TEXT_BOUNDS_HALF_UNITS,
            self.anchor.x + TEXT_BOUNDS_HALF_UNITS,
            self.anchor.y + TEXT_BOUNDS_HALF_UNITS,
        )
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.anchor = self.anchor.translated(dx, dy);
    }

    fn rotate_about(&mut self, pivot: Point, angle: f64) {
        self.anchor = rotate_about(self.anchor, pivot, angle);
        self.rotation += angle;
    }

    fn reflect_across(&mut self, a: Point, b: Point) {
        self.anchor = reflect_across(self.anchor, a, b).rounded4();
        self.rotation = round4(2.0 * line_angle(a, b) - self.rotation);
    }

    fn contains_point(&self, p: Point, tolerance: f64, _filled: bool) -> bool {
        self.anchor.distance_to(p) <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_hitbox() {
        let t = Text::new(Point::new(2.0, 2.0), "A");
        assert!(t.contains_point(Point::new(2.5, 2.0), 0.8, false));
        assert!(!t.contains_point(Point::new(4.0, 2.0), 0.8, false));
    }
}
