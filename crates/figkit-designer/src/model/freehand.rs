use figkit_core::geometry::{point_segment_distance, reflect_across, rotate_about, Bounds, Point};
use serde::{Deserialize, Serialize};

use super::CanvasShape;

/// A freehand polyline: the ordered trail of pointer positions.
///
/// Points are recorded unsnapped for smoothness; only the gesture's anchor
/// goes through snapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Freehand {
    pub points: Vec<Point>,
}

impl Freehand {
    pub fn new(start: Point) -> Self {
        Self {
            points: vec![start],
        }
    }

    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    pub fn start(&self) -> Point {
        self.points.first().copied().unwrap_or(Point::ZERO)
    }

    pub fn end(&self) -> Point {
        self.points.last().copied().unwrap_or(Point::ZERO)
    }

    pub fn move_start(&mut self, p: Point) {
        if let Some(first) = self.points.first_mut() {
            *first = p;
        }
    }

    pub fn move_end(&mut self, p: Point) {
        if let Some(last) = self.points.last_mut() {
            *last = p;
        }
    }
}

impl CanvasShape for Freehand {
    fn bounds(&self) -> Bounds {
        Bounds::from_points(self.points.iter().copied())
            .unwrap_or(Bounds::new(0.0, 0.0, 0.0, 0.0))
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.points {
            *p = p.translated(dx, dy);
        }
    }

    fn rotate_about(&mut self, pivot: Point, angle: f64) {
        for p in &mut self.points {
            *p = rotate_about(*p, pivot, angle);
        }
    }

    fn reflect_across(&mut self, a: Point, b: Point) {
        for p in &mut self.points {
            *p = reflect_across(*p, a, b).rounded4();
        }
    }

    fn contains_point(&self, p: Point, tolerance: f64, _filled: bool) -> bool {
        match self.points.len() {
            0 => false,
            1 => self.points[0].distance_to(p) <= tolerance,
            _ => self
                .points
                .windows(2)
                .any(|w| point_segment_distance(p, w[0], w[1]) <= tolerance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_on_any_segment() {
        let mut f = Freehand::new(Point::new(0.0, 0.0));
        f.push(Point::new(5.0, 0.0));
        f.push(Point::new(5.0, 5.0));
        assert!(f.contains_point(Point::new(5.2, 2.5), 0.5, false));
        assert!(!f.contains_point(Point::new(2.5, 2.5), 0.5, false));
    }

    #[test]
    fn endpoint_edits_touch_only_one_point() {
        let mut f = Freehand::new(Point::new(0.0, 0.0));
        f.push(Point::new(1.0, 1.0));
        f.push(Point::new(2.0, 0.0));
        f.move_end(Point::new(3.0, 0.0));
        assert_eq!(f.points[1], Point::new(1.0, 1.0));
        assert_eq!(f.end(), Point::new(3.0, 0.0));
    }
}
