//! Pattern operations: parameters and pure generators for linear and
//! circular (polar) arrays.
//!
//! The generators only produce offsets/angles; applying them to the
//! selection (history snapshot, guide circle, per-category rotation policy)
//! is the editor's job.

use anyhow::Result;
use figkit_core::error::DesignError;
use figkit_core::geometry::Point;
use std::f64::consts::TAU;

/// Axis-aligned directions for linear patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn unit(&self) -> (f64, f64) {
        match self {
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
            Direction::Up => (0.0, 1.0),
            Direction::Down => (0.0, -1.0),
        }
    }
}

/// Parameters for a linear pattern.
#[derive(Debug, Clone, Copy)]
pub struct LinearPatternParams {
    pub direction: Direction,
    /// Total instance count including the original; must be at least 2.
    pub count: u32,
    /// Step between instances in grid units.
    pub spacing: f64,
}

impl LinearPatternParams {
    pub fn new(direction: Direction, count: u32, spacing: f64) -> Self {
        Self {
            direction,
            count,
            spacing,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.count < 2 {
            return Err(DesignError::PatternCount { count: self.count }.into());
        }
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(DesignError::PatternSpacing {
                spacing: self.spacing,
            }
            .into());
        }
        Ok(())
    }

    /// Offsets for the generated copies: `count - 1` entries at
    /// 1x, 2x, ... spacing along the direction.
    pub fn offsets(&self) -> Result<Vec<(f64, f64)>> {
        self.validate()?;
        let (ux, uy) = self.direction.unit();
        Ok((1..self.count)
            .map(|i| {
                let d = i as f64 * self.spacing;
                (ux * d, uy * d)
            })
            .collect())
    }
}

/// Parameters for a circular (polar) pattern.
#[derive(Debug, Clone, Copy)]
pub struct CircularPatternParams {
    pub pivot: Point,
    /// Total instance count including the original; must be at least 2.
    pub count: u32,
}

impl CircularPatternParams {
    pub fn new(pivot: Point, count: u32) -> Self {
        Self { pivot, count }
    }

    pub fn validate(&self) -> Result<()> {
        if self.count < 2 {
            return Err(DesignError::PatternCount { count: self.count }.into());
        }
        Ok(())
    }

    /// Rotation angles for the generated copies: `count - 1` entries at
    /// 2π/N, 2·2π/N, ... radians.
    pub fn angles(&self) -> Result<Vec<f64>> {
        self.validate()?;
        let step = TAU / self.count as f64;
        Ok((1..self.count).map(|i| i as f64 * step).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_count_5_yields_4_offsets() {
        let params = LinearPatternParams::new(Direction::Right, 5, 2.0);
        let offsets = params.offsets().unwrap();
        assert_eq!(offsets.len(), 4);
        assert_eq!(offsets[0], (2.0, 0.0));
        assert_eq!(offsets[3], (8.0, 0.0));
    }

    #[test]
    fn linear_rejects_count_below_2() {
        let params = LinearPatternParams::new(Direction::Up, 1, 2.0);
        assert!(params.offsets().is_err());
    }

    #[test]
    fn linear_rejects_bad_spacing() {
        assert!(LinearPatternParams::new(Direction::Up, 3, 0.0)
            .offsets()
            .is_err());
        assert!(LinearPatternParams::new(Direction::Up, 3, f64::NAN)
            .offsets()
            .is_err());
    }

    #[test]
    fn circular_count_6_yields_5_angles() {
        let params = CircularPatternParams::new(Point::ZERO, 6);
        let angles = params.angles().unwrap();
        assert_eq!(angles.len(), 5);
        assert!((angles[0] - TAU / 6.0).abs() < 1e-12);
        assert!((angles[4] - 5.0 * TAU / 6.0).abs() < 1e-12);
    }
}
