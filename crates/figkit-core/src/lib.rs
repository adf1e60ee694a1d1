//! # FigKit Core
//!
//! Foundation crate for the FigKit figure designer.
//! Provides the pure geometry kernel, shared constants and error types that
//! the canvas engine builds on. Everything in this crate is stateless.

pub mod constants;
pub mod error;
pub mod geometry;

pub use error::{DesignError, Result};
pub use geometry::{
    line_angle, point_segment_distance, reflect_across, rotate_about, round4, snap_half, Bounds,
    Point,
};
