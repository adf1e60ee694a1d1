//! Error types for the figure designer.
//!
//! The interactive core has no hard-failure modes: degenerate geometry and
//! rejected parameters degrade to no-ops at the editor level. The variants
//! here cover the places where an operation can state *why* it was rejected,
//! so the caller can log it or surface it as status text.

use thiserror::Error;

/// Designer error type
#[derive(Error, Debug, Clone)]
pub enum DesignError {
    /// Pattern operations need at least two instances
    #[error("Pattern count must be at least 2, got {count}")]
    PatternCount {
        /// The rejected count.
        count: u32,
    },

    /// Pattern spacing must be a positive finite distance
    #[error("Pattern spacing must be positive and finite, got {spacing}")]
    PatternSpacing {
        /// The rejected spacing.
        spacing: f64,
    },

    /// Mirror axis endpoints coincide
    #[error("Mirror axis is degenerate (length {length})")]
    DegenerateAxis {
        /// Length of the rejected axis.
        length: f64,
    },

    /// Render target has a zero dimension
    #[error("Render target must be non-empty, got {width}x{height}")]
    RenderTarget {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
}

/// Result type using DesignError
pub type Result<T> = std::result::Result<T, DesignError>;
