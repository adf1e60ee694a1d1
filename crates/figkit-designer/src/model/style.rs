//! Style attributes shared by every shape kind.

use serde::{Deserialize, Serialize};

/// An RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Stroke dash pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// Arrowhead placement on open shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ArrowStyle {
    #[default]
    None,
    Start,
    End,
    Both,
}

/// Hatch fill pattern for closed shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HatchStyle {
    #[default]
    None,
    Lines,
    Grid,
    Dots,
}

/// The full style block carried by a drawing object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub line_style: LineStyle,
    pub arrow: ArrowStyle,
    /// Stroke width multiplier relative to the base width.
    pub line_width: f64,
    pub stroke: Color,
    /// A shape with a fill color hit-tests on its interior.
    pub fill: Option<Color>,
    pub hatch: HatchStyle,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            line_style: LineStyle::Solid,
            arrow: ArrowStyle::None,
            line_width: 1.0,
            stroke: Color::BLACK,
            fill: None,
            hatch: HatchStyle::None,
        }
    }
}

impl ShapeStyle {
    /// Style used for construction guides: dashed, never filled.
    pub fn guide() -> Self {
        Self {
            line_style: LineStyle::Dashed,
            stroke: Color::rgba(120, 120, 120, 255),
            ..Self::default()
        }
    }

    pub fn is_filled(&self) -> bool {
        self.fill.is_some()
    }
}
