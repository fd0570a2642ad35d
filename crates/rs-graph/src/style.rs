//! Display attributes carried by series and handed to the renderer untouched.

use serde::{Deserialize, Serialize};

/// Palette color index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub i16);

impl Color {
    /// White.
    pub const WHITE: Color = Color(0);
    /// Black.
    pub const BLACK: Color = Color(1);
    /// Red.
    pub const RED: Color = Color(2);
    /// Green.
    pub const GREEN: Color = Color(3);
    /// Blue.
    pub const BLUE: Color = Color(4);
    /// Magenta.
    pub const MAGENTA: Color = Color(6);
    /// Orange.
    pub const ORANGE: Color = Color(800);
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// Marker style code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerStyle(pub i16);

impl MarkerStyle {
    /// Single pixel dot.
    pub const DOT: MarkerStyle = MarkerStyle(1);
    /// Filled circle.
    pub const FULL_CIRCLE: MarkerStyle = MarkerStyle(20);
    /// Filled square.
    pub const FULL_SQUARE: MarkerStyle = MarkerStyle(21);
    /// Filled triangle pointing up.
    pub const FULL_TRIANGLE_UP: MarkerStyle = MarkerStyle(22);
    /// Open circle.
    pub const OPEN_CIRCLE: MarkerStyle = MarkerStyle(24);
}

impl Default for MarkerStyle {
    fn default() -> Self {
        MarkerStyle::FULL_CIRCLE
    }
}
