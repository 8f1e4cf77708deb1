//! RGBA color type and predefined color constants.

use std::fmt;

/// Represents an RGBA color with 8-bit channels.
///
/// Colors are plain values: a shape's color is replaced wholesale on recolor,
/// never edited channel by channel in place.
///
/// # Examples
///
/// ```
/// use shapeboard::draw::Color;
/// let red = Color::rgb(255, 0, 0);
/// let faded_blue = Color::new(0, 0, 255, 128);
/// assert_eq!(faded_blue.with_alpha(255), Color::rgb(0, 0, 255));
/// assert_ne!(red, faded_blue);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component (0 = no red, 255 = full red)
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
    /// Alpha/opacity (0 = fully transparent, 255 = fully opaque)
    pub a: u8,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_red(self, r: u8) -> Self {
        Self { r, ..self }
    }

    pub const fn with_green(self, g: u8) -> Self {
        Self { g, ..self }
    }

    pub const fn with_blue(self, b: u8) -> Self {
        Self { b, ..self }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Returns the components scaled to 0.0-1.0, in the order cairo expects.
    pub fn to_unit_rgba(self) -> (f64, f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
            self.a as f64 / 255.0,
        )
    }

    /// Maps color name strings to Color values.
    ///
    /// Used by the configuration system to parse color names from the config file.
    ///
    /// # Supported Names (case-insensitive)
    /// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black", "transparent"
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "red" => Some(RED),
            "green" => Some(GREEN),
            "blue" => Some(BLUE),
            "yellow" => Some(YELLOW),
            "orange" => Some(ORANGE),
            "pink" => Some(PINK),
            "white" => Some(WHITE),
            "black" => Some(BLACK),
            "transparent" => Some(TRANSPARENT),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[r={},g={},b={},a={}]", self.r, self.g, self.b, self.a)
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

pub const RED: Color = Color::rgb(255, 0, 0);
pub const GREEN: Color = Color::rgb(0, 255, 0);
pub const BLUE: Color = Color::rgb(0, 0, 255);
pub const YELLOW: Color = Color::rgb(255, 255, 0);
pub const ORANGE: Color = Color::rgb(255, 128, 0);
pub const PINK: Color = Color::rgb(255, 0, 255);
pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

/// Inner outline drawn around a selected shape.
pub const SELECTION_LIGHT: Color = WHITE;
/// Outer outline drawn around a selected shape.
pub const SELECTION_DARK: Color = BLACK;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_setters_replace_one_channel() {
        let base = Color::new(10, 20, 30, 40);
        assert_eq!(base.with_red(1), Color::new(1, 20, 30, 40));
        assert_eq!(base.with_green(2), Color::new(10, 2, 30, 40));
        assert_eq!(base.with_blue(3), Color::new(10, 20, 3, 40));
        assert_eq!(base.with_alpha(4), Color::new(10, 20, 30, 4));
    }

    #[test]
    fn unit_rgba_scales_to_one() {
        let (r, g, b, a) = Color::new(255, 0, 51, 255).to_unit_rgba();
        assert_eq!((r, g, a), (1.0, 0.0, 1.0));
        assert!((b - 0.2).abs() < 1e-9);
    }

    #[test]
    fn names_resolve_case_insensitively() {
        assert_eq!(Color::from_name("White"), Some(WHITE));
        assert_eq!(Color::from_name("TRANSPARENT"), Some(TRANSPARENT));
        assert!(Color::from_name("chartreuse").is_none());
    }

    #[test]
    fn display_lists_all_channels() {
        assert_eq!(Color::new(1, 2, 3, 4).to_string(), "[r=1,g=2,b=3,a=4]");
    }
}
