//! Shape definitions and per-variant geometry.

use super::color::Color;
use super::error::BoardError;
use super::point::Point;
use std::fmt;
use std::str::FromStr;

/// Smallest height or width a diamond may have.
pub const MIN_DIAMOND_SIDE: i32 = 10;

/// Type tag of a shape, also used as the active tool when adding shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Circle,
    Diamond,
    Arrow,
}

impl ShapeType {
    pub fn name(self) -> &'static str {
        match self {
            ShapeType::Circle => "Circle",
            ShapeType::Diamond => "Diamond",
            ShapeType::Arrow => "Arrow",
        }
    }
}

impl FromStr for ShapeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "circle" => Ok(ShapeType::Circle),
            "diamond" => Ok(ShapeType::Diamond),
            "arrow" => Ok(ShapeType::Arrow),
            other => Err(format!("unknown shape type '{other}'")),
        }
    }
}

/// Variant-specific geometry parameters.
///
/// The parameters are read-only from the outside; they only change through
/// [`Shape::resize`], which keeps each variant's constraints intact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    /// Filled disk
    Circle {
        /// Radius in pixels (> 0)
        radius: i32,
    },
    /// Filled rhombus hanging from its apex
    Diamond {
        /// Apex-to-bottom distance (even, >= 10)
        height: i32,
        /// Left-to-right distance (even, >= 10)
        width: i32,
    },
    /// Right-pointing block arrow
    Arrow {
        /// Tail-to-tip distance (>= 4 * shaft)
        length: i32,
        /// Thickness of the shaft (> 0)
        shaft: i32,
    },
}

/// A drawable shape on the board.
///
/// Every shape is positioned by the upper-left corner of its bounding box;
/// the defining point (circle center, diamond apex, arrow tip) is derived from
/// the corner and the variant geometry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    corner: Point,
    selected: bool,
    color: Color,
    kind: ShapeKind,
}

impl Shape {
    /// Creates a circle around `center`.
    ///
    /// # Errors
    /// [`BoardError::InvalidGeometry`] if `radius <= 0`.
    pub fn circle(center: Point, radius: i32, color: Color) -> Result<Self, BoardError> {
        if radius <= 0 {
            return Err(BoardError::InvalidGeometry(format!(
                "circle requires a positive radius, got {radius}"
            )));
        }
        let corner = center
            .checked_offset(-radius, -radius)
            .ok_or_else(|| out_of_range("circle", center))?;
        Ok(Self {
            corner,
            selected: false,
            color,
            kind: ShapeKind::Circle { radius },
        })
    }

    /// Creates a diamond whose topmost tip sits at `apex`.
    ///
    /// # Errors
    /// [`BoardError::InvalidGeometry`] if `height` or `width` is odd or below 10.
    pub fn diamond(apex: Point, height: i32, width: i32, color: Color) -> Result<Self, BoardError> {
        if height < MIN_DIAMOND_SIDE
            || width < MIN_DIAMOND_SIDE
            || height % 2 != 0
            || width % 2 != 0
        {
            return Err(BoardError::InvalidGeometry(format!(
                "diamond height and width must both be even and >= {MIN_DIAMOND_SIDE}, got {height}x{width}"
            )));
        }
        let corner = apex
            .checked_offset(-width / 2, 0)
            .ok_or_else(|| out_of_range("diamond", apex))?;
        Ok(Self {
            corner,
            selected: false,
            color,
            kind: ShapeKind::Diamond { height, width },
        })
    }

    /// Creates an arrow pointing right with its tip at `tip`.
    ///
    /// # Errors
    /// [`BoardError::InvalidGeometry`] if either dimension is not positive or
    /// `length < 4 * shaft`.
    pub fn arrow(tip: Point, length: i32, shaft: i32, color: Color) -> Result<Self, BoardError> {
        if length <= 0 || shaft <= 0 {
            return Err(BoardError::InvalidGeometry(format!(
                "arrow length and shaft must be > 0, got {length} and {shaft}"
            )));
        }
        if shaft.checked_mul(4).is_none_or(|min_length| length < min_length) {
            return Err(BoardError::InvalidGeometry(format!(
                "arrow length must be at least 4x the shaft thickness, got {length} for shaft {shaft}"
            )));
        }
        let corner = tip
            .checked_offset(-length, -arrow_half_height(shaft))
            .ok_or_else(|| out_of_range("arrow", tip))?;
        Ok(Self {
            corner,
            selected: false,
            color,
            kind: ShapeKind::Arrow { length, shaft },
        })
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn shape_type(&self) -> ShapeType {
        match self.kind {
            ShapeKind::Circle { .. } => ShapeType::Circle,
            ShapeKind::Diamond { .. } => ShapeType::Diamond,
            ShapeKind::Arrow { .. } => ShapeType::Arrow,
        }
    }

    /// Upper-left corner of the bounding box.
    pub fn upper_left(&self) -> Point {
        self.corner
    }

    /// The point the shape was constructed around: circle center, diamond
    /// apex or arrow tip.
    pub fn anchor(&self) -> Point {
        match self.kind {
            ShapeKind::Circle { radius } => self.corner.offset(radius, radius),
            ShapeKind::Diamond { width, .. } => self.corner.offset(width / 2, 0),
            ShapeKind::Arrow { length, shaft } => {
                self.corner.offset(length, arrow_half_height(shaft))
            }
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Moves the shape by the given offsets.
    pub fn shift_upper_left_by(&mut self, dx: i32, dy: i32) {
        self.corner.shift_by(dx, dy);
    }

    /// Places the upper-left corner of the bounding box at `(x, y)`.
    pub fn move_upper_left_to(&mut self, x: i32, y: i32) {
        self.corner = Point::new(x, y);
    }

    /// Returns an independent shape with the same geometry, color and
    /// selection state.
    pub fn copy_of(&self) -> Shape {
        self.clone()
    }

    /// Returns true if `(x, y)` lies inside the shape (edges included).
    pub fn is_on(&self, x: i32, y: i32) -> bool {
        // Widened so any pair of coordinates and dimensions fits.
        let (x, y) = (x as i128, y as i128);
        let (left, top) = (self.corner.x as i128, self.corner.y as i128);
        match self.kind {
            ShapeKind::Circle { radius } => {
                let r = radius as i128;
                let dx = x - (left + r);
                let dy = y - (top + r);
                dx * dx + dy * dy <= r * r
            }
            ShapeKind::Diamond { height, width } => {
                let (height, width) = (height as i128, width as i128);
                // Edge lines have slope height/width; multiply through by width.
                let run = (x - (left + width / 2)) * height;
                let rise = (y - top) * width;
                let span = width * height;
                -run <= rise && run <= rise && run + span >= rise && -run + span >= rise
            }
            ShapeKind::Arrow { length, shaft } => {
                let shaft = shaft as i128;
                let tip_x = left + length as i128;
                let tip_y = top + 3 * shaft / 2;
                let head_base = tip_x - 2 * shaft;
                let in_shaft =
                    x >= left && x < head_base && y >= top + shaft && y <= top + 2 * shaft;
                if in_shaft {
                    return true;
                }
                // Head edges have slope 3/4 on either side of the tip.
                let run = 3 * (x - tip_x);
                let rise = 4 * (y - tip_y);
                x >= head_base && run <= rise && -run >= rise
            }
        }
    }

    /// Grows or shrinks the shape.
    ///
    /// Changes that would break the variant's constraints, or push a
    /// dimension or the corner out of the `i32` range, are dropped for that
    /// axis; this never fails.
    pub fn resize(&mut self, dx: i32, dy: i32) {
        match &mut self.kind {
            ShapeKind::Circle { radius } => {
                let delta = dx.max(dy);
                let grown = radius.checked_add(delta).filter(|r| *r > 0);
                // Circles grow about their center.
                let corner = delta
                    .checked_neg()
                    .and_then(|back| self.corner.checked_offset(back, back));
                if let (Some(grown), Some(corner)) = (grown, corner) {
                    *radius = grown;
                    self.corner = corner;
                }
            }
            ShapeKind::Diamond { height, width } => {
                let even_x = dx / 2 * 2;
                let even_y = dy / 2 * 2;
                let wider = width.checked_add(even_x).filter(|w| *w >= MIN_DIAMOND_SIDE);
                // Diamonds stay anchored at the apex.
                let left = self.corner.x.checked_sub(even_x / 2);
                if let (Some(wider), Some(left)) = (wider, left) {
                    *width = wider;
                    self.corner.x = left;
                }
                if let Some(taller) = height.checked_add(even_y).filter(|h| *h >= MIN_DIAMOND_SIDE)
                {
                    *height = taller;
                }
            }
            ShapeKind::Arrow { length, shaft } => {
                let min_length = 4 * *shaft;
                if let Some(longer) = length.checked_add(dx).filter(|l| *l >= min_length) {
                    *length = longer;
                }
                let max_shaft = *length / 4;
                let thicker = shaft.checked_add(dy).filter(|s| *s > 0 && *s <= max_shaft);
                let top = self.corner.y.checked_sub(dy);
                if let (Some(thicker), Some(top)) = (thicker, top) {
                    *shaft = thicker;
                    self.corner.y = top;
                }
            }
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.selected {
            write!(f, "[Selected] ")?;
        }
        write!(
            f,
            "{}. Upper-left corner:{}, Color:{}",
            self.shape_type().name(),
            self.corner,
            self.color
        )
    }
}

/// Distance from the top of an arrow's bounding box to its tip row.
///
/// Arrows keep `4 * shaft <= length`, so this cannot overflow.
pub(crate) fn arrow_half_height(shaft: i32) -> i32 {
    3 * shaft / 2
}

fn out_of_range(what: &str, at: Point) -> BoardError {
    BoardError::InvalidGeometry(format!("{what} at {at} does not fit the coordinate range"))
}
