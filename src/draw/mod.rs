//! Shape model, drawing board and Cairo rendering.
//!
//! This module defines the core drawing types of the editor:
//! - [`Color`] and [`Point`]: plain value types shared by everything else
//! - [`Shape`]: circles, diamonds and arrows with hit-testing and resizing
//! - [`DrawingBoard`]: the ordered shape stack with single selection and listeners
//! - Rendering functions for Cairo-based output

pub mod board;
pub mod color;
pub mod error;
pub mod factory;
pub mod point;
pub mod render;
pub mod shape;

// Re-export commonly used types at module level
pub use board::{BoardListener, DrawingBoard};
pub use color::Color;
pub use error::BoardError;
pub use factory::{ShapeFactory, ShapeLimits};
pub use point::Point;
pub use render::{render_background, render_shape, render_shapes};
pub use shape::{Shape, ShapeKind, ShapeType};

// Named colors
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
