//! Board views: the shape roster, the raster canvas and the color sliders.
//!
//! Every view implements [`BoardListener`](crate::draw::BoardListener) and
//! rebuilds its state from the board on each notification.

pub mod canvas;
pub mod roster;
pub mod sliders;

pub use canvas::CanvasView;
pub use roster::{RosterView, format_roster};
pub use sliders::{ColorChannel, ColorSlider};
