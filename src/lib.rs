//! Library exports for the shapeboard editor core.
//!
//! Exposes the shape model and drawing board alongside the views, input state,
//! export and configuration modules that sit on top of it, so front ends and
//! tools can share one implementation with the scripted binary.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod session;
pub mod ui;

pub use config::Config;
pub use draw::{DrawingBoard, Shape};
pub use session::Session;
