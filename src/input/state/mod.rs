mod actions;
mod core;
mod mouse;
#[cfg(test)]
mod tests;

pub use core::{DragState, InputState};
