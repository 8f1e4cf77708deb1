//! Input handling and editing state machine.
//!
//! This module translates pointer and keyboard events into board operations.
//! It keeps the current shape tool and editing action, and tracks the drag in
//! progress between press and release.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{Key, MouseButton};
pub use state::{DragState, InputState};
pub use tool::EditAction;
