//! Pointer state machine and editor mode selection.

use crate::draw::{ShapeFactory, ShapeType};
use crate::input::tool::EditAction;

/// Pointer drag state machine.
///
/// A drag starts on a left press and ends on release, a right press or
/// Escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    /// Button up - waiting for a press
    Idle,
    /// Left button held
    Pressed {
        /// Pointer X at the previous event
        last_x: i32,
        /// Pointer Y at the previous event
        last_y: i32,
        /// Whether any motion happened since the press
        moved: bool,
        /// Whether the press picked up the selected shape
        holding: bool,
        /// Whether a Clone drag already made its copy
        clone_made: bool,
    },
}

/// Editor input state: the current tool and action plus the drag in
/// progress.
///
/// Event handlers take the board explicitly and change it only through its
/// public operations, so listeners see every edit.
pub struct InputState {
    /// Shape type added by Add and Add+
    pub tool: ShapeType,
    /// What clicks and drags do
    pub action: EditAction,
    /// Source of random shapes
    pub(super) factory: ShapeFactory,
    /// Current drag state machine
    pub(super) drag: DragState,
}

impl InputState {
    /// Creates an input state in Circle/Add mode.
    pub fn new(factory: ShapeFactory) -> Self {
        Self {
            tool: ShapeType::Circle,
            action: EditAction::Add,
            factory,
            drag: DragState::Idle,
        }
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn set_tool(&mut self, tool: ShapeType) {
        log::debug!("Tool set to {}", tool.name());
        self.tool = tool;
    }

    pub fn set_action(&mut self, action: EditAction) {
        log::debug!("Action set to {action}");
        self.action = action;
    }

    /// Abandons a drag in progress, keeping what it already did.
    pub fn cancel_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Drops the shape held by the current drag, if any.
    pub(super) fn release_hold(&mut self) {
        if let DragState::Pressed { holding, .. } = &mut self.drag {
            *holding = false;
        }
    }
}
