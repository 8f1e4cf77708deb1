use crate::draw::{BoardError, DrawingBoard, Point};
use crate::input::{events::MouseButton, tool::EditAction};
use log::debug;

use super::{DragState, InputState};

impl InputState {
    /// Processes a mouse button press event.
    ///
    /// # Behavior
    /// - Left press: starts a drag. In Move, Resize, Clone and Clone+ the
    ///   shape under the pointer is selected (and raised) and held.
    /// - Right press: cancels the current drag
    pub fn on_mouse_press(
        &mut self,
        board: &mut DrawingBoard,
        button: MouseButton,
        x: i32,
        y: i32,
    ) -> Result<(), BoardError> {
        match button {
            MouseButton::Left => {
                let mut holding = false;
                if self.action.grabs_shape() {
                    board.select_at(x, y);
                    holding = board.currently_selected().is_some();
                }
                self.drag = DragState::Pressed {
                    last_x: x,
                    last_y: y,
                    moved: false,
                    holding,
                    clone_made: false,
                };
            }
            MouseButton::Right => self.cancel_drag(),
            MouseButton::Middle => {}
        }
        Ok(())
    }

    /// Processes mouse motion with the button held.
    ///
    /// The offset applied is the distance from the previous pointer event.
    /// Motion without a press is ignored.
    pub fn on_mouse_motion(
        &mut self,
        board: &mut DrawingBoard,
        x: i32,
        y: i32,
    ) -> Result<(), BoardError> {
        let DragState::Pressed {
            last_x,
            last_y,
            holding,
            clone_made,
            ..
        } = self.drag
        else {
            return Ok(());
        };
        let (dx, dy) = (x.saturating_sub(last_x), y.saturating_sub(last_y));
        self.drag = DragState::Pressed {
            last_x: x,
            last_y: y,
            moved: true,
            holding,
            clone_made: clone_made || (holding && self.action == EditAction::Clone),
        };

        match self.action {
            EditAction::Add => {}
            EditAction::AddPlus => {
                let shape = self.factory.create(self.tool, Point::new(x, y))?;
                board.add_shape(shape);
            }
            EditAction::Move if holding => board.move_shape_by(dx, dy)?,
            EditAction::Resize if holding => board.resize_selected(dx, dy)?,
            EditAction::Clone if holding => {
                if !clone_made {
                    board.clone_selected()?;
                }
                board.move_shape_by(dx, dy)?;
            }
            EditAction::ClonePlus if holding => {
                board.clone_selected()?;
                board.move_shape_by(dx, dy)?;
            }
            EditAction::Move | EditAction::Resize | EditAction::Clone | EditAction::ClonePlus => {}
        }
        Ok(())
    }

    /// Processes mouse button release events.
    ///
    /// A release without any motion since the press counts as a click: in
    /// Add mode it adds a random shape at the pointer, in every other mode it
    /// selects the shape under the pointer.
    pub fn on_mouse_release(
        &mut self,
        board: &mut DrawingBoard,
        button: MouseButton,
        x: i32,
        y: i32,
    ) -> Result<(), BoardError> {
        if button != MouseButton::Left {
            return Ok(());
        }
        let drag = std::mem::replace(&mut self.drag, DragState::Idle);
        let DragState::Pressed { moved: false, .. } = drag else {
            return Ok(());
        };

        if self.action == EditAction::Add {
            let shape = self.factory.create(self.tool, Point::new(x, y))?;
            debug!("Click adds {} at ({x}, {y})", self.tool.name());
            board.add_shape(shape);
        } else {
            board.select_at(x, y);
        }
        Ok(())
    }

    /// Press and release at the same spot.
    pub fn click(&mut self, board: &mut DrawingBoard, x: i32, y: i32) -> Result<(), BoardError> {
        self.on_mouse_press(board, MouseButton::Left, x, y)?;
        self.on_mouse_release(board, MouseButton::Left, x, y)
    }
}
