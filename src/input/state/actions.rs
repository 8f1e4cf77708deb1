use crate::draw::{BoardError, DrawingBoard};
use crate::input::events::Key;
use log::debug;

use super::InputState;

impl InputState {
    /// Processes a key press event.
    ///
    /// - `r`: deletes the selected shape, if any
    /// - `e`: erases the whole board
    /// - Escape: abandons the current drag
    ///
    /// Other keys are ignored.
    pub fn on_key_press(&mut self, board: &mut DrawingBoard, key: Key) -> Result<(), BoardError> {
        match key {
            Key::Char('r') => {
                if board.currently_selected().is_some() {
                    board.delete_selected()?;
                    self.release_hold();
                }
            }
            Key::Char('e') => {
                board.delete_all();
                self.release_hold();
            }
            Key::Escape => self.cancel_drag(),
            other => debug!("Ignoring key {other:?}"),
        }
        Ok(())
    }
}
