//! Text roster of the board contents.

use crate::draw::{BoardListener, DrawingBoard};
use std::cell::RefCell;

/// Keeps a textual listing of every shape on the board, bottom to top.
#[derive(Debug, Default)]
pub struct RosterView {
    text: RefCell<String>,
}

impl RosterView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The roster as of the last board change.
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }
}

/// Formats the roster for `board`.
///
/// ```text
/// Total number of shapes: 2
/// Shape Roster (bottom-to-top): 
///   —Circle. Upper-left corner:[x=0,y=0], Color:[r=255,g=0,b=0,a=255]
///   —[Selected] Arrow. Upper-left corner:[x=5,y=5], Color:[r=0,g=0,b=255,a=255]
/// ```
pub fn format_roster(board: &DrawingBoard) -> String {
    let shapes = board.shapes();
    let mut out = format!("Total number of shapes: {}", shapes.len());
    if !shapes.iter().any(|shape| shape.is_selected()) {
        out.push_str(" (No item currently selected)");
    }
    out.push('\n');
    out.push_str("Shape Roster (bottom-to-top): \n");
    for shape in shapes {
        out.push_str("  —");
        out.push_str(&shape.to_string());
        out.push('\n');
    }
    out
}

impl BoardListener for RosterView {
    fn board_changed(&self, board: &DrawingBoard) -> anyhow::Result<()> {
        *self.text.borrow_mut() = format_roster(board);
        Ok(())
    }
}
