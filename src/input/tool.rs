//! Editing action selection.

use std::fmt;
use std::str::FromStr;

/// What a click or drag on the canvas does.
///
/// The shape type used by the adding actions is chosen separately (see
/// [`ShapeType`](crate::draw::ShapeType)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditAction {
    /// Click adds one random shape at the pointer (default)
    #[default]
    Add,
    /// Drag moves the shape under the pointer
    Move,
    /// Drag resizes the shape under the pointer
    Resize,
    /// Drag leaves the shape in place and pulls a single copy along
    Clone,
    /// Drag adds a random shape at every motion event
    AddPlus,
    /// Drag leaves a trail of copies, one per motion event
    ClonePlus,
}

impl EditAction {
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Move => "Move",
            Self::Resize => "Resize",
            Self::Clone => "Clone",
            Self::AddPlus => "Add+",
            Self::ClonePlus => "Clone+",
        }
    }

    /// Whether pressing on a shape picks it up for the drag.
    pub fn grabs_shape(self) -> bool {
        matches!(self, Self::Move | Self::Resize | Self::Clone | Self::ClonePlus)
    }
}

impl fmt::Display for EditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EditAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "move" => Ok(Self::Move),
            "resize" => Ok(Self::Resize),
            "clone" => Ok(Self::Clone),
            "add+" => Ok(Self::AddPlus),
            "clone+" => Ok(Self::ClonePlus),
            _ => Err(format!(
                "unknown action '{s}' (expected add, move, resize, clone, add+ or clone+)"
            )),
        }
    }
}
