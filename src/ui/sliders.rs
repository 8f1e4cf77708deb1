//! Per-channel color sliders bound to the current selection.

use crate::draw::{BoardError, BoardListener, Color, DrawingBoard};
use log::debug;
use std::cell::Cell;
use std::fmt;

/// One RGBA channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl ColorChannel {
    pub const ALL: [ColorChannel; 4] = [Self::Red, Self::Green, Self::Blue, Self::Alpha];

    /// Parses the single-letter channel names `r`, `g`, `b` and `a`.
    pub fn from_char(channel: char) -> Result<Self, BoardError> {
        match channel {
            'r' => Ok(Self::Red),
            'g' => Ok(Self::Green),
            'b' => Ok(Self::Blue),
            'a' => Ok(Self::Alpha),
            other => Err(BoardError::InvalidArgument(format!(
                "Only r/g/b/a are legal RGBa color spaces, got '{other}'"
            ))),
        }
    }

    /// Position in [`ColorChannel::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
            Self::Alpha => 3,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Red => 'r',
            Self::Green => 'g',
            Self::Blue => 'b',
            Self::Alpha => 'a',
        }
    }

    pub fn get(self, color: Color) -> u8 {
        match self {
            Self::Red => color.r,
            Self::Green => color.g,
            Self::Blue => color.b,
            Self::Alpha => color.a,
        }
    }

    pub fn set(self, color: Color, value: u8) -> Color {
        match self {
            Self::Red => color.with_red(value),
            Self::Green => color.with_green(value),
            Self::Blue => color.with_blue(value),
            Self::Alpha => color.with_alpha(value),
        }
    }
}

impl fmt::Display for ColorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A 0-255 slider for one channel of the selected shape's color.
#[derive(Debug)]
pub struct ColorSlider {
    channel: ColorChannel,
    value: Cell<u8>,
}

impl ColorSlider {
    /// Creates a slider; alpha starts fully opaque, the others at zero.
    pub fn new(channel: ColorChannel) -> Self {
        let initial = if channel == ColorChannel::Alpha { 255 } else { 0 };
        Self {
            channel,
            value: Cell::new(initial),
        }
    }

    /// Creates a slider from its channel letter.
    ///
    /// # Errors
    /// [`BoardError::InvalidArgument`] for anything other than `r`/`g`/`b`/`a`.
    pub fn for_channel(channel: char) -> Result<Self, BoardError> {
        ColorChannel::from_char(channel).map(Self::new)
    }

    pub fn channel(&self) -> ColorChannel {
        self.channel
    }

    pub fn value(&self) -> u8 {
        self.value.get()
    }

    /// Moves the slider and applies the value to the selected shape.
    ///
    /// Without a selection only the slider moves. The board is only touched
    /// when the channel actually changes.
    ///
    /// # Errors
    /// [`BoardError::InvalidArgument`] if `value` is outside `0..=255`.
    pub fn set_value(&self, board: &mut DrawingBoard, value: i32) -> Result<(), BoardError> {
        let value = u8::try_from(value).map_err(|_| {
            BoardError::InvalidArgument(format!("Color space must be [0-255], got {value}"))
        })?;
        self.value.set(value);

        let Some(current) = board.currently_selected().map(|shape| shape.color()) else {
            return Ok(());
        };
        if self.channel.get(current) != value {
            debug!("Slider {} sets selection channel to {value}", self.channel);
            board.change_color_of_selected(self.channel.set(current, value))?;
        }
        Ok(())
    }
}

impl BoardListener for ColorSlider {
    fn board_changed(&self, board: &DrawingBoard) -> anyhow::Result<()> {
        if let Some(shape) = board.currently_selected() {
            self.value.set(self.channel.get(shape.color()));
        }
        Ok(())
    }
}
