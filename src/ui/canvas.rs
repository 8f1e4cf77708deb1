//! Raster view of the board backed by a cairo image surface.

use crate::draw::{BoardListener, Color, DrawingBoard, Shape, render_background, render_shapes};
use anyhow::{Context as _, Result};
use std::cell::{Cell, RefCell};

/// Repaints the whole board into an ARGB32 surface on every change.
pub struct CanvasView {
    surface: RefCell<cairo::ImageSurface>,
    background: Color,
    repaints: Cell<u64>,
}

impl CanvasView {
    /// Creates a canvas of `width` x `height` pixels, cleared to `background`.
    pub fn new(width: i32, height: i32, background: Color) -> Result<Self> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)
            .with_context(|| format!("failed to create {width}x{height} canvas surface"))?;
        let view = Self {
            surface: RefCell::new(surface),
            background,
            repaints: Cell::new(0),
        };
        view.paint(&[])?;
        Ok(view)
    }

    pub fn width(&self) -> i32 {
        self.surface.borrow().width()
    }

    pub fn height(&self) -> i32 {
        self.surface.borrow().height()
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Number of board-driven repaints so far.
    pub fn repaint_count(&self) -> u64 {
        self.repaints.get()
    }

    /// Returns the straight (non-premultiplied) color of the pixel at `(x, y)`,
    /// or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }
        let mut surface = self.surface.borrow_mut();
        surface.flush();
        let stride = surface.stride() as usize;
        let data = surface.data().ok()?;
        let offset = y as usize * stride + x as usize * 4;
        let (b, g, r, a) = (
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        );
        Some(unpremultiply(b, g, r, a))
    }

    fn paint(&self, shapes: &[Shape]) -> Result<()> {
        let surface = self.surface.borrow();
        let ctx = cairo::Context::new(&*surface).context("failed to create cairo context")?;
        render_background(&ctx, self.background);
        render_shapes(&ctx, shapes);
        Ok(())
    }
}

impl BoardListener for CanvasView {
    fn board_changed(&self, board: &DrawingBoard) -> Result<()> {
        self.paint(board.shapes())?;
        self.repaints.set(self.repaints.get() + 1);
        log::trace!("Canvas repaint #{} ({} shapes)", self.repaints.get(), board.len());
        Ok(())
    }
}

/// Converts one premultiplied BGRA pixel to a straight-alpha color.
pub(crate) fn unpremultiply(b: u8, g: u8, r: u8, a: u8) -> Color {
    if a == 0 {
        return Color::new(0, 0, 0, 0);
    }
    let scale = |channel: u8| ((channel as u32 * 255 + a as u32 / 2) / a as u32).min(255) as u8;
    Color::new(scale(r), scale(g), scale(b), a)
}
