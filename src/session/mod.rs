//! Editing session: the board wired to its views, input and export.
//!
//! A [`Session`] owns one [`DrawingBoard`] with the canvas, roster and the
//! four color sliders registered as listeners (in that order), the pointer
//! and keyboard [`InputState`], and the [`ExportManager`]. Scripts drive it
//! command by command.

mod options;
mod script;

pub use options::{SessionOptions, options_from_config};
pub use script::{ScriptCommand, ScriptLine, parse_script};


use crate::draw::DrawingBoard;
use crate::export::{ExportDependencies, ExportManager, ExportOutcome};
use crate::input::{InputState, MouseButton};
use crate::ui::{CanvasView, ColorChannel, ColorSlider, RosterView};
use anyhow::{Context, Result};
use std::io::Write;
use std::rc::Rc;

pub struct Session {
    board: DrawingBoard,
    input: InputState,
    canvas: Rc<CanvasView>,
    roster: Rc<RosterView>,
    sliders: [Rc<ColorSlider>; 4],
    exporter: ExportManager,
}

impl Session {
    /// Creates a session that exports to the local file system.
    pub fn new(options: SessionOptions) -> Result<Self> {
        Self::with_export_dependencies(options, ExportDependencies::default())
    }

    /// Creates a session with custom export dependencies (useful for testing).
    pub fn with_export_dependencies(
        options: SessionOptions,
        dependencies: ExportDependencies,
    ) -> Result<Self> {
        let canvas = Rc::new(CanvasView::new(
            options.canvas_width,
            options.canvas_height,
            options.background,
        )?);
        let roster = Rc::new(RosterView::new());
        let sliders = ColorChannel::ALL.map(|channel| Rc::new(ColorSlider::new(channel)));

        let mut board = DrawingBoard::new();
        board.register_listener(canvas.clone());
        board.register_listener(roster.clone());
        for slider in &sliders {
            board.register_listener(slider.clone());
        }
        board.prime();

        log::info!(
            "Session ready: {}x{} canvas, seed {:?}",
            options.canvas_width,
            options.canvas_height,
            options.seed
        );

        Ok(Self {
            board,
            input: InputState::new(options.shape_factory()),
            canvas,
            roster,
            sliders,
            exporter: ExportManager::with_dependencies(options.export, dependencies),
        })
    }

    pub fn board(&self) -> &DrawingBoard {
        &self.board
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn canvas(&self) -> &CanvasView {
        &self.canvas
    }

    pub fn roster_text(&self) -> String {
        self.roster.text()
    }

    pub fn slider(&self, channel: ColorChannel) -> &ColorSlider {
        &self.sliders[channel.index()]
    }

    pub fn exporter(&self) -> &ExportManager {
        &self.exporter
    }

    /// Runs one command; text meant for the user is written to `out`.
    pub fn execute(&mut self, command: ScriptCommand, out: &mut impl Write) -> Result<()> {
        let board = &mut self.board;
        match command {
            ScriptCommand::Tool(tool) => self.input.set_tool(tool),
            ScriptCommand::Action(action) => self.input.set_action(action),
            ScriptCommand::Press(x, y) => {
                self.input
                    .on_mouse_press(board, MouseButton::Left, x, y)?
            }
            ScriptCommand::Drag(x, y) => self.input.on_mouse_motion(board, x, y)?,
            ScriptCommand::Release(x, y) => {
                self.input
                    .on_mouse_release(board, MouseButton::Left, x, y)?
            }
            ScriptCommand::Click(x, y) => self.input.click(board, x, y)?,
            ScriptCommand::Key(key) => self.input.on_key_press(board, key)?,
            ScriptCommand::Slider(channel, value) => {
                self.sliders[channel.index()].set_value(board, value)?
            }
            ScriptCommand::Export(format) => match self.exporter.export(board.shapes(), format) {
                ExportOutcome::Success(path) => writeln!(out, "Saved {}", path.display())?,
                ExportOutcome::Failed(message) => writeln!(out, "Save failed: {message}")?,
            },
            ScriptCommand::Roster => write!(out, "{}", self.roster.text())?,
        }
        Ok(())
    }

    /// Parses and runs a whole script, stopping at the first failing line.
    pub fn run_script(&mut self, text: &str, out: &mut impl Write) -> Result<()> {
        for ScriptLine { line, command } in parse_script(text)? {
            log::debug!("line {line}: {command:?}");
            self.execute(command, out)
                .with_context(|| format!("line {line}: {command:?} failed"))?;
        }
        Ok(())
    }
}
