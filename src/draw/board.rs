//! The drawing board: an ordered shape stack with a single selection.

use super::color::Color;
use super::error::BoardError;
use super::shape::Shape;
use log::{debug, warn};
use std::fmt;
use std::rc::Rc;

/// Observer of board changes.
///
/// Listeners are called synchronously, in registration order, after every
/// board mutation. They receive the board read-only and re-derive whatever
/// they display from it. An error from one listener is logged and does not
/// stop the others.
pub trait BoardListener {
    fn board_changed(&self, board: &DrawingBoard) -> anyhow::Result<()>;
}

/// Ordered stack of shapes (index 0 = bottom, last = top) with change
/// notification.
///
/// At most one shape is selected at any time, and a selected shape is always
/// the topmost one. Every mutating method restores that before notifying.
#[derive(Default)]
pub struct DrawingBoard {
    stack: Vec<Shape>,
    listeners: Vec<Rc<dyn BoardListener>>,
}

impl fmt::Debug for DrawingBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawingBoard")
            .field("stack", &self.stack)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl DrawingBoard {
    /// Creates an empty board with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Adds a shape on top of the stack and selects it.
    pub fn add_shape(&mut self, mut shape: Shape) {
        self.deselect_all();
        shape.set_selected(true);
        debug!("Adding {}", shape);
        self.stack.push(shape);
        self.notify_listeners();
    }

    /// Selects the topmost shape under `(x, y)` and raises it to the top.
    ///
    /// Clicking empty space clears the selection. Listeners are notified
    /// either way.
    pub fn select_at(&mut self, x: i32, y: i32) {
        let hit = self.stack.iter().rposition(|shape| shape.is_on(x, y));
        self.deselect_all();
        if let Some(index) = hit {
            let mut shape = self.stack.remove(index);
            shape.set_selected(true);
            debug!("Selected {} at ({x}, {y})", shape.shape_type().name());
            self.stack.push(shape);
        } else {
            debug!("Nothing at ({x}, {y}); selection cleared");
        }
        self.notify_listeners();
    }

    /// Returns the selected shape, if any. Only the top can be selected.
    pub fn currently_selected(&self) -> Option<&Shape> {
        self.stack.last().filter(|shape| shape.is_selected())
    }

    /// Removes the selected shape; the shape below it becomes selected.
    ///
    /// # Errors
    /// [`BoardError::InvalidState`] if nothing is selected.
    pub fn delete_selected(&mut self) -> Result<Shape, BoardError> {
        self.require_selection("deletion")?;
        let removed = self
            .stack
            .pop()
            .ok_or_else(|| BoardError::InvalidState("No item selected for deletion".into()))?;
        self.deselect_all();
        if let Some(top) = self.stack.last_mut() {
            top.set_selected(true);
        }
        debug!("Deleted {}", removed);
        self.notify_listeners();
        Ok(removed)
    }

    /// Removes every shape.
    pub fn delete_all(&mut self) {
        debug!("Clearing {} shapes", self.stack.len());
        self.stack.clear();
        self.notify_listeners();
    }

    /// Replaces the color of the selected shape.
    ///
    /// Passing `None` is rejected. On an empty board this is a silent no-op.
    ///
    /// # Errors
    /// - [`BoardError::InvalidArgument`] if `color` is `None`
    /// - [`BoardError::InvalidState`] if shapes exist but none is selected
    pub fn change_color_of_selected(
        &mut self,
        color: impl Into<Option<Color>>,
    ) -> Result<(), BoardError> {
        let color = color
            .into()
            .ok_or_else(|| BoardError::InvalidArgument("Null color...unacceptable".into()))?;
        if self.stack.is_empty() {
            return Ok(());
        }
        self.require_selection("color change")?;
        if let Some(top) = self.stack.last_mut() {
            top.set_color(color);
        }
        self.notify_listeners();
        Ok(())
    }

    /// Moves the selected shape by the given offsets.
    ///
    /// # Errors
    /// [`BoardError::InvalidState`] if nothing is selected.
    pub fn move_shape_by(&mut self, dx: i32, dy: i32) -> Result<(), BoardError> {
        self.require_selection("movement")?;
        if let Some(top) = self.stack.last_mut() {
            top.shift_upper_left_by(dx, dy);
        }
        self.notify_listeners();
        Ok(())
    }

    /// Resizes the selected shape; out-of-range changes are clamped by the
    /// shape itself.
    ///
    /// # Errors
    /// [`BoardError::InvalidState`] if nothing is selected.
    pub fn resize_selected(&mut self, dx: i32, dy: i32) -> Result<(), BoardError> {
        self.require_selection("resizing")?;
        if let Some(top) = self.stack.last_mut() {
            top.resize(dx, dy);
        }
        self.notify_listeners();
        Ok(())
    }

    /// Adds a copy of the selected shape on top; the copy becomes the
    /// selection.
    ///
    /// # Errors
    /// [`BoardError::InvalidState`] if nothing is selected.
    pub fn clone_selected(&mut self) -> Result<(), BoardError> {
        let copy = self
            .currently_selected()
            .map(Shape::copy_of)
            .ok_or_else(|| BoardError::InvalidState("No item selected for cloning".into()))?;
        self.add_shape(copy);
        Ok(())
    }

    /// Returns a snapshot of all shapes, bottom to top.
    ///
    /// The snapshot is owned by the caller; changing it never affects the
    /// board.
    pub fn get_shapes(&self) -> Vec<Shape> {
        self.stack.clone()
    }

    /// Borrows the shapes, bottom to top, without copying.
    pub fn shapes(&self) -> &[Shape] {
        &self.stack
    }

    /// Registers a listener and immediately notifies so it can sync to the
    /// current state.
    pub fn add_listener(&mut self, listener: Rc<dyn BoardListener>) {
        self.register_listener(listener);
        self.prime();
    }

    /// Registers a listener without notifying anyone.
    pub fn register_listener(&mut self, listener: Rc<dyn BoardListener>) {
        self.listeners.push(listener);
    }

    /// Sends the initial-sync notification to every listener.
    pub fn prime(&self) {
        self.notify_listeners();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Calls every listener in registration order.
    pub fn notify_listeners(&self) {
        for (index, listener) in self.listeners.iter().enumerate() {
            if let Err(err) = listener.board_changed(self) {
                warn!("Board listener #{index} failed: {err:#}");
            }
        }
    }

    fn require_selection(&self, operation: &str) -> Result<(), BoardError> {
        if self.currently_selected().is_none() {
            warn!("Rejected {operation}: no shape selected");
            return Err(BoardError::InvalidState(format!(
                "No item selected for {operation}"
            )));
        }
        Ok(())
    }

    fn deselect_all(&mut self) {
        for shape in &mut self.stack {
            shape.set_selected(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, GREEN, RED};
    use crate::draw::{Point, ShapeType};
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct CountingListener {
        calls: Cell<usize>,
        last_len: Cell<usize>,
    }

    impl BoardListener for CountingListener {
        fn board_changed(&self, board: &DrawingBoard) -> anyhow::Result<()> {
            self.calls.set(self.calls.get() + 1);
            self.last_len.set(board.len());
            Ok(())
        }
    }

    struct FailingListener;

    impl BoardListener for FailingListener {
        fn board_changed(&self, _board: &DrawingBoard) -> anyhow::Result<()> {
            anyhow::bail!("listener exploded")
        }
    }

    struct OrderListener {
        id: usize,
        log: Rc<RefCell<Vec<usize>>>,
    }

    impl BoardListener for OrderListener {
        fn board_changed(&self, _board: &DrawingBoard) -> anyhow::Result<()> {
            self.log.borrow_mut().push(self.id);
            Ok(())
        }
    }

    fn circle_a() -> Shape {
        Shape::circle(Point::new(50, 50), 10, RED).unwrap()
    }

    fn diamond_b() -> Shape {
        Shape::diamond(Point::new(200, 0), 20, 20, BLUE).unwrap()
    }

    fn assert_selection_invariant(board: &DrawingBoard) {
        let shapes = board.get_shapes();
        let selected: Vec<usize> = shapes
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_selected())
            .map(|(i, _)| i)
            .collect();
        assert!(selected.len() <= 1, "more than one selected: {selected:?}");
        if let Some(&index) = selected.first() {
            assert_eq!(index, shapes.len() - 1, "selected shape is not on top");
        }
    }

    #[test]
    fn add_shape_selects_new_top() {
        let mut board = DrawingBoard::new();
        board.add_shape(circle_a());
        board.add_shape(diamond_b());
        let selected = board.currently_selected().expect("selection");
        assert_eq!(selected.shape_type(), ShapeType::Diamond);
        assert!(!board.shapes()[0].is_selected());
        assert_selection_invariant(&board);
    }

    #[test]
    fn select_at_promotes_hit_to_top() {
        let mut board = DrawingBoard::new();
        board.add_shape(circle_a());
        board.add_shape(diamond_b());
        board.select_at(50, 50);

        let shapes = board.get_shapes();
        assert_eq!(shapes[0].shape_type(), ShapeType::Diamond);
        assert_eq!(shapes[1].shape_type(), ShapeType::Circle);
        assert!(shapes[1].is_selected());
        assert!(!shapes[0].is_selected());
    }

    #[test]
    fn select_at_prefers_topmost_overlap() {
        let mut board = DrawingBoard::new();
        board.add_shape(Shape::circle(Point::new(50, 50), 10, RED).unwrap());
        board.add_shape(Shape::circle(Point::new(55, 50), 10, GREEN).unwrap());
        board.add_shape(diamond_b());
        board.select_at(52, 50);
        assert_eq!(board.currently_selected().unwrap().color(), GREEN);

        // Re-selecting the lower circle raises it above the green one.
        board.select_at(42, 50);
        assert_eq!(board.currently_selected().unwrap().color(), RED);
        board.select_at(52, 50);
        assert_eq!(board.currently_selected().unwrap().color(), RED);
    }

    #[test]
    fn select_at_empty_space_clears_selection() {
        let mut board = DrawingBoard::new();
        board.add_shape(circle_a());
        board.select_at(500, 500);
        assert!(board.currently_selected().is_none());
        assert_eq!(board.len(), 1);
        assert_selection_invariant(&board);
    }

    #[test]
    fn delete_selected_on_single_shape_empties_board() {
        let mut board = DrawingBoard::new();
        board.add_shape(circle_a());
        let removed = board.delete_selected().unwrap();
        assert_eq!(removed.shape_type(), ShapeType::Circle);
        assert!(board.is_empty());
        assert!(board.currently_selected().is_none());
    }

    #[test]
    fn delete_selected_selects_new_top() {
        let mut board = DrawingBoard::new();
        board.add_shape(circle_a());
        board.add_shape(diamond_b());
        board.delete_selected().unwrap();
        assert_eq!(board.len(), 1);
        assert_eq!(
            board.currently_selected().unwrap().shape_type(),
            ShapeType::Circle
        );
    }

    #[test]
    fn delete_selected_without_selection_is_invalid_state() {
        let mut board = DrawingBoard::new();
        assert!(matches!(
            board.delete_selected(),
            Err(BoardError::InvalidState(_))
        ));
        board.add_shape(circle_a());
        board.select_at(-100, -100);
        assert!(matches!(
            board.delete_selected(),
            Err(BoardError::InvalidState(_))
        ));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn delete_all_clears_everything() {
        let mut board = DrawingBoard::new();
        board.add_shape(circle_a());
        board.add_shape(diamond_b());
        board.delete_all();
        assert!(board.is_empty());
        board.delete_all();
        assert!(board.is_empty());
    }

    #[test]
    fn change_color_rejects_none() {
        let mut board = DrawingBoard::new();
        assert!(matches!(
            board.change_color_of_selected(None),
            Err(BoardError::InvalidArgument(_))
        ));
    }

    #[test]
    fn change_color_on_empty_board_is_noop() {
        let mut board = DrawingBoard::new();
        let listener = Rc::new(CountingListener::default());
        board.add_listener(listener.clone());
        assert_eq!(board.change_color_of_selected(GREEN), Ok(()));
        assert_eq!(listener.calls.get(), 1);
    }

    #[test]
    fn change_color_requires_selection_on_non_empty_board() {
        let mut board = DrawingBoard::new();
        board.add_shape(circle_a());
        board.select_at(-1, -1);
        assert!(matches!(
            board.change_color_of_selected(GREEN),
            Err(BoardError::InvalidState(_))
        ));
        board.select_at(50, 50);
        board.change_color_of_selected(GREEN).unwrap();
        assert_eq!(board.currently_selected().unwrap().color(), GREEN);
    }

    #[test]
    fn move_and_resize_apply_to_selection() {
        let mut board = DrawingBoard::new();
        assert!(matches!(
            board.move_shape_by(1, 1),
            Err(BoardError::InvalidState(_))
        ));
        board.add_shape(circle_a());
        board.move_shape_by(10, -5).unwrap();
        assert_eq!(board.shapes()[0].anchor(), Point::new(60, 45));
        board.resize_selected(5, 0).unwrap();
        assert!(board.shapes()[0].is_on(75, 45));

        board.select_at(0, 0);
        assert!(board.resize_selected(1, 1).is_err());
        assert!(board.move_shape_by(1, 1).is_err());
    }

    #[test]
    fn clone_selected_adds_independent_copy() {
        let mut board = DrawingBoard::new();
        assert!(board.clone_selected().is_err());
        board.add_shape(circle_a());
        board.clone_selected().unwrap();
        board.move_shape_by(100, 0).unwrap();

        let shapes = board.get_shapes();
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].anchor(), Point::new(50, 50));
        assert_eq!(shapes[1].anchor(), Point::new(150, 50));
        assert!(shapes[1].is_selected());
        assert!(!shapes[0].is_selected());
    }

    #[test]
    fn get_shapes_is_a_snapshot() {
        let mut board = DrawingBoard::new();
        board.add_shape(circle_a());
        let mut snapshot = board.get_shapes();
        snapshot[0].set_selected(false);
        snapshot[0].shift_upper_left_by(100, 100);
        snapshot.clear();

        assert_eq!(board.len(), 1);
        assert!(board.currently_selected().is_some());
        assert_eq!(board.shapes()[0].anchor(), Point::new(50, 50));
    }

    #[test]
    fn add_listener_primes_once_and_every_mutation_notifies() {
        let mut board = DrawingBoard::new();
        let listener = Rc::new(CountingListener::default());
        board.add_listener(listener.clone());
        assert_eq!(listener.calls.get(), 1);

        board.add_shape(circle_a());
        board.select_at(0, 0);
        board.select_at(50, 50);
        board.move_shape_by(1, 1).unwrap();
        board.delete_selected().unwrap();
        board.delete_all();
        assert_eq!(listener.calls.get(), 7);
        assert_eq!(listener.last_len.get(), 0);
    }

    #[test]
    fn register_listener_does_not_notify_until_primed() {
        let mut board = DrawingBoard::new();
        let listener = Rc::new(CountingListener::default());
        board.register_listener(listener.clone());
        assert_eq!(listener.calls.get(), 0);
        board.prime();
        assert_eq!(listener.calls.get(), 1);
    }

    #[test]
    fn listeners_run_in_registration_order_past_failures() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut board = DrawingBoard::new();
        board.register_listener(Rc::new(OrderListener {
            id: 1,
            log: log.clone(),
        }));
        board.register_listener(Rc::new(FailingListener));
        board.register_listener(Rc::new(OrderListener {
            id: 2,
            log: log.clone(),
        }));
        assert_eq!(board.listener_count(), 3);

        board.add_shape(circle_a());
        assert_eq!(*log.borrow(), vec![1, 2]);
    }

    #[test]
    fn invariant_holds_over_mixed_operations() {
        let mut board = DrawingBoard::new();
        let points = [(50, 50), (205, 10), (0, 0), (45, 52), (200, 2)];
        for i in 0..30 {
            match i % 5 {
                0 => board.add_shape(circle_a()),
                1 => board.add_shape(diamond_b()),
                2 | 3 => {
                    let (x, y) = points[i % points.len()];
                    board.select_at(x, y);
                }
                _ => {
                    let _ = board.delete_selected();
                }
            }
            assert_selection_invariant(&board);
        }
    }
}
