use super::*;
use crate::draw::{
    Color, DrawingBoard, Point, RED, Shape, ShapeFactory, ShapeKind, ShapeLimits, ShapeType,
};
use crate::input::{EditAction, Key, MouseButton};

fn create_test_input_state() -> InputState {
    InputState::new(ShapeFactory::seeded(11, ShapeLimits::default()))
}

fn board_with_circle(center: (i32, i32), radius: i32) -> DrawingBoard {
    let mut board = DrawingBoard::new();
    board.add_shape(Shape::circle(center.into(), radius, RED).unwrap());
    board.select_at(-1000, -1000);
    board
}

fn drag(state: &mut InputState, board: &mut DrawingBoard, path: &[(i32, i32)]) {
    let (x0, y0) = path[0];
    state
        .on_mouse_press(board, MouseButton::Left, x0, y0)
        .unwrap();
    for &(x, y) in &path[1..] {
        state.on_mouse_motion(board, x, y).unwrap();
    }
    let &(xn, yn) = path.last().unwrap();
    state
        .on_mouse_release(board, MouseButton::Left, xn, yn)
        .unwrap();
}

#[test]
fn test_defaults_are_circle_and_add() {
    let state = create_test_input_state();
    assert_eq!(state.tool, ShapeType::Circle);
    assert_eq!(state.action, EditAction::Add);
    assert_eq!(state.drag_state(), DragState::Idle);
}

#[test]
fn test_click_in_add_mode_adds_shape_at_pointer() {
    let mut state = create_test_input_state();
    let mut board = DrawingBoard::new();
    state.set_tool(ShapeType::Arrow);

    state.click(&mut board, 120, 80).unwrap();

    assert_eq!(board.len(), 1);
    let added = board.currently_selected().unwrap();
    assert_eq!(added.shape_type(), ShapeType::Arrow);
    assert_eq!(added.anchor(), Point::new(120, 80));
}

#[test]
fn test_click_in_other_modes_selects() {
    let mut state = create_test_input_state();
    let mut board = board_with_circle((50, 50), 10);
    board.add_shape(Shape::circle(Point::new(200, 200), 10, Color::rgb(0, 0, 9)).unwrap());
    state.set_action(EditAction::Resize);

    state.click(&mut board, 50, 50).unwrap();
    let selected = board.currently_selected().unwrap();
    assert_eq!(selected.anchor(), Point::new(50, 50));
    assert_eq!(board.shapes()[1].anchor(), Point::new(50, 50));

    state.click(&mut board, 400, 400).unwrap();
    assert!(board.currently_selected().is_none());
    assert_eq!(board.len(), 2);
}

#[test]
fn test_move_drag_follows_pointer() {
    let mut state = create_test_input_state();
    let mut board = board_with_circle((50, 50), 10);
    state.set_action(EditAction::Move);

    drag(&mut state, &mut board, &[(50, 50), (55, 52), (70, 60)]);

    assert_eq!(board.len(), 1);
    let moved = board.currently_selected().unwrap();
    assert_eq!(moved.anchor(), Point::new(70, 60));
    assert_eq!(state.drag_state(), DragState::Idle);
}

#[test]
fn test_move_drag_on_empty_space_does_nothing() {
    let mut state = create_test_input_state();
    let mut board = board_with_circle((50, 50), 10);
    state.set_action(EditAction::Move);

    drag(&mut state, &mut board, &[(300, 300), (320, 320)]);

    assert_eq!(board.shapes()[0].anchor(), Point::new(50, 50));
    assert!(board.currently_selected().is_none());
}

#[test]
fn test_resize_drag_grows_circle() {
    let mut state = create_test_input_state();
    let mut board = board_with_circle((50, 50), 10);
    state.set_action(EditAction::Resize);

    drag(&mut state, &mut board, &[(50, 50), (55, 50)]);

    let resized = board.currently_selected().unwrap();
    assert_eq!(resized.kind(), ShapeKind::Circle { radius: 15 });
    assert_eq!(resized.anchor(), Point::new(50, 50));
}

#[test]
fn test_clone_drag_pulls_one_copy() {
    let mut state = create_test_input_state();
    let mut board = board_with_circle((50, 50), 10);
    state.set_action(EditAction::Clone);

    drag(&mut state, &mut board, &[(50, 50), (60, 50), (80, 70)]);

    assert_eq!(board.len(), 2);
    assert_eq!(board.shapes()[0].anchor(), Point::new(50, 50));
    assert!(!board.shapes()[0].is_selected());
    let copy = board.currently_selected().unwrap();
    assert_eq!(copy.anchor(), Point::new(80, 70));
    assert_eq!(copy.color(), RED);
}

#[test]
fn test_clone_plus_leaves_a_trail() {
    let mut state = create_test_input_state();
    let mut board = board_with_circle((50, 50), 10);
    state.set_action(EditAction::ClonePlus);

    drag(&mut state, &mut board, &[(50, 50), (60, 50), (70, 50), (80, 50)]);

    let anchors: Vec<Point> = board.shapes().iter().map(Shape::anchor).collect();
    assert_eq!(
        anchors,
        vec![
            Point::new(50, 50),
            Point::new(60, 50),
            Point::new(70, 50),
            Point::new(80, 50)
        ]
    );
    assert!(board.shapes()[3].is_selected());
}

#[test]
fn test_add_plus_adds_one_shape_per_motion() {
    let mut state = create_test_input_state();
    let mut board = DrawingBoard::new();
    state.set_tool(ShapeType::Diamond);
    state.set_action(EditAction::AddPlus);

    drag(&mut state, &mut board, &[(10, 10), (20, 10), (30, 10), (40, 10)]);

    assert_eq!(board.len(), 3);
    assert!(
        board
            .shapes()
            .iter()
            .all(|shape| shape.shape_type() == ShapeType::Diamond)
    );
    assert_eq!(board.currently_selected().unwrap().anchor(), Point::new(40, 10));
}

#[test]
fn test_drag_in_add_mode_adds_nothing() {
    let mut state = create_test_input_state();
    let mut board = DrawingBoard::new();

    drag(&mut state, &mut board, &[(10, 10), (30, 30)]);

    assert!(board.is_empty());
}

#[test]
fn test_motion_without_press_is_ignored() {
    let mut state = create_test_input_state();
    let mut board = board_with_circle((50, 50), 10);
    state.set_action(EditAction::Move);

    state.on_mouse_motion(&mut board, 90, 90).unwrap();

    assert_eq!(board.shapes()[0].anchor(), Point::new(50, 50));
}

#[test]
fn test_right_press_cancels_drag() {
    let mut state = create_test_input_state();
    let mut board = board_with_circle((50, 50), 10);
    state.set_action(EditAction::Move);

    state
        .on_mouse_press(&mut board, MouseButton::Left, 50, 50)
        .unwrap();
    state
        .on_mouse_press(&mut board, MouseButton::Right, 50, 50)
        .unwrap();
    state.on_mouse_motion(&mut board, 90, 90).unwrap();

    assert_eq!(state.drag_state(), DragState::Idle);
    assert_eq!(board.currently_selected().unwrap().anchor(), Point::new(50, 50));
}

#[test]
fn test_r_deletes_selection_only_when_selected() {
    let mut state = create_test_input_state();
    let mut board = board_with_circle((50, 50), 10);

    state.on_key_press(&mut board, Key::Char('r')).unwrap();
    assert_eq!(board.len(), 1);

    board.select_at(50, 50);
    state.on_key_press(&mut board, Key::Char('r')).unwrap();
    assert!(board.is_empty());
}

#[test]
fn test_e_erases_everything_and_drops_hold() {
    let mut state = create_test_input_state();
    let mut board = board_with_circle((50, 50), 10);
    state.set_action(EditAction::Move);

    state
        .on_mouse_press(&mut board, MouseButton::Left, 50, 50)
        .unwrap();
    state.on_key_press(&mut board, Key::Char('e')).unwrap();
    state.on_mouse_motion(&mut board, 60, 60).unwrap();

    assert!(board.is_empty());
    assert!(matches!(
        state.drag_state(),
        DragState::Pressed { holding: false, .. }
    ));
}

#[test]
fn test_unbound_keys_are_ignored() {
    let mut state = create_test_input_state();
    let mut board = board_with_circle((50, 50), 10);

    state.on_key_press(&mut board, Key::Char('x')).unwrap();
    state.on_key_press(&mut board, Key::Unknown).unwrap();

    assert_eq!(board.len(), 1);
}
