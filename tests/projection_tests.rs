//! Projection tests - game state to normalized draw commands

use tick_tetris::core::{index_to_pos, project, DrawCommand, GameState, Tetromino};
use tick_tetris::types::{BlockType, GameColor, Rgb, DANGER_LINE_COLOR, DANGER_LINE_Y};

fn rects(list: &[DrawCommand]) -> Vec<(f32, f32, Rgb)> {
    list.iter()
        .filter_map(|cmd| match *cmd {
            DrawCommand::Rect { x, y, color, .. } => Some((x, y, color)),
            DrawCommand::Line { .. } => None,
        })
        .collect()
}

#[test]
fn test_danger_line_is_always_last() {
    let mut game = GameState::new();
    game.board_mut().set_cell(2, 2, Some(GameColor::Blue));
    game.set_active(Some(Tetromino::at(BlockType::T, 5, 10)));

    let list = project(&game);
    assert_eq!(
        list.last(),
        Some(&DrawCommand::Line {
            x0: -1.0,
            y0: DANGER_LINE_Y,
            x1: 1.0,
            y1: DANGER_LINE_Y,
            color: DANGER_LINE_COLOR,
        })
    );
    assert_eq!(list.len(), 1 + 4 + 1);
}

#[test]
fn test_board_cells_map_to_normalized_corners() {
    let mut game = GameState::new();
    game.board_mut().set_cell(0, 0, Some(GameColor::Green));
    game.board_mut().set_cell(9, 23, Some(GameColor::Orange));

    let list = project(&game);
    let cells = rects(&list);
    assert_eq!(cells.len(), 2);

    // Column-major: column 0 before column 9.
    assert_eq!(cells[0], (-1.0, -1.0, GameColor::Green.rgb()));
    assert_eq!(cells[1], (index_to_pos(9.0, 10.0), index_to_pos(23.0, 24.0), GameColor::Orange.rgb()));

    match list[0] {
        DrawCommand::Rect { w, h, .. } => {
            assert_eq!(w, 0.2);
            assert_eq!(h, 2.0 / 24.0);
        }
        DrawCommand::Line { .. } => panic!("expected a rect first"),
    }
}

#[test]
fn test_settled_cells_come_before_piece_cells() {
    let mut game = GameState::new();
    game.board_mut().set_cell(9, 0, Some(GameColor::Red));
    game.set_active(Some(Tetromino::at(BlockType::O, 0, 5)));

    let cells = rects(&project(&game));
    assert_eq!(cells.len(), 5);
    assert_eq!(cells[0].2, GameColor::Red.rgb());
    assert!(cells[1..].iter().all(|c| c.2 == GameColor::Yellow.rgb()));
}

#[test]
fn test_piece_cells_above_top_row_are_not_drawn() {
    let mut game = GameState::new();
    game.set_active(Some(Tetromino::spawn(BlockType::J)));

    // J at the anchor: (5,22), (6,22), (6,23) visible, (6,24) above the top.
    assert_eq!(rects(&project(&game)).len(), 3);
}

#[test]
fn test_light_blue_keeps_its_palette_value() {
    let mut game = GameState::new();
    game.set_active(Some(Tetromino::at(BlockType::I, 4, 0)));
    let cells = rects(&project(&game));
    assert!(cells.iter().all(|c| c.2 == Rgb::new(1.0, 0.3, 0.3)));
}
