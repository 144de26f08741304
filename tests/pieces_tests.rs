//! Piece tests - shape table, side moves and rotation nudging

use tick_tetris::core::{offsets_for, Board, Tetromino, BLOCK_OFFSETS};
use tick_tetris::types::{BlockType, GameColor, Rotation, BOARD_WIDTH};

#[test]
fn test_shape_table_order_matches_block_index() {
    for block in BlockType::ALL {
        assert_eq!(offsets_for(block), BLOCK_OFFSETS[block.index()]);
    }
    assert_eq!(BLOCK_OFFSETS[0], [(-1, 0), (0, 0), (1, 0), (2, 0)]);
    assert_eq!(BLOCK_OFFSETS[3], [(0, 0), (1, 0), (1, 1), (0, 1)]);
}

#[test]
fn test_spawn_cells() {
    let i = Tetromino::spawn(BlockType::I);
    assert_eq!(i.cells(), [(4, 23), (5, 23), (6, 23), (7, 23)]);

    let j = Tetromino::spawn(BlockType::J);
    assert_eq!(j.cells(), [(5, 22), (6, 22), (6, 23), (6, 24)]);
}

#[test]
fn test_move_right_until_wall() {
    let board = Board::new();
    let mut piece = Tetromino::spawn(BlockType::I);

    assert!(piece.move_right(&board));
    assert!(piece.move_right(&board));
    assert_eq!(piece.x, 7);

    // The rightmost cell is now in the last column.
    assert!(!piece.move_right(&board));
    assert_eq!(piece.x, 7);
    assert!(piece.cells().iter().all(|&(x, _)| x < BOARD_WIDTH as i8));
}

#[test]
fn test_moves_blocked_by_settled_cells() {
    let mut board = Board::new();
    board.set_cell(2, 5, Some(GameColor::Red));
    board.set_cell(6, 6, Some(GameColor::Red));

    let mut piece = Tetromino::at(BlockType::O, 3, 5);
    assert!(!piece.move_left(&board));
    assert_eq!(piece.x, 3);

    assert!(piece.move_right(&board));
    assert_eq!(piece.x, 4);
    assert!(!piece.move_right(&board));
    assert_eq!(piece.x, 4);
}

#[test]
fn test_four_rotations_return_to_identity() {
    let mut piece = Tetromino::at(BlockType::T, 5, 10);
    let start = piece;

    for expected in [Rotation::Deg90, Rotation::Deg180, Rotation::Deg270, Rotation::Deg0] {
        piece.rotate();
        assert_eq!(piece.rotation, expected);
    }
    // Away from the walls nothing is nudged.
    assert_eq!(piece, start);
}

#[test]
fn test_rotation_nudges_off_left_wall() {
    let mut piece = Tetromino::at(BlockType::T, 0, 10);

    piece.rotate();
    assert_eq!(piece.rotation, Rotation::Deg90);
    assert_eq!(piece.x, 0);

    // Deg180 puts one cell at x = -1.
    piece.rotate();
    assert_eq!(piece.rotation, Rotation::Deg180);
    assert_eq!(piece.x, 1);
}

#[test]
fn test_rotation_nudges_once_per_cell_outside() {
    let mut left = Tetromino {
        block_type: BlockType::I,
        rotation: Rotation::Deg90,
        x: 0,
        y: 10,
    };
    left.rotate();
    assert_eq!(left.x, 2);
    assert!(left.cells().iter().all(|&(x, _)| x >= 0));

    let mut right = Tetromino {
        block_type: BlockType::I,
        rotation: Rotation::Deg270,
        x: 9,
        y: 10,
    };
    right.rotate();
    assert_eq!(right.x, 7);
    assert!(right.cells().iter().all(|&(x, _)| x < BOARD_WIDTH as i8));
}

#[test]
fn test_rotation_ignores_settled_cells() {
    let mut board = Board::new();
    board.set_cell(5, 11, Some(GameColor::Blue));

    let mut piece = Tetromino::at(BlockType::I, 5, 10);
    piece.rotate();

    // The vertical I now overlaps the settled cell; rotation does not check.
    assert!(piece.cells().contains(&(5, 11)));
    assert!(board.is_occupied(5, 11));
}
