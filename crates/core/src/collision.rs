//! Collision module - pure placement tests against the board
//!
//! Nothing here mutates state. The game loop asks these questions every frame.

use crate::board::Board;
use crate::piece::Tetromino;
use crate::types::BOARD_WIDTH;

/// Check if the piece could move `dx` columns without leaving the board or
/// overlapping a settled cell
///
/// Cells above the top row are only checked against the side walls.
pub fn can_shift(piece: &Tetromino, board: &Board, dx: i8) -> bool {
    piece.cells().iter().all(|&(x, y)| {
        let nx = x + dx;
        nx >= 0 && nx < BOARD_WIDTH as i8 && !board.is_occupied(nx, y)
    })
}

/// Check if the piece is grounded (resting on the floor or the stack)
///
/// True when any cell sits on row 0 or has a settled cell directly below it.
/// A cell below row 0 can only appear after a rotation near the floor and
/// also counts, so a piece never falls through the floor.
pub fn is_grounded(piece: &Tetromino, board: &Board) -> bool {
    piece
        .cells()
        .iter()
        .any(|&(x, y)| y <= 0 || board.is_occupied(x, y - 1))
}

/// Check if any cell of the piece overlaps a settled cell
pub fn overlaps_stack(piece: &Tetromino, board: &Board) -> bool {
    piece.cells().iter().any(|&(x, y)| board.is_occupied(x, y))
}
