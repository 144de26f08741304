//! Projection module - maps game state to abstract draw commands
//!
//! The renderer never sees the board or the piece. It receives rectangles in
//! normalized device coordinates (`-1.0..=1.0` on both axes, y up) plus the
//! danger line, and draws them in order.
//!
//! This module is pure and allocation-free: the command list is a fixed
//! capacity [`ArrayVec`] large enough for a full board and a full piece buffer.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::game_state::GameState;
use crate::piece::Tetromino;
use crate::types::{Rgb, BOARD_CELLS, BOARD_HEIGHT, BOARD_WIDTH, DANGER_LINE_COLOR, DANGER_LINE_Y};

/// One primitive for the external renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Filled rectangle with its lower-left corner at `(x, y)`
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Rgb,
    },
    /// Straight line segment
    Line {
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        color: Rgb,
    },
}

/// Upper bound on commands per frame: every board cell, every buffer cell, one line
pub const MAX_DRAW_COMMANDS: usize = 2 * BOARD_CELLS + 1;

/// Commands for one frame, in draw order
pub type DrawList = ArrayVec<DrawCommand, MAX_DRAW_COMMANDS>;

/// Map a cell index on an axis of `size` cells to normalized coordinates
///
/// Index 0 maps to -1.0 and index `size` to 1.0.
#[inline]
pub fn index_to_pos(index: f32, size: f32) -> f32 {
    index / size * 2.0 - 1.0
}

/// Board-shaped buffer holding only the active piece's cells
///
/// Cells at or above the top row are skipped, as are cells the grid cannot
/// hold (left of the walls or below the floor).
pub fn piece_buffer(active: Option<Tetromino>) -> Board {
    let mut buffer = Board::new();
    if let Some(piece) = active {
        let color = piece.block_type.color();
        for (x, y) in piece.cells() {
            if y < BOARD_HEIGHT as i8 {
                buffer.set_cell(x, y, Some(color));
            }
        }
    }
    buffer
}

/// Project the game state into a fresh draw list
pub fn project(state: &GameState) -> DrawList {
    let mut out = DrawList::new();
    project_into(state.board(), state.active(), &mut out);
    out
}

/// Project board and piece into an existing draw list (cleared first)
///
/// Order: settled cells, then piece cells, then the danger line.
pub fn project_into(board: &Board, active: Option<Tetromino>, out: &mut DrawList) {
    out.clear();
    push_grid(board, out);
    push_grid(&piece_buffer(active), out);
    out.push(DrawCommand::Line {
        x0: -1.0,
        y0: DANGER_LINE_Y,
        x1: 1.0,
        y1: DANGER_LINE_Y,
        color: DANGER_LINE_COLOR,
    });
}

fn push_grid(grid: &Board, out: &mut DrawList) {
    let w = BOARD_WIDTH as f32;
    let h = BOARD_HEIGHT as f32;

    // Column-major order.
    for x in 0..BOARD_WIDTH as i8 {
        for y in 0..BOARD_HEIGHT as i8 {
            if let Some(Some(color)) = grid.cell_at(x, y) {
                out.push(DrawCommand::Rect {
                    x: index_to_pos(x as f32, w),
                    y: index_to_pos(y as f32, h),
                    w: 2.0 / w,
                    h: 2.0 / h,
                    color: color.rgb(),
                });
            }
        }
    }
}
