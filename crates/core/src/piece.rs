//! Piece module - the active falling block
//!
//! A piece is a block type, an anchor position and a rotation. Its absolute
//! cells are always derived, never stored: rotate each table offset, then add
//! the anchor.

use crate::board::Board;
use crate::collision::can_shift;
use crate::geometry::rotated_offsets;
use crate::types::{BlockType, Rotation, BOARD_WIDTH, SPAWN_X, SPAWN_Y};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub block_type: BlockType,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new piece at the spawn anchor with identity rotation
    pub fn spawn(block_type: BlockType) -> Self {
        Self::at(block_type, SPAWN_X, SPAWN_Y)
    }

    /// Create a piece at an arbitrary anchor with identity rotation
    pub fn at(block_type: BlockType, x: i8, y: i8) -> Self {
        Self {
            block_type,
            rotation: Rotation::Deg0,
            x,
            y,
        }
    }

    /// Absolute positions of the four cells
    pub fn cells(&self) -> [(i8, i8); 4] {
        rotated_offsets(self.block_type, self.rotation).map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Shift one column left unless a wall or settled cell is in the way
    ///
    /// Returns whether the piece moved.
    pub fn move_left(&mut self, board: &Board) -> bool {
        if !can_shift(self, board, -1) {
            return false;
        }
        self.x -= 1;
        true
    }

    /// Shift one column right unless a wall or settled cell is in the way
    ///
    /// Returns whether the piece moved.
    pub fn move_right(&mut self, board: &Board) -> bool {
        if !can_shift(self, board, 1) {
            return false;
        }
        self.x += 1;
        true
    }

    /// Rotate one quarter turn, then nudge the anchor back toward the walls
    ///
    /// The nudge is applied once per out-of-range cell, all measured against
    /// the cells as they were right after rotating. It does not look at
    /// settled cells, so a rotation may overlap the stack.
    pub fn rotate(&mut self) {
        self.rotation = self.rotation.quarter_turn();

        for (x, _) in self.cells() {
            if x < 0 {
                self.x += 1;
            }
            if x >= BOARD_WIDTH as i8 {
                self.x -= 1;
            }
        }
    }
}
