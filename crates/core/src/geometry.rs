//! Geometry module - the block shape table
//!
//! Each block type is four cell offsets around a pivot, in an un-rotated frame
//! with y pointing up. The table is reproduced literally, including the O
//! block that pivots on its lower-left corner.

use crate::types::{BlockType, Rotation};

/// Offset of a single cell relative to the piece anchor
pub type Offset = (i8, i8);

/// Shape of a block - 4 cell offsets from the anchor
pub type BlockShape = [Offset; 4];

/// Shapes indexed by [`BlockType::index`]
#[rustfmt::skip]
pub const BLOCK_OFFSETS: [BlockShape; 7] = [
    [(-1, 0), (0, 0), (1, 0), (2, 0)],   // I
    [(0, -1), (1, -1), (1, 0), (1, 1)],  // J
    [(0, 1), (0, 0), (0, -1), (1, -1)],  // L
    [(0, 0), (1, 0), (1, 1), (0, 1)],    // O
    [(0, 0), (1, 0), (1, 1), (2, 1)],    // S
    [(0, -1), (1, 0), (-1, 0), (0, 0)],  // T
    [(-1, 0), (0, 0), (0, -1), (1, 0)],  // Z
];

/// Un-rotated offsets for a block type
pub fn offsets_for(block: BlockType) -> BlockShape {
    BLOCK_OFFSETS[block.index()]
}

/// Offsets for a block type after applying a rotation
pub fn rotated_offsets(block: BlockType, rotation: Rotation) -> BlockShape {
    offsets_for(block).map(|offset| rotation.apply(offset))
}
