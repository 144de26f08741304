//! Core game logic - pure and deterministic
//!
//! This crate contains the board model, block geometry, collision rules and
//! the per-frame controller. It has no dependencies on terminals, clocks or
//! any other I/O, which makes it:
//!
//! - **Deterministic**: the same random script produces the same game
//! - **Testable**: every phase of a frame is callable on its own
//! - **Allocation-free per frame**: sweeps and draw lists use `ArrayVec`
//!
//! # Module Structure
//!
//! - [`geometry`]: the seven block shapes as literal offset tables
//! - [`piece`]: the active piece (anchor, rotation, side moves)
//! - [`board`]: 10x24 settled-cell grid, row checks and row collapse
//! - [`collision`]: grounding and side-move tests
//! - [`cooldown`]: per-key repeat lockout
//! - [`rng`]: random source trait and a seedable LCG
//! - [`game_state`]: the fixed-step frame controller
//! - [`projection`]: game state to normalized draw commands
//!
//! # Rules
//!
//! This is a deliberately small ruleset: no scoring, levels, hold, preview,
//! wall kicks or game over. Rotation only nudges the piece back inside the
//! side walls. Row 0 is the floor and gravity lowers `y`.
//!
//! # Example
//!
//! ```
//! use tick_tetris_core::{project, GameState, SequenceSource};
//! use tick_tetris_types::{BlockType, HeldKeys};
//!
//! let mut game = GameState::new();
//! let mut rng = SequenceSource::of_blocks(&[BlockType::O]);
//!
//! let report = game.step(HeldKeys::new(), &mut rng);
//! assert_eq!(report.spawned, Some(BlockType::O));
//!
//! // Half of the O sits above the top row: two visible cells plus the danger line.
//! assert_eq!(project(&game).len(), 3);
//! ```

pub mod board;
pub mod collision;
pub mod cooldown;
pub mod game_state;
pub mod geometry;
pub mod piece;
pub mod projection;
pub mod rng;

pub use tick_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, CollapsedRows};
pub use collision::{can_shift, is_grounded};
pub use cooldown::KeyCooldowns;
pub use game_state::{FrameReport, GameState};
pub use geometry::{offsets_for, rotated_offsets, BlockShape, BLOCK_OFFSETS};
pub use piece::Tetromino;
pub use projection::{index_to_pos, project, project_into, DrawCommand, DrawList};
pub use rng::{RandomSource, SequenceSource, SimpleRng};
