//! Game state module - the per-frame controller
//!
//! This module ties together the board, the active piece, key cooldowns and
//! the gravity counter. [`GameState::step`] advances exactly one logical frame:
//!
//! 1. input (cooldown-gated key actions)
//! 2. gravity (every 31st call: freeze if grounded, else fall one row)
//! 3. line-clear sweep (every frame)
//! 4. spawn (when no piece is active)
//!
//! Rendering reads the result through [`crate::projection`].

use crate::board::{Board, CollapsedRows};
use crate::collision::{is_grounded, overlaps_stack};
use crate::cooldown::KeyCooldowns;
use crate::piece::Tetromino;
use crate::rng::RandomSource;
use crate::types::{BlockType, HeldKeys, LogicalKey, GRAVITY_DELAY_FRAMES};

/// What happened during one call to [`GameState::step`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// The active piece was frozen into the board this frame
    pub froze: bool,
    /// Row indices collapsed by the sweep, in sweep order
    pub collapsed: CollapsedRows,
    /// Block type spawned at the end of the frame
    pub spawned: Option<BlockType>,
    /// The quit key was held
    pub quit_requested: bool,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    active: Option<Tetromino>,
    cooldowns: KeyCooldowns,
    /// Frames since gravity last acted
    gravity_counter: u32,
    /// Suppresses the gravity descent while set; soft drop clears it
    fast_fall: bool,
    quit_requested: bool,
    /// Number of completed `step` calls
    frame: u64,
    /// Monotonic id of the active piece (increments on every spawn)
    piece_id: u32,
    /// Spawns that landed on settled cells (top-out is not handled)
    spawn_overlaps: u32,
}

impl GameState {
    /// Create a game with an empty board and no active piece
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active: None,
            cooldowns: KeyCooldowns::new(),
            gravity_counter: 0,
            fast_fall: false,
            quit_requested: false,
            frame: 0,
            piece_id: 0,
            spawn_overlaps: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for hosts that stage a position (and for tests)
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    /// Replace the active piece without validation
    pub fn set_active(&mut self, piece: Option<Tetromino>) {
        self.active = piece;
    }

    pub fn cooldowns(&self) -> &KeyCooldowns {
        &self.cooldowns
    }

    pub fn gravity_counter(&self) -> u32 {
        self.gravity_counter
    }

    pub fn fast_fall(&self) -> bool {
        self.fast_fall
    }

    /// While set, gravity still freezes grounded pieces but no longer lowers
    /// falling ones. A soft drop clears it.
    pub fn set_fast_fall(&mut self, on: bool) {
        self.fast_fall = on;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn spawn_overlaps(&self) -> u32 {
        self.spawn_overlaps
    }

    /// Check if the active piece is grounded; false without a piece
    pub fn is_grounded(&self) -> bool {
        self.active
            .map(|piece| is_grounded(&piece, &self.board))
            .unwrap_or(false)
    }

    /// Advance one logical frame
    pub fn step<R: RandomSource + ?Sized>(&mut self, keys: HeldKeys, rng: &mut R) -> FrameReport {
        self.handle_input(keys);
        let froze = self.apply_gravity();
        let collapsed = self.board.sweep_and_clear();
        let spawned = self.spawn_if_empty(rng);
        self.frame += 1;

        FrameReport {
            froze,
            collapsed,
            spawned,
            quit_requested: self.quit_requested,
        }
    }

    /// Input phase: apply held keys whose cooldown has run out
    ///
    /// Keys act in a fixed order (left, right, rotate, soft drop). A key that
    /// fires re-arms its cooldown even when the action itself is blocked.
    /// Every cooldown counts down once per call, piece or not.
    pub fn handle_input(&mut self, keys: HeldKeys) {
        if keys.is_held(LogicalKey::Quit) {
            self.quit_requested = true;
        }

        if self.active.is_some() {
            for key in LogicalKey::COOLDOWN_KEYS {
                if keys.is_held(key) && self.cooldowns.is_ready(key) {
                    self.cooldowns.arm(key);
                    self.apply_key(key);
                }
            }
        }

        self.cooldowns.tick();
    }

    fn apply_key(&mut self, key: LogicalKey) {
        let grounded = self.is_grounded();
        let Some(piece) = self.active.as_mut() else {
            return;
        };

        match key {
            LogicalKey::Left => {
                piece.move_left(&self.board);
            }
            LogicalKey::Right => {
                piece.move_right(&self.board);
            }
            LogicalKey::Rotate => piece.rotate(),
            LogicalKey::SoftDrop => {
                if !grounded {
                    piece.y -= 1;
                    self.fast_fall = false;
                }
            }
            LogicalKey::Quit => {}
        }
    }

    /// Gravity phase: returns true if the active piece was frozen
    ///
    /// The counter counts up to [`GRAVITY_DELAY_FRAMES`]; the call after that
    /// resets it and acts, so gravity fires once every 31 calls.
    pub fn apply_gravity(&mut self) -> bool {
        if self.gravity_counter < GRAVITY_DELAY_FRAMES {
            self.gravity_counter += 1;
            return false;
        }
        self.gravity_counter = 0;

        let froze = self.is_grounded() && self.freeze_active();

        if let Some(piece) = self.active.as_mut() {
            if !self.fast_fall {
                piece.y -= 1;
            }
        }

        froze
    }

    /// Write the active piece into the board with its block color and clear it
    ///
    /// Cells outside the grid are dropped. Returns false without a piece.
    pub fn freeze_active(&mut self) -> bool {
        let Some(piece) = self.active.take() else {
            return false;
        };
        self.board
            .write_cells(&piece.cells(), piece.block_type.color());
        true
    }

    /// Spawn phase: create a piece at the spawn anchor if none is active
    ///
    /// Placement is not validated. A spawn on top of settled cells is counted
    /// in [`GameState::spawn_overlaps`] and otherwise left as is.
    pub fn spawn_if_empty<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<BlockType> {
        if self.active.is_some() {
            return None;
        }

        let block_type = rng.next_block();
        let piece = Tetromino::spawn(block_type);
        if overlaps_stack(&piece, &self.board) {
            self.spawn_overlaps = self.spawn_overlaps.wrapping_add(1);
        }
        self.active = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);
        Some(block_type)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
