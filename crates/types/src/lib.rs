//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the simulation core, the frame driver and the terminal front end alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 24 rows (indexed 0-23, **bottom to top**; row 0 is the floor)
//! - **Spawn anchor**: (5, 23)
//!
//! # Frame Timing
//!
//! The simulation is frame-counted, not millisecond-timed:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MICROS` | 16666 | One logical frame (1/60 s) |
//! | `GRAVITY_DELAY_FRAMES` | 30 | Gravity counter threshold |
//! | `KEY_COOLDOWN_TICKS` | 7 | Frames between repeated key actions |
//!
//! # Examples
//!
//! ```
//! use tick_tetris_types::{BlockType, GameColor, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let block = BlockType::from_index(3);
//! assert_eq!(block, BlockType::O);
//! assert_eq!(block.color(), GameColor::Yellow);
//!
//! // A quarter turn maps (a, b) to (-b, a).
//! assert_eq!(Rotation::Deg90.apply((2, 0)), (0, 2));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 24);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (24 rows)
pub const BOARD_HEIGHT: u8 = 24;

/// Total number of cells on the board
pub const BOARD_CELLS: usize = BOARD_WIDTH as usize * BOARD_HEIGHT as usize;

/// Frames a key stays locked out after it fired
pub const KEY_COOLDOWN_TICKS: u8 = 7;

/// Gravity counter threshold; gravity acts on the call after the counter reaches it
pub const GRAVITY_DELAY_FRAMES: u32 = 30;

/// Spawn anchor column
pub const SPAWN_X: i8 = 5;

/// Spawn anchor row (top row of the board)
pub const SPAWN_Y: i8 = 23;

/// Length of one logical frame in microseconds (1_000_000 / 60, truncated)
pub const FRAME_MICROS: u64 = 16_666;

/// Normalized height of the danger line (about 2/3 of the board)
pub const DANGER_LINE_Y: f32 = 0.66;


/// The seven block types, in geometry-table order
///
/// The discriminant is the index into the geometry table and the value the
/// random source is reduced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl BlockType {
    /// All block types in table order
    pub const ALL: [BlockType; 7] = [
        BlockType::I,
        BlockType::J,
        BlockType::L,
        BlockType::O,
        BlockType::S,
        BlockType::T,
        BlockType::Z,
    ];

    /// Pick a block type from an arbitrary index (reduced mod 7)
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Index into the geometry table
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Color a settled cell of this block type is painted with
    pub fn color(&self) -> GameColor {
        match self {
            BlockType::I => GameColor::LightBlue,
            BlockType::J => GameColor::Blue,
            BlockType::L => GameColor::Orange,
            BlockType::O => GameColor::Yellow,
            BlockType::S => GameColor::Green,
            BlockType::T => GameColor::Purple,
            BlockType::Z => GameColor::Red,
        }
    }
}

/// RGB color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Colors a settled cell can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameColor {
    Blue,
    Red,
    LightBlue,
    Orange,
    Yellow,
    Green,
    Purple,
}

impl GameColor {
    /// Fixed draw color for this palette entry
    ///
    /// `LightBlue` keeps its historical value, which renders as a pale red.
    pub fn rgb(&self) -> Rgb {
        match self {
            GameColor::Blue => Rgb::new(0.0, 0.0, 1.0),
            GameColor::Red => Rgb::new(1.0, 0.0, 0.0),
            GameColor::LightBlue => Rgb::new(1.0, 0.3, 0.3),
            GameColor::Orange => Rgb::new(1.0, 0.6, 0.0),
            GameColor::Yellow => Rgb::new(1.0, 1.0, 0.0),
            GameColor::Green => Rgb::new(0.0, 1.0, 0.0),
            GameColor::Purple => Rgb::new(0.4, 0.1, 0.4),
        }
    }
}

/// Color of the danger line
pub const DANGER_LINE_COLOR: Rgb = Rgb::new(1.0, 0.0, 0.0);

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(GameColor)`: Settled cell painted with that color
pub type Cell = Option<GameColor>;

/// Rotation of a piece as a unit value in {1, i, -1, -i}
///
/// Rotations compose by multiplication; one step multiplies by `i`, which maps
/// an offset `(a, b)` to `(-b, a)`. With row 0 at the bottom this is a
/// counter-clockwise quarter turn on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    /// 1
    #[default]
    Deg0,
    /// i
    Deg90,
    /// -1
    Deg180,
    /// -i
    Deg270,
}

impl Rotation {
    /// Multiply by `i` (one 90° step)
    pub fn quarter_turn(&self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    /// Rotate an offset about the origin
    #[inline]
    pub fn apply(&self, (a, b): (i8, i8)) -> (i8, i8) {
        match self {
            Rotation::Deg0 => (a, b),
            Rotation::Deg90 => (-b, a),
            Rotation::Deg180 => (-a, -b),
            Rotation::Deg270 => (b, -a),
        }
    }
}

/// Logical keys the simulation reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    Left,
    Right,
    Rotate,
    SoftDrop,
    Quit,
}

impl LogicalKey {
    /// Keys that act on the piece and carry a cooldown, in application order
    pub const COOLDOWN_KEYS: [LogicalKey; 4] = [
        LogicalKey::Left,
        LogicalKey::Right,
        LogicalKey::Rotate,
        LogicalKey::SoftDrop,
    ];

    fn bit(&self) -> u8 {
        1 << (*self as u8)
    }
}

/// Set of logical keys currently held, polled once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HeldKeys {
    bits: u8,
}

impl HeldKeys {
    /// No keys held
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`HeldKeys::press`]
    pub fn with(mut self, key: LogicalKey) -> Self {
        self.press(key);
        self
    }

    pub fn press(&mut self, key: LogicalKey) {
        self.bits |= key.bit();
    }

    pub fn release(&mut self, key: LogicalKey) {
        self.bits &= !key.bit();
    }

    pub fn is_held(&self, key: LogicalKey) -> bool {
        self.bits & key.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}
