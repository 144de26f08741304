//! Terminal front end: rasterizes draw lists into a framebuffer and flushes
//! them to the terminal.
//!
//! The renderer receives only the abstract draw list produced by the core
//! (normalized rectangles and a line). It has no view of the board itself.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: pure rasterization of draw commands (testable)
//! - [`renderer`]: crossterm output with diffed redraws, implementing the
//!   engine's `Renderer` seam

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tick_tetris_core as core;
pub use tick_tetris_engine as engine;
pub use tick_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, BoardLayout, GameView, StatusView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
