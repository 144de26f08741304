//! Tick Tetris (workspace facade crate).
//!
//! Re-exports the member crates under one `tick_tetris::{types,core,engine,input,term}`
//! path, plus the runner configuration used by the binary.

pub mod config;

pub use tick_tetris_core as core;
pub use tick_tetris_engine as engine;
pub use tick_tetris_input as input;
pub use tick_tetris_term as term;
pub use tick_tetris_types as types;

pub use config::Config;
