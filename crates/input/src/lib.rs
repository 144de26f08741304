//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events to [`crate::types::LogicalKey`] and rebuilds a
//! per-frame "held keys" view from the event stream, including terminals that
//! never report key releases.

pub mod handler;
pub mod map;

pub use tick_tetris_types as types;

pub use handler::{drain_key_events, HeldKeyTracker, KeyBatch, DEFAULT_RELEASE_TIMEOUT_MS};
pub use map::map_key;
