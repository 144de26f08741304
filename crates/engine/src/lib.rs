//! Frame driver - runs the core at a fixed rate against pluggable collaborators
//!
//! The core crate knows nothing about time, keys or pixels. This crate adds:
//!
//! - [`FixedTimestep`]: the 1/60 s accumulator (at most one frame per poll)
//! - [`InputSource`] / [`Renderer`]: the seams a host implements
//! - [`Session`]: one game plus its random source, stepped by the accumulator
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use tick_tetris_core::SimpleRng;
//! use tick_tetris_engine::{NullRenderer, PollOutcome, ScriptedInput, Session};
//!
//! let mut session = Session::new(SimpleRng::new(42));
//! let mut input = ScriptedInput::default();
//! let mut renderer = NullRenderer::default();
//!
//! let outcome = session
//!     .poll(Duration::from_millis(17), &mut input, &mut renderer)
//!     .unwrap();
//! assert!(matches!(outcome, PollOutcome::Stepped(_)));
//! assert!(session.state().active().is_some());
//! ```

pub mod session;
pub mod timestep;

pub use tick_tetris_core as core;
pub use tick_tetris_types as types;

pub use session::{InputSource, NullRenderer, PollOutcome, Renderer, ScriptedInput, Session};
pub use timestep::FixedTimestep;
