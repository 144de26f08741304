//! Held-key tracking for terminal environments.
//!
//! The simulation polls "is this key held" once per frame and does its own
//! repeat gating. Terminals only deliver press/repeat events (and release
//! events when the keyboard enhancement protocol is active), so this module
//! rebuilds a held state from the event stream: a key is held from its last
//! press or repeat until a release event, or until a timeout passes without
//! another repeat.

use std::io;
use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::map_key;
use crate::types::{HeldKeys, LogicalKey};

/// Key events drained in one pump; anything beyond waits for the next frame
pub type KeyBatch = ArrayVec<KeyEvent, 32>;

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state.
pub const DEFAULT_RELEASE_TIMEOUT_MS: u64 = 150;

const TRACKED: [LogicalKey; 5] = [
    LogicalKey::Left,
    LogicalKey::Right,
    LogicalKey::Rotate,
    LogicalKey::SoftDrop,
    LogicalKey::Quit,
];

/// Tracks which logical keys are currently held.
#[derive(Debug, Clone)]
pub struct HeldKeyTracker {
    /// Last press/repeat per key, indexed like `TRACKED`
    last_seen: [Option<Instant>; 5],
    release_timeout: Duration,
}

impl HeldKeyTracker {
    pub fn new() -> Self {
        Self::with_release_timeout(Duration::from_millis(DEFAULT_RELEASE_TIMEOUT_MS))
    }

    pub fn with_release_timeout(release_timeout: Duration) -> Self {
        Self {
            last_seen: [None; 5],
            release_timeout,
        }
    }

    pub fn release_timeout(&self) -> Duration {
        self.release_timeout
    }

    fn slot(key: LogicalKey) -> usize {
        match key {
            LogicalKey::Left => 0,
            LogicalKey::Right => 1,
            LogicalKey::Rotate => 2,
            LogicalKey::SoftDrop => 3,
            LogicalKey::Quit => 4,
        }
    }

    /// Feed one terminal key event observed at `now`.
    ///
    /// Returns the logical key it affected, if any.
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) -> Option<LogicalKey> {
        let logical = map_key(key)?;
        let slot = Self::slot(logical);
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.last_seen[slot] = Some(now),
            KeyEventKind::Release => self.last_seen[slot] = None,
        }
        Some(logical)
    }

    /// Keys considered held at `now`.
    ///
    /// Quit latches: once pressed it stays held until [`HeldKeyTracker::reset`].
    pub fn held_at(&self, now: Instant) -> HeldKeys {
        let mut held = HeldKeys::new();
        for key in TRACKED {
            let Some(seen) = self.last_seen[Self::slot(key)] else {
                continue;
            };
            if key == LogicalKey::Quit || now.saturating_duration_since(seen) <= self.release_timeout {
                held.press(key);
            }
        }
        held
    }

    pub fn reset(&mut self) {
        self.last_seen = [None; 5];
    }
}

impl Default for HeldKeyTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Drain pending terminal key events without blocking.
///
/// Non-key events (resize, focus, mouse) are discarded.
pub fn drain_key_events() -> io::Result<KeyBatch> {
    let mut batch = KeyBatch::new();
    while !batch.is_full() && event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            batch.push(key);
        }
    }
    Ok(batch)
}
