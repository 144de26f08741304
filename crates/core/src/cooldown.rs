//! Per-key cooldown counters
//!
//! Input is polled as "held" state every frame. A key fires only when its
//! counter is zero, then stays locked out for [`KEY_COOLDOWN_TICKS`] frames,
//! which turns a held key into one action per window.

use crate::types::{LogicalKey, KEY_COOLDOWN_TICKS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyCooldowns {
    remaining: [u8; 4],
}

impl KeyCooldowns {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(key: LogicalKey) -> Option<usize> {
        match key {
            LogicalKey::Left => Some(0),
            LogicalKey::Right => Some(1),
            LogicalKey::Rotate => Some(2),
            LogicalKey::SoftDrop => Some(3),
            LogicalKey::Quit => None,
        }
    }

    /// Frames left before the key may fire again (0 for keys without a cooldown)
    pub fn remaining(&self, key: LogicalKey) -> u8 {
        Self::slot(key).map(|i| self.remaining[i]).unwrap_or(0)
    }

    pub fn is_ready(&self, key: LogicalKey) -> bool {
        self.remaining(key) == 0
    }

    /// Lock the key out for a full cooldown window
    pub fn arm(&mut self, key: LogicalKey) {
        if let Some(i) = Self::slot(key) {
            self.remaining[i] = KEY_COOLDOWN_TICKS;
        }
    }

    /// Count every running cooldown down by one frame
    pub fn tick(&mut self) {
        for r in &mut self.remaining {
            *r = r.saturating_sub(1);
        }
    }
}
