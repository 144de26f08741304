//! Key mapping from terminal events to logical keys.

use crate::types::LogicalKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a terminal key to the logical key it drives.
pub fn map_key(key: KeyEvent) -> Option<LogicalKey> {
    if is_ctrl_c(key) {
        return Some(LogicalKey::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(LogicalKey::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(LogicalKey::Right)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(LogicalKey::SoftDrop)
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(LogicalKey::Rotate),

        // Quit
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(LogicalKey::Quit),

        _ => None,
    }
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), Some(LogicalKey::Left));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Right)), Some(LogicalKey::Right));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Down)), Some(LogicalKey::SoftDrop));

        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('H'))), Some(LogicalKey::Left));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('d'))), Some(LogicalKey::Right));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('J'))), Some(LogicalKey::SoftDrop));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), Some(LogicalKey::Rotate));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('w'))), Some(LogicalKey::Rotate));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('K'))), Some(LogicalKey::Rotate));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Esc)), Some(LogicalKey::Quit));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('q'))), Some(LogicalKey::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(LogicalKey::Quit)
        );
        // Plain 'c' is not bound.
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('c'))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }
}
