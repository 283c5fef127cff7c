use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction;

/// A discrete request from the player, buffered and applied at the next
/// tick boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Turn(Direction),
    Start,
    Quit,
}

pub fn intent_for_key(ev: &KeyEvent) -> Option<Intent> {
    if is_ctrl_c(ev) {
        return Some(Intent::Quit);
    }

    match ev.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Intent::Turn(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Intent::Turn(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Intent::Turn(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Intent::Turn(Direction::Right))
        }
        KeyCode::Char(' ') => Some(Intent::Start),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Intent::Quit),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_wasd_turn() {
        assert_eq!(intent_for_key(&key(KeyCode::Up)), Some(Intent::Turn(Direction::Up)));
        assert_eq!(intent_for_key(&key(KeyCode::Down)), Some(Intent::Turn(Direction::Down)));
        assert_eq!(intent_for_key(&key(KeyCode::Left)), Some(Intent::Turn(Direction::Left)));
        assert_eq!(intent_for_key(&key(KeyCode::Right)), Some(Intent::Turn(Direction::Right)));

        assert_eq!(intent_for_key(&key(KeyCode::Char('w'))), Some(Intent::Turn(Direction::Up)));
        assert_eq!(intent_for_key(&key(KeyCode::Char('a'))), Some(Intent::Turn(Direction::Left)));
        assert_eq!(intent_for_key(&key(KeyCode::Char('s'))), Some(Intent::Turn(Direction::Down)));
        assert_eq!(intent_for_key(&key(KeyCode::Char('D'))), Some(Intent::Turn(Direction::Right)));
    }

    #[test]
    fn space_starts() {
        assert_eq!(intent_for_key(&key(KeyCode::Char(' '))), Some(Intent::Start));
    }

    #[test]
    fn quit_keys() {
        assert_eq!(intent_for_key(&key(KeyCode::Char('q'))), Some(Intent::Quit));
        assert_eq!(intent_for_key(&key(KeyCode::Esc)), Some(Intent::Quit));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(intent_for_key(&ctrl_c), Some(Intent::Quit));
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(intent_for_key(&key(KeyCode::Char('x'))), None);
        assert_eq!(intent_for_key(&key(KeyCode::Tab)), None);
        assert_eq!(intent_for_key(&key(KeyCode::Char('c'))), None);
    }
}
