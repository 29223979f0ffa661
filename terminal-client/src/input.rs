use common::games::puzzle2048::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    Move(Direction),
    Quit,
}

/// Maps a key press to a game action. Releases and unmapped keys give `None`.
pub fn decode_key(event: &KeyEvent) -> Option<Action> {
    if !matches!(event.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return None;
    }

    match event.code {
        KeyCode::Up => Some(Action::Move(Direction::Up)),
        KeyCode::Down => Some(Action::Move(Direction::Down)),
        KeyCode::Left => Some(Action::Move(Direction::Left)),
        KeyCode::Right => Some(Action::Move(Direction::Right)),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::Quit)
        }
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Some(Action::Move(Direction::Up)),
            's' => Some(Action::Move(Direction::Down)),
            'a' => Some(Action::Move(Direction::Left)),
            'd' => Some(Action::Move(Direction::Right)),
            'q' => Some(Action::Quit),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows_move() {
        assert_eq!(decode_key(&press(KeyCode::Up)), Some(Action::Move(Direction::Up)));
        assert_eq!(decode_key(&press(KeyCode::Down)), Some(Action::Move(Direction::Down)));
        assert_eq!(decode_key(&press(KeyCode::Left)), Some(Action::Move(Direction::Left)));
        assert_eq!(decode_key(&press(KeyCode::Right)), Some(Action::Move(Direction::Right)));
    }

    #[test]
    fn test_wasd_move_in_either_case() {
        assert_eq!(decode_key(&press(KeyCode::Char('w'))), Some(Action::Move(Direction::Up)));
        assert_eq!(decode_key(&press(KeyCode::Char('A'))), Some(Action::Move(Direction::Left)));
        assert_eq!(decode_key(&press(KeyCode::Char('s'))), Some(Action::Move(Direction::Down)));
        assert_eq!(decode_key(&press(KeyCode::Char('D'))), Some(Action::Move(Direction::Right)));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(decode_key(&press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(decode_key(&press(KeyCode::Esc)), Some(Action::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(decode_key(&ctrl_c), Some(Action::Quit));
    }

    #[test]
    fn test_unmapped_and_released_keys_ignored() {
        assert_eq!(decode_key(&press(KeyCode::Char('x'))), None);
        assert_eq!(decode_key(&press(KeyCode::Char('c'))), None);
        assert_eq!(decode_key(&press(KeyCode::Enter)), None);
        let release = KeyEvent::new_with_kind(KeyCode::Up, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(decode_key(&release), None);
    }
}
