//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use std::io;

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, Focus};

/// 根据当前焦点和按键获取对应的 Action
pub fn get_action(focus: Focus, key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
        KeyCode::Enter => match focus {
            Focus::ClearButton => Some(Action::Clear),
            Focus::Mass | Focus::Height | Focus::CalculateButton => Some(Action::Calculate),
        },
        KeyCode::Backspace if focus.is_input() => Some(Action::DeleteChar),
        KeyCode::Char(c) if focus.is_input() => Some(Action::Input(c)),
        _ => None,
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(app.focus, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Palette;

    #[test]
    fn test_enter_depends_on_focus() {
        assert_eq!(get_action(Focus::Mass, KeyCode::Enter), Some(Action::Calculate));
        assert_eq!(get_action(Focus::Height, KeyCode::Enter), Some(Action::Calculate));
        assert_eq!(
            get_action(Focus::CalculateButton, KeyCode::Enter),
            Some(Action::Calculate)
        );
        assert_eq!(get_action(Focus::ClearButton, KeyCode::Enter), Some(Action::Clear));
    }

    #[test]
    fn test_chars_only_in_inputs() {
        assert_eq!(get_action(Focus::Height, KeyCode::Char('1')), Some(Action::Input('1')));
        assert_eq!(get_action(Focus::ClearButton, KeyCode::Char('1')), None);
        assert_eq!(get_action(Focus::CalculateButton, KeyCode::Backspace), None);
    }

    #[test]
    fn test_navigation_and_quit() {
        assert_eq!(get_action(Focus::Mass, KeyCode::Tab), Some(Action::FocusNext));
        assert_eq!(get_action(Focus::Mass, KeyCode::BackTab), Some(Action::FocusPrev));
        assert_eq!(get_action(Focus::Height, KeyCode::Esc), Some(Action::Quit));
        assert_eq!(get_action(Focus::Height, KeyCode::F(1)), None);
    }

    #[test]
    fn test_full_key_session() {
        let mut app = App::new(Palette::default());
        let keys = [
            KeyCode::Char('5'),
            KeyCode::Char('0'),
            KeyCode::Tab,
            KeyCode::Char('1'),
            KeyCode::Char('.'),
            KeyCode::Char('6'),
            KeyCode::Enter,
        ];
        for key in keys {
            assert!(!handle_key_event(&mut app, key).unwrap());
        }
        assert_eq!(app.result.map(|r| r.index), Some(19.53));

        assert!(handle_key_event(&mut app, KeyCode::Esc).unwrap());
    }
}
