//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件按当前聚焦控件转换为 Action

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::Action;
use super::state::{ControlKind, Form};

/// 根据聚焦控件和按键获取对应的 Action
pub fn get_action(kind: Option<&ControlKind>, key: KeyEvent) -> Option<Action> {
    // AltGr 字符以 CONTROL|ALT 到达，按普通字符处理
    if key.modifiers == KeyModifiers::CONTROL {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('s') => Some(Action::Submit),
            KeyCode::Char('r') => Some(Action::Reset),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Tab | KeyCode::Down => return Some(Action::FocusNext),
        KeyCode::BackTab | KeyCode::Up => return Some(Action::FocusPrev),
        _ => {}
    }

    match kind? {
        ControlKind::Input => match key.code {
            KeyCode::Enter => Some(Action::FocusNext),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        ControlKind::TextArea => match key.code {
            KeyCode::Enter => Some(Action::NewLine),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        ControlKind::Radio { .. }
        | ControlKind::Checkbox { .. }
        | ControlKind::SubmitButton
        | ControlKind::ResetButton => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
            _ => None,
        },
        ControlKind::Select => match key.code {
            KeyCode::Left => Some(Action::SelectPrev),
            KeyCode::Right | KeyCode::Char(' ') => Some(Action::SelectNext),
            _ => None,
        },
    }
}

/// 处理按键事件，返回 true 表示退出
pub fn handle_key_event(form: &mut Form, key: KeyEvent) -> bool {
    let kind = form.focused_control().map(|c| c.kind.clone());
    if let Some(action) = get_action(kind.as_ref(), key) {
        form.dispatch(action)
    } else {
        false
    }
}
