use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Keyboard action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    None,
}

/// Left-button pointer activity, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Press { column: u16, row: u16 },
    Drag { column: u16, row: u16 },
    Release { column: u16, row: u16 },
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        _ => Action::None,
    }
}

/// Translate a mouse event into a pointer action; only the left button drags
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<PointerAction> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerAction::Press { column, row }),
        MouseEventKind::Drag(MouseButton::Left) => Some(PointerAction::Drag { column, row }),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerAction::Release { column, row }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 12,
            row: 3,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            Action::Quit
        );
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)),
            Action::None
        );
    }

    #[test]
    fn test_left_button_only() {
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(PointerAction::Press { column: 12, row: 3 })
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left))),
            Some(PointerAction::Release { column: 12, row: 3 })
        );
        assert_eq!(handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Right))), None);
        assert_eq!(handle_mouse_event(mouse(MouseEventKind::ScrollDown)), None);
    }
}
