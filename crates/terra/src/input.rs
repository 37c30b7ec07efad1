//! Terminal events mapped to dashboard inputs.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Something the dashboard reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Quit,
    CycleTheme,
    ClickEarth,
    ClickSun,
    Announce,
    /// Pointer moved to a screen cell.
    PointerMoved { column: u16, row: u16 },
    /// Left button pressed on a screen cell.
    PointerPressed { column: u16, row: u16 },
    /// Rows to scroll; positive is down.
    Scroll(i16),
    Resized { width: u16, height: u16 },
}

/// Translate a crossterm event. Key releases and repeats are ignored.
pub fn translate(event: &Event) -> Option<Input> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => on_key(key),
        Event::Mouse(mouse) => on_mouse(mouse),
        Event::Resize(width, height) => Some(Input::Resized {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

fn on_key(key: &KeyEvent) -> Option<Input> {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc | KeyCode::Char('q'))
        | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => Some(Input::Quit),
        (_, KeyCode::Char('e') | KeyCode::Char('E')) => Some(Input::ClickEarth),
        (_, KeyCode::Char('s') | KeyCode::Char('S')) => Some(Input::ClickSun),
        (_, KeyCode::Char(' ')) => Some(Input::Announce),
        (_, KeyCode::Char('c')) => Some(Input::CycleTheme),
        _ => None,
    }
}

fn on_mouse(mouse: &MouseEvent) -> Option<Input> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(Input::PointerMoved { column, row }),
        MouseEventKind::Down(MouseButton::Left) => Some(Input::PointerPressed { column, row }),
        MouseEventKind::ScrollDown => Some(Input::Scroll(1)),
        MouseEventKind::ScrollUp => Some(Input::Scroll(-1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 12,
            row: 4,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_keys() {
        let none = KeyModifiers::NONE;
        assert_eq!(translate(&key(KeyCode::Char('e'), none)), Some(Input::ClickEarth));
        assert_eq!(
            translate(&key(KeyCode::Char('E'), KeyModifiers::SHIFT)),
            Some(Input::ClickEarth)
        );
        assert_eq!(translate(&key(KeyCode::Char('S'), none)), Some(Input::ClickSun));
        assert_eq!(translate(&key(KeyCode::Char(' '), none)), Some(Input::Announce));
        assert_eq!(translate(&key(KeyCode::Char('c'), none)), Some(Input::CycleTheme));
        assert_eq!(translate(&key(KeyCode::Char('q'), none)), Some(Input::Quit));
        assert_eq!(translate(&key(KeyCode::Esc, none)), Some(Input::Quit));
        assert_eq!(translate(&key(KeyCode::Char('x'), none)), None);
    }

    #[test]
    fn test_ctrl_c_quits_instead_of_cycling() {
        assert_eq!(
            translate(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Input::Quit)
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('e'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(translate(&release), None);
    }

    #[test]
    fn test_mouse() {
        assert_eq!(
            translate(&mouse(MouseEventKind::Moved)),
            Some(Input::PointerMoved { column: 12, row: 4 })
        );
        assert_eq!(
            translate(&mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(Input::PointerPressed { column: 12, row: 4 })
        );
        assert_eq!(translate(&mouse(MouseEventKind::Down(MouseButton::Right))), None);
        assert_eq!(translate(&mouse(MouseEventKind::ScrollDown)), Some(Input::Scroll(1)));
        assert_eq!(translate(&mouse(MouseEventKind::ScrollUp)), Some(Input::Scroll(-1)));
    }

    #[test]
    fn test_resize() {
        assert_eq!(
            translate(&Event::Resize(100, 30)),
            Some(Input::Resized {
                width: 100,
                height: 30
            })
        );
    }
}
