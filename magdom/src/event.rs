/// Remote control key codes.
///
/// Set-top-box remotes only deliver a handful of keys; terminal input is
/// folded onto the same set so components can be driven from a keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
    /// Confirm / enter.
    Ok,
    /// Return / exit.
    Back,
    Info,
    Menu,
    Digit(u8),
    Char(char),
    /// Anything the remote does not have.
    Unknown,
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::Enter => Key::Ok,
            KeyCode::Esc | KeyCode::Backspace => Key::Back,
            KeyCode::F(1) => Key::Info,
            KeyCode::F(2) => Key::Menu,
            KeyCode::Char(c) => match c.to_digit(10) {
                Some(d) => Key::Digit(d as u8),
                None => Key::Char(c),
            },
            _ => Key::Unknown,
        }
    }
}
