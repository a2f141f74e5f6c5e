// Terminal key events to reader keys

use crate::app::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn map_key(event: KeyEvent) -> Key {
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let shift = event.modifiers.contains(KeyModifiers::SHIFT);

    match event.code {
        KeyCode::Char('c') if ctrl => Key::Quit,
        KeyCode::Char('q') if !ctrl => Key::Quit,
        KeyCode::Esc => Key::Quit,
        KeyCode::Char(' ') => Key::Toggle,
        KeyCode::Tab => Key::Advance,
        KeyCode::Up if shift => Key::SpeedUpFast,
        KeyCode::PageUp => Key::SpeedUpFast,
        KeyCode::Up => Key::SpeedUp,
        KeyCode::Down if shift => Key::SpeedDownFast,
        KeyCode::PageDown => Key::SpeedDownFast,
        KeyCode::Down => Key::SpeedDown,
        _ => Key::Other(key_name(&event)),
    }
}

/// Printable name such as `ctrl+x`, `shift+left` or `f5`.
pub fn key_name(event: &KeyEvent) -> String {
    let base = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("f{}", n),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::BackTab => "shift+tab".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Insert => "insert".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        other => format!("{:?}", other).to_lowercase(),
    };

    let mut name = String::new();
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        name.push_str("ctrl+");
    }
    if event.modifiers.contains(KeyModifiers::ALT) {
        name.push_str("alt+");
    }
    // Shifted characters already carry their case.
    let shifted_char = matches!(event.code, KeyCode::Char(_) | KeyCode::BackTab);
    if event.modifiers.contains(KeyModifiers::SHIFT) && !shifted_char {
        name.push_str("shift+");
    }
    name.push_str(&base);
    name
}
