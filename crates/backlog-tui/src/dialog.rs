use backlog_core::InputState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Applies a text-editing key to `input`. Returns false for keys that are not
/// editing keys, so callers can ignore them.
pub fn handle_text_input(input: &mut InputState, key: &KeyEvent) -> bool {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return false;
    }

    match key.code {
        KeyCode::Char(c) => input.insert_char(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => return false,
    }
    true
}
