use super::{Keybinding, KeybindingAction, KeybindingContext, KeybindingProvider, KeyPress};
use crossterm::event::KeyCode;

fn field_navigation() -> Vec<Keybinding> {
    vec![
        Keybinding::new(
            vec![KeyPress::plain(KeyCode::Tab), KeyPress::plain(KeyCode::Down)],
            "tab/↓",
            "next field",
            "Focus the next field",
            KeybindingAction::NextField,
        ),
        Keybinding::new(
            vec![KeyPress::plain(KeyCode::BackTab), KeyPress::plain(KeyCode::Up)],
            "shift+tab/↑",
            "prev field",
            "Focus the previous field",
            KeybindingAction::PrevField,
        ),
    ]
}

fn force_quit() -> Keybinding {
    Keybinding::hidden(vec![KeyPress::ctrl('c')], KeybindingAction::Quit)
}

pub struct AddFormProvider;

impl KeybindingProvider for AddFormProvider {
    fn get_context(&self) -> KeybindingContext {
        let mut bindings = vec![force_quit()];
        bindings.extend(field_navigation());
        bindings.push(Keybinding::new(
            vec![KeyPress::plain(KeyCode::Enter)],
            "enter",
            "submit",
            "Next field, or submit from the last one",
            KeybindingAction::Submit,
        ));
        bindings.push(Keybinding::new(
            vec![KeyPress::plain(KeyCode::Esc)],
            "esc",
            "cancel",
            "Discard the form",
            KeybindingAction::Cancel,
        ));
        KeybindingContext::new("Add Item", bindings)
    }
}

pub struct EditFormProvider;

impl KeybindingProvider for EditFormProvider {
    fn get_context(&self) -> KeybindingContext {
        let mut bindings = vec![force_quit()];
        bindings.extend(field_navigation());
        bindings.push(Keybinding::new(
            vec![KeyPress::plain(KeyCode::Esc), KeyPress::char('q')],
            "esc/q",
            "save and exit",
            "Save changes and return to the board",
            KeybindingAction::SaveAndClose,
        ));
        KeybindingContext::new("Edit Item", bindings)
    }
}

pub struct SearchProvider;

impl KeybindingProvider for SearchProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Search",
            vec![
                force_quit(),
                Keybinding::new(
                    vec![KeyPress::plain(KeyCode::Enter)],
                    "enter",
                    "search",
                    "Apply the filter",
                    KeybindingAction::CommitSearch,
                ),
                Keybinding::new(
                    vec![KeyPress::plain(KeyCode::Esc)],
                    "esc",
                    "cancel",
                    "Clear the filter",
                    KeybindingAction::ClearSearch,
                ),
            ],
        )
    }
}

pub struct ErrorProvider;

impl KeybindingProvider for ErrorProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Error",
            vec![
                Keybinding::new(
                    vec![KeyPress::plain(KeyCode::Esc)],
                    "esc",
                    "dismiss",
                    "Dismiss the error",
                    KeybindingAction::DismissError,
                ),
                Keybinding::new(
                    vec![KeyPress::char('r')],
                    "r",
                    "reload",
                    "Dismiss and reload from disk",
                    KeybindingAction::DismissAndReload,
                ),
                Keybinding::new(
                    vec![KeyPress::char('q'), KeyPress::ctrl('c')],
                    "q",
                    "quit",
                    "Quit",
                    KeybindingAction::Quit,
                ),
            ],
        )
    }
}
