use super::{Keybinding, KeybindingAction, KeybindingContext, KeybindingProvider, KeyPress};
use backlog_domain::ItemStatus;
use crossterm::event::KeyCode;

pub struct BoardProvider;

impl KeybindingProvider for BoardProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Board",
            vec![
                Keybinding::new(
                    vec![KeyPress::char('t')],
                    "t",
                    "todo",
                    "Show the todo column",
                    KeybindingAction::SelectColumn(0),
                ),
                Keybinding::new(
                    vec![KeyPress::char('i')],
                    "i",
                    "in-progress",
                    "Show the in-progress column",
                    KeybindingAction::SelectColumn(1),
                ),
                Keybinding::new(
                    vec![KeyPress::char('c')],
                    "c",
                    "done",
                    "Show the done column",
                    KeybindingAction::SelectColumn(2),
                ),
                Keybinding::new(
                    vec![KeyPress::plain(KeyCode::Tab)],
                    "tab",
                    "next view",
                    "Cycle to the next column",
                    KeybindingAction::NextColumn,
                ),
                Keybinding::new(
                    vec![KeyPress::plain(KeyCode::BackTab)],
                    "shift+tab",
                    "prev view",
                    "Cycle to the previous column",
                    KeybindingAction::PrevColumn,
                ),
                Keybinding::new(
                    vec![KeyPress::plain(KeyCode::Left)],
                    "←",
                    "left",
                    "Column to the left",
                    KeybindingAction::ColumnLeft,
                ),
                Keybinding::new(
                    vec![KeyPress::plain(KeyCode::Right)],
                    "→",
                    "right",
                    "Column to the right",
                    KeybindingAction::ColumnRight,
                ),
                Keybinding::new(
                    vec![KeyPress::plain(KeyCode::Up), KeyPress::char('k')],
                    "k/↑",
                    "up",
                    "Previous item",
                    KeybindingAction::NavigateUp,
                ),
                Keybinding::new(
                    vec![KeyPress::plain(KeyCode::Down), KeyPress::char('j')],
                    "j/↓",
                    "down",
                    "Next item",
                    KeybindingAction::NavigateDown,
                ),
                Keybinding::new(
                    vec![KeyPress::plain(KeyCode::Enter)],
                    "enter",
                    "edit",
                    "Edit the selected item",
                    KeybindingAction::OpenEditor,
                ),
                Keybinding::new(
                    vec![KeyPress::char('s')],
                    "s",
                    "search",
                    "Filter items by keyword",
                    KeybindingAction::StartSearch,
                ),
                Keybinding::new(
                    vec![KeyPress::char('a')],
                    "a",
                    "add",
                    "Add a new item",
                    KeybindingAction::StartAdd,
                ),
                Keybinding::new(
                    vec![KeyPress::char('1')],
                    "1",
                    "to todo",
                    "Move the selected item to todo",
                    KeybindingAction::MoveTo(ItemStatus::Todo),
                ),
                Keybinding::new(
                    vec![KeyPress::char('2')],
                    "2",
                    "to in-progress",
                    "Move the selected item to in-progress",
                    KeybindingAction::MoveTo(ItemStatus::InProgress),
                ),
                Keybinding::new(
                    vec![KeyPress::char('3')],
                    "3",
                    "to done",
                    "Move the selected item to done",
                    KeybindingAction::MoveTo(ItemStatus::Done),
                ),
                Keybinding::new(
                    vec![KeyPress::char('d')],
                    "d",
                    "delete",
                    "Delete the selected item",
                    KeybindingAction::DeleteItem,
                ),
                Keybinding::new(
                    vec![KeyPress::char('r')],
                    "r",
                    "reload",
                    "Reload items from disk",
                    KeybindingAction::Reload,
                ),
                Keybinding::new(
                    vec![KeyPress::char('?')],
                    "?",
                    "help",
                    "Toggle this legend",
                    KeybindingAction::ToggleHelp,
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
