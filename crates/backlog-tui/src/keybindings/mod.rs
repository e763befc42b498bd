pub mod board;
pub mod forms;
pub mod registry;

pub use registry::KeyMap;

use backlog_domain::ItemStatus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeybindingAction {
    Quit,
    ToggleHelp,
    StartAdd,
    StartSearch,
    OpenEditor,
    SelectColumn(usize),
    NextColumn,
    PrevColumn,
    ColumnLeft,
    ColumnRight,
    NavigateUp,
    NavigateDown,
    MoveTo(ItemStatus),
    DeleteItem,
    Reload,
    NextField,
    PrevField,
    Submit,
    Cancel,
    SaveAndClose,
    CommitSearch,
    ClearSearch,
    DismissError,
    DismissAndReload,
}

/// Which table of bindings is consulted for a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapScope {
    Board,
    AddForm,
    EditForm,
    Search,
    Error,
}

/// A concrete key chord. Shift is ignored when matching, since terminals
/// disagree on whether they report it for shifted characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    code: KeyCode,
    modifiers: KeyModifiers,
}

impl KeyPress {
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub const fn char(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }

    pub const fn ctrl(c: char) -> Self {
        Self {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        let significant = KeyModifiers::CONTROL | KeyModifiers::ALT;
        self.code == event.code
            && (self.modifiers & significant) == (event.modifiers & significant)
    }
}

#[derive(Debug, Clone)]
pub struct Keybinding {
    pub keys: Vec<KeyPress>,
    pub key: String,
    pub short_description: String,
    pub description: String,
    pub action: KeybindingAction,
}

impl Keybinding {
    pub fn new(
        keys: Vec<KeyPress>,
        key: impl Into<String>,
        short_description: impl Into<String>,
        description: impl Into<String>,
        action: KeybindingAction,
    ) -> Self {
        Self {
            keys,
            key: key.into(),
            short_description: short_description.into(),
            description: description.into(),
            action,
        }
    }

    /// Binding that is matched but left out of the legend.
    pub fn hidden(keys: Vec<KeyPress>, action: KeybindingAction) -> Self {
        Self::new(keys, "", "", "", action)
    }

    pub fn is_hidden(&self) -> bool {
        self.key.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingContext {
    pub name: String,
    pub bindings: Vec<Keybinding>,
}

impl KeybindingContext {
    pub fn new(name: impl Into<String>, bindings: Vec<Keybinding>) -> Self {
        Self {
            name: name.into(),
            bindings,
        }
    }

    /// First binding whose chords match the event wins.
    pub fn resolve(&self, event: &KeyEvent) -> Option<KeybindingAction> {
        self.bindings
            .iter()
            .find(|binding| binding.keys.iter().any(|key| key.matches(event)))
            .map(|binding| binding.action)
    }

    pub fn legend(&self) -> String {
        self.bindings
            .iter()
            .filter(|b| !b.is_hidden())
            .map(|b| format!("{}: {}", b.key, b.short_description))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

pub trait KeybindingProvider {
    fn get_context(&self) -> KeybindingContext;
}
