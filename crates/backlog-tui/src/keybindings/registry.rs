use super::{
    board::BoardProvider,
    forms::{AddFormProvider, EditFormProvider, ErrorProvider, SearchProvider},
    KeybindingAction, KeybindingContext, KeybindingProvider, KeymapScope,
};
use crossterm::event::KeyEvent;

/// Every binding the board understands, built once at startup.
#[derive(Debug, Clone)]
pub struct KeyMap {
    board: KeybindingContext,
    add_form: KeybindingContext,
    edit_form: KeybindingContext,
    search: KeybindingContext,
    error: KeybindingContext,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyMap {
    pub fn new() -> Self {
        Self {
            board: BoardProvider.get_context(),
            add_form: AddFormProvider.get_context(),
            edit_form: EditFormProvider.get_context(),
            search: SearchProvider.get_context(),
            error: ErrorProvider.get_context(),
        }
    }

    pub fn context(&self, scope: KeymapScope) -> &KeybindingContext {
        match scope {
            KeymapScope::Board => &self.board,
            KeymapScope::AddForm => &self.add_form,
            KeymapScope::EditForm => &self.edit_form,
            KeymapScope::Search => &self.search,
            KeymapScope::Error => &self.error,
        }
    }

    pub fn resolve(&self, scope: KeymapScope, event: &KeyEvent) -> Option<KeybindingAction> {
        self.context(scope).resolve(event)
    }
}
