use crate::board::BoardState;
use crate::components::Banner;
use crate::dialog::handle_text_input;
use crate::events::{Event, EventHandler};
use crate::form::ItemForm;
use crate::keybindings::{KeyMap, KeybindingAction, KeymapScope};
use crate::state::{
    Completion, PersistRequest, PersistenceWorker, SaveOutcome, COMPLETION_QUEUE_CAPACITY,
};
use crate::ui;
use backlog_core::{AppConfig, BacklogError, BacklogResult, InputState};
use backlog_domain::{Collection, CollectionName, Item, ItemStatus, SearchQuery};
use backlog_persistence::CollectionStore;
use crossterm::{
    event::KeyEvent,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;

const SEARCH_CHAR_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    Adding,
    Editing,
    Searching,
}

#[derive(Debug)]
pub enum Message {
    Key(KeyEvent),
    Completion(Completion),
}

#[derive(Debug)]
pub enum Effect {
    Persist(PersistRequest),
    Quit,
}

/// Item being edited: the snapshot taken when the editor opened, plus the form.
#[derive(Debug, Clone)]
pub struct EditSession {
    pub item: Item,
    pub form: ItemForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardOptions {
    pub start_column: usize,
    pub show_help: bool,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            start_column: ItemStatus::InProgress.column_index(),
            show_help: true,
        }
    }
}

impl BoardOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        let start_column = match config.effective_start_column().parse::<ItemStatus>() {
            Ok(status) => status.column_index(),
            Err(e) => {
                tracing::warn!("Ignoring start_column from config: {}", e);
                ItemStatus::InProgress.column_index()
            }
        };
        Self {
            start_column,
            show_help: config.effective_show_help(),
        }
    }
}

pub struct App {
    pub mode: Mode,
    pub board: BoardState,
    pub add_form: ItemForm,
    pub edit: Option<EditSession>,
    pub search_input: InputState,
    /// Transient status line, cleared on the next key press.
    pub message: Option<String>,
    /// Store failure; replaces the board until dismissed.
    pub error: Option<Banner>,
    pub show_help: bool,
    keymap: KeyMap,
}

impl App {
    pub fn new(collection: Collection, keymap: KeyMap, options: BoardOptions) -> Self {
        Self {
            mode: Mode::Browsing,
            board: BoardState::new(collection, options.start_column),
            add_form: ItemForm::new(),
            edit: None,
            search_input: InputState::with_limit(SEARCH_CHAR_LIMIT),
            message: None,
            error: None,
            show_help: options.show_help,
            keymap,
        }
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    /// Keymap scope for the current mode, or the error scope while an error
    /// is showing.
    pub fn scope(&self) -> KeymapScope {
        if self.error.is_some() {
            return KeymapScope::Error;
        }
        match self.mode {
            Mode::Browsing => KeymapScope::Board,
            Mode::Adding => KeymapScope::AddForm,
            Mode::Editing => KeymapScope::EditForm,
            Mode::Searching => KeymapScope::Search,
        }
    }

    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::Key(key) => self.handle_key(key),
            Message::Completion(completion) => {
                self.handle_completion(completion);
                Vec::new()
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        self.message = None;
        let action = self.keymap.resolve(self.scope(), &key);

        if self.error.is_some() {
            return self.handle_error_key(action);
        }

        match self.mode {
            Mode::Browsing => self.handle_browsing_key(action),
            Mode::Adding => self.handle_adding_key(action, &key),
            Mode::Editing => self.handle_editing_key(action, &key),
            Mode::Searching => self.handle_searching_key(action, &key),
        }
    }

    fn handle_error_key(&mut self, action: Option<KeybindingAction>) -> Vec<Effect> {
        match action {
            Some(KeybindingAction::DismissError) => {
                self.error = None;
                Vec::new()
            }
            Some(KeybindingAction::DismissAndReload) => {
                self.error = None;
                vec![Effect::Persist(PersistRequest::Reload)]
            }
            Some(KeybindingAction::Quit) => vec![Effect::Quit],
            _ => Vec::new(),
        }
    }

    fn handle_browsing_key(&mut self, action: Option<KeybindingAction>) -> Vec<Effect> {
        let Some(action) = action else {
            return Vec::new();
        };

        match action {
            KeybindingAction::Quit => return vec![Effect::Quit],
            KeybindingAction::ToggleHelp => self.show_help = !self.show_help,
            KeybindingAction::StartAdd => {
                self.add_form = ItemForm::new();
                self.mode = Mode::Adding;
            }
            KeybindingAction::StartSearch => self.mode = Mode::Searching,
            KeybindingAction::OpenEditor => {
                if let Some(item) = self.board.selected_item() {
                    self.edit = Some(EditSession {
                        item: item.clone(),
                        form: ItemForm::for_item(item),
                    });
                    self.mode = Mode::Editing;
                }
            }
            KeybindingAction::SelectColumn(column) => self.board.select_column(column),
            KeybindingAction::NextColumn => self.board.cycle_column_forward(),
            KeybindingAction::PrevColumn => self.board.cycle_column_backward(),
            KeybindingAction::ColumnLeft => self.board.column_left(),
            KeybindingAction::ColumnRight => self.board.column_right(),
            KeybindingAction::NavigateUp => self.board.cursor_up(),
            KeybindingAction::NavigateDown => self.board.cursor_down(),
            KeybindingAction::MoveTo(status) => return self.move_selected(status),
            KeybindingAction::DeleteItem => return self.delete_selected(),
            KeybindingAction::Reload => return vec![Effect::Persist(PersistRequest::Reload)],
            _ => {}
        }
        Vec::new()
    }

    fn handle_adding_key(
        &mut self,
        action: Option<KeybindingAction>,
        key: &KeyEvent,
    ) -> Vec<Effect> {
        match action {
            Some(KeybindingAction::Quit) => return vec![Effect::Quit],
            Some(KeybindingAction::NextField) => self.add_form.focus_next(),
            Some(KeybindingAction::PrevField) => self.add_form.focus_prev(),
            Some(KeybindingAction::Submit) => {
                if self.add_form.is_last_field_focused() {
                    return self.submit_add();
                }
                self.add_form.focus_next();
            }
            Some(KeybindingAction::Cancel) => {
                self.add_form = ItemForm::new();
                self.mode = Mode::Browsing;
            }
            _ => {
                if handle_text_input(self.add_form.focused_input_mut(), key) {
                    self.add_form.error = None;
                }
            }
        }
        Vec::new()
    }

    fn handle_editing_key(
        &mut self,
        action: Option<KeybindingAction>,
        key: &KeyEvent,
    ) -> Vec<Effect> {
        let Some(session) = self.edit.as_mut() else {
            self.mode = Mode::Browsing;
            return Vec::new();
        };

        match action {
            Some(KeybindingAction::Quit) => return vec![Effect::Quit],
            Some(KeybindingAction::NextField) => session.form.focus_next(),
            Some(KeybindingAction::PrevField) => session.form.focus_prev(),
            Some(KeybindingAction::SaveAndClose) => return self.submit_edit(),
            _ => {
                if handle_text_input(session.form.focused_input_mut(), key) {
                    session.form.error = None;
                }
            }
        }
        Vec::new()
    }

    fn handle_searching_key(
        &mut self,
        action: Option<KeybindingAction>,
        key: &KeyEvent,
    ) -> Vec<Effect> {
        match action {
            Some(KeybindingAction::Quit) => return vec![Effect::Quit],
            Some(KeybindingAction::CommitSearch) => {
                let query = SearchQuery::new(self.search_input.as_str().trim());
                self.board.set_query(query);
                self.board.reset_cursor();
                self.mode = Mode::Browsing;
            }
            Some(KeybindingAction::ClearSearch) => {
                self.search_input.clear();
                self.board.set_query(SearchQuery::default());
                self.mode = Mode::Browsing;
            }
            _ => {
                handle_text_input(&mut self.search_input, key);
            }
        }
        Vec::new()
    }

    fn submit_add(&mut self) -> Vec<Effect> {
        if self.add_form.submitted {
            tracing::debug!("Add already pending, ignoring submit");
            return Vec::new();
        }

        match self.add_form.draft() {
            Ok(draft) => {
                let item = Item::new(draft);
                tracing::info!("Adding item: {} (id: {})", item.title, item.id);
                self.board.push(item.clone());
                self.add_form.error = None;
                self.add_form.submitted = true;
                vec![self.save(SaveOutcome::Added(item))]
            }
            Err(e) => {
                self.add_form.error = Some(e.to_string());
                Vec::new()
            }
        }
    }

    fn submit_edit(&mut self) -> Vec<Effect> {
        let Some(session) = self.edit.as_mut() else {
            return Vec::new();
        };
        if session.form.submitted {
            tracing::debug!("Edit already pending, ignoring submit");
            return Vec::new();
        }

        let draft = match session.form.draft() {
            Ok(draft) => draft,
            Err(e) => {
                session.form.error = Some(e.to_string());
                return Vec::new();
            }
        };
        session.form.error = None;
        session.form.submitted = true;

        let mut updated = self
            .board
            .collection()
            .get(&session.item.id)
            .cloned()
            .unwrap_or_else(|| session.item.clone());
        updated.apply_draft(draft);
        tracing::info!("Updating item: {} (id: {})", updated.title, updated.id);
        self.board.replace(updated.clone());
        vec![self.save(SaveOutcome::Updated(updated))]
    }

    fn move_selected(&mut self, status: ItemStatus) -> Vec<Effect> {
        let Some(id) = self.board.selected_item().map(|item| item.id.clone()) else {
            return Vec::new();
        };
        let Some(moved) = self.board.set_status(&id, status) else {
            return Vec::new();
        };
        tracing::info!("Moving item {} to {}", moved.id, status);
        vec![self.save(SaveOutcome::Moved(moved))]
    }

    fn delete_selected(&mut self) -> Vec<Effect> {
        let Some(id) = self.board.selected_item().map(|item| item.id.clone()) else {
            return Vec::new();
        };
        let Some(removed) = self.board.remove(&id) else {
            return Vec::new();
        };
        tracing::info!("Deleting item: {} (id: {})", removed.title, removed.id);
        vec![self.save(SaveOutcome::Deleted {
            id: removed.id,
            title: removed.title,
        })]
    }

    fn save(&self, outcome: SaveOutcome) -> Effect {
        Effect::Persist(PersistRequest::Save {
            snapshot: self.board.collection().clone(),
            outcome,
        })
    }

    fn handle_completion(&mut self, completion: Completion) {
        tracing::debug!("Handling completion: {}", completion_name(&completion));
        // Board state already holds the mutation; completions only report.
        match completion {
            Completion::Reloaded(result) => match result {
                Ok(collection) => {
                    self.board.replace_collection(collection);
                    self.board.reset_cursor();
                    self.message = Some("Reloaded data".to_string());
                }
                Err(e) => self.fail(e),
            },
            Completion::ItemAdded(result) => {
                self.add_form = ItemForm::new();
                self.mode = Mode::Browsing;
                match result {
                    Ok(item) => self.message = Some(format!("Added '{}'", item.title)),
                    Err(e) => self.fail(e),
                }
            }
            Completion::ItemUpdated(result) => {
                self.edit = None;
                self.mode = Mode::Browsing;
                match result {
                    Ok(item) => self.message = Some(format!("Updated '{}'", item.title)),
                    Err(e) => self.fail(e),
                }
            }
            Completion::ItemMoved(result) => match result {
                Ok(item) => {
                    self.message = Some(format!("Moved '{}' to {}", item.title, item.status));
                    self.board.reset_cursor();
                }
                Err(e) => self.fail(e),
            },
            Completion::ItemDeleted(result) => match result {
                Ok(deleted) => {
                    self.message = Some(format!("Deleted '{}'", deleted.title));
                    self.board.remove(&deleted.id);
                }
                Err(e) => self.fail(e),
            },
        }
    }

    fn fail(&mut self, error: BacklogError) {
        tracing::error!("Store operation failed: {}", error);
        self.message = None;
        self.error = Some(Banner::error(format!("Error: {}", error)));
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &mut EventHandler,
        completion_rx: &mut mpsc::Receiver<Completion>,
        worker: &PersistenceWorker,
    ) -> BacklogResult<()> {
        loop {
            terminal.draw(|frame| ui::render(self, frame))?;

            let message = tokio::select! {
                event = events.next() => match event {
                    Some(Event::Key(key)) => Message::Key(key),
                    Some(Event::Resize) => continue,
                    None => return Ok(()),
                },
                Some(completion) = completion_rx.recv() => Message::Completion(completion),
            };

            for effect in self.update(message) {
                match effect {
                    Effect::Persist(request) => worker.dispatch(request),
                    Effect::Quit => return Ok(()),
                }
            }
        }
    }

    /// Runs the board until the user quits, then waits for queued saves.
    pub async fn run(mut self, store: Arc<dyn CollectionStore>) -> BacklogResult<()> {
        let (completion_tx, mut completion_rx) = mpsc::channel(COMPLETION_QUEUE_CAPACITY);
        let worker = PersistenceWorker::spawn(store, completion_tx);

        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();

        let result = self
            .event_loop(&mut terminal, &mut events, &mut completion_rx, &worker)
            .await;

        events.stop();
        drop(completion_rx);
        worker.shutdown().await;
        restore_terminal(&mut terminal)?;
        result
    }
}

/// Loads the active collection and runs the interactive board on it.
pub async fn run_board(store: Arc<dyn CollectionStore>, config: &AppConfig) -> BacklogResult<()> {
    let collection = store.load(CollectionName::Active).await?;
    let app = App::new(collection, KeyMap::new(), BoardOptions::from_config(config));
    app.run(store).await
}

fn completion_name(completion: &Completion) -> &'static str {
    match completion {
        Completion::Reloaded(_) => "reloaded",
        Completion::ItemAdded(_) => "item_added",
        Completion::ItemUpdated(_) => "item_updated",
        Completion::ItemMoved(_) => "item_moved",
        Completion::ItemDeleted(_) => "item_deleted",
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
