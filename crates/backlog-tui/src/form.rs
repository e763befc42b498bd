use backlog_core::{InputState, ValidationError};
use backlog_domain::{Item, ItemDraft};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    DueDate,
    Tags,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        Self::Title,
        Self::Description,
        Self::DueDate,
        Self::Tags,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title:",
            Self::Description => "Description:",
            Self::DueDate => "Due Date:",
            Self::Tags => "Tags:",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Title => "Title (required)",
            Self::Description => "Description",
            Self::DueDate => "Due date (DD-MM-YYYY)",
            Self::Tags => "Tags (comma-separated)",
        }
    }

    pub fn char_limit(self) -> usize {
        match self {
            Self::Title => 200,
            Self::Description => 500,
            Self::DueDate => 10,
            Self::Tags => 200,
        }
    }
}

/// Four-field item form shared by the add and edit screens.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemForm {
    inputs: [InputState; 4],
    focus: usize,
    /// Inline validation message, cleared on the next edit.
    pub error: Option<String>,
    /// Set once a submission has been dispatched; further submits are ignored.
    pub submitted: bool,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemForm {
    pub fn new() -> Self {
        Self {
            inputs: FormField::ALL.map(|field| InputState::with_limit(field.char_limit())),
            focus: 0,
            error: None,
            submitted: false,
        }
    }

    /// Form pre-populated from an existing item, focus on the title.
    pub fn for_item(item: &Item) -> Self {
        let mut form = Self::new();
        form.inputs[0].set(item.title.as_str());
        form.inputs[1].set(item.description.as_str());
        form.inputs[2].set(item.due_date.as_str());
        form.inputs[3].set(item.tags_joined(", "));
        form
    }

    pub fn input(&self, field: FormField) -> &InputState {
        &self.inputs[Self::index_of(field)]
    }

    pub fn focused_field(&self) -> FormField {
        FormField::ALL[self.focus]
    }

    pub fn focused_input_mut(&mut self) -> &mut InputState {
        &mut self.inputs[self.focus]
    }

    pub fn is_last_field_focused(&self) -> bool {
        self.focus == self.inputs.len() - 1
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.inputs.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.inputs.len() - 1) % self.inputs.len();
    }

    pub fn draft(&self) -> Result<ItemDraft, ValidationError> {
        ItemDraft::parse(
            self.inputs[0].as_str(),
            self.inputs[1].as_str(),
            self.inputs[2].as_str(),
            self.inputs[3].as_str(),
        )
    }

    fn index_of(field: FormField) -> usize {
        match field {
            FormField::Title => 0,
            FormField::Description => 1,
            FormField::DueDate => 2,
            FormField::Tags => 3,
        }
    }
}
