use crate::app::{App, EditSession, Mode};
use crate::board::COLUMN_COUNT;
use crate::components::*;
use crate::form::{FormField, ItemForm};
use crate::keybindings::KeymapScope;
use crate::theme::*;
use backlog_core::InputState;
use backlog_domain::{Item, ItemStatus};
use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const TAG_ICON: &str = "🏷 ";
const DUE_ICON: &str = "⏰ ";
const MAX_TAG_WIDTH: usize = 15;
/// Columns kept free for tags and due date when truncating titles.
const TITLE_RESERVE: usize = 20;

const ADD_FORM_HELP: &str = "Tab/Shift+Tab: navigate | Enter: submit | Esc: cancel";
const EDIT_FORM_HELP: &str = "Tab/up/down: navigate | Esc/q: save and exit";
const SEARCH_HELP: &str = "Enter: search | Esc: cancel";

pub fn render(app: &App, frame: &mut Frame) {
    if app.error.is_some() {
        render_error(app, frame, frame.area());
        return;
    }

    match app.mode {
        Mode::Browsing => render_board(app, frame, frame.area()),
        Mode::Adding => {
            render_board(app, frame, frame.area());
            render_add_form(&app.add_form, frame);
        }
        Mode::Editing => match &app.edit {
            Some(session) => render_edit_view(session, frame, frame.area()),
            None => render_board(app, frame, frame.area()),
        },
        Mode::Searching => {
            render_board(app, frame, frame.area());
            render_input_popup(
                frame,
                "SEARCH",
                "Enter search query:",
                app.search_input.as_str(),
                cursor_column(&app.search_input),
                SEARCH_HELP,
            );
        }
    }
}

fn render_error(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    if let Some(banner) = &app.error {
        banner.render(frame, chunks[0]);
    }

    let legend = app.keymap().context(KeymapScope::Error).legend();
    frame.render_widget(
        Paragraph::new(legend)
            .style(label_text())
            .alignment(Alignment::Center),
        chunks[1],
    );
}

fn render_board(app: &App, frame: &mut Frame, area: Rect) {
    let help_height = if app.show_help { 2 } else { 1 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(help_height),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(app, frame, chunks[0]);
    render_column_panel(app, frame, chunks[1]);

    if let Some(message) = &app.message {
        frame.render_widget(Paragraph::new(message.as_str()).style(message_text()), chunks[2]);
    }

    frame.render_widget(
        Paragraph::new(totals_line(app)).style(label_text()),
        chunks[3],
    );

    let help = if app.show_help {
        app.keymap().context(KeymapScope::Board).legend()
    } else {
        "Press '?' for help".to_string()
    };
    frame.render_widget(
        Paragraph::new(help)
            .style(label_text())
            .wrap(Wrap { trim: true }),
        chunks[4],
    );

    render_status_ribbon(app.board.selected_column(), frame, chunks[5]);
}

/// Unfiltered item total next to the per-column counts under the filter.
fn totals_line(app: &App) -> String {
    let [todo, in_progress, done] = app.board.column_counts();
    format!(
        "Total: {} items ({} todo, {} in-progress, {} done)",
        app.board.total_items(),
        todo,
        in_progress,
        done
    )
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let mut title = "BACKLOG KANBAN BOARD".to_string();
    if !app.board.query().is_empty() {
        title.push_str(&format!(" (filtered: '{}')", app.board.query().as_str()));
    }
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(format!(" {} ", title), title_text()))),
        area,
    );
}

fn render_column_panel(app: &App, frame: &mut Frame, area: Rect) {
    let status = app.board.selected_status();
    let block = Block::default()
        .title(Span::styled(format!(" {} ", status.heading()), status_style(status)))
        .borders(Borders::ALL)
        .border_style(focused_border());

    let bucket = app.board.current_bucket();
    if bucket.is_empty() {
        frame.render_widget(
            Paragraph::new("(empty)").style(label_text()).block(block),
            area,
        );
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = bucket
        .iter()
        .map(|item| ListItem::new(format_item(item, width)).style(normal_text()))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(selected_item())
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.board.cursor()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_status_ribbon(selected_column: usize, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::with_capacity(COLUMN_COUNT * 2);
    for (column, status) in ItemStatus::ALL.iter().enumerate() {
        if column > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" {} ", status.tab_label()),
            tab_style(column == selected_column),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

/// One-line board entry: title, then tags and due date when present.
pub fn format_item(item: &Item, width: usize) -> String {
    let mut parts = vec![truncate(&item.title, width.saturating_sub(TITLE_RESERVE).max(4))];

    if !item.tags.is_empty() {
        parts.push(format!(
            "{}{}",
            TAG_ICON,
            truncate(&item.tags_joined(","), MAX_TAG_WIDTH)
        ));
    }
    if !item.due_date.is_empty() {
        parts.push(format!("{}{}", DUE_ICON, item.due_date));
    }

    parts.join(" | ")
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}

fn cursor_column(input: &InputState) -> usize {
    input.as_str()[..input.cursor_pos()].chars().count()
}

fn render_add_form(form: &ItemForm, frame: &mut Frame) {
    let area = centered_rect(70, 80, frame.area());
    let inner = render_popup_with_block(frame, area);
    render_form_body(form, "ADD NEW ITEM", &[], ADD_FORM_HELP, frame, inner);
}

fn render_edit_view(session: &EditSession, frame: &mut Frame, area: Rect) {
    let item = &session.item;
    let inner = render_popup_with_block(frame, area);

    let header = vec![
        Line::from(vec![
            Span::styled("ID: ", label_text()),
            Span::styled(item.id.as_str(), normal_text()),
        ]),
        Line::from(vec![
            Span::styled("Status: ", label_text()),
            Span::styled(item.status.as_str(), status_style(item.status)),
        ]),
        Line::from(vec![
            Span::styled("Created: ", label_text()),
            Span::styled(format_timestamp(item.created_at), normal_text()),
        ]),
        Line::from(vec![
            Span::styled("Updated: ", label_text()),
            Span::styled(format_timestamp(item.updated_at), normal_text()),
        ]),
    ];

    render_form_body(
        &session.form,
        "EDIT ITEM DETAILS",
        &header,
        EDIT_FORM_HELP,
        frame,
        inner,
    );
}

fn format_timestamp(at: chrono::DateTime<chrono::Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

fn render_form_body(
    form: &ItemForm,
    title: &str,
    header: &[Line],
    help: &str,
    frame: &mut Frame,
    area: Rect,
) {
    let mut constraints = vec![Constraint::Length(2)];
    if !header.is_empty() {
        constraints.push(Constraint::Length(header.len() as u16 + 1));
    }
    constraints.push(Constraint::Length(1));
    constraints.extend(FormField::ALL.iter().map(|_| Constraint::Length(2)));
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(area);
    let mut next = 0;
    let mut take = || {
        let chunk = chunks[next];
        next += 1;
        chunk
    };

    frame.render_widget(
        Paragraph::new(format!(" {} ", title)).style(title_text()),
        take(),
    );
    if !header.is_empty() {
        frame.render_widget(Paragraph::new(header.to_vec()), take());
    }

    let error_area = take();
    if let Some(error) = &form.error {
        frame.render_widget(
            Paragraph::new(format!("ERROR: {}", error)).style(error_text()),
            error_area,
        );
    }

    for field in FormField::ALL {
        let field_area = take();
        let focused = form.focused_field() == field;
        let input = form.input(field);

        let value = if input.is_empty() && !focused {
            Span::styled(field.placeholder(), placeholder_text())
        } else {
            Span::styled(input.as_str(), normal_text())
        };
        let lines = vec![
            Line::from(Span::styled(field.label(), field_label(focused))),
            Line::from(vec![Span::styled("> ", field_label(focused)), value]),
        ];
        frame.render_widget(Paragraph::new(lines), field_area);

        if focused {
            let cursor_x = field_area.x + 2 + cursor_column(input) as u16;
            frame.set_cursor_position((cursor_x, field_area.y + 1));
        }
    }

    frame.render_widget(Paragraph::new(help).style(label_text()), take());
}
