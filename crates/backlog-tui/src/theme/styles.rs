use super::colors::*;
use backlog_domain::ItemStatus;
use ratatui::style::{Modifier, Style};

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn title_text() -> Style {
    Style::default()
        .fg(SELECTED_FG)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn selected_item() -> Style {
    Style::default()
        .fg(SELECTED_FG)
        .bg(SELECTED_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn field_label(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(NORMAL_TEXT)
    }
}

pub fn placeholder_text() -> Style {
    Style::default()
        .fg(PLACEHOLDER_TEXT)
        .add_modifier(Modifier::ITALIC)
}

pub fn message_text() -> Style {
    Style::default().fg(MESSAGE_TEXT)
}

pub fn error_text() -> Style {
    Style::default()
        .fg(ERROR_COLOR)
        .add_modifier(Modifier::BOLD)
}

pub fn status_style(status: ItemStatus) -> Style {
    let color = match status {
        ItemStatus::Todo => STATUS_TODO,
        ItemStatus::InProgress => STATUS_IN_PROGRESS,
        ItemStatus::Done => STATUS_DONE,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn tab_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(SELECTED_FG)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(LABEL_TEXT).bg(TAB_INACTIVE_BG)
    }
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}
