use crate::theme::colors::ERROR_COLOR;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Boxed, centred error message. Takes over the board until dismissed.
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub message: String,
}

impl Banner {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        // +4 for border chars and padding
        let box_width = (self.message.chars().count() + 4).min(area.width as usize) as u16;
        let inner_width = box_width.saturating_sub(2).max(1) as usize;
        let lines = self.message.chars().count().div_ceil(inner_width).max(1) as u16;
        let box_height = (lines + 2).min(area.height);

        let centered_x = area.width.saturating_sub(box_width) / 2;
        let banner_area = Rect {
            x: area.x + centered_x,
            y: area.y,
            width: box_width,
            height: box_height,
        };

        let block = Block::default()
            .title("Error")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ERROR_COLOR));

        let widget = Paragraph::new(self.message.as_str())
            .style(Style::default().fg(ERROR_COLOR).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);

        frame.render_widget(widget, banner_area);
    }
}
