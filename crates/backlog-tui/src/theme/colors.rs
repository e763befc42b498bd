use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Magenta;
pub const UNFOCUSED_BORDER: Color = Color::DarkGray;
pub const ACCENT: Color = Color::Rgb(125, 86, 244);
pub const SELECTED_BG: Color = Color::Rgb(125, 86, 244);
pub const SELECTED_FG: Color = Color::White;

pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const MESSAGE_TEXT: Color = Color::Green;
pub const PLACEHOLDER_TEXT: Color = Color::DarkGray;

pub const STATUS_TODO: Color = Color::Rgb(255, 165, 0);
pub const STATUS_IN_PROGRESS: Color = Color::Rgb(0, 191, 255);
pub const STATUS_DONE: Color = Color::Green;

pub const TAB_INACTIVE_BG: Color = Color::Rgb(60, 60, 60);

pub const POPUP_BG: Color = Color::Black;
pub const ERROR_COLOR: Color = Color::Red;
