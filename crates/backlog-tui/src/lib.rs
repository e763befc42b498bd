pub mod app;
pub mod board;
pub mod components;
pub mod dialog;
pub mod events;
pub mod form;
pub mod keybindings;
pub mod state;
pub mod theme;
pub mod ui;

pub use app::{run_board, App, BoardOptions, Effect, Message, Mode};
