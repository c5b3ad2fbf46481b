//! Terminal User Interface module
//!
//! An interactive budget editor built on ratatui. The manager drives the
//! panels: each is subscribed as an observer and redraws from the totals
//! it was last handed.

pub mod app;
pub mod dialogs;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
