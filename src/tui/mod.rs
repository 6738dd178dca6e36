//! Terminal User Interface module
//!
//! Interactive interface for tally built on ratatui: a settings sidebar,
//! the record table with summary totals and a monthly bar chart, and modal
//! dialogs for record entry and delete confirmation.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
