//! TUI views
//!
//! The settings sidebar, summary totals, record table, monthly chart
//! and the status bar.

pub mod chart;
pub mod records;
pub mod sidebar;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);
    summary::render(frame, app, layout.summary);
    records::render(frame, app, layout.records);
    chart::render(frame, app, layout.chart);
    status_bar::render(frame, app, layout.status_bar);

    // Render dialog if active
    match app.active_dialog {
        ActiveDialog::AddRecord => dialogs::record::render(frame, app),
        ActiveDialog::ConfirmDelete(_) => {
            let t = app.session.language.strings();
            dialogs::confirm::render(frame, t.delete, t.delete_confirm);
        }
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::None => {}
    }
}
