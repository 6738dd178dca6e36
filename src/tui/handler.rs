//! Event handling
//!
//! Routes key events to the active dialog first, then to the main view.
//! All state changes that touch the ledger or settings go through the
//! session's action dispatch.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::fx;
use crate::session::Action;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::event::Event;

/// Handle an event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    if let Event::Key(key) = event {
        handle_key(app, key);
    }
    Ok(())
}

/// Handle a key event
fn handle_key(app: &mut App, key: KeyEvent) {
    // Dialogs swallow keys while open
    match app.active_dialog {
        ActiveDialog::AddRecord => {
            dialogs::record::handle_key(app, key);
            return;
        }
        ActiveDialog::ConfirmDelete(position) => {
            handle_confirm_delete(app, key, position);
            return;
        }
        ActiveDialog::Help => {
            app.close_dialog();
            return;
        }
        ActiveDialog::None => {}
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),

        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        KeyCode::Char('a') | KeyCode::Char('n') => app.open_dialog(ActiveDialog::AddRecord),

        KeyCode::Char('d') => {
            if !app.session.ledger().is_empty() {
                app.open_dialog(ActiveDialog::ConfirmDelete(app.selected_index));
            }
        }

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        KeyCode::Char('g') => app.selected_index = 0,
        KeyCode::Char('G') => {
            app.selected_index = app.session.ledger().len().saturating_sub(1);
        }

        KeyCode::Char('l') => {
            let next = app.session.language.toggle();
            let _ = app.session.apply(Action::SetLanguage(next));
        }

        KeyCode::Char('+') | KeyCode::Char('=') => adjust_rate(app, fx::RATE_STEP),
        KeyCode::Char('-') => adjust_rate(app, -fx::RATE_STEP),

        KeyCode::Esc => app.clear_status(),

        _ => {}
    }
}

/// Handle keys while the delete confirmation is open
fn handle_confirm_delete(app: &mut App, key: KeyEvent, position: usize) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.close_dialog();
            match app.session.apply(Action::Delete(position)) {
                Ok(_) => {
                    app.clamp_selection();
                    let t = app.session.language.strings();
                    app.set_status(t.record_deleted);
                }
                Err(e) => app.set_status(e.to_string()),
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.close_dialog();
        }
        _ => {}
    }
}

/// Step the conversion rate, clamped by the session
fn adjust_rate(app: &mut App, step: f64) {
    let next = app.session.rate() + step;
    let _ = app.session.apply(Action::SetRate(next));
}
