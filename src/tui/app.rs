//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! All ledger mutation goes through the session's action dispatch; the TUI
//! only projects the resulting state.

use crate::session::Session;

use super::dialogs::record::RecordFormState;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    /// The record entry form
    AddRecord,
    /// Confirm deleting the record at this position
    ConfirmDelete(usize),
    Help,
}

/// Main application state
pub struct App<'a> {
    /// The session being driven
    pub session: &'a mut Session,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the record table
    pub selected_index: usize,

    /// Record entry form state
    pub record_form: RecordFormState,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(session: &'a mut Session) -> Self {
        Self {
            session,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            selected_index: 0,
            record_form: RecordFormState::new(),
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        if dialog == ActiveDialog::AddRecord {
            // Fresh form with today's date
            self.record_form = RecordFormState::new();
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Move selection up in the record table
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down in the record table
    pub fn move_down(&mut self) {
        let max = self.session.ledger().len();
        if self.selected_index < max.saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the table after a delete
    pub fn clamp_selection(&mut self) {
        let max = self.session.ledger().len();
        self.selected_index = self.selected_index.min(max.saturating_sub(1));
    }
}
