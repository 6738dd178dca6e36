//! Record entry dialog
//!
//! Modal form for adding a record: kind, amount, currency, category, note
//! and date, with tab navigation and validation. Selector fields cycle with
//! Left/Right, text fields edit in place. The form itself never touches the
//! ledger; a valid submission becomes an `Action::Add`.

use chrono::{Local, NaiveDate};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::{category_label, currency_label, kind_label};
use crate::models::{Category, Currency, Kind};
use crate::session::{Action, RecordDraft};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Which field is currently focused in the record form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordField {
    #[default]
    Kind,
    Amount,
    Currency,
    Category,
    Note,
    Date,
}

impl RecordField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Kind => Self::Amount,
            Self::Amount => Self::Currency,
            Self::Currency => Self::Category,
            Self::Category => Self::Note,
            Self::Note => Self::Date,
            Self::Date => Self::Kind,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Kind => Self::Date,
            Self::Amount => Self::Kind,
            Self::Currency => Self::Amount,
            Self::Category => Self::Currency,
            Self::Note => Self::Category,
            Self::Date => Self::Note,
        }
    }

    /// Whether this field is a fixed-choice selector rather than text
    pub fn is_selector(self) -> bool {
        matches!(self, Self::Kind | Self::Currency | Self::Category)
    }
}

/// State for the record entry form
#[derive(Debug, Clone)]
pub struct RecordFormState {
    /// Currently focused field
    pub focused_field: RecordField,

    /// Selected record kind
    pub kind: Kind,

    /// Amount input (raw text, validated on submit)
    pub amount_input: TextInput,

    /// Selected entry currency
    pub currency: Currency,

    /// Selected category
    pub category: Category,

    /// Note input
    pub note_input: TextInput,

    /// Date input
    pub date_input: TextInput,

    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for RecordFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordFormState {
    /// Create a new form state with default values and today's date
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            focused_field: RecordField::Kind,
            kind: Kind::default(),
            amount_input: TextInput::new().placeholder("0.00"),
            currency: Currency::default(),
            category: Category::default(),
            note_input: TextInput::new(),
            date_input: TextInput::new()
                .placeholder("YYYY-MM-DD")
                .content(today.format("%Y-%m-%d").to_string()),
            error_message: None,
        }
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Get the focused text input, if the focused field is a text field
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            RecordField::Amount => Some(&mut self.amount_input),
            RecordField::Note => Some(&mut self.note_input),
            RecordField::Date => Some(&mut self.date_input),
            _ => None,
        }
    }

    /// Cycle the focused selector field forward
    pub fn cycle_forward(&mut self) {
        match self.focused_field {
            RecordField::Kind => self.kind = self.kind.toggle(),
            RecordField::Currency => self.currency = self.currency.toggle(),
            RecordField::Category => self.category = self.category.next(),
            _ => {}
        }
    }

    /// Cycle the focused selector field backward
    pub fn cycle_backward(&mut self) {
        match self.focused_field {
            RecordField::Kind => self.kind = self.kind.toggle(),
            RecordField::Currency => self.currency = self.currency.toggle(),
            RecordField::Category => self.category = self.category.prev(),
            _ => {}
        }
    }

    /// Build a draft from the form state
    ///
    /// The date is validated here; the amount text is validated by the
    /// session when the draft is applied.
    pub fn build_draft(&self) -> Result<RecordDraft, String> {
        let date = NaiveDate::parse_from_str(self.date_input.value().trim(), "%Y-%m-%d")
            .map_err(|_| "Invalid date format. Use YYYY-MM-DD".to_string())?;

        Ok(RecordDraft {
            date,
            kind: self.kind,
            amount: self.amount_input.value().trim().to_string(),
            currency: self.currency,
            category: self.category,
            note: self.note_input.value().trim().to_string(),
        })
    }

    /// Clear any error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the record entry dialog
pub fn render(frame: &mut Frame, app: &App) {
    let t = app.session.language.strings();
    let lang = app.session.language;
    let form = &app.record_form;

    let area = centered_rect_fixed(52, 14, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", t.new_record))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Kind
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Currency
            Constraint::Length(1), // Category
            Constraint::Length(1), // Note
            Constraint::Length(1), // Date
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),    // Remaining
        ])
        .split(inner);

    render_choice_field(
        frame,
        chunks[0],
        t.kind,
        kind_label(form.kind, lang),
        form.focused_field == RecordField::Kind,
    );

    render_text_field(
        frame,
        chunks[1],
        t.amount,
        &form.amount_input,
        form.focused_field == RecordField::Amount,
    );

    render_choice_field(
        frame,
        chunks[2],
        t.currency,
        currency_label(form.currency, lang),
        form.focused_field == RecordField::Currency,
    );

    render_choice_field(
        frame,
        chunks[3],
        t.category,
        category_label(form.category, lang),
        form.focused_field == RecordField::Category,
    );

    render_text_field(
        frame,
        chunks[4],
        t.note,
        &form.note_input,
        form.focused_field == RecordField::Note,
    );

    render_text_field(
        frame,
        chunks[5],
        t.date,
        &form.date_input,
        form.focused_field == RecordField::Date,
    );

    if let Some(ref error) = form.error_message {
        let error_line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[7]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Change  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(format!(" {}  ", t.add_record)),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[8]);
}

/// Render a text form field with a cursor when focused
fn render_text_field(frame: &mut Frame, area: Rect, label: &str, input: &TextInput, focused: bool) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let value_style = Style::default().fg(if focused { Color::White } else { Color::Yellow });

    let value = input.value();
    let display_value = if value.is_empty() && !focused {
        input.placeholder.clone()
    } else {
        value.to_string()
    };

    let mut spans = vec![Span::styled(format!("{:>8}: ", label), label_style)];

    if focused {
        // Show value with a block cursor
        let cursor_pos = input.cursor.min(display_value.len());
        let (before, after) = display_value.split_at(cursor_pos);

        spans.push(Span::styled(before.to_string(), value_style));

        let cursor_char = after.chars().next().unwrap_or(' ');
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));

        let rest = &after[cursor_char.len_utf8().min(after.len())..];
        if !rest.is_empty() {
            spans.push(Span::styled(rest.to_string(), value_style));
        }
    } else {
        spans.push(Span::styled(display_value, value_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render a fixed-choice selector field
fn render_choice_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let value_style = Style::default().fg(if focused { Color::White } else { Color::Yellow });

    let mut spans = vec![Span::styled(format!("{:>8}: ", label), label_style)];

    if focused {
        spans.push(Span::styled("◀ ", Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(value.to_string(), value_style));
        spans.push(Span::styled(" ▶", Style::default().fg(Color::Cyan)));
    } else {
        spans.push(Span::styled(value.to_string(), value_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Handle key input for the record dialog
/// Returns true if the key was handled
pub fn handle_key(app: &mut App, key: crossterm::event::KeyEvent) -> bool {
    use crossterm::event::{KeyCode, KeyModifiers};

    let form = &mut app.record_form;

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                form.prev_field();
            } else {
                form.next_field();
            }
            true
        }

        KeyCode::BackTab => {
            form.prev_field();
            true
        }

        KeyCode::Down => {
            form.next_field();
            true
        }

        KeyCode::Up => {
            form.prev_field();
            true
        }

        KeyCode::Enter => {
            submit(app);
            true
        }

        KeyCode::Left => {
            if form.focused_field.is_selector() {
                form.cycle_backward();
            } else if let Some(input) = form.focused_input() {
                input.move_left();
            }
            true
        }

        KeyCode::Right => {
            if form.focused_field.is_selector() {
                form.cycle_forward();
            } else if let Some(input) = form.focused_input() {
                input.move_right();
            }
            true
        }

        KeyCode::Backspace => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.backspace();
            }
            true
        }

        KeyCode::Delete => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.delete();
            }
            true
        }

        KeyCode::Home => {
            if let Some(input) = form.focused_input() {
                input.move_start();
            }
            true
        }

        KeyCode::End => {
            if let Some(input) = form.focused_input() {
                input.move_end();
            }
            true
        }

        KeyCode::Char(' ') if form.focused_field.is_selector() => {
            form.cycle_forward();
            true
        }

        KeyCode::Char(c) => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.insert(c);
            }
            true
        }

        _ => false,
    }
}

/// Validate the form and apply the resulting draft
fn submit(app: &mut App) {
    let t = app.session.language.strings();

    let draft = match app.record_form.build_draft() {
        Ok(draft) => draft,
        Err(e) => {
            app.record_form.set_error(e);
            return;
        }
    };

    match app.session.apply(Action::Add(draft)) {
        Ok(None) => {
            app.close_dialog();
            app.set_status(t.record_success);
        }
        Ok(Some(warning)) => {
            // The record was kept; only the external sink failed.
            app.close_dialog();
            app.set_status(format!("{} ({})", t.record_success, warning));
        }
        Err(e) => {
            app.record_form.set_error(e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_navigation_wraps() {
        let mut field = RecordField::Kind;
        for _ in 0..6 {
            field = field.next();
        }
        assert_eq!(field, RecordField::Kind);
        assert_eq!(RecordField::Kind.prev(), RecordField::Date);
    }

    #[test]
    fn test_new_form_has_todays_date() {
        let form = RecordFormState::new();
        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        assert_eq!(form.date_input.value(), today);
    }

    #[test]
    fn test_build_draft_rejects_bad_date() {
        let mut form = RecordFormState::new();
        form.date_input = TextInput::new().content("15/03/2024");
        assert!(form.build_draft().is_err());
    }

    #[test]
    fn test_build_draft_carries_form_values() {
        let mut form = RecordFormState::new();
        form.kind = Kind::Expense;
        form.currency = Currency::Foreign;
        form.category = Category::Food;
        form.amount_input = TextInput::new().content(" 12.5 ");
        form.note_input = TextInput::new().content("lunch");
        form.date_input = TextInput::new().content("2024-03-15");

        let draft = form.build_draft().unwrap();
        assert_eq!(draft.kind, Kind::Expense);
        assert_eq!(draft.currency, Currency::Foreign);
        assert_eq!(draft.category, Category::Food);
        assert_eq!(draft.amount, "12.5");
        assert_eq!(draft.note, "lunch");
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_selector_cycling() {
        let mut form = RecordFormState::new();
        form.focused_field = RecordField::Kind;
        form.cycle_forward();
        assert_eq!(form.kind, Kind::Expense);

        form.focused_field = RecordField::Category;
        let start = form.category;
        form.cycle_forward();
        form.cycle_backward();
        assert_eq!(form.category, start);
    }
}
