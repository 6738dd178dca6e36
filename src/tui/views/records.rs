//! Record table view
//!
//! Shows every record in the session ledger, in entry order.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::i18n::{category_label, currency_label, kind_label};
use crate::models::money::format_amount;
use crate::tui::app::App;

/// Render the record table
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let t = app.session.language.strings();
    let lang = app.session.language;

    let block = Block::default()
        .title(format!(" {} ", t.records))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let records = app.session.ledger().records();

    if records.is_empty() {
        let text = Paragraph::new(t.no_records)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Length(8),  // Kind
        Constraint::Length(12), // Amount
        Constraint::Length(12), // Currency
        Constraint::Length(16), // Converted
        Constraint::Length(14), // Category
        Constraint::Min(8),     // Note
    ];

    let header = Row::new(vec![
        Cell::from(t.date),
        Cell::from(t.kind),
        Cell::from(t.amount),
        Cell::from(t.currency),
        Cell::from(t.converted_amount),
        Cell::from(t.category),
        Cell::from(t.note),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .height(1);

    let rows: Vec<Row> = records
        .iter()
        .map(|record| {
            let converted_style = if record.converted < 0.0 {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };

            Row::new(vec![
                Cell::from(record.date.format("%Y-%m-%d").to_string()),
                Cell::from(kind_label(record.kind, lang)),
                Cell::from(format_amount(record.amount)),
                Cell::from(currency_label(record.currency, lang)),
                Cell::from(format_amount(record.converted)).style(converted_style),
                Cell::from(category_label(record.category, lang)),
                Cell::from(record.note.clone()),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index.min(records.len() - 1)));

    frame.render_stateful_widget(table, area, &mut state);
}
