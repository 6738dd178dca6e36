//! Summary view
//!
//! Total income, total expense, and the running balance, all in the
//! home currency.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::money::format_amount;
use crate::tui::app::App;

/// Render the summary totals
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = app.session.language.strings();
    let summary = app.session.ledger().summarize();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let balance_color = if summary.balance < 0.0 {
        Color::Red
    } else {
        Color::Green
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{}: ", t.total_income),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("{} {}", t.home_symbol, format_amount(summary.total_income)),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{}: ", t.total_expense),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("{} {}", t.home_symbol, format_amount(summary.total_expense)),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{}: ", t.balance),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("{} {}", t.home_symbol, format_amount(summary.balance)),
                Style::default()
                    .fg(balance_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
