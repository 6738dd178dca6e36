//! Sidebar view
//!
//! Shows the app header and the session settings: language and
//! conversion rate, plus the sink indicator when one is attached.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Settings
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    render_settings(frame, app, chunks[1]);
}

/// Render the app title header
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let t = app.session.language.strings();

    let block = Block::default()
        .title(format!(" {} ", t.title))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let version = Paragraph::new(concat!("v", env!("CARGO_PKG_VERSION")))
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(version, area);
}

/// Render the settings panel
fn render_settings(frame: &mut Frame, app: &App, area: Rect) {
    let t = app.session.language.strings();

    let block = Block::default()
        .title(format!(" {} ", t.settings))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{}: ", t.language),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                app.session.language.as_str(),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(" [l]", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", t.rate), Style::default().fg(Color::White)),
            Span::styled(
                format!("{:.1}", app.session.rate()),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(" [+/-]", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    if app.session.has_sink() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "→ CSV",
            Style::default().fg(Color::Green),
        )));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
