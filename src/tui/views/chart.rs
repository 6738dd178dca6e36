//! Monthly statistics chart
//!
//! Bar chart of converted totals grouped by month, one bar per record
//! kind. Expense totals are stored negative; bars show magnitudes and
//! keep the sign in the printed value.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::kind_label;
use crate::models::money::format_amount;
use crate::models::Kind;
use crate::tui::app::App;

/// Render the monthly bar chart
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = app.session.language.strings();
    let lang = app.session.language;

    let block = Block::default()
        .title(format!(" {} ", t.statistics))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let totals = app.session.ledger().monthly_totals();

    if totals.is_empty() {
        let text = Paragraph::new(t.no_records)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    // Group by month; monthly_totals is already sorted by month then kind
    let mut groups: Vec<(String, Vec<(Kind, f64)>)> = Vec::new();
    for entry in &totals {
        match groups.last_mut() {
            Some((month, bars)) if *month == entry.month => {
                bars.push((entry.kind, entry.total));
            }
            _ => groups.push((entry.month.clone(), vec![(entry.kind, entry.total)])),
        }
    }

    let bar_groups: Vec<BarGroup> = groups
        .iter()
        .map(|(month, bars)| {
            let bars: Vec<Bar> = bars
                .iter()
                .map(|(kind, total)| {
                    let color = match kind {
                        Kind::Income => Color::Green,
                        Kind::Expense => Color::Red,
                    };
                    Bar::default()
                        .value(total.abs().round() as u64)
                        .label(Line::from(kind_label(*kind, lang)))
                        .text_value(format_amount(*total))
                        .style(Style::default().fg(color))
                        .value_style(
                            Style::default()
                                .fg(Color::Black)
                                .bg(color)
                                .add_modifier(Modifier::BOLD),
                        )
                })
                .collect();

            BarGroup::default()
                .label(Line::from(month.clone()).centered())
                .bars(&bars)
        })
        .collect();

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(10)
        .bar_gap(1)
        .group_gap(3);

    for group in bar_groups {
        chart = chart.data(group);
    }

    frame.render_widget(chart, area);
}
