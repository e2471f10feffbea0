//! Dividend payment history

use crate::app::Theme;
use crate::widgets::PaymentDots;
use divdash_sdk::timeline::{Timeline, TimelineView};
use ratatui::prelude::*;
use ratatui::widgets::*;

const YEAR_WIDTH: u16 = 6;
const FREQUENCY_WIDTH: u16 = 13;
const TOTAL_WIDTH: u16 = 12;

/// Rows needed to show the whole timeline
pub fn height(timeline: &Timeline) -> u16 {
    match timeline {
        // Borders, legend, rows, separator, grand total, current period
        Timeline::Rows(view) => view.rows.len() as u16 + 6,
        Timeline::NoData { .. } => 3,
    }
}

pub fn render(frame: &mut Frame, timeline: &Timeline, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            " DIVIDEND PAYMENT HISTORY ",
            Style::default().fg(Theme::FG).bold(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Theme::BORDER))
        .padding(Padding::new(1, 1, 0, 0));
    let inner = block.inner(area);

    let view = match timeline {
        Timeline::Rows(view) => view,
        Timeline::NoData { .. } => {
            let message = timeline.message().unwrap_or_default();
            let empty = Paragraph::new(message)
                .style(Style::default().fg(Theme::MUTED))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }
    };

    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(1)]; // Legend
    constraints.extend(view.rows.iter().map(|_| Constraint::Length(1)));
    constraints.push(Constraint::Length(1)); // Separator
    constraints.push(Constraint::Length(1)); // Grand total
    constraints.push(Constraint::Length(1)); // Current period
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    render_legend(frame, view, layout[0]);

    for (i, row) in view.rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(YEAR_WIDTH),
                Constraint::Length(FREQUENCY_WIDTH),
                Constraint::Min(10),
                Constraint::Length(TOTAL_WIDTH),
            ])
            .split(layout[i + 1]);

        frame.render_widget(
            Paragraph::new(Span::styled(
                row.year.to_string(),
                Style::default().fg(Theme::FG).bold(),
            )),
            cols[0],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                row.frequency_label.clone(),
                Style::default().fg(Theme::MUTED),
            )),
            cols[1],
        );
        frame.render_widget(PaymentDots::new(&row.dots, row.dot_size), cols[2]);
        frame.render_widget(
            Paragraph::new(Span::styled(
                row.total_display.clone(),
                Style::default().fg(Theme::FG),
            ))
            .alignment(Alignment::Right),
            cols[3],
        );
    }

    let base = view.rows.len() + 1;
    frame.render_widget(
        Paragraph::new(Span::styled(
            "─".repeat(inner.width as usize),
            Style::default().fg(Theme::BORDER),
        )),
        layout[base],
    );

    let total = Line::from(vec![
        Span::styled("Total Dividend History  ", Style::default().fg(Theme::MUTED)),
        Span::styled(
            view.grand_total_display.clone(),
            Style::default().fg(Theme::FG).bold(),
        ),
    ]);
    frame.render_widget(Paragraph::new(total).alignment(Alignment::Right), layout[base + 1]);

    if let Some(current) = view.current() {
        let line = Line::from(vec![
            Span::styled("▸ ", Style::default().fg(Theme::ACCENT)),
            Span::styled(current.tooltip.clone(), Style::default().fg(Theme::FG)),
            Span::styled(
                format!("  ({})", current.status),
                Style::default().fg(Theme::status(current.color)),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), layout[base + 2]);
    }
}

fn render_legend(frame: &mut Frame, view: &TimelineView, area: Rect) {
    let spans: Vec<Span> = view
        .legend()
        .iter()
        .flat_map(|(label, color)| {
            vec![
                Span::styled("● ", Style::default().fg(Theme::status(*color))),
                Span::styled(format!("{}   ", label), Style::default().fg(Theme::MUTED)),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Right), area);
}
