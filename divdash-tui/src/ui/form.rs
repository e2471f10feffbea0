//! Analysis input form

use crate::app::{App, Focus, Theme};
use divdash_sdk::cards::period_line;
use divdash_sdk::prelude::parse_date;
use ratatui::prelude::*;
use ratatui::widgets::*;

pub const HEIGHT: u16 = 4;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(Span::styled(" ANALYZE ", Style::default().fg(Theme::FG).bold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Theme::BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(24),
            Constraint::Percentage(16),
            Constraint::Percentage(14),
            Constraint::Percentage(23),
            Constraint::Percentage(23),
        ])
        .split(rows[0]);

    let invalid = app.controller.validation_error().and_then(|e| e.field());

    for (focus, cell) in Focus::all().iter().zip(cells.iter()) {
        let focused = *focus == app.focus;
        let errored = invalid == Some(focus.field());

        let label_color = if errored {
            Theme::LOSS
        } else if focused {
            Theme::ACCENT
        } else {
            Theme::MUTED
        };

        let mut value = app.field_value(*focus);
        if *focus == Focus::Timeframe {
            value = format!("‹ {} ›", value);
        } else if focused {
            value.push('▏');
        }

        let value_style = if focused {
            Style::default().fg(Theme::FG).bold().underlined()
        } else {
            Style::default().fg(Theme::FG)
        };

        let line = Line::from(vec![
            Span::styled(format!(" {}: ", focus.title()), Style::default().fg(label_color)),
            Span::styled(value, value_style),
        ]);
        frame.render_widget(Paragraph::new(line), *cell);
    }

    // Inline validation message, otherwise the window being analyzed
    if let Some(err) = app.controller.validation_error() {
        let message = Paragraph::new(Span::styled(
            format!(" ✗ {}", err),
            Style::default().fg(Theme::LOSS),
        ));
        frame.render_widget(message, rows[1]);
    } else if let Some(chip) = period_chip(app) {
        let chip = Paragraph::new(Span::styled(chip, Style::default().fg(Theme::MUTED)));
        frame.render_widget(chip, rows[1]);
    }
}

/// `" Period: 1D · May 1, 2024 to Jul 26, 2025"`, once both dates parse
pub fn period_chip(app: &App) -> Option<String> {
    let start = parse_date(app.form.start_date.trim())?;
    let end = parse_date(app.form.end_date.trim())?;
    Some(format!(
        " Period: {} · {}",
        app.form.timeframe.as_str(),
        period_line(start, end)
    ))
}
