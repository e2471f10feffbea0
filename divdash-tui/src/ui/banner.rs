//! Error banner shown while the sample data stands in for a failed analysis

use crate::app::{App, Theme};
use ratatui::prelude::*;
use ratatui::widgets::*;

/// Banner text, if the controller holds an error
pub fn message(app: &App) -> Option<String> {
    app.controller
        .error_message()
        .map(|error| format!("{}  Showing sample data.", error))
}

pub fn render(frame: &mut Frame, message: &str, area: Rect) {
    let banner = Paragraph::new(Line::from(vec![
        Span::styled("⚠ ", Style::default().fg(Theme::WARNING).bold()),
        Span::styled(message.to_string(), Style::default().fg(Theme::FG)),
    ]))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Theme::LOSS)),
    );
    frame.render_widget(banner, area);
}
