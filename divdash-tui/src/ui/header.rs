//! Header component with connection status and analyzed ticker

use crate::app::{App, Theme};
use divdash_sdk::cards::position_line;
use divdash_sdk::ConnectionStatus;
use ratatui::prelude::*;
use ratatui::widgets::*;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20),  // Logo
            Constraint::Min(10),     // Ticker
            Constraint::Length(30),  // Status
        ])
        .split(area);

    // Logo
    let logo = Paragraph::new(Line::from(vec![
        Span::styled("██ ", Style::default().fg(Theme::ACCENT)),
        Span::styled("DIVDASH", Style::default().fg(Theme::FG).bold()),
    ]))
    .block(Block::default().padding(Padding::new(1, 0, 1, 0)));
    frame.render_widget(logo, layout[0]);

    // What is on screen
    let controller = &app.controller;
    let mut spans = Vec::new();
    if controller.is_loading() {
        spans.push(Span::styled(app.spinner(), Style::default().fg(Theme::HIGHLIGHT)));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!("Analyzing {}...", controller.analyzed_ticker().unwrap_or_default()),
            Style::default().fg(Theme::HIGHLIGHT),
        ));
    } else if let Some(ticker) = controller.analyzed_ticker() {
        let displayed = controller.displayed();
        spans.push(Span::styled(ticker.to_string(), Style::default().fg(Theme::FG).bold()));
        spans.push(Span::styled(
            format!(
                "  {}  {}",
                displayed.dividend_frequency.label(),
                position_line(displayed)
            ),
            Style::default().fg(Theme::MUTED),
        ));
    } else {
        spans.push(Span::styled(
            format!("{} ", controller.displayed().ticker),
            Style::default().fg(Theme::FG).bold(),
        ));
        spans.push(Span::styled("SAMPLE DATA", Style::default().fg(Theme::WARNING)));
    }
    let ticker = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(ticker, layout[1]);

    // Connection status
    let status = controller.connection_status();
    let (status_icon, status_color) = match status {
        ConnectionStatus::Connected => ("●", Theme::GAIN),
        ConnectionStatus::Unknown => ("◐", Theme::HIGHLIGHT),
        ConnectionStatus::Disconnected => ("○", Theme::LOSS),
    };

    let stats = Paragraph::new(Line::from(vec![
        Span::styled(status_icon, Style::default().fg(status_color)),
        Span::raw(" "),
        Span::styled(status.label().to_uppercase(), Style::default().fg(status_color).bold()),
    ]))
    .alignment(Alignment::Right)
    .block(Block::default().padding(Padding::new(0, 1, 1, 0)));
    frame.render_widget(stats, layout[2]);

    // Border at bottom
    let border = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Theme::ACCENT));
    frame.render_widget(border, area);
}
