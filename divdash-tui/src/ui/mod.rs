//! UI rendering components

mod banner;
mod cards;
mod footer;
mod form;
mod header;
mod insights;
mod timeline;

use crate::app::{App, Theme};
use ratatui::prelude::*;
use ratatui::widgets::*;

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(Theme::BG)), area);

    let banner = banner::message(app);

    let mut constraints = vec![Constraint::Length(3)]; // Header
    if app.show_form {
        constraints.push(Constraint::Length(form::HEIGHT));
    }
    if banner.is_some() {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(10)); // Content
    constraints.push(Constraint::Length(3)); // Footer

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut slot = 0;
    header::render(frame, app, layout[slot]);
    slot += 1;
    if app.show_form {
        form::render(frame, app, layout[slot]);
        slot += 1;
    }
    if let Some(banner) = banner {
        banner::render(frame, &banner, layout[slot]);
        slot += 1;
    }
    render_content(frame, app, layout[slot]);
    footer::render(frame, app, layout[slot + 1]);
}

fn render_content(frame: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.controller.displayed();

    if !snapshot.has_dividends() {
        // Zero-total years still show on the timeline
        let timeline = app.timeline();
        let timeline_height = if snapshot.schedule.is_empty() {
            0
        } else {
            timeline::height(&timeline)
        };
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(cards::HEIGHT),
                Constraint::Length(timeline_height),
                Constraint::Min(3),
            ])
            .split(area);
        cards::render_summary(frame, snapshot, layout[0]);
        if timeline_height > 0 {
            timeline::render(frame, &timeline, layout[1]);
        }
        let empty = Paragraph::new(format!("No dividend income for {}", snapshot.ticker))
            .style(Style::default().fg(Theme::MUTED))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Theme::BORDER)),
            );
        frame.render_widget(empty, layout[2]);
        return;
    }

    let timeline = app.timeline();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(cards::HEIGHT),          // Summary cards
            Constraint::Length(cards::HEIGHT),          // Dividend cards
            Constraint::Length(timeline::height(&timeline)),
            Constraint::Min(insights::MIN_HEIGHT),
        ])
        .split(area);

    cards::render_summary(frame, snapshot, layout[0]);
    cards::render_dividends(frame, snapshot, layout[1]);
    timeline::render(frame, &timeline, layout[2]);
    insights::render(frame, snapshot, layout[3]);
}
