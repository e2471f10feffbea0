//! Metric card rows

use crate::app::Theme;
use divdash_sdk::cards::{dividend_cards, summary_cards, MetricCard};
use divdash_types::PortfolioSnapshot;
use ratatui::prelude::*;
use ratatui::widgets::*;

pub const HEIGHT: u16 = 5;

pub fn render_summary(frame: &mut Frame, snapshot: &PortfolioSnapshot, area: Rect) {
    render_row(frame, &summary_cards(snapshot), area);
}

pub fn render_dividends(frame: &mut Frame, snapshot: &PortfolioSnapshot, area: Rect) {
    render_row(frame, &dividend_cards(snapshot), area);
}

fn render_row(frame: &mut Frame, cards: &[MetricCard], area: Rect) {
    if cards.is_empty() {
        return;
    }

    let constraints = vec![Constraint::Ratio(1, cards.len() as u32); cards.len()];
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, cell) in cards.iter().zip(cells.iter()) {
        render_card(frame, card, *cell);
    }
}

fn render_card(frame: &mut Frame, card: &MetricCard, area: Rect) {
    let mut title = vec![Span::styled(
        format!(" {} ", card.title),
        Style::default().fg(Theme::MUTED),
    )];
    if let Some(badge) = &card.badge {
        title.push(Span::styled(
            format!(" {} ", badge),
            Style::default().fg(Theme::BG).bg(Theme::HIGHLIGHT).bold(),
        ));
    }

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Theme::BORDER))
        .padding(Padding::new(1, 1, 0, 0));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let trend_color = Theme::trend(card.trend);
    let mut value = vec![Span::styled(
        card.value.clone(),
        Style::default().fg(Theme::FG).bold(),
    )];
    let arrow = card.trend.arrow();
    if !arrow.is_empty() {
        value.push(Span::styled(format!(" {}", arrow), Style::default().fg(trend_color)));
    }

    let mut lines = vec![Line::from(value)];
    if let Some(subtitle) = &card.subtitle {
        lines.push(Line::from(Span::styled(
            subtitle.clone(),
            Style::default().fg(Theme::MUTED),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
