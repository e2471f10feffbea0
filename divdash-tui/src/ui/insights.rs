//! Dividend analysis summary and performance overview

use crate::app::Theme;
use crate::widgets::ReturnSplit;
use divdash_sdk::cards::{
    dividend_metric_cards, insight_rows, key_dates, performance_overview, ttm_summary,
};
use divdash_types::{DividendMetrics, PortfolioSnapshot};
use ratatui::prelude::*;
use ratatui::widgets::*;
use rust_decimal::prelude::ToPrimitive;

pub const MIN_HEIGHT: u16 = 9;

pub fn render(frame: &mut Frame, snapshot: &PortfolioSnapshot, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_analysis(frame, snapshot, cols[0]);
    render_overview(frame, snapshot, cols[1]);
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(format!(" {} ", title), Style::default().fg(Theme::FG).bold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Theme::BORDER))
        .padding(Padding::new(1, 1, 0, 0))
}

fn row<'a>(label: impl Into<String>, value: impl Into<String>, color: Color) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<28}", label.into()), Style::default().fg(Theme::MUTED)),
        Span::styled(value.into(), Style::default().fg(color).bold()),
    ])
}

fn render_analysis(frame: &mut Frame, snapshot: &PortfolioSnapshot, area: Rect) {
    let mut lines: Vec<Line> = insight_rows(snapshot)
        .into_iter()
        .map(|r| row(r.label, r.value, Theme::FG))
        .collect();

    // Extended metrics, only when the service reported them
    if snapshot.dividend_metrics != DividendMetrics::default() {
        for card in dividend_metric_cards(snapshot) {
            let value = match card.badge {
                Some(badge) => format!("{} {}", card.value, badge),
                None => card.value,
            };
            lines.push(row(card.title, value, Theme::trend(card.trend)));
        }
    }

    let paragraph = Paragraph::new(lines).block(panel("DIVIDEND ANALYSIS"));
    frame.render_widget(paragraph, area);
}

fn render_overview(frame: &mut Frame, snapshot: &PortfolioSnapshot, area: Rect) {
    let block = panel("PERFORMANCE OVERVIEW");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = performance_overview(snapshot)
        .into_iter()
        .map(|r| row(r.label, r.value, Theme::ACCENT))
        .collect();

    if let Some(ttm) = ttm_summary(snapshot) {
        lines.push(row("TTM Dividends", ttm.ttm_sum, Theme::PAID));
        lines.push(row("Annualized Estimate", ttm.annualized, Theme::FG));
    }
    if let Some(dates) = key_dates(snapshot) {
        lines.push(row("Last Ex-Dividend", dates.last_ex_dividend, Theme::FG));
        if let Some(next) = dates.next_ex_dividend {
            lines.push(row("Next Ex-Dividend (est.)", next, Theme::FG));
        }
    }

    let text_height = lines.len() as u16;
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(text_height),
            Constraint::Length(1), // Split label
            Constraint::Length(1), // Split bar
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(lines), layout[0]);

    let share = snapshot.dividend_share_of_return().to_f64().unwrap_or(0.0) / 100.0;
    let label = Line::from(vec![
        Span::styled("▓ Dividends ", Style::default().fg(Theme::PAID)),
        Span::styled("░ Capital", Style::default().fg(Theme::ACCENT)),
    ]);
    frame.render_widget(Paragraph::new(label), layout[1]);
    frame.render_widget(ReturnSplit::new(share), layout[2]);
}
