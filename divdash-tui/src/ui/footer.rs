//! Footer component with keybindings

use crate::app::{App, Theme};
use ratatui::prelude::*;
use ratatui::widgets::*;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let auto_hide = if app.auto_hide_form {
        "Auto-hide: on"
    } else {
        "Auto-hide: off"
    };
    let keybindings: Vec<(&str, &str)> = if app.show_form {
        vec![
            ("Tab", "Next field"),
            ("←→", "Timeframe"),
            ("Enter", "Analyze"),
            ("Esc", "Hide form"),
            ("F2", auto_hide),
            ("Ctrl+C", "Quit"),
        ]
    } else {
        vec![
            ("Enter", "Re-run"),
            ("Esc", "Edit"),
            ("R", "Reset"),
            ("F2", auto_hide),
            ("Q", "Quit"),
        ]
    };

    let uptime = app.uptime().as_secs();
    let mut spans: Vec<Span> = keybindings
        .iter()
        .flat_map(|(key, action)| {
            vec![
                Span::styled(*key, Style::default().fg(Theme::ACCENT).bold()),
                Span::styled(format!(" {}  ", action), Style::default().fg(Theme::MUTED)),
            ]
        })
        .collect();
    spans.push(Span::styled(
        format!("⏱ {:02}:{:02}", uptime / 60, uptime % 60),
        Style::default().fg(Theme::MUTED),
    ));

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Theme::BORDER))
                .padding(Padding::new(0, 0, 1, 0))
        );

    frame.render_widget(help, area);
}
