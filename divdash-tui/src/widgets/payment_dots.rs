//! Row of payment indicators for one timeline year

use crate::app::Theme;
use divdash_sdk::timeline::PaymentDot;
use divdash_types::DotSize;
use ratatui::prelude::*;
use ratatui::widgets::Widget;

pub struct PaymentDots<'a> {
    dots: &'a [PaymentDot],
    size: DotSize,
}

impl<'a> PaymentDots<'a> {
    pub fn new(dots: &'a [PaymentDot], size: DotSize) -> Self {
        Self { dots, size }
    }

    fn glyph(&self) -> &'static str {
        match self.size {
            DotSize::Small => "•",
            DotSize::Medium => "●",
            DotSize::Large => "◉",
            DotSize::ExtraLarge => "A",
        }
    }

    /// Columns taken by one dot including its brackets
    pub fn cell_width(size: DotSize) -> u16 {
        size.cells() + 2
    }
}

impl Widget for PaymentDots<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let width = Self::cell_width(self.size);
        let glyph = self.glyph().repeat(self.size.cells() as usize);

        for (i, dot) in self.dots.iter().enumerate() {
            let x = area.x + i as u16 * width;
            if x + width > area.x + area.width {
                break;
            }

            let color = Theme::status(dot.color);
            let mut style = Style::default().fg(color);
            if self.size == DotSize::ExtraLarge {
                style = style.bg(color).fg(Theme::BG).bold();
            }

            // Current period is bracketed
            let (open, close) = if dot.is_current { ("[", "]") } else { (" ", " ") };
            let bracket = Style::default().fg(Theme::ACCENT).bold();
            buf.set_string(x, area.y, open, bracket);
            buf.set_string(x + 1, area.y, &glyph, style);
            buf.set_string(x + 1 + self.size.cells(), area.y, close, bracket);
        }
    }
}
