//! Capital vs dividend share of total return

use crate::app::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Widget;

/// Horizontal bar split between capital gains and dividends
pub struct ReturnSplit {
    dividend_share: f64, // 0.0 to 1.0
}

impl ReturnSplit {
    pub fn new(dividend_share: f64) -> Self {
        let share = if dividend_share.is_finite() {
            dividend_share.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            dividend_share: share,
        }
    }
}

impl Widget for ReturnSplit {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let width = area.width as usize;
        let dividend_cells = (self.dividend_share * width as f64).round() as usize;

        for x in 0..width {
            let (glyph, color) = if x < dividend_cells {
                ("▓", Theme::PAID)
            } else {
                ("░", Theme::ACCENT)
            };
            buf.set_string(area.x + x as u16, area.y, glyph, Style::default().fg(color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_proportions() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        ReturnSplit::new(0.3).render(area, &mut buf);
        assert_eq!(buf[(2, 0)].symbol(), "▓");
        assert_eq!(buf[(3, 0)].symbol(), "░");
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        ReturnSplit::new(f64::NAN).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "░");

        let mut buf = Buffer::empty(area);
        ReturnSplit::new(7.0).render(area, &mut buf);
        assert_eq!(buf[(3, 0)].symbol(), "▓");
    }
}
