use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};

use crate::ui::theme::Theme;

/// Typed-so-far bar for the current target, labelled `typed/total`.
pub struct ProgressBar<'a> {
    typed: usize,
    total: usize,
    theme: &'a Theme,
}

impl<'a> ProgressBar<'a> {
    pub fn new(typed: usize, total: usize, theme: &'a Theme) -> Self {
        Self {
            typed: typed.min(total),
            total,
            theme,
        }
    }

    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.typed as f64 / self.total as f64
    }
}

impl Widget for ProgressBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Progress ")
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let filled_end = inner.x + (self.ratio() * inner.width as f64) as u16;
        let filled = Style::default().fg(colors.bg()).bg(colors.bar_filled());
        let empty = Style::default().fg(colors.fg()).bg(colors.bar_empty());
        buf.set_style(Rect { width: filled_end - inner.x, height: 1, ..inner }, filled);
        buf.set_style(
            Rect { x: filled_end, width: inner.right() - filled_end, height: 1, ..inner },
            empty,
        );

        let label = format!("{}/{}", self.typed, self.total);
        let width = label.chars().count() as u16;
        if width <= inner.width {
            let label_x = inner.x + (inner.width - width) / 2;
            buf.set_stringn(label_x, inner.y, &label, width as usize, Style::default().fg(colors.fg()));
        }
    }
}
