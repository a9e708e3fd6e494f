use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use homerow::session::result::SessionStats;

use crate::ui::theme::Theme;

/// The results panel shown after a round.
pub struct Dashboard<'a> {
    pub stats: &'a SessionStats,
    pub theme: &'a Theme,
}

impl<'a> Dashboard<'a> {
    pub fn new(stats: &'a SessionStats, theme: &'a Theme) -> Self {
        Self { stats, theme }
    }

    fn rows(&self) -> [(&'static str, String, String); 5] {
        let s = self.stats;
        [
            (
                "Accuracy (corrected): ",
                format!("{:.1}%", s.accuracy_corrected),
                format!("  ({}/{} chars)", s.correct_final, s.total_chars),
            ),
            (
                "Accuracy (raw):       ",
                format!("{:.1}%", s.accuracy_raw),
                format!("  ({}/{} keys)", s.correct_keystrokes, s.total_keystrokes),
            ),
            ("Time:                 ", format!("{:.2} s", s.duration_secs), String::new()),
            ("WPM:                  ", format!("{:.2}", s.wpm), String::new()),
            ("Letters per minute:   ", format!("{:.2}", s.cpm), String::new()),
        ]
    }
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Results ")
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        let title = Paragraph::new(Line::from(Span::styled(
            "Session Finished",
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        title.render(layout[0], buf);

        for (i, (label, value, detail)) in self.rows().into_iter().enumerate() {
            let line = Line::from(vec![
                Span::styled(format!("  {label}"), Style::default().fg(colors.fg())),
                Span::styled(
                    value,
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(detail, Style::default().fg(colors.text_pending())),
            ]);
            Paragraph::new(line).render(layout[i + 1], buf);
        }

        let help = Paragraph::new(Line::from(vec![
            Span::styled("  [Enter/Space] Next  ", Style::default().fg(colors.accent())),
            Span::styled("[q/Esc] Quit", Style::default().fg(colors.accent())),
        ]));
        help.render(layout[7], buf);
    }
}
