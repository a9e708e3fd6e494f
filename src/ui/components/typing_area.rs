use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use homerow::session::input::CharStatus;
use homerow::session::typing::TypingSession;

use crate::ui::theme::{Theme, ThemeColors};

/// The target text, styled from the session's classifications and cursor.
pub struct TypingArea<'a> {
    session: &'a TypingSession,
    theme: &'a Theme,
}

impl<'a> TypingArea<'a> {
    pub fn new(session: &'a TypingSession, theme: &'a Theme) -> Self {
        Self { session, theme }
    }
}

fn char_style(colors: &ThemeColors, status: CharStatus, at_cursor: bool) -> Style {
    if at_cursor {
        return Style::default()
            .fg(colors.text_cursor_fg())
            .bg(colors.text_cursor_bg());
    }
    match status {
        CharStatus::Correct => Style::default().fg(colors.text_correct()),
        CharStatus::Error => Style::default()
            .fg(colors.text_incorrect())
            .bg(colors.text_incorrect_bg())
            .add_modifier(Modifier::UNDERLINED),
        CharStatus::Unclassified => Style::default().fg(colors.text_pending()),
    }
}

fn build_spans<'s>(session: &TypingSession, colors: &ThemeColors) -> Vec<Span<'s>> {
    // The cursor highlight disappears once the round is over.
    let cursor = (!session.is_finished()).then(|| session.cursor());

    session
        .target()
        .iter()
        .zip(session.classifications())
        .enumerate()
        .map(|(i, (&ch, &status))| {
            Span::styled(ch.to_string(), char_style(colors, status, cursor == Some(i)))
        })
        .collect()
}

impl Widget for TypingArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));

        let paragraph = Paragraph::new(Line::from(build_spans(self.session, colors)))
            .block(block)
            .wrap(Wrap { trim: false });

        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(session: &TypingSession, theme: &Theme) -> Buffer {
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        TypingArea::new(session, theme).render(area, &mut buf);
        buf
    }

    #[test]
    fn styles_follow_classifications() {
        let theme = Theme::default();
        let colors = &theme.colors;
        let mut session = TypingSession::new("abc");
        session.submit_char('a');
        session.submit_char('x');

        let buf = render(&session, &theme);
        assert_eq!(buf[(1, 1)].symbol(), "a");
        assert_eq!(buf[(1, 1)].fg, colors.text_correct());
        assert_eq!(buf[(2, 1)].symbol(), "b");
        assert_eq!(buf[(2, 1)].fg, colors.text_incorrect());
        assert_eq!(buf[(3, 1)].bg, colors.text_cursor_bg());
    }

    #[test]
    fn backspace_restores_pending_style() {
        let theme = Theme::default();
        let mut session = TypingSession::new("abc");
        session.submit_char('x');
        session.submit_backspace();

        let spans = build_spans(&session, &theme.colors);
        assert_eq!(spans[0].style.bg, Some(theme.colors.text_cursor_bg()));
        assert_eq!(spans[1].style.fg, Some(theme.colors.text_pending()));
    }

    #[test]
    fn finished_session_has_no_cursor() {
        let theme = Theme::default();
        let mut session = TypingSession::new("ab");
        session.submit_char('a');
        session.submit_char('b');

        let spans = build_spans(&session, &theme.colors);
        assert!(
            spans
                .iter()
                .all(|s| s.style.fg == Some(theme.colors.text_correct()))
        );
    }
}
