use std::time::Instant;

use crate::session::input::{CharStatus, KeystrokeEvent, SessionUpdate};

/// One practice round over a fixed target text.
///
/// `classifications[..cursor]` are always classified and everything from
/// `cursor` on is [`CharStatus::Unclassified`]. The keystroke counters only
/// ever grow; backspace clears a classification but not its history.
#[derive(Clone, Debug)]
pub struct TypingSession {
    target: Vec<char>,
    classifications: Vec<CharStatus>,
    cursor: usize,
    started_at: Option<Instant>,
    finished_at: Option<Instant>,
    total_keystrokes: usize,
    correct_keystrokes: usize,
}

impl TypingSession {
    pub fn new(text: &str) -> Self {
        let target: Vec<char> = text.chars().collect();
        Self {
            classifications: vec![CharStatus::Unclassified; target.len()],
            target,
            cursor: 0,
            started_at: None,
            finished_at: None,
            total_keystrokes: 0,
            correct_keystrokes: 0,
        }
    }

    pub fn submit_char(&mut self, ch: char) -> SessionUpdate {
        self.submit_char_at(ch, Instant::now())
    }

    pub fn submit_char_at(&mut self, ch: char, now: Instant) -> SessionUpdate {
        if self.is_finished() {
            return SessionUpdate::Ignored;
        }

        let started_at = *self.started_at.get_or_insert(now);

        if self.cursor >= self.target.len() {
            self.finished_at = Some(started_at);
            tracing::debug!("empty session finished");
            return SessionUpdate::Finished;
        }

        let index = self.cursor;
        let expected = self.target[index];
        let correct = ch == expected;

        self.total_keystrokes += 1;
        if correct {
            self.correct_keystrokes += 1;
            self.classifications[index] = CharStatus::Correct;
        } else {
            self.classifications[index] = CharStatus::Error;
        }
        self.cursor += 1;

        let finished = self.cursor == self.target.len();
        if finished {
            self.finished_at = Some(now);
            tracing::debug!(
                total = self.total_keystrokes,
                correct = self.correct_keystrokes,
                "session finished"
            );
        }

        SessionUpdate::Typed {
            event: KeystrokeEvent {
                index,
                expected,
                actual: ch,
                timestamp: now,
                correct,
            },
            finished,
        }
    }

    pub fn submit_backspace(&mut self) -> SessionUpdate {
        if self.is_finished() || self.cursor == 0 {
            return SessionUpdate::Ignored;
        }
        self.cursor -= 1;
        self.classifications[self.cursor] = CharStatus::Unclassified;
        SessionUpdate::Erased { index: self.cursor }
    }

    pub fn target(&self) -> &[char] {
        &self.target
    }

    pub fn classifications(&self) -> &[CharStatus] {
        &self.classifications
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<Instant> {
        self.finished_at
    }

    pub fn total_keystrokes(&self) -> usize {
        self.total_keystrokes
    }

    pub fn correct_keystrokes(&self) -> usize {
        self.correct_keystrokes
    }

    pub fn count(&self, status: CharStatus) -> usize {
        self.classifications.iter().filter(|&&s| s == status).count()
    }

    pub fn elapsed_secs(&self) -> f64 {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => end.saturating_duration_since(start).as_secs_f64(),
            (Some(start), None) => start.elapsed().as_secs_f64(),
            _ => 0.0,
        }
    }

    pub fn progress(&self) -> f64 {
        if self.target.is_empty() {
            return 0.0;
        }
        self.cursor as f64 / self.target.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn type_str(session: &mut TypingSession, text: &str) {
        for ch in text.chars() {
            session.submit_char(ch);
        }
    }

    fn assert_prefix_invariant(session: &TypingSession) {
        let classified = session
            .classifications()
            .iter()
            .take_while(|s| **s != CharStatus::Unclassified)
            .count();
        assert_eq!(classified, session.cursor());
        assert!(
            session.classifications()[session.cursor()..]
                .iter()
                .all(|s| *s == CharStatus::Unclassified)
        );
        assert!(session.total_keystrokes() >= session.correct_keystrokes());
    }

    #[test]
    fn test_new_session() {
        let session = TypingSession::new("hello");
        assert_eq!(session.target().len(), 5);
        assert_eq!(session.classifications().len(), 5);
        assert_eq!(session.cursor(), 0);
        assert!(!session.has_started());
        assert!(!session.is_finished());
        assert_eq!(session.progress(), 0.0);
    }

    #[test]
    fn test_first_key_starts_session() {
        let mut session = TypingSession::new("abc");
        session.submit_char('x');
        assert!(session.has_started());
        assert!(!session.is_finished());
    }

    #[test]
    fn test_classification_is_case_sensitive() {
        let mut session = TypingSession::new("Ab");
        session.submit_char('a');
        session.submit_char('b');
        assert_eq!(
            session.classifications(),
            &[CharStatus::Error, CharStatus::Correct]
        );
        assert_eq!(session.total_keystrokes(), 2);
        assert_eq!(session.correct_keystrokes(), 1);
        assert!(session.is_finished());
    }

    #[test]
    fn test_backspace_clears_but_keeps_counters() {
        let mut session = TypingSession::new("abc");
        session.submit_char('a');
        session.submit_char('x');
        let update = session.submit_backspace();

        assert_eq!(update, SessionUpdate::Erased { index: 1 });
        assert_eq!(session.cursor(), 1);
        assert_eq!(session.classifications()[1], CharStatus::Unclassified);
        assert_eq!(session.total_keystrokes(), 2);
        assert_eq!(session.correct_keystrokes(), 1);
        assert_prefix_invariant(&session);
    }

    #[test]
    fn test_backspace_then_retype_restores_classification() {
        let mut session = TypingSession::new("abc");
        session.submit_char('a');
        session.submit_char('b');
        let before = session.classifications().to_vec();

        session.submit_backspace();
        session.submit_char('b');

        assert_eq!(session.classifications(), before.as_slice());
        assert_eq!(session.total_keystrokes(), 3);
        assert_eq!(session.correct_keystrokes(), 3);
    }

    #[test]
    fn test_backspace_at_start_ignored() {
        let mut session = TypingSession::new("abc");
        assert_eq!(session.submit_backspace(), SessionUpdate::Ignored);
        assert_eq!(session.cursor(), 0);
        assert!(!session.has_started());
    }

    #[test]
    fn test_finish_reports_once() {
        let mut session = TypingSession::new("hi");
        assert!(!session.submit_char('h').finished());
        assert!(session.submit_char('i').finished());
        assert_eq!(session.submit_char('!'), SessionUpdate::Ignored);
        assert_eq!(session.submit_backspace(), SessionUpdate::Ignored);
    }

    #[test]
    fn test_no_changes_after_finish() {
        let mut session = TypingSession::new("ok");
        type_str(&mut session, "ok");
        let classes = session.classifications().to_vec();
        let finished_at = session.finished_at();

        for _ in 0..5 {
            session.submit_char('z');
            session.submit_backspace();
        }

        assert_eq!(session.cursor(), 2);
        assert_eq!(session.classifications(), classes.as_slice());
        assert_eq!(session.total_keystrokes(), 2);
        assert_eq!(session.correct_keystrokes(), 2);
        assert_eq!(session.finished_at(), finished_at);
    }

    #[test]
    fn test_empty_text_finishes_on_first_key() {
        let mut session = TypingSession::new("");
        assert!(!session.is_finished());
        assert_eq!(session.submit_char('a'), SessionUpdate::Finished);
        assert!(session.is_finished());
        assert_eq!(session.total_keystrokes(), 0);
        assert_eq!(session.elapsed_secs(), 0.0);
    }

    #[test]
    fn test_prefix_invariant_under_mixed_input() {
        let mut session = TypingSession::new("the quick brown fox");
        let script = "thw\u{8}e quock\u{8}\u{8}\u{8}ick bx\u{8}rown";
        for ch in script.chars() {
            if ch == '\u{8}' {
                session.submit_backspace();
            } else {
                session.submit_char(ch);
            }
            assert_prefix_invariant(&session);
        }
        assert_eq!(session.cursor(), "the quick brown".chars().count());
    }

    #[test]
    fn test_elapsed_uses_injected_time() {
        let mut session = TypingSession::new("ab");
        let t0 = Instant::now();
        session.submit_char_at('a', t0);
        session.submit_char_at('b', t0 + Duration::from_millis(1500));
        assert!((session.elapsed_secs() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_space_compares_as_literal_space() {
        let mut session = TypingSession::new("a b");
        type_str(&mut session, "a b");
        assert_eq!(session.count(CharStatus::Correct), 3);
    }
}
