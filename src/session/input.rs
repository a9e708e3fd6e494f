use std::time::Instant;

/// Outcome of the latest attempt at a target position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CharStatus {
    #[default]
    Unclassified,
    Correct,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeystrokeEvent {
    pub index: usize,
    pub expected: char,
    pub actual: char,
    pub timestamp: Instant,
    pub correct: bool,
}

/// What a single input did to the session.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionUpdate {
    /// No state change (finished session, backspace at the start).
    Ignored,
    /// A character was classified; `finished` is set when it was the last.
    Typed { event: KeystrokeEvent, finished: bool },
    /// The classification at `index` was cleared.
    Erased { index: usize },
    /// The session finished without consuming a character (empty text).
    Finished,
}

impl SessionUpdate {
    pub fn finished(&self) -> bool {
        matches!(
            self,
            SessionUpdate::Finished | SessionUpdate::Typed { finished: true, .. }
        )
    }
}

/// Boundary filter for raw key characters: whitespace variants collapse to a
/// plain space and anything non-printable is rejected.
pub fn accept_char(ch: char) -> Option<char> {
    match ch {
        ' ' | '\u{00a0}' => Some(' '),
        c if c.is_control() => None,
        c => Some(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_chars_pass_through() {
        assert_eq!(accept_char('a'), Some('a'));
        assert_eq!(accept_char('A'), Some('A'));
        assert_eq!(accept_char(';'), Some(';'));
        assert_eq!(accept_char('é'), Some('é'));
    }

    #[test]
    fn space_is_normalized() {
        assert_eq!(accept_char(' '), Some(' '));
        assert_eq!(accept_char('\u{00a0}'), Some(' '));
    }

    #[test]
    fn control_chars_rejected() {
        assert_eq!(accept_char('\n'), None);
        assert_eq!(accept_char('\t'), None);
        assert_eq!(accept_char('\u{8}'), None);
        assert_eq!(accept_char('\u{1b}'), None);
    }

    #[test]
    fn finished_flag() {
        assert!(SessionUpdate::Finished.finished());
        assert!(!SessionUpdate::Ignored.finished());
        assert!(!SessionUpdate::Erased { index: 0 }.finished());
    }
}
