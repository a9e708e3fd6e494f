use crate::session::input::CharStatus;
use crate::session::typing::TypingSession;

/// End-of-round numbers shown on the results screen.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionStats {
    pub total_chars: usize,
    pub correct_final: usize,
    pub errors_final: usize,
    pub word_count: usize,
    pub total_keystrokes: usize,
    pub correct_keystrokes: usize,
    /// Share of the target that ends up correct, after corrections.
    pub accuracy_corrected: f64,
    /// Share of all keystrokes that matched when they were typed.
    pub accuracy_raw: f64,
    pub duration_secs: f64,
    pub wpm: f64,
    pub cpm: f64,
}

impl SessionStats {
    pub fn from_session(session: &TypingSession) -> Self {
        let total_chars = session.target().len();
        let correct_final = session.count(CharStatus::Correct);
        let errors_final = session.count(CharStatus::Error);
        let word_count = session
            .target()
            .split(|c| c.is_whitespace())
            .filter(|w| !w.is_empty())
            .count();

        let total_keystrokes = session.total_keystrokes();
        let correct_keystrokes = session.correct_keystrokes();

        let accuracy_corrected = percent(correct_final, total_chars);
        let accuracy_raw = percent(correct_keystrokes, total_keystrokes);

        let duration_secs = match (session.started_at(), session.finished_at()) {
            (Some(start), Some(end)) => end.saturating_duration_since(start).as_secs_f64(),
            _ => 0.0,
        };

        let (wpm, cpm) = if duration_secs > 0.0 {
            (
                word_count as f64 / duration_secs * 60.0,
                total_chars as f64 / duration_secs * 60.0,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            total_chars,
            correct_final,
            errors_final,
            word_count,
            total_keystrokes,
            correct_keystrokes,
            accuracy_corrected,
            accuracy_raw,
            duration_secs,
            wpm,
            cpm,
        }
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
