use homerow::config::Config;
use homerow::generator::TextProvider;
use homerow::session::input::{self, SessionUpdate};
use homerow::session::result::SessionStats;
use homerow::session::typing::TypingSession;

use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Typing,
    Results,
}

pub struct App {
    pub screen: AppScreen,
    pub session: TypingSession,
    pub last_stats: Option<SessionStats>,
    pub theme: &'static Theme,
    pub config: Config,
    pub should_quit: bool,
    provider: TextProvider,
}

impl App {
    pub fn new(config: Config, theme: &'static Theme) -> Self {
        Self::with_provider(TextProvider::from_config(&config), config, theme)
    }

    pub fn with_provider(mut provider: TextProvider, config: Config, theme: &'static Theme) -> Self {
        let session = TypingSession::new(&next_prompt(&mut provider, &config));
        Self {
            screen: AppScreen::Typing,
            session,
            last_stats: None,
            theme,
            config,
            should_quit: false,
            provider,
        }
    }

    /// Drops the current round and starts a fresh one with new text.
    pub fn reset_session(&mut self) {
        let text = next_prompt(&mut self.provider, &self.config);
        self.session = TypingSession::new(&text);
        self.last_stats = None;
        self.screen = AppScreen::Typing;
        tracing::debug!(mode = self.provider.mode().as_str(), chars = self.session.target().len(), "new session");
    }

    pub fn type_char(&mut self, ch: char) {
        let Some(ch) = input::accept_char(ch) else {
            return;
        };
        let update = self.session.submit_char(ch);
        if update.finished() {
            self.finish();
        }
    }

    pub fn backspace(&mut self) {
        if let SessionUpdate::Erased { index } = self.session.submit_backspace() {
            tracing::trace!(index, "erased");
        }
    }

    fn finish(&mut self) {
        let stats = SessionStats::from_session(&self.session);
        tracing::info!(
            accuracy_corrected = stats.accuracy_corrected,
            accuracy_raw = stats.accuracy_raw,
            wpm = stats.wpm,
            "session complete"
        );
        if self.config.end_screen {
            self.last_stats = Some(stats);
            self.screen = AppScreen::Results;
        } else {
            self.reset_session();
        }
    }

    pub fn mode_name(&self) -> &'static str {
        self.provider.mode().as_str()
    }
}

fn next_prompt(provider: &mut TextProvider, config: &Config) -> String {
    // Settings the current mode cannot use are reported through the prompt itself.
    if let Err(err) = config.validate() {
        tracing::warn!(error = %err, "invalid configuration");
        return err.placeholder();
    }
    provider.next_text()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::RngCore;
    use rand::rngs::SmallRng;

    use homerow::error::TextError;
    use homerow::generator::GeneratorMode;
    use homerow::generator::book::BookSource;
    use homerow::generator::dictionary::BundledWords;

    use super::*;

    struct OneBook;

    impl BookSource for OneBook {
        fn load_book(&self, _rng: &mut dyn RngCore) -> Result<String, TextError> {
            Ok("abc".to_string())
        }
    }

    fn test_app(end_screen: bool) -> App {
        let config = Config {
            mode: GeneratorMode::BookSample,
            end_screen,
            ..Config::default()
        };
        let provider = TextProvider::with_sources(
            &config,
            Box::new(BundledWords),
            Box::new(OneBook),
            SmallRng::seed_from_u64(1),
        );
        let theme: &'static Theme = Box::leak(Box::new(Theme::default()));
        App::with_provider(provider, config, theme)
    }

    #[test]
    fn finishing_shows_results() {
        let mut app = test_app(true);
        app.type_char('a');
        app.type_char('x');
        app.backspace();
        app.type_char('b');
        assert_eq!(app.screen, AppScreen::Typing);
        app.type_char('c');

        assert_eq!(app.screen, AppScreen::Results);
        let stats = app.last_stats.as_ref().unwrap();
        assert_eq!(stats.accuracy_corrected, 100.0);
        assert!(stats.accuracy_raw < 100.0);
    }

    #[test]
    fn control_chars_do_not_reach_session() {
        let mut app = test_app(true);
        app.type_char('\u{1b}');
        assert!(!app.session.has_started());
    }

    #[test]
    fn without_end_screen_rolls_into_new_session() {
        let mut app = test_app(false);
        for ch in "abc".chars() {
            app.type_char(ch);
        }
        assert_eq!(app.screen, AppScreen::Typing);
        assert!(!app.session.has_started());
        assert!(app.last_stats.is_none());
    }

    #[test]
    fn invalid_config_yields_placeholder_prompt() {
        let config = Config {
            alphabet: String::new(),
            ..Config::default()
        };
        let provider = TextProvider::with_sources(
            &config,
            Box::new(BundledWords),
            Box::new(OneBook),
            SmallRng::seed_from_u64(1),
        );
        let theme: &'static Theme = Box::leak(Box::new(Theme::default()));
        let app = App::with_provider(provider, config, theme);
        let prompt: String = app.session.target().iter().collect();
        assert!(prompt.starts_with("INVALID CONFIG"));
    }

    fn app_with(config: Config) -> App {
        let provider = TextProvider::with_sources(
            &config,
            Box::new(BundledWords),
            Box::new(OneBook),
            SmallRng::seed_from_u64(1),
        );
        let theme: &'static Theme = Box::leak(Box::new(Theme::default()));
        App::with_provider(provider, config, theme)
    }

    fn prompt(app: &App) -> String {
        app.session.target().iter().collect()
    }

    #[test]
    fn raw_book_ignores_alphabet_and_lengths() {
        let app = app_with(Config {
            mode: GeneratorMode::BookSample,
            alphabet: String::new(),
            min_word_len: 5,
            max_word_len: 3,
            ..Config::default()
        });
        assert_eq!(prompt(&app), "abc");
    }

    #[test]
    fn dictionary_ignores_length_range() {
        let app = app_with(Config {
            mode: GeneratorMode::DictionaryWords,
            alphabet: "asdf".into(),
            min_word_len: 5,
            max_word_len: 3,
            ..Config::default()
        });
        let prompt = prompt(&app);
        assert!(!prompt.starts_with("INVALID CONFIG"));
        assert!(prompt.chars().all(|c| c == ' ' || "asdf".contains(c.to_ascii_lowercase())));
    }

    #[test]
    fn random_and_filtered_modes_reject_bad_range() {
        for mode in [GeneratorMode::RandomWords, GeneratorMode::BookSampleFiltered] {
            let app = app_with(Config {
                mode,
                min_word_len: 5,
                max_word_len: 3,
                ..Config::default()
            });
            assert!(prompt(&app).starts_with("INVALID CONFIG"), "{mode:?}");
        }
    }
}
