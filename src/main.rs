mod app;
mod event;
mod ui;

use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use tracing_subscriber::EnvFilter;

use homerow::config::Config;
use homerow::generator::GeneratorMode;

use app::{App, AppScreen};
use event::{AppEvent, EventHandler};
use ui::components::dashboard::Dashboard;
use ui::components::progress_bar::ProgressBar;
use ui::components::typing_area::TypingArea;
use ui::layout::AppLayout;

#[derive(Parser)]
#[command(name = "homerow", version, about = "Terminal typing practice with per-character feedback")]
struct Cli {
    #[arg(short, long, value_enum, help = "Text generation mode")]
    mode: Option<GeneratorMode>,

    #[arg(short, long, help = "Characters drills are built from")]
    alphabet: Option<String>,

    #[arg(short, long, help = "Number of words per session")]
    words: Option<usize>,

    #[arg(long, help = "Shortest generated word")]
    min_len: Option<usize>,

    #[arg(long, help = "Longest generated word")]
    max_len: Option<usize>,

    #[arg(short, long, help = "Folder of .txt books")]
    books: Option<String>,

    #[arg(short, long, help = "Word list, one word per line")]
    dictionary: Option<String>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, help = "Start the next session immediately instead of showing results")]
    no_end_screen: bool,

    #[arg(long, help = "Write the effective settings to the config file")]
    save_config: bool,

    #[arg(long, help = "Print the bundled theme names and exit")]
    list_themes: bool,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(alphabet) = self.alphabet {
            config.alphabet = alphabet;
        }
        if let Some(words) = self.words {
            config.word_count = words;
        }
        if let Some(min_len) = self.min_len {
            config.min_word_len = min_len;
        }
        if let Some(max_len) = self.max_len {
            config.max_word_len = max_len;
        }
        if let Some(books) = self.books {
            config.books_dir = books;
        }
        if let Some(dictionary) = self.dictionary {
            config.dictionary_path = Some(dictionary);
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if self.no_end_screen {
            config.end_screen = false;
        }
    }
}

fn init_logging() {
    let Some(dir) = dirs::data_dir().map(|d| d.join("homerow")) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("homerow.log"))
    else {
        return;
    };

    let filter = EnvFilter::try_from_env("HOMEROW_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.list_themes {
        for name in ui::theme::Theme::available_themes() {
            println!("{name}");
        }
        return Ok(());
    }
    init_logging();

    let mut config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "config unreadable, using defaults");
        Config::default()
    });
    let save_config = cli.save_config;
    cli.apply(&mut config);
    if save_config {
        config.save()?;
    }

    let theme = ui::theme::Theme::load(&config.theme).unwrap_or_else(|| {
        tracing::warn!(
            theme = %config.theme,
            available = ?ui::theme::Theme::available_themes(),
            "unknown theme, using default"
        );
        ui::theme::Theme::default()
    });
    let theme: &'static ui::theme::Theme = Box::leak(Box::new(theme));

    let mut app = App::new(config, theme);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(250));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!(error = ?err, "terminal loop failed");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick | AppEvent::Resize => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // AltGr arrives as CONTROL|ALT on some platforms and produces text.
    if is_chord(key.modifiers, KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.should_quit = true,
            KeyCode::Char('r') | KeyCode::Char('R') => app.reset_session(),
            _ => {}
        }
        return;
    }

    match app.screen {
        AppScreen::Typing => handle_typing_key(app, key),
        AppScreen::Results => handle_result_key(app, key),
    }
}

fn handle_typing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(_) if is_chord(key.modifiers, KeyModifiers::ALT) => {}
        KeyCode::Char(ch) => app.type_char(ch),
        _ => {}
    }
}

fn is_chord(modifiers: KeyModifiers, with: KeyModifiers) -> bool {
    let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
    modifiers.contains(with) && !modifiers.contains(altgr)
}

fn handle_result_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => app.reset_session(),
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    render_typing(frame, app);
    if app.screen == AppScreen::Results {
        render_result(frame, app);
    }
}

fn render_typing(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;
    let session = &app.session;
    let layout = AppLayout::new(area);

    let header_text = format!(
        " {}/{}  |  {:.0}s",
        session.cursor(),
        session.target().len(),
        session.elapsed_secs(),
    );
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" homerow: {} ", app.mode_name()),
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            header_text,
            Style::default()
                .fg(colors.text_pending())
                .bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout.header);

    let typing = TypingArea::new(session, app.theme);
    frame.render_widget(typing, ui::layout::padded(layout.main, 10));

    if let Some(progress_area) = layout.progress {
        let progress = ProgressBar::new(session.cursor(), session.target().len(), app.theme);
        frame.render_widget(progress, ui::layout::padded(progress_area, 10));
    }

    let footer = Paragraph::new(Line::from(Span::styled(
        " [Ctrl+R] New text  [Backspace] Delete  [Esc] Quit ",
        Style::default().fg(colors.text_pending()),
    )));
    frame.render_widget(footer, layout.footer);
}

fn render_result(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();

    if let Some(ref stats) = app.last_stats {
        let centered = ui::layout::centered_rect(60, 60, area);
        frame.render_widget(ratatui::widgets::Clear, centered);
        let dashboard = Dashboard::new(stats, app.theme);
        frame.render_widget(dashboard, centered);
    }
}
