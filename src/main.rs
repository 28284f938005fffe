mod ui;

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::Path,
    time::Duration,
};
use tracing::{info, warn};
use typo::{
    app_dirs::AppDirs,
    config::{parse_word_count, Config, ConfigStore, FileConfigStore, WordCount},
    logging,
    runtime::{CrosstermEventSource, FixedTicker, Runner, Ticker, TypoEvent, TypoEventSource},
    typing_test::TypingTest,
    vocabulary::Vocabulary,
    word_generator::WordGenerator,
    TICK_RATE_MS,
};

/// minimal typing test with live wpm, accuracy, consistency and a per-word speed chart
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A minimal typing test: type the random words shown, then review wpm, raw wpm, accuracy, consistency and a chart of your speed word by word."
)]
pub struct Cli {
    /// number of words to use in test (10, 25, 50 or 100), defaults to the last one picked
    #[clap(short = 'w', long = "words", value_parser = parse_word_count)]
    words: Option<WordCount>,

    /// log filter directive written to the log file, e.g. `debug` (overrides TYPO_LOG)
    #[clap(long)]
    log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Typing,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct App {
    pub test: TypingTest,
    pub state: AppState,
    pub config: Config,
    store: FileConfigStore,
    generator: WordGenerator,
}

impl App {
    pub fn new(config: Config, store: FileConfigStore, mut generator: WordGenerator) -> Self {
        let prompt = generator.generate_prompt(config.word_count);

        Self {
            test: TypingTest::new(prompt, config.word_count),
            state: AppState::Typing,
            config,
            store,
            generator,
        }
    }

    pub fn restart(&mut self) {
        self.test.regenerate(&mut self.generator);
        self.state = AppState::Typing;
    }

    /// Applies a selector change and starts over with a prompt of the new size
    pub fn set_word_count(&mut self, word_count: WordCount) {
        if word_count == self.config.word_count {
            return;
        }

        info!(words = %word_count, "word count changed");
        self.config.word_count = word_count;
        if let Err(e) = self.store.save(&self.config) {
            warn!(error = %e, path = %self.store.path().display(), "could not save config");
        }

        self.test.set_word_count(word_count, &mut self.generator);
        self.state = AppState::Typing;
    }

    pub fn on_tick(&mut self) {
        self.test.on_tick();
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Control {
        match key.code {
            KeyCode::Esc => return Control::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Control::Quit
            }
            KeyCode::Tab => self.set_word_count(self.config.word_count.next()),
            KeyCode::BackTab => self.set_word_count(self.config.word_count.prev()),
            code => match self.state {
                AppState::Typing if !self.test.has_finished() => match code {
                    KeyCode::Char(c) => {
                        self.test.write(c);
                        if self.test.has_finished() {
                            self.state = AppState::Results;
                        }
                    }
                    KeyCode::Backspace => self.test.backspace(),
                    _ => {}
                },
                // results were closed, the finished text stays frozen
                AppState::Typing => match code {
                    KeyCode::Char('r') => self.restart(),
                    KeyCode::Enter => self.state = AppState::Results,
                    _ => {}
                },
                AppState::Results => match code {
                    KeyCode::Char('r') => self.restart(),
                    KeyCode::Char('c') => self.state = AppState::Typing,
                    _ => {}
                },
            },
        }

        Control::Continue
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    init_logging(&AppDirs::log_path(), cli.log_level.as_deref());

    let store = FileConfigStore::new();
    let mut config = store.load();
    if let Some(words) = cli.words {
        config.word_count = words;
    }

    let generator = WordGenerator::new(Vocabulary::english()?);
    let mut app = App::new(config, store, generator);

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );
    let result = start_tui(&mut terminal, &mut app, &runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Logging is best effort, a missing log file never stops the test
fn init_logging(path: &Path, directive: Option<&str>) -> bool {
    match logging::init(path, directive) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("typo: logging disabled, {}: {e}", path.display());
            false
        }
    }
}

fn start_tui<B: Backend, E: TypoEventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E, T>,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| ui::draw(app, f))?;

        match runner.step() {
            TypoEvent::Tick => app.on_tick(),
            TypoEvent::Resize => {}
            TypoEvent::Key(key) => {
                if app.on_key(key) == Control::Quit {
                    break;
                }
            }
            TypoEvent::Closed => {
                warn!("terminal input closed, quitting");
                break;
            }
        }
    }

    app.test.teardown();
    info!("bye");

    Ok(())
}
