//! # red-zone-quiz
//!
//! A terminal "Find Your Red Zone" personality quiz with daily streaks,
//! milestone bonuses and point-based ranks.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use red_zone_quiz::{Config, QuizError, RedZone};
//!
//! fn main() -> Result<(), QuizError> {
//!     let config = Config::resolve(None, None, None, false);
//!     let quiz = RedZone::from_config(&config)?;
//!     quiz.run()?;
//!     Ok(())
//! }
//! ```

mod app;
mod config;
mod data;
mod engine;
mod error;
mod game;
mod models;
pub mod storage;
mod streak;
pub mod terminal;
mod timer;
mod ui;

use std::time::{Duration, Instant};

use chrono::{NaiveDate, Utc};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::info;

pub use app::{App, Badge, Screen, ANSWER_DELAY, BADGE_DURATION};
pub use config::Config;
pub use data::{default_questions, load_questions_from_json};
pub use engine::{QuizEngine, QuizPhase, QuizSnapshot, SnapshotError};
pub use error::{LoadError, QuizError, RankTableError, StorageError};
pub use game::{Game, GameEvent, SoundCue};
pub use models::{Answer, Question, RankEntry, RankTable};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, Scope, Storage};
pub use streak::{evaluate, StreakOutcome, StreakState, STREAK_MILESTONES};
pub use timer::TimerQueue;

/// Longest the event loop sleeps when no timer is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// A quiz instance that can be run in the terminal.
pub struct RedZone {
    game: Game,
}

impl RedZone {
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    /// Build a quiz backed by the stores and question bank named in `config`.
    pub fn from_config(config: &Config) -> Result<Self, QuizError> {
        let questions = match &config.questions_path {
            Some(path) => load_questions_from_json(path)?,
            None => default_questions(),
        };

        let storage = Storage::new(
            Box::new(JsonFileStore::open(&config.durable_path)),
            Box::new(JsonFileStore::open(&config.session_path)),
        );

        Ok(Self::new(Game::new(questions, RankTable::default(), storage)))
    }

    /// Run the quiz in the terminal until the user quits.
    pub fn run(self) -> Result<(), QuizError> {
        let mut app = App::new(self.game);
        app.start(today(), Instant::now());

        let mut terminal = terminal::TerminalGuard::enter()?;
        run_event_loop(&mut terminal, &mut app)
    }
}

/// Streak days follow the UTC calendar.
fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        let timeout = app
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .map_or(IDLE_POLL, |wait| wait.min(IDLE_POLL));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_input(app, key) {
                    break;
                }
            }
        }

        app.tick(Instant::now());
    }

    info!("quiz closed");
    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    if key.code == KeyCode::Tab {
        app.toggle_mute();
        return false;
    }

    match app.screen() {
        Screen::Welcome => handle_welcome_input(app, key.code),
        Screen::Quiz => handle_quiz_input(app, key.code),
        Screen::Results => handle_result_input(app, key.code),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => app.submit_name(Instant::now()),
        KeyCode::Backspace => app.name_input_pop(),
        KeyCode::Char(c) => app.name_input_push(c),
        KeyCode::Esc => return true,
        _ => {}
    }
    false
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer(Instant::now()),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.choose_option(index, Instant::now());
        }
        KeyCode::Char('m') | KeyCode::Char('M') => app.toggle_mute(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
        _ => {}
    }
    false
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        KeyCode::Char('m') | KeyCode::Char('M') => app.toggle_mute(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
        _ => {}
    }
    false
}
