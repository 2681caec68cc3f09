use std::time::{Duration, Instant};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::engine::QuizPhase;
use crate::game::{Game, GameEvent, SoundCue};
use crate::models::Question;
use crate::timer::TimerQueue;

/// Pause between answering and showing the next question.
pub const ANSWER_DELAY: Duration = Duration::from_millis(300);
/// How long an achievement badge stays on screen.
pub const BADGE_DURATION: Duration = Duration::from_secs(4);

const NAME_MAX_LENGTH: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Quiz,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deferred {
    ShowNextQuestion,
    DismissBadge(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    id: u64,
    pub text: String,
}

pub struct App {
    game: Game,
    screen: Screen,
    name_input: String,
    selected_option: usize,
    displayed_question: usize,
    awaiting_next: bool,
    badges: Vec<Badge>,
    next_badge_id: u64,
    timers: TimerQueue<Deferred>,
    result_scroll: usize,
}

impl App {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            screen: Screen::Welcome,
            name_input: String::new(),
            selected_option: 0,
            displayed_question: 0,
            awaiting_next: false,
            badges: Vec::new(),
            next_badge_id: 0,
            timers: TimerQueue::new(),
            result_scroll: 0,
        }
    }

    /// Run the startup checks and show whichever screen the saved state calls for.
    pub fn start(&mut self, today: NaiveDate, now: Instant) {
        self.game.startup(today);
        self.sync_screen();
        self.handle_events(now);
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    /// The question on screen. Lags the engine while the answer delay runs.
    pub fn displayed_question(&self) -> Option<(usize, &Question)> {
        self.game
            .engine()
            .questions()
            .get(self.displayed_question)
            .map(|q| (self.displayed_question, q))
    }

    pub fn is_awaiting_next(&self) -> bool {
        self.awaiting_next
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    pub fn name_input_push(&mut self, c: char) {
        if self.name_input.chars().count() < NAME_MAX_LENGTH {
            self.name_input.push(c);
        }
    }

    pub fn name_input_pop(&mut self) {
        self.name_input.pop();
    }

    pub fn submit_name(&mut self, now: Instant) {
        if self.screen != Screen::Welcome || !self.game.submit_name(&self.name_input) {
            return;
        }

        self.sync_screen();
        self.handle_events(now);
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    pub fn submit_answer(&mut self, now: Instant) {
        self.choose_option(self.selected_option, now);
    }

    /// Answer with option `index`. Ignored while the previous answer is settling.
    pub fn choose_option(&mut self, index: usize, now: Instant) {
        if self.screen != Screen::Quiz || self.awaiting_next {
            return;
        }
        if !self.game.choose_answer(index) {
            return;
        }

        self.selected_option = index;
        self.awaiting_next = true;
        self.timers.schedule(now, ANSWER_DELAY, Deferred::ShowNextQuestion);
        self.handle_events(now);
    }

    pub fn restart(&mut self) {
        self.game.restart();
        self.name_input.clear();
        self.result_scroll = 0;
        self.sync_screen();
    }

    pub fn toggle_mute(&mut self) {
        let muted = self.game.toggle_mute();
        debug!(muted, "toggled mute");
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self.game.engine().answer_history().len().saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    /// Fire every timer due at `now`.
    pub fn tick(&mut self, now: Instant) {
        for deferred in self.timers.take_due(now) {
            match deferred {
                Deferred::ShowNextQuestion => {
                    self.awaiting_next = false;
                    self.sync_screen();
                }
                Deferred::DismissBadge(id) => {
                    self.badges.retain(|badge| badge.id != id);
                }
            }
        }
    }

    fn option_count(&self) -> usize {
        self.displayed_question()
            .map(|(_, q)| q.answers.len())
            .unwrap_or(0)
    }

    /// Point the screen at the engine's current state.
    fn sync_screen(&mut self) {
        let engine = self.game.engine();
        self.screen = match engine.phase() {
            QuizPhase::NotStarted => Screen::Welcome,
            QuizPhase::InProgress => Screen::Quiz,
            QuizPhase::Completed => Screen::Results,
        };

        if self.screen != Screen::Results {
            self.displayed_question = engine.current_question_index();
            self.selected_option = 0;
        }
        if self.screen == Screen::Welcome {
            self.awaiting_next = false;
        }
    }

    fn handle_events(&mut self, now: Instant) {
        for event in self.game.drain_events() {
            match event {
                GameEvent::PointsAwarded { points, reason } => {
                    debug!(points, reason = %reason, "points awarded");
                }
                GameEvent::Achievement { label } => self.show_badge(label, now),
                GameEvent::Sound(cue) => self.play_sound(cue),
            }
        }
    }

    fn show_badge(&mut self, label: String, now: Instant) {
        let id = self.next_badge_id;
        self.next_badge_id += 1;
        self.badges.push(Badge {
            id,
            text: format!("🏆 ACHIEVEMENT: {} 🏆", label),
        });
        self.timers.schedule(now, BADGE_DURATION, Deferred::DismissBadge(id));
    }

    fn play_sound(&self, cue: SoundCue) {
        if self.game.is_muted() {
            return;
        }
        info!("Playing sound: {}", cue.as_str());
    }
}
