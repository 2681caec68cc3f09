//! Ties the quiz engine, streak tracking and persistence together.
//!
//! Every state change goes through [`Game`], which writes the session
//! snapshot afterwards and queues [`GameEvent`]s for the presenter.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::engine::{QuizEngine, QuizPhase};
use crate::error::StorageError;
use crate::models::{Question, RankTable};
use crate::storage::Storage;
use crate::streak::{self, StreakOutcome};

/// Sound effects the presenter may play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Start,
    Select,
    Achievement,
}

impl SoundCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Select => "select",
            Self::Achievement => "achievement",
        }
    }
}

/// Something the presenter should react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    PointsAwarded { points: u32, reason: String },
    Achievement { label: String },
    Sound(SoundCue),
}

pub struct Game {
    engine: QuizEngine,
    ranks: RankTable,
    storage: Storage,
    streak: u32,
    muted: bool,
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(questions: Vec<Question>, ranks: RankTable, storage: Storage) -> Self {
        let muted = storage.load_muted();
        Self {
            engine: QuizEngine::new(questions),
            ranks,
            storage,
            streak: 0,
            muted,
            events: Vec::new(),
        }
    }

    /// Resume any saved attempt, then check the daily streak.
    pub fn startup(&mut self, today: NaiveDate) -> StreakOutcome {
        self.resume_session();
        self.check_streak(today)
    }

    fn resume_session(&mut self) {
        let snapshot = match self.storage.load_snapshot() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => return,
            Err(e) => {
                warn!(error = %e, "could not parse saved quiz state");
                self.persist(|storage| storage.clear_snapshot());
                return;
            }
        };

        match self.engine.restore(snapshot) {
            Ok(()) => info!(
                user = self.engine.user_name(),
                question = self.engine.current_question_index(),
                "resumed saved session"
            ),
            Err(e) => {
                warn!(error = %e, "discarding saved session");
                self.persist(|storage| storage.clear_snapshot());
            }
        }
    }

    /// Evaluate today's visit, persist the new streak and pay any milestone bonus.
    pub fn check_streak(&mut self, today: NaiveDate) -> StreakOutcome {
        let prior = self.storage.load_streak();
        let outcome = streak::evaluate(today, prior.last_visit, prior.streak_count);
        debug!(?prior, ?outcome, "evaluated streak");

        self.persist(|storage| storage.save_streak(&outcome.state_for(today)));
        self.streak = outcome.streak;

        if let Some(bonus) = outcome.bonus_points() {
            self.dispatch_milestone(&outcome, bonus);
        }
        outcome
    }

    fn dispatch_milestone(&mut self, outcome: &StreakOutcome, bonus: u32) {
        let reason = format!("{}-Day Streak Bonus", outcome.streak);
        if self.engine.award_bonus(bonus) {
            self.add_points_event(bonus, reason);
            self.save_session();
        } else {
            debug!(bonus, "no active session, streak bonus not credited");
        }

        self.events.push(GameEvent::Achievement {
            label: outcome.badge_label(),
        });
        self.events.push(GameEvent::Sound(SoundCue::Achievement));
    }

    /// Start a new attempt. Blank names are ignored.
    pub fn submit_name(&mut self, name: &str) -> bool {
        if !self.engine.start(name) {
            return false;
        }

        info!(user = self.engine.user_name(), "quiz started");
        self.save_session();
        self.events.push(GameEvent::Sound(SoundCue::Start));
        true
    }

    /// Answer the current question with option `index`.
    pub fn choose_answer(&mut self, index: usize) -> bool {
        match self.engine.answer_points(index) {
            Some(points) => self.answer(points),
            None => false,
        }
    }

    pub fn answer(&mut self, points: u32) -> bool {
        let number = self.engine.current_question_index() + 1;
        if !self.engine.submit_answer(points) {
            return false;
        }

        self.add_points_event(points, format!("Q{} Answer", number));
        self.save_session();
        self.events.push(GameEvent::Sound(SoundCue::Select));

        if self.engine.phase() == QuizPhase::Completed {
            info!(
                user = self.engine.user_name(),
                points = self.engine.user_points(),
                rank = self.rank(),
                "quiz completed"
            );
        }
        true
    }

    pub fn restart(&mut self) {
        self.engine.reset();
        self.persist(|storage| storage.clear_snapshot());
        debug!("quiz restarted");
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        let muted = self.muted;
        self.persist(|storage| storage.save_muted(muted));
        self.muted
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    pub fn phase(&self) -> QuizPhase {
        self.engine.phase()
    }

    pub fn rank(&self) -> &str {
        self.ranks.rank_for(self.engine.user_points())
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn into_storage(self) -> Storage {
        self.storage
    }

    fn add_points_event(&mut self, points: u32, reason: String) {
        info!(points, reason = %reason, "+{} RZP", points);
        self.events.push(GameEvent::PointsAwarded { points, reason });
    }

    fn save_session(&mut self) {
        let snapshot = self.engine.snapshot();
        self.persist(|storage| storage.save_snapshot(&snapshot));
    }

    fn persist<F>(&mut self, write: F)
    where
        F: FnOnce(&mut Storage) -> Result<(), StorageError>,
    {
        if let Err(e) = write(&mut self.storage) {
            warn!(error = %e, "failed to persist state");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_questions;
    use crate::storage::{Scope, LAST_VISIT_KEY, SESSION_KEY, STREAK_COUNT_KEY};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, d).unwrap()
    }

    fn game_with(storage: Storage) -> Game {
        Game::new(default_questions(), RankTable::default(), storage)
    }

    fn storage_with_streak(last_visit: &str, count: &str) -> Storage {
        let mut storage = Storage::in_memory();
        storage.set(Scope::Durable, LAST_VISIT_KEY, last_visit).unwrap();
        storage.set(Scope::Durable, STREAK_COUNT_KEY, count).unwrap();
        storage
    }

    #[test]
    fn test_fresh_profile_first_visit() {
        let mut game = game_with(Storage::in_memory());
        let outcome = game.startup(day(10));

        assert_eq!(outcome.streak, 1);
        assert!(outcome.first_check_today);
        assert!(!outcome.crossed_milestone);
        assert!(game.drain_events().is_empty());
        assert_eq!(game.phase(), QuizPhase::NotStarted);
        assert_eq!(
            game.storage().get(Scope::Durable, LAST_VISIT_KEY).as_deref(),
            Some("2026-05-10")
        );
    }

    #[test]
    fn test_full_quiz_flow() {
        let mut game = game_with(Storage::in_memory());
        game.startup(day(10));

        assert!(!game.submit_name("  "));
        assert!(game.submit_name("Alex"));
        for option in [1, 1, 0, 1] {
            assert!(game.choose_answer(option));
        }

        assert_eq!(game.phase(), QuizPhase::Completed);
        assert_eq!(game.engine().user_points(), 30 + 5 + 20 + 10);
        assert_eq!(game.rank(), "Spark");
        assert!(!game.choose_answer(0));

        // A finished attempt only ends through restart.
        assert!(!game.submit_name("Blair"));
        assert_eq!(game.phase(), QuizPhase::Completed);
        assert_eq!(game.engine().user_name(), "Alex");
        assert_eq!(game.engine().user_points(), 65);

        let snapshot = game.storage().load_snapshot().unwrap().unwrap();
        assert_eq!(snapshot.user_name, "Alex");
        assert_eq!(snapshot.current_question_index, 4);
        assert_eq!(snapshot.answer_history, vec![30, 5, 20, 10]);
    }

    #[test]
    fn test_restart_clears_session_snapshot() {
        let mut game = game_with(Storage::in_memory());
        game.submit_name("Alex");
        game.answer(30);
        assert!(game.storage().get(Scope::Session, SESSION_KEY).is_some());

        game.restart();
        assert_eq!(game.phase(), QuizPhase::NotStarted);
        assert_eq!(game.engine().user_points(), 0);
        assert!(game.engine().answer_history().is_empty());
        assert_eq!(game.storage().get(Scope::Session, SESSION_KEY), None);
    }

    #[test]
    fn test_milestone_credits_resumed_session() {
        let mut game = game_with(storage_with_streak("2026-05-09", "2"));
        game.submit_name("Alex");
        game.answer(20);
        let storage = game.into_storage();

        let mut game = game_with(storage);
        let outcome = game.startup(day(10));

        assert!(outcome.crossed_milestone);
        assert_eq!(game.engine().user_name(), "Alex");
        assert_eq!(game.engine().user_points(), 50);
        assert_eq!(game.storage().load_snapshot().unwrap().unwrap().user_points, 50);

        let events = game.drain_events();
        assert!(events.contains(&GameEvent::PointsAwarded {
            points: 30,
            reason: "3-Day Streak Bonus".into()
        }));
        assert!(events.contains(&GameEvent::Achievement {
            label: "3-Day Streak!".into()
        }));
    }

    #[test]
    fn test_milestone_without_session_only_records_badge() {
        let mut game = game_with(storage_with_streak("2026-05-09", "6"));
        let outcome = game.startup(day(10));

        assert_eq!(outcome.streak, 7);
        assert_eq!(game.engine().user_points(), 0);
        let events = game.drain_events();
        assert_eq!(
            events,
            vec![
                GameEvent::Achievement {
                    label: "7-Day Streak!".into()
                },
                GameEvent::Sound(SoundCue::Achievement),
            ]
        );
    }

    #[test]
    fn test_same_day_restart_does_not_repeat_bonus() {
        let mut game = game_with(storage_with_streak("2026-05-09", "2"));
        game.startup(day(10));
        assert_eq!(game.drain_events().len(), 2);

        let mut game = game_with(game.into_storage());
        let outcome = game.startup(day(10));
        assert_eq!(outcome.streak, 3);
        assert!(!outcome.first_check_today);
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn test_malformed_snapshot_starts_fresh() {
        let mut storage = Storage::in_memory();
        storage.set(Scope::Session, SESSION_KEY, "not json at all").unwrap();
        let mut game = game_with(storage);
        game.startup(day(10));
        assert_eq!(game.phase(), QuizPhase::NotStarted);
        assert_eq!(game.storage().get(Scope::Session, SESSION_KEY), None);

        let mut storage = Storage::in_memory();
        storage
            .set(
                Scope::Session,
                SESSION_KEY,
                r#"{"userName":"Alex","userPoints":0,"currentQuestionIndex":3,"answerHistory":[]}"#,
            )
            .unwrap();
        let mut game = game_with(storage);
        game.startup(day(10));
        assert_eq!(game.phase(), QuizPhase::NotStarted);
        assert_eq!(game.storage().get(Scope::Session, SESSION_KEY), None);
    }

    #[test]
    fn test_mute_persists() {
        let mut game = game_with(Storage::in_memory());
        assert!(!game.is_muted());
        assert!(game.toggle_mute());

        let game = game_with(game.into_storage());
        assert!(game.is_muted());
    }
}
