//! End-to-end flows over file-backed stores.

use chrono::NaiveDate;
use red_zone_quiz::storage::SESSION_KEY;
use red_zone_quiz::{
    default_questions, Game, GameEvent, JsonFileStore, QuizPhase, RankTable, Scope, Storage,
};
use tempfile::TempDir;

struct Profile {
    _dir: TempDir,
    durable: std::path::PathBuf,
    session: std::path::PathBuf,
}

impl Profile {
    fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let durable = dir.path().join("profile.json");
        let session = dir.path().join("session.json");
        Self {
            _dir: dir,
            durable,
            session,
        }
    }

    /// Open a new game over the same files, as a relaunch would.
    fn launch(&self) -> Game {
        let storage = Storage::new(
            Box::new(JsonFileStore::open(&self.durable)),
            Box::new(JsonFileStore::open(&self.session)),
        );
        Game::new(default_questions(), RankTable::default(), storage)
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, d).unwrap()
}

#[test]
fn test_streak_builds_across_launches() {
    let profile = Profile::new();

    let mut streaks = Vec::new();
    let mut achievements = Vec::new();
    for d in [1, 2, 3, 3, 4, 7] {
        let mut game = profile.launch();
        let outcome = game.startup(day(d));
        streaks.push(outcome.streak);
        achievements.extend(game.drain_events().into_iter().filter_map(|e| match e {
            GameEvent::Achievement { label } => Some(label),
            _ => None,
        }));
    }

    assert_eq!(streaks, vec![1, 2, 3, 3, 4, 1]);
    assert_eq!(achievements, vec!["3-Day Streak!".to_string()]);
}

#[test]
fn test_interrupted_quiz_resumes() {
    let profile = Profile::new();

    let mut game = profile.launch();
    game.startup(day(1));
    assert!(game.submit_name("Alex"));
    assert!(game.answer(30));
    assert!(game.answer(5));
    drop(game);

    let mut game = profile.launch();
    game.startup(day(1));
    assert_eq!(game.phase(), QuizPhase::InProgress);
    assert_eq!(game.engine().user_name(), "Alex");
    assert_eq!(game.engine().current_question_index(), 2);

    assert!(game.answer(20));
    assert!(game.answer(10));
    assert_eq!(game.phase(), QuizPhase::Completed);
    assert_eq!(game.engine().user_points(), 65);
    assert_eq!(game.rank(), "Spark");

    game.restart();
    assert_eq!(game.storage().get(Scope::Session, SESSION_KEY), None);

    let mut game = profile.launch();
    game.startup(day(1));
    assert_eq!(game.phase(), QuizPhase::NotStarted);
}

#[test]
fn test_corrupted_session_file_is_ignored() {
    let profile = Profile::new();
    std::fs::write(&profile.session, "garbage").unwrap();

    let mut game = profile.launch();
    game.startup(day(1));
    assert_eq!(game.phase(), QuizPhase::NotStarted);
    assert!(game.submit_name("Alex"));
}

#[test]
fn test_unparseable_snapshot_is_removed_from_disk() {
    let profile = Profile::new();
    std::fs::write(&profile.session, r#"{"quizState": "not json"}"#).unwrap();

    let mut game = profile.launch();
    game.startup(day(1));
    assert_eq!(game.phase(), QuizPhase::NotStarted);
    assert_eq!(game.storage().get(Scope::Session, SESSION_KEY), None);
    drop(game);

    let contents = std::fs::read_to_string(&profile.session).unwrap();
    assert!(!contents.contains(SESSION_KEY));
}

#[test]
fn test_mute_survives_relaunch() {
    let profile = Profile::new();
    let mut game = profile.launch();
    game.toggle_mute();
    drop(game);

    assert!(profile.launch().is_muted());
}
