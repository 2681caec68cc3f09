//! Two-scope key-value persistence.
//!
//! The durable scope outlives a session (streak, mute preference); the
//! session scope holds the in-progress attempt and is cleared on restart.

mod file;
mod memory;

use chrono::NaiveDate;

use crate::engine::QuizSnapshot;
use crate::error::StorageError;
use crate::streak::StreakState;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

pub const LAST_VISIT_KEY: &str = "lastVisitDate";
pub const STREAK_COUNT_KEY: &str = "streakCount";
pub const MUTED_KEY: &str = "muted";
pub const SESSION_KEY: &str = "quizState";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A string key-value backend.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Durable,
    Session,
}

pub struct Storage {
    durable: Box<dyn KeyValueStore>,
    session: Box<dyn KeyValueStore>,
}

impl Storage {
    pub fn new(durable: Box<dyn KeyValueStore>, session: Box<dyn KeyValueStore>) -> Self {
        Self { durable, session }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()), Box::new(MemoryStore::new()))
    }

    fn store(&self, scope: Scope) -> &dyn KeyValueStore {
        match scope {
            Scope::Durable => self.durable.as_ref(),
            Scope::Session => self.session.as_ref(),
        }
    }

    fn store_mut(&mut self, scope: Scope) -> &mut dyn KeyValueStore {
        match scope {
            Scope::Durable => self.durable.as_mut(),
            Scope::Session => self.session.as_mut(),
        }
    }

    pub fn get(&self, scope: Scope, key: &str) -> Option<String> {
        self.store(scope).get(key)
    }

    pub fn set(&mut self, scope: Scope, key: &str, value: &str) -> Result<(), StorageError> {
        self.store_mut(scope).set(key, value)
    }

    pub fn remove(&mut self, scope: Scope, key: &str) -> Result<(), StorageError> {
        self.store_mut(scope).remove(key)
    }

    /// Unparseable values read as absent (date) or zero (count).
    pub fn load_streak(&self) -> StreakState {
        let last_visit = self
            .get(Scope::Durable, LAST_VISIT_KEY)
            .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok());
        let streak_count = self
            .get(Scope::Durable, STREAK_COUNT_KEY)
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0);

        StreakState {
            last_visit,
            streak_count,
        }
    }

    pub fn save_streak(&mut self, state: &StreakState) -> Result<(), StorageError> {
        match state.last_visit {
            Some(date) => {
                let date = date.format(DATE_FORMAT).to_string();
                self.set(Scope::Durable, LAST_VISIT_KEY, &date)?;
            }
            None => self.remove(Scope::Durable, LAST_VISIT_KEY)?,
        }
        self.set(
            Scope::Durable,
            STREAK_COUNT_KEY,
            &state.streak_count.to_string(),
        )
    }

    pub fn load_muted(&self) -> bool {
        self.get(Scope::Durable, MUTED_KEY).as_deref() == Some("true")
    }

    pub fn save_muted(&mut self, muted: bool) -> Result<(), StorageError> {
        self.set(Scope::Durable, MUTED_KEY, if muted { "true" } else { "false" })
    }

    /// The saved attempt, if any. A stored value that does not parse is an error
    /// so the caller can discard it.
    pub fn load_snapshot(&self) -> Result<Option<QuizSnapshot>, serde_json::Error> {
        self.get(Scope::Session, SESSION_KEY)
            .map(|raw| serde_json::from_str(&raw))
            .transpose()
    }

    pub fn save_snapshot(&mut self, snapshot: &QuizSnapshot) -> Result<(), StorageError> {
        let json = serde_json::to_string(snapshot).map_err(|source| StorageError::Encode {
            path: SESSION_KEY.into(),
            source,
        })?;
        self.set(Scope::Session, SESSION_KEY, &json)
    }

    pub fn clear_snapshot(&mut self) -> Result<(), StorageError> {
        self.remove(Scope::Session, SESSION_KEY)
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::in_memory()
    }
}
