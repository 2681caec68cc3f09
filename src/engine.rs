//! Quiz progression: position, score and answer history.

use serde::{Deserialize, Serialize};

use crate::models::Question;

/// Where the active attempt stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// No name submitted yet.
    NotStarted,
    /// Answering questions.
    InProgress,
    /// Every question answered. Terminal until reset.
    Completed,
}

/// Serialized form of an attempt, kept in the session-scoped store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSnapshot {
    pub user_name: String,
    pub user_points: u32,
    pub current_question_index: usize,
    #[serde(alias = "answers")]
    pub answer_history: Vec<u32>,
}

/// Why a snapshot could not be restored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot has no user name")]
    MissingName,

    #[error("question index {index} is past the last question ({count})")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("answer history has {history} entries but index is {index}")]
    HistoryMismatch { history: usize, index: usize },
}

pub struct QuizEngine {
    questions: Vec<Question>,
    user_name: String,
    user_points: u32,
    current_question_index: usize,
    answer_history: Vec<u32>,
}

impl QuizEngine {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            user_name: String::new(),
            user_points: 0,
            current_question_index: 0,
            answer_history: Vec::new(),
        }
    }

    pub fn phase(&self) -> QuizPhase {
        if self.user_name.is_empty() {
            QuizPhase::NotStarted
        } else if self.current_question_index >= self.questions.len() {
            QuizPhase::Completed
        } else {
            QuizPhase::InProgress
        }
    }

    /// Begin a fresh attempt. Only valid when `NotStarted`; blank names and
    /// calls in any other phase are ignored and return false.
    pub fn start(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.phase() != QuizPhase::NotStarted {
            return false;
        }

        self.user_name = name.to_string();
        self.user_points = 0;
        self.current_question_index = 0;
        self.answer_history.clear();
        true
    }

    /// The question awaiting an answer, or `None` outside `InProgress`.
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase() {
            QuizPhase::InProgress => self.questions.get(self.current_question_index),
            _ => None,
        }
    }

    /// Points for option `index` of the current question.
    pub fn answer_points(&self, index: usize) -> Option<u32> {
        self.current_question()
            .and_then(|q| q.answers.get(index))
            .map(|answer| answer.points)
    }

    /// Record an answer worth `points`. Returns false if no question is open.
    pub fn submit_answer(&mut self, points: u32) -> bool {
        if self.phase() != QuizPhase::InProgress {
            return false;
        }

        self.user_points = self.user_points.saturating_add(points);
        self.answer_history.push(points);
        self.current_question_index += 1;
        true
    }

    /// Add bonus points to a started attempt. History and position are untouched.
    pub fn award_bonus(&mut self, points: u32) -> bool {
        if self.phase() == QuizPhase::NotStarted {
            return false;
        }

        self.user_points = self.user_points.saturating_add(points);
        true
    }

    pub fn reset(&mut self) {
        self.user_name.clear();
        self.user_points = 0;
        self.current_question_index = 0;
        self.answer_history.clear();
    }

    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot {
            user_name: self.user_name.clone(),
            user_points: self.user_points,
            current_question_index: self.current_question_index,
            answer_history: self.answer_history.clone(),
        }
    }

    /// Resume from a saved snapshot. On error the engine is left untouched.
    pub fn restore(&mut self, snapshot: QuizSnapshot) -> Result<(), SnapshotError> {
        if snapshot.user_name.trim().is_empty() {
            return Err(SnapshotError::MissingName);
        }

        let count = self.questions.len();
        if snapshot.current_question_index > count {
            return Err(SnapshotError::IndexOutOfRange {
                index: snapshot.current_question_index,
                count,
            });
        }

        if snapshot.answer_history.len() != snapshot.current_question_index {
            return Err(SnapshotError::HistoryMismatch {
                history: snapshot.answer_history.len(),
                index: snapshot.current_question_index,
            });
        }

        self.user_name = snapshot.user_name;
        self.user_points = snapshot.user_points;
        self.current_question_index = snapshot.current_question_index;
        self.answer_history = snapshot.answer_history;
        Ok(())
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn user_points(&self) -> u32 {
        self.user_points
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    pub fn answer_history(&self) -> &[u32] {
        &self.answer_history
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }
}
