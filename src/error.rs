//! Error types shared across the crate.

use std::io;
use std::path::PathBuf;

/// Error reading or writing a key-value store backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode store {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Error loading a question bank.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} must contain at least one question")]
    Empty(PathBuf),

    #[error("question {index} in {path} has no answers")]
    NoAnswers { path: PathBuf, index: usize },
}

/// A rank table that would leave some point total without a label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RankTableError {
    #[error("rank table is empty")]
    Empty,

    #[error("first rank threshold must be 0, got {0}")]
    FirstThresholdNotZero(u32),

    #[error("rank thresholds must be strictly increasing (entry {index})")]
    NotIncreasing { index: usize },
}

/// Error type for running the quiz.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    /// Error loading questions from file.
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),

    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
