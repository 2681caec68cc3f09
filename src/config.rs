//! Runtime configuration resolved from the command line.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "red-zone";
const DURABLE_FILE: &str = "profile.json";
const SESSION_FILE: &str = "session.json";
const LOG_FILE: &str = "red-zone.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Custom question bank. The built-in bank is used when absent.
    pub questions_path: Option<PathBuf>,
    /// Durable store: streak and mute preference.
    pub durable_path: PathBuf,
    /// Session store: the in-progress attempt. Defaults to the OS temp dir,
    /// which typically lasts until reboot.
    pub session_path: PathBuf,
    pub log_path: PathBuf,
    pub verbose: bool,
}

impl Config {
    /// Resolve paths, falling back to the platform data dir and the OS temp dir.
    pub fn resolve(
        questions_path: Option<PathBuf>,
        data_dir: Option<PathBuf>,
        session_file: Option<PathBuf>,
        verbose: bool,
    ) -> Self {
        let data_dir = data_dir.unwrap_or_else(default_data_dir);
        let session_path =
            session_file.unwrap_or_else(|| std::env::temp_dir().join(APP_DIR).join(SESSION_FILE));

        Self {
            questions_path,
            durable_path: data_dir.join(DURABLE_FILE),
            session_path,
            log_path: data_dir.join(LOG_FILE),
            verbose,
        }
    }

    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn data_dir(&self) -> Option<&Path> {
        self.durable_path.parent()
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}
