use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use red_zone_quiz::{Config, RedZone};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from (built-in bank if omitted)
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Directory for the streak/preferences store and the log file
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// File holding the in-progress quiz session
    #[arg(long)]
    session_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::resolve(args.questions, args.data_dir, args.session_file, args.verbose);

    init_logging(&config)?;

    let quiz = RedZone::from_config(&config).context("Failed to set up quiz")?;
    quiz.run().context("Error running quiz")?;
    Ok(())
}

/// The terminal belongs to the UI, so logs go to a file.
fn init_logging(config: &Config) -> Result<()> {
    if let Some(dir) = config.data_dir() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)
        .with_context(|| format!("Failed to open log file {}", config.log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_level())),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}
