use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::LoadError;
use crate::models::{Answer, Question};

/// The built-in "Find Your Red Zone" question bank.
pub fn default_questions() -> Vec<Question> {
    vec![
        Question::new(
            "When faced with a challenge, your first instinct is to:",
            vec![
                Answer::new("Analyze and strategize.", 20),
                Answer::new("Act immediately.", 30),
                Answer::new("Seek advice from others.", 10),
                Answer::new("Wait and see how things unfold.", 5),
            ],
        ),
        Question::new(
            "Your ideal weekend involves:",
            vec![
                Answer::new("High-energy activities and adventure.", 30),
                Answer::new("Relaxing with a book or movie.", 5),
                Answer::new("Working on a personal project.", 20),
                Answer::new("Socializing with a large group of friends.", 10),
            ],
        ),
        Question::new(
            "Which of these drives you the most?",
            vec![
                Answer::new("Legacy and impact.", 20),
                Answer::new("Passion and excitement.", 30),
                Answer::new("Stability and security.", 5),
                Answer::new("Knowledge and understanding.", 10),
            ],
        ),
        Question::new(
            "How do you handle pressure?",
            vec![
                Answer::new("I thrive under it.", 30),
                Answer::new("I manage it, but it's stressful.", 10),
                Answer::new("I try to avoid it.", 5),
                Answer::new("I break it down into smaller tasks.", 20),
            ],
        ),
    ]
}

pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let questions: Vec<Question> =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if questions.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    if let Some(index) = questions.iter().position(|q| q.answers.is_empty()) {
        return Err(LoadError::NoAnswers {
            path: path.to_path_buf(),
            index,
        });
    }

    debug!(count = questions.len(), path = %path.display(), "loaded question bank");
    Ok(questions)
}
